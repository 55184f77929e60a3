// File: crates/smartstats-core/src/card.rs
// Summary: Chart card lifecycle: interactive render on data arrival, independent raster export path.

use tracing::{info, warn};

use crate::chart::{ChartSpec, RenderOptions};
use crate::error::RenderError;
use crate::geometry::{compute_geometry, Geometry};
use crate::paint::paint;
use crate::svg::SvgSurface;

/// Offscreen rasterizer used for image export. Returns encoded PNG bytes.
pub trait RasterBackend {
    fn rasterize(&self, geometry: &Geometry, opts: &RenderOptions) -> Result<Vec<u8>, RenderError>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum CardState {
    Loading,
    Rendered { svg: String, geometry: Geometry },
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExportState {
    Idle,
    Rasterizing,
    Done { png: Vec<u8> },
    Failed { error: RenderError },
}

/// One chart card. Cards share nothing, so a failing card never affects its siblings.
#[derive(Clone, Debug)]
pub struct ChartCard {
    spec: Option<ChartSpec>,
    state: CardState,
    export: ExportState,
}

impl Default for ChartCard {
    fn default() -> Self { Self::new() }
}

impl ChartCard {
    pub fn new() -> Self {
        Self { spec: None, state: CardState::Loading, export: ExportState::Idle }
    }

    /// Card for `spec`, already rendered on the interactive surface.
    pub fn with_spec(spec: ChartSpec, opts: &RenderOptions) -> Self {
        let mut card = Self::new();
        card.set_data(spec, opts);
        card
    }

    /// Data arrived: always render the interactive surface. Resets any previous export.
    pub fn set_data(&mut self, spec: ChartSpec, opts: &RenderOptions) {
        let opts = spec.render_options(*opts);
        let geometry = compute_geometry(spec.chart_type, &spec.title, &spec.points, &opts);
        let mut surface = SvgSurface::new(geometry.frame.width, geometry.frame.height);
        paint(&geometry, &opts.theme, &mut surface);
        self.state = CardState::Rendered { svg: surface.finish(), geometry };
        self.export = ExportState::Idle;
        self.spec = Some(spec);
    }

    pub fn state(&self) -> &CardState { &self.state }
    pub fn export_state(&self) -> &ExportState { &self.export }
    pub fn spec(&self) -> Option<&ChartSpec> { self.spec.as_ref() }

    pub fn svg(&self) -> Option<&str> {
        match &self.state {
            CardState::Rendered { svg, .. } => Some(svg),
            CardState::Loading => None,
        }
    }

    /// Index of the interactive mark under the pointer.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        match &self.state {
            CardState::Rendered { geometry, .. } => geometry.hit_test(x, y),
            CardState::Loading => None,
        }
    }

    pub fn point_count(&self) -> usize {
        self.spec.as_ref().map_or(0, ChartSpec::point_count)
    }

    /// Uppercase chart type tag for the card header.
    pub fn badge(&self) -> Option<String> {
        self.spec.as_ref().map(|s| s.chart_type.badge())
    }

    /// Re-derive geometry at export resolution and rasterize it.
    /// Empty data and empty encoder output end in `Failed`, never in a blank image.
    pub fn export_png(&mut self, backend: &dyn RasterBackend, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        self.export = ExportState::Rasterizing;
        match self.rasterize(backend, opts) {
            Ok(png) => {
                info!(bytes = png.len(), "chart exported as PNG");
                self.export = ExportState::Done { png: png.clone() };
                Ok(png)
            }
            Err(error) => {
                warn!(%error, "chart export failed");
                self.export = ExportState::Failed { error: error.clone() };
                Err(error)
            }
        }
    }

    fn rasterize(&self, backend: &dyn RasterBackend, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let spec = self.spec.as_ref().ok_or(RenderError::NoData)?;
        let opts = spec.render_options(*opts);
        let geometry = compute_geometry(spec.chart_type, &spec.title, &spec.points, &opts);
        if geometry.is_empty() {
            return Err(RenderError::NoData);
        }
        let png = backend.rasterize(&geometry, &opts)?;
        if png.is_empty() {
            return Err(RenderError::EmptyImage);
        }
        Ok(png)
    }
}
