// File: crates/smartstats-cli/src/commands/chart.rs
// Summary: `chart`: normalize a table into a chart and write the requested exports.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::Utc;
use tracing::{error, info};

use smartstats_core::export::{chart_json, export_file_name, records_csv, text_report, write_export};
use smartstats_core::{parse_table, profile_table, render_svg, ChartSpec, ChartType, Error};
use smartstats_render_skia::SkiaRenderer;

use crate::cli::{ChartArgs, Format};
use crate::config::AppConfig;
use super::{default_title, read_input};

/// Write every requested format. A failing format is reported and skipped; the others still land.
pub fn run(cfg: &AppConfig, args: &ChartArgs, out: &mut dyn Write) -> Result<Vec<PathBuf>> {
    let raw = read_input(&args.input)?;
    let table = parse_table(&raw);
    let title = args.title.clone().unwrap_or_else(|| default_title(&args.input));
    let spec = ChartSpec::from_table(title, ChartType::parse(&args.chart_type), &table);
    info!(chart_type = %spec.chart_type, points = spec.point_count(), "chart prepared");

    let dir = args.out.clone().unwrap_or_else(|| cfg.output_dir.clone());
    let mut written = Vec::new();
    let mut failed = 0usize;
    let mut renderer: Option<SkiaRenderer> = None;

    for format in &args.formats {
        let bytes: Result<Vec<u8>, Error> = match format {
            Format::Svg => Ok(render_svg(&spec, &cfg.interactive_options()).into_bytes()),
            Format::Png => renderer
                .get_or_insert_with(SkiaRenderer::new)
                .render_png(&spec, &cfg.export_options())
                .map_err(Error::from),
            Format::Json => chart_json(&spec, Utc::now()).map(String::into_bytes).map_err(Error::from),
            Format::Csv => records_csv(&spec.data).map(String::into_bytes).map_err(Error::from),
            Format::Txt => Ok(text_report(&profile_table(&table), Utc::now()).into_bytes()),
        };
        let name = export_file_name(&spec.title, format.extension());
        match bytes.and_then(|b| write_export(&dir, &name, &b).map_err(Error::from)) {
            Ok(path) => {
                writeln!(out, "Wrote {}", path.display())?;
                written.push(path);
            }
            Err(e) => {
                failed += 1;
                error!(format = format.extension(), error = %e, "export failed");
                writeln!(out, "Failed to export {name}: {e}")?;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} exports failed", args.formats.len());
    }
    Ok(written)
}
