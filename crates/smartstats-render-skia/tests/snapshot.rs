// File: crates/smartstats-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic bar chart to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use smartstats_core::{ChartSpec, ChartType, RenderOptions};
use smartstats_core::table::Record;
use smartstats_render_skia::SkiaRenderer;

fn render_bytes() -> Vec<u8> {
    let rows: Vec<Record> = serde_json::json!([
        {"name": "North", "value": 12},
        {"name": "South", "value": 7},
        {"name": "East", "value": 19},
        {"name": "West", "value": 3}
    ])
    .as_array()
    .unwrap()
    .iter()
    .map(|r| r.as_object().unwrap().clone())
    .collect();
    let spec = ChartSpec::new("", ChartType::Bar, &rows, Record::new());

    let mut opts = RenderOptions::export();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    SkiaRenderer::new().render_png(&spec, &opts).expect("render png")
}

#[test]
fn golden_bar_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("bar_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
