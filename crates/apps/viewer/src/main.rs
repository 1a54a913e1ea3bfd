use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use demography::dataset::DemographicDataset;
use formats::boundaries::BoundarySet;
use formats::demographic::DemographicTable;
use foundation::time::Time;
use interaction::ViewMode;
use render::{RenderSession, SessionConfig, Viewport};
use symbology::{Metric, ScaleKind};
use viewer::svg::scene_to_svg;

/// Renders one frame of the demographic globe to an SVG file.
#[derive(Parser)]
#[command(name = "viewer")]
struct Args {
    /// GeoJSON FeatureCollection of country boundaries.
    #[arg(long)]
    boundaries: PathBuf,

    /// Demographic dataset CSV (UN WPP export).
    #[arg(long)]
    demographics: PathBuf,

    /// Year to visualize; defaults to the dataset's latest year.
    #[arg(long)]
    year: Option<i32>,

    /// population, density, sex-ratio, or median-age.
    #[arg(long, default_value = "population")]
    metric: Metric,

    /// 3d (orthographic globe) or 2d (equirectangular map).
    #[arg(long, default_value = "3d")]
    mode: ViewMode,

    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    #[arg(long, default_value_t = 700.0)]
    height: f64,

    /// Logarithmic population scale instead of linear.
    #[arg(long)]
    log_scale: bool,

    /// Seconds of auto-rotation to simulate before the frame is taken.
    #[arg(long, default_value_t = 0.0)]
    spin: f64,

    #[arg(long, default_value = "frame.svg")]
    out: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main(Args::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let geo_text = fs::read_to_string(&args.boundaries)?;
    let boundaries = BoundarySet::from_geojson_str(&geo_text)?;
    info!(features = boundaries.len(), "boundaries loaded");

    let csv_text = fs::read_to_string(&args.demographics)?;
    let table = DemographicTable::from_csv_str(&csv_text)?;
    let dataset = DemographicDataset::new(table);
    info!(rows = dataset.row_count(), "demographics loaded");

    let config = SessionConfig {
        metric: args.metric,
        year: args.year,
        scale_kind: if args.log_scale {
            ScaleKind::Log
        } else {
            ScaleKind::Linear
        },
        ..SessionConfig::default()
    };

    let mut session = RenderSession::init(
        boundaries,
        dataset,
        Viewport::new(args.width, args.height),
        config,
    )?;

    if args.mode != session.mode() {
        session.toggle_view_mode();
    }

    let mut now = Time::ZERO;
    if args.spin > 0.0 {
        // First pass starts the rotation ticker; advancing applies it.
        session.render(now);
        now = now.advanced_by(args.spin);
        let outcome = session.advance(now);
        info!(rotated = outcome.rotated, spin_s = args.spin, "simulated rotation");
    }

    let paint = session.render(now);
    info!(
        year = session.year(),
        metric = %session.metric(),
        mode = %session.mode(),
        painted = paint.features.len(),
        "frame rendered"
    );

    let svg = scene_to_svg(&paint, session.viewport());
    fs::write(&args.out, svg)?;
    info!(out = %args.out.display(), "frame written");

    session.dispose();
    Ok(())
}
