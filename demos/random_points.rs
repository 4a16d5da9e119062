//! Triangulates random points and writes the result as SVG.
//!
//! Run with: cargo run --example random_points -- --count 200 --out delaunay.svg

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use triangulum::collection::range;
use triangulum::render::{Drawer, Entity, SvgDrawer};
use triangulum::triangulation::{triangulate_in_batches, TriangulateOptions};
use triangulum::{Aabb2, Vec2};

#[derive(Parser)]
#[command(name = "random_points")]
#[command(about = "Delaunay triangulation of random points, rendered to SVG")]
struct Args {
    /// Number of random points
    #[arg(long, default_value_t = 100)]
    count: usize,

    /// Seed for the point generator
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Surface width in pixels
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Surface height in pixels
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Fixed margin between the points and the seed quad; scales with the
    /// point spread when omitted
    #[arg(long)]
    gap: Option<f64>,

    /// Strip triangles touching the seed quad
    #[arg(long)]
    clean: bool,

    /// Also draw circumcircles
    #[arg(long)]
    circles: bool,

    /// Points inserted between progress reports
    #[arg(long, default_value_t = 25)]
    batch: usize,

    /// Output file
    #[arg(long, default_value = "delaunay.svg")]
    out: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = Args::parse();

    // Keep points inside the visible surface, centred on the origin.
    let half = Vec2::new(args.width, args.height).scale(0.4);
    let area = Aabb2::try_new(-half, half).context("surface size must be non-negative")?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let points: Vec<Vec2<f64>> = range(0, args.count)
        .map(|_| Vec2::random_in(&mut rng, &area))
        .collect();

    let mut options = TriangulateOptions::default().with_clean(args.clean);
    if let Some(gap) = args.gap {
        options = options.with_gap(gap);
    }

    let triangles = triangulate_in_batches(&points, &options, args.batch, |batch, state| {
        tracing::info!(batch, triangles = state.len(), "progress");
    })
    .context("triangulation failed")?;

    tracing::info!(points = points.len(), triangles = triangles.len(), "done");

    let mut svg = SvgDrawer::new(args.width, args.height);
    svg.draw(Entity::Bounds(area), "#cccccc");
    if args.circles {
        svg.draw_circumcircles(&triangles, "#9ecae1");
    }
    svg.draw_triangles(&triangles, "#08519c");
    svg.draw_points(&points, "#e6550d");

    std::fs::write(&args.out, svg.finish())
        .with_context(|| format!("writing {}", args.out))?;
    tracing::info!(out = %args.out, "wrote svg");

    Ok(())
}
