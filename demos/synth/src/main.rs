//! synth: generate synthetic micromobility trips.
//!
//! Loads a road network from `nodes.csv` / `edges.csv` (or builds a street
//! grid), samples shortest-path routes, densifies them into timed GPS traces
//! and writes:
//!
//! - `trips.csv`, `trip_points.csv` (and `trip_points.parquet` with the
//!   `parquet` feature)
//! - `trips.geojson`: the animated trip layer
//!
//! ```text
//! synth --sample-size 500 --seed 42 --date 2024-05-01 --out output/synth
//! synth --nodes nodes.csv --edges edges.csv --config run.json
//! RUST_LOG=debug synth
//! ```

mod network;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Parser;

use mt_output::{CsvWriter, TripWriter, write_trip_layer};
use mt_pipeline::{Pipeline, PipelineConfig};
use mt_spatial::load_network_csv;

use network::build_grid;

#[derive(Parser, Debug)]
#[command(name = "synth", version, about = "Generate synthetic micromobility trips")]
struct Args {
    /// Node table (`id,x,y`).  Requires --edges.
    #[arg(long, requires = "edges")]
    nodes: Option<PathBuf>,

    /// Edge table (`u,v,travel_time`).  Requires --nodes.
    #[arg(long, requires = "nodes")]
    edges: Option<PathBuf>,

    /// Side length of the synthetic grid used when no network is given.
    #[arg(long, default_value_t = 20)]
    grid_size: usize,

    /// Pipeline config JSON.  Flags below override its fields.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short = 'n', long)]
    sample_size: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    /// Travel speed in km/h.
    #[arg(long)]
    speed: Option<f64>,

    /// Spacing between trace points in km.
    #[arg(long)]
    delta: Option<f64>,

    /// Day the trips take place on, `YYYY-MM-DD` (UTC).  Defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,

    #[arg(short, long, default_value = "output/synth")]
    out: PathBuf,

    /// Print the resolved config as JSON and exit.
    #[arg(long)]
    print_config: bool,

    /// Show debug messages.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<PipelineConfig> {
        let mut cfg = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                PipelineConfig::from_json(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => PipelineConfig::default(),
        };
        if let Some(n) = self.sample_size {
            cfg.sample_size = n;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if let Some(v) = self.speed {
            cfg.speed_kmh = v;
        }
        if let Some(d) = self.delta {
            cfg.distance_delta_km = d;
        }
        if self.date.is_some() {
            cfg.date = self.date;
        }
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    let config = args.resolve_config()?;
    if args.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }
    let pipeline = Pipeline::from_config(&config).context("invalid pipeline config")?;

    // 1. Road network.
    let network = match (&args.nodes, &args.edges) {
        (Some(nodes), Some(edges)) => load_network_csv(nodes, edges)
            .with_context(|| format!("loading {} / {}", nodes.display(), edges.display()))?,
        _ => {
            if args.grid_size < 2 {
                bail!("--grid-size must be at least 2, got {}", args.grid_size);
            }
            log::info!("building {0}×{0} synthetic grid", args.grid_size);
            build_grid(args.grid_size)
        }
    };
    log::info!("road network: {} nodes, {} edges", network.node_count(), network.edge_count());

    // 2. Sample and transform.
    let t0 = Instant::now();
    let out = pipeline.run(&network)?;
    log::info!(
        "generated {} trips from {} routes in {:.3} s",
        out.trips.len(),
        out.routes.len(),
        t0.elapsed().as_secs_f64()
    );
    if out.report.skipped() > 0 {
        log::warn!(
            "skipped {} routes ({} degenerate, {} bad geometry, {} beyond partition quotas)",
            out.report.skipped(),
            out.report.skipped_degenerate,
            out.report.skipped_geometry,
            out.report.skipped_unscheduled
        );
    }

    // 3. Export.
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    let mut csv = CsvWriter::new(&args.out)?;
    csv.write_trips(&out.trips)?;
    csv.finish()?;

    #[cfg(feature = "parquet")]
    {
        let mut pq = mt_output::ParquetWriter::new(&args.out)?;
        pq.write_trips(&out.trips)?;
        pq.finish()?;
    }

    write_trip_layer(&args.out.join("trips.geojson"), &out.trips)?;

    println!("{:<8} {:<6} {:>10} {:>7} {:>12}", "Trip", "Part", "Length km", "Points", "Duration s");
    println!("{}", "-".repeat(47));
    for trip in out.trips.iter().take(10) {
        println!(
            "{:<8} {:<6} {:>10.3} {:>7} {:>12}",
            trip.id.0,
            trip.partition,
            trip.length_km(),
            trip.len(),
            trip.end_time() - trip.start_time(),
        );
    }
    if out.trips.len() > 10 {
        println!("… {} more in {}", out.trips.len() - 10, args.out.display());
    }

    Ok(())
}
