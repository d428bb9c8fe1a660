mod snapshot;

use clap::Parser;
use heat_core::{DEFAULT_ALPHA, DEFAULT_LENGTH, RunReport, Simulation, SimulationParams, save_dat};
use serde::Serialize;
use snapshot::SnapshotWriter;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of rows (Nx)
    nx: usize,

    /// Number of columns (Ny)
    ny: usize,

    /// Number of time steps (Nt)
    nt: usize,

    /// Thermal diffusivity
    #[arg(long, default_value_t = DEFAULT_ALPHA)]
    alpha: f64,

    /// Physical domain length along rows
    #[arg(long, default_value_t = DEFAULT_LENGTH)]
    lx: f64,

    /// Physical domain length along columns
    #[arg(long, default_value_t = DEFAULT_LENGTH)]
    ly: f64,

    /// Worker threads (defaults to the rayon global pool)
    #[arg(long)]
    threads: Option<usize>,

    /// Output file for the final field
    #[arg(long, default_value = "data.dat")]
    out: PathBuf,

    /// Also write a JSON run summary here
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Write an intermediate frame every K steps (next to --out)
    #[arg(long, value_name = "K")]
    snapshot_every: Option<usize>,
}

#[derive(Serialize)]
struct RunSummary {
    nx: usize,
    ny: usize,
    nt: usize,

    lx: f64,
    ly: f64,
    alpha: f64,

    dx: f64,
    dy: f64,
    dt: f64,

    hot_half_width: usize,
    hot_temperature: f64,

    workers: usize,
    elapsed_secs: f64,

    max_temperature: f64,
    output: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut params = SimulationParams::new(args.nx, args.ny, args.nt)?;
    params.set_alpha(args.alpha)?;
    params.set_domain(args.lx, args.ly)?;

    if args.snapshot_every == Some(0) {
        return Err("--snapshot-every must be >= 1".into());
    }

    let mut sim = match args.threads {
        Some(n) => Simulation::with_workers(params.clone(), n)?,
        None => Simulation::new(params.clone()),
    };

    let report = match args.snapshot_every {
        Some(every) => {
            let mut frames = SnapshotWriter::new(&args.out, every);
            let report = sim.run_observed(|step, grid| frames.observe(step, grid));
            if frames.written() > 0 {
                println!("Wrote {} snapshots", frames.written());
            }
            report
        }
        None => sim.run(),
    };

    println!("# Num Threads: {}", report.workers);
    println!("# Time: {}", report.elapsed.as_secs_f64());

    // Failed saves are reported but do not fail the run.
    report_save("field", &args.out, save_dat(&args.out, sim.field()));

    if let Some(path) = &args.summary {
        let summary = summarize(&params, &report, &sim, &args.out);
        report_save("summary", path, save_summary(path, &summary));
    }

    Ok(())
}

fn report_save(what: &str, path: &Path, result: io::Result<()>) -> bool {
    match result {
        Ok(()) => {
            println!("Wrote {what} to: {}", path.display());
            true
        }
        Err(e) => {
            eprintln!("Error: could not write {}: {e}", path.display());
            false
        }
    }
}

fn save_summary(path: &Path, summary: &RunSummary) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut w, summary)?;
    w.write_all(b"\n")?;
    w.flush()
}

fn summarize(
    params: &SimulationParams,
    report: &RunReport,
    sim: &Simulation,
    out: &Path,
) -> RunSummary {
    let source = params.hot_source();
    RunSummary {
        nx: params.nx(),
        ny: params.ny(),
        nt: report.steps,

        lx: params.lx(),
        ly: params.ly(),
        alpha: params.alpha(),

        dx: params.dx(),
        dy: params.dy(),
        dt: params.dt(),

        hot_half_width: source.half_width(),
        hot_temperature: source.temperature(),

        workers: report.workers,
        elapsed_secs: report.elapsed.as_secs_f64(),

        max_temperature: sim.field().max(),
        output: out.display().to_string(),
    }
}
