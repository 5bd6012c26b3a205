use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use figure::closure::Preprocessor;
use figure::sample::{draw_figure, FigureCfg, ReplayToken};

mod figure_file;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Figure closure and angle-partition runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Analyze a figure file and emit the closure report
    Analyze {
        /// Path to the figure JSON file
        #[arg(long)]
        figure: String,
        /// Write the report here instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Draw a random figure, analyze it, and emit the closure report
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 6)]
        points: usize,
        #[arg(long, default_value_t = 8)]
        segments: usize,
        /// Coordinates are drawn from 0..=grid on both axes
        #[arg(long, default_value_t = 8)]
        grid: i64,
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Analyze { figure, out } => analyze(figure, out),
        Action::Random {
            seed,
            index,
            points,
            segments,
            grid,
            out,
        } => random(seed, index, points, segments, grid, out),
    }
}

fn analyze(figure: String, out: Option<String>) -> Result<()> {
    tracing::info!(figure, "analyze");
    let (db, given) = figure_file::load(Path::new(&figure))?;
    let pp = Preprocessor::new(db, given);
    let report = figure_file::analyze(&pp);
    tracing::info!(
        implicit = report.implicit_points.len(),
        minimal = report.minimal_segments.len(),
        non_minimal = report.non_minimal_segments.len(),
        angles = report.angle_count,
        triangles = report.triangles.len(),
        "closure"
    );
    emit(&report, out)
}

fn random(
    seed: u64,
    index: u64,
    points: usize,
    segments: usize,
    grid: i64,
    out: Option<String>,
) -> Result<()> {
    tracing::info!(seed, index, points, segments, grid, "random");
    let cfg = FigureCfg {
        grid,
        points,
        segments,
    };
    let (db, given) = draw_figure(cfg, ReplayToken { seed, index });
    let pp = Preprocessor::new(db, given);
    let report = figure_file::analyze(&pp);
    emit(&report, out)
}

fn emit(report: &figure_file::Report, out: Option<String>) -> Result<()> {
    let text = serde_json::to_string_pretty(report)?;
    match out {
        Some(out) => {
            let out_path = Path::new(&out);
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(out_path, text).with_context(|| format!("writing {out}"))?;
            tracing::info!(out, "report_written");
        }
        None => println!("{text}"),
    }
    Ok(())
}
