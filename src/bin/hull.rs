use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hullbrute::algorithms::{ordered_hull_with, unordered_hull_with};
use hullbrute::data::Point;
use hullbrute::{HullConfig, Predicate};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hull")]
#[command(about = "Brute-force convex hull of whitespace-separated `x y` points")]
struct Cmd {
  /// Input file. Reads stdin when omitted.
  file: Option<PathBuf>,

  /// Print hull vertices in counter-clockwise order (gift wrapping).
  #[arg(long)]
  ordered: bool,

  /// Print `x y` per hull vertex instead of indices.
  #[arg(long)]
  coords: bool,

  #[arg(long, value_enum, default_value_t = PredicateKind::Exact)]
  predicate: PredicateKind,

  /// Colinearity tolerance for `--predicate tolerance`.
  #[arg(long, default_value_t = 1e-9)]
  epsilon: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum PredicateKind {
  Exact,
  Tolerance,
  Robust,
}

impl Cmd {
  fn config(&self) -> HullConfig {
    let predicate = match self.predicate {
      PredicateKind::Exact => Predicate::Exact,
      PredicateKind::Tolerance => Predicate::Tolerance(self.epsilon),
      PredicateKind::Robust => Predicate::Robust,
    };
    HullConfig::default().with_predicate(predicate)
  }
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();
  let cmd = Cmd::parse();

  let input = match &cmd.file {
    Some(path) => {
      std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    }
    None => {
      let mut buf = String::new();
      std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading stdin")?;
      buf
    }
  };
  let points: Vec<Point> = Point::parse_many(&input).context("parsing points")?;
  tracing::info!(points = points.len(), ordered = cmd.ordered, "input");

  let config = cmd.config();
  let hull: Vec<usize> = if cmd.ordered {
    ordered_hull_with(&points, &config)?
  } else {
    unordered_hull_with(&points, &config)?.into_iter().collect()
  };

  if cmd.coords {
    for idx in hull {
      println!("{}", points[idx]);
    }
  } else {
    let line: Vec<String> = hull.iter().map(usize::to_string).collect();
    println!("{}", line.join(" "));
  }
  Ok(())
}
