//! `ellgen`: Chern numbers, χ_y genera and elliptic genera of homogeneous
//! spaces and of complete intersections in them.
//!
//! **Usage:**
//! ```text
//! ellgen info    --group A3 --levi A1xA1 --crossed 2
//! ellgen genus   --group A4 --crossed 1 --section 5,0,0,0 --degree 3
//! ellgen euler   --group A4 --crossed 1 --section 5,0,0,0 --weight 1,0,0,0
//! ellgen basis   --double-index 3 --precision 4 --json
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use elliptic_genus::jacobi::{basis_half_integral, eisenstein};
use elliptic_genus::{
    chern_number, chi_y, elliptic_genus, euler_characteristic, ChernNumbers, Variety,
    VectorBundle,
};
use elliptic_genus_clients::{SeriesReport, VarietyArgs, Weight};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compute elliptic genera of homogeneous spaces.
#[derive(Parser)]
#[command(
    name = "ellgen",
    version,
    about = "Chern numbers and elliptic genera of G/P and complete intersections in G/P"
)]
struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dimension, Euler number and all Chern numbers.
    Info {
        #[command(flatten)]
        variety: VarietyArgs,
    },
    /// One Chern number `∫ c_{d_1} ⋯ c_{d_r}`.
    ChernNumber {
        #[command(flatten)]
        variety: VarietyArgs,
        /// Degrees `d_i`, comma separated; they must sum to the dimension.
        #[arg(long, value_delimiter = ',', required = true)]
        degrees: Vec<usize>,
    },
    /// Holomorphic Euler characteristic of a bundle (the tangent bundle by default).
    Euler {
        #[command(flatten)]
        variety: VarietyArgs,
        /// Highest weight of an irreducible homogeneous bundle on the ambient space.
        #[arg(long)]
        weight: Option<Weight>,
    },
    /// The χ_y genus `Σ_p χ(Ω^p) (-y)^p`.
    ChiY {
        #[command(flatten)]
        variety: VarietyArgs,
    },
    /// The elliptic genus up to `q^degree`.
    Genus {
        #[command(flatten)]
        variety: VarietyArgs,
        /// Highest power of `q` to compute.
        #[arg(long, default_value_t = 2)]
        degree: usize,
    },
    /// Eisenstein series `E_k`.
    Eisenstein {
        /// Even weight `k ≥ 2`.
        #[arg(long)]
        weight: u32,
        /// Number of `q` coefficients.
        #[arg(long, default_value_t = 6)]
        precision: usize,
    },
    /// Basis of weight 0 weak Jacobi forms of index `D/2`.
    Basis {
        /// Twice the index.
        #[arg(long)]
        double_index: usize,
        /// Number of `q` coefficients.
        #[arg(long, default_value_t = 3)]
        precision: usize,
    },
}

#[derive(Serialize)]
struct InfoReport {
    variety: String,
    dimension: usize,
    fixed_points: usize,
    euler_number: String,
    calabi_yau: bool,
    chern_numbers: Vec<(Vec<usize>, String)>,
}

fn print<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(value).context("Failed to serialize result")?
        );
    } else {
        println!("{}", text());
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    match cli.command {
        Command::Info { variety } => {
            let target = variety.build()?;
            let x = target.variety();
            let numbers = ChernNumbers::compute(x).context("Failed to compute Chern numbers")?;
            let report = InfoReport {
                variety: target.to_string(),
                dimension: x.dimension(),
                fixed_points: target.ambient().euler_number(),
                euler_number: numbers.euler_number().to_string(),
                calabi_yau: numbers.first_chern_class_vanishes(),
                chern_numbers: numbers
                    .iter()
                    .map(|(lambda, value)| (lambda.to_vec(), value.to_string()))
                    .collect(),
            };
            print(json, &report, || {
                let mut lines = vec![
                    report.variety.clone(),
                    format!("dimension:    {}", report.dimension),
                    format!("fixed points: {}", report.fixed_points),
                    format!("euler number: {}", report.euler_number),
                    format!("c1 = 0:       {}", report.calabi_yau),
                ];
                for (lambda, value) in &report.chern_numbers {
                    lines.push(format!("  c{lambda:?} = {value}"));
                }
                lines.join("\n")
            })
        }
        Command::ChernNumber { variety, degrees } => {
            let target = variety.build()?;
            let value = chern_number(target.variety(), &degrees)
                .with_context(|| format!("Failed to compute c{degrees:?}"))?;
            print(json, &value.to_string(), || value.to_string())
        }
        Command::Euler { variety, weight } => {
            let target = variety.build()?;
            let x = target.variety();
            let bundle = match &weight {
                Some(w) => target.bundle(w)?,
                None => x.tangent_bundle(),
            };
            info!(rank = bundle.rank(), "integrating Riemann-Roch");
            let value = euler_characteristic(x, &bundle)
                .context("Failed to compute the Euler characteristic")?;
            print(json, &value.to_string(), || value.to_string())
        }
        Command::ChiY { variety } => {
            let target = variety.build()?;
            let value = chi_y(target.variety()).context("Failed to compute the χ_y genus")?;
            print(json, &value, || value.to_string())
        }
        Command::Genus { variety, degree } => {
            let target = variety.build()?;
            info!(degree, "computing elliptic genus");
            let genus = elliptic_genus(target.variety(), degree)
                .context("Failed to compute the elliptic genus")?;
            print(json, &SeriesReport::laurent(&genus), || genus.to_string())
        }
        Command::Eisenstein { weight, precision } => {
            let series = eisenstein(weight, precision)
                .with_context(|| format!("Failed to build E_{weight}"))?;
            print(json, &SeriesReport::rational(&series), || series.to_string())
        }
        Command::Basis {
            double_index,
            precision,
        } => {
            let basis = basis_half_integral(double_index, precision)
                .with_context(|| format!("Failed to build the index {double_index}/2 basis"))?;
            info!(size = basis.len(), "weak Jacobi basis");
            print(json, &basis, || {
                basis
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
    }
}
