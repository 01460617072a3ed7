// crates/fixconst-cli/src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use fixconst_core::config::{DEFAULT_ARCHES, DEFAULT_DIR, DEFAULT_SENTINEL, DEFAULT_SUFFIX};
use fixconst_core::{normalize_dir, Mode, NormalizeConfig};

#[derive(Parser, Debug)]
#[command(name = "fixconst")]
#[command(about = "Normalize generated *.txt.const files (arch list + untyped values)", long_about = None)]
struct Args {
    /// Directory holding the generated const files
    #[arg(long, default_value = DEFAULT_DIR)]
    dir: PathBuf,

    /// Only files whose name ends with this are touched
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    suffix: String,

    /// Files whose line 1 already contains this are left alone
    #[arg(long, default_value = DEFAULT_SENTINEL)]
    sentinel: String,

    /// Arch appended to the GOARCH line (repeatable, order kept)
    #[arg(long = "arch", default_values = DEFAULT_ARCHES)]
    arches: Vec<String>,

    /// Report what would change without writing; exit 1 if anything would
    #[arg(long)]
    check: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let a = Args::parse();
    init_tracing(a.verbose);

    let cfg = NormalizeConfig {
        suffix: a.suffix,
        sentinel: a.sentinel,
        extra_arches: a.arches,
    };
    let mode = if a.check { Mode::Check } else { Mode::Write };

    let rep = normalize_dir(&a.dir, &cfg, mode)
        .with_context(|| format!("normalize {}", a.dir.display()))?;

    println!("{}", rep.summary());

    if mode == Mode::Check && rep.fixed != 0 {
        for p in &rep.fixed_paths {
            tracing::warn!(path = %p.display(), "needs fix");
        }
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(verbose >= 2))
        .init();
}
