// src/cli.rs
use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

use crate::clock::Zone;
use crate::config::{AppendOptions, DateTagFormat, WordPools, consts::*};
use crate::runner::Appender;

/// Append one generated review row into the marked region of an HTML page.
#[derive(Debug, Parser)]
#[command(name = "review_appender", version, about)]
pub struct Args {
    /// HTML document holding the AUTO_REVIEWS markers
    #[arg(default_value = DEFAULT_DOCUMENT)]
    pub document: PathBuf,

    /// Rows allowed per calendar day
    #[arg(long, default_value_t = DEFAULT_DAILY_CAP)]
    pub cap: usize,

    /// How the day is written into data-auto-date
    #[arg(long, value_enum, default_value_t = DateTagFormat::Dashed)]
    pub date_format: DateTagFormat,

    /// IANA timezone used for "today"
    #[arg(long, default_value = DEFAULT_TIMEZONE, conflicts_with = "utc_offset")]
    pub tz: String,

    /// Fixed UTC offset instead of a named zone, e.g. +09:00
    #[arg(long)]
    pub utc_offset: Option<String>,

    /// TOML file replacing the built-in word pools
    #[arg(long, env = "REVIEW_APPENDER_POOLS")]
    pub pools: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Seed the draw (for reproducing a run)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn options(&self) -> Result<AppendOptions> {
        let zone = match &self.utc_offset {
            Some(off) => Zone::from_offset(off).ok_or_else(|| eyre!("bad --utc-offset: {off}"))?,
            None => Zone::from_name(&self.tz).ok_or_else(|| eyre!("unknown --tz: {}", self.tz))?,
        };
        Ok(AppendOptions {
            daily_cap: self.cap,
            date_format: self.date_format,
            zone,
            max_attempts: self.max_attempts,
            ..AppendOptions::default()
        })
    }

    pub fn word_pools(&self) -> Result<WordPools> {
        match &self.pools {
            Some(p) => WordPools::from_toml_file(p)
                .wrap_err_with(|| format!("loading word pools from {}", p.display())),
            None => Ok(WordPools::default()),
        }
    }
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parse args and do one run. Skips (missing file or markers, cap reached,
/// no unique draft) are logged and return `Ok`.
pub fn run() -> Result<()> {
    let args = Args::parse();
    run_with(&args)
}

pub fn run_with(args: &Args) -> Result<()> {
    let appender = Appender::new(args.options()?, args.word_pools()?)?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match appender.run(&args.document, Utc::now(), &mut rng) {
        Ok(done) => {
            println!("{} {}", done.entry.id, done.path.display());
            Ok(())
        }
        Err(e) if e.is_skip() => {
            logf!(path = %args.document.display(), reason = %e, "nothing appended");
            Ok(())
        }
        Err(e) => {
            loge!(path = %args.document.display(), error = %e, "append failed");
            Err(e).wrap_err_with(|| format!("appending to {}", args.document.display()))
        }
    }
}
