// src/bin/cli.rs
use review_appender::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::init_tracing();
    cli::run()
}
