use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use countdown::{
    infrastructure::{cli::Cli, config::Config, tui::real::RealTui},
    integration::app_runner::{AppRunner, Prefill},
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // File-based configuration, with the variant overridable from the CLI
    let config = Config::new()?.with_variant(args.variant);
    log::info!("Starting with {} variant", config.timer.variant);

    let mut runner = {
        let tui = Arc::new(Mutex::new(RealTui::new()?.frame_rate(args.frame_rate)));
        AppRunner::new_with_real(config, tui)?
    };
    runner.prefill(Prefill {
        hours: args.hours,
        minutes: args.minutes,
        seconds: args.seconds,
    });
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
