mod call_logging;
mod chained;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use decorators_core::{DocConfig, LogConfig, RepeatConfig, DEFAULT_LOG_PATH};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Annotated experiments on decorators
///
/// Runs the chained decorator demo, then the call logging demo.
#[derive(Parser, Debug)]
#[command(name = "decorators")]
#[command(version, about, long_about = None)]
struct Cli {
    /// File every logged call is appended to
    #[arg(long, default_value = DEFAULT_LOG_PATH, env = "DECORATORS_LOG_FILE")]
    log_file: PathBuf,

    /// How many times the chained demo runs its base function per call
    #[arg(long, short = 'n', default_value_t = 2, env = "DECORATORS_REPEAT")]
    repeat: usize,

    /// Documentation attached to the chained demo function
    #[arg(long, default_value = "My function documentation")]
    doc: String,
}

#[derive(Debug)]
struct DemoConfig {
    doc: DocConfig,
    repeat: RepeatConfig,
    log: LogConfig,
}

impl TryFrom<Cli> for DemoConfig {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        Ok(Self {
            doc: DocConfig::new(cli.doc),
            repeat: RepeatConfig::new(cli.repeat),
            log: LogConfig::new(cli.log_file)?,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber; stdout is reserved for demo output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "decorators=info,decorators_call_log=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = DemoConfig::try_from(cli)?;

    tracing::info!(
        repeat = config.repeat.count,
        log_file = %config.log.path().display(),
        "Running decorator demos"
    );

    let mut stdout = std::io::stdout().lock();
    chained::run(&config.doc, config.repeat, &mut stdout)?;
    call_logging::run(&config.log, &mut stdout)?;

    Ok(())
}
