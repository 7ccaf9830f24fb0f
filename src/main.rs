use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use counter::config::Config;
use counter::logging::{init_tracing, LogTarget};
use counter::replay::{parse_script, replay};
use counter::shutdown::ShutdownCoordinator;
use counter::store::DispatchOrder;
use counter::ui::counter::CounterReactor;
use counter::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "counter", version, about = "Reactive counter with a simulated slow backend")]
struct Cli {
    /// Config file (default: <config dir>/counter/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the simulated delay in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Override how overlapping actions are ordered
    #[arg(long, global = true, value_enum)]
    ordering: Option<DispatchOrder>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Dispatch a script of '+'/'-' actions headlessly and print each state as JSON
    Replay {
        /// Actions to dispatch, e.g. "++-"
        #[arg(allow_hyphen_values = true)]
        script: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing(match cli.command {
        Some(Command::Replay { .. }) => LogTarget::FileOrStderr,
        None => LogTarget::FileOnly,
    });

    let config = load_config(&cli)?;
    let shutdown = ShutdownCoordinator::new();

    let signal = shutdown.handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received");
            signal.signal();
        }
    });

    match cli.command {
        Some(Command::Replay { script }) => {
            let actions = parse_script(&script).context("Invalid replay script")?;
            let mut stdout = std::io::stdout().lock();
            replay(
                actions,
                CounterReactor::new(config.reactor.delay()),
                config.reactor.ordering,
                shutdown.handle(),
                &mut stdout,
            )
            .await
            .context("Replay failed")?;
        }
        None => runtime::run(&config, &shutdown)
            .await
            .context("Terminal UI failed")?,
    }
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(delay_ms) = cli.delay_ms {
        config.reactor.delay_ms = delay_ms;
    }
    if let Some(ordering) = cli.ordering {
        config.reactor.ordering = ordering;
    }
    config.validate()?;
    Ok(config)
}
