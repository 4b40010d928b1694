use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod session;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("nst error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();

    // Auth commands manage the session itself and never need a resolved
    // identity or backend context.
    if let cli::Commands::Auth { action } = &cli.command {
        return commands::auth::handle(action, &flags);
    }

    let config = nest_config::NestConfig::load_with_dotenv()?;
    let mut ctx = context::AppContext::init(config).await?;
    commands::dispatch(cli.command, &mut ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("NEST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
