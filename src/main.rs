use clap::Parser;
use movieqr::cli::Cli;
use movieqr::config::Config;
use movieqr::logging::init_tracing;
use movieqr::ui::runtime;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load_from(&cli.config_path())?;
    config.apply_env_overrides(|key| std::env::var(key).ok());
    cli.apply_to(&mut config);
    config.validate()?;

    let route = cli.initial_route()?;
    let log_path = init_tracing(&config.logging)?;
    tracing::info!(log = %log_path.display(), ?route, "movieqr {}", env!("CARGO_PKG_VERSION"));

    runtime::run(&config, route)
}
