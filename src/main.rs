use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use clean_url_server::config::{AppState, Cli, Config};
use clean_url_server::error::StartupError;
use clean_url_server::{logger, server};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(StartupError::AddrInUse { port }) => {
            logger::log_port_in_use(port);
            ExitCode::FAILURE
        }
        Err(e) => {
            logger::log_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), StartupError> {
    let cfg = Config::load(cli)?;
    logger::init(&cfg).map_err(StartupError::Logger)?;

    // Multi-thread runtime; thread count from config when given
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers.filter(|w| *w > 0) {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build().map_err(StartupError::Runtime)?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), StartupError> {
    let addr = cfg.get_socket_addr()?;
    let state = Arc::new(AppState::new(cfg)?);

    let listener =
        server::create_listener(addr).map_err(|e| StartupError::from_bind(addr.port(), e))?;
    let bound = listener.local_addr().unwrap_or(addr);
    logger::log_server_start(&bound, &state);

    let signal = server::start_server_loop(listener, state, server::wait_for_shutdown())
        .await
        .map_err(StartupError::Signal)?;

    logger::log_server_stopped(signal.name());
    Ok(())
}
