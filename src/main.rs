use std::sync::Arc;

use staticd::config::{AppState, Config};
use staticd::logger;
use staticd::server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    // Bind failure is fatal: log it and exit non-zero instead of
    // lingering without a listener.
    let listener = server::bind_listener(addr).map_err(|e| {
        logger::log_bind_failed(&addr, &e);
        e
    })?;

    logger::log_server_start(&addr, &cfg);

    let signals = Arc::new(server::SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals));

    let state = Arc::new(AppState::new(cfg));
    server::run(listener, state, Arc::clone(&signals.shutdown)).await
}
