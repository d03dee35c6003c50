use dotenvy::dotenv;
use tracing::{error, info};

fn load_config() -> Option<configs::AppConfig> {
    // Load .env first so RUST_LOG, PORT and friends are visible
    dotenv().ok();
    match configs::AppConfig::load() {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            None
        }
    }
}

fn main() -> std::process::ExitCode {
    let Some(cfg) = load_config() else {
        return std::process::ExitCode::FAILURE;
    };
    common::utils::logging::init_logging(&cfg.logging.format);
    info!(service = "shop", event = "logger_init", format = %cfg.logging.format, "tracing subscriber initialized");

    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // Panic hook: log unhandled panics through tracing
    std::panic::set_hook(Box::new(move |info| {
        error!(service = "shop", event = "panic", pid, message = %info, "unhandled panic occurred");
    }));

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "shop", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "shop",
        event = "start",
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        port = cfg.server.port,
        "shop service starting"
    );

    // server::run owns graceful shutdown on Ctrl+C
    match rt.block_on(server::run()) {
        Ok(()) => {
            info!(service = "shop", event = "stop", pid, "shop stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "shop", event = "run_failed", error = %e, "server::run returned error");
            std::process::ExitCode::FAILURE
        }
    }
}
