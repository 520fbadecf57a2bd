use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use llm_devserver::config::{read_config, validate_config, ConfigError, DevServerConfig};
use llm_devserver::lifecycle::{signals, startup, Shutdown};
use llm_devserver::net::{self, ListenerError};
use llm_devserver::observability::logging;
use llm_devserver::HttpServer;

#[derive(Parser)]
#[command(name = "llm-devserver")]
#[command(
    about = "Static file server with a CORS-enabled proxy to a local inference server",
    long_about = None
)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port (keeps the configured host)
    #[arg(short, long)]
    port: Option<u16>,

    /// Upstream base URL, e.g. http://127.0.0.1:1234
    #[arg(short, long)]
    upstream: Option<String>,

    /// Directory to serve static files from
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    /// Load the file (if any), apply overrides, validate the result.
    fn into_config(self) -> Result<DevServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => DevServerConfig::default(),
        };

        if let Some(port) = self.port {
            config.listener.bind_address = with_port(&config.listener.bind_address, port);
        }
        if let Some(upstream) = self.upstream {
            config.upstream.base_url = upstream;
        }
        if let Some(root) = self.root {
            config.static_files.root = root;
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

/// Replace the port of a `host:port` string.
fn with_port(bind_address: &str, port: u16) -> String {
    let host = bind_address
        .rsplit_once(':')
        .map_or(bind_address, |(host, _)| host);
    format!("{host}:{port}")
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            logging::init("info");
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config.observability.log_level);

    let listener = match net::bind(&config.listener).await {
        Ok(listener) => listener,
        Err(e @ ListenerError::AddrInUse(_)) => {
            tracing::error!(
                error = %e,
                "Stop the other server on this port or choose a different one with --port"
            );
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::error!(error = %e, "Error starting server");
            return ExitCode::FAILURE;
        }
    };

    match listener.local_addr() {
        Ok(addr) => startup::log_banner(addr, &config),
        Err(e) => tracing::warn!(error = %e, "Could not read listener address"),
    }

    let server = match HttpServer::new(config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, "Error starting server");
            return ExitCode::FAILURE;
        }
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    if let Err(e) = server.run(listener, server_shutdown).await {
        tracing::error!(error = %e, "Server terminated with an error");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
