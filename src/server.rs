//! Server startup: logging, engine and API wiring.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobhands_api::{ApiConfig, ApiServer, ApiState};
use jobhands_config::{Config, ConfigLoader, LoggingConfig, ValidationWarning};
use jobhands_core::{BuilderRegistry, SchedulerJobService};
use jobhands_scheduler_memory::MemoryScheduler;

/// Get the .jobhands directory path.
fn jobhands_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".jobhands"))
        .unwrap_or_else(|| PathBuf::from(".jobhands"))
}

fn log_dir(logging: &LoggingConfig) -> PathBuf {
    match &logging.dir {
        Some(dir) => ConfigLoader::expand_path(dir),
        None => jobhands_dir().join("logs"),
    }
}

/// Initialize tracing with console and file output.
///
/// Log files rotate daily. `RUST_LOG` takes precedence over `logging.level`.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = log_dir(logging);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("jobhands")
        .filename_suffix("log")
        .max_log_files(30)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Dropping the guard stops the background writer.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.level)?,
    };

    let console_json = logging.json.then(|| fmt::layer().json().with_target(true));
    let console_text = (!logging.json).then(|| fmt::layer().with_target(true).with_ansi(true));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_text)
        .with(console_json)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

/// Report validation warnings, fail on the first validation error.
pub(crate) fn validate(config: &Config) -> Result<Vec<ValidationWarning>, Box<dyn std::error::Error>> {
    Ok(jobhands_config::ConfigValidator::validate(config).into_result()?)
}

/// `run --host/--port` take precedence over the `[server]` section.
pub(crate) fn apply_overrides(config: &mut Config, host: Option<String>, port: Option<u16>) {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
}

/// Build the job service described by the scheduler section.
pub(crate) fn build_service(
    config: &Config,
) -> Result<SchedulerJobService, Box<dyn std::error::Error>> {
    let scheduler = Arc::new(MemoryScheduler::with_instance_name(
        config.scheduler.instance_name.clone(),
    ));
    let builders = Arc::new(BuilderRegistry::from_types(&config.scheduler.builders)?);
    info!(
        "Scheduler '{}' ready with job types {:?}",
        config.scheduler.instance_name,
        builders.job_types()
    );
    Ok(SchedulerJobService::new(scheduler, builders))
}

/// Run the API server in foreground.
pub(crate) async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting JobHands v{}", env!("CARGO_PKG_VERSION"));

    for warning in validate(&config)? {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    let jobs = build_service(&config)?;
    let api_config = ApiConfig::new(config.server.host.clone(), config.server.port);
    let server = ApiServer::new(api_config, ApiState::new(Arc::new(jobs)));

    server.run().await
}
