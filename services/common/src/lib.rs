use std::{
    env, fs,
    net::SocketAddr,
    panic,
    path::PathBuf,
    str::FromStr,
};
use tokio::net::TcpListener;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

pub struct TracingGuards {
    _file_guard: Option<WorkerGuard>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EnvError {
    #[error("{0} is required")]
    Missing(String),
    #[error("{0} must not be blank")]
    Blank(String),
}

pub fn init_tracing(service_name: &str) -> TracingGuards {
    // RUST_LOG wins; file output only when LOG_DIR is set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer().with_writer(std::io::stdout);
    let mut file_guard: Option<WorkerGuard> = None;
    let mut file_layer = None;

    if let Ok(log_dir) = env::var("LOG_DIR") {
        let log_root = PathBuf::from(log_dir).join(service_name);
        if fs::create_dir_all(&log_root).is_ok() {
            let appender = panic::catch_unwind(|| {
                tracing_appender::rolling::daily(&log_root, format!("{service_name}.log"))
            })
            .ok();

            if let Some(appender) = appender {
                let (writer, guard) = tracing_appender::non_blocking(appender);
                file_layer = Some(fmt::layer().with_ansi(false).with_writer(writer));
                file_guard = Some(guard);
            }
        }
    }

    if let Some(layer) = file_layer {
        let subscriber = Registry::default()
            .with(filter)
            .with(stdout_layer)
            .with(layer);
        let _ = tracing::subscriber::set_global_default(subscriber);
    } else {
        let subscriber = Registry::default().with(filter).with(stdout_layer);
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    TracingGuards {
        _file_guard: file_guard,
    }
}

pub fn env_or<T: FromStr>(key: &str, default: T) -> T {
    // Parse typed environment values with a fallback.
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<T>().ok())
        .unwrap_or(default)
}

/// Reads a variable that has no sensible default, such as a credential.
pub fn env_required(key: &str) -> Result<String, EnvError> {
    let value = env::var(key).map_err(|_| EnvError::Missing(key.to_string()))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(EnvError::Blank(key.to_string()));
    }
    Ok(value.to_string())
}

pub async fn bind_listener(port: u16) -> std::io::Result<TcpListener> {
    // Bind on all interfaces for container compatibility.
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    TcpListener::bind(addr).await
}

pub async fn shutdown_signal() {
    // Handle ctrl-c and SIGTERM to allow graceful shutdown.
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(sigterm) => sigterm,
                Err(err) => {
                    tracing::warn!(error = %err, "sigterm handler unavailable");
                    let _ = ctrl_c.await;
                    return;
                }
            };
        tokio::select! {
            _ = ctrl_c => {},
            _ = sigterm.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = ctrl_c.await;
    }
}
