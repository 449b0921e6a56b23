use std::future::Future;
use std::io;

use tokio::io::{BufWriter, Stdout};
use tracing::{info, warn};

use super::error::AppError;

/// Reusable CLI application runner that handles:
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Stdout buffering
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM, 129 = SIGHUP)
pub struct CliApp {
    name: String,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the CLI application with signal handling
    ///
    /// Creates a buffered stdout writer and passes it to the main function,
    /// which is responsible for flushing it.
    ///
    /// Does not return: every path ends in std::process::exit with the appropriate code
    pub async fn run<F, Fut>(self, main_fn: F)
    where
        F: FnOnce(BufWriter<Stdout>) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let writer = BufWriter::new(tokio::io::stdout());
        info!(app = %self.name, "Starting");

        // Race main application logic against signal reception
        tokio::select! {
            result = main_fn(writer) => {
                match result {
                    Ok(()) => std::process::exit(0),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            signal = wait_for_signal() => {
                match signal {
                    Ok(code) => std::process::exit(code),
                    Err(e) => {
                        eprintln!("Error: signal handler setup failed: {}", e);
                        std::process::exit(1);
                    }
                }
            }
        }
    }
}

/// Wait for any Unix signal (SIGINT, SIGTERM, SIGHUP) or Ctrl+C
/// Returns the exit code to use
async fn wait_for_signal() -> io::Result<i32> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sighup = signal(SignalKind::hangup())?;

        let code = tokio::select! {
            _ = sigterm.recv() => {
                warn!("Received SIGTERM");
                143 // 128 + 15
            }
            _ = sigint.recv() => {
                warn!("Received SIGINT");
                130 // 128 + 2
            }
            _ = sighup.recv() => {
                warn!("Received SIGHUP");
                129 // 128 + 1
            }
        };
        Ok(code)
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        warn!("Received Ctrl+C");
        Ok(130)
    }
}
