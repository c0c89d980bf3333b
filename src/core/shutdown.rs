//! # Termination signal handling.
//!
//! [`Shutdown`] registers the process signal listeners once and lets the
//! scheduler race its sleeps against them cycle after cycle. An observed
//! signal is a graceful stop request, not an error.
//!
//! ## Signals
//! **Unix:** `SIGINT` (Ctrl-C) and `SIGTERM` (default kill, systemd).
//! **Elsewhere:** Ctrl-C via [`tokio::signal::ctrl_c`].

use crate::error::RuntimeError;

/// Holds the registered signal listeners for one scheduler run.
pub(crate) struct Shutdown {
    #[cfg(unix)]
    sigint: tokio::signal::unix::Signal,
    #[cfg(unix)]
    sigterm: tokio::signal::unix::Signal,
}

impl Shutdown {
    /// Registers the listeners. Fails if the runtime cannot install them.
    pub(crate) fn new() -> Result<Self, RuntimeError> {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};

            let sigint = signal(SignalKind::interrupt())
                .map_err(|source| RuntimeError::SignalSetup { source })?;
            let sigterm = signal(SignalKind::terminate())
                .map_err(|source| RuntimeError::SignalSetup { source })?;
            Ok(Self { sigint, sigterm })
        }
        #[cfg(not(unix))]
        {
            Ok(Self {})
        }
    }

    /// Completes when a termination signal arrives.
    #[cfg(unix)]
    pub(crate) async fn recv(&mut self) {
        tokio::select! {
            _ = self.sigint.recv() => {}
            _ = self.sigterm.recv() => {}
        }
    }

    /// Completes when a termination signal arrives.
    #[cfg(not(unix))]
    pub(crate) async fn recv(&mut self) {
        let _ = tokio::signal::ctrl_c().await;
    }
}
