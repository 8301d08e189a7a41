//! Ctrl-C handling.
//!
//! The signal only raises a shared flag. Play stops at the next turn or
//! prompt, so the statistics are still reported.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

/// Shared flag raised once the user asks to stop.
#[derive(Debug, Clone, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    /// Creates a lowered flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag.
    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Checks if the flag has been raised.
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Raises the flag on every Ctrl-C from now on.
    ///
    /// The listener runs on its own thread with a single-threaded runtime.
    pub fn listen_for_ctrl_c(&self) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to build signal runtime")?;
        let interrupt = self.clone();

        std::thread::Builder::new()
            .name("ctrl-c".into())
            .spawn(move || {
                runtime.block_on(async move {
                    loop {
                        if let Err(e) = tokio::signal::ctrl_c().await {
                            warn!(error = %e, "Ctrl-C listener stopped");
                            break;
                        }
                        info!("Ctrl-C received");
                        interrupt.raise();
                    }
                });
            })
            .context("Failed to spawn Ctrl-C listener")?;

        Ok(())
    }
}
