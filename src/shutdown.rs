//! Cooperative stop request shared between the Ctrl-C handler, the simulator
//! window, and the animation loops.
//!
//! Animations call [`ShutdownSignal::is_requested`] between ticks only, so a
//! frame that has started rendering always finishes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::{Error, Result};

/// A cloneable stop flag. All clones observe the same request.
#[derive(Clone, Debug, Default)]
pub struct ShutdownSignal(Arc<AtomicBool>);

impl ShutdownSignal {
    /// A signal that has not been requested yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every holder of this signal to stop at its next check.
    pub fn request(&self) {
        if !self.0.swap(true, Ordering::SeqCst) {
            log::info!("shutdown requested");
        }
    }

    /// True once [`Self::request`] has been called on any clone.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// `Err(Error::ShutdownRequested)` once a stop has been requested.
    ///
    /// # Errors
    ///
    /// [`Error::ShutdownRequested`] if the signal is set.
    pub fn check(&self) -> Result<()> {
        if self.is_requested() {
            Err(Error::ShutdownRequested)
        } else {
            Ok(())
        }
    }

    /// Route Ctrl-C (SIGINT, and SIGTERM on Unix) to [`Self::request`].
    ///
    /// Can only be installed once per process.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the handler cannot be registered.
    pub fn install_interrupt_handler(&self) -> Result<()> {
        let signal = self.clone();
        ctrlc::set_handler(move || signal.request())
            .map_err(|err| std::io::Error::other(err.to_string()))?;
        Ok(())
    }
}
