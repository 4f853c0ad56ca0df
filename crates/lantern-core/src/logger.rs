//! Owned logger handles.

use lantern_types::{LanternError, Result};
use tracing::Dispatch;

/// An owned handle to a constructed logger.
///
/// Construction and installation are separate steps: factories return a
/// `Logger`, and the caller decides whether to install it as the process-wide
/// default, scope it with [`tracing::dispatcher::with_default`], or drop it.
/// The handle is cheap to clone and safe to share across threads; record
/// emission is synchronized by the backend.
#[derive(Debug, Clone)]
pub struct Logger {
    dispatch: Dispatch,
}

impl Logger {
    pub(crate) fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    /// The underlying dispatcher, for scoped or manual use.
    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Install this logger as the process-wide default.
    ///
    /// Fails if a default has already been installed; the process keeps its
    /// existing logger in that case.
    pub fn install(self) -> Result<()> {
        tracing::dispatcher::set_global_default(self.dispatch)
            .map_err(|e| LanternError::Config(format!("cannot install logger: {e}")))
    }
}
