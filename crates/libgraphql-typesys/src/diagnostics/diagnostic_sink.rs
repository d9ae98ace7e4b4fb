use crate::diagnostics::DiagnosticIds;
use crate::diagnostics::Severity;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Receives every diagnostic a [`DiagnosticSink`] lets through.
pub trait DiagnosticHandler: Send + Sync {
    fn handle(&self, message: &str, id: DiagnosticIds, severity: Severity);
}
impl<F> DiagnosticHandler for F
where
    F: Fn(&str, DiagnosticIds, Severity) + Send + Sync,
{
    fn handle(&self, message: &str, id: DiagnosticIds, severity: Severity) {
        self(message, id, severity)
    }
}

/// Emits diagnostics as `tracing` events: [`Severity::Warning`] at the `WARN`
/// level, everything else at `INFO`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnosticHandler;
impl DiagnosticHandler for TracingDiagnosticHandler {
    fn handle(&self, message: &str, id: DiagnosticIds, severity: Severity) {
        match severity {
            Severity::Warning => tracing::warn!(
                diagnostic_id = id.bits(),
                "{message}"
            ),
            Severity::Deprecated | Severity::Notice => tracing::info!(
                diagnostic_id = id.bits(),
                ?severity,
                "{message}"
            ),
        }
    }
}

/// Filters diagnostics by id and forwards the enabled ones to a
/// [`DiagnosticHandler`].
///
/// All state is behind `&self` so that one sink can be shared by concurrent
/// executions.
pub struct DiagnosticSink {
    enabled: AtomicU32,
    handler: Box<dyn DiagnosticHandler>,
    warned: Mutex<DiagnosticIds>,
}
impl DiagnosticSink {
    pub fn new() -> Self {
        Self::with_handler(TracingDiagnosticHandler)
    }

    pub fn with_handler(handler: impl DiagnosticHandler + 'static) -> Self {
        Self {
            enabled: AtomicU32::new(DiagnosticIds::ALL.bits()),
            handler: Box::new(handler),
            warned: Mutex::new(DiagnosticIds::empty()),
        }
    }

    pub fn enable(&self, ids: DiagnosticIds) {
        self.enabled.fetch_or(ids.bits(), Ordering::SeqCst);
    }

    pub fn enable_all(&self) {
        self.enabled.store(DiagnosticIds::ALL.bits(), Ordering::SeqCst);
    }

    pub fn enabled_ids(&self) -> DiagnosticIds {
        DiagnosticIds::from_bits_retain(self.enabled.load(Ordering::SeqCst))
    }

    /// Indicates whether any of the given `ids` are currently enabled.
    pub fn is_enabled(&self, ids: DiagnosticIds) -> bool {
        self.enabled_ids().intersects(ids)
    }

    pub fn suppress(&self, ids: DiagnosticIds) {
        self.enabled.fetch_and(!ids.bits(), Ordering::SeqCst);
    }

    pub fn suppress_all(&self) {
        self.enabled.store(0, Ordering::SeqCst);
    }

    /// Emits `message` every time it is called while `id` is enabled.
    pub fn warn(&self, message: &str, id: DiagnosticIds, severity: Severity) {
        if self.is_enabled(id) {
            self.handler.handle(message, id, severity);
        }
    }

    /// Emits `message` only the first time a diagnostic with this `id` is
    /// raised (while enabled) over the lifetime of this sink.
    pub fn warn_once(&self, message: &str, id: DiagnosticIds, severity: Severity) {
        if !self.is_enabled(id) {
            return;
        }

        let first_time = {
            let mut warned =
                self.warned.lock().unwrap_or_else(PoisonError::into_inner);
            if warned.contains(id) {
                false
            } else {
                warned.insert(id);
                true
            }
        };

        if first_time {
            self.handler.handle(message, id, severity);
        }
    }
}
impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}
impl std::fmt::Debug for DiagnosticSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticSink")
            .field("enabled", &self.enabled_ids())
            .finish_non_exhaustive()
    }
}
