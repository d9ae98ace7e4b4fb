//! Non-fatal diagnostics raised while building or executing against a
//! [`Schema`](crate::Schema).
//!
//! Diagnostics are routed through a [`DiagnosticSink`] owned by whoever drives
//! execution (see [`Executor::diagnostics`](crate::execution::Executor::diagnostics)).
//! There is no process-wide switch: two sinks never observe each other's
//! suppression or "already warned" state.

mod diagnostic_sink;

pub use diagnostic_sink::DiagnosticHandler;
pub use diagnostic_sink::DiagnosticSink;
pub use diagnostic_sink::TracingDiagnosticHandler;

bitflags::bitflags! {
    /// Identifies a category of diagnostic, or a set of them.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct DiagnosticIds: u32 {
        const ASSIGN = 2;
        const CONFIG = 4;
        /// Abstract type resolution fell back to calling `is_type_of` on
        /// every possible type.
        const FULL_SCHEMA_SCAN = 8;
        const CONFIG_DEPRECATION = 16;
        const NOT_A_TYPE = 32;
        const ALL = 63;
    }
}
impl Default for DiagnosticIds {
    fn default() -> Self {
        Self::ALL
    }
}

/// How loudly a diagnostic should be reported.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Severity {
    Deprecated,
    Notice,
    Warning,
}

#[cfg(test)]
mod tests;
