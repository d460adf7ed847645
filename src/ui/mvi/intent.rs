//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent either a view action (sort requested, detail
/// cleared) or a request lifecycle event (started, succeeded, failed).
pub trait Intent: Send + 'static {}
