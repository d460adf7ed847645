//! Base trait for view state in MVI architecture.

/// Marker trait for state a view renders.
///
/// States are replaced, never mutated in place, and compared to skip
/// redundant notifications.
pub trait ViewState: Clone + PartialEq + Default + Send + Sync + 'static {}
