//! Base trait for mutations in MVI architecture.

/// Marker trait for mutation objects.
///
/// A mutation describes one atomic state change. Mutations are produced
/// by a reactor and consumed by a reducer; the view never sees them.
pub trait Mutation: std::fmt::Debug + Send + 'static {}
