//! Domain Policies
//!
//! Business rules that govern behavior.
//! These are pure functions that operate on domain entities.

mod conflict_scope;

pub use conflict_scope::ConflictScope;
