// Structural Patterns - Adapter, Decorator
// Patterns for organizing relationships between entities.

pub mod adapter;
pub mod decorator;
