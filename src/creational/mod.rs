// Creational Patterns - Singleton, Factory
// Patterns for object creation.

pub mod factory;
pub mod singleton;
