// Behavioral Patterns - Observer, Strategy
// Patterns for communication between objects.

pub mod observer;
pub mod strategy;
