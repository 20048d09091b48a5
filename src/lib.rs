// Design Patterns Showcase
// Six classic patterns, each a small self-contained object graph.

//! # Design Patterns Quick Reference
//!
//! ## Behavioral Patterns
//! - Observer Pattern (weather station fan-out, trait objects)
//! - Strategy Pattern (payment methods bound to a cart)
//!
//! ## Creational Patterns
//! - Singleton Pattern (OnceLock)
//! - Factory Pattern (string keys, enums)
//!
//! ## Structural Patterns
//! - Adapter Pattern (MicroUSB to Type-C)
//! - Decorator Pattern (coffee add-ons, generics and trait objects)
//!
//! Run the whole catalog with:
//! ```bash
//! cargo run --bin patterns-showcase
//! ```

pub mod behavioral;
pub mod config;
pub mod creational;
pub mod demo;
pub mod error;
pub mod structural;

pub use config::DemoConfig;
pub use error::{PatternError, Result};
