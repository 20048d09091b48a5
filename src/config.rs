// Fixed inputs for one demonstration run.

use std::env;
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub temperature: f32,
    pub credit_card_amount: i32,
    pub upi_amount: i32,
    pub log_messages: Vec<String>,
    pub shapes: Vec<String>,
    /// Colored section headers. Off unless stdout is a terminal.
    pub color: bool,
}

impl DemoConfig {
    /// Default inputs, with color enabled only for an interactive stdout
    /// and only while `NO_COLOR` is unset.
    pub fn from_env() -> Self {
        Self {
            color: io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none(),
            ..Self::default()
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            temperature: 28.5,
            credit_card_amount: 500,
            upi_amount: 300,
            log_messages: vec![
                "System started.".to_string(),
                "System running smoothly.".to_string(),
            ],
            shapes: vec!["circle".to_string(), "square".to_string()],
            color: false,
        }
    }
}
