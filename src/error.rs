use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Unknown shape type: '{requested}' (expected 'circle' or 'square')")]
    UnknownShape { requested: String },

    #[error("Failed to write demo output: {0}")]
    Io(#[from] io::Error),
}

impl PatternError {
    pub fn unknown_shape(requested: impl Into<String>) -> Self {
        Self::UnknownShape {
            requested: requested.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_shape_message() {
        let err = PatternError::unknown_shape("triangle");
        assert_eq!(
            err.to_string(),
            "Unknown shape type: 'triangle' (expected 'circle' or 'square')"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let err: PatternError = io_err.into();
        assert!(matches!(err, PatternError::Io(_)));
    }
}
