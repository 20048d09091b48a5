// Factory Pattern: build a shape from its name, case-insensitively.

use crate::error::{PatternError, Result};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Circle, ShapeKind::Square];

    pub fn key(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = PatternError;

    fn from_str(name: &str) -> Result<Self> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(name))
            .ok_or_else(|| PatternError::unknown_shape(name))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Circle => write!(f, "Circle"),
            ShapeKind::Square => write!(f, "Square"),
        }
    }
}

pub trait Shape {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()>;
    fn kind(&self) -> ShapeKind;
}

pub struct Circle;

impl Shape for Circle {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Drawing a Circle")
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }
}

pub struct Square;

impl Shape for Square {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Drawing a Square")
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }
}

pub struct ShapeFactory;

impl ShapeFactory {
    /// A name outside the known set is an error, never an empty shape.
    pub fn get_shape(name: &str) -> Result<Box<dyn Shape>> {
        let kind = name.parse::<ShapeKind>().map_err(|err| {
            warn!(requested = name, "no shape registered under this name");
            err
        })?;
        Ok(Self::create(kind))
    }

    pub fn create(kind: ShapeKind) -> Box<dyn Shape> {
        match kind {
            ShapeKind::Circle => Box::new(Circle),
            ShapeKind::Square => Box::new(Square),
        }
    }
}
