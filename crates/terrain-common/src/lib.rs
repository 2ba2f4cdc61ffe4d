//! Common types shared across the contour-map workspace.

pub mod color;
pub mod config;
pub mod error;
pub mod exact;
pub mod grid;
pub mod point;

pub use color::Color;
pub use config::{ContourConfig, RenderConfig};
pub use error::{ContourError, ContourResult};
pub use exact::{Integer, Rational};
pub use grid::Grid;
pub use point::{DeclaredPoint, GeneratedPoint, GridIndex, Line};
