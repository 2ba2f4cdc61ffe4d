//! Contour line generation for surveyed terrain grids.
//!
//! The engine works in stages:
//! - Interpolation of points at round heights along grid edges
//! - Per-cell (quad) processing including one diagonal
//! - Greedy assembly of same-height points into level lines
//! - Hue-sweep colouring of levels
//! - SVG output

pub mod assemble;
pub mod colorscale;
pub mod interpolate;
pub mod pipeline;
pub mod quad;
pub mod svg;

pub use assemble::{generate_level_lines, AssemblyOptions};
pub use colorscale::{Colorful, ColorfulLine, ColorfulPoint};
pub use interpolate::Interpolator;
pub use pipeline::{ContourMap, ContourPipeline};
pub use quad::{generate_intermediate_points, Quad, QuadPoints};
pub use svg::{RenderError, SvgRenderer};
