//! End-to-end contour generation over a loaded grid.

use std::io::Write;

use terrain_common::{ContourConfig, ContourResult, GeneratedPoint, Grid};
use tracing::debug;

use crate::assemble::{generate_level_lines, AssemblyOptions};
use crate::colorscale::{colorize_lines, colorize_points, ColorfulLine, ColorfulPoint};
use crate::interpolate::Interpolator;
use crate::quad::{flatten_points, generate_intermediate_points};
use crate::svg::{RenderResult, SvgRenderer};

/// Colourised output of one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct ContourMap {
    pub lines: Vec<ColorfulLine>,
    pub points: Vec<ColorfulPoint>,
}

/// Runs interpolation, assembly and colouring with one configuration.
#[derive(Debug, Clone)]
pub struct ContourPipeline {
    config: ContourConfig,
    interpolator: Interpolator,
    options: AssemblyOptions,
}

impl ContourPipeline {
    pub fn new(config: ContourConfig) -> ContourResult<Self> {
        config.validate()?;
        let interpolator = Interpolator::from_config(&config)?;
        let options = AssemblyOptions::from_config(&config);
        Ok(Self {
            config,
            interpolator,
            options,
        })
    }

    pub fn config(&self) -> &ContourConfig {
        &self.config
    }

    pub fn interpolator(&self) -> &Interpolator {
        &self.interpolator
    }

    pub fn options(&self) -> &AssemblyOptions {
        &self.options
    }

    /// Every intermediate point of the grid, in cell order.
    pub fn generate_points(&self, grid: &Grid) -> ContourResult<Vec<GeneratedPoint>> {
        let quads = generate_intermediate_points(grid, &self.interpolator)?;
        Ok(flatten_points(quads))
    }

    pub fn run(&self, grid: &Grid) -> ContourResult<ContourMap> {
        let points = self.generate_points(grid)?;
        let lines = generate_level_lines(points.iter().cloned(), &self.options)?;

        let lines = colorize_lines(lines)?;
        let points = colorize_points(points)?;

        debug!(
            lines = lines.len(),
            points = points.len(),
            "Contour map ready"
        );

        Ok(ContourMap { lines, points })
    }

    /// Write a map computed from `grid` as an SVG document.
    pub fn write_svg<W: Write>(&self, out: &mut W, map: &ContourMap, grid: &Grid) -> RenderResult<()> {
        let renderer = SvgRenderer::new(&self.config.render)?;
        renderer.write_document(out, &map.lines, &map.points, grid)
    }
}
