//! Load, generate, render.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use contour_engine::{ContourMap, ContourPipeline};
use flate2::write::GzEncoder;
use flate2::Compression;
use terrain_common::{ContourConfig, Grid};
use tracing::info;

use crate::Args;

const STDIO: &str = "-";

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

/// Configuration file values overridden by command line flags.
pub fn resolve_config(args: &Args) -> Result<ContourConfig> {
    let mut config = match &args.config {
        Some(path) => ContourConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ContourConfig::default(),
    };

    if let Some(step) = args.height_step {
        config.height_step = step;
    }
    if let Some(threshold) = args.distance_threshold {
        config.distance_threshold = threshold;
    }
    if args.for_height.is_some() {
        config.for_height = args.for_height;
    }
    if args.no_generated_points {
        config.render.draw_generated_points = false;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn load(input: &Path) -> Result<Grid> {
    let grid = if is_stdio(input) {
        grid_parser::load_grid(io::stdin().lock()).context("Failed to read survey from stdin")?
    } else {
        grid_parser::load_grid_file(input)
            .with_context(|| format!("Failed to read survey {}", input.display()))?
    };
    Ok(grid)
}

fn open_output(output: &Path) -> Result<Box<dyn Write>> {
    if is_stdio(output) {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    }
    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Write the document, gzip-compressed when asked.
pub fn write_map(
    pipeline: &ContourPipeline,
    map: &ContourMap,
    grid: &Grid,
    out: impl Write,
    gzip: bool,
) -> Result<()> {
    if gzip {
        let mut encoder = GzEncoder::new(out, Compression::default());
        pipeline.write_svg(&mut encoder, map, grid)?;
        encoder.finish()?.flush()?;
    } else {
        let mut out = out;
        pipeline.write_svg(&mut out, map, grid)?;
        out.flush()?;
    }
    Ok(())
}

pub fn run(args: &Args) -> Result<()> {
    let config = resolve_config(args)?;
    let pipeline = ContourPipeline::new(config)?;

    let grid = load(&args.input)?;
    info!(
        width = grid.width(),
        height = grid.height(),
        points = grid.valid_points().count(),
        "Loaded survey"
    );

    let map = pipeline.run(&grid).context("Contour generation failed")?;
    info!(
        lines = map.lines.len(),
        points = map.points.len(),
        "Generated contours"
    );

    let out = open_output(&args.output)?;
    write_map(&pipeline, &map, &grid, out, args.gzip)?;
    info!(output = %args.output.display(), gzip = args.gzip, "Wrote contour map");

    Ok(())
}
