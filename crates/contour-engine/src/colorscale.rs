//! Height-to-colour assignment for contour lines and generated points.
//!
//! Distinct heights are sorted ascending and spread over a hue sweep that
//! starts at blue (240°) and turns 300° in total. Saturation and value are
//! fixed.

use std::collections::{BTreeMap, BTreeSet};

use num_traits::{Signed, ToPrimitive};
use rayon::prelude::*;
use terrain_common::exact::{self, Rational};
use terrain_common::{Color, ContourError, ContourResult, GeneratedPoint, Line};
use tracing::debug;

/// Hue of the lowest level, in degrees.
pub const START_HUE: i64 = 240;

/// Total hue turned over all levels, in degrees.
pub const HUE_SPAN: i64 = 300;

/// Saturation of every level colour, in percent.
pub const SATURATION: u32 = 20;

/// Value of every level colour, in percent.
pub const VALUE: u32 = 50;

/// An element paired with the colour of its height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colorful<T> {
    element: T,
    color: Color,
}

impl<T> Colorful<T> {
    pub fn new(element: T, color: Color) -> Self {
        Self { element, color }
    }

    pub fn element(&self) -> &T {
        &self.element
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn into_parts(self) -> (T, Color) {
        (self.element, self.color)
    }
}

pub type ColorfulLine = Colorful<Line>;
pub type ColorfulPoint = Colorful<GeneratedPoint>;

/// Hues, in degrees, for `levels` ascending levels.
///
/// The hue starts at [`START_HUE`] and decreases by `HUE_SPAN / levels` per
/// level, wrapping into `[0, 360)` whenever it goes negative.
pub fn hue_sweep(levels: usize) -> Vec<Rational> {
    if levels == 0 {
        return Vec::new();
    }

    let full_turn = exact::to_rational(&exact::integer(360));
    let step = Rational::new(exact::integer(HUE_SPAN), exact::integer(levels as i64));
    let mut hue = exact::to_rational(&exact::integer(START_HUE));

    let mut hues = Vec::with_capacity(levels);
    for _ in 0..levels {
        hues.push(hue.clone());
        hue -= &step;
        if hue.is_negative() {
            hue += &full_turn;
        }
    }
    hues
}

/// Whole-degree hue in `[0, 360)`.
fn whole_degrees(hue: &Rational) -> ContourResult<u32> {
    hue.round()
        .to_integer()
        .to_u32()
        .map(|degrees| degrees % 360)
        .ok_or_else(|| ContourError::invalid_range(exact::display(hue), 0, 360))
}

/// Distinct heights of the elements, ascending. Every height must be round.
pub fn make_levels<T>(
    elements: &[T],
    height_of: impl Fn(&T) -> ContourResult<Rational>,
) -> ContourResult<BTreeSet<Rational>> {
    let mut levels = BTreeSet::new();
    for element in elements {
        let height = height_of(element)?;
        if !exact::is_round(&height) {
            return Err(ContourError::NotRound {
                value: exact::display(&height),
            });
        }
        levels.insert(height);
    }
    Ok(levels)
}

/// Colour of every level, following the hue sweep in ascending order.
pub fn make_color_scale(levels: &BTreeSet<Rational>) -> ContourResult<BTreeMap<Rational, Color>> {
    levels
        .iter()
        .zip(hue_sweep(levels.len()))
        .map(|(level, hue)| -> ContourResult<(Rational, Color)> {
            let color = Color::hsv(whole_degrees(&hue)?, SATURATION, VALUE)?;
            Ok((level.clone(), color))
        })
        .collect()
}

/// Pair every element with the colour of its height.
///
/// The output keeps the input order, one entry per element.
pub fn colorize<T, F>(elements: Vec<T>, height_of: F) -> ContourResult<Vec<Colorful<T>>>
where
    T: Send,
    F: Fn(&T) -> ContourResult<Rational> + Sync,
{
    let levels = make_levels(&elements, &height_of)?;
    let scale = make_color_scale(&levels)?;

    debug!(
        elements = elements.len(),
        levels = levels.len(),
        "Built colour scale"
    );

    elements
        .into_par_iter()
        .map(|element| -> ContourResult<Colorful<T>> {
            let height = height_of(&element)?;
            let color = scale
                .get(&height)
                .copied()
                .ok_or_else(|| ContourError::MissingColor {
                    height: exact::display(&height),
                })?;
            Ok(Colorful::new(element, color))
        })
        .collect()
}

/// Colour contour lines by their (levelled) height.
pub fn colorize_lines(lines: Vec<Line>) -> ContourResult<Vec<ColorfulLine>> {
    colorize(lines, |line| line.height().cloned())
}

/// Colour generated points by their height.
pub fn colorize_points(points: Vec<GeneratedPoint>) -> ContourResult<Vec<ColorfulPoint>> {
    colorize(points, |point| Ok(point.height().clone()))
}
