//! Tests for the height colour scale.

use std::collections::BTreeSet;

use contour_engine::colorscale::{
    colorize, colorize_lines, colorize_points, hue_sweep, make_color_scale, make_levels,
};
use terrain_common::exact::{self, Rational};
use terrain_common::{Color, ContourResult, GeneratedPoint, Line};

fn height(n: i64) -> Rational {
    exact::to_rational(&exact::integer(n))
}

fn level_line(x: i64, z: i64) -> Line {
    Line::new(GeneratedPoint::from_i64(x, 0, z), GeneratedPoint::from_i64(x, 5, z))
}

#[test]
fn test_hue_sweep_examples() {
    let whole = |hues: Vec<Rational>| -> Vec<String> { hues.iter().map(exact::display).collect() };
    assert_eq!(whole(hue_sweep(3)), vec!["240", "140", "40"]);
    assert_eq!(whole(hue_sweep(4)), vec!["240", "165", "90", "15"]);
    assert_eq!(whole(hue_sweep(5)), vec!["240", "180", "120", "60", "0"]);
}

#[test]
fn test_hue_sweep_fractional_steps() {
    // 300 / 7 is not whole
    let hues = hue_sweep(7);
    assert_eq!(hues.len(), 7);
    assert_eq!(hues[1], Rational::new(exact::integer(1380), exact::integer(7)));
}

#[test]
fn test_levels_sorted_and_distinct() {
    let heights = vec![height(30), height(10), height(30), height(-20)];
    let levels = make_levels(&heights, |h| Ok(h.clone())).unwrap();
    let levels: Vec<Rational> = levels.into_iter().collect();
    assert_eq!(levels, vec![height(-20), height(10), height(30)]);
}

#[test]
fn test_color_scale_assigns_lowest_level_blue() {
    let levels: BTreeSet<Rational> = [height(100), height(200)].into_iter().collect();
    let scale = make_color_scale(&levels).unwrap();
    // hsv(240, 20%, 50%)
    assert_eq!(scale[&height(100)], Color::rgb(102, 102, 128));
    // hsv(90, 20%, 50%)
    assert_eq!(scale[&height(200)], Color::rgb(115, 128, 102));
}

#[test]
fn test_every_element_colored_once_in_order() {
    let lines = vec![level_line(0, 20), level_line(1, 10), level_line(2, 20), level_line(3, 30)];
    let colored = colorize_lines(lines.clone()).unwrap();

    assert_eq!(colored.len(), lines.len());
    for (colored, original) in colored.iter().zip(&lines) {
        assert_eq!(colored.element(), original);
    }

    // Same height, same colour; different heights, different colours
    assert_eq!(colored[0].color(), colored[2].color());
    assert_ne!(colored[0].color(), colored[1].color());
    assert_ne!(colored[0].color(), colored[3].color());
    assert_eq!(colored[1].color(), Color::rgb(102, 102, 128));
}

#[test]
fn test_colorize_points_uses_point_height() {
    let points = vec![GeneratedPoint::from_i64(0, 0, 40), GeneratedPoint::from_i64(1, 1, 50)];
    let colored = colorize_points(points).unwrap();
    assert_eq!(colored[0].color(), Color::rgb(102, 102, 128));
    assert_eq!(colored[1].color(), Color::rgb(115, 128, 102));
}

#[test]
fn test_colorize_uses_supplied_accessor() {
    // Colour by a key derived from the element, not by any point height
    let elements = vec![3_i64, 1, 2];
    let colored = colorize(elements, |n| -> ContourResult<Rational> { Ok(height(*n * 10)) }).unwrap();
    let first = colored.iter().find(|c| *c.element() == 1).unwrap();
    assert_eq!(first.color(), Color::rgb(102, 102, 128));
}

#[test]
fn test_colorize_empty() {
    assert!(colorize_lines(Vec::new()).unwrap().is_empty());
}

#[test]
fn test_non_leveled_line_rejected() {
    let line = Line::new(GeneratedPoint::from_i64(0, 0, 10), GeneratedPoint::from_i64(1, 0, 20));
    assert!(colorize_lines(vec![line]).is_err());
}
