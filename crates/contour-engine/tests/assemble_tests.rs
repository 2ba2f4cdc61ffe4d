//! Tests for grouping and greedy path assembly of generated points.

use contour_engine::assemble::{
    assemble_path, emit_edges, find_closest, generate_level_lines, group_by_height,
    AssemblyOptions,
};
use contour_engine::colorscale::colorize_lines;
use terrain_common::exact;
use terrain_common::{ContourError, GeneratedPoint};

fn g(x: i64, y: i64, z: i64) -> GeneratedPoint {
    GeneratedPoint::from_i64(x, y, z)
}

fn threshold(distance: f64) -> AssemblyOptions {
    AssemblyOptions {
        distance_threshold: distance,
        for_height: None,
    }
}

fn square(z: i64) -> Vec<GeneratedPoint> {
    vec![g(0, 0, z), g(10, 0, z), g(10, 10, z), g(0, 10, z)]
}

// ============================================================================
// Grouping
// ============================================================================

#[test]
fn test_every_point_in_exactly_one_group() {
    let points = vec![g(0, 0, 10), g(1, 1, 20), g(2, 2, 10), g(3, 3, 30), g(4, 4, 20)];
    let groups = group_by_height(points.clone()).unwrap();

    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(total, points.len());
    for (height, group) in &groups {
        assert!(group.iter().all(|p| p.height() == height));
    }

    let heights: Vec<String> = groups.keys().map(exact::display).collect();
    assert_eq!(heights, vec!["10", "20", "30"]);
}

// ============================================================================
// Path assembly
// ============================================================================

#[test]
fn test_square_path_visits_every_point_once() {
    let path = assemble_path(square(10)).unwrap();
    assert_eq!(path.len(), 4);
    for corner in square(10) {
        assert_eq!(path.iter().filter(|p| **p == corner).count(), 1);
    }
    // Ties go to the earlier point: (10,0) before (0,10)
    assert_eq!(path, vec![g(0, 0, 10), g(10, 0, 10), g(10, 10, 10), g(0, 10, 10)]);
}

#[test]
fn test_path_follows_nearest_neighbour() {
    let points = vec![g(0, 0, 10), g(30, 0, 10), g(10, 0, 10), g(20, 0, 10)];
    let path = assemble_path(points).unwrap();
    assert_eq!(path, vec![g(0, 0, 10), g(10, 0, 10), g(20, 0, 10), g(30, 0, 10)]);
}

#[test]
fn test_empty_and_single_paths() {
    assert!(assemble_path(Vec::new()).unwrap().is_empty());
    assert_eq!(assemble_path(vec![g(5, 5, 10)]).unwrap().len(), 1);
}

#[test]
fn test_find_closest_on_empty_set() {
    let err = find_closest(&[], &g(0, 0, 40)).unwrap_err();
    assert!(matches!(err, ContourError::EmptyGroup { ref height } if height == "40"));
}

// ============================================================================
// Edge emission
// ============================================================================

#[test]
fn test_square_edges_within_threshold() {
    let path = assemble_path(square(10)).unwrap();
    let lines = emit_edges(&path, &threshold(15.0));
    assert_eq!(lines.len(), 4);
    for line in &lines {
        assert!(line.length() <= 15.0);
        assert!(line.is_leveled());
    }
    // Closing edge back to the start
    assert_eq!(lines[3].beginning(), &g(0, 10, 10));
    assert_eq!(lines[3].end(), &g(0, 0, 10));
}

#[test]
fn test_threshold_drops_long_edges() {
    let path = assemble_path(square(10)).unwrap();
    assert!(emit_edges(&path, &threshold(5.0)).is_empty());
}

#[test]
fn test_threshold_is_inclusive() {
    let path = vec![g(0, 0, 10), g(10, 0, 10)];
    assert_eq!(emit_edges(&path, &threshold(10.0)).len(), 2);
    assert!(emit_edges(&path, &threshold(9.9)).is_empty());
}

#[test]
fn test_two_point_path_goes_there_and_back() {
    let lines = emit_edges(&[g(0, 0, 10), g(3, 4, 10)], &threshold(30.0));
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].beginning(), &g(3, 4, 10));
    assert_eq!(lines[1].end(), &g(0, 0, 10));
}

#[test]
fn test_negative_threshold_keeps_everything() {
    let path = vec![g(0, 0, 10), g(1000, 0, 10), g(1000, 1000, 10)];
    assert_eq!(emit_edges(&path, &AssemblyOptions::unfiltered()).len(), 3);
}

// ============================================================================
// Level lines
// ============================================================================

#[test]
fn test_separate_regions_are_not_joined() {
    // Two squares at the same height, far apart
    let mut points = square(20);
    points.extend(square(20).into_iter().map(|p| {
        GeneratedPoint::new(
            p.x() + exact::to_rational(&exact::integer(500)),
            p.y().clone(),
            p.z().clone(),
        )
    }));

    let lines = generate_level_lines(points, &threshold(30.0)).unwrap();
    assert!(lines.iter().all(|line| line.length() <= 30.0));
    // Each square keeps its three short inner edges; the jump between the
    // squares and the closing edge across them are dropped.
    assert_eq!(lines.len(), 6);
}

#[test]
fn test_lines_ordered_by_height() {
    let mut points = square(30);
    points.extend(square(10));
    let lines = generate_level_lines(points, &threshold(15.0)).unwrap();
    let heights: Vec<String> = lines
        .iter()
        .map(|line| exact::display(line.height().unwrap()))
        .collect();
    assert_eq!(heights, vec!["10", "10", "10", "10", "30", "30", "30", "30"]);
}

#[test]
fn test_singleton_group_keeps_its_level() {
    let points = vec![g(0, 0, 10), g(0, 0, 20), g(5, 0, 20)];
    let lines = generate_level_lines(points, &AssemblyOptions::default()).unwrap();
    let heights: Vec<String> = lines
        .iter()
        .map(|line| exact::display(line.height().unwrap()))
        .collect();
    assert_eq!(heights, vec!["10", "20", "20"]);
    assert_eq!(lines[0].length(), 0.0);

    // Two levels: the upper one sits at the end of the sweep
    let colors: Vec<String> = colorize_lines(lines)
        .unwrap()
        .iter()
        .map(|line| line.color().to_string())
        .collect();
    assert_eq!(colors, vec!["#666680", "#738066", "#738066"]);
}

#[test]
fn test_for_height_restricts_groups() {
    let mut points = square(30);
    points.extend(square(10));
    let options = AssemblyOptions {
        distance_threshold: 15.0,
        for_height: Some(exact::integer(30)),
    };
    let lines = generate_level_lines(points.clone(), &options).unwrap();
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| exact::display(l.height().unwrap()) == "30"));

    let options = AssemblyOptions {
        for_height: Some(exact::integer(20)),
        ..options
    };
    assert!(generate_level_lines(points, &options).unwrap().is_empty());
}
