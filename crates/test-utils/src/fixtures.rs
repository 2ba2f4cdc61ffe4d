//! Common survey files for contour-map tests.
//!
//! Each fixture is the text of a grid file as the loader reads it:
//! whitespace-separated `j.i.n.x.y.z` entries, `%` comments and `$`
//! coordinate adjustments.

/// A 3x2 survey with heights spanning several contour levels.
pub const SMALL_SURVEY: &str = "\
% small survey, 3 columns of 2 rows
0.0.0.0.0.12 0.1.1.0.25.37
1.0.2.25.0.20 1.1.3.25.25.41
2.0.4.50.0.5 2.1.5.50.25.18
";

/// A 2x2 survey whose coordinates are given in units of 5 and offset
/// by adjustment commands.
pub const ADJUSTED_SURVEY: &str = "\
$x*5
$y*5
$x+1

0.0.0.0.0.0
0.1.1.0.2.10
1.0.2.3.0.20
1.1.3.3.2.30
";

/// A 3x3 survey with the top of the last column never recorded.
pub const SPARSE_SURVEY: &str = "\
0.0.0.0.0.10 0.1.1.0.10.20 0.2.2.0.20.30
1.0.3.10.0.20 1.1.4.10.10.30 1.2.5.10.20.40
2.0.6.20.0.30 2.1.7.20.10.40
";

/// An entry with a missing field.
pub const MALFORMED_SURVEY: &str = "0.0.0.0.0.10 0.1.1.0.10\n";

/// Sequence numbers that skip a value.
pub const MISNUMBERED_SURVEY: &str = "0.0.0.0.0.10 0.1.2.0.10.20\n";

/// Width and height of the grids described by the fixtures.
pub mod shapes {
    pub const SMALL_SURVEY: (usize, usize) = (3, 2);
    pub const ADJUSTED_SURVEY: (usize, usize) = (2, 2);
    pub const SPARSE_SURVEY: (usize, usize) = (3, 3);
}
