use mazepath_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// Saturates at `i32::MAX` for coordinates too far apart to fit.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    let d = a.row.abs_diff(b.row).saturating_add(a.col.abs_diff(b.col));
    i32::try_from(d).unwrap_or(i32::MAX)
}

/// Euclidean (L2) distance between two coordinates.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    let dr = f64::from(a.row) - f64::from(b.row);
    let dc = f64::from(a.col) - f64::from(b.col);
    (dr * dr + dc * dc).sqrt()
}
