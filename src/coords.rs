//! Pixel-to-plane coordinate mapping.
//!
//! The rendered rectangle is fixed: real axis `[-1.5, 0.5)`, imaginary
//! axis `[-1.0, 1.0)`.

use crate::size::Size;

/// Real-axis coordinate for every pixel column, computed once up front
/// and shared read-only by all row workers.
pub fn column_coordinates(size: Size) -> Vec<f64> {
    let scale = 2.0 / size.width as f64;
    (0..size.width).map(|x| scale * x as f64 - 1.5).collect()
}

/// Imaginary-axis coordinate of pixel row `y`.
pub fn row_coordinate(size: Size, y: u32) -> f64 {
    2.0 / size.height as f64 * y as f64 - 1.0
}
