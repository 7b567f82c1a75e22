//! Number and vector formatting shared by the dictionary sections.

use config::constants::COORDINATE_PRECISION;
use glam::DVec3;

/// Formats a point as `(x y z)` with fixed precision.
///
/// # Example
///
/// ```rust
/// use blockmesh::serializer::format::vector;
/// use glam::DVec3;
///
/// assert_eq!(vector(DVec3::new(0.0, 0.25, 1.0)), "(0.00000000 0.25000000 1.00000000)");
/// ```
pub fn vector(p: DVec3) -> String {
    format!(
        "({} {} {})",
        coordinate(p.x),
        coordinate(p.y),
        coordinate(p.z)
    )
}

/// Formats a list of points as `((x y z) (x y z) ...)`.
pub fn vector_list(points: &[DVec3]) -> String {
    format!("({})", points.iter().map(|p| vector(*p)).collect::<Vec<_>>().join(" "))
}

/// Formats vertex indices as `(a b c ...)`.
pub fn index_list(indices: &[usize]) -> String {
    format!("({})", indices.iter().map(usize::to_string).collect::<Vec<_>>().join(" "))
}

/// Fixed-precision coordinate; anything that rounds to zero prints as `0`
/// without a sign.
fn coordinate(value: f64) -> String {
    let scale = 10f64.powi(COORDINATE_PRECISION as i32);
    let value = if (value * scale).round() == 0.0 { 0.0 } else { value };
    format!("{:.*}", COORDINATE_PRECISION, value)
}
