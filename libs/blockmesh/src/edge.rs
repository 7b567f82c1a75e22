//! # Edges
//!
//! Curved connectors between two vertices. A single interior point makes an
//! arc, several make a spline; an edge without points is a straight line and
//! is never written to the dictionary.

use crate::error::{MeshError, MeshResult};
use crate::serializer::format::{vector, vector_list};
use crate::vertex::{checked_point, Vertex};
use config::constants::{approx_zero, GEOMETRY_TOLERANCE};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Curve keyword of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    #[serde(rename = "line")]
    Line,
    #[serde(rename = "arc")]
    Arc,
    #[serde(rename = "spline")]
    Spline,
    #[serde(rename = "polyLine")]
    PolyLine,
    #[serde(rename = "project")]
    Project,
}

impl EdgeKind {
    /// Returns the dictionary keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            EdgeKind::Line => "line",
            EdgeKind::Arc => "arc",
            EdgeKind::Spline => "spline",
            EdgeKind::PolyLine => "polyLine",
            EdgeKind::Project => "project",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Shape of an edge between its two endpoints.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    /// Straight line, implicit in the block definition.
    Line,
    /// Circular arc through one interior point.
    Arc(DVec3),
    /// Spline through the interior points in the given order.
    Spline(Vec<DVec3>),
    /// Piecewise linear curve through the interior points.
    PolyLine(Vec<DVec3>),
    /// Projection onto a named geometry.
    Project(String),
}

impl Curve {
    /// Classifies a list of interior points: none is a line, one an arc,
    /// more a spline.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blockmesh::edge::{Curve, EdgeKind};
    /// use glam::DVec3;
    ///
    /// assert_eq!(Curve::from_points(vec![]).kind(), EdgeKind::Line);
    /// assert_eq!(Curve::from_points(vec![DVec3::Y]).kind(), EdgeKind::Arc);
    /// assert_eq!(Curve::from_points(vec![DVec3::Y, DVec3::Z]).kind(), EdgeKind::Spline);
    /// ```
    pub fn from_points(mut points: Vec<DVec3>) -> Self {
        match points.len() {
            0 => Curve::Line,
            1 => Curve::Arc(points.remove(0)),
            _ => Curve::Spline(points),
        }
    }

    /// Returns the keyword kind of this curve.
    pub fn kind(&self) -> EdgeKind {
        match self {
            Curve::Line => EdgeKind::Line,
            Curve::Arc(_) => EdgeKind::Arc,
            Curve::Spline(_) => EdgeKind::Spline,
            Curve::PolyLine(_) => EdgeKind::PolyLine,
            Curve::Project(_) => EdgeKind::Project,
        }
    }

    /// Returns the interior points (empty for lines and projections).
    pub fn points(&self) -> &[DVec3] {
        match self {
            Curve::Arc(p) => std::slice::from_ref(p),
            Curve::Spline(points) | Curve::PolyLine(points) => points,
            Curve::Line | Curve::Project(_) => &[],
        }
    }
}

/// An edge between two mesh vertices.
///
/// Endpoint order is kept as given; duplicate detection uses [`Edge::key`].
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    start: usize,
    end: usize,
    curve: Curve,
}

impl Edge {
    /// Validates a curve against its endpoints and builds the edge.
    ///
    /// Fails when both endpoints are the same vertex, when an interior point
    /// coincides with an endpoint or another interior point, when an arc
    /// point is collinear with the endpoints, or when a spline has fewer than
    /// two interior points.
    pub fn new(start: &Vertex, end: &Vertex, curve: Curve) -> MeshResult<Self> {
        let (a, b) = (start.index, end.index);
        if a == b {
            return Err(MeshError::invalid_edge(a, b, "endpoints are the same vertex"));
        }

        let points = curve.points();
        for (i, p) in points.iter().enumerate() {
            checked_point(*p).map_err(|_| {
                MeshError::invalid_edge(a, b, format!("interior point {i} is not finite"))
            })?;
            if approx_zero(p.distance(start.point)) || approx_zero(p.distance(end.point)) {
                return Err(MeshError::invalid_edge(
                    a,
                    b,
                    format!("interior point {i} coincides with an endpoint"),
                ));
            }
            if points[..i].iter().any(|q| approx_zero(q.distance(*p))) {
                return Err(MeshError::invalid_edge(
                    a,
                    b,
                    format!("interior point {i} repeats an earlier point"),
                ));
            }
        }

        match &curve {
            Curve::Arc(p) if is_collinear(start.point, end.point, *p) => {
                // blockMesh would build an arc with infinite radius
                return Err(MeshError::invalid_edge(
                    a,
                    b,
                    "arc point is collinear with the endpoints",
                ));
            }
            Curve::Spline(points) if points.len() < 2 => {
                return Err(MeshError::invalid_edge(
                    a,
                    b,
                    format!("spline needs at least 2 interior points, got {}", points.len()),
                ));
            }
            Curve::PolyLine(points) if points.is_empty() => {
                return Err(MeshError::invalid_edge(a, b, "polyLine needs interior points"));
            }
            Curve::Project(geometry) if !is_word(geometry) => {
                return Err(MeshError::invalid_edge(
                    a,
                    b,
                    format!("invalid geometry name '{geometry}'"),
                ));
            }
            _ => {}
        }

        Ok(Self {
            start: a,
            end: b,
            curve,
        })
    }

    /// First vertex index, as supplied.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Second vertex index, as supplied.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    #[inline]
    pub fn kind(&self) -> EdgeKind {
        self.curve.kind()
    }

    /// Unordered endpoint pair used to detect duplicates.
    #[inline]
    pub fn key(&self) -> (usize, usize) {
        edge_key(self.start, self.end)
    }

    /// Returns true if the edge is written to the `edges` section.
    #[inline]
    pub fn is_explicit(&self) -> bool {
        !matches!(self.curve, Curve::Line)
    }

    /// Approximate length given the positions of `start()` and `end()`.
    ///
    /// Lines and projections report the chord.
    pub fn length(&self, start: DVec3, end: DVec3) -> f64 {
        match &self.curve {
            Curve::Line | Curve::Project(_) => start.distance(end),
            Curve::Arc(p) => arc_length(start, *p, end),
            Curve::Spline(points) | Curve::PolyLine(points) => {
                let mut length = 0.0;
                let mut previous = start;
                for p in points.iter().copied().chain(std::iter::once(end)) {
                    length += previous.distance(p);
                    previous = p;
                }
                length
            }
        }
    }

    /// Returns this edge with every interior point passed through `f`.
    ///
    /// Endpoints stay as they are; they belong to the vertex registry.
    pub fn map_points(&self, mut f: impl FnMut(DVec3) -> DVec3) -> Self {
        let curve = match &self.curve {
            Curve::Line => Curve::Line,
            Curve::Arc(p) => Curve::Arc(f(*p)),
            Curve::Spline(points) => Curve::Spline(points.iter().map(|p| f(*p)).collect()),
            Curve::PolyLine(points) => Curve::PolyLine(points.iter().map(|p| f(*p)).collect()),
            Curve::Project(geometry) => Curve::Project(geometry.clone()),
        };
        Self {
            start: self.start,
            end: self.end,
            curve,
        }
    }

    /// Formatted point list as it appears after the vertex indices.
    pub fn point_list(&self) -> Option<String> {
        match &self.curve {
            Curve::Line => None,
            Curve::Arc(p) => Some(vector(*p)),
            Curve::Spline(points) | Curve::PolyLine(points) => Some(vector_list(points)),
            Curve::Project(geometry) => Some(format!("({geometry})")),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind(), self.start, self.end)?;
        if let Some(points) = self.point_list() {
            write!(f, " {points}")?;
        }
        Ok(())
    }
}

/// Unordered vertex pair.
#[inline]
pub(crate) fn edge_key(a: usize, b: usize) -> (usize, usize) {
    (a.min(b), a.max(b))
}

/// Dictionary identifiers cannot be empty or contain whitespace or delimiters.
pub(crate) fn is_word(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '{' | '}' | ';' | '"'))
}

/// Distance of `c` from the line through `a` and `b` is below tolerance.
fn is_collinear(a: DVec3, b: DVec3, c: DVec3) -> bool {
    let ab = b - a;
    let ac = c - a;
    approx_zero(ab.cross(ac).length() / ab.length())
}

/// Length of the circular arc from `a` through `b` to `c`.
fn arc_length(a: DVec3, b: DVec3, c: DVec3) -> f64 {
    let ab = b - a;
    let ac = c - a;
    let normal = ab.cross(ac);
    let denominator = 2.0 * normal.length_squared();
    if denominator < GEOMETRY_TOLERANCE * GEOMETRY_TOLERANCE {
        return a.distance(b) + b.distance(c);
    }

    let center = a
        + (ac.length_squared() * normal.cross(ab) + ab.length_squared() * ac.cross(normal))
            / denominator;
    let radius = a.distance(center);

    let angle = |u: DVec3, v: DVec3| u.cross(v).length().atan2(u.dot(v));
    let (ra, rb, rc) = (a - center, b - center, c - center);
    radius * (angle(ra, rb) + angle(rb, rc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn endpoints() -> (Vertex, Vertex) {
        (
            Vertex {
                index: 0,
                point: DVec3::ZERO,
            },
            Vertex {
                index: 1,
                point: DVec3::X,
            },
        )
    }

    fn make_edge(curve: Curve) -> MeshResult<Edge> {
        let (a, b) = endpoints();
        Edge::new(&a, &b, curve)
    }

    #[test]
    fn test_straight_edge_is_implicit() {
        let edge = make_edge(Curve::from_points(vec![])).unwrap();
        assert_eq!(edge.kind(), EdgeKind::Line);
        assert!(!edge.is_explicit());
        assert!(edge.point_list().is_none());
    }

    #[test]
    fn test_arc_edge_format() {
        let edge = make_edge(Curve::from_points(vec![DVec3::new(0.0, 0.25, 0.0)])).unwrap();
        assert_eq!(edge.kind(), EdgeKind::Arc);
        assert_eq!(edge.to_string(), "arc 0 1 (0.00000000 0.25000000 0.00000000)");
    }

    #[test]
    fn test_spline_edge_format_keeps_order() {
        let points = vec![
            DVec3::new(0.7, 0.1, 0.0),
            DVec3::new(0.5, 0.2, 0.0),
            DVec3::new(0.3, 0.1, 0.0),
        ];
        let edge = make_edge(Curve::from_points(points)).unwrap();
        assert_eq!(edge.kind(), EdgeKind::Spline);
        assert_eq!(
            edge.to_string(),
            "spline 0 1 (\
             (0.70000000 0.10000000 0.00000000) \
             (0.50000000 0.20000000 0.00000000) \
             (0.30000000 0.10000000 0.00000000))"
        );
    }

    #[test]
    fn test_polyline_and_project_format() {
        let edge = make_edge(Curve::PolyLine(vec![DVec3::new(0.5, 0.5, 0.0)])).unwrap();
        assert_eq!(
            edge.to_string(),
            "polyLine 0 1 ((0.50000000 0.50000000 0.00000000))"
        );

        let edge = make_edge(Curve::Project("terrain".to_string())).unwrap();
        assert_eq!(edge.to_string(), "project 0 1 (terrain)");
    }

    #[test]
    fn test_same_endpoints_rejected() {
        let (a, _) = endpoints();
        let result = Edge::new(&a, &a, Curve::Line);
        assert!(matches!(result, Err(MeshError::InvalidEdge { .. })));
    }

    #[test]
    fn test_interior_point_on_endpoint_rejected() {
        let result = make_edge(Curve::from_points(vec![DVec3::X]));
        assert!(matches!(result, Err(MeshError::InvalidEdge { .. })));

        let result = make_edge(Curve::from_points(vec![DVec3::new(0.5, 0.1, 0.0), DVec3::ZERO]));
        assert!(matches!(result, Err(MeshError::InvalidEdge { .. })));
    }

    #[test]
    fn test_repeated_interior_point_rejected() {
        let p = DVec3::new(0.5, 0.2, 0.0);
        let result = make_edge(Curve::from_points(vec![p, DVec3::new(0.7, 0.1, 0.0), p]));
        assert!(matches!(result, Err(MeshError::InvalidEdge { .. })));
    }

    #[test]
    fn test_collinear_arc_rejected() {
        let result = make_edge(Curve::from_points(vec![DVec3::new(0.5, 0.0, 0.0)]));
        assert!(matches!(result, Err(MeshError::InvalidEdge { .. })));

        // collinear splines are fine
        let points = vec![DVec3::new(0.3, 0.0, 0.0), DVec3::new(0.7, 0.0, 0.0)];
        assert!(make_edge(Curve::from_points(points)).is_ok());
    }

    #[test]
    fn test_spline_needs_two_points() {
        let result = make_edge(Curve::Spline(vec![]));
        assert!(matches!(result, Err(MeshError::InvalidEdge { .. })));

        let result = make_edge(Curve::Spline(vec![DVec3::new(0.5, 0.0, 1.0)]));
        assert!(matches!(result, Err(MeshError::InvalidEdge { .. })));

        let points = vec![DVec3::new(0.3, 0.1, 0.0), DVec3::new(0.7, 0.1, 0.0)];
        assert!(make_edge(Curve::Spline(points)).is_ok());
    }

    #[test]
    fn test_invalid_projection_name_rejected() {
        assert!(make_edge(Curve::Project("two words".to_string())).is_err());
        assert!(make_edge(Curve::Project(String::new())).is_err());
    }

    #[test]
    fn test_key_is_unordered() {
        let (a, b) = endpoints();
        let forward = Edge::new(&a, &b, Curve::Line).unwrap();
        let backward = Edge::new(&b, &a, Curve::Line).unwrap();
        assert_eq!(forward.key(), backward.key());
        assert_eq!(backward.start(), 1);
    }

    #[test]
    fn test_edge_lengths() {
        let line = make_edge(Curve::Line).unwrap();
        assert_relative_eq!(line.length(DVec3::ZERO, DVec3::X), 1.0);

        let arc = make_edge(Curve::Arc(DVec3::new(0.5, 0.5, 0.0))).unwrap();
        assert_relative_eq!(arc.length(DVec3::ZERO, DVec3::X), PI / 2.0, epsilon = 1e-12);

        let spline = make_edge(Curve::Spline(vec![DVec3::Y, DVec3::new(1.0, 1.0, 0.0)])).unwrap();
        assert_relative_eq!(spline.length(DVec3::ZERO, DVec3::X), 3.0);

        let project = make_edge(Curve::Project("terrain".to_string())).unwrap();
        assert_relative_eq!(project.length(DVec3::ZERO, DVec3::X), 1.0);
    }

    #[test]
    fn test_major_arc_length() {
        // three quarters of a unit circle centered at (0, 1, 0)
        let a = DVec3::ZERO;
        let c = DVec3::new(-1.0, 1.0, 0.0);
        let through = DVec3::new(0.0, 2.0, 0.0);
        assert_relative_eq!(arc_length(a, through, c), 1.5 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_map_points() {
        let arc = make_edge(Curve::Arc(DVec3::new(0.5, 0.1, 0.0))).unwrap();
        let moved = arc.map_points(|p| p + DVec3::Z);
        assert_eq!(moved.curve(), &Curve::Arc(DVec3::new(0.5, 0.1, 1.0)));
        assert_eq!((moved.start(), moved.end()), (0, 1));

        let project = make_edge(Curve::Project("terrain".to_string())).unwrap();
        assert_eq!(project.map_points(|p| p * 2.0), project);
    }

    #[test]
    fn test_kind_serializes_as_keyword() {
        let json = serde_json::to_string(&EdgeKind::PolyLine).unwrap();
        assert_eq!(json, "\"polyLine\"");
    }
}
