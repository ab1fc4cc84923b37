use std::f64::consts::{FRAC_PI_2, PI, TAU};

use cyclokit_core::{approx_eq, normalize_angle, GeometryError, Point};

use super::segment::Segment;

/// A polygon vertex with its polar angle around the polygon center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub index: usize,
    pub position: Point,
    pub angle: f64,
}

/// Result of [`RegularPolygon::find_closest_edge`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestEdge {
    pub edge_index: usize,
    pub distance: f64,
    pub closest_point: Point,
    pub t: f64,
}

/// The edge a polygon should rest on before rolling, and the rotation that
/// makes its outward normal point straight down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestingEdge {
    pub edge_index: usize,
    pub adjustment_rotation: f64,
}

/// A regular polygon centered at the origin.
///
/// Vertex `i` sits at angle `π/2 + rotation_offset + 2πi/n`, so the
/// unrotated layout has vertex 0 on top and vertices wind counter-clockwise.
/// Vertices and edges are recomputed in full whenever `sides`, `radius` or
/// `rotation_offset` change.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularPolygon {
    sides: usize,
    radius: f64,
    rotation_offset: f64,
    vertices: Vec<Vertex>,
    edges: Vec<Segment>,
}

impl RegularPolygon {
    /// Creates a polygon with `sides` vertices on a circle of `radius`.
    pub fn new(sides: usize, radius: f64) -> Result<Self, GeometryError> {
        Self::with_rotation(sides, radius, 0.0)
    }

    pub fn with_rotation(
        sides: usize,
        radius: f64,
        rotation_offset: f64,
    ) -> Result<Self, GeometryError> {
        validate(sides, radius)?;
        if !rotation_offset.is_finite() {
            return Err(GeometryError::invalid_geometry(
                "rotation offset must be finite",
            ));
        }
        let mut polygon = Self {
            sides,
            radius,
            rotation_offset,
            vertices: Vec::with_capacity(sides),
            edges: Vec::with_capacity(sides),
        };
        polygon.recompute();
        Ok(polygon)
    }

    fn recompute(&mut self) {
        let n = self.sides as f64;
        self.vertices = (0..self.sides)
            .map(|index| {
                let angle = FRAC_PI_2 + self.rotation_offset + TAU * index as f64 / n;
                Vertex {
                    index,
                    position: Point::from_polar(self.radius, angle),
                    angle,
                }
            })
            .collect();
        self.edges = (0..self.sides)
            .map(|i| {
                Segment::new(
                    self.vertices[i].position,
                    self.vertices[(i + 1) % self.sides].position,
                )
            })
            .collect();
    }

    pub fn sides(&self) -> usize {
        self.sides
    }

    /// Circumscribed radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn rotation_offset(&self) -> f64 {
        self.rotation_offset
    }

    pub fn center(&self) -> Point {
        Point::ORIGIN
    }

    /// Changes the side count and recomputes the layout.
    pub fn set_sides(&mut self, sides: usize) -> Result<(), GeometryError> {
        validate(sides, self.radius)?;
        self.sides = sides;
        self.recompute();
        Ok(())
    }

    pub fn set_rotation_offset(&mut self, rotation_offset: f64) -> Result<(), GeometryError> {
        if !rotation_offset.is_finite() {
            return Err(GeometryError::invalid_geometry(
                "rotation offset must be finite",
            ));
        }
        self.rotation_offset = rotation_offset;
        self.recompute();
        Ok(())
    }

    /// Adds `delta` radians to the rotation offset.
    pub fn rotate(&mut self, delta: f64) {
        self.rotation_offset += delta;
        self.recompute();
    }

    /// Vertex `i`, taken modulo the side count.
    pub fn vertex(&self, i: usize) -> Vertex {
        self.vertices[i % self.sides]
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Edge `i` joins vertex `i` to vertex `i + 1` (both modulo the side count).
    pub fn edge(&self, i: usize) -> Segment {
        self.edges[i % self.sides]
    }

    pub fn edges(&self) -> &[Segment] {
        &self.edges
    }

    pub fn side_length(&self) -> f64 {
        2.0 * self.radius * (PI / self.sides as f64).sin()
    }

    /// Distance from the center to the midpoint of a side.
    pub fn apothem(&self) -> f64 {
        self.radius * (PI / self.sides as f64).cos()
    }

    pub fn interior_angle(&self) -> f64 {
        (self.sides as f64 - 2.0) * PI / self.sides as f64
    }

    /// Rotation swept per side while rolling.
    pub fn exterior_angle(&self) -> f64 {
        TAU / self.sides as f64
    }

    pub fn perimeter(&self) -> f64 {
        self.side_length() * self.sides as f64
    }

    /// The vertex with the largest y; the lowest index wins ties.
    pub fn top_vertex(&self) -> Vertex {
        let mut best = self.vertices[0];
        for v in &self.vertices[1..] {
            if v.position.y > best.position.y && !approx_eq(v.position.y, best.position.y) {
                best = *v;
            }
        }
        best
    }

    pub fn find_closest_edge(&self, point: &Point) -> ClosestEdge {
        let mut best: Option<ClosestEdge> = None;
        for (edge_index, edge) in self.edges.iter().enumerate() {
            let hit = edge.distance_to_point(point);
            if best.map_or(true, |b| hit.distance < b.distance) {
                best = Some(ClosestEdge {
                    edge_index,
                    distance: hit.distance,
                    closest_point: hit.closest_point,
                    t: hit.t,
                });
            }
        }
        // A polygon always has at least three edges.
        best.unwrap_or(ClosestEdge {
            edge_index: 0,
            distance: f64::INFINITY,
            closest_point: *point,
            t: 0.0,
        })
    }

    /// Ray casting point-in-polygon test.
    pub fn contains_point(&self, point: &Point) -> bool {
        let mut inside = false;
        let mut j = self.sides - 1;
        for i in 0..self.sides {
            let pi = self.vertices[i].position;
            let pj = self.vertices[j].position;
            if ((pi.y > point.y) != (pj.y > point.y))
                && (point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x)
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Picks the edge whose outward normal is closest to `(0, -1)`.
    ///
    /// Ties go to the lowest edge index.
    pub fn bottom_edge(&self) -> RestingEdge {
        let down = Point::new(0.0, -1.0);
        let mut edge_index = 0;
        let mut best_dot = f64::NEG_INFINITY;
        for (i, edge) in self.edges.iter().enumerate() {
            let dot = edge.normal().dot(&down);
            if dot > best_dot && !approx_eq(dot, best_dot) {
                best_dot = dot;
                edge_index = i;
            }
        }
        let normal_angle = self.edges[edge_index].normal().angle();
        RestingEdge {
            edge_index,
            adjustment_rotation: normalize_angle(-FRAC_PI_2 - normal_angle),
        }
    }
}

fn validate(sides: usize, radius: f64) -> Result<(), GeometryError> {
    if sides < 3 {
        return Err(GeometryError::invalid_geometry(format!(
            "a regular polygon needs at least 3 sides, got {sides}"
        )));
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(GeometryError::invalid_geometry(format!(
            "radius must be positive, got {radius}"
        )));
    }
    Ok(())
}
