use super::{Face, RawMesh};
use crate::geometry::Vector3;

/// Accumulator for a solid's vertices and triangulated faces
#[derive(Debug, Default)]
pub struct MeshBuilder {
    vertices: Vec<Vector3>,
    faces: Vec<Face>,
}

impl MeshBuilder {
    pub fn with_vertices(vertices: Vec<Vector3>) -> Self {
        Self {
            vertices,
            faces: Vec::new(),
        }
    }

    pub fn push_vertex(&mut self, v: Vector3) {
        self.vertices.push(v);
    }

    /// Add a single triangle whose normal is computed from its edges
    pub fn add_triangle(&mut self, indices: [usize; 3]) {
        self.faces.push(Face {
            indices,
            fixed_normal: None,
        });
    }

    /// Add a triangle that keeps `normal` instead of a computed one
    pub fn add_flat_triangle(&mut self, indices: [usize; 3], normal: Vector3) {
        self.faces.push(Face {
            indices,
            fixed_normal: Some(normal),
        });
    }

    /// Add an n-sided polygon as a fan of n-2 triangles anchored at `polygon[0]`
    ///
    /// `[a, b, c, d, e]` becomes `[a, b, c]`, `[c, d, a]`, `[d, e, a]`.
    pub fn add_polygon(&mut self, polygon: &[usize]) {
        for indices in fan(polygon) {
            self.add_triangle(indices);
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    pub fn finish(self) -> RawMesh {
        RawMesh {
            vertices: self.vertices,
            faces: self.faces,
        }
    }
}

/// Fan-decompose a polygon given by vertex indices
pub fn fan(polygon: &[usize]) -> Vec<[usize; 3]> {
    let Some((&anchor, rest)) = polygon.split_first() else {
        return Vec::new();
    };
    if rest.len() < 2 {
        return Vec::new();
    }

    let mut triangles = vec![[anchor, rest[0], rest[1]]];
    for pair in rest[1..].windows(2) {
        triangles.push([pair[0], pair[1], anchor]);
    }
    triangles
}
