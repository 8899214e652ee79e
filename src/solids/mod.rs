//! The five Platonic solids
//!
//! Each topology implements [`Generator`]: it produces its vertices and
//! triangulated faces in an origin-centred frame, and the rotation and
//! translation that stand the solid flat on a build plate (lowest point at
//! z = 0). [`Solid::build`] runs both steps and computes outward normals.

pub mod builder;
pub mod cube;
pub mod dodecahedron;
pub mod icosahedron;
pub mod octahedron;
pub mod tetrahedron;

use std::fmt;
use std::str::FromStr;

use crate::error::{GeometryError, SelectionError};
use crate::geometry::{Matrix3, Vector3, add, rotate};
use crate::mesh::normal::outward_normal;

pub use builder::MeshBuilder;
pub use cube::Cube;
pub use dodecahedron::Dodecahedron;
pub use icosahedron::Icosahedron;
pub use octahedron::Octahedron;
pub use tetrahedron::Tetrahedron;

/// A triangle as produced by a generator, before normals are known
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub indices: [usize; 3],
    /// Overrides the computed normal when set
    pub fixed_normal: Option<Vector3>,
}

/// Generator output in the solid's intrinsic frame
#[derive(Debug, Clone)]
pub struct RawMesh {
    pub vertices: Vec<Vector3>,
    pub faces: Vec<Face>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformOrder {
    RotateThenTranslate,
    TranslateThenRotate,
}

/// Rigid placement moving a solid into its printing pose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub rotation: Matrix3,
    pub translation: Vector3,
    pub order: TransformOrder,
}

impl Orientation {
    pub fn apply(&self, v: Vector3) -> Vector3 {
        match self.order {
            TransformOrder::RotateThenTranslate => add(rotate(v, &self.rotation), self.translation),
            TransformOrder::TranslateThenRotate => rotate(add(v, self.translation), &self.rotation),
        }
    }
}

/// Per-topology geometry source
pub trait Generator {
    /// Display name, also the output file stem
    fn name(&self) -> &'static str;

    /// Vertices and triangles centred on the origin. `split` only changes
    /// topologies that support a flattened bottom.
    fn generate(&self, split: bool) -> RawMesh;

    /// Rotation and translation into the canonical pose
    fn orient(&self, split: bool) -> Orientation;
}

/// Solid selector, numbered as on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolidKind {
    Tetrahedron = 1,
    Cube = 2,
    Octahedron = 3,
    Dodecahedron = 4,
    Icosahedron = 5,
}

impl SolidKind {
    pub const ALL: [SolidKind; 5] = [
        SolidKind::Tetrahedron,
        SolidKind::Cube,
        SolidKind::Octahedron,
        SolidKind::Dodecahedron,
        SolidKind::Icosahedron,
    ];

    pub fn from_code(code: i64) -> Result<Self, SelectionError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() as i64 == code)
            .ok_or(SelectionError::UnknownType(code))
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn generator(self) -> Box<dyn Generator> {
        match self {
            SolidKind::Tetrahedron => Box::new(Tetrahedron),
            SolidKind::Cube => Box::new(Cube),
            SolidKind::Octahedron => Box::new(Octahedron),
            SolidKind::Dodecahedron => Box::new(Dodecahedron),
            SolidKind::Icosahedron => Box::new(Icosahedron),
        }
    }

    /// Whether `--split` changes this solid
    pub fn supports_split(self) -> bool {
        self == SolidKind::Octahedron
    }
}

impl fmt::Display for SolidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.generator().name())
    }
}

impl FromStr for SolidKind {
    type Err = SelectionError;

    /// Accepts a type code (`"4"`) or a case-insensitive name (`"dodecahedron"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i64>() {
            return Self::from_code(code);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.generator().name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SelectionError::UnknownName(s.to_string()))
    }
}

/// A triangle of a finished solid
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Indices into [`Solid::vertices`], in emitted winding order
    pub indices: [usize; 3],
    /// Unit normal pointing away from the solid's centroid
    pub normal: Vector3,
}

/// A generated, oriented polyhedron ready for encoding
#[derive(Debug, Clone)]
pub struct Solid {
    pub name: &'static str,
    pub vertices: Vec<Vector3>,
    pub triangles: Vec<Triangle>,
}

impl Solid {
    /// Generate, orient and compute normals for one solid
    pub fn build(kind: SolidKind, split: bool) -> Result<Self, GeometryError> {
        let generator = kind.generator();
        let name = generator.name();
        let RawMesh {
            mut vertices,
            faces,
        } = generator.generate(split);

        let orientation = generator.orient(split);
        for (index, v) in vertices.iter_mut().enumerate() {
            *v = orientation.apply(*v);
            if !v.is_finite() {
                return Err(GeometryError::NonFinite { solid: name, index });
            }
        }

        let centroid = centroid(&vertices);
        let triangles = faces
            .into_iter()
            .map(|face| {
                let corners = corners(&vertices, face.indices)?;
                let normal = match face.fixed_normal {
                    Some(normal) => normal,
                    None => outward_normal(corners, centroid)?,
                };
                Ok(Triangle {
                    indices: face.indices,
                    normal,
                })
            })
            .collect::<Result<Vec<_>, GeometryError>>()?;

        Ok(Self {
            name,
            vertices,
            triangles,
        })
    }

    /// The three vertex positions of `triangle`
    pub fn corners(&self, triangle: &Triangle) -> [Vector3; 3] {
        triangle.indices.map(|i| self.vertices[i])
    }

    pub fn centroid(&self) -> Vector3 {
        centroid(&self.vertices)
    }

    /// Axis-aligned bounding box as (min, max)
    pub fn bounds(&self) -> (Vector3, Vector3) {
        let mut min = Vector3::new(f64::MAX, f64::MAX, f64::MAX);
        let mut max = Vector3::new(f64::MIN, f64::MIN, f64::MIN);
        for v in &self.vertices {
            min = Vector3::new(min.x.min(v.x), min.y.min(v.y), min.z.min(v.z));
            max = Vector3::new(max.x.max(v.x), max.y.max(v.y), max.z.max(v.z));
        }
        (min, max)
    }

    pub fn min_z(&self) -> f64 {
        self.bounds().0.z
    }
}

fn centroid(vertices: &[Vector3]) -> Vector3 {
    if vertices.is_empty() {
        return Vector3::ZERO;
    }
    let sum = vertices.iter().fold(Vector3::ZERO, |acc, &v| acc + v);
    sum.scale(1.0 / vertices.len() as f64)
}

fn corners(vertices: &[Vector3], indices: [usize; 3]) -> Result<[Vector3; 3], GeometryError> {
    let fetch = |index: usize| {
        vertices
            .get(index)
            .copied()
            .ok_or(GeometryError::IndexOutOfBounds {
                index,
                len: vertices.len(),
            })
    };
    Ok([fetch(indices[0])?, fetch(indices[1])?, fetch(indices[2])?])
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn all_solids() -> Vec<Solid> {
        let mut solids: Vec<Solid> = SolidKind::ALL
            .into_iter()
            .map(|kind| Solid::build(kind, false).unwrap())
            .collect();
        solids.push(Solid::build(SolidKind::Octahedron, true).unwrap());
        solids
    }

    #[test]
    fn test_type_codes() {
        assert_eq!(SolidKind::from_code(1), Ok(SolidKind::Tetrahedron));
        assert_eq!(SolidKind::from_code(5), Ok(SolidKind::Icosahedron));
        assert_eq!(SolidKind::from_code(0), Err(SelectionError::UnknownType(0)));
        assert_eq!(
            SolidKind::from_code(99),
            Err(SelectionError::UnknownType(99))
        );
    }

    #[test]
    fn test_parse_name_or_code() {
        assert_eq!("3".parse::<SolidKind>(), Ok(SolidKind::Octahedron));
        assert_eq!("Dodecahedron".parse::<SolidKind>(), Ok(SolidKind::Dodecahedron));
        assert_eq!(" cube ".parse::<SolidKind>(), Ok(SolidKind::Cube));
        assert!("sphere".parse::<SolidKind>().is_err());
    }

    #[test]
    fn test_names() {
        let names: Vec<String> = SolidKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            names,
            ["Tetrahedron", "Cube", "Octahedron", "Dodecahedron", "Icosahedron"]
        );
    }

    #[test]
    fn test_triangle_counts_match_fan_decomposition() {
        // (faces, vertices per face)
        let expected: [(usize, usize); 5] = [(4, 3), (6, 4), (8, 3), (12, 5), (20, 3)];
        for (kind, (faces, sides)) in SolidKind::ALL.into_iter().zip(expected) {
            let solid = Solid::build(kind, false).unwrap();
            assert_eq!(solid.triangles.len() * 3, faces * (sides - 2) * 3, "{kind}");
        }
    }

    #[test]
    fn test_normals_are_unit_length() {
        for solid in all_solids() {
            for tri in &solid.triangles {
                assert!(
                    (tri.normal.length() - 1.0).abs() < TOLERANCE,
                    "{}: {:?}",
                    solid.name,
                    tri.normal
                );
            }
        }
    }

    #[test]
    fn test_normals_point_outward() {
        for solid in all_solids() {
            let centroid = solid.centroid();
            for tri in &solid.triangles {
                let [a, b, c] = solid.corners(tri);
                let face_centre = (a + b + c).scale(1.0 / 3.0);
                assert!(tri.normal.dot(face_centre - centroid) > 0.0, "{}", solid.name);
            }
        }
    }

    #[test]
    fn test_normals_are_perpendicular_to_faces() {
        for solid in all_solids() {
            for tri in &solid.triangles {
                let [a, b, c] = solid.corners(tri);
                assert!(tri.normal.dot(b - a).abs() < TOLERANCE, "{}", solid.name);
                assert!(tri.normal.dot(c - a).abs() < TOLERANCE, "{}", solid.name);
            }
        }
    }

    #[test]
    fn test_indices_in_bounds_and_distinct() {
        for solid in all_solids() {
            for tri in &solid.triangles {
                let [i, j, k] = tri.indices;
                assert!(i != j && j != k && i != k, "{}", solid.name);
                assert!(tri.indices.iter().all(|&i| i < solid.vertices.len()));
            }
        }
    }

    #[test]
    fn test_solids_sit_on_build_plate() {
        for solid in all_solids() {
            assert!(solid.min_z().abs() < TOLERANCE, "{}: {}", solid.name, solid.min_z());
        }
    }

    #[test]
    fn test_every_vertex_is_used() {
        for solid in all_solids() {
            let mut used = vec![false; solid.vertices.len()];
            for tri in &solid.triangles {
                for &i in &tri.indices {
                    used[i] = true;
                }
            }
            assert!(used.iter().all(|&u| u), "{}", solid.name);
        }
    }

    #[test]
    fn test_orientation_order() {
        let orientation = Orientation {
            rotation: Matrix3::rotation_z(std::f64::consts::FRAC_PI_2),
            translation: Vector3::new(1.0, 0.0, 0.0),
            order: TransformOrder::RotateThenTranslate,
        };
        let v = orientation.apply(Vector3::new(1.0, 0.0, 0.0));
        assert!((v - Vector3::new(1.0, 1.0, 0.0)).length() < TOLERANCE);

        let translated_first = Orientation {
            order: TransformOrder::TranslateThenRotate,
            ..orientation
        };
        let v = translated_first.apply(Vector3::new(1.0, 0.0, 0.0));
        assert!((v - Vector3::new(0.0, 2.0, 0.0)).length() < TOLERANCE);
    }

    #[test]
    fn test_out_of_bounds_face_is_rejected() {
        let vertices = vec![Vector3::ZERO; 3];
        assert_eq!(
            corners(&vertices, [0, 1, 7]),
            Err(GeometryError::IndexOutOfBounds { index: 7, len: 3 })
        );
    }
}
