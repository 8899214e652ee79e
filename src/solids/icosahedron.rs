use std::f64::consts::PI;

use super::{Generator, MeshBuilder, Orientation, RawMesh, TransformOrder};
use crate::geometry::{Matrix3, Vector3, golden_ratio};

const FACES: [[usize; 3]; 20] = [
    // around vertex 0
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    // adjacent band
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    // around vertex 3
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    // adjacent band
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Regular icosahedron with edge length 2, built from three orthogonal
/// golden rectangles
#[derive(Debug, Clone, Copy, Default)]
pub struct Icosahedron;

impl Generator for Icosahedron {
    fn name(&self) -> &'static str {
        "Icosahedron"
    }

    fn generate(&self, _split: bool) -> RawMesh {
        let phi = golden_ratio();
        let mut builder = MeshBuilder::with_vertices(vec![
            Vector3::new(-1.0, phi, 0.0),
            Vector3::new(1.0, phi, 0.0),
            Vector3::new(-1.0, -phi, 0.0),
            Vector3::new(1.0, -phi, 0.0),
            Vector3::new(0.0, -1.0, phi),
            Vector3::new(0.0, 1.0, phi),
            Vector3::new(0.0, -1.0, -phi),
            Vector3::new(0.0, 1.0, -phi),
            Vector3::new(phi, 0.0, -1.0),
            Vector3::new(phi, 0.0, 1.0),
            Vector3::new(-phi, 0.0, -1.0),
            Vector3::new(-phi, 0.0, 1.0),
        ]);

        for face in FACES {
            builder.add_triangle(face);
        }
        builder.finish()
    }

    /// Tilt about Y by half the supplement of the dihedral angle so a face
    /// becomes horizontal, then lift by the inradius.
    fn orient(&self, _split: bool) -> Orientation {
        let sqrt5 = 5.0_f64.sqrt();
        let dihedral = (-sqrt5 / 3.0).acos();
        let inradius = (3.0_f64.sqrt() / 12.0) * (3.0 + sqrt5) * 2.0;

        Orientation {
            rotation: Matrix3::rotation_y((PI - dihedral) / 2.0),
            translation: Vector3::new(-2.0, 2.0, inradius),
            order: TransformOrder::RotateThenTranslate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solids::{Solid, SolidKind};

    #[test]
    fn test_every_edge_has_length_two() {
        let mesh = Icosahedron.generate(false);
        assert_eq!(mesh.vertices.len(), 12);
        assert_eq!(mesh.faces.len(), 20);

        for face in &mesh.faces {
            let [a, b, c] = face.indices.map(|i| mesh.vertices[i]);
            for edge in [b - a, c - b, a - c] {
                assert!((edge.length() - 2.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_vertex_enumeration_order() {
        let mesh = Icosahedron.generate(false);
        let phi = golden_ratio();

        assert_eq!(mesh.vertices[0], Vector3::new(-1.0, phi, 0.0));
        assert_eq!(mesh.vertices[3], Vector3::new(1.0, -phi, 0.0));
        assert_eq!(mesh.vertices[4], Vector3::new(0.0, -1.0, phi));
        assert_eq!(mesh.vertices[8], Vector3::new(phi, 0.0, -1.0));
        assert_eq!(mesh.vertices[11], Vector3::new(-phi, 0.0, 1.0));
    }

    #[test]
    fn test_each_vertex_touches_five_faces() {
        let mesh = Icosahedron.generate(false);
        let mut valence = [0; 12];
        for face in &mesh.faces {
            for &i in &face.indices {
                valence[i] += 1;
            }
        }
        assert_eq!(valence, [5; 12]);
    }

    #[test]
    fn test_rests_on_a_whole_face() {
        let solid = Solid::build(SolidKind::Icosahedron, false).unwrap();
        let on_plate = solid.vertices.iter().filter(|v| v.z.abs() < 1e-9).count();
        assert_eq!(on_plate, 3);
    }

    #[test]
    fn test_placement_on_plate() {
        let solid = Solid::build(SolidKind::Icosahedron, false).unwrap();
        let (min, max) = solid.bounds();
        let phi = golden_ratio();

        // Rotation about Y leaves y alone, so the shift by 2 shows directly
        assert!((min.y - (2.0 - phi)).abs() < 1e-9, "{min:?}");
        assert!((max.y - (2.0 + phi)).abs() < 1e-9, "{max:?}");
        assert!((min.x - -3.868345).abs() < 1e-6, "{min:?}");
        assert!((max.x - -0.131655).abs() < 1e-6, "{max:?}");
        assert!((max.z - 3.023045).abs() < 1e-6, "{max:?}");
    }
}
