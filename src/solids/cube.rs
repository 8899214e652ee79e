use super::{Generator, MeshBuilder, Orientation, RawMesh, TransformOrder};
use crate::geometry::{Matrix3, Vector3};

/// Quad faces as cyclic vertex loops. Vertex `i` has bits (x, y, z) = (4, 2, 1)
/// set where that coordinate is +1.
const FACES: [[usize; 4]; 6] = [
    [0, 1, 3, 2], // -x
    [4, 6, 7, 5], // +x
    [0, 4, 5, 1], // -y
    [2, 3, 7, 6], // +y
    [0, 2, 6, 4], // -z
    [1, 5, 7, 3], // +z
];

/// Axis-aligned cube with edge length 2
#[derive(Debug, Clone, Copy, Default)]
pub struct Cube;

impl Generator for Cube {
    fn name(&self) -> &'static str {
        "Cube"
    }

    fn generate(&self, _split: bool) -> RawMesh {
        let mut builder = MeshBuilder::default();
        for x in [-1.0, 1.0] {
            for y in [-1.0, 1.0] {
                for z in [-1.0, 1.0] {
                    builder.push_vertex(Vector3::new(x, y, z));
                }
            }
        }

        for face in &FACES {
            builder.add_polygon(face);
        }
        builder.finish()
    }

    fn orient(&self, _split: bool) -> Orientation {
        Orientation {
            rotation: Matrix3::IDENTITY,
            translation: Vector3::new(1.0, 1.0, 1.0),
            order: TransformOrder::RotateThenTranslate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solids::{Solid, SolidKind};

    #[test]
    fn test_vertex_enumeration_order() {
        let mesh = Cube.generate(false);
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.vertices[0], Vector3::new(-1.0, -1.0, -1.0));
        assert_eq!(mesh.vertices[1], Vector3::new(-1.0, -1.0, 1.0));
        assert_eq!(mesh.vertices[2], Vector3::new(-1.0, 1.0, -1.0));
        assert_eq!(mesh.vertices[4], Vector3::new(1.0, -1.0, -1.0));
        assert_eq!(mesh.vertices[7], Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_faces_split_into_two_triangles() {
        let mesh = Cube.generate(false);
        assert_eq!(mesh.faces.len(), 12);
        assert_eq!(mesh.faces[0].indices, [0, 1, 3]);
        assert_eq!(mesh.faces[1].indices, [3, 2, 0]);
    }

    #[test]
    fn test_orientation_translates_by_one() {
        let raw = Cube.generate(false);
        let solid = Solid::build(SolidKind::Cube, false).unwrap();

        for (before, after) in raw.vertices.iter().zip(&solid.vertices) {
            assert_eq!(*after, *before + Vector3::new(1.0, 1.0, 1.0));
        }
        assert_eq!(solid.vertices[0], Vector3::ZERO);
        assert_eq!(solid.triangles.len(), 12);
    }

    #[test]
    fn test_bottom_normals_point_down() {
        let solid = Solid::build(SolidKind::Cube, false).unwrap();
        // -z face is the fifth quad
        for tri in &solid.triangles[8..10] {
            assert_eq!(tri.normal, Vector3::new(0.0, 0.0, -1.0));
        }
    }
}
