use super::{Generator, MeshBuilder, Orientation, RawMesh, TransformOrder};
use crate::geometry::{Matrix3, Vector3, golden_ratio};

/// Pentagonal faces as vertex loops into the enumeration built by `generate`
const FACES: [[usize; 5]; 12] = [
    [15, 12, 2, 10, 14],
    [8, 5, 12, 15, 18],
    [8, 6, 9, 4, 5],
    [9, 4, 0, 3, 1],
    [6, 17, 7, 1, 9],
    [0, 3, 13, 10, 2],
    [13, 11, 7, 1, 3],
    [13, 11, 19, 14, 10],
    [14, 19, 16, 18, 15],
    [17, 6, 8, 18, 16],
    [11, 7, 17, 16, 19],
    [0, 2, 12, 5, 4],
];

/// Regular dodecahedron circumscribing the cube (±1, ±1, ±1)
#[derive(Debug, Clone, Copy, Default)]
pub struct Dodecahedron;

impl Generator for Dodecahedron {
    fn name(&self) -> &'static str {
        "Dodecahedron"
    }

    fn generate(&self, _split: bool) -> RawMesh {
        let phi = golden_ratio();
        let inv_phi = 1.0 / phi;

        // For each (sx, sy) sign pair: the two cube corners along z, then one
        // point from each of the three golden rectangles.
        let mut builder = MeshBuilder::default();
        for sx in [-1.0, 1.0] {
            for sy in [-1.0, 1.0] {
                for sz in [-1.0, 1.0] {
                    builder.push_vertex(Vector3::new(sx, sy, sz));
                }
                builder.push_vertex(Vector3::new(0.0, sx * inv_phi, sy * phi));
                builder.push_vertex(Vector3::new(sx * inv_phi, sy * phi, 0.0));
                builder.push_vertex(Vector3::new(sx * phi, 0.0, sy * inv_phi));
            }
        }

        for face in &FACES {
            builder.add_polygon(face);
        }
        builder.finish()
    }

    fn orient(&self, _split: bool) -> Orientation {
        let phi = golden_ratio();
        let sqrt5 = 5.0_f64.sqrt();
        let sqrt3 = 3.0_f64.sqrt();

        // Inradius for the edge length 2/φ = √5 - 1
        let edge = sqrt5 - 1.0;
        let inradius = edge * 0.5 * (5.0 / 2.0 + 11.0 / 10.0 * sqrt5).sqrt();

        Orientation {
            rotation: Matrix3::rotation_x(phi.atan()),
            translation: Vector3::new(-sqrt3, sqrt3, inradius),
            order: TransformOrder::RotateThenTranslate,
        }
    }
}
