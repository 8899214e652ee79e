use std::f64::consts::FRAC_PI_4;

use super::{Generator, MeshBuilder, Orientation, RawMesh, TransformOrder};
use crate::geometry::{Matrix3, Vector3};

/// Faces around the top apex (vertex 4)
const TOP_FACES: [[usize; 3]; 4] = [[0, 2, 4], [2, 1, 4], [1, 3, 4], [3, 0, 4]];

/// Faces around the bottom apex (vertex 5)
const BOTTOM_FACES: [[usize; 3]; 4] = [[2, 0, 5], [1, 2, 5], [3, 1, 5], [0, 3, 5]];

/// Equatorial square closing the split variant, wound to face -z
const BASE: [usize; 4] = [0, 3, 1, 2];

/// Regular octahedron with vertices on the unit axes.
///
/// The split variant keeps only the upper half: the bottom pyramid is replaced
/// by the equatorial square, giving a flat base that prints without supports.
#[derive(Debug, Clone, Copy, Default)]
pub struct Octahedron;

impl Generator for Octahedron {
    fn name(&self) -> &'static str {
        "Octahedron"
    }

    fn generate(&self, split: bool) -> RawMesh {
        let mut vertices = vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, -1.0),
        ];
        if split {
            // The bottom apex is no longer referenced
            vertices.pop();
        }

        let mut builder = MeshBuilder::with_vertices(vertices);
        for face in TOP_FACES {
            builder.add_triangle(face);
        }

        if split {
            let down = Vector3::new(0.0, 0.0, -1.0);
            builder.add_flat_triangle([BASE[0], BASE[1], BASE[2]], down);
            builder.add_flat_triangle([BASE[2], BASE[3], BASE[0]], down);
        } else {
            for face in BOTTOM_FACES {
                builder.add_triangle(face);
            }
        }
        builder.finish()
    }

    fn orient(&self, split: bool) -> Orientation {
        let translation = if split {
            Vector3::new(-1.0, 1.0, 0.0)
        } else {
            Vector3::new(-1.0, 1.0, 1.0)
        };
        Orientation {
            rotation: Matrix3::rotation_z(FRAC_PI_4),
            translation,
            order: TransformOrder::RotateThenTranslate,
        }
    }
}
