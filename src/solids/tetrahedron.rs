use super::{Generator, MeshBuilder, Orientation, RawMesh, TransformOrder};
use crate::geometry::{Matrix3, Vector3};

/// Four vertices, four triangular faces
#[derive(Debug, Clone, Copy, Default)]
pub struct Tetrahedron;

impl Generator for Tetrahedron {
    fn name(&self) -> &'static str {
        "Tetrahedron"
    }

    fn generate(&self, _split: bool) -> RawMesh {
        let z = 1.0 / 2.0_f64.sqrt();
        let mut builder = MeshBuilder::with_vertices(vec![
            Vector3::new(-1.0, 0.0, -z),
            Vector3::new(1.0, 0.0, -z),
            Vector3::new(0.0, -1.0, z),
            Vector3::new(0.0, 1.0, z),
        ]);

        for face in [[0, 2, 1], [0, 3, 1], [2, 1, 3], [0, 2, 3]] {
            builder.add_polygon(&face);
        }
        builder.finish()
    }

    /// Shift edge 0-1 onto the X axis, then roll the solid about X until
    /// face 0-2-1 lies in the z = 0 plane.
    fn orient(&self, _split: bool) -> Orientation {
        Orientation {
            rotation: Matrix3::rotation_x(2.0_f64.sqrt().atan()),
            translation: Vector3::new(-1.0, 0.0, 1.0 / 2.0_f64.sqrt()),
            order: TransformOrder::TranslateThenRotate,
        }
    }
}
