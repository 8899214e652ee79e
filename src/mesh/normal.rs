use crate::error::GeometryError;
use crate::geometry::Vector3;

/// Cross products shorter than this are treated as degenerate
const MIN_CROSS_LENGTH: f64 = 1e-12;

/// Unit normal `a × b / |a × b|` of two edge vectors sharing a vertex
pub fn normal(a: Vector3, b: Vector3) -> Result<Vector3, GeometryError> {
    let cross = a.cross(b);
    let len = cross.length();
    if len.is_nan() || len <= MIN_CROSS_LENGTH {
        return Err(GeometryError::Degenerate {
            a: a.to_array(),
            b: b.to_array(),
        });
    }
    Ok(cross.scale(1.0 / len))
}

/// Normal of the triangle `[v0, v1, v2]`, flipped if needed so it points
/// away from `centroid`. The winding itself is left alone.
pub fn outward_normal(corners: [Vector3; 3], centroid: Vector3) -> Result<Vector3, GeometryError> {
    let [v0, v1, v2] = corners;
    let n = normal(v1 - v0, v2 - v0)?;

    let face_centre = (v0 + v1 + v2).scale(1.0 / 3.0);
    if n.dot(face_centre - centroid) < 0.0 {
        Ok(-n)
    } else {
        Ok(n)
    }
}
