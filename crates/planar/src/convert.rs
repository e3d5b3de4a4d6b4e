//! Conversions to and from `nalgebra` for interop with sibling numeric code.
//!
//! `nalgebra` stores matrices column-major as well, so the flat arrays copy
//! straight across.

use nalgebra::{Matrix3, Vector2};

use crate::cfg::Scalar;
use crate::mat3::Mat3;
use crate::vec2::Vec2;

impl From<Vec2> for Vector2<Scalar> {
    #[inline]
    fn from(v: Vec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector2<Scalar>> for Vec2 {
    #[inline]
    fn from(v: Vector2<Scalar>) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Mat3> for Matrix3<Scalar> {
    #[inline]
    fn from(m: Mat3) -> Self {
        Matrix3::from_column_slice(m.as_slice())
    }
}

impl From<Matrix3<Scalar>> for Mat3 {
    fn from(m: Matrix3<Scalar>) -> Self {
        let mut out = [0.0; 9];
        out.copy_from_slice(m.as_slice());
        Mat3::from_column_major(out)
    }
}
