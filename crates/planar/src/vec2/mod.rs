//! 2-component vector: a point or direction in the plane.
//!
//! - Arithmetic (`add`, `subtract`, `scale`, `dot`) plus the matching
//!   `std::ops` impls.
//! - Geometry helpers: `rotate_by`, `degrees_between`, `distance_between`,
//!   `midpoint_between`.
//! - Point transforms through a homogeneous `Mat3`: `transform` (affine) and
//!   `transform_coord` (projective, with perspective divide).
//!
//! Code cross-refs: `Mat3`, `cfg::EPSILON`

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::cfg::{degrees_to_radians, radians_to_degrees, within, Scalar, EPSILON};
use crate::mat3::Mat3;

/// Point or direction in 2D. Plain value type; no invariants beyond
/// finiteness, which is not enforced.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: Scalar,
    pub y: Scalar,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    /// Overwrite both components.
    #[inline]
    pub fn fill(&mut self, x: Scalar, y: Scalar) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Copy `src` into `self`. Self-assignment is a no-op.
    #[inline]
    pub fn assign(&mut self, src: &Vec2) -> &mut Self {
        *self = *src;
        self
    }

    #[inline]
    pub fn as_array(self) -> [Scalar; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn length(self) -> Scalar {
        self.length_sq().sqrt()
    }

    /// Squared norm; skips the square root for comparisons.
    #[inline]
    pub fn length_sq(self) -> Scalar {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector in the direction of `self`.
    ///
    /// Pre: `self` is non-zero. A zero vector yields non-finite components;
    /// use `try_normalize` when the input may be degenerate.
    #[inline]
    pub fn normalize(self) -> Vec2 {
        let l = 1.0 / self.length();
        self.scale(l)
    }

    /// `normalize`, or `None` if the length is not above `eps`.
    #[inline]
    pub fn try_normalize(self, eps: Scalar) -> Option<Vec2> {
        let l = self.length();
        if !(l > eps) {
            return None;
        }
        Some(self.scale(1.0 / l))
    }

    #[inline]
    pub fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn subtract(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn scale(self, s: Scalar) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> Scalar {
        self.x * other.x + self.y * other.y
    }

    /// Affine transform of the point `(x, y, 1)`; translation applies.
    #[inline]
    pub fn transform(self, m: &Mat3) -> Vec2 {
        let a = m.as_array();
        Vec2::new(
            self.x * a[0] + self.y * a[3] + a[6],
            self.x * a[1] + self.y * a[4] + a[7],
        )
    }

    /// Projective transform of `(x, y, 1)` followed by the perspective divide.
    ///
    /// Returns `None` when the homogeneous `w` is exactly zero (point at
    /// infinity). For affine matrices `w == 1` and this equals `transform`.
    pub fn transform_coord(self, m: &Mat3) -> Option<Vec2> {
        let a = m.as_array();
        let w = self.x * a[2] + self.y * a[5] + a[8];
        if w == 0.0 {
            return None;
        }
        let p = self.transform(m);
        Some(Vec2::new(p.x / w, p.y / w))
    }

    /// Both components within `EPSILON` (strict).
    #[inline]
    pub fn are_equal(self, other: Vec2) -> bool {
        self.are_equal_eps(other, EPSILON)
    }

    #[inline]
    pub fn are_equal_eps(self, other: Vec2, eps: Scalar) -> bool {
        within(self.x, other.x, eps) && within(self.y, other.y, eps)
    }

    /// Rotate anticlockwise about `center` by `degrees`.
    pub fn rotate_by(self, degrees: Scalar, center: Vec2) -> Vec2 {
        let (sn, cs) = degrees_to_radians(degrees).sin_cos();
        let d = self.subtract(center);
        Vec2::new(
            d.x * cs - d.y * sn + center.x,
            d.x * sn + d.y * cs + center.y,
        )
    }

    /// Angle between `self` and `other` in degrees, in `[0, 180]`.
    ///
    /// Returns exactly `0.0` when the vectors are `are_equal`. The cosine is
    /// clamped to `[-1, 1]` so rounding never produces NaN.
    /// Pre: neither vector is zero (unless both are). A single zero input
    /// returns NaN.
    pub fn degrees_between(self, other: Vec2) -> Scalar {
        if self.are_equal(other) {
            return 0.0;
        }
        let cos = self.dot(other) / (self.length() * other.length());
        radians_to_degrees(cos.clamp(-1.0, 1.0).acos())
    }

    #[inline]
    pub fn distance_between(self, other: Vec2) -> Scalar {
        other.subtract(self).length().abs()
    }

    /// Point halfway along the segment from `self` to `other`.
    #[inline]
    pub fn midpoint_between(self, other: Vec2) -> Vec2 {
        let diff = other.subtract(self);
        self.add(diff.scale(0.5))
    }
}

impl From<[Scalar; 2]> for Vec2 {
    #[inline]
    fn from(a: [Scalar; 2]) -> Self {
        Vec2::new(a[0], a[1])
    }
}
impl From<(Scalar, Scalar)> for Vec2 {
    #[inline]
    fn from((x, y): (Scalar, Scalar)) -> Self {
        Vec2::new(x, y)
    }
}
impl From<Vec2> for [Scalar; 2] {
    #[inline]
    fn from(v: Vec2) -> Self {
        v.as_array()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2::add(self, rhs)
    }
}
impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Self::Output {
        self.subtract(rhs)
    }
}
impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Self::Output {
        Vec2::new(-self.x, -self.y)
    }
}
impl Mul<Scalar> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Scalar) -> Self::Output {
        self.scale(rhs)
    }
}
impl Mul<Vec2> for Scalar {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs.scale(self)
    }
}
impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}
impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}
impl MulAssign<Scalar> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = self.scale(rhs);
    }
}

#[cfg(test)]
mod tests;
