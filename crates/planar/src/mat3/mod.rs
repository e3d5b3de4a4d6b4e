//! 3x3 matrix holding a 2D affine transform in homogeneous coordinates.
//!
//! Storage is column-major: element (row, col) lives at `m[col * 3 + row]`.
//!
//! ```text
//!     | 0  3  6 |
//! m = | 1  4  7 |     rotation/scale in 0,1,3,4; translation in 6,7
//!     | 2  5  8 |
//! ```
//!
//! Code cross-refs: `Vec2::transform`, `Vec2::transform_coord`

use std::ops::{Add, Index, IndexMut, Mul, MulAssign, Neg, Sub};

use crate::cfg::{within, Scalar, EPSILON};
use crate::vec2::Vec2;

const IDENTITY: [Scalar; 9] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

/// Column-major 3x3 matrix. `Default` is the identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3 {
    m: [Scalar; 9],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat3 {
    #[inline]
    pub const fn identity() -> Self {
        Self { m: IDENTITY }
    }

    #[inline]
    pub const fn zeros() -> Self {
        Self { m: [0.0; 9] }
    }

    /// Build from nine scalars in column-major order.
    #[inline]
    pub const fn from_column_major(m: [Scalar; 9]) -> Self {
        Self { m }
    }

    /// Build from three columns.
    pub fn from_columns(c0: [Scalar; 3], c1: [Scalar; 3], c2: [Scalar; 3]) -> Self {
        Self {
            m: [c0[0], c0[1], c0[2], c1[0], c1[1], c1[2], c2[0], c2[1], c2[2]],
        }
    }

    /// Build from three rows, as the matrix reads on paper.
    pub fn from_rows(r0: [Scalar; 3], r1: [Scalar; 3], r2: [Scalar; 3]) -> Self {
        Self::from_columns(r0, r1, r2).transpose()
    }

    /// Bulk-copy nine column-major scalars.
    #[inline]
    pub fn fill(&mut self, m: &[Scalar; 9]) -> &mut Self {
        self.m = *m;
        self
    }

    #[inline]
    pub fn set_identity(&mut self) -> &mut Self {
        self.m = IDENTITY;
        self
    }

    /// Copy `src` into `self`. Self-assignment is a no-op, as for `Vec2`.
    #[inline]
    pub fn assign(&mut self, src: &Mat3) -> &mut Self {
        *self = *src;
        self
    }

    #[inline]
    pub fn as_array(&self) -> &[Scalar; 9] {
        &self.m
    }

    #[inline]
    pub fn as_slice(&self) -> &[Scalar] {
        &self.m
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Scalar] {
        &mut self.m
    }

    /// Element at (`row`, `col`). Panics if either index is >= 3.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Scalar {
        self[(row, col)]
    }

    #[inline]
    pub fn column(&self, col: usize) -> [Scalar; 3] {
        let c = col * 3;
        [self.m[c], self.m[c + 1], self.m[c + 2]]
    }

    /// Translation column as a vector.
    #[inline]
    pub fn translation_part(&self) -> Vec2 {
        Vec2::new(self.m[6], self.m[7])
    }

    /// Rule of Sarrus over the column-major layout.
    pub fn determinant(&self) -> Scalar {
        let m = &self.m;
        m[0] * m[4] * m[8] + m[1] * m[5] * m[6] + m[2] * m[3] * m[7]
            - (m[2] * m[4] * m[6] + m[0] * m[5] * m[7] + m[1] * m[3] * m[8])
    }

    /// Classical adjugate: transpose of the cofactor matrix.
    ///
    /// `adj(r, c) = (-1)^(r+c) * minor(c, r)`, written out per element.
    pub fn adjugate(&self) -> Mat3 {
        let m = &self.m;
        Mat3 {
            m: [
                m[4] * m[8] - m[5] * m[7],
                m[2] * m[7] - m[1] * m[8],
                m[1] * m[5] - m[2] * m[4],
                m[5] * m[6] - m[3] * m[8],
                m[0] * m[8] - m[2] * m[6],
                m[2] * m[3] - m[0] * m[5],
                m[3] * m[7] - m[4] * m[6],
                m[1] * m[6] - m[0] * m[7],
                m[0] * m[4] - m[1] * m[3],
            ],
        }
    }

    /// `adjugate / det` with a caller-supplied determinant.
    ///
    /// Returns `None` when `det` is exactly zero. `det` must be
    /// `self.determinant()`; a mismatched value silently yields a wrong
    /// result. Prefer `inverse`.
    pub fn inverse_with_determinant(&self, det: Scalar) -> Option<Mat3> {
        if det == 0.0 {
            return None;
        }
        Some(self.adjugate().scalar_multiply(1.0 / det))
    }

    /// Inverse, or `None` for a singular matrix (determinant exactly zero).
    #[inline]
    pub fn inverse(&self) -> Option<Mat3> {
        self.inverse_with_determinant(self.determinant())
    }

    /// Exact comparison with the identity; no tolerance.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.m == IDENTITY
    }

    pub fn transpose(&self) -> Mat3 {
        let mut out = [0.0; 9];
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] = self.m[row * 3 + col];
            }
        }
        Mat3 { m: out }
    }

    /// Matrix product `self * other`.
    pub fn multiply(&self, other: &Mat3) -> Mat3 {
        let (a, b) = (&self.m, &other.m);
        let mut out = [0.0; 9];
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] = a[row] * b[col * 3]
                    + a[3 + row] * b[col * 3 + 1]
                    + a[6 + row] * b[col * 3 + 2];
            }
        }
        Mat3 { m: out }
    }

    pub fn scalar_multiply(&self, factor: Scalar) -> Mat3 {
        Mat3 {
            m: self.m.map(|v| v * factor),
        }
    }

    /// All nine elements within `EPSILON` (strict).
    #[inline]
    pub fn are_equal(&self, other: &Mat3) -> bool {
        self.are_equal_eps(other, EPSILON)
    }

    pub fn are_equal_eps(&self, other: &Mat3, eps: Scalar) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(&a, &b)| within(a, b, eps))
    }

    /// Rotation about the implicit z axis; points stay in the XY plane.
    ///
    /// ```text
    /// | cos  -sin  0 |
    /// | sin   cos  0 |
    /// | 0     0    1 |
    /// ```
    pub fn rotation(radians: Scalar) -> Mat3 {
        let (sn, cs) = radians.sin_cos();
        Mat3 {
            m: [cs, sn, 0.0, -sn, cs, 0.0, 0.0, 0.0, 1.0],
        }
    }

    pub fn scaling(x: Scalar, y: Scalar) -> Mat3 {
        Mat3 {
            m: [x, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, 1.0],
        }
    }

    pub fn translation(x: Scalar, y: Scalar) -> Mat3 {
        Mat3 {
            m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, 1.0],
        }
    }
}

impl From<[Scalar; 9]> for Mat3 {
    #[inline]
    fn from(m: [Scalar; 9]) -> Self {
        Mat3::from_column_major(m)
    }
}
impl From<Mat3> for [Scalar; 9] {
    #[inline]
    fn from(m: Mat3) -> Self {
        m.m
    }
}

impl Index<usize> for Mat3 {
    type Output = Scalar;
    #[inline]
    fn index(&self, i: usize) -> &Scalar {
        &self.m[i]
    }
}
impl IndexMut<usize> for Mat3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Scalar {
        &mut self.m[i]
    }
}
/// `(row, col)` indexing.
impl Index<(usize, usize)> for Mat3 {
    type Output = Scalar;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Scalar {
        assert!(row < 3 && col < 3, "index ({row}, {col}) out of range");
        &self.m[col * 3 + row]
    }
}
impl IndexMut<(usize, usize)> for Mat3 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Scalar {
        assert!(row < 3 && col < 3, "index ({row}, {col}) out of range");
        &mut self.m[col * 3 + row]
    }
}

impl Mul for Mat3 {
    type Output = Mat3;
    #[inline]
    fn mul(self, rhs: Mat3) -> Self::Output {
        self.multiply(&rhs)
    }
}
impl MulAssign for Mat3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Mat3) {
        *self = self.multiply(&rhs);
    }
}
impl Mul<Scalar> for Mat3 {
    type Output = Mat3;
    #[inline]
    fn mul(self, rhs: Scalar) -> Self::Output {
        self.scalar_multiply(rhs)
    }
}
impl Mul<Vec2> for Mat3 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs.transform(&self)
    }
}
impl Add for Mat3 {
    type Output = Mat3;
    fn add(self, rhs: Mat3) -> Self::Output {
        let mut m = self.m;
        for (a, b) in m.iter_mut().zip(rhs.m) {
            *a += b;
        }
        Mat3 { m }
    }
}
impl Sub for Mat3 {
    type Output = Mat3;
    fn sub(self, rhs: Mat3) -> Self::Output {
        self + (-rhs)
    }
}
impl Neg for Mat3 {
    type Output = Mat3;
    #[inline]
    fn neg(self) -> Self::Output {
        self.scalar_multiply(-1.0)
    }
}
