//! Scalar type and tolerance defaults.
//!
//! Policy
//! - One fixed epsilon (`EPSILON`) backs every `are_equal`. Callers that need
//!   a different tolerance pass it explicitly (`are_equal_eps`) or carry a
//!   `MathCfg`.

/// Scalar used by every type in the crate.
pub type Scalar = f32;

/// Default tolerance for approximate equality.
pub const EPSILON: Scalar = 1e-4;

#[inline]
pub fn degrees_to_radians(degrees: Scalar) -> Scalar {
    degrees * (std::f32::consts::PI / 180.0)
}

#[inline]
pub fn radians_to_degrees(radians: Scalar) -> Scalar {
    radians * (180.0 / std::f32::consts::PI)
}

/// True when `a` and `b` differ by strictly less than `eps`.
#[inline]
pub(crate) fn within(a: Scalar, b: Scalar, eps: Scalar) -> bool {
    (a - b).abs() < eps
}

/// Tolerance configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MathCfg {
    pub eps: Scalar,
}

impl Default for MathCfg {
    fn default() -> Self {
        Self { eps: EPSILON }
    }
}

impl MathCfg {
    #[inline]
    pub fn new(eps: Scalar) -> Self {
        Self { eps }
    }
    #[inline]
    pub fn approx_eq(&self, a: Scalar, b: Scalar) -> bool {
        within(a, b, self.eps)
    }
}
