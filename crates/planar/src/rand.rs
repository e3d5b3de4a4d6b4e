//! Seeded random affine transforms and points.
//!
//! Model
//! - `draw_affine` composes `translation * rotation * scaling` from uniformly
//!   drawn parameters, so every draw with `scale_min > 0` is invertible.
//! - Determinism comes from the caller's RNG (`StdRng::seed_from_u64`).
//!
//! Code cross-refs: `Mat3::{rotation, scaling, translation}`

use rand::Rng;

use crate::cfg::Scalar;
use crate::mat3::Mat3;
use crate::vec2::Vec2;

/// Parameter ranges for `draw_affine`.
#[derive(Clone, Copy, Debug)]
pub struct AffineCfg {
    /// Rotation drawn from `[-max_angle, max_angle]` (radians).
    pub max_angle: Scalar,
    /// Per-axis scale drawn from `[scale_min, scale_max]`. Clamped to be
    /// positive and finite.
    pub scale_min: Scalar,
    pub scale_max: Scalar,
    /// Translation components drawn from `[-max_translation, max_translation]`.
    pub max_translation: Scalar,
}

impl Default for AffineCfg {
    fn default() -> Self {
        Self {
            max_angle: std::f32::consts::PI,
            scale_min: 0.5,
            scale_max: 2.0,
            max_translation: 10.0,
        }
    }
}

/// Largest half-width or scale handed to the sampler; `2 * LIMIT` stays finite.
const LIMIT: Scalar = 1.0e30;

/// Uniform sample in `[-half, half]`. A non-positive or NaN `half` gives 0;
/// larger values (including infinity) are clamped to `LIMIT`.
fn symmetric<R: Rng>(rng: &mut R, half: Scalar) -> Scalar {
    if half > 0.0 {
        let half = half.min(LIMIT);
        rng.gen_range(-half..=half)
    } else {
        0.0
    }
}

/// Random invertible affine transform.
pub fn draw_affine<R: Rng>(rng: &mut R, cfg: &AffineCfg) -> Mat3 {
    let lo = cfg.scale_min.max(Scalar::MIN_POSITIVE).min(LIMIT);
    let hi = cfg.scale_max.max(lo).min(LIMIT);
    let angle = symmetric(rng, cfg.max_angle);
    let sx = rng.gen_range(lo..=hi);
    let sy = rng.gen_range(lo..=hi);
    let tx = symmetric(rng, cfg.max_translation);
    let ty = symmetric(rng, cfg.max_translation);
    Mat3::translation(tx, ty) * Mat3::rotation(angle) * Mat3::scaling(sx, sy)
}

/// Uniform point in the square `[-extent, extent]²`.
pub fn draw_point<R: Rng>(rng: &mut R, extent: Scalar) -> Vec2 {
    Vec2::new(symmetric(rng, extent), symmetric(rng, extent))
}
