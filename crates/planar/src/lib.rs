//! Small 2D linear algebra for graphics and game code.
//!
//! Two value types carry everything:
//! - `Vec2`: a point or direction in the plane.
//! - `Mat3`: a 2D affine transform in homogeneous form, stored column-major
//!   (`m[col * 3 + row]`, translation in `m[6], m[7]`).
//!
//! All operations are pure and return new values. In-place use goes through
//! plain assignment (`m = m.multiply(&n)`), so output/input aliasing is not a
//! concern.
//!
//! Sibling numeric code can reach the flat storage via `Mat3::as_slice` and
//! `Vec2::as_array`, or convert to `nalgebra` types (see `convert`).

pub mod cfg;
pub mod convert;
pub mod mat3;
pub mod rand;
pub mod vec2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{degrees_to_radians, radians_to_degrees, MathCfg, Scalar, EPSILON};
pub use mat3::Mat3;
pub use vec2::Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{degrees_to_radians, radians_to_degrees, MathCfg, Scalar, EPSILON};
    pub use crate::mat3::Mat3;
    pub use crate::rand::{draw_affine, draw_point, AffineCfg};
    pub use crate::vec2::Vec2;
}
