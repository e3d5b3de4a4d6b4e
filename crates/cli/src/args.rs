//! Argument parsers and small pure helpers behind the subcommands.

use anyhow::{bail, Context, Result};
use planar::{degrees_to_radians, Mat3, Vec2};

/// Parse `X,Y` into a vector (whitespace around either number is allowed).
pub fn parse_vec2(s: &str) -> Result<Vec2> {
    let mut parts = s.split(',');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        bail!("expected X,Y but got {s:?}");
    };
    let x: f32 = x.trim().parse().with_context(|| format!("bad x in {s:?}"))?;
    let y: f32 = y.trim().parse().with_context(|| format!("bad y in {s:?}"))?;
    Ok(Vec2::new(x, y))
}

/// Parse a JSON array of nine numbers in column-major order, or `identity`.
pub fn parse_mat3(s: &str) -> Result<Mat3> {
    if s.trim().eq_ignore_ascii_case("identity") {
        return Ok(Mat3::identity());
    }
    let m: [f32; 9] = serde_json::from_str(s)
        .with_context(|| format!("expected a JSON array of 9 numbers, got {s:?}"))?;
    Ok(Mat3::from_column_major(m))
}

/// `T * R * S`: scale first, then rotate (degrees, anticlockwise), then translate.
pub fn compose(rotate_deg: f32, scale: Option<Vec2>, translate: Option<Vec2>) -> Mat3 {
    let s = scale.map_or_else(Mat3::identity, |s| Mat3::scaling(s.x, s.y));
    let r = Mat3::rotation(degrees_to_radians(rotate_deg));
    let t = translate.map_or_else(Mat3::identity, |t| Mat3::translation(t.x, t.y));
    t * r * s
}

/// Column-major JSON array for stdout.
pub fn mat3_json(m: &Mat3) -> serde_json::Value {
    serde_json::json!(m.as_array())
}
