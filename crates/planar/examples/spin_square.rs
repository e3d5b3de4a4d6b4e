//! Spin a unit square about its center and print the corners per step.
//!
//! Usage:
//!   cargo run -p planar --example spin_square -- 45

use planar::{degrees_to_radians, Mat3, Vec2};

fn main() {
    let step: f32 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(30.0);
    let corners = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    let center = Vec2::new(0.5, 0.5);
    // rotate about the center: T(c) * R * T(-c)
    let about_center = |deg: f32| {
        Mat3::translation(center.x, center.y)
            * Mat3::rotation(degrees_to_radians(deg))
            * Mat3::translation(-center.x, -center.y)
    };
    let mut deg = 0.0;
    while deg < 360.0 {
        let m = about_center(deg);
        let pts: Vec<String> = corners
            .iter()
            .map(|p| {
                let q = p.transform(&m);
                debug_assert!(q.are_equal_eps(p.rotate_by(deg, center), 1e-3));
                format!("({:.3}, {:.3})", q.x, q.y)
            })
            .collect();
        println!("{deg:>6.1}°: {}", pts.join(" "));
        deg += step.max(1.0);
    }
}
