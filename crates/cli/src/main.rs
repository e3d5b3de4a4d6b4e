use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use planar::rand::{draw_affine, AffineCfg};
use planar::{Mat3, MathCfg, Vec2, EPSILON};
use rand::{rngs::StdRng, SeedableRng};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod args;
mod points;
mod provenance;

use args::{compose, mat3_json, parse_mat3, parse_vec2};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "2D affine transforms from the command line")]
struct Cmd {
    /// Tolerance for approximate comparisons
    #[arg(long, global = true, default_value_t = EPSILON)]
    eps: f32,

    /// Optional run tag; propagated to logs and provenance
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the matrix T * R * S (column-major JSON)
    Compose {
        /// Anticlockwise rotation in degrees
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        rotate: f32,
        /// Scale as SX,SY
        #[arg(long, value_parser = parse_vec2, allow_hyphen_values = true)]
        scale: Option<Vec2>,
        /// Translation as TX,TY
        #[arg(long, value_parser = parse_vec2, allow_hyphen_values = true)]
        translate: Option<Vec2>,
    },
    /// Print the inverse of a matrix; fails when singular
    Invert {
        #[arg(long, value_parser = parse_mat3, allow_hyphen_values = true)]
        matrix: Mat3,
    },
    /// Compare two matrices element-wise within --eps
    Equal {
        #[arg(long, value_parser = parse_mat3, allow_hyphen_values = true)]
        a: Mat3,
        #[arg(long, value_parser = parse_mat3, allow_hyphen_values = true)]
        b: Mat3,
    },
    /// Transform one point, or every x,y row of a CSV file
    Transform {
        #[arg(long, value_parser = parse_mat3, allow_hyphen_values = true)]
        matrix: Mat3,
        #[arg(long, value_parser = parse_vec2, allow_hyphen_values = true, conflicts_with = "input")]
        point: Option<Vec2>,
        #[arg(long, requires = "out")]
        input: Option<String>,
        #[arg(long)]
        out: Option<String>,
        /// Divide by the homogeneous w (perspective transform)
        #[arg(long)]
        projective: bool,
    },
    /// Print seeded random invertible affine transforms
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long, default_value_t = 10.0)]
        max_translation: f32,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = MathCfg::new(cmd.eps);
    match cmd.action {
        Action::Compose {
            rotate,
            scale,
            translate,
        } => {
            let m = compose(rotate, scale, translate);
            tracing::info!(rotate, scale = ?scale, translate = ?translate, "compose");
            println!("{}", mat3_json(&m));
            Ok(())
        }
        Action::Invert { matrix } => invert(&matrix),
        Action::Equal { a, b } => {
            let equal = a.are_equal_eps(&b, cfg.eps);
            tracing::info!(eps = cfg.eps, equal, "equal");
            println!("{equal}");
            Ok(())
        }
        Action::Transform {
            matrix,
            point,
            input,
            out,
            projective,
        } => match (point, input, out) {
            (Some(p), _, _) => transform_point(&matrix, p, projective),
            (None, Some(input), Some(out)) => {
                transform_file(&matrix, &input, &out, projective, cmd.tag)
            }
            _ => bail!("transform needs --point or --input with --out"),
        },
        Action::Sample {
            seed,
            count,
            max_translation,
        } => sample(seed, count, max_translation),
        Action::Report => report(cmd.tag),
    }
}

fn invert(m: &Mat3) -> Result<()> {
    let det = m.determinant();
    tracing::info!(det, "invert");
    let Some(inv) = m.inverse_with_determinant(det) else {
        bail!("matrix is singular (determinant is 0)");
    };
    println!("{}", mat3_json(&inv));
    Ok(())
}

fn apply(m: &Mat3, p: Vec2, projective: bool) -> Option<Vec2> {
    if projective {
        p.transform_coord(m)
    } else {
        Some(p.transform(m))
    }
}

fn transform_point(m: &Mat3, p: Vec2, projective: bool) -> Result<()> {
    tracing::info!(x = p.x, y = p.y, projective, "transform_point");
    let q = apply(m, p, projective).context("point maps to infinity (w = 0)")?;
    println!("{}", serde_json::json!([q.x, q.y]));
    Ok(())
}

fn transform_file(
    m: &Mat3,
    input: &str,
    out: &str,
    projective: bool,
    tag: Option<String>,
) -> Result<()> {
    let pts = points::read_points_csv(input)?;
    tracing::info!(input, out, n = pts.len(), projective, tag = ?tag, "transform_file");
    let mapped: Vec<Option<[f32; 2]>> = pts
        .iter()
        .map(|&p| apply(m, p, projective).map(Vec2::as_array))
        .collect();
    let at_infinity = mapped.iter().filter(|q| q.is_none()).count();
    if at_infinity > 0 {
        tracing::warn!(at_infinity, "points_at_infinity");
    }

    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let doc = serde_json::json!({ "points": mapped });
    std::fs::write(out_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {out}"))?;

    let payload = Payload::new(
        serde_json::json!({
            "matrix": m.as_array(),
            "input": input,
            "projective": projective,
            "rows": pts.len()
        }),
        tag,
    );
    provenance::write_sidecar(out_path, &payload)?;
    Ok(())
}

fn sample_matrices(seed: u64, count: usize, max_translation: f32) -> Result<Vec<Mat3>> {
    if !max_translation.is_finite() {
        bail!("--max-translation must be finite, got {max_translation}");
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let cfg = AffineCfg {
        max_translation,
        ..AffineCfg::default()
    };
    Ok((0..count).map(|_| draw_affine(&mut rng, &cfg)).collect())
}

fn sample(seed: u64, count: usize, max_translation: f32) -> Result<()> {
    tracing::info!(seed, count, max_translation, "sample");
    for m in sample_matrices(seed, count, max_translation)? {
        println!("{}", mat3_json(&m));
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let payload = Payload::new(serde_json::json!({}), tag);
    let doc = payload.document(Vec::new(), std::panic::Location::caller());
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
