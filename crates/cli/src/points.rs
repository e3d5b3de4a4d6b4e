//! CSV point input via polars (`x`, `y` columns).

use anyhow::{bail, Result};
use planar::Vec2;
use polars::prelude::*;

/// Read the `x` and `y` columns of a CSV file as points.
pub fn read_points_csv(path: &str) -> Result<Vec<Vec2>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("x").cast(DataType::Float32),
            col("y").cast(DataType::Float32),
        ])
        .collect()?;
    tracing::debug!(rows = df.height(), path, "points_csv");
    let xs = df.column("x")?.f32()?;
    let ys = df.column("y")?.f32()?;
    let mut pts = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => pts.push(Vec2::new(x, y)),
            _ => bail!("{path}: row {row} is missing x or y"),
        }
    }
    Ok(pts)
}
