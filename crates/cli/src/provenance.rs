use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an output file: the command parameters and an optional run tag.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value, tag: Option<String>) -> Self {
        Self { params, tag }
    }

    /// Provenance document for `outputs`, stamped with the given callsite.
    pub fn document<'a>(
        &'a self,
        outputs: Vec<String>,
        callsite: &'a Location<'a>,
    ) -> Provenance<'a> {
        Provenance {
            code_rev: current_git_rev(),
            planar_version: planar::VERSION,
            callsite: Callsite {
                file: callsite.file(),
                line: callsite.line(),
            },
            tag: self.tag.as_deref(),
            params: &self.params,
            outputs,
        }
    }
}

/// Serialized form of a provenance sidecar.
#[derive(Serialize)]
pub struct Provenance<'a> {
    pub code_rev: String,
    pub planar_version: &'static str,
    pub callsite: Callsite<'a>,
    pub tag: Option<&'a str>,
    pub params: &'a Value,
    pub outputs: Vec<String>,
}

#[derive(Serialize)]
pub struct Callsite<'a> {
    pub file: &'a str,
    pub line: u32,
}

/// Write `<artifact>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: &Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = sidecar_path(artifact);
    if let Some(parent) = sidecar.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let doc = payload.document(
        vec![artifact.to_string_lossy().into_owned()],
        Location::caller(),
    );
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    tracing::debug!(path = %sidecar.display(), "provenance_written");
    Ok(sidecar)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash from `GIT_COMMIT` (build time, then run time) or `git rev-parse`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
