use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("no input files to merge")]
    NoInputs,

    #[error("failed to run {}: {source}", binary.display())]
    Spawn {
        binary: PathBuf,
        source: std::io::Error,
    },

    #[error("ffmpeg exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
}

/// Joins audio files end to end into a single output file.
#[async_trait]
pub trait AudioMerger: Send + Sync {
    /// Concatenate `inputs` in order into `output`, replacing it if present.
    /// Inputs are left untouched.
    async fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<(), MergeError>;
}

/// Merger backed by an external `ffmpeg` executable.
#[derive(Debug, Clone)]
pub struct FfmpegMerger {
    binary: PathBuf,
}

impl FfmpegMerger {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl Default for FfmpegMerger {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

#[async_trait]
impl AudioMerger for FfmpegMerger {
    async fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<(), MergeError> {
        if inputs.is_empty() {
            return Err(MergeError::NoInputs);
        }

        tracing::debug!(
            binary = %self.binary.display(),
            inputs = inputs.len(),
            output = %output.display(),
            "Running ffmpeg concat"
        );

        let result = Command::new(&self.binary)
            .args(concat_args(inputs, output))
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| MergeError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !result.status.success() {
            return Err(MergeError::Failed {
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        tracing::debug!(output = %output.display(), "ffmpeg concat finished");
        Ok(())
    }
}

/// Audio-only concat filter over `n` inputs:
/// `[0:a][1:a]...concat=n=N:v=0:a=1[out]`.
pub fn concat_filter(n: usize) -> String {
    let mut filter: String = (0..n).map(|i| format!("[{i}:a]")).collect();
    filter.push_str(&format!("concat=n={n}:v=0:a=1[out]"));
    filter
}

/// Full ffmpeg argument list for concatenating `inputs` into `output`.
pub fn concat_args(inputs: &[PathBuf], output: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-hide_banner", "-loglevel", "error", "-y"]
        .into_iter()
        .map(OsString::from)
        .collect();

    for input in inputs {
        args.push("-i".into());
        args.push(input.as_os_str().to_owned());
    }

    args.push("-filter_complex".into());
    args.push(concat_filter(inputs.len()).into());
    args.push("-map".into());
    args.push("[out]".into());
    args.push(output.as_os_str().to_owned());
    args
}
