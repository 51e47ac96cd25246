//! Output artifact handling.
//!
//! The output path derives deterministically from the input file's stem.
//! Pre-flight validation runs before any decode work or remote call so an
//! existing output (without overwrite permission) costs nothing.

use crate::defaults::{TEMPFILES_DIR, TRANSLATED_SUFFIX};
use crate::error::{Result, ScribeError};
use std::path::{Path, PathBuf};

/// Deterministic output path: `<out_dir>/<input_stem>_translated.txt`.
pub fn output_path(out_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    out_dir.join(format!("{stem}{TRANSLATED_SUFFIX}"))
}

/// Validate every path involved in a run before any expensive work.
///
/// Returns the output path on success. Checks, in order: input exists,
/// credentials file exists, output directory exists, and the output path is
/// free unless overwrite was requested.
pub fn preflight(
    input: &Path,
    credentials: &Path,
    out_dir: &Path,
    overwrite: bool,
) -> Result<PathBuf> {
    if !input.exists() {
        return Err(ScribeError::InputNotFound {
            path: input.display().to_string(),
        });
    }
    if !credentials.exists() {
        return Err(ScribeError::CredentialsNotFound {
            path: credentials.display().to_string(),
        });
    }
    if !out_dir.is_dir() {
        return Err(ScribeError::OutputDirNotFound {
            path: out_dir.display().to_string(),
        });
    }

    let output = output_path(out_dir, input);
    if output.exists() && !overwrite {
        return Err(ScribeError::OutputExists {
            path: output.display().to_string(),
        });
    }

    Ok(output)
}

/// Write the final text as a single UTF-8 artifact.
pub fn write(text: &str, path: &Path) -> Result<()> {
    std::fs::write(path, text)?;
    Ok(())
}

/// Finish the intermediate working copy's lifecycle.
///
/// With retention requested, the copy moves into `<out_dir>/tempfiles/`
/// (created on demand); otherwise it is deleted. Returns the retained path,
/// if any.
pub fn retain_or_remove(
    working_copy: &Path,
    out_dir: &Path,
    keep: bool,
) -> Result<Option<PathBuf>> {
    if !keep {
        std::fs::remove_file(working_copy)?;
        return Ok(None);
    }

    let temp_dir = out_dir.join(TEMPFILES_DIR);
    std::fs::create_dir_all(&temp_dir)?;

    let file_name = working_copy
        .file_name()
        .ok_or_else(|| ScribeError::Other(format!(
            "working copy has no file name: {}",
            working_copy.display()
        )))?;
    let retained = temp_dir.join(file_name);

    std::fs::copy(working_copy, &retained)?;
    std::fs::remove_file(working_copy)?;
    Ok(Some(retained))
}
