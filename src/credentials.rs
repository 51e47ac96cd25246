//! Service credentials.
//!
//! The key file is referenced by path, loaded once at startup into
//! process-wide state, and never mutated afterwards. Remote clients read
//! the key at call time through [`api_key`].

use crate::error::{Result, ScribeError};
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

/// Contents of the service key file: `{"api_key": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceCredentials {
    pub api_key: String,
}

static CREDENTIALS: OnceLock<ServiceCredentials> = OnceLock::new();

/// Parse a key file without touching process-wide state.
pub fn load(path: &Path) -> Result<ServiceCredentials> {
    if !path.exists() {
        return Err(ScribeError::CredentialsNotFound {
            path: path.display().to_string(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    let credentials: ServiceCredentials =
        serde_json::from_str(&contents).map_err(|e| ScribeError::Credentials {
            message: format!("failed to parse {}: {}", path.display(), e),
        })?;

    if credentials.api_key.is_empty() {
        return Err(ScribeError::Credentials {
            message: format!("empty api_key in {}", path.display()),
        });
    }

    Ok(credentials)
}

/// Load the key file into process-wide state. A second call is a no-op;
/// the first successfully loaded credentials stay in force.
pub fn init(path: &Path) -> Result<()> {
    let credentials = load(path)?;
    let _ = CREDENTIALS.set(credentials);
    Ok(())
}

/// The API key, available after [`init`] has succeeded.
pub fn api_key() -> Result<&'static str> {
    CREDENTIALS
        .get()
        .map(|c| c.api_key.as_str())
        .ok_or_else(|| ScribeError::Credentials {
            message: "credentials not initialized".to_string(),
        })
}
