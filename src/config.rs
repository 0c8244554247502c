use std::fs;
use std::path::Path;

use crate::error::IconError;
use crate::models::IconSpec;

/// Conventional spec file name, looked up in the working directory.
pub const SPEC_FILE: &str = "iconspec.json";

/// Load the icon spec: `iconspec.json` when present, built-in iOS
/// defaults otherwise. Fields absent from the file keep their defaults.
pub fn load_spec() -> Result<IconSpec, IconError> {
    load_spec_from(Path::new(SPEC_FILE))
}

pub fn load_spec_from(path: &Path) -> Result<IconSpec, IconError> {
    if !path.exists() {
        return Ok(IconSpec::default());
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| IconError::Spec {
        path: path.to_path_buf(),
        source: e,
    })
}
