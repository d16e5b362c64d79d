use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{codes, AppError};
use crate::record::IncidentRecord;

pub const FILE_FORMAT_VERSION: u32 = 1;

/// On-disk shape of a saved incident list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncidentFile {
    pub format_version: u32,
    pub incidents: Vec<IncidentRecord>,
}

#[derive(Serialize)]
struct IncidentFileRef<'a> {
    format_version: u32,
    incidents: &'a [IncidentRecord],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    pub pretty: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

fn validate_path(path: &Path) -> Result<(), AppError> {
    if path.as_os_str().is_empty() {
        return Err(AppError::new(
            codes::STORE_INVALID_PATH,
            "Incident file path is empty",
        ));
    }
    if path.is_dir() {
        return Err(AppError::new(
            codes::STORE_INVALID_PATH,
            "Incident file path must be a file (not a directory)",
        )
        .with_details(path.display().to_string()));
    }
    Ok(())
}

pub fn save_records(
    path: &Path,
    records: &[IncidentRecord],
    options: StoreOptions,
) -> Result<(), AppError> {
    validate_path(path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::new(codes::STORE_WRITE_FAILED, "Failed to create incident file directory")
                .with_details(format!("path={}; err={}", parent.display(), e))
        })?;
    }

    let file = IncidentFileRef {
        format_version: FILE_FORMAT_VERSION,
        incidents: records,
    };
    let json = if options.pretty {
        serde_json::to_string_pretty(&file)
    } else {
        serde_json::to_string(&file)
    }
    .map_err(|e| {
        AppError::new(codes::STORE_ENCODE_FAILED, "Failed to encode incident file")
            .with_details(e.to_string())
    })?;

    fs::write(path, json.as_bytes()).map_err(|e| {
        AppError::new(codes::STORE_WRITE_FAILED, "Failed to write incident file")
            .with_details(format!("path={}; err={}", path.display(), e))
    })?;
    debug!(path = %path.display(), count = records.len(), "saved incident file");
    Ok(())
}

pub fn load_records(path: &Path) -> Result<Vec<IncidentRecord>, AppError> {
    validate_path(path)?;
    if !path.exists() {
        return Err(AppError::new(codes::STORE_NOT_FOUND, "Incident file not found")
            .with_details(path.display().to_string()));
    }

    let text = fs::read_to_string(path).map_err(|e| {
        AppError::new(codes::STORE_READ_FAILED, "Failed to read incident file")
            .with_details(format!("path={}; err={}", path.display(), e))
    })?;
    let file: IncidentFile = serde_json::from_str(&text).map_err(|e| {
        AppError::new(codes::STORE_DECODE_FAILED, "Failed to decode incident file")
            .with_details(e.to_string())
    })?;
    if file.format_version != FILE_FORMAT_VERSION {
        return Err(AppError::new(
            codes::STORE_VERSION_MISMATCH,
            "Unsupported incident file version",
        )
        .with_details(format!(
            "expected={}; found={}",
            FILE_FORMAT_VERSION, file.format_version
        )));
    }

    debug!(path = %path.display(), count = file.incidents.len(), "loaded incident file");
    Ok(file.incidents)
}
