//! Pretty-JSON load/save shared by the store and the profile.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ExperienceError;

/// Reads and parses `path`. A missing file is `Ok(None)`.
pub(crate) fn read<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ExperienceError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ExperienceError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|source| ExperienceError::Corrupted {
            path: path.to_path_buf(),
            source,
        })
}

/// Writes `value` to a sibling `.tmp` file, then renames it over `path`.
pub(crate) fn write<T: Serialize>(path: &Path, value: &T) -> Result<(), ExperienceError> {
    let json = serde_json::to_string_pretty(value)?;
    let tmp = temp_sibling(path);
    fs::write(&tmp, json).map_err(|source| ExperienceError::Write {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| ExperienceError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
