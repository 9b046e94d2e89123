//!
//! The benchmark history input.
//!

pub mod error;

use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use crate::model::history::History;

use self::error::Error as InputError;

///
/// The benchmark history input, read from a `data.js` or plain JSON file.
///
#[derive(Debug)]
pub struct Input {
    /// The file the history was read from.
    pub path: PathBuf,
    /// The history.
    pub history: History,
}

impl Input {
    /// The file name written by the benchmark action.
    pub const DATA_JS_FILE_NAME: &'static str = "data.js";

    ///
    /// Resolves the input paths.
    ///
    /// A single directory is searched recursively for `data.js` files.
    ///
    pub fn resolve_paths(paths: Vec<PathBuf>) -> anyhow::Result<Vec<PathBuf>> {
        if paths.is_empty() {
            anyhow::bail!("No input files provided");
        }
        if paths.len() > 1 || !paths[0].is_dir() {
            return Ok(paths);
        }

        let directory = paths[0].as_path();
        let resolution_pattern = format!(
            "{}/**/{}",
            directory.to_string_lossy(),
            Self::DATA_JS_FILE_NAME
        );
        let paths: Vec<PathBuf> = glob::glob(resolution_pattern.as_str())?
            .filter_map(Result::ok)
            .collect();
        if paths.is_empty() {
            anyhow::bail!(
                "No `{}` files found in directory {directory:?}",
                Self::DATA_JS_FILE_NAME
            );
        }
        Ok(paths)
    }
}

impl TryFrom<&Path> for Input {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if History::unwrap_data_js(text.as_str()).is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let history = History::from_str(text.as_str()).map_err(|error| InputError::Parsing {
            error,
            path: path.to_path_buf(),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            history,
        })
    }
}
