//!
//! Benchmark history output.
//!

pub mod csv;
pub mod data_js;
pub mod format;
pub mod json;
pub mod xlsx;

use std::path::PathBuf;

use crate::model::history::History;

use self::csv::Csv;
use self::data_js::DataJs;
use self::format::Format;
use self::json::Json;
use self::xlsx::Xlsx;

///
/// Benchmark history output, ready to be written.
///
pub enum Output {
    /// A single text file.
    SingleFile(String),
    /// A single spreadsheet file.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
}

impl Output {
    ///
    /// Writes the output to a file.
    ///
    pub fn write_to_file(self, path: PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|error| {
                anyhow::anyhow!("History output directory {parent:?} creating: {error}")
            })?;
        }
        match self {
            Output::SingleFile(content) => {
                std::fs::write(path.as_path(), content)
                    .map_err(|error| anyhow::anyhow!("History file {path:?} writing: {error}"))?;
            }
            Output::SingleFileXlsx(mut workbook) => {
                workbook
                    .save(path.as_path())
                    .map_err(|error| anyhow::anyhow!("History file {path:?} writing: {error}"))?;
            }
        }
        Ok(())
    }
}

impl TryFrom<(History, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from((history, output_format): (History, Format)) -> Result<Self, Self::Error> {
        Ok(match output_format {
            Format::DataJs => DataJs::from(history).into(),
            Format::Json => Json::from(history).into(),
            Format::Csv => Csv::try_from(history)?.into(),
            Format::Xlsx => Xlsx::try_from(history)?.into(),
        })
    }
}

impl From<DataJs> for Output {
    fn from(value: DataJs) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}
