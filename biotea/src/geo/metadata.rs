use crate::error::BioteaError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const METADATA_FILE_NAME: &str = "metadata.csv";

/// Per-sample metadata of a GEO series. `rows` are aligned to `columns`,
/// which keep the order fields were first seen upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesMetadata {
    pub accession: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SeriesMetadata {
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.rows.len()
    }

    /// Header plus one line per sample, every field double-quoted.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        push_record(&mut out, &self.columns);
        for row in &self.rows {
            push_record(&mut out, row);
        }
        out
    }

    /// Writes `metadata.csv` into `dir`, creating the directory if needed.
    /// The file only appears once it has been written completely.
    pub fn write_csv(&self, dir: &Path) -> Result<PathBuf, BioteaError> {
        fs::create_dir_all(dir).map_err(|err| BioteaError::io(dir, err))?;

        let path = dir.join(METADATA_FILE_NAME);
        let mut tmp =
            tempfile::NamedTempFile::new_in(dir).map_err(|err| BioteaError::io(dir, err))?;
        tmp.write_all(self.to_csv().as_bytes())
            .and_then(|()| tmp.flush())
            .map_err(|err| BioteaError::io(&path, err))?;
        tmp.persist(&path)
            .map_err(|err| BioteaError::io(&path, err.error))?;

        Ok(path)
    }
}

fn push_record(out: &mut String, fields: &[String]) {
    let quoted: Vec<String> = fields.iter().map(|field| quote(field)).collect();
    out.push_str(&quoted.join(","));
    out.push('\n');
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
