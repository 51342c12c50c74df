use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not read `{path}`: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv input has no header row")]
    MissingCsvHeader,
    #[error("unsupported source_type: {0}")]
    UnsupportedSource(String),
}

impl ImportError {
    /// Wire shape surfaced by the import tool for any failure.
    pub fn payload(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}

/// Parsed import result, tagged the way the tool reports it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ImportPayload {
    Csv { count: usize, rows: Vec<BTreeMap<String, String>> },
    Json { data: Value },
}

/// Imports donor or opportunity data from a CSV file path, or from JSON
/// given either a file path or a raw JSON string.
pub fn import(source_type: &str, content_or_path: &str) -> Result<ImportPayload, ImportError> {
    match source_type.to_lowercase().as_str() {
        "csv" => {
            let rows = import_csv_file(Path::new(content_or_path))?;
            Ok(ImportPayload::Csv { count: rows.len(), rows })
        }
        "json" => Ok(ImportPayload::Json { data: import_json(content_or_path)? }),
        other => Err(ImportError::UnsupportedSource(other.to_string())),
    }
}

/// File path first; if the path cannot be read, the input is treated as a
/// raw JSON document.
pub fn import_json(content_or_path: &str) -> Result<Value, ImportError> {
    match fs::read_to_string(content_or_path) {
        Ok(raw) => Ok(serde_json::from_str(&raw)?),
        Err(_) => Ok(serde_json::from_str(content_or_path)?),
    }
}

/// Demo-grade CSV reader: comma-separated, first line is the header, no
/// quoting rules. Short rows default missing columns to empty strings and
/// surplus fields are dropped.
pub fn import_csv_file(path: &Path) -> Result<Vec<BTreeMap<String, String>>, ImportError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ImportError::Read { path: path.to_path_buf(), source })?;

    let mut lines = raw.lines().filter(|line| !line.trim().is_empty());
    let header: Vec<String> = lines
        .next()
        .ok_or(ImportError::MissingCsvHeader)?
        .split(',')
        .map(|column| column.trim().to_string())
        .collect();

    let rows = lines
        .map(|line| {
            let mut fields = line.split(',').map(|field| field.trim().to_string());
            header
                .iter()
                .map(|column| (column.clone(), fields.next().unwrap_or_default()))
                .collect()
        })
        .collect();

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;
    use tempfile::NamedTempFile;

    use super::{import, ImportError, ImportPayload};

    #[test]
    fn csv_import_maps_rows_by_header() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "name,industry,last_gift_amount").expect("write header");
        writeln!(file, "TechCorp Inc.,Technology,20000").expect("write row");
        writeln!(file, "Alumni Jane Doe,Education").expect("write short row");

        let payload =
            import("csv", file.path().to_str().expect("utf8 path")).expect("csv import");
        let ImportPayload::Csv { count, rows } = payload else {
            panic!("expected csv payload");
        };

        assert_eq!(count, 2);
        assert_eq!(rows[0].get("name").map(String::as_str), Some("TechCorp Inc."));
        assert_eq!(rows[0].get("last_gift_amount").map(String::as_str), Some("20000"));
        // Missing trailing column defaults to empty rather than failing.
        assert_eq!(rows[1].get("last_gift_amount").map(String::as_str), Some(""));
    }

    #[test]
    fn json_import_accepts_raw_documents() {
        let payload =
            import("json", r#"{"donors": [{"name": "TechCorp Inc."}]}"#).expect("json import");
        let ImportPayload::Json { data } = payload else {
            panic!("expected json payload");
        };
        assert_eq!(data["donors"][0]["name"], "TechCorp Inc.");
    }

    #[test]
    fn json_import_prefers_an_existing_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "{}", json!({"source": "file"})).expect("write json");

        let payload =
            import("json", file.path().to_str().expect("utf8 path")).expect("json import");
        let ImportPayload::Json { data } = payload else {
            panic!("expected json payload");
        };
        assert_eq!(data["source"], "file");
    }

    #[test]
    fn failures_surface_the_error_wire_shape() {
        let error = import("xml", "ignored").expect_err("unsupported source");
        assert!(matches!(error, ImportError::UnsupportedSource(_)));
        assert_eq!(error.payload()["error"], "unsupported source_type: xml");

        let missing = import("csv", "/definitely/not/here.csv").expect_err("missing file");
        assert!(missing.payload()["error"].as_str().expect("message").contains("not/here.csv"));
    }
}
