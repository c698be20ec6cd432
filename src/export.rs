use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::config::OutputConfig;
use crate::error::{Error, Result};

/// File name for an accordion, e.g. `accordion_ab12.txt`.
pub fn file_name(unique_id: &str, output: &OutputConfig) -> String {
    if output.extension.is_empty() {
        format!("{}{unique_id}", output.prefix)
    } else {
        format!("{}{unique_id}.{}", output.prefix, output.extension)
    }
}

/// Write the document into `dir` and return the path written.
pub fn write_accordion(
    dir: &Path,
    unique_id: &str,
    html: &str,
    output: &OutputConfig,
) -> Result<PathBuf> {
    let path = dir.join(file_name(unique_id, output));
    fs::write(&path, html).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;
    info!("wrote {} bytes to {}", html.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_name() {
        assert_eq!(file_name("ab12", &OutputConfig::default()), "accordion_ab12.txt");
    }

    #[test]
    fn name_without_extension() {
        let output = OutputConfig {
            prefix: "faq-".to_string(),
            extension: String::new(),
            ..OutputConfig::default()
        };
        assert_eq!(file_name("x", &output), "faq-x");
    }

    #[test]
    fn writes_file() {
        let dir = TempDir::new().unwrap();
        let path = write_accordion(dir.path(), "id1", "<div></div>", &OutputConfig::default()).unwrap();
        assert_eq!(path, dir.path().join("accordion_id1.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "<div></div>");
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = write_accordion(&missing, "id1", "x", &OutputConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
