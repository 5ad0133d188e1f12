//! Catalogue serialization and file helpers

use std::{fs, path::Path};

use crate::{
    error::{ComponentError, Result},
    registry::ComponentRegistry,
    types::ComponentConfig,
};

/// Textual catalogue encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        match extension {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            other => Err(ComponentError::UnsupportedFormat(format!(
                "'{}'. Use .json, .yaml, or .yml",
                other
            ))),
        }
    }
}

pub(crate) fn serialize_configs(
    configs: &[&ComponentConfig],
    format: ExportFormat,
) -> Result<String> {
    Ok(match format {
        ExportFormat::Json => serde_json::to_string_pretty(configs)?,
        ExportFormat::Yaml => serde_yaml::to_string(configs)?,
    })
}

/// Parse a whole catalogue. Any bad entry fails the whole parse.
pub(crate) fn parse_configs(text: &str, format: ExportFormat) -> Result<Vec<ComponentConfig>> {
    Ok(match format {
        ExportFormat::Json => serde_json::from_str(text)?,
        ExportFormat::Yaml => serde_yaml::from_str(text)?,
    })
}

/// Reads and writes catalogue files
pub struct CatalogFile;

impl CatalogFile {
    /// Write every config in `registry` to `path`, format chosen by extension
    pub fn save_to_file<R, P>(registry: &ComponentRegistry<R>, path: P) -> Result<()>
    where
        R: Clone + Send + Sync + 'static,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let content = registry.export_as(ExportFormat::from_path(path)?)?;
        fs::write(path, content)?;
        tracing::debug!("Saved {} components to {}", registry.count(), path.display());
        Ok(())
    }

    /// Merge the catalogue at `path` into `registry`.
    ///
    /// Unlike `import_components`, read and parse failures are returned.
    pub fn load_into<R, P>(registry: &mut ComponentRegistry<R>, path: P) -> Result<usize>
    where
        R: Clone + Send + Sync + 'static,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let format = ExportFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        registry.import_as(format, &content)
    }
}
