use std::{collections::BTreeMap, sync::Arc};

use serde_json::{Map, Value};

use crate::{
    adapter::{spawn_publish, CmsAdapter, CmsComponent},
    catalog::{self, ExportFormat},
    codegen, docs,
    error::Result,
    types::{ComponentCategory, ComponentConfig, ValidationResult},
    validation,
};

/// Catalogue of components, keyed by name.
///
/// `R` is whatever the host uses to render a component (a function pointer, a
/// template path, a handle into a UI toolkit). The registry never looks inside
/// it.
pub struct ComponentRegistry<R> {
    configs: BTreeMap<String, ComponentConfig>,
    renderables: BTreeMap<String, R>,
    adapter: Option<Arc<dyn CmsAdapter<R>>>,
}

impl<R> ComponentRegistry<R>
where
    R: Clone + Send + Sync + 'static,
{
    /// Create an empty registry with no CMS adapter
    pub fn new() -> Self {
        Self {
            configs: BTreeMap::new(),
            renderables: BTreeMap::new(),
            adapter: None,
        }
    }

    /// Create an empty registry that publishes registrations to `adapter`
    pub fn with_adapter(adapter: Arc<dyn CmsAdapter<R>>) -> Self {
        Self {
            adapter: Some(adapter),
            ..Self::new()
        }
    }

    pub fn set_adapter(&mut self, adapter: Arc<dyn CmsAdapter<R>>) {
        self.adapter = Some(adapter);
    }

    /// Register a component, replacing any earlier registration of the same name.
    ///
    /// Publishing to the CMS adapter is started but not awaited.
    pub fn register_component(&mut self, renderable: R, config: ComponentConfig) {
        let name = config.name.clone();

        if let Some(adapter) = &self.adapter {
            spawn_publish(adapter.clone(), renderable.clone(), CmsComponent::from(&config));
        }

        let replaced = self.configs.insert(name.clone(), config).is_some();
        self.renderables.insert(name.clone(), renderable);

        if replaced {
            tracing::info!("Re-registered component '{}'", name);
        } else {
            tracing::info!("Registered component '{}'", name);
        }
    }

    pub fn get_component(&self, name: &str) -> Option<&R> {
        self.renderables.get(name)
    }

    pub fn get_component_config(&self, name: &str) -> Option<&ComponentConfig> {
        self.configs.get(name)
    }

    /// Snapshot of every config, ordered by name
    pub fn get_all_components(&self) -> Vec<ComponentConfig> {
        self.configs.values().cloned().collect()
    }

    pub fn get_components_by_category(&self, category: ComponentCategory) -> Vec<ComponentConfig> {
        self.configs
            .values()
            .filter(|config| config.category == category)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over name, display name, description
    /// and tags
    pub fn search_components(&self, query: &str) -> Vec<ComponentConfig> {
        let query_lower = query.to_lowercase();
        self.configs
            .values()
            .filter(|config| {
                config.name.to_lowercase().contains(&query_lower)
                    || config.display_name.to_lowercase().contains(&query_lower)
                    || config.description.to_lowercase().contains(&query_lower)
                    || config
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&query_lower))
            })
            .cloned()
            .collect()
    }

    /// Invocation snippet for a component. Empty if `name` is unknown.
    pub fn generate_component_code(&self, name: &str, props: &Map<String, Value>) -> String {
        self.configs
            .get(name)
            .map(|config| codegen::generate_component_code(config, props))
            .unwrap_or_default()
    }

    pub fn validate_props(&self, name: &str, props: &Map<String, Value>) -> ValidationResult {
        match self.configs.get(name) {
            Some(config) => validation::validate_props(config, props),
            None => ValidationResult::from_errors(vec![format!("Component '{}' not found", name)]),
        }
    }

    /// Markdown reference for the whole catalogue
    pub fn generate_documentation(&self) -> String {
        docs::generate_documentation(self.configs.values())
    }

    /// Serialize every config as a pretty-printed JSON array
    pub fn export_components(&self) -> String {
        match self.export_as(ExportFormat::Json) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to export components: {}", e);
                "[]".to_string()
            }
        }
    }

    pub fn export_as(&self, format: ExportFormat) -> Result<String> {
        let configs: Vec<&ComponentConfig> = self.configs.values().collect();
        catalog::serialize_configs(&configs, format)
    }

    /// Merge a JSON catalogue into the registry, overwriting by name.
    ///
    /// Malformed input is logged and leaves the registry untouched. Returns
    /// the number of entries imported.
    pub fn import_components(&mut self, text: &str) -> usize {
        match self.import_as(ExportFormat::Json, text) {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!("Failed to import components: {}", e);
                0
            }
        }
    }

    /// Like [`import_components`](Self::import_components) but for any format,
    /// reporting parse failures to the caller
    pub fn import_as(&mut self, format: ExportFormat, text: &str) -> Result<usize> {
        let configs = catalog::parse_configs(text, format)?;
        Ok(self.merge_configs(configs))
    }

    pub(crate) fn merge_configs(&mut self, configs: Vec<ComponentConfig>) -> usize {
        let mut imported = 0;
        for config in configs {
            if config.name.is_empty() {
                tracing::warn!("Skipping imported component without a name");
                continue;
            }
            self.configs.insert(config.name.clone(), config);
            imported += 1;
        }
        tracing::info!("Imported {} components", imported);
        imported
    }

    pub fn exists(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    pub fn count(&self) -> usize {
        self.configs.len()
    }

    /// Categories that currently have at least one component, in documentation order
    pub fn categories(&self) -> Vec<ComponentCategory> {
        ComponentCategory::ALL
            .into_iter()
            .filter(|category| self.configs.values().any(|c| c.category == *category))
            .collect()
    }
}

impl<R> Default for ComponentRegistry<R>
where
    R: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R> std::fmt::Debug for ComponentRegistry<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("components", &self.configs.keys().collect::<Vec<_>>())
            .field("has_adapter", &self.adapter.is_some())
            .finish()
    }
}
