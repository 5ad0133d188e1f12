//! Publishing component metadata to a visual CMS
//!
//! The registry hands every registration to a [`CmsAdapter`] without waiting
//! for it. Publishing runs on the ambient tokio runtime when there is one and
//! on a short-lived background thread otherwise. Adapter failures are logged
//! and never reach the registry.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::Result,
    types::{ComponentConfig, ComponentPropSpec, PropKind},
};

/// File extensions offered for `file` props
pub const ALLOWED_FILE_TYPES: [&str; 6] = ["jpeg", "jpg", "png", "svg", "webp", "gif"];

/// Receives component registrations for a third-party visual editor
#[async_trait]
pub trait CmsAdapter<R>: Send + Sync {
    async fn publish(&self, renderable: R, component: CmsComponent) -> Result<()>;
}

/// Component registration payload in CMS terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsComponent {
    pub name: String,
    pub inputs: Vec<CmsInput>,
    pub can_have_children: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_image_url: Option<String>,
    pub no_wrap: bool,
}

/// One editor input, translated from a prop spec
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsInput {
    pub name: String,
    #[serde(rename = "type")]
    pub input_type: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_fields: Option<Vec<CmsInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_file_types: Option<Vec<String>>,
}

impl From<&ComponentPropSpec> for CmsInput {
    fn from(spec: &ComponentPropSpec) -> Self {
        let mut input = CmsInput {
            name: spec.name.clone(),
            input_type: spec.kind.type_name().to_string(),
            required: spec.required,
            default_value: spec.default_value.clone(),
            helper_text: spec.helper_text.clone(),
            enum_values: None,
            sub_fields: None,
            allowed_file_types: None,
        };

        match &spec.kind {
            PropKind::Enum { options } => {
                input.input_type = "string".to_string();
                input.enum_values = Some(options.clone());
            }
            PropKind::Object { options } => {
                input.sub_fields = Some(options.iter().map(CmsInput::from).collect());
            }
            PropKind::Array { options } => {
                input.input_type = "list".to_string();
                input.sub_fields = Some(options.iter().map(CmsInput::from).collect());
            }
            PropKind::File => {
                input.allowed_file_types =
                    Some(ALLOWED_FILE_TYPES.iter().map(|ext| ext.to_string()).collect());
            }
            _ => {}
        }

        input
    }
}

impl From<&ComponentConfig> for CmsComponent {
    fn from(config: &ComponentConfig) -> Self {
        CmsComponent {
            name: config.name.clone(),
            inputs: config.props.iter().map(CmsInput::from).collect(),
            can_have_children: config.children,
            preview_image_url: (!config.icon.is_empty()).then(|| config.icon.clone()),
            no_wrap: true,
        }
    }
}

/// Adapter that accepts every registration and does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCmsAdapter;

#[async_trait]
impl<R: Send + 'static> CmsAdapter<R> for NoopCmsAdapter {
    async fn publish(&self, _renderable: R, _component: CmsComponent) -> Result<()> {
        Ok(())
    }
}

/// Start publishing without waiting for the outcome
pub(crate) fn spawn_publish<R>(
    adapter: Arc<dyn CmsAdapter<R>>,
    renderable: R,
    component: CmsComponent,
) where
    R: Send + 'static,
{
    let name = component.name.clone();
    let task = {
        let name = name.clone();
        async move {
            match adapter.publish(renderable, component).await {
                Ok(()) => tracing::debug!("Published component '{}' to CMS", name),
                Err(e) => tracing::warn!("Failed to publish component '{}' to CMS: {}", name, e),
            }
        }
    };

    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        handle.spawn(task);
        return;
    }

    let spawned = std::thread::Builder::new()
        .name("empire-cms-publish".to_string())
        .spawn(move || {
            match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime.block_on(task),
                Err(e) => tracing::warn!("Failed to start CMS publish runtime: {}", e),
            }
        });
    if let Err(e) = spawned {
        tracing::warn!("Failed to spawn CMS publish for '{}': {}", name, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ComponentCategory, ComponentPropSpec};
    use serde_json::json;

    #[test]
    fn test_enum_translation() {
        let spec = ComponentPropSpec::new(
            "align",
            PropKind::Enum {
                options: vec![json!("left"), json!("center")],
            },
        );
        let input = CmsInput::from(&spec);
        assert_eq!(input.input_type, "string");
        assert_eq!(input.enum_values, Some(vec![json!("left"), json!("center")]));
        assert!(input.sub_fields.is_none());
    }

    #[test]
    fn test_object_and_array_sub_fields() {
        let fields = vec![ComponentPropSpec::new("label", PropKind::String).with_required(true)];
        let object = CmsInput::from(&ComponentPropSpec::new(
            "cta",
            PropKind::Object {
                options: fields.clone(),
            },
        ));
        assert_eq!(object.input_type, "object");
        assert_eq!(object.sub_fields.as_ref().unwrap()[0].name, "label");
        assert!(object.sub_fields.as_ref().unwrap()[0].required);

        let array = CmsInput::from(&ComponentPropSpec::new(
            "items",
            PropKind::Array { options: fields },
        ));
        assert_eq!(array.input_type, "list");
        assert_eq!(array.sub_fields.unwrap().len(), 1);
    }

    #[test]
    fn test_file_allowed_types() {
        let input = CmsInput::from(&ComponentPropSpec::new("image", PropKind::File));
        assert_eq!(input.input_type, "file");
        let allowed = input.allowed_file_types.unwrap();
        assert!(allowed.contains(&"png".to_string()));
        assert!(allowed.contains(&"webp".to_string()));
    }

    #[test]
    fn test_component_translation() {
        let config = ComponentConfig::new("Grid", "Grid", ComponentCategory::Layout)
            .with_children(true)
            .with_icon("https://cdn.example.com/grid.svg")
            .with_prop(ComponentPropSpec::new("gap", PropKind::Number).with_default(16));
        let component = CmsComponent::from(&config);
        assert_eq!(component.name, "Grid");
        assert!(component.can_have_children);
        assert!(component.no_wrap);
        assert_eq!(
            component.preview_image_url.as_deref(),
            Some("https://cdn.example.com/grid.svg")
        );
        assert_eq!(component.inputs[0].default_value, Some(json!(16)));

        let json = serde_json::to_value(&component).unwrap();
        assert_eq!(json["canHaveChildren"], true);
        assert_eq!(json["inputs"][0]["type"], "number");
    }

    #[test]
    fn test_no_icon_no_preview() {
        let config = ComponentConfig::new("Plain", "Plain", ComponentCategory::Core);
        assert!(CmsComponent::from(&config).preview_image_url.is_none());
    }
}
