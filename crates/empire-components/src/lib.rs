//! Empire UI Component Catalogue
//!
//! This crate is the single source of truth for which UI building blocks exist
//! and how they are configured. It stores component metadata next to an opaque
//! renderable handle, validates prop values against declared specs, generates
//! code snippets and Markdown documentation, exports and imports the catalogue,
//! and publishes each registration to a visual CMS through an injected adapter.
//!
//! # Examples
//!
//! ```
//! use empire_components::{
//!     ComponentCategory, ComponentConfig, ComponentPropSpec, ComponentRegistry, PropKind,
//! };
//! use serde_json::{json, Map};
//!
//! let mut registry: ComponentRegistry<&'static str> = ComponentRegistry::new();
//! registry.register_component(
//!     "hero-banner.tsx",
//!     ComponentConfig::new("HeroBanner", "Hero Banner", ComponentCategory::Sections)
//!         .with_prop(ComponentPropSpec::new("title", PropKind::String).with_required(true)),
//! );
//!
//! let result = registry.validate_props("HeroBanner", &Map::new());
//! assert!(!result.valid);
//! assert_eq!(result.errors, vec!["Required prop 'title' is missing"]);
//!
//! let props = json!({ "title": "Welcome" });
//! let code = registry.generate_component_code("HeroBanner", props.as_object().unwrap());
//! assert_eq!(code, r#"<HeroBanner title="Welcome" />"#);
//! ```

pub mod adapter;
pub mod catalog;
pub mod codegen;
pub mod docs;
pub mod error;
pub mod registry;
pub mod types;
pub mod validation;

pub use adapter::{CmsAdapter, CmsComponent, CmsInput, NoopCmsAdapter, ALLOWED_FILE_TYPES};
pub use catalog::{CatalogFile, ExportFormat};
pub use error::{ComponentError, Result};
pub use registry::ComponentRegistry;
pub use types::{
    ComponentCategory, ComponentConfig, ComponentExample, ComponentPropSpec, ConditionalSpec,
    CustomValidator, PropKind, PropValidation, ValidationOutcome, ValidationResult,
};
