//! Empire UI Theme Engine
//!
//! This crate holds the single active theme for an application, exposes the
//! built-in and custom theme catalogues, writes the active theme's design
//! tokens to a runtime style target, persists the user's choice, and derives
//! new themes from existing ones.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use empire_storage::MemoryPreferenceStore;
//! use empire_themes::{MemoryStyleTarget, ThemeEngine, ThemeOverrides};
//!
//! let target = Arc::new(MemoryStyleTarget::new());
//! let engine = ThemeEngine::new(target.clone(), Arc::new(MemoryPreferenceStore::new()));
//! assert_eq!(engine.get_current_theme().id, "saintvision");
//!
//! let variant = engine
//!     .create_theme_variant("neon", ThemeOverrides::default().with_primary("#00ffaa"))
//!     .unwrap();
//! engine.register_custom_theme(variant);
//! engine.set_theme("neon-variant");
//! assert_eq!(target.get("--empire-primary").as_deref(), Some("#00ffaa"));
//! ```

pub mod builtin;
pub mod config;
pub mod engine;
pub mod error;
pub mod registry;
pub mod target;
pub mod types;
pub mod variant;

pub use config::ThemeEngineConfig;
pub use engine::{ThemeEngine, THEME_PREFERENCE_KEY};
pub use error::{Result, ThemeError};
pub use registry::ThemeRegistry;
pub use target::{theme_tokens, MemoryStyleTarget, NoopStyleTarget, StyleTarget};
pub use types::{
    AnimationSpec, BrandColors, BrandOverrides, Theme, ThemeOverrides, Typography,
    TypographyOverrides,
};
