//! Core theme types and data structures

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A complete, named bundle of design tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Unique theme id
    pub id: String,
    /// Human-readable name
    pub name: String,
    pub brand: BrandColors,
    pub typography: Typography,
    /// Spacing scale, token name to CSS length
    pub spacing: BTreeMap<String, String>,
    /// Responsive breakpoints, name to CSS length
    pub breakpoints: BTreeMap<String, String>,
    /// Box shadows, name to CSS shadow value
    pub shadows: BTreeMap<String, String>,
    pub animations: BTreeMap<String, AnimationSpec>,
    /// Open-ended host-specific tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<BTreeMap<String, serde_json::Value>>,
}

/// Brand palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    pub info: String,
}

impl BrandColors {
    /// Palette entries in declaration order, keyed by token name
    pub fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent", self.accent.as_str()),
            ("success", self.success.as_str()),
            ("warning", self.warning.as_str()),
            ("error", self.error.as_str()),
            ("info", self.info.as_str()),
        ]
    }

    /// Look up a color by token name
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub heading_font: String,
    /// Weight name to numeric weight
    pub weights: BTreeMap<String, u16>,
    /// Size name to CSS length
    pub sizes: BTreeMap<String, String>,
}

/// Animation descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationSpec {
    /// CSS duration, e.g. `0.3s`
    pub duration: String,
    /// CSS timing function
    pub easing: String,
}

impl AnimationSpec {
    pub fn new(duration: impl Into<String>, easing: impl Into<String>) -> Self {
        Self {
            duration: duration.into(),
            easing: easing.into(),
        }
    }
}

/// Partial theme used to derive a variant.
///
/// Every field is optional. Scalar fields replace the base value; the nested
/// mappings are merged key by key with the override winning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeOverrides {
    pub id: Option<String>,
    pub name: Option<String>,
    pub brand: Option<BrandOverrides>,
    pub typography: Option<TypographyOverrides>,
    pub spacing: Option<BTreeMap<String, String>>,
    pub breakpoints: Option<BTreeMap<String, String>>,
    pub shadows: Option<BTreeMap<String, String>>,
    pub animations: Option<BTreeMap<String, AnimationSpec>>,
    pub custom: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandOverrides {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub info: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypographyOverrides {
    pub font_family: Option<String>,
    pub heading_font: Option<String>,
    pub weights: Option<BTreeMap<String, u16>>,
    pub sizes: Option<BTreeMap<String, String>>,
}

impl ThemeOverrides {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_brand(mut self, brand: BrandOverrides) -> Self {
        self.brand = Some(brand);
        self
    }

    /// Shorthand for overriding only the primary brand color
    pub fn with_primary(mut self, color: impl Into<String>) -> Self {
        self.brand.get_or_insert_with(BrandOverrides::default).primary = Some(color.into());
        self
    }

    pub fn with_typography(mut self, typography: TypographyOverrides) -> Self {
        self.typography = Some(typography);
        self
    }

    pub fn with_spacing(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.spacing
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_shadow(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.shadows
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}
