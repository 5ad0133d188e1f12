//! Theme variant derivation

use std::collections::BTreeMap;

use crate::types::{
    BrandColors, BrandOverrides, Theme, ThemeOverrides, Typography, TypographyOverrides,
};

/// Derive a new theme from `base`.
///
/// `id` and `name` are replaced when overridden; the id otherwise becomes
/// `<base id>-variant`. `brand`, `typography`, `spacing`, `breakpoints`,
/// `shadows` and `animations` are merged one level deep. `custom` is replaced
/// as a whole when present.
pub fn derive_variant(base: &Theme, overrides: ThemeOverrides) -> Theme {
    let ThemeOverrides {
        id,
        name,
        brand,
        typography,
        spacing,
        breakpoints,
        shadows,
        animations,
        custom,
    } = overrides;

    Theme {
        id: id.unwrap_or_else(|| format!("{}-variant", base.id)),
        name: name.unwrap_or_else(|| base.name.clone()),
        brand: merge_brand(&base.brand, brand),
        typography: merge_typography(&base.typography, typography),
        spacing: merge_map(&base.spacing, spacing),
        breakpoints: merge_map(&base.breakpoints, breakpoints),
        shadows: merge_map(&base.shadows, shadows),
        animations: merge_map(&base.animations, animations),
        custom: custom.or_else(|| base.custom.clone()),
    }
}

fn merge_brand(base: &BrandColors, overrides: Option<BrandOverrides>) -> BrandColors {
    let Some(o) = overrides else {
        return base.clone();
    };
    BrandColors {
        primary: o.primary.unwrap_or_else(|| base.primary.clone()),
        secondary: o.secondary.unwrap_or_else(|| base.secondary.clone()),
        accent: o.accent.unwrap_or_else(|| base.accent.clone()),
        success: o.success.unwrap_or_else(|| base.success.clone()),
        warning: o.warning.unwrap_or_else(|| base.warning.clone()),
        error: o.error.unwrap_or_else(|| base.error.clone()),
        info: o.info.unwrap_or_else(|| base.info.clone()),
    }
}

// One level deep: an overridden `weights` or `sizes` map replaces the base map.
fn merge_typography(base: &Typography, overrides: Option<TypographyOverrides>) -> Typography {
    let Some(o) = overrides else {
        return base.clone();
    };
    Typography {
        font_family: o.font_family.unwrap_or_else(|| base.font_family.clone()),
        heading_font: o.heading_font.unwrap_or_else(|| base.heading_font.clone()),
        weights: o.weights.unwrap_or_else(|| base.weights.clone()),
        sizes: o.sizes.unwrap_or_else(|| base.sizes.clone()),
    }
}

fn merge_map<V: Clone>(
    base: &BTreeMap<String, V>,
    overrides: Option<BTreeMap<String, V>>,
) -> BTreeMap<String, V> {
    let mut merged = base.clone();
    if let Some(overrides) = overrides {
        merged.extend(overrides);
    }
    merged
}
