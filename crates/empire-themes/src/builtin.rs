//! Built-in theme catalogue
//!
//! The catalogue is fixed at three themes. Their ids are stable and are what
//! hosts persist as the user's preference.

use std::collections::BTreeMap;

use crate::types::{AnimationSpec, BrandColors, Theme, Typography};

pub const SAINTVISION: &str = "saintvision";
pub const COSMIC: &str = "cosmic";
pub const NEON: &str = "neon";

/// All built-in themes, default first
pub fn builtin_themes() -> Vec<Theme> {
    vec![saintvision(), cosmic(), neon()]
}

/// Ids of the built-in themes in catalogue order
pub fn builtin_ids() -> [&'static str; 3] {
    [SAINTVISION, COSMIC, NEON]
}

/// Gold on black brand theme. This is the default.
pub fn saintvision() -> Theme {
    Theme {
        id: SAINTVISION.to_string(),
        name: "SaintVision Gold".to_string(),
        brand: BrandColors {
            primary: "#d4af37".to_string(),
            secondary: "#0a0a0a".to_string(),
            accent: "#f5d76e".to_string(),
            success: "#22c55e".to_string(),
            warning: "#f59e0b".to_string(),
            error: "#ef4444".to_string(),
            info: "#3b82f6".to_string(),
        },
        typography: typography("'Inter', system-ui, sans-serif", "'Playfair Display', serif"),
        spacing: spacing_scale(),
        breakpoints: breakpoints(),
        shadows: map(&[
            ("sm", "0 1px 2px rgba(0, 0, 0, 0.5)"),
            ("md", "0 4px 12px rgba(0, 0, 0, 0.6)"),
            ("lg", "0 12px 32px rgba(0, 0, 0, 0.7)"),
            ("glow", "0 0 24px rgba(212, 175, 55, 0.45)"),
        ]),
        animations: animations("0.3s"),
        custom: None,
    }
}

/// Purple on dark theme
pub fn cosmic() -> Theme {
    Theme {
        id: COSMIC.to_string(),
        name: "Cosmic Purple".to_string(),
        brand: BrandColors {
            primary: "#8b5cf6".to_string(),
            secondary: "#1e1b4b".to_string(),
            accent: "#c084fc".to_string(),
            success: "#34d399".to_string(),
            warning: "#fbbf24".to_string(),
            error: "#f87171".to_string(),
            info: "#60a5fa".to_string(),
        },
        typography: typography("'Inter', system-ui, sans-serif", "'Space Grotesk', sans-serif"),
        spacing: spacing_scale(),
        breakpoints: breakpoints(),
        shadows: map(&[
            ("sm", "0 1px 2px rgba(30, 27, 75, 0.5)"),
            ("md", "0 4px 12px rgba(30, 27, 75, 0.6)"),
            ("lg", "0 12px 32px rgba(30, 27, 75, 0.7)"),
            ("glow", "0 0 24px rgba(139, 92, 246, 0.5)"),
        ]),
        animations: animations("0.35s"),
        custom: None,
    }
}

/// High-contrast neon theme
pub fn neon() -> Theme {
    Theme {
        id: NEON.to_string(),
        name: "Neon High Contrast".to_string(),
        brand: BrandColors {
            primary: "#39ff14".to_string(),
            secondary: "#000000".to_string(),
            accent: "#ff00ff".to_string(),
            success: "#00ff9f".to_string(),
            warning: "#ffff00".to_string(),
            error: "#ff073a".to_string(),
            info: "#00ffff".to_string(),
        },
        typography: typography("'JetBrains Mono', monospace", "'Orbitron', sans-serif"),
        spacing: spacing_scale(),
        breakpoints: breakpoints(),
        shadows: map(&[
            ("sm", "0 0 4px rgba(57, 255, 20, 0.6)"),
            ("md", "0 0 12px rgba(57, 255, 20, 0.7)"),
            ("lg", "0 0 24px rgba(57, 255, 20, 0.8)"),
            ("glow", "0 0 32px rgba(255, 0, 255, 0.8)"),
        ]),
        animations: animations("0.2s"),
        custom: None,
    }
}

fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn typography(font_family: &str, heading_font: &str) -> Typography {
    Typography {
        font_family: font_family.to_string(),
        heading_font: heading_font.to_string(),
        weights: [
            ("light", 300),
            ("normal", 400),
            ("medium", 500),
            ("semibold", 600),
            ("bold", 700),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect(),
        sizes: map(&[
            ("xs", "0.75rem"),
            ("sm", "0.875rem"),
            ("base", "1rem"),
            ("lg", "1.125rem"),
            ("xl", "1.25rem"),
            ("2xl", "1.5rem"),
            ("3xl", "1.875rem"),
            ("4xl", "2.25rem"),
        ]),
    }
}

fn spacing_scale() -> BTreeMap<String, String> {
    map(&[
        ("xs", "0.25rem"),
        ("sm", "0.5rem"),
        ("md", "1rem"),
        ("lg", "1.5rem"),
        ("xl", "2rem"),
        ("2xl", "3rem"),
    ])
}

fn breakpoints() -> BTreeMap<String, String> {
    map(&[
        ("sm", "640px"),
        ("md", "768px"),
        ("lg", "1024px"),
        ("xl", "1280px"),
    ])
}

fn animations(base: &str) -> BTreeMap<String, AnimationSpec> {
    let mut animations = BTreeMap::new();
    animations.insert("fast".to_string(), AnimationSpec::new("0.15s", "ease-out"));
    animations.insert("normal".to_string(), AnimationSpec::new(base, "ease-in-out"));
    animations.insert(
        "slow".to_string(),
        AnimationSpec::new("0.6s", "cubic-bezier(0.4, 0, 0.2, 1)"),
    );
    animations
}
