//! Markdown documentation for the catalogue

use std::fmt::Write;

use crate::{
    codegen::generate_component_code,
    types::{ComponentCategory, ComponentConfig, ComponentPropSpec},
};

/// Render the whole catalogue as Markdown.
///
/// Components are grouped by category in the fixed order core, layout,
/// sections, advanced, custom; categories with no components are left out.
pub fn generate_documentation<'a, I>(configs: I) -> String
where
    I: IntoIterator<Item = &'a ComponentConfig>,
{
    let configs: Vec<&ComponentConfig> = configs.into_iter().collect();
    let mut doc = String::from("# Component Library\n");

    for category in ComponentCategory::ALL {
        let members: Vec<&ComponentConfig> = configs
            .iter()
            .copied()
            .filter(|c| c.category == category)
            .collect();
        if members.is_empty() {
            continue;
        }

        let _ = write!(doc, "\n## {}\n", category.title());
        for config in members {
            write_component(&mut doc, config);
        }
    }

    doc
}

fn write_component(doc: &mut String, config: &ComponentConfig) {
    let title = if config.display_name.is_empty() {
        &config.name
    } else {
        &config.display_name
    };
    let _ = write!(doc, "\n### {}\n\n", title);
    if !config.description.is_empty() {
        let _ = write!(doc, "{}\n\n", config.description);
    }

    let _ = writeln!(doc, "- **Name:** `{}`", config.name);
    if !config.version.is_empty() {
        let _ = writeln!(doc, "- **Version:** {}", config.version);
    }
    if !config.tags.is_empty() {
        let tags: Vec<&str> = config.tags.iter().map(String::as_str).collect();
        let _ = writeln!(doc, "- **Tags:** {}", tags.join(", "));
    }
    let _ = writeln!(
        doc,
        "- **Accepts children:** {}",
        if config.children { "Yes" } else { "No" }
    );

    if !config.props.is_empty() {
        doc.push_str("\n#### Props\n\n");
        doc.push_str("| Prop | Type | Required | Default | Description |\n");
        doc.push_str("|------|------|----------|---------|-------------|\n");
        for prop in &config.props {
            write_prop_row(doc, prop);
        }
    }

    if !config.examples.is_empty() {
        doc.push_str("\n#### Examples\n");
        for example in &config.examples {
            let _ = write!(doc, "\n**{}**", example.name);
            if !example.description.is_empty() {
                let _ = write!(doc, ": {}", example.description);
            }
            let code = example
                .code
                .clone()
                .unwrap_or_else(|| generate_component_code(config, &example.props));
            let _ = write!(doc, "\n\n```tsx\n{}\n```\n", code);
        }
    }

    if let Some(documentation) = &config.documentation {
        let _ = write!(doc, "\n{}\n", documentation.trim_end());
    }
}

fn write_prop_row(doc: &mut String, prop: &ComponentPropSpec) {
    let default = prop
        .default_value
        .as_ref()
        .map(|v| format!("`{}`", v))
        .unwrap_or_else(|| "-".to_string());
    let description = prop
        .helper_text
        .as_deref()
        .unwrap_or("")
        .replace('|', "\\|");
    let _ = writeln!(
        doc,
        "| `{}` | {} | {} | {} | {} |",
        prop.name,
        prop.kind.type_name(),
        if prop.required { "Yes" } else { "No" },
        default,
        description
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ComponentExample, PropKind};
    use serde_json::json;

    fn hero() -> ComponentConfig {
        ComponentConfig::new("HeroBanner", "Hero Banner", ComponentCategory::Sections)
            .with_description("Full-width banner")
            .with_tag("hero")
            .with_tag("banner")
            .with_prop(
                ComponentPropSpec::new("title", PropKind::String)
                    .with_required(true)
                    .with_helper_text("Main heading"),
            )
            .with_prop(ComponentPropSpec::new("dark", PropKind::Boolean).with_default(false))
            .with_example(
                ComponentExample::new("Basic", "Minimal usage")
                    .with_props(json!({"title": "Hi"}).as_object().cloned().unwrap()),
            )
    }

    #[test]
    fn test_empty_categories_omitted() {
        let config = hero();
        let doc = generate_documentation([&config]);
        assert!(doc.starts_with("# Component Library\n"));
        assert!(doc.contains("## Section Components"));
        assert!(!doc.contains("## Core Components"));
        assert!(!doc.contains("## Custom Components"));
    }

    #[test]
    fn test_category_order() {
        let custom = ComponentConfig::new("Z", "Zed", ComponentCategory::Custom);
        let core = ComponentConfig::new("A", "Ay", ComponentCategory::Core);
        let doc = generate_documentation([&custom, &core]);
        let core_at = doc.find("## Core Components").unwrap();
        let custom_at = doc.find("## Custom Components").unwrap();
        assert!(core_at < custom_at);
    }

    #[test]
    fn test_component_section_contents() {
        let config = hero();
        let doc = generate_documentation([&config]);
        assert!(doc.contains("### Hero Banner"));
        assert!(doc.contains("- **Name:** `HeroBanner`"));
        assert!(doc.contains("- **Tags:** banner, hero"));
        assert!(doc.contains("| `title` | string | Yes | - | Main heading |"));
        assert!(doc.contains("| `dark` | boolean | No | `false` |  |"));
        assert!(doc.contains("```tsx\n<HeroBanner title=\"Hi\" />\n```"));
    }

    #[test]
    fn test_handwritten_example_code_preferred() {
        let config = ComponentConfig::new("Card", "Card", ComponentCategory::Core)
            .with_example(ComponentExample::new("Custom", "").with_code("<Card elevated />"))
            .with_documentation("Cards group related content.\n");
        let doc = generate_documentation([&config]);
        assert!(doc.contains("**Custom**\n\n```tsx\n<Card elevated />\n```"));
        assert!(doc.ends_with("Cards group related content.\n"));
    }

    #[test]
    fn test_empty_catalogue() {
        let doc = generate_documentation(std::iter::empty());
        assert_eq!(doc, "# Component Library\n");
    }
}
