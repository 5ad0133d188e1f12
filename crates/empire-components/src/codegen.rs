//! Code snippet generation

use serde_json::{Map, Value};

use crate::types::ComponentConfig;

/// Render a JSX-style invocation of `config` with `props` as attributes.
///
/// Strings are quoted, `true` is a bare flag, `false` is omitted and anything
/// else is embedded as a JSON literal in braces. Strings containing a double
/// quote fall back to the JSON literal form so the snippet stays well formed.
pub fn generate_component_code(config: &ComponentConfig, props: &Map<String, Value>) -> String {
    let attributes: Vec<String> = props
        .iter()
        .filter_map(|(key, value)| render_attribute(key, value))
        .collect();

    let mut opening = format!("<{}", config.name);
    if !attributes.is_empty() {
        opening.push(' ');
        opening.push_str(&attributes.join(" "));
    }

    if config.children {
        format!("{}>\n  {{/* children */}}\n</{}>", opening, config.name)
    } else {
        format!("{} />", opening)
    }
}

fn render_attribute(key: &str, value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.contains('"') => Some(format!("{}=\"{}\"", key, text)),
        Value::Bool(true) => Some(key.to_string()),
        Value::Bool(false) => None,
        other => Some(format!("{}={{{}}}", key, other)),
    }
}
