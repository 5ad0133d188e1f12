//! Prop validation against declared specs

use regex::Regex;
use serde_json::{Map, Value};

use crate::types::{
    ComponentConfig, ComponentPropSpec, PropKind, PropValidation, ValidationOutcome,
    ValidationResult,
};

/// Validate `props` against every prop declared by `config`.
///
/// Checks never stop early: each declared prop contributes every error that
/// applies to it, in declaration order. Undeclared props are ignored, as is
/// `conditional` metadata.
pub fn validate_props(config: &ComponentConfig, props: &Map<String, Value>) -> ValidationResult {
    let mut errors = Vec::new();

    for spec in &config.props {
        match props.get(&spec.name) {
            None if spec.required => {
                errors.push(format!("Required prop '{}' is missing", spec.name));
            }
            None => {}
            Some(value) => {
                if let Some(validation) = &spec.validation {
                    check_value(spec, validation, value, &mut errors);
                }
            }
        }
    }

    ValidationResult::from_errors(errors)
}

fn check_value(
    spec: &ComponentPropSpec,
    validation: &PropValidation,
    value: &Value,
    errors: &mut Vec<String>,
) {
    if spec.kind == PropKind::Number && !value.is_number() {
        errors.push(format!("Prop '{}' must be a number", spec.name));
    }

    if let Some(number) = value.as_f64() {
        if let Some(min) = validation.min {
            if number < min {
                errors.push(format!("Prop '{}' must be at least {}", spec.name, min));
            }
        }
        if let Some(max) = validation.max {
            if number > max {
                errors.push(format!("Prop '{}' must be at most {}", spec.name, max));
            }
        }
    }

    if let (Some(pattern), Some(text)) = (&validation.pattern, value.as_str()) {
        match Regex::new(pattern) {
            Ok(regex) if !regex.is_match(text) => {
                errors.push(format!(
                    "Prop '{}' does not match pattern {}",
                    spec.name, pattern
                ));
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Invalid validation pattern for prop '{}': {}", spec.name, e);
                errors.push(format!(
                    "Prop '{}' has an invalid validation pattern",
                    spec.name
                ));
            }
        }
    }

    if let Some(custom) = &validation.custom {
        match custom.check(value) {
            ValidationOutcome::Valid => {}
            ValidationOutcome::Invalid => {
                errors.push(format!("Prop '{}' failed custom validation", spec.name));
            }
            ValidationOutcome::Message(message) => errors.push(message),
        }
    }
}
