use empire_components::*;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn category_strategy() -> impl Strategy<Value = ComponentCategory> {
    prop_oneof![
        Just(ComponentCategory::Core),
        Just(ComponentCategory::Layout),
        Just(ComponentCategory::Sections),
        Just(ComponentCategory::Advanced),
        Just(ComponentCategory::Custom),
    ]
}

fn prop_spec_strategy() -> impl Strategy<Value = ComponentPropSpec> {
    (
        "[a-z][a-zA-Z0-9]{0,10}",
        prop_oneof![
            Just(PropKind::String),
            Just(PropKind::Number),
            Just(PropKind::Boolean),
            Just(PropKind::Color),
            Just(PropKind::Url),
            Just(PropKind::LongText),
            Just(PropKind::Enum {
                options: vec![json!("a"), json!("b")]
            }),
        ],
        any::<bool>(),
    )
        .prop_map(|(name, kind, required)| {
            ComponentPropSpec::new(name, kind).with_required(required)
        })
}

fn config_strategy() -> impl Strategy<Value = ComponentConfig> {
    (
        "[A-Z][a-zA-Z]{0,12}",
        "[A-Za-z ]{0,20}",
        category_strategy(),
        "[a-z ]{0,30}",
        prop::collection::btree_set("[a-z]{1,8}", 0..4),
        prop::collection::vec(prop_spec_strategy(), 0..5),
        any::<bool>(),
    )
        .prop_map(|(name, display_name, category, description, tags, props, children)| {
            ComponentConfig {
                name,
                display_name,
                category,
                description,
                icon: String::new(),
                version: "1.0.0".to_string(),
                tags,
                props,
                children,
                examples: Vec::new(),
                documentation: None,
            }
        })
}

// Registration is a faithful store
proptest! {
    #[test]
    fn prop_register_then_get_is_identity(config in config_strategy()) {
        let mut registry: ComponentRegistry<()> = ComponentRegistry::new();
        registry.register_component((), config.clone());
        prop_assert_eq!(registry.get_component_config(&config.name), Some(&config));
    }
}

// Last registration for a name wins, with no field merging
proptest! {
    #[test]
    fn prop_reregister_overwrites(first in config_strategy(), mut second in config_strategy()) {
        second.name = first.name.clone();
        let mut registry: ComponentRegistry<()> = ComponentRegistry::new();
        registry.register_component((), first);
        registry.register_component((), second.clone());
        prop_assert_eq!(registry.count(), 1);
        prop_assert_eq!(registry.get_component_config(&second.name), Some(&second));
    }
}

// Each missing required prop yields exactly one missing-prop error
proptest! {
    #[test]
    fn prop_missing_required_reported_once(
        config in config_strategy(),
        extra in prop::collection::btree_map("[a-z]{1,6}", any::<i32>(), 0..4),
    ) {
        let mut registry: ComponentRegistry<()> = ComponentRegistry::new();
        registry.register_component((), config.clone());

        let props: Map<String, Value> = extra
            .into_iter()
            .filter(|(key, _)| config.prop(key).is_none())
            .map(|(key, value)| (key, Value::from(value)))
            .collect();
        let result = registry.validate_props(&config.name, &props);

        for spec in config.props.iter().filter(|p| p.required) {
            let message = format!("Required prop '{}' is missing", spec.name);
            let expected = config
                .props
                .iter()
                .filter(|p| p.required && p.name == spec.name)
                .count();
            let count = result.errors.iter().filter(|e| **e == message).count();
            prop_assert_eq!(count, expected);
        }
        prop_assert_eq!(result.valid, result.errors.is_empty());
    }
}

// Export followed by import reproduces the catalogue
proptest! {
    #[test]
    fn prop_export_import_round_trip(configs in prop::collection::vec(config_strategy(), 0..6)) {
        let mut source: ComponentRegistry<()> = ComponentRegistry::new();
        for config in configs {
            source.register_component((), config);
        }

        let mut target: ComponentRegistry<()> = ComponentRegistry::new();
        target.import_components(&source.export_components());
        prop_assert_eq!(target.get_all_components(), source.get_all_components());
    }
}
