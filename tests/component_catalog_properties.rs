//! Property-based tests for the component catalogue
//!
//! **Feature: empire-components, Property 1: Catalogue Queries**
//! Listing, filtering and searching agree with what was registered

use empire_components::{
    CatalogFile, ComponentCategory, ComponentConfig, ComponentPropSpec, ComponentRegistry,
    ExportFormat, PropKind,
};
use proptest::prelude::*;
use tempfile::TempDir;

fn category_strategy() -> impl Strategy<Value = ComponentCategory> {
    prop_oneof![
        Just(ComponentCategory::Core),
        Just(ComponentCategory::Layout),
        Just(ComponentCategory::Sections),
        Just(ComponentCategory::Advanced),
        Just(ComponentCategory::Custom),
    ]
}

fn config_strategy() -> impl Strategy<Value = ComponentConfig> {
    (
        "[A-Z][a-z]{2,10}",
        category_strategy(),
        "[a-z ]{0,20}",
        prop::collection::vec("[a-z]{2,6}", 0..3),
        any::<bool>(),
    )
        .prop_map(|(name, category, description, tags, required)| {
            let mut config = ComponentConfig::new(name.clone(), name, category)
                .with_description(description)
                .with_prop(
                    ComponentPropSpec::new("label", PropKind::String).with_required(required),
                );
            for tag in tags {
                config = config.with_tag(tag);
            }
            config
        })
}

fn registry_of(configs: &[ComponentConfig]) -> ComponentRegistry<String> {
    let mut registry = ComponentRegistry::new();
    for config in configs {
        registry.register_component(format!("{}.tsx", config.name), config.clone());
    }
    registry
}

proptest! {
    #[test]
    fn prop_category_filter_partitions_catalogue(
        configs in prop::collection::vec(config_strategy(), 0..10),
    ) {
        let registry = registry_of(&configs);
        let total: usize = ComponentCategory::ALL
            .iter()
            .map(|c| registry.get_components_by_category(*c).len())
            .sum();
        prop_assert_eq!(total, registry.count());

        for category in ComponentCategory::ALL {
            for config in registry.get_components_by_category(category) {
                prop_assert_eq!(config.category, category);
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_search_finds_by_name_case_insensitively(
        configs in prop::collection::vec(config_strategy(), 1..8),
    ) {
        let registry = registry_of(&configs);
        for config in registry.get_all_components() {
            let hits = registry.search_components(&config.name.to_uppercase());
            prop_assert!(hits.iter().any(|c| c.name == config.name));
        }
    }
}

proptest! {
    #[test]
    fn prop_empty_search_returns_everything(
        configs in prop::collection::vec(config_strategy(), 0..8),
    ) {
        let registry = registry_of(&configs);
        prop_assert_eq!(registry.search_components(""), registry.get_all_components());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]
    #[test]
    fn prop_catalog_file_round_trip(
        configs in prop::collection::vec(config_strategy(), 0..6),
        yaml in any::<bool>(),
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(if yaml { "catalog.yaml" } else { "catalog.json" });
        prop_assert!(ExportFormat::from_path(&path).is_ok());

        let source = registry_of(&configs);
        CatalogFile::save_to_file(&source, &path).unwrap();

        let mut target: ComponentRegistry<String> = ComponentRegistry::new();
        let imported = CatalogFile::load_into(&mut target, &path).unwrap();
        prop_assert_eq!(imported, source.count());
        prop_assert_eq!(target.get_all_components(), source.get_all_components());
        // Import carries configs only
        for config in &configs {
            prop_assert!(target.get_component(&config.name).is_none());
        }
    }
}
