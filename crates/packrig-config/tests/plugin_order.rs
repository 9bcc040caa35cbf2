//! Partition properties of the plugin-order normalizer.

use packrig_config::{normalize_plugin_order, BuildConfig, Plugin, PluginKind};
use proptest::prelude::*;
use serde_json::json;

fn tagged(kind: PluginKind, id: usize) -> Plugin {
    Plugin::new(kind).with_options(json!({ "id": id }))
}

fn ids(plugins: &[Plugin]) -> Vec<u64> {
    plugins
        .iter()
        .map(|plugin| plugin.options["id"].as_u64().unwrap())
        .collect()
}

fn kind_strategy() -> impl Strategy<Value = PluginKind> {
    prop_oneof![
        Just(PluginKind::Archive),
        Just(PluginKind::Copy),
        Just(PluginKind::DuplicatePackageChecker),
        "[a-z]{1,8}".prop_map(|name| PluginKind::from(name)),
    ]
}

proptest! {
    #[test]
    fn normalizer_is_a_stable_partition(kinds in proptest::collection::vec(kind_strategy(), 0..32)) {
        let mut config = BuildConfig::default();
        config.plugins = kinds
            .into_iter()
            .enumerate()
            .map(|(id, kind)| tagged(kind, id))
            .collect();
        let before = config.plugins.clone();

        normalize_plugin_order(&mut config);

        prop_assert_eq!(config.plugins.len(), before.len());

        let (finals, others): (Vec<_>, Vec<_>) = before
            .iter()
            .cloned()
            .partition(|plugin| plugin.kind.is_final_stage());

        let split = others.len();
        prop_assert_eq!(ids(&config.plugins[..split]), ids(&others));
        prop_assert_eq!(ids(&config.plugins[split..]), ids(&finals));
        prop_assert!(config.plugins[split..].iter().all(|p| p.kind.is_final_stage()));
    }
}

#[test]
fn multiple_archives_keep_their_order() {
    let mut config = BuildConfig::default();
    config.plugins = vec![
        tagged(PluginKind::Archive, 0),
        tagged(PluginKind::Copy, 1),
        tagged(PluginKind::Archive, 2),
        tagged(PluginKind::from("define"), 3),
    ];

    normalize_plugin_order(&mut config);

    assert_eq!(ids(&config.plugins), vec![1, 3, 0, 2]);
}

#[test]
fn list_without_archive_is_unchanged() {
    let mut config = BuildConfig::default();
    config.plugins = vec![
        tagged(PluginKind::Copy, 0),
        tagged(PluginKind::DuplicatePackageChecker, 1),
    ];
    let before = config.plugins.clone();

    normalize_plugin_order(&mut config);

    assert_eq!(config.plugins, before);
}

#[test]
fn archive_parsed_from_json_is_classified() {
    let mut config = BuildConfig::from_value(json!({
        "plugins": [
            { "kind": "archive", "options": { "filename": "site.zip" } },
            { "kind": "copy" }
        ]
    }))
    .unwrap();

    normalize_plugin_order(&mut config);

    assert_eq!(config.plugins[0].kind, PluginKind::Copy);
    assert_eq!(config.plugins[1].kind, PluginKind::Archive);
}
