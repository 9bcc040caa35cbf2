//! Whole-configuration scenarios combining several presets.

use std::fs;

use packrig_config::{
    add_external, normalize_plugin_order, BuildConfig, ExternalLibrary, Mode, Plugin, PluginKind,
    Presets,
};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn external_library_then_normalizer() {
    let mut config = BuildConfig::default();

    add_external(
        &mut config,
        &ExternalLibrary::new("jquery", "jQuery").copy("node_modules/jquery/dist/jquery.min.js", "vendor/jquery.js"),
    );
    let plugins_before = config.plugins.clone();
    normalize_plugin_order(&mut config);

    let saved = config.to_value().unwrap();
    assert_eq!(saved["externals"], json!({ "jquery": "jQuery" }));
    assert_eq!(config.count_plugins(&PluginKind::Copy), 1);
    assert_eq!(config.plugins, plugins_before);
}

#[test]
fn copied_assets_land_before_archive() {
    let mut config = BuildConfig::default();
    config
        .plugins
        .push(Plugin::new(PluginKind::Archive).with_options(json!({ "filename": "ext.zip" })));

    add_external(
        &mut config,
        &ExternalLibrary::new("jquery", "jQuery").copy("jquery.js", "jquery.js"),
    );
    normalize_plugin_order(&mut config);

    assert_eq!(config.plugins[0].kind, PluginKind::Copy);
    assert_eq!(config.plugins[1].kind, PluginKind::Archive);
}

#[test]
fn preset_set_applies_every_section() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.coffee"), "").unwrap();

    let mut config = BuildConfig::from_value(json!({
        "context": dir.path(),
        "plugins": [{ "kind": "archive" }, { "kind": "define" }]
    }))
    .unwrap();

    let presets: Presets = serde_json::from_value(json!({
        "mode": "development",
        "dedupe": { "modules": ["react"], "folder": "/deps" },
        "coffeescript": {},
        "stylesheets": { "optimize_images": false },
        "externals": [
            { "module": "jquery", "global": "jQuery", "from": "jq.js", "to": "js/jq.js" }
        ]
    }))
    .unwrap();

    presets.apply(&mut config).unwrap();

    assert_eq!(presets.mode, Some(Mode::Development));
    assert!(config.entry.contains_key("main"));
    // source-map, coffeelint, coffee, css, images
    assert_eq!(config.module.rules.len(), 5);
    assert_eq!(
        config.resolve.alias["react"],
        std::path::PathBuf::from("/deps/react")
    );

    let kinds: Vec<_> = config.plugins.iter().map(|p| p.kind.to_string()).collect();
    assert_eq!(
        kinds,
        vec!["define", "duplicate-package-checker", "copy", "archive"]
    );
}

#[test]
fn empty_preset_set_only_normalizes() {
    let mut config = BuildConfig::from_value(json!({
        "plugins": [{ "kind": "archive" }, { "kind": "copy" }]
    }))
    .unwrap();
    let before = config.clone();

    Presets::default().apply(&mut config).unwrap();

    assert_eq!(config.module, before.module);
    assert_eq!(config.resolve, before.resolve);
    assert_eq!(config.plugins[1].kind, PluginKind::Archive);
}

#[test]
fn invalid_preset_section_is_reported() {
    let mut config = BuildConfig::default();
    let presets: Presets =
        serde_json::from_value(json!({ "stylesheets": { "optimize_images": "sometimes" } })).unwrap();

    let err = presets.apply(&mut config).unwrap_err();
    assert!(err.to_string().contains("stylesheets"));
}
