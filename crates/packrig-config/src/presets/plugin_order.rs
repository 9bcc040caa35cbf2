use tracing::debug;

use crate::config::BuildConfig;

/// Move every final-stage (archive) plugin behind all other plugins.
///
/// The relative order inside both groups is kept. Call this after every other
/// preset so files added by them are packaged too.
pub fn normalize_plugin_order(config: &mut BuildConfig) {
    if config.plugins.is_empty() {
        return;
    }

    // sort_by_key is stable, which is what keeps both groups in order
    config
        .plugins
        .sort_by_key(|plugin| u8::from(plugin.kind.is_final_stage()));

    debug!(plugins = config.plugins.len(), "normalized plugin order");
}
