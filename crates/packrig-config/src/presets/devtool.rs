use tracing::debug;

use crate::config::{BuildConfig, Devtool};
use crate::rule::{Enforce, Rule, UseEntry};

/// Debug-map format used for development builds
pub const DEVELOPMENT_DEVTOOL: Devtool = Devtool::CheapModuleEvalSourceMap;

/// Debug-map format used for production builds
pub const PRODUCTION_DEVTOOL: Devtool = Devtool::SourceMap;

pub const SOURCE_MAP_LOADER: &str = "source-map-loader";

/// Pick the debug-map format for a development or production build.
///
/// Development builds also get a pre-stage rule that pulls existing source
/// maps out of plain script files. Each development call appends another such
/// rule.
pub fn select_devtool(config: &mut BuildConfig, is_dev: bool) {
    if is_dev {
        config.devtool = Some(DEVELOPMENT_DEVTOOL);
        config.module.rules.push(
            Rule::new(r"\.js$")
                .enforce(Enforce::Pre)
                .loader(UseEntry::new(SOURCE_MAP_LOADER)),
        );
    } else {
        config.devtool = Some(PRODUCTION_DEVTOOL);
    }

    debug!(is_dev, devtool = ?config.devtool, "selected devtool");
}
