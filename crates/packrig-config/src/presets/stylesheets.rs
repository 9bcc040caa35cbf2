use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::config::BuildConfig;
use crate::rule::{Rule, UseEntry};

pub const CSS_TEST: &str = r"\.css$";
pub const IMAGE_TEST: &str = r"\.(png|jpe?g|gif|svg)$";

pub const STYLE_LOADER: &str = "style-loader";
pub const CSS_LOADER: &str = "css-loader";
pub const FILE_LOADER: &str = "file-loader";
pub const IMAGE_LOADER: &str = "image-webpack-loader";

/// Options for [`add_stylesheets`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylesheetOptions {
    /// Run emitted images through the optimizer
    pub optimize_images: bool,

    /// Output subfolder for emitted images
    pub image_folder: String,
}

impl Default for StylesheetOptions {
    fn default() -> Self {
        Self {
            optimize_images: true,
            image_folder: "images".to_string(),
        }
    }
}

/// Handle stylesheet imports and the images they reference.
///
/// Loaders in a chain run last to first, so css-loader parses a stylesheet
/// before style-loader injects it, and images are optimized before they are
/// emitted.
pub fn add_stylesheets(config: &mut BuildConfig, options: &StylesheetOptions) {
    config.module.rules.push(
        Rule::new(CSS_TEST)
            .loader(UseEntry::new(STYLE_LOADER))
            .loader(UseEntry::new(CSS_LOADER)),
    );

    let mut images = Rule::new(IMAGE_TEST).loader(UseEntry::new(FILE_LOADER).with_options(json!({
        "name": format!("{}/[name].[ext]", options.image_folder.trim_end_matches('/')),
    })));
    if options.optimize_images {
        images = images.loader(UseEntry::new(IMAGE_LOADER));
    }
    config.module.rules.push(images);

    debug!(
        optimize_images = options.optimize_images,
        image_folder = %options.image_folder,
        "added stylesheet and image rules"
    );
}
