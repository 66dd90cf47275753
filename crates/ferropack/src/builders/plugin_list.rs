use ferropack_common::{BuildMode, PluginDescriptor};

use crate::{
  builders::filename::filename_template,
  resolver::{HTML_TEMPLATE, OUTPUT_DIR, STATIC_DIR},
};

/// The fixed post-processing plugin set, in the order hosts run them: HTML
/// entry generation, output cleanup, static copy, style extraction.
pub fn plugin_list(mode: BuildMode) -> Vec<PluginDescriptor> {
  vec![
    PluginDescriptor::HtmlEntry {
      template: HTML_TEMPLATE.to_string(),
      collapse_whitespace: mode.is_prod(),
    },
    PluginDescriptor::CleanOutputDir,
    PluginDescriptor::CopyStatic { from: STATIC_DIR.to_string(), to: OUTPUT_DIR.to_string() },
    PluginDescriptor::ExtractStyle { filename: filename_template(mode, "css") },
  ]
}
