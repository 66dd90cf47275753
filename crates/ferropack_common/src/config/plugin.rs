use serde::Serialize;

use crate::FilenameTemplate;

/// Configuration for one named post-processing plugin. Descriptors carry
/// static parameters only; every side effect belongs to the host, which runs
/// plugins in declared order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginDescriptor {
  /// Generates the HTML entry document from a template, optionally
  /// collapsing whitespace for optimized builds.
  #[serde(rename_all = "camelCase")]
  HtmlEntry { template: String, collapse_whitespace: bool },
  /// Clears the output directory before new assets are written.
  CleanOutputDir,
  /// Copies a static directory verbatim into the output directory.
  CopyStatic { from: String, to: String },
  /// Writes extracted style sheets to standalone files named by `filename`.
  #[serde(rename_all = "camelCase")]
  ExtractStyle { filename: FilenameTemplate },
}

impl PluginDescriptor {
  /// Stable identifier, matching the serialized `plugin` tag.
  pub fn id(&self) -> &'static str {
    match self {
      Self::HtmlEntry { .. } => "html-entry",
      Self::CleanOutputDir => "clean-output-dir",
      Self::CopyStatic { .. } => "copy-static",
      Self::ExtractStyle { .. } => "extract-style",
    }
  }
}
