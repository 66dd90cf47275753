use serde::Serialize;

use crate::{
  BuildMode, DevServerOptions, FilenameTemplate, InputItem, ModuleRule, Optimization,
  PluginDescriptor, ResolveOptions, SourceMapMode,
};

/// Where bundled output lands and how the files are named.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputOptions {
  pub filename: FilenameTemplate,
  pub dir: String,
}

/// The fully-derived configuration handed to the host bundler.
///
/// Built exactly once per resolution and never mutated afterwards; the rest
/// of the lifecycle belongs to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
  pub mode: BuildMode,
  /// Directory relative source paths are resolved against.
  pub context: String,
  pub input: Vec<InputItem>,
  pub output: OutputOptions,
  pub resolve: ResolveOptions,
  pub optimization: Optimization,
  pub dev_server: DevServerOptions,
  pub source_map: SourceMapMode,
  pub plugins: Vec<PluginDescriptor>,
  pub module_rules: Vec<ModuleRule>,
}

impl ResolvedConfig {
  /// First rule whose test matches `path` and whose exclude does not.
  /// Declaration order decides ties.
  pub fn rule_for(&self, path: &str) -> Option<&ModuleRule> {
    self.module_rules.iter().find(|rule| rule.applies_to(path))
  }

  #[inline]
  pub fn is_hot_reload_enabled(&self) -> bool {
    self.dev_server.hot
  }
}
