use ferropack_common::{
  AssetEmit, BuildMode, DevServerOptions, InputItem, ModuleRule, OutputOptions, PipelineStep,
  ResolveOptions, ResolvedConfig, RuleTest, SourceMapMode,
};
use ferropack_utils::FxIndexMap;

use crate::builders::{
  filename::filename_template, optimization::optimization, plugin_list::plugin_list,
  script::script_pipeline, style::style_pipeline,
};

/// Directory every relative source path below resolves against.
pub const CONTEXT_DIR: &str = "src";
/// Directory bundled output is written to.
pub const OUTPUT_DIR: &str = "dist";
pub const DEV_SERVER_PORT: u16 = 8081;
pub const HTML_TEMPLATE: &str = "./index.html";
pub const STATIC_DIR: &str = "src/static";

const MAIN_ENTRY: &str = "./index.js";
const ANALYTICS_ENTRY: &str = "./analytics.js";
const POLYFILL_IMPORT: &str = "core-js";
const SOURCE_ALIAS: &str = "@";

/// Derives the full host-bundler configuration from a build mode.
///
/// Resolution is one pure, synchronous computation: two resolvers carrying
/// the same mode produce identical configurations, and nothing here performs
/// I/O beyond the single environment read in [`ConfigResolver::from_env`].
#[derive(Debug, Clone, Copy)]
pub struct ConfigResolver {
  mode: BuildMode,
}

impl ConfigResolver {
  pub fn new(mode: BuildMode) -> Self {
    Self { mode }
  }

  /// Reads the build mode from the environment once and captures it.
  pub fn from_env() -> Self {
    Self::new(BuildMode::from_env())
  }

  pub fn mode(&self) -> BuildMode {
    self.mode
  }

  pub fn resolve(&self) -> ResolvedConfig {
    let mode = self.mode;
    ResolvedConfig {
      mode,
      context: CONTEXT_DIR.to_string(),
      input: input_items(),
      output: OutputOptions {
        filename: filename_template(mode, "js"),
        dir: OUTPUT_DIR.to_string(),
      },
      resolve: resolve_options(),
      optimization: optimization(mode),
      dev_server: DevServerOptions { port: DEV_SERVER_PORT, hot: mode.is_dev() },
      source_map: if mode.is_dev() { SourceMapMode::External } else { SourceMapMode::Disabled },
      plugins: plugin_list(mode),
      module_rules: module_rules(mode),
    }
  }
}

fn input_items() -> Vec<InputItem> {
  vec![
    // The polyfill import loads ahead of the entry module.
    InputItem::new("main", [POLYFILL_IMPORT, MAIN_ENTRY]),
    InputItem::new("analytics", [ANALYTICS_ENTRY]),
  ]
}

fn resolve_options() -> ResolveOptions {
  let mut alias = FxIndexMap::default();
  alias.insert(SOURCE_ALIAS.to_string(), CONTEXT_DIR.to_string());
  ResolveOptions { extensions: vec![".js".to_string(), ".json".to_string()], alias }
}

fn dependency_dirs() -> RuleTest {
  RuleTest::new(["**/node_modules/**"])
}

fn module_rules(mode: BuildMode) -> Vec<ModuleRule> {
  vec![
    ModuleRule {
      test: RuleTest::new(["**/*.css"]),
      exclude: Some(dependency_dirs()),
      pipeline: style_pipeline(mode, None),
    },
    ModuleRule {
      test: RuleTest::new(["**/*.less"]),
      exclude: Some(dependency_dirs()),
      pipeline: style_pipeline(mode, Some(PipelineStep::TranspileLess)),
    },
    ModuleRule {
      test: RuleTest::new(["**/*.png", "**/*.jpg", "**/*.svg", "**/*.gif"]),
      exclude: None,
      pipeline: vec![PipelineStep::EmitAsset(AssetEmit {
        filename: filename_template(mode, "[ext]"),
        output_dir: "assets/img".to_string(),
      })],
    },
    ModuleRule {
      test: RuleTest::new(["**/*.ttf", "**/*.woff", "**/*.woff2", "**/*.eot"]),
      exclude: None,
      pipeline: vec![PipelineStep::EmitAsset(AssetEmit {
        filename: filename_template(mode, "[ext]"),
        output_dir: "assets/fonts".to_string(),
      })],
    },
    ModuleRule {
      test: RuleTest::new(["**/*.js"]),
      exclude: Some(dependency_dirs()),
      pipeline: script_pipeline(mode, None),
    },
  ]
}

#[cfg(test)]
mod tests {
  use ferropack_common::{BuildMode, PipelineStep, SourceMapMode};

  use super::{ConfigResolver, DEV_SERVER_PORT};

  #[test]
  fn development_scenario() {
    let config = ConfigResolver::new(BuildMode::Development).resolve();
    assert!(config.is_hot_reload_enabled());
    assert_eq!(config.dev_server.port, DEV_SERVER_PORT);
    assert!(config.source_map.is_enabled());
    assert_eq!(config.source_map, SourceMapMode::External);
    assert!(!config.output.filename.has_hash_pattern());
    assert!(!config.optimization.is_minified());
  }

  #[test]
  fn production_scenario() {
    let config = ConfigResolver::new(BuildMode::Production).resolve();
    assert!(!config.is_hot_reload_enabled());
    assert!(!config.source_map.is_enabled());
    assert!(config.output.filename.has_hash_pattern());
    assert!(config.optimization.is_minified());
    assert_eq!(config.optimization.minimizers.len(), 2);
  }

  #[test]
  fn entries_are_fixed_across_modes() {
    for mode in [BuildMode::Development, BuildMode::Production] {
      let config = ConfigResolver::new(mode).resolve();
      assert_eq!(config.input.len(), 2);
      assert_eq!(config.input[0].name.as_deref(), Some("main"));
      // Polyfill first, entry module second.
      assert_eq!(config.input[0].imports, ["core-js", "./index.js"]);
      assert_eq!(config.input[1].name.as_deref(), Some("analytics"));
      assert_eq!(config.input[1].imports, ["./analytics.js"]);
    }
  }

  #[test]
  fn rules_route_by_declaration_order() {
    let config = ConfigResolver::new(BuildMode::Development).resolve();
    assert_eq!(config.module_rules.len(), 5);

    let css = config.rule_for("src/styles/app.css").expect("css rule");
    assert_eq!(css.pipeline.len(), 2);

    let less = config.rule_for("src/styles/theme.less").expect("less rule");
    assert_eq!(less.pipeline.len(), 3);
    assert_eq!(less.pipeline[2], PipelineStep::TranspileLess);

    let image = config.rule_for("src/assets/logo.svg").expect("image rule");
    let PipelineStep::EmitAsset(emit) = &image.pipeline[0] else {
      panic!("image rule must emit the file verbatim");
    };
    assert_eq!(emit.output_dir, "assets/img");

    let font = config.rule_for("src/fonts/roboto.woff2").expect("font rule");
    let PipelineStep::EmitAsset(emit) = &font.pipeline[0] else {
      panic!("font rule must emit the file verbatim");
    };
    assert_eq!(emit.output_dir, "assets/fonts");

    assert!(config.rule_for("web/node_modules/pkg/index.js").is_none());
    assert!(config.rule_for("src/data/config.yaml").is_none());
  }

  #[test]
  fn alias_and_extensions_are_fixed() {
    let config = ConfigResolver::new(BuildMode::Production).resolve();
    assert_eq!(config.context, "src");
    assert_eq!(config.resolve.extensions, [".js", ".json"]);
    assert_eq!(config.resolve.alias.get("@").map(String::as_str), Some("src"));
  }

  #[test]
  fn same_mode_resolves_identically() {
    let first = ConfigResolver::new(BuildMode::Production).resolve();
    let second = ConfigResolver::new(BuildMode::Production).resolve();
    assert_eq!(first, second);
  }
}
