use ferropack_common::ResolvedConfig;
use ferropack_error::ConfigResult;

/// Serializes the configuration into the JSON object shape the host bundler
/// consumes.
pub fn emit_config(config: &ResolvedConfig) -> ConfigResult<serde_json::Value> {
  serde_json::to_value(config).map_err(|error| anyhow::Error::from(error).into())
}

/// Pretty-printed rendition of [`emit_config`], for config dumps and
/// snapshots.
pub fn emit_config_string(config: &ResolvedConfig) -> ConfigResult<String> {
  serde_json::to_string_pretty(config).map_err(|error| anyhow::Error::from(error).into())
}

#[cfg(test)]
mod tests {
  use ferropack_common::BuildMode;

  use crate::resolver::ConfigResolver;

  use super::emit_config;

  #[test]
  fn development_object_shape() {
    let config = ConfigResolver::new(BuildMode::Development).resolve();
    let value = emit_config(&config).unwrap();

    assert_eq!(value["mode"], "development");
    assert_eq!(value["devServer"]["port"], 8081);
    assert_eq!(value["devServer"]["hot"], true);
    assert_eq!(value["sourceMap"], "external");
    assert_eq!(value["output"]["filename"], "[name].js");
    assert_eq!(value["output"]["dir"], "dist");
    // No minimizers key at all in development.
    assert!(value["optimization"].get("minimizers").is_none());
    assert_eq!(value["optimization"]["splitChunks"]["chunks"], "all");
  }

  #[test]
  fn production_object_shape() {
    let config = ConfigResolver::new(BuildMode::Production).resolve();
    let value = emit_config(&config).unwrap();

    assert_eq!(value["mode"], "production");
    assert_eq!(value["devServer"]["hot"], false);
    assert_eq!(value["sourceMap"], "disabled");
    assert_eq!(value["output"]["filename"], "[name].[hash].js");
    let minimizers = value["optimization"]["minimizers"].as_array().unwrap();
    assert_eq!(minimizers.len(), 2);
    assert_eq!(minimizers[0], "minify-styles");
    assert_eq!(minimizers[1], "minify-scripts");
    assert_eq!(value["plugins"][0]["plugin"], "html-entry");
    assert_eq!(value["plugins"][0]["collapseWhitespace"], true);
    assert_eq!(value["resolve"]["alias"]["@"], "src");
    assert_eq!(value["moduleRules"][0]["use"][0]["hotReload"], false);
  }
}
