use serde::Serialize;

use crate::FilenameTemplate;

/// Base capability preset every script transpilation stage starts from.
pub const BASE_PRESET: &str = "preset-env";

/// One content-transformation stage inside a module rule pipeline.
///
/// Pipelines store their steps in declared order, and declared order is the
/// contract: hosts apply the steps tail-first, so the last declared step
/// receives the raw source and the first declared step produces the final
/// output. A host that walks pipelines head-first must iterate the list in
/// reverse to preserve the same effective execution order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
pub enum PipelineStep {
  /// Moves style content out of the module graph into a standalone sheet.
  ExtractStyle(StyleExtraction),
  /// Interprets plain CSS, resolving imports and url references.
  TranspileCss,
  /// Compiles the extended stylesheet dialect down to plain CSS.
  TranspileLess,
  /// Lowers scripts through the configured capability presets.
  TranspileScript(TranspileOptions),
  /// Style checks for development feedback; emits no output of its own.
  LintScript,
  /// Copies a matched file into the output tree without transforming it.
  EmitAsset(AssetEmit),
}

impl PipelineStep {
  /// Stable identifier, matching the serialized `step` tag.
  pub fn id(&self) -> &'static str {
    match self {
      Self::ExtractStyle(_) => "extract-style",
      Self::TranspileCss => "transpile-css",
      Self::TranspileLess => "transpile-less",
      Self::TranspileScript(_) => "transpile-script",
      Self::LintScript => "lint-script",
      Self::EmitAsset(_) => "emit-asset",
    }
  }
}

/// Style extraction parameters. `hot_reload` is decided by the caller's
/// build mode and passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleExtraction {
  pub hot_reload: bool,
  pub reload_all: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranspileOptions {
  pub presets: Vec<String>,
}

impl TranspileOptions {
  /// [`BASE_PRESET`] plus an optional extra preset. The extra slot is an
  /// extension point; nothing supplies it today.
  pub fn with_presets(extra: Option<&str>) -> Self {
    let mut presets = vec![BASE_PRESET.to_string()];
    if let Some(extra) = extra {
      presets.push(extra.to_string());
    }
    Self { presets }
  }
}

/// Verbatim file emission parameters for asset rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetEmit {
  pub filename: FilenameTemplate,
  pub output_dir: String,
}

#[cfg(test)]
mod tests {
  use super::{BASE_PRESET, PipelineStep, StyleExtraction, TranspileOptions};

  #[test]
  fn base_preset_always_leads() {
    let options = TranspileOptions::with_presets(None);
    assert_eq!(options.presets, [BASE_PRESET]);

    let extended = TranspileOptions::with_presets(Some("preset-react"));
    assert_eq!(extended.presets, [BASE_PRESET, "preset-react"]);
  }

  #[test]
  fn serialized_tag_matches_id() {
    let step = PipelineStep::ExtractStyle(StyleExtraction { hot_reload: true, reload_all: true });
    let value = serde_json::to_value(&step).unwrap();
    assert_eq!(value["step"], step.id());
    assert_eq!(value["hotReload"], true);

    let unit = serde_json::to_value(PipelineStep::TranspileCss).unwrap();
    assert_eq!(unit["step"], "transpile-css");
  }
}
