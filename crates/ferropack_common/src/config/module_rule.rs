use fast_glob::glob_match;
use serde::Serialize;

use crate::PipelineStep;

/// Glob patterns selecting the files a rule applies to. Paths are matched
/// relative to the build context, with forward slashes on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleTest {
  patterns: Vec<String>,
}

impl RuleTest {
  pub fn new(patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
    Self { patterns: patterns.into_iter().map(Into::into).collect() }
  }

  pub fn patterns(&self) -> &[String] {
    &self.patterns
  }

  pub fn matches(&self, path: &str) -> bool {
    self.patterns.iter().any(|pattern| glob_match(pattern, path))
  }
}

/// Associates a file-matching test with the pipeline applied to matching
/// modules. See [`PipelineStep`] for the pipeline ordering contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleRule {
  pub test: RuleTest,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub exclude: Option<RuleTest>,
  #[serde(rename = "use")]
  pub pipeline: Vec<PipelineStep>,
}

impl ModuleRule {
  pub fn applies_to(&self, path: &str) -> bool {
    if self.exclude.as_ref().is_some_and(|exclude| exclude.matches(path)) {
      return false;
    }
    self.test.matches(path)
  }
}
