use serde::Serialize;

/// Source-map emission strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceMapMode {
  /// Full external map files next to each output asset.
  External,
  Disabled,
}

impl SourceMapMode {
  #[inline]
  pub fn is_enabled(self) -> bool {
    !matches!(self, Self::Disabled)
  }
}
