use serde::Serialize;

/// How modules shared between entries are split into common chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSplitStrategy {
  /// Split shared modules regardless of how they are imported.
  All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitChunks {
  pub chunks: ChunkSplitStrategy,
}

/// Output minimizer stages, present only for optimized builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Minimizer {
  MinifyStyles,
  MinifyScripts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
  pub split_chunks: SplitChunks,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub minimizers: Vec<Minimizer>,
}

impl Optimization {
  #[inline]
  pub fn is_minified(&self) -> bool {
    !self.minimizers.is_empty()
  }
}
