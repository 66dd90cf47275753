use ferropack_common::{BuildMode, ChunkSplitStrategy, Minimizer, Optimization, SplitChunks};

/// Code splitting applies to both modes; the minimizer pair only to
/// production.
pub fn optimization(mode: BuildMode) -> Optimization {
  let minimizers = if mode.is_prod() {
    vec![Minimizer::MinifyStyles, Minimizer::MinifyScripts]
  } else {
    Vec::new()
  };
  Optimization { split_chunks: SplitChunks { chunks: ChunkSplitStrategy::All }, minimizers }
}

#[cfg(test)]
mod tests {
  use ferropack_common::{BuildMode, ChunkSplitStrategy, Minimizer};

  use super::optimization;

  #[test]
  fn minimizers_only_in_production() {
    let dev = optimization(BuildMode::Development);
    assert_eq!(dev.split_chunks.chunks, ChunkSplitStrategy::All);
    assert!(!dev.is_minified());

    let prod = optimization(BuildMode::Production);
    assert_eq!(prod.split_chunks.chunks, ChunkSplitStrategy::All);
    assert_eq!(prod.minimizers, [Minimizer::MinifyStyles, Minimizer::MinifyScripts]);
  }
}
