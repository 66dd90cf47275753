use ferropack_common::{BuildMode, PipelineStep, StyleExtraction};

/// Pipeline for style sheets: extraction, CSS interpretation, then an
/// optional preprocessor stage for extended stylesheet dialects.
///
/// Declared head-first; the host applies the list tail-first, so the
/// preprocessor (when present) sees the source first and extraction runs
/// last. Extraction is hot-reload-capable in development and plain in
/// production — decided here, passed through as a parameter.
pub fn style_pipeline(mode: BuildMode, preprocessor: Option<PipelineStep>) -> Vec<PipelineStep> {
  let mut pipeline = vec![
    PipelineStep::ExtractStyle(StyleExtraction { hot_reload: mode.is_dev(), reload_all: true }),
    PipelineStep::TranspileCss,
  ];
  if let Some(preprocessor) = preprocessor {
    pipeline.push(preprocessor);
  }
  pipeline
}
