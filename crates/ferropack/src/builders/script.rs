use ferropack_common::{BuildMode, PipelineStep, TranspileOptions};

/// Pipeline for scripts: transpilation, plus a lint stage for development
/// builds.
///
/// Declared order puts the lint stage after transpilation; because the host
/// applies pipelines tail-first, linting actually runs first, against the
/// untranspiled source. `extra_preset` is an accepted-but-unsupplied
/// extension point — the assembler always passes `None`.
pub fn script_pipeline(mode: BuildMode, extra_preset: Option<&str>) -> Vec<PipelineStep> {
  let mut pipeline =
    vec![PipelineStep::TranspileScript(TranspileOptions::with_presets(extra_preset))];
  if mode.is_dev() {
    pipeline.push(PipelineStep::LintScript);
  }
  pipeline
}
