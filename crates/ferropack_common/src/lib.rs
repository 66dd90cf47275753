mod config;

pub use config::{
  build_mode::{BuildMode, MODE_ENV_VAR},
  dev_server::DevServerOptions,
  filename_template::FilenameTemplate,
  input_item::InputItem,
  module_rule::{ModuleRule, RuleTest},
  optimization::{ChunkSplitStrategy, Minimizer, Optimization, SplitChunks},
  pipeline_step::{AssetEmit, BASE_PRESET, PipelineStep, StyleExtraction, TranspileOptions},
  plugin::PluginDescriptor,
  resolve_options::ResolveOptions,
  resolved_config::{OutputOptions, ResolvedConfig},
  source_map::SourceMapMode,
};
