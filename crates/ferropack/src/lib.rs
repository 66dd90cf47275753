mod builders;
mod emit;
mod resolver;
mod validate;

pub use crate::{
  builders::{
    filename::filename_template, optimization::optimization, plugin_list::plugin_list,
    script::script_pipeline, style::style_pipeline,
  },
  emit::{emit_config, emit_config_string},
  resolver::{CONTEXT_DIR, ConfigResolver, DEV_SERVER_PORT, HTML_TEMPLATE, OUTPUT_DIR, STATIC_DIR},
  validate::validate_config,
};
pub use ferropack_common::*;
