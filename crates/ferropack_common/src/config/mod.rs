pub mod build_mode;
pub mod dev_server;
pub mod filename_template;
pub mod input_item;
pub mod module_rule;
pub mod optimization;
pub mod pipeline_step;
pub mod plugin;
pub mod resolve_options;
pub mod resolved_config;
pub mod source_map;
