use ferropack_common::{FilenameTemplate, PipelineStep, PluginDescriptor, ResolvedConfig};
use ferropack_error::{ConfigError, ConfigResult};
use itertools::Itertools;

/// Checks the invariants the host relies on before a configuration is handed
/// over, collecting every violation instead of stopping at the first. The
/// built-in resolution always passes; configurations a host post-processes
/// may not.
pub fn validate_config(config: &ResolvedConfig) -> ConfigResult<()> {
  let mut errors = ConfigError::default();

  if config.input.is_empty() {
    errors.push(anyhow::anyhow!("at least one input entry is required"));
  }

  for name in config.input.iter().filter_map(|item| item.name.as_deref()).duplicates() {
    errors.push(anyhow::anyhow!("duplicate entry name \"{name}\""));
  }

  for item in &config.input {
    if item.imports.is_empty() {
      let name = item.name.as_deref().unwrap_or("<unnamed>");
      errors.push(anyhow::anyhow!("entry \"{name}\" has no imports"));
    }
  }

  if config.dev_server.port == 0 {
    errors.push(anyhow::anyhow!("dev server port must be non-zero"));
  }

  errors.extend(filename_templates(config).filter_map(|(context, template)| {
    (template.hash_pattern_count() > 1).then(|| {
      anyhow::anyhow!(
        "invalid value for \"{context}\": at most one [hash] token is allowed, got \"{}\"",
        template.template()
      )
    })
  }));

  errors.into_result()
}

/// Every filename template reachable from the configuration, labeled with
/// where it came from.
fn filename_templates(
  config: &ResolvedConfig,
) -> impl Iterator<Item = (String, &FilenameTemplate)> {
  let output = std::iter::once(("output.filename".to_string(), &config.output.filename));

  let plugins = config.plugins.iter().enumerate().filter_map(|(index, plugin)| match plugin {
    PluginDescriptor::ExtractStyle { filename } => {
      Some((format!("plugins[{index}].filename"), filename))
    }
    _ => None,
  });

  let rules = config.module_rules.iter().enumerate().flat_map(|(rule_index, rule)| {
    rule.pipeline.iter().enumerate().filter_map(move |(step_index, step)| match step {
      PipelineStep::EmitAsset(emit) => {
        Some((format!("moduleRules[{rule_index}].use[{step_index}].filename"), &emit.filename))
      }
      _ => None,
    })
  });

  output.chain(plugins).chain(rules)
}
