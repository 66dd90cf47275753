use serde::Serialize;

use ferropack_utils::FxIndexMap;

/// Module-specifier resolution settings shared by every rule.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveOptions {
  /// Extensions tried, in order, for extension-less specifiers.
  pub extensions: Vec<String>,
  /// Specifier prefix aliases, applied in insertion order.
  #[serde(skip_serializing_if = "FxIndexMap::is_empty")]
  pub alias: FxIndexMap<String, String>,
}
