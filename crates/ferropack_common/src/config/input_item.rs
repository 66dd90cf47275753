use serde::Serialize;

/// A named build entry. `imports` are loaded in declaration order, so a
/// leading import acts as a prelude (e.g. a polyfill) for the ones after it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct InputItem {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  pub imports: Vec<String>,
}

impl InputItem {
  pub fn new(
    name: impl Into<String>,
    imports: impl IntoIterator<Item = impl Into<String>>,
  ) -> Self {
    Self { name: Some(name.into()), imports: imports.into_iter().map(Into::into).collect() }
  }
}

impl From<&str> for InputItem {
  fn from(value: &str) -> Self {
    Self { name: None, imports: vec![value.to_string()] }
  }
}
