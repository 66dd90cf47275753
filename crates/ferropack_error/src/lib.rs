use std::fmt;

/// Failures surfaced while validating or emitting a resolved configuration.
///
/// Collects every underlying diagnostic instead of stopping at the first
/// one, so callers can report all of them in a single pass.
#[derive(Debug, Default)]
pub struct ConfigError {
  diagnostics: Vec<anyhow::Error>,
}

impl ConfigError {
  pub fn push(&mut self, diagnostic: anyhow::Error) {
    self.diagnostics.push(diagnostic);
  }

  pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = anyhow::Error>) {
    self.diagnostics.extend(diagnostics);
  }

  pub fn len(&self) -> usize {
    self.diagnostics.len()
  }

  pub fn is_empty(&self) -> bool {
    self.diagnostics.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &anyhow::Error> {
    self.diagnostics.iter()
  }

  /// `Ok(())` when nothing was collected, otherwise `self` as the error.
  pub fn into_result(self) -> ConfigResult<()> {
    if self.is_empty() { Ok(()) } else { Err(self) }
  }
}

impl<'a> IntoIterator for &'a ConfigError {
  type Item = &'a anyhow::Error;
  type IntoIter = std::slice::Iter<'a, anyhow::Error>;

  fn into_iter(self) -> Self::IntoIter {
    self.diagnostics.iter()
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, diagnostic) in self.diagnostics.iter().enumerate() {
      if index > 0 {
        writeln!(f)?;
      }
      write!(f, "{diagnostic}")?;
    }
    Ok(())
  }
}

impl std::error::Error for ConfigError {}

impl From<anyhow::Error> for ConfigError {
  fn from(diagnostic: anyhow::Error) -> Self {
    Self { diagnostics: vec![diagnostic] }
  }
}

impl FromIterator<anyhow::Error> for ConfigError {
  fn from_iter<I: IntoIterator<Item = anyhow::Error>>(iter: I) -> Self {
    Self { diagnostics: iter.into_iter().collect() }
  }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[test]
fn test_aggregation() {
  let mut error = ConfigError::default();
  assert!(error.is_empty());
  error.push(anyhow::anyhow!("first"));
  error.push(anyhow::anyhow!("second"));
  assert_eq!(error.len(), 2);
  assert_eq!(error.to_string(), "first\nsecond");
  assert!(error.into_result().is_err());
  assert!(ConfigError::default().into_result().is_ok());
}
