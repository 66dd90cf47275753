use std::fmt::Display;

use serde::Serialize;

/// Environment variable the build mode is read from.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

/// The development/production switch every other configuration decision is a
/// pure function of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
  Development,
  Production,
}

impl BuildMode {
  /// Reads the mode from the process environment. The variable is consulted
  /// exactly once; callers thread the returned value everywhere else instead
  /// of re-reading it.
  pub fn from_env() -> Self {
    Self::from_env_value(std::env::var(MODE_ENV_VAR).ok().as_deref())
  }

  /// Anything other than the exact `development` literal resolves to
  /// [`BuildMode::Production`], the stricter of the two modes.
  pub fn from_env_value(value: Option<&str>) -> Self {
    match value {
      Some("development") => Self::Development,
      _ => Self::Production,
    }
  }

  #[inline]
  pub fn is_dev(self) -> bool {
    matches!(self, Self::Development)
  }

  #[inline]
  pub fn is_prod(self) -> bool {
    matches!(self, Self::Production)
  }
}

impl Display for BuildMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Development => write!(f, "development"),
      Self::Production => write!(f, "production"),
    }
  }
}

#[test]
fn test_unrecognized_values_default_to_production() {
  assert_eq!(BuildMode::from_env_value(Some("development")), BuildMode::Development);
  assert_eq!(BuildMode::from_env_value(Some("production")), BuildMode::Production);
  assert_eq!(BuildMode::from_env_value(Some("DEVELOPMENT")), BuildMode::Production);
  assert_eq!(BuildMode::from_env_value(Some("dev")), BuildMode::Production);
  assert_eq!(BuildMode::from_env_value(Some("")), BuildMode::Production);
  assert_eq!(BuildMode::from_env_value(None), BuildMode::Production);
}
