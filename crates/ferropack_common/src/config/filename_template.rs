use memchr::memmem;
use serde::Serialize;

use ferropack_utils::{
  hash::{FILENAME_HASH_LENGTH, hash_token},
  sanitize::sanitize_name,
};

pub const NAME_TOKEN: &str = "[name]";
pub const HASH_TOKEN: &str = "[hash]";
pub const EXT_TOKEN: &str = "[ext]";

/// Output filename pattern over `[name]`, `[hash]` and `[ext]` tokens.
///
/// Development builds use stable, unhashed patterns so the dev server can
/// overwrite assets in place; production patterns embed one content-derived
/// token so unchanged assets stay cacheable forever.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilenameTemplate {
  template: String,
}

impl FilenameTemplate {
  pub fn new(template: impl Into<String>) -> Self {
    Self { template: template.into() }
  }

  pub fn template(&self) -> &str {
    &self.template
  }

  pub fn has_hash_pattern(&self) -> bool {
    memmem::find(self.template.as_bytes(), HASH_TOKEN.as_bytes()).is_some()
  }

  pub fn hash_pattern_count(&self) -> usize {
    memmem::find_iter(self.template.as_bytes(), HASH_TOKEN.as_bytes()).count()
  }

  /// Renders the pattern for one concrete asset. `content` feeds the
  /// `[hash]` token and is only consulted when the pattern carries one;
  /// hash-less patterns render identically for every content revision.
  pub fn render(&self, name: &str, ext: Option<&str>, content: Option<&[u8]>) -> String {
    let mut filename = self.template.replace(NAME_TOKEN, &sanitize_name(name));
    if let Some(ext) = ext {
      filename = filename.replace(EXT_TOKEN, ext);
    }
    if self.has_hash_pattern() {
      let content = content.unwrap_or(name.as_bytes());
      filename = filename.replace(HASH_TOKEN, &hash_token(content, FILENAME_HASH_LENGTH));
    }
    filename
  }
}

impl From<&str> for FilenameTemplate {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

#[cfg(test)]
mod tests {
  use super::FilenameTemplate;

  #[test]
  fn stable_pattern_renders_unchanged_names() {
    let template = FilenameTemplate::new("[name].css");
    assert!(!template.has_hash_pattern());
    assert_eq!(template.render("main", None, Some(b"a{}")), "main.css");
    assert_eq!(template.render("main", None, Some(b"b{}")), "main.css");
  }

  #[test]
  fn hashed_pattern_embeds_one_content_token() {
    let template = FilenameTemplate::new("[name].[hash].js");
    assert_eq!(template.hash_pattern_count(), 1);

    let filename = template.render("analytics", None, Some(b"console.log(1)"));
    let segments = filename.split('.').collect::<Vec<_>>();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0], "analytics");
    assert_eq!(segments[1].len(), 8);
    assert_eq!(segments[2], "js");

    // The token tracks content, not the template.
    let changed = template.render("analytics", None, Some(b"console.log(2)"));
    assert_ne!(filename, changed);
  }

  #[test]
  fn extension_token_is_substituted() {
    let template = FilenameTemplate::new("[name].[ext]");
    assert_eq!(template.render("logo", Some("png"), None), "logo.png");
  }
}
