use ferropack_common::{BuildMode, FilenameTemplate};

/// Output naming strategy for one file extension.
///
/// Development builds keep stable names so the dev server can overwrite
/// assets in place; production builds embed a content-hash segment for
/// long-term caching. Works unchanged for every asset class, including the
/// `[ext]` passthrough used by asset rules.
pub fn filename_template(mode: BuildMode, ext: &str) -> FilenameTemplate {
  match mode {
    BuildMode::Development => FilenameTemplate::new(format!("[name].{ext}")),
    BuildMode::Production => FilenameTemplate::new(format!("[name].[hash].{ext}")),
  }
}
