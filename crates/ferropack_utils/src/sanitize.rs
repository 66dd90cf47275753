/// Clamps an asset name to characters that are safe in both file systems and
/// URLs. Anything else becomes `-`.
pub fn sanitize_name(name: &str) -> String {
  name
    .chars()
    .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') { c } else { '-' })
    .collect()
}

#[test]
fn test_sanitize_name() {
  assert_eq!(sanitize_name("main"), "main");
  assert_eq!(sanitize_name("admin/panel"), "admin-panel");
  assert_eq!(sanitize_name("app.v2\0"), "app.v2-");
}
