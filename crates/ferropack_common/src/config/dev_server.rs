use serde::Serialize;

/// Dev-server knobs forwarded to the host. The server itself lives outside
/// this workspace; only its configuration is decided here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DevServerOptions {
  pub port: u16,
  pub hot: bool,
}
