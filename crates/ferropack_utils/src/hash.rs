use base64_simd::URL_SAFE_NO_PAD;
use xxhash_rust::xxh3::xxh3_128;

/// Length of the hash segment embedded in production filenames.
pub const FILENAME_HASH_LENGTH: usize = 8;

/// Derives a short url-safe token from `input` for embedding in output
/// filenames. Tokens must be stable across builds and platforms.
pub fn hash_token(input: &[u8], len: usize) -> String {
  let digest = xxh3_128(input).to_le_bytes();
  let mut encoded = URL_SAFE_NO_PAD.encode_to_string(digest);
  encoded.truncate(len);
  encoded
}

#[test]
fn test_hash_token() {
  let token = hash_token(b"body { color: red }", FILENAME_HASH_LENGTH);
  assert_eq!(token.len(), FILENAME_HASH_LENGTH);
  assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_')));
  // Same content, same token; different content, different token.
  assert_eq!(token, hash_token(b"body { color: red }", FILENAME_HASH_LENGTH));
  assert_ne!(token, hash_token(b"body { color: blue }", FILENAME_HASH_LENGTH));
}
