use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use rustc_hash::FxHasher;

pub mod hash;
pub mod sanitize;

/// Insertion-ordered map using the fast non-cryptographic hasher shared
/// across the workspace.
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
