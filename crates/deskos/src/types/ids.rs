/*! Branded ID types for type-safe entity references. */

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};
use ts_rs::TS;

/// Window instance identifier. Unique per open, even for repeated opens of
/// the same app.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, Display, From, Into,
)]
#[ts(export)]
pub struct InstanceId(pub u32);

/// Global counter for `InstanceId` generation. Starts at 1 (0 could be confused with "null").
static INSTANCE_COUNTER: AtomicU32 = AtomicU32::new(1);

impl InstanceId {
  /// Generate a new unique `InstanceId`.
  pub fn new() -> Self {
    Self(INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
  }
}

impl Default for InstanceId {
  fn default() -> Self {
    Self::new()
  }
}

/// Application identifier - the key into the app catalog (e.g. `"calculator"`).
#[derive(
  Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS, Display, From, Into,
)]
#[ts(export)]
pub struct AppId(pub String);

impl AppId {
  /// Create an `AppId` from anything string-like.
  pub fn new(id: impl Into<String>) -> Self {
    Self(id.into())
  }
}

impl From<&str> for AppId {
  fn from(id: &str) -> Self {
    Self(id.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn instance_ids_are_unique() {
    let ids: Vec<InstanceId> = (0..100).map(|_| InstanceId::new()).collect();
    for (i, a) in ids.iter().enumerate() {
      for b in ids.iter().skip(i + 1) {
        assert_ne!(a, b, "instance ids must be pairwise distinct");
      }
    }
  }

  #[test]
  fn app_id_from_str() {
    let id = AppId::from("calculator");
    assert_eq!(id, AppId::new("calculator"));
    assert_eq!(id.to_string(), "calculator");
  }
}
