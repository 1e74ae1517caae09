/*! Window record - one per open window instance. */

use super::{AppId, InstanceId, Point, Size};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An open window in a desktop session.
///
/// `position` and `size` are meaningful only when not maximized, but are
/// preserved underneath so restore is exact. Minimized windows are excluded
/// from visible rendering but retained in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WindowRecord {
  pub id: InstanceId,
  pub app_id: AppId,
  /// Title from the app definition, denormalized at open time.
  pub title: String,
  /// Icon reference from the app definition.
  pub icon: String,
  pub minimized: bool,
  pub maximized: bool,
  /// Stacking order: strictly higher values render above lower ones.
  pub z_index: u32,
  /// Top-left corner in work-area coordinates.
  pub position: Point,
  pub size: Size,
}

impl WindowRecord {
  /// Whether the window takes part in visible stacking.
  pub const fn visible(&self) -> bool {
    !self.minimized
  }
}
