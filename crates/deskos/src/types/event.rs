/*! Event types for state changes and synchronization. */

use super::{InstanceId, WindowRecord};
use crate::shell::ShellPanel;
use serde::Serialize;
use ts_rs::TS;

/// Initial state sent on connection.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Snapshot {
  /// All open windows (minimized included), in open order.
  pub windows: Vec<WindowRecord>,
  pub active_window: Option<InstanceId>,
  /// Instance IDs in z-order (front to back)
  pub z_order: Vec<InstanceId>,
  /// Currently open transient shell panel, if any.
  pub open_panel: Option<ShellPanel>,
}

/// Events emitted when session state changes.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(tag = "event", content = "data")]
#[ts(export)]
pub enum Event {
  // Initial sync (on connection)
  #[serde(rename = "sync:init")]
  SyncInit(Snapshot),

  // Window lifecycle
  #[serde(rename = "window:opened")]
  WindowOpened { window: WindowRecord },
  #[serde(rename = "window:changed")]
  WindowChanged { window: WindowRecord },
  #[serde(rename = "window:closed")]
  WindowClosed { window_id: InstanceId },

  // Focus
  #[serde(rename = "focus:window")]
  FocusWindow { window_id: Option<InstanceId> },

  // Transient shell panels (start menu, control center)
  #[serde(rename = "shell:panel")]
  PanelChanged { panel: Option<ShellPanel> },
}
