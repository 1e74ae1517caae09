/*!
Shell chrome projections.

The taskbar, dock, and start menu are read-only consumers of registry state:
they render these projections and answer back with intents. Nothing here
mutates the session.
*/

use crate::apps::AppDefinition;
use crate::core::Desktop;
use crate::types::{AppId, InstanceId};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Transient shell panels. At most one is open at a time, and opening an app
/// dismisses whichever is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ShellPanel {
  StartMenu,
  ControlCenter,
}

/// One taskbar button, in window-open order.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct TaskbarEntry {
  pub instance_id: InstanceId,
  pub app_id: AppId,
  pub title: String,
  pub icon: String,
  pub minimized: bool,
  /// Whether this window is the focused one.
  pub active: bool,
}

impl Desktop {
  /// Taskbar projection: one entry per open window, in open order.
  pub fn taskbar(&self) -> Vec<TaskbarEntry> {
    self.read(|reg| {
      let active = reg.active_window();
      reg
        .windows_in_open_order()
        .map(|w| TaskbarEntry {
          instance_id: w.id,
          app_id: w.app_id.clone(),
          title: w.title.clone(),
          icon: w.icon.clone(),
          minimized: w.minimized,
          active: active == Some(w.id),
        })
        .collect()
    })
  }

  /// Apps for the start menu and desktop icons, in registration order.
  pub fn apps(&self) -> Vec<AppDefinition> {
    self.catalog().apps().to_vec()
  }

  /// Pinned-dock projection: apps flagged `pinned`, in registration order.
  pub fn dock(&self) -> Vec<AppDefinition> {
    self
      .catalog()
      .apps()
      .iter()
      .filter(|a| a.pinned)
      .cloned()
      .collect()
  }

  /// Currently open transient panel, if any.
  pub fn open_panel(&self) -> Option<ShellPanel> {
    self.read(|reg| reg.open_panel())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::apps::{AppCatalog, AppDefinition};
  use crate::core::Desktop;

  fn desktop() -> Desktop {
    let mut catalog = AppCatalog::new();
    catalog
      .register(AppDefinition::new("calculator", "Calculator", "icons/calculator.svg").pinned())
      .expect("register calculator");
    catalog
      .register(AppDefinition::new("notepad", "Notepad", "icons/notepad.svg"))
      .expect("register notepad");
    Desktop::builder().apps(catalog).build()
  }

  #[test]
  fn taskbar_tracks_open_order_and_focus() {
    let desktop = desktop();
    let calc = desktop.open_app(&"calculator".into()).expect("open calculator");
    let pad = desktop.open_app(&"notepad".into()).expect("open notepad");

    let entries = desktop.taskbar();
    let ids: Vec<InstanceId> = entries.iter().map(|e| e.instance_id).collect();
    assert_eq!(ids, vec![calc, pad], "taskbar follows open order, not z-order");
    assert!(
      entries.iter().any(|e| e.instance_id == pad && e.active),
      "last opened window is the active taskbar entry"
    );
    assert!(
      entries.iter().any(|e| e.instance_id == calc && !e.active),
      "background window is not active"
    );
  }

  #[test]
  fn taskbar_keeps_minimized_windows() {
    let desktop = desktop();
    let calc = desktop.open_app(&"calculator".into()).expect("open calculator");
    desktop.minimize_window(calc);

    let entries = desktop.taskbar();
    assert_eq!(entries.len(), 1, "minimized windows stay on the taskbar");
    assert!(entries.iter().all(|e| e.minimized && !e.active));
  }

  #[test]
  fn dock_lists_only_pinned_apps() {
    let desktop = desktop();
    let dock = desktop.dock();
    assert_eq!(dock.len(), 1);
    assert!(dock.iter().all(|a| a.id == AppId::from("calculator")));
  }

  #[test]
  fn open_app_closes_panels() {
    let desktop = desktop();
    desktop.toggle_panel(ShellPanel::StartMenu);
    assert_eq!(desktop.open_panel(), Some(ShellPanel::StartMenu));

    drop(desktop.open_app(&"notepad".into()));
    assert_eq!(desktop.open_panel(), None, "opening an app dismisses the panel");
  }

  #[test]
  fn panels_are_mutually_exclusive() {
    let desktop = desktop();
    desktop.toggle_panel(ShellPanel::StartMenu);
    desktop.toggle_panel(ShellPanel::ControlCenter);
    assert_eq!(desktop.open_panel(), Some(ShellPanel::ControlCenter));

    desktop.toggle_panel(ShellPanel::ControlCenter);
    assert_eq!(desktop.open_panel(), None, "toggling an open panel closes it");
  }
}
