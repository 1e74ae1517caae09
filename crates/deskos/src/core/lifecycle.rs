/*!
Window lifecycle intents.

State machine per window: `Closed → Open(Normal) ⇄ Open(Minimized)`, and
orthogonally `Normal ⇄ Maximized` while open.

All operations are best-effort: unknown window ids and unknown app ids are
silent no-ops, logged at debug level. Every call site originates from a
rendered affordance, so a dangling id is an implementer bug, not a runtime
fault worth an error channel.
*/

use super::Desktop;
use crate::geometry::{MIN_HEIGHT, MIN_WIDTH};
use crate::shell::ShellPanel;
use crate::types::{AppId, InstanceId, Point, Size, WindowRecord};

/// Fallback window width for apps without a declared default size.
const DEFAULT_WIDTH: f64 = 640.0;
/// Fallback window height for apps without a declared default size.
const DEFAULT_HEIGHT: f64 = 480.0;

/// Stagger multiplier for the nth open window, as an exact float.
fn cascade_count(count: usize) -> f64 {
  f64::from(u32::try_from(count).unwrap_or(u32::MAX))
}

impl Desktop {
  /// Open a new window for `app_id`.
  ///
  /// The window is placed at a cascading stagger per already-open window,
  /// sized from the app definition (session fallback otherwise), stacked
  /// topmost, and focused. Any open transient panel is dismissed.
  ///
  /// Returns the fresh instance id, or `None` for an unknown app id.
  pub fn open_app(&self, app_id: &AppId) -> Option<InstanceId> {
    let Some(def) = self.catalog().get(app_id) else {
      log::debug!("open_app: unknown app {app_id}");
      return None;
    };

    let size = def
      .default_size
      .unwrap_or(Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT));
    let title = def.title.clone();
    let icon = def.icon.clone();
    let config = *self.config();

    let id = InstanceId::new();
    self.write(|reg| {
      let stagger = cascade_count(reg.window_count()) * config.cascade_step;
      let record = WindowRecord {
        id,
        app_id: app_id.clone(),
        title,
        icon,
        minimized: false,
        maximized: false,
        z_index: reg.next_z(),
        position: config.cascade_base.offset(stagger, stagger),
        size,
      };
      reg.add(record);
      reg.set_active_window(Some(id));
      reg.set_open_panel(None);
    });
    Some(id)
  }

  /// Close a window. If it was focused, focus moves to the topmost remaining
  /// visible window, or clears when none remain.
  pub fn close_window(&self, id: InstanceId) {
    self.write(|reg| {
      if reg.remove(id).is_none() {
        log::debug!("close_window: unknown window {id}");
        return;
      }
      if reg.active_window() == Some(id) {
        let next = reg.top_visible();
        reg.set_active_window(next);
      }
    });
  }

  /// Minimize a window. Minimizing always clears focus - it does not
  /// auto-select another window.
  pub fn minimize_window(&self, id: InstanceId) {
    self.write(|reg| {
      if !reg.update(id, |w| w.minimized = true) {
        log::debug!("minimize_window: unknown window {id}");
        return;
      }
      reg.set_active_window(None);
    });
  }

  /// Toggle maximize. Maximizing implies bringing to front, so the window is
  /// always raised and focused - in both toggle directions.
  pub fn maximize_window(&self, id: InstanceId) {
    self.write(|reg| {
      if reg.find(id).is_none() {
        log::debug!("maximize_window: unknown window {id}");
        return;
      }
      let z = reg.next_z();
      reg.update(id, |w| {
        w.maximized = !w.maximized;
        w.minimized = false;
        w.z_index = z;
      });
      reg.set_active_window(Some(id));
    });
  }

  /// Focus a window, un-minimizing it if needed. Always allocates a fresh
  /// topmost z value - refocusing the topmost window is harmless.
  pub fn focus_window(&self, id: InstanceId) {
    self.write(|reg| {
      if reg.find(id).is_none() {
        log::debug!("focus_window: unknown window {id}");
        return;
      }
      let z = reg.next_z();
      reg.update(id, |w| {
        w.minimized = false;
        w.z_index = z;
      });
      reg.set_active_window(Some(id));
    });
  }

  /// Move a window to `position`. Ignored while maximized; positions are not
  /// clamped to the work area (off-screen dragging is permitted).
  pub fn move_window(&self, id: InstanceId, position: Point) {
    self.write(|reg| match reg.find(id) {
      None => log::debug!("move_window: unknown window {id}"),
      Some(w) if w.maximized => log::debug!("move_window: {id} is maximized, ignored"),
      Some(_) => {
        reg.update(id, |w| w.position = position);
      }
    });
  }

  /// Commit a resize frame. Ignored while maximized. The size floor is
  /// re-applied here so the registry invariant holds even for callers that
  /// bypass the geometry engine.
  pub fn resize_window(&self, id: InstanceId, size: Size, position: Option<Point>) {
    let size = size.clamped_min(MIN_WIDTH, MIN_HEIGHT);
    self.write(|reg| match reg.find(id) {
      None => log::debug!("resize_window: unknown window {id}"),
      Some(w) if w.maximized => log::debug!("resize_window: {id} is maximized, ignored"),
      Some(_) => {
        reg.update(id, |w| {
          w.size = size;
          if let Some(p) = position {
            w.position = p;
          }
        });
      }
    });
  }

  /// Toggle a transient shell panel; opening one closes the other.
  pub fn toggle_panel(&self, panel: ShellPanel) {
    self.write(|reg| {
      let next = if reg.open_panel() == Some(panel) {
        None
      } else {
        Some(panel)
      };
      reg.set_open_panel(next);
    });
  }

  /// Dismiss any open transient panel.
  pub fn close_panels(&self) {
    self.write(|reg| reg.set_open_panel(None));
  }
}
