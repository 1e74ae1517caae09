/*!
Window operations for the Registry.

CRUD: `add`, `update`, `remove`
Query: `find`, `windows_in_open_order`, `window_count`, `top_visible`

Adds trust the caller-supplied id is fresh; removal and update of absent ids
are no-ops, never errors.
*/

use super::Registry;
use crate::types::{Event, InstanceId, WindowRecord};

impl Registry {
  /// Append a window record. Emits `WindowOpened`.
  pub(crate) fn add(&mut self, record: WindowRecord) {
    let id = record.id;
    self.open_order.push(id);
    self.windows.insert(id, record.clone());
    self.update_z_order();
    self.emit(Event::WindowOpened { window: record });
  }

  /// Merge a change into a record via `patch`. No-op if absent.
  /// Emits `WindowChanged` if the record actually changed.
  ///
  /// Returns whether a record was found and patched.
  pub(crate) fn update(&mut self, id: InstanceId, patch: impl FnOnce(&mut WindowRecord)) -> bool {
    let Some(record) = self.windows.get_mut(&id) else {
      return false;
    };

    let before = record.clone();
    patch(record);

    if *record == before {
      return true;
    }

    let after = record.clone();
    if after.z_index != before.z_index {
      self.update_z_order();
    }
    self.emit(Event::WindowChanged { window: after });
    true
  }

  /// Remove a window record. No-op if absent. Emits `WindowClosed`.
  ///
  /// Returns the removed record.
  pub(crate) fn remove(&mut self, id: InstanceId) -> Option<WindowRecord> {
    let removed = self.windows.remove(&id)?;
    self.open_order.retain(|&wid| wid != id);
    self.update_z_order();
    self.emit(Event::WindowClosed { window_id: id });
    Some(removed)
  }

  /// Get a record by id.
  pub(crate) fn find(&self, id: InstanceId) -> Option<&WindowRecord> {
    self.windows.get(&id)
  }

  /// Iterate records in open order.
  pub(crate) fn windows_in_open_order(&self) -> impl Iterator<Item = &WindowRecord> {
    self.open_order.iter().filter_map(|id| self.windows.get(id))
  }

  /// Number of open windows (minimized included).
  pub(crate) fn window_count(&self) -> usize {
    self.windows.len()
  }

  /// Topmost non-minimized window, if any - the focus fallback after close.
  pub(crate) fn top_visible(&self) -> Option<InstanceId> {
    self
      .z_order
      .iter()
      .copied()
      .find(|id| self.windows.get(id).is_some_and(WindowRecord::visible))
  }

  /// Rebuild the derived stacking order (front to back).
  fn update_z_order(&mut self) {
    let mut windows: Vec<_> = self.windows.values().collect();
    windows.sort_by_key(|w| std::cmp::Reverse(w.z_index));
    self.z_order = windows.into_iter().map(|w| w.id).collect();
  }
}
