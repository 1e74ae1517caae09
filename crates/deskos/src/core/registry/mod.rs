/*!
Registry - the single source of truth for one desktop session.

All fields are private. Mutations go through methods that maintain invariants
and emit events. This guarantees:
- The derived z-order vec is always current
- Events are always emitted
- The active window is never a minimized or absent one

## Module Structure

- `mod.rs` - Registry struct, focus, panel state, snapshot
- `windows.rs` - Window CRUD, queries, z-order maintenance
*/

mod windows;

use async_broadcast::Sender;
use std::collections::HashMap;

use super::zorder::ZOrderAllocator;
use crate::shell::ShellPanel;
use crate::types::{Event, InstanceId, Snapshot, WindowRecord};

/// Internal state storage with automatic event emission.
pub(crate) struct Registry {
  // Event emission
  events_tx: Sender<Event>,

  // Primary collection
  pub(super) windows: HashMap<InstanceId, WindowRecord>,

  // Derived orders
  /// Insertion order - drives the taskbar.
  pub(super) open_order: Vec<InstanceId>,
  /// Stacking order, front to back - drives rendering.
  pub(super) z_order: Vec<InstanceId>,

  // Focus/UI state
  active_window: Option<InstanceId>,
  open_panel: Option<ShellPanel>,

  // Stacking-value allocation
  allocator: ZOrderAllocator,
}

impl Registry {
  pub(crate) fn new(events_tx: Sender<Event>, z_seed: u32) -> Self {
    Self {
      events_tx,
      windows: HashMap::new(),
      open_order: Vec::new(),
      z_order: Vec::new(),
      active_window: None,
      open_panel: None,
      allocator: ZOrderAllocator::new(z_seed),
    }
  }

  /// Emit an event.
  pub(super) fn emit(&self, event: Event) {
    if let Err(e) = self.events_tx.try_broadcast(event) {
      if e.is_full() {
        log::error!(
          "Event channel overflow - events are being dropped. \
           Consider increasing the event channel capacity or processing events faster."
        );
      }
    }
  }

  /// Allocate the next topmost stacking value.
  pub(crate) fn next_z(&mut self) -> u32 {
    self.allocator.next()
  }

  /// Set the active window. Emits `FocusWindow` if changed.
  ///
  /// Callers must pass `None` or the id of a present, non-minimized window.
  pub(crate) fn set_active_window(&mut self, id: Option<InstanceId>) {
    debug_assert!(
      id.is_none_or(|id| self.windows.get(&id).is_some_and(WindowRecord::visible)),
      "active window must be present and not minimized"
    );
    if self.active_window == id {
      return;
    }
    self.active_window = id;
    self.emit(Event::FocusWindow { window_id: id });
  }

  /// Get the active window.
  pub(crate) const fn active_window(&self) -> Option<InstanceId> {
    self.active_window
  }

  /// Set the open transient panel. Emits `PanelChanged` if changed.
  pub(crate) fn set_open_panel(&mut self, panel: Option<ShellPanel>) {
    if self.open_panel == panel {
      return;
    }
    self.open_panel = panel;
    self.emit(Event::PanelChanged { panel });
  }

  /// Get the open transient panel.
  pub(crate) const fn open_panel(&self) -> Option<ShellPanel> {
    self.open_panel
  }

  /// Assemble the initial-sync snapshot.
  pub(crate) fn snapshot(&self) -> Snapshot {
    Snapshot {
      windows: self.windows_in_open_order().cloned().collect(),
      active_window: self.active_window,
      z_order: self.z_order.clone(),
      open_panel: self.open_panel,
    }
  }
}
