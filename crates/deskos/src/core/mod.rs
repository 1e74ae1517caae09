/*!
Core Desktop session - owns all window-manager state and event broadcasting.

# Module Structure

- `mod.rs` - `Desktop` struct, construction, events, queries
- `registry/` - Registry with private fields + operations + event emission
- `zorder.rs` - monotonic stacking-value allocator
- `lifecycle.rs` - the intent surface: open/close/minimize/maximize/focus/move/resize

# Example

```ignore
use deskos::{AppCatalog, AppDefinition, Desktop};

let mut catalog = AppCatalog::new();
catalog.register(AppDefinition::new("calculator", "Calculator", "icons/calculator.svg"))?;

let desktop = Desktop::builder().apps(catalog).build();
let id = desktop.open_app(&"calculator".into());

let mut events = desktop.subscribe();
while let Ok(event) = events.recv().await {
    // handle event
}
```
*/

mod lifecycle;
mod registry;
mod zorder;

pub(crate) use registry::Registry;
pub use zorder::CHROME_Z_RESERVED;

use crate::apps::AppCatalog;
use crate::types::{DeskError, DeskResult, Event, InstanceId, Point, Snapshot, WindowRecord};
use async_broadcast::InactiveReceiver;
use parking_lot::RwLock;
use std::sync::Arc;

const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// One independent desktop session - owns the registry, the allocator, and
/// the event channel.
///
/// Clone is cheap (Arc bumps) - share freely between chrome surfaces and
/// gesture contexts.
pub struct Desktop {
  pub(crate) state: Arc<RwLock<Registry>>,
  catalog: Arc<AppCatalog>,
  config: DesktopConfig,
  events_keepalive: InactiveReceiver<Event>,
}

impl Clone for Desktop {
  fn clone(&self) -> Self {
    Self {
      state: Arc::clone(&self.state),
      catalog: Arc::clone(&self.catalog),
      config: self.config,
      events_keepalive: self.events_keepalive.clone(),
    }
  }
}

impl std::fmt::Debug for Desktop {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Desktop").finish_non_exhaustive()
  }
}

/// Session construction parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesktopConfig {
  /// Position of the first opened window.
  pub cascade_base: Point,
  /// Stagger applied per already-open window, on both axes.
  pub cascade_step: f64,
  /// Seed for the z allocator; app windows stack strictly above it.
  pub z_seed: u32,
}

impl Default for DesktopConfig {
  fn default() -> Self {
    Self {
      cascade_base: Point::new(60.0, 60.0),
      cascade_step: 30.0,
      z_seed: CHROME_Z_RESERVED,
    }
  }
}

/// Builder for configuring a Desktop session.
///
/// # Example
///
/// ```ignore
/// let desktop = Desktop::builder()
///     .apps(catalog)
///     .cascade(Point::new(40.0, 40.0), 24.0)
///     .build();
/// ```
#[derive(Debug, Default)]
#[must_use = "Builder does nothing until .build() is called"]
pub struct DesktopBuilder {
  config: DesktopConfig,
  catalog: AppCatalog,
}

impl DesktopBuilder {
  /// Supply the app catalog the session launches from.
  pub fn apps(mut self, catalog: AppCatalog) -> Self {
    self.catalog = catalog;
    self
  }

  /// Set the cascade stagger for successively opened windows.
  pub const fn cascade(mut self, base: Point, step: f64) -> Self {
    self.config.cascade_base = base;
    self.config.cascade_step = step;
    self
  }

  /// Seed the z allocator above a custom reserved chrome range.
  pub const fn z_seed(mut self, seed: u32) -> Self {
    self.config.z_seed = seed;
    self
  }

  /// Build the session.
  pub fn build(self) -> Desktop {
    let (mut tx, rx) = async_broadcast::broadcast(EVENT_CHANNEL_CAPACITY);
    tx.set_overflow(true); // Drop oldest messages when full

    // The registry owns the sender for event emission
    let state = Registry::new(tx, self.config.z_seed);

    Desktop {
      state: Arc::new(RwLock::new(state)),
      catalog: Arc::new(self.catalog),
      config: self.config,
      events_keepalive: rx.deactivate(),
    }
  }
}

impl Desktop {
  /// Create a builder for configuring a new session.
  pub fn builder() -> DesktopBuilder {
    DesktopBuilder::default()
  }

  /// Subscribe to events from this session.
  pub fn subscribe(&self) -> async_broadcast::Receiver<Event> {
    self.events_keepalive.activate_cloned()
  }

  /// Assemble the initial-sync snapshot of current state.
  pub fn snapshot(&self) -> Snapshot {
    self.read(Registry::snapshot)
  }

  /// Get a window record by id.
  pub fn get(&self, id: InstanceId) -> DeskResult<WindowRecord> {
    self
      .read(|reg| reg.find(id).cloned())
      .ok_or(DeskError::WindowNotFound(id))
  }

  /// All open windows (minimized included), in open order.
  pub fn windows(&self) -> Vec<WindowRecord> {
    self.read(|reg| reg.windows_in_open_order().cloned().collect())
  }

  /// The focused window, if any.
  pub fn active_window(&self) -> Option<InstanceId> {
    self.read(Registry::active_window)
  }

  pub(crate) fn catalog(&self) -> &AppCatalog {
    &self.catalog
  }

  pub(crate) const fn config(&self) -> &DesktopConfig {
    &self.config
  }

  /// Read state. Never block inside the closure.
  #[inline]
  pub(crate) fn read<R>(&self, f: impl FnOnce(&Registry) -> R) -> R {
    f(&self.state.read())
  }

  /// Write state. Never block inside the closure.
  #[inline]
  pub(crate) fn write<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> R {
    f(&mut self.state.write())
  }
}
