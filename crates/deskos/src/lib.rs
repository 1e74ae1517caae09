/*!
deskos - window management core for a browser-based desktop shell.

```ignore
use deskos::{AppCatalog, AppDefinition, Desktop, Point};

// Register the launchable apps, then build a session
let mut catalog = AppCatalog::new();
catalog.register(AppDefinition::new("calculator", "Calculator", "icons/calculator.svg"))?;
let desktop = Desktop::builder().apps(catalog).build();

// Shell intents
let id = desktop.open_app(&"calculator".into()).unwrap();
desktop.focus_window(id);
desktop.minimize_window(id);

// Direct manipulation as gesture contexts
let gesture = desktop.begin_move(id, Point::new(100.0, 100.0)).unwrap();
gesture.update(Point::new(140.0, 120.0));
gesture.end(Point::new(150.0, 125.0));

// Subscribe to state-change events
let mut events = desktop.subscribe();
while let Ok(event) = events.recv().await {
    // handle event
}
```
*/

mod apps;
mod core;
mod gesture;
mod shell;

pub mod geometry;

mod types;
pub use types::*;

pub use crate::apps::{AppCatalog, AppDefinition};
pub use crate::core::{Desktop, DesktopBuilder, DesktopConfig, CHROME_Z_RESERVED};
pub use crate::gesture::{MoveGesture, ResizeGesture};
pub use crate::geometry::ResizeEdge;
pub use crate::shell::{ShellPanel, TaskbarEntry};
