/*!
Static application definitions and the catalog the shell launches from.

The lifecycle controller only ever reads these. Window content is an opaque
JSON value the front end resolves into a mounted component - the core never
inspects it.
*/

use crate::types::{AppId, DeskError, DeskResult, Size};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Static definition of a launchable application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppDefinition {
  pub id: AppId,
  pub title: String,
  /// Icon reference (asset path or glyph name), rendered by the shell.
  pub icon: String,
  /// Initial window size. Falls back to the session defaults when absent.
  #[serde(default)]
  pub default_size: Option<Size>,
  /// Whether the app shows in the pinned dock even with no open window.
  #[serde(default)]
  pub pinned: bool,
  /// Opaque content reference, mounted verbatim into the window frame.
  #[serde(default)]
  #[ts(type = "unknown")]
  pub content: serde_json::Value,
}

impl AppDefinition {
  /// Create a definition with no default size, unpinned, and empty content.
  pub fn new(id: impl Into<AppId>, title: impl Into<String>, icon: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      title: title.into(),
      icon: icon.into(),
      default_size: None,
      pinned: false,
      content: serde_json::Value::Null,
    }
  }

  /// Set the initial window size.
  #[must_use]
  pub const fn with_default_size(mut self, size: Size) -> Self {
    self.default_size = Some(size);
    self
  }

  /// Pin the app to the dock.
  #[must_use]
  pub const fn pinned(mut self) -> Self {
    self.pinned = true;
    self
  }

  /// Attach the opaque content reference.
  #[must_use]
  pub fn with_content(mut self, content: serde_json::Value) -> Self {
    self.content = content;
    self
  }
}

/// Registration-ordered collection of app definitions.
#[derive(Debug, Clone, Default)]
pub struct AppCatalog {
  apps: Vec<AppDefinition>,
}

impl AppCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  /// Register an app. Ids must be unique within the catalog.
  pub fn register(&mut self, app: AppDefinition) -> DeskResult<()> {
    if self.get(&app.id).is_some() {
      return Err(DeskError::DuplicateApp(app.id));
    }
    self.apps.push(app);
    Ok(())
  }

  /// Look up a definition by id.
  pub fn get(&self, id: &AppId) -> Option<&AppDefinition> {
    self.apps.iter().find(|a| &a.id == id)
  }

  /// All definitions in registration order.
  pub fn apps(&self) -> &[AppDefinition] {
    &self.apps
  }

  pub fn is_empty(&self) -> bool {
    self.apps.is_empty()
  }

  pub fn len(&self) -> usize {
    self.apps.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn calc() -> AppDefinition {
    AppDefinition::new("calculator", "Calculator", "icons/calculator.svg")
  }

  #[test]
  fn register_and_get() {
    let mut catalog = AppCatalog::new();
    catalog.register(calc()).expect("fresh id registers");

    let def = catalog.get(&AppId::from("calculator")).expect("registered app is found");
    assert_eq!(def.title, "Calculator");
    assert_eq!(catalog.len(), 1);
  }

  #[test]
  fn duplicate_id_is_rejected() {
    let mut catalog = AppCatalog::new();
    catalog.register(calc()).expect("fresh id registers");

    let err = catalog.register(calc()).expect_err("duplicate id must be rejected");
    assert!(matches!(err, DeskError::DuplicateApp(id) if id == AppId::from("calculator")));
  }

  #[test]
  fn unknown_id_is_none() {
    let catalog = AppCatalog::new();
    assert!(catalog.get(&AppId::from("missing")).is_none());
  }

  #[test]
  fn registration_order_is_preserved() {
    let mut catalog = AppCatalog::new();
    catalog.register(calc()).expect("register calculator");
    catalog
      .register(AppDefinition::new("notepad", "Notepad", "icons/notepad.svg"))
      .expect("register notepad");

    let ids: Vec<&str> = catalog.apps().iter().map(|a| a.id.0.as_str()).collect();
    assert_eq!(ids, ["calculator", "notepad"]);
  }
}
