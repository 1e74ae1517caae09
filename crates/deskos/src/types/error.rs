/*! Error types for deskos operations. */

use super::{AppId, InstanceId};

/// Errors that can occur during deskos operations.
///
/// Intents (open/close/minimize/…) never return these - they are best-effort
/// no-ops on unknown ids. Query-style APIs and catalog registration do.
#[derive(Debug, thiserror::Error)]
pub enum DeskError {
  #[error("Window not found: {0}")]
  WindowNotFound(InstanceId),

  #[error("Unknown app: {0}")]
  UnknownApp(AppId),

  #[error("App already registered: {0}")]
  DuplicateApp(AppId),
}

/// Result type for deskos operations.
pub type DeskResult<T> = Result<T, DeskError>;
