/*!
RPC request/response types and dispatch.

One method per shell intent, plus snapshot/query methods. Intents answer
`null`: per the core's failure semantics they cannot fail, only no-op.
*/

#![allow(missing_docs)]

use deskos::{
  AppDefinition, AppId, Desktop, InstanceId, Point, ShellPanel, Size, Snapshot, WindowRecord,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use ts_rs::TS;

/// RPC request.
#[derive(Debug, Deserialize, TS)]
#[serde(tag = "method", content = "args", rename_all = "snake_case")]
#[ts(export)]
pub enum RpcRequest {
  /// Get a snapshot of current session state.
  Snapshot,
  /// List launchable apps for the start menu and desktop icons.
  ListApps,
  /// Get one window record.
  GetWindow { window_id: InstanceId },
  /// Open a new window for an app.
  OpenApp { app_id: AppId },
  /// Close a window.
  CloseWindow { window_id: InstanceId },
  /// Minimize a window.
  MinimizeWindow { window_id: InstanceId },
  /// Toggle maximize on a window.
  MaximizeWindow { window_id: InstanceId },
  /// Focus (and raise) a window, un-minimizing if needed.
  FocusWindow { window_id: InstanceId },
  /// Move a window to a position (drag end).
  MoveWindow { window_id: InstanceId, x: f64, y: f64 },
  /// Commit a resize frame. `x`/`y` accompany leading-edge resizes.
  ResizeWindow {
    window_id: InstanceId,
    width: f64,
    height: f64,
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
  },
  /// Toggle a transient shell panel.
  TogglePanel { panel: ShellPanel },
  /// Dismiss any open transient panel.
  ClosePanels,
}

/// RPC response.
#[derive(Debug, Serialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum RpcResponse {
  /// Full state snapshot.
  Snapshot(Box<Snapshot>),
  /// Single window record.
  Window(Box<WindowRecord>),
  /// App catalog listing.
  Apps(Vec<AppDefinition>),
  /// Fresh instance id from `open_app`, or null for an unknown app.
  Opened(Option<InstanceId>),
  /// No data.
  Null,
}

pub fn dispatch_json(desktop: &Desktop, method: &str, args: &JsonValue) -> JsonValue {
  let request_value = json!({ "method": method, "args": args });

  match serde_json::from_value::<RpcRequest>(request_value) {
    Ok(request) => match dispatch(desktop, request) {
      Ok(response) => json!({ "result": response }),
      Err(e) => {
        log::warn!("[rpc] {method} failed: {e}");
        json!({ "error": e })
      }
    },
    Err(e) => {
      log::warn!("[rpc] Invalid request for {method}: {e}");
      json!({ "error": format!("Invalid request: {}", e) })
    }
  }
}

pub fn dispatch(desktop: &Desktop, request: RpcRequest) -> Result<RpcResponse, String> {
  match request {
    RpcRequest::Snapshot => Ok(RpcResponse::Snapshot(Box::new(desktop.snapshot()))),

    RpcRequest::ListApps => Ok(RpcResponse::Apps(desktop.apps())),

    RpcRequest::GetWindow { window_id } => {
      let window = desktop.get(window_id).map_err(|e| e.to_string())?;
      Ok(RpcResponse::Window(Box::new(window)))
    }

    RpcRequest::OpenApp { app_id } => Ok(RpcResponse::Opened(desktop.open_app(&app_id))),

    RpcRequest::CloseWindow { window_id } => {
      desktop.close_window(window_id);
      Ok(RpcResponse::Null)
    }

    RpcRequest::MinimizeWindow { window_id } => {
      desktop.minimize_window(window_id);
      Ok(RpcResponse::Null)
    }

    RpcRequest::MaximizeWindow { window_id } => {
      desktop.maximize_window(window_id);
      Ok(RpcResponse::Null)
    }

    RpcRequest::FocusWindow { window_id } => {
      desktop.focus_window(window_id);
      Ok(RpcResponse::Null)
    }

    RpcRequest::MoveWindow { window_id, x, y } => {
      desktop.move_window(window_id, Point::new(x, y));
      Ok(RpcResponse::Null)
    }

    RpcRequest::ResizeWindow {
      window_id,
      width,
      height,
      x,
      y,
    } => {
      let position = match (x, y) {
        (Some(x), Some(y)) => Some(Point::new(x, y)),
        _ => None,
      };
      desktop.resize_window(window_id, Size::new(width, height), position);
      Ok(RpcResponse::Null)
    }

    RpcRequest::TogglePanel { panel } => {
      desktop.toggle_panel(panel);
      Ok(RpcResponse::Null)
    }

    RpcRequest::ClosePanels => {
      desktop.close_panels();
      Ok(RpcResponse::Null)
    }
  }
}
