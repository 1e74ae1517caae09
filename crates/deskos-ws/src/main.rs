/*!
Standalone deskos server.

Reads an app manifest (a JSON array of app definitions) and serves the
desktop session over WebSocket for the browser shell to drive.

```sh
deskos-ws apps.json
DESKOS_PORT=4500 deskos-ws apps.json
```
*/

use deskos::{AppCatalog, AppDefinition, Desktop};
use deskos_ws::{start_server, WebSocketState, DEFAULT_WS_PORT};

fn load_catalog(path: &str) -> Result<AppCatalog, String> {
  let raw = std::fs::read_to_string(path).map_err(|e| format!("read {path}: {e}"))?;
  let defs: Vec<AppDefinition> =
    serde_json::from_str(&raw).map_err(|e| format!("parse {path}: {e}"))?;

  let mut catalog = AppCatalog::new();
  for def in defs {
    catalog.register(def).map_err(|e| e.to_string())?;
  }
  Ok(catalog)
}

fn port_from_env() -> u16 {
  std::env::var("DESKOS_PORT")
    .ok()
    .and_then(|p| p.parse().ok())
    .unwrap_or(DEFAULT_WS_PORT)
}

#[tokio::main]
async fn main() {
  env_logger::init();

  let Some(manifest) = std::env::args().nth(1) else {
    eprintln!("usage: deskos-ws <apps.json>");
    std::process::exit(2);
  };

  let catalog = match load_catalog(&manifest) {
    Ok(c) => c,
    Err(e) => {
      eprintln!("failed to load app manifest: {e}");
      std::process::exit(1);
    }
  };
  log::info!("loaded {} apps from {manifest}", catalog.len());

  let desktop = Desktop::builder().apps(catalog).build();
  start_server(WebSocketState::with_port(desktop, port_from_env())).await;
}
