/*!
Gesture contexts for drag and resize.

A gesture is bounded by a pointer-down and a pointer-up. `begin_move` /
`begin_resize` capture the start snapshot at pointer-down; each pointer-move
is fed to `update`, which runs the pure geometry engine against the snapshot
and commits the frame; `end` consumes the gesture with the final frame.

A gesture never self-cancels. If the target window is closed from elsewhere
mid-gesture, every remaining `update` lands on the registry's absent-id
no-op path - the gesture owns nothing that could leak.
*/

use crate::core::Desktop;
use crate::geometry::{self, GestureStart, ResizeEdge};
use crate::types::{InstanceId, Point};

/// An in-flight window drag.
#[derive(Debug)]
pub struct MoveGesture {
  desktop: Desktop,
  id: InstanceId,
  start: GestureStart,
}

impl MoveGesture {
  /// Recompute and commit the position for the current pointer.
  pub fn update(&self, pointer: Point) {
    let position = geometry::drag(&self.start, pointer);
    self.desktop.move_window(self.id, position);
  }

  /// Apply the final frame and end the gesture.
  pub fn end(self, pointer: Point) {
    self.update(pointer);
  }
}

/// An in-flight resize along one of the 8 handle directions.
#[derive(Debug)]
pub struct ResizeGesture {
  desktop: Desktop,
  id: InstanceId,
  edge: ResizeEdge,
  start: GestureStart,
}

impl ResizeGesture {
  /// Recompute and commit the geometry frame for the current pointer.
  pub fn update(&self, pointer: Point) {
    let frame = geometry::resize(&self.start, self.edge, pointer);
    self.desktop.resize_window(self.id, frame.size, frame.position);
  }

  /// Apply the final frame and end the gesture.
  pub fn end(self, pointer: Point) {
    self.update(pointer);
  }
}

impl Desktop {
  /// Begin dragging a window. Returns `None` for unknown ids and for
  /// maximized windows (their geometry is frozen until restore).
  pub fn begin_move(&self, id: InstanceId, pointer: Point) -> Option<MoveGesture> {
    let start = self.gesture_start(id, pointer)?;
    Some(MoveGesture {
      desktop: self.clone(),
      id,
      start,
    })
  }

  /// Begin resizing a window along `edge`. Returns `None` for unknown ids
  /// and for maximized windows.
  pub fn begin_resize(
    &self,
    id: InstanceId,
    edge: ResizeEdge,
    pointer: Point,
  ) -> Option<ResizeGesture> {
    let start = self.gesture_start(id, pointer)?;
    Some(ResizeGesture {
      desktop: self.clone(),
      id,
      edge,
      start,
    })
  }

  fn gesture_start(&self, id: InstanceId, pointer: Point) -> Option<GestureStart> {
    self.read(|reg| match reg.find(id) {
      None => {
        log::debug!("gesture: unknown window {id}");
        None
      }
      Some(w) if w.maximized => {
        log::debug!("gesture: {id} is maximized, ignored");
        None
      }
      Some(w) => Some(GestureStart::new(pointer, w.position, w.size)),
    })
  }
}
