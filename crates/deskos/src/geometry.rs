/*!
Geometry engine - pure computation for drag and resize gestures.

Invoked on every pointer-move during a gesture. Deltas are measured from the
gesture-start snapshot, not incrementally, so each frame is computed from the
same fixed point and the math never accumulates error.

## Edge semantics

A leading edge (`n`/`w`) changes both the dimension and the position; a
trailing edge (`s`/`e`) changes only the dimension. When a leading edge hits
the minimum-size clamp, the position offset is derived from the *clamped*
size delta rather than the raw pointer delta - otherwise the window edge
detaches from the cursor.
*/

use crate::types::{Point, Size};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Minimum window width, enforced for every resize frame.
pub const MIN_WIDTH: f64 = 300.0;
/// Minimum window height, enforced for every resize frame.
pub const MIN_HEIGHT: f64 = 200.0;

/// Resize handle direction. Composed of the axes n/s/e/w in the 8 usual
/// combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ResizeEdge {
  N,
  S,
  E,
  W,
  Ne,
  Nw,
  Se,
  Sw,
}

impl ResizeEdge {
  /// Whether the top (leading vertical) edge participates.
  pub const fn has_top(self) -> bool {
    matches!(self, Self::N | Self::Ne | Self::Nw)
  }

  /// Whether the bottom (trailing vertical) edge participates.
  pub const fn has_bottom(self) -> bool {
    matches!(self, Self::S | Self::Se | Self::Sw)
  }

  /// Whether the left (leading horizontal) edge participates.
  pub const fn has_left(self) -> bool {
    matches!(self, Self::W | Self::Nw | Self::Sw)
  }

  /// Whether the right (trailing horizontal) edge participates.
  pub const fn has_right(self) -> bool {
    matches!(self, Self::E | Self::Ne | Self::Se)
  }

  /// Whether any leading edge (top or left) participates.
  pub const fn is_leading(self) -> bool {
    self.has_top() || self.has_left()
  }
}

/// Gesture-start snapshot captured at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureStart {
  /// Pointer position at pointer-down.
  pub pointer: Point,
  /// Window position at pointer-down.
  pub position: Point,
  /// Window size at pointer-down.
  pub size: Size,
}

impl GestureStart {
  pub const fn new(pointer: Point, position: Point, size: Size) -> Self {
    Self {
      pointer,
      position,
      size,
    }
  }
}

/// One computed resize frame: the new size, and a new position when a
/// leading edge participated. Trailing-only resizes leave position untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeFrame {
  pub size: Size,
  pub position: Option<Point>,
}

/// Compute the window position for a drag frame.
///
/// No clamping to screen bounds: off-screen dragging is permitted.
pub fn drag(start: &GestureStart, pointer: Point) -> Point {
  start
    .position
    .offset(pointer.x - start.pointer.x, pointer.y - start.pointer.y)
}

/// Compute a resize frame from the start snapshot, the handle direction, and
/// the current pointer position.
///
/// Each axis present in the direction token is resolved independently, so
/// corner handles are just the combination of their two edges.
pub fn resize(start: &GestureStart, edge: ResizeEdge, pointer: Point) -> ResizeFrame {
  let dx = pointer.x - start.pointer.x;
  let dy = pointer.y - start.pointer.y;

  let mut width = start.size.width;
  let mut height = start.size.height;
  let mut x = start.position.x;
  let mut y = start.position.y;

  if edge.has_right() {
    width = (start.size.width + dx).max(MIN_WIDTH);
  } else if edge.has_left() {
    width = (start.size.width - dx).max(MIN_WIDTH);
    // Position shift from the clamped size delta, not the raw pointer delta.
    x = start.position.x + (start.size.width - width);
  }

  if edge.has_bottom() {
    height = (start.size.height + dy).max(MIN_HEIGHT);
  } else if edge.has_top() {
    height = (start.size.height - dy).max(MIN_HEIGHT);
    y = start.position.y + (start.size.height - height);
  }

  ResizeFrame {
    size: Size::new(width, height),
    position: edge.is_leading().then_some(Point::new(x, y)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn start() -> GestureStart {
    GestureStart::new(
      Point::new(500.0, 400.0),
      Point::new(100.0, 80.0),
      Size::new(640.0, 480.0),
    )
  }

  mod drag_frames {
    use super::*;

    #[test]
    fn follows_pointer_delta() {
      let pos = drag(&start(), Point::new(530.0, 390.0));
      assert_eq!(pos, Point::new(130.0, 70.0));
    }

    #[test]
    fn permits_offscreen_positions() {
      let pos = drag(&start(), Point::new(-2000.0, -2000.0));
      assert!(pos.x < 0.0 && pos.y < 0.0, "off-screen drag is not clamped");
    }

    #[test]
    fn zero_delta_keeps_position() {
      let s = start();
      assert_eq!(drag(&s, s.pointer), s.position);
    }
  }

  mod trailing_edges {
    use super::*;

    #[test]
    fn east_grows_width_only() {
      let frame = resize(&start(), ResizeEdge::E, Point::new(550.0, 400.0));
      assert_eq!(frame.size, Size::new(690.0, 480.0));
      assert_eq!(frame.position, None, "trailing resize must not move the window");
    }

    #[test]
    fn south_grows_height_only() {
      let frame = resize(&start(), ResizeEdge::S, Point::new(500.0, 460.0));
      assert_eq!(frame.size, Size::new(640.0, 540.0));
      assert_eq!(frame.position, None);
    }

    #[test]
    fn se_combines_both_axes() {
      let frame = resize(&start(), ResizeEdge::Se, Point::new(520.0, 430.0));
      assert_eq!(frame.size, Size::new(660.0, 510.0));
      assert_eq!(frame.position, None);
    }

    #[test]
    fn shrink_clamps_at_minimums() {
      let frame = resize(&start(), ResizeEdge::Se, Point::new(-1000.0, -1000.0));
      assert_eq!(frame.size, Size::new(MIN_WIDTH, MIN_HEIGHT));
    }
  }

  mod leading_edges {
    use super::*;

    #[test]
    fn west_shrinks_and_shifts() {
      // dx = +40: left edge moves right, width shrinks, x follows the pointer
      let frame = resize(&start(), ResizeEdge::W, Point::new(540.0, 400.0));
      assert_eq!(frame.size, Size::new(600.0, 480.0));
      assert_eq!(frame.position, Some(Point::new(140.0, 80.0)));
    }

    #[test]
    fn north_shrinks_and_shifts() {
      let frame = resize(&start(), ResizeEdge::N, Point::new(500.0, 430.0));
      assert_eq!(frame.size, Size::new(640.0, 450.0));
      assert_eq!(frame.position, Some(Point::new(100.0, 110.0)));
    }

    #[test]
    fn nw_unclamped_matches_raw_deltas() {
      // width = start - dx, x = start_x + dx (and symmetric for height/y)
      let frame = resize(&start(), ResizeEdge::Nw, Point::new(520.0, 410.0));
      assert_eq!(frame.size, Size::new(620.0, 470.0));
      assert_eq!(frame.position, Some(Point::new(120.0, 90.0)));
    }

    #[test]
    fn growing_via_leading_edge_moves_origin_outward() {
      // dx = -50: left edge moves left, window grows and x decreases
      let frame = resize(&start(), ResizeEdge::W, Point::new(450.0, 400.0));
      assert_eq!(frame.size, Size::new(690.0, 480.0));
      assert_eq!(frame.position, Some(Point::new(50.0, 80.0)));
    }

    #[test]
    fn n_leaves_x_untouched() {
      let frame = resize(&start(), ResizeEdge::N, Point::new(480.0, 430.0));
      let pos = frame.position.expect("leading edge yields a position");
      assert_eq!(pos.x, start().position.x, "n handle must not shift x");
    }
  }

  mod leading_edge_clamping {
    use super::*;

    #[test]
    fn clamped_west_position_uses_clamped_delta() {
      // Raw dx = +500 would leave width at 140; clamp holds width at 300,
      // so x may only advance by the 340 the window actually gave up.
      let frame = resize(&start(), ResizeEdge::W, Point::new(1000.0, 400.0));
      assert_eq!(frame.size.width, MIN_WIDTH);
      assert_eq!(
        frame.position,
        Some(Point::new(100.0 + (640.0 - MIN_WIDTH), 80.0)),
        "position must track the clamped size delta, not the raw pointer delta"
      );
    }

    #[test]
    fn clamped_north_position_uses_clamped_delta() {
      let frame = resize(&start(), ResizeEdge::N, Point::new(500.0, 1000.0));
      assert_eq!(frame.size.height, MIN_HEIGHT);
      assert_eq!(
        frame.position,
        Some(Point::new(100.0, 80.0 + (480.0 - MIN_HEIGHT)))
      );
    }

    #[test]
    fn nw_clamps_each_axis_independently() {
      // x axis clamps, y axis does not
      let frame = resize(&start(), ResizeEdge::Nw, Point::new(1000.0, 430.0));
      assert_eq!(frame.size, Size::new(MIN_WIDTH, 450.0));
      assert_eq!(
        frame.position,
        Some(Point::new(100.0 + (640.0 - MIN_WIDTH), 110.0))
      );
    }
  }

  mod edge_predicates {
    use super::*;

    #[test]
    fn corner_edges_combine_axes() {
      assert!(ResizeEdge::Nw.has_top() && ResizeEdge::Nw.has_left());
      assert!(ResizeEdge::Ne.has_top() && ResizeEdge::Ne.has_right());
      assert!(ResizeEdge::Sw.has_bottom() && ResizeEdge::Sw.has_left());
      assert!(ResizeEdge::Se.has_bottom() && ResizeEdge::Se.has_right());
    }

    #[test]
    fn only_top_and_left_are_leading() {
      assert!(ResizeEdge::N.is_leading());
      assert!(ResizeEdge::W.is_leading());
      assert!(ResizeEdge::Nw.is_leading());
      assert!(!ResizeEdge::S.is_leading());
      assert!(!ResizeEdge::E.is_leading());
      assert!(!ResizeEdge::Se.is_leading());
    }
  }
}
