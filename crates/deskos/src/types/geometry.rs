/*! Geometry types for work-area coordinates. */

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A 2D point in work-area coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }

  /// Translate by a delta on both axes.
  pub const fn offset(&self, dx: f64, dy: f64) -> Self {
    Self {
      x: self.x + dx,
      y: self.y + dy,
    }
  }
}

/// Window dimensions in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Size {
  pub width: f64,
  pub height: f64,
}

impl Size {
  pub const fn new(width: f64, height: f64) -> Self {
    Self { width, height }
  }

  /// Clamp both dimensions to the given minimums.
  pub fn clamped_min(&self, min_width: f64, min_height: f64) -> Self {
    Self {
      width: self.width.max(min_width),
      height: self.height.max(min_height),
    }
  }
}


#[cfg(test)]
mod proptests {
  use super::*;
  use proptest::prelude::*;

  /// Strategy for generating reasonable work-area coordinates
  fn coord() -> impl Strategy<Value = f64> {
    -10000.0..10000.0f64
  }

  /// Strategy for generating non-negative dimensions
  fn dimension() -> impl Strategy<Value = f64> {
    0.0..5000.0f64
  }

  proptest! {
    /// Offsetting then offsetting back returns the original point
    #[test]
    fn offset_roundtrip(x in coord(), y in coord(), dx in coord(), dy in coord()) {
      let p = Point::new(x, y);
      let back = p.offset(dx, dy).offset(-dx, -dy);
      prop_assert!((back.x - p.x).abs() < 1e-6 && (back.y - p.y).abs() < 1e-6);
    }

    /// Clamped sizes always satisfy the minimums
    #[test]
    fn clamp_holds_floor(w in dimension(), h in dimension()) {
      let s = Size::new(w, h).clamped_min(300.0, 200.0);
      prop_assert!(s.width >= 300.0, "width floor violated: {}", s.width);
      prop_assert!(s.height >= 200.0, "height floor violated: {}", s.height);
    }

    /// Clamping is idempotent
    #[test]
    fn clamp_idempotent(w in dimension(), h in dimension()) {
      let once = Size::new(w, h).clamped_min(300.0, 200.0);
      let twice = once.clamped_min(300.0, 200.0);
      prop_assert_eq!(once, twice);
    }
  }
}
