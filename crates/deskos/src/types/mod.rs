/*! Core types for deskos.

Regenerate TypeScript types: `npm run typegen`
*/

#![allow(missing_docs)]

mod error;
mod event;
mod geometry;
mod ids;
mod window;

pub use error::{DeskError, DeskResult};
pub use event::{Event, Snapshot};
pub use geometry::{Point, Size};
pub use ids::{AppId, InstanceId};
pub use window::WindowRecord;
