//! Core types shared by the shoe subsystem: rigid transforms and the
//! body-side geometry interface.

pub mod body;
pub mod types;

pub use body::{BodyGeometry, CollisionShape, ShapePrimitive, ShoeBody, VisualShape};
pub use types::Transform;
