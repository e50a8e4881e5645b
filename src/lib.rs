//! Tracked Gear – segmented track-shoe configuration for tracked-vehicle
//! running gear.
//!
//! This crate models one structural unit of a tracked vehicle's running gear:
//! the declarative collision and visualization geometry attached to a shoe
//! body, the contract a concrete shoe type fulfills to supply contact
//! materials, and the procedures that materialize the declared geometry onto
//! a simulation body.

pub mod config;
pub mod core;
pub mod error;
pub mod materials;
pub mod shoe;

pub use glam::{Quat, Vec3};

pub use core::{
    body::{BodyGeometry, CollisionShape, ShapePrimitive, ShoeBody, VisualShape},
    types::Transform,
};
pub use error::{DescriptorError, ShoeError};
pub use materials::{
    ContactMaterial, ContactMethod, MaterialHandle, MaterialRegistry, SurfaceProperties,
};
pub use shoe::{
    geometry::{BoxShape, CylinderShape, ShoeGeometry, ShoeGeometryBuilder},
    segmented::{SegmentedTrackShoe, ShoeContactMaterials, TrackShoeUnit},
    single_pin::{SinglePinDimensions, SinglePinShoe},
};
