//! Segmented track shoes: declarative geometry, the contact-material
//! contract, and the default materialization procedures.

pub mod geometry;
pub mod segmented;
pub mod single_pin;

pub use geometry::{BoxShape, CylinderShape, ShoeGeometry, ShoeGeometryBuilder};
pub use segmented::{SegmentedTrackShoe, ShoeContactMaterials, TrackShoeUnit};
pub use single_pin::{SinglePinDimensions, SinglePinShoe};
