//! A single-body track shoe with a rubber ground pad, a central guide post,
//! and pin tubes at the leading and trailing edges.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::ShoeError;
use crate::materials::{ContactMethod, MaterialRegistry, SurfaceProperties};
use crate::shoe::geometry::{BoxShape, CylinderShape, ShoeGeometry};
use crate::shoe::segmented::{SegmentedTrackShoe, ShoeContactMaterials};

/// Dimensions of a [`SinglePinShoe`], in the shoe body frame:
/// X longitudinal (direction of travel), Y up, Z lateral.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SinglePinDimensions {
    /// Full extents of the ground pad.
    pub pad: Vec3,
    /// Full extents of the guide post on top of the pad.
    pub guide: Vec3,
    /// Radius of the pin tubes at the leading and trailing edges.
    pub pin_radius: f32,
    /// Lateral length of the pin tubes.
    pub pin_length: f32,
}

impl Default for SinglePinDimensions {
    fn default() -> Self {
        Self {
            pad: Vec3::new(0.15, 0.06, 0.38),
            guide: Vec3::new(0.06, 0.08, 0.05),
            pin_radius: 0.012,
            pin_length: 0.4,
        }
    }
}

/// Concrete segmented shoe made of a single rigid link.
///
/// Shoe material index 0 backs the rubber ground pad, index 1 the steel guide
/// post and pin tubes.
#[derive(Debug)]
pub struct SinglePinShoe {
    name: String,
    geometry: ShoeGeometry,
}

impl SinglePinShoe {
    pub const PAD_MATERIAL: usize = 0;
    pub const GUIDE_MATERIAL: usize = 1;

    pub fn new(name: impl Into<String>, dims: SinglePinDimensions) -> Result<Self, ShoeError> {
        let pad = BoxShape::new(Vec3::ZERO, Quat::IDENTITY, dims.pad, Some(Self::PAD_MATERIAL))?;
        let guide = BoxShape::new(
            Vec3::new(0.0, 0.5 * (dims.pad.y + dims.guide.y), 0.0),
            Quat::IDENTITY,
            dims.guide,
            Some(Self::GUIDE_MATERIAL),
        )?;

        // Pin tubes run laterally; rotate the cylinder axis from local Y to Z.
        let lateral = Quat::from_rotation_x(FRAC_PI_2);
        let leading_pin = CylinderShape::new(
            Vec3::new(0.5 * dims.pad.x, 0.0, 0.0),
            lateral,
            dims.pin_radius,
            dims.pin_length,
            Some(Self::GUIDE_MATERIAL),
        )?;
        let trailing_pin = CylinderShape::new(
            Vec3::new(-0.5 * dims.pad.x, 0.0, 0.0),
            lateral,
            dims.pin_radius,
            dims.pin_length,
            Some(Self::GUIDE_MATERIAL),
        )?;

        let vis_pad = BoxShape::new(pad.position(), pad.orientation(), dims.pad, None)?;
        let vis_guide = BoxShape::new(guide.position(), guide.orientation(), dims.guide, None)?;
        let vis_leading = CylinderShape::new(
            leading_pin.position(),
            lateral,
            dims.pin_radius,
            dims.pin_length,
            None,
        )?;
        let vis_trailing = CylinderShape::new(
            trailing_pin.position(),
            lateral,
            dims.pin_radius,
            dims.pin_length,
            None,
        )?;

        let geometry = ShoeGeometry::builder()
            .collision_box(pad)
            .collision_box(guide)
            .collision_cylinder(leading_pin)
            .collision_cylinder(trailing_pin)
            .visual_box(vis_pad)
            .visual_box(vis_guide)
            .visual_cylinder(vis_leading)
            .visual_cylinder(vis_trailing)
            .build();

        Ok(Self {
            name: name.into(),
            geometry,
        })
    }
}

impl SegmentedTrackShoe for SinglePinShoe {
    fn name(&self) -> &str {
        &self.name
    }

    fn create_contact_materials(
        &self,
        method: ContactMethod,
        registry: &MaterialRegistry,
    ) -> Result<ShoeContactMaterials, ShoeError> {
        let sprocket = registry.create(method, SurfaceProperties::steel());
        let pad = registry.create(method, SurfaceProperties::rubber());
        let guide = registry.create(method, SurfaceProperties::steel());
        ShoeContactMaterials::new(sprocket, vec![pad, guide])
    }

    fn geometry(&self) -> &ShoeGeometry {
        &self.geometry
    }
}
