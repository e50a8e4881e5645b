use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::types::Transform;
use crate::materials::MaterialHandle;

/// Geometric primitives a body can carry. Cylinders are oriented along the
/// local Y axis of their placement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum ShapePrimitive {
    Box { half_extents: Vec3 },
    Cylinder { radius: f32, length: f32 },
}

/// A collision shape attached to a body, bound to an optional contact material.
#[derive(Debug, Clone)]
pub struct CollisionShape {
    pub primitive: ShapePrimitive,
    pub offset: Transform,
    pub material: Option<MaterialHandle>,
}

/// A purely visual shape attached to a body. Never consulted for contact.
#[derive(Debug, Clone)]
pub struct VisualShape {
    pub primitive: ShapePrimitive,
    pub offset: Transform,
}

/// Body surface consumed when materializing shoe geometry.
///
/// The host engine implements this for its own body type; [`ShoeBody`] is the
/// in-crate implementation backing tests and standalone use.
pub trait BodyGeometry {
    fn attach_box_collider(
        &mut self,
        offset: Transform,
        half_extents: Vec3,
        material: Option<MaterialHandle>,
    );

    fn attach_cylinder_collider(
        &mut self,
        offset: Transform,
        radius: f32,
        length: f32,
        material: Option<MaterialHandle>,
    );

    fn attach_box_visual(&mut self, offset: Transform, half_extents: Vec3);

    fn attach_cylinder_visual(&mut self, offset: Transform, radius: f32, length: f32);
}

/// Rigid body standing in for the host engine's shoe body.
///
/// Collision and visual models live in separate lists so contact queries never
/// see visualization geometry.
#[derive(Debug, Default)]
pub struct ShoeBody {
    name: String,
    collision_shapes: Vec<CollisionShape>,
    visual_shapes: Vec<VisualShape>,
}

impl ShoeBody {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collision_shapes: Vec::new(),
            visual_shapes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn collision_shapes(&self) -> &[CollisionShape] {
        &self.collision_shapes
    }

    pub fn visual_shapes(&self) -> &[VisualShape] {
        &self.visual_shapes
    }
}

impl BodyGeometry for ShoeBody {
    fn attach_box_collider(
        &mut self,
        offset: Transform,
        half_extents: Vec3,
        material: Option<MaterialHandle>,
    ) {
        self.collision_shapes.push(CollisionShape {
            primitive: ShapePrimitive::Box { half_extents },
            offset,
            material,
        });
    }

    fn attach_cylinder_collider(
        &mut self,
        offset: Transform,
        radius: f32,
        length: f32,
        material: Option<MaterialHandle>,
    ) {
        self.collision_shapes.push(CollisionShape {
            primitive: ShapePrimitive::Cylinder { radius, length },
            offset,
            material,
        });
    }

    fn attach_box_visual(&mut self, offset: Transform, half_extents: Vec3) {
        self.visual_shapes.push(VisualShape {
            primitive: ShapePrimitive::Box { half_extents },
            offset,
        });
    }

    fn attach_cylinder_visual(&mut self, offset: Transform, radius: f32, length: f32) {
        self.visual_shapes.push(VisualShape {
            primitive: ShapePrimitive::Cylinder { radius, length },
            offset,
        });
    }
}
