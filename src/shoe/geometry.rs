use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::DescriptorError;

/// Descriptor for a rectangular collision or visualization volume.
///
/// Deserialization runs through the same validation as [`BoxShape::new`], so
/// malformed payloads are rejected rather than materialized.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawBoxShape")]
pub struct BoxShape {
    position: Vec3,
    orientation: Quat,
    dimensions: Vec3,
    material_index: Option<usize>,
}

#[derive(Deserialize)]
struct RawBoxShape {
    position: Vec3,
    orientation: Quat,
    dimensions: Vec3,
    #[serde(default)]
    material_index: Option<usize>,
}

impl TryFrom<RawBoxShape> for BoxShape {
    type Error = DescriptorError;

    fn try_from(raw: RawBoxShape) -> Result<Self, Self::Error> {
        Self::new(raw.position, raw.orientation, raw.dimensions, raw.material_index)
    }
}

impl BoxShape {
    /// `dimensions` are full extents along the box's local axes and must be
    /// strictly positive. A `material_index` of `None` marks a descriptor
    /// with no material (visualization-only use).
    pub fn new(
        position: Vec3,
        orientation: Quat,
        dimensions: Vec3,
        material_index: Option<usize>,
    ) -> Result<Self, DescriptorError> {
        if dimensions.min_element() <= 0.0 {
            return Err(DescriptorError::NonPositiveDimensions { dimensions });
        }
        Ok(Self {
            position,
            orientation,
            dimensions,
            material_index,
        })
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Full extents along the box's local axes.
    pub fn dimensions(&self) -> Vec3 {
        self.dimensions
    }

    pub fn half_extents(&self) -> Vec3 {
        self.dimensions * 0.5
    }

    pub fn material_index(&self) -> Option<usize> {
        self.material_index
    }
}

/// Descriptor for a cylindrical collision or visualization volume.
/// The cylinder axis runs along the local Y axis of its orientation.
///
/// Deserialization runs through the same validation as [`CylinderShape::new`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawCylinderShape")]
pub struct CylinderShape {
    position: Vec3,
    orientation: Quat,
    radius: f32,
    length: f32,
    material_index: Option<usize>,
}

#[derive(Deserialize)]
struct RawCylinderShape {
    position: Vec3,
    orientation: Quat,
    radius: f32,
    length: f32,
    #[serde(default)]
    material_index: Option<usize>,
}

impl TryFrom<RawCylinderShape> for CylinderShape {
    type Error = DescriptorError;

    fn try_from(raw: RawCylinderShape) -> Result<Self, Self::Error> {
        Self::new(
            raw.position,
            raw.orientation,
            raw.radius,
            raw.length,
            raw.material_index,
        )
    }
}

impl CylinderShape {
    pub fn new(
        position: Vec3,
        orientation: Quat,
        radius: f32,
        length: f32,
        material_index: Option<usize>,
    ) -> Result<Self, DescriptorError> {
        if radius <= 0.0 {
            return Err(DescriptorError::NonPositiveRadius { radius });
        }
        if length <= 0.0 {
            return Err(DescriptorError::NonPositiveLength { length });
        }
        Ok(Self {
            position,
            orientation,
            radius,
            length,
            material_index,
        })
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn material_index(&self) -> Option<usize> {
        self.material_index
    }
}

/// Declarative geometry for one shoe body.
///
/// Collision and visualization lists are independent and independently
/// materialized; populated once during shoe setup and immutable afterward.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShoeGeometry {
    coll_boxes: Vec<BoxShape>,
    coll_cylinders: Vec<CylinderShape>,
    vis_boxes: Vec<BoxShape>,
    vis_cylinders: Vec<CylinderShape>,
}

impl ShoeGeometry {
    pub fn builder() -> ShoeGeometryBuilder {
        ShoeGeometryBuilder::default()
    }

    pub fn collision_boxes(&self) -> &[BoxShape] {
        &self.coll_boxes
    }

    pub fn collision_cylinders(&self) -> &[CylinderShape] {
        &self.coll_cylinders
    }

    pub fn visualization_boxes(&self) -> &[BoxShape] {
        &self.vis_boxes
    }

    pub fn visualization_cylinders(&self) -> &[CylinderShape] {
        &self.vis_cylinders
    }

    pub fn collision_shape_count(&self) -> usize {
        self.coll_boxes.len() + self.coll_cylinders.len()
    }

    /// Material indices referenced by the collision descriptors, in
    /// declaration order (boxes before cylinders).
    pub fn referenced_material_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.coll_boxes
            .iter()
            .map(|shape| shape.material_index())
            .chain(self.coll_cylinders.iter().map(|shape| shape.material_index()))
            .flatten()
    }
}

#[derive(Debug, Default)]
pub struct ShoeGeometryBuilder {
    geometry: ShoeGeometry,
}

impl ShoeGeometryBuilder {
    pub fn collision_box(mut self, shape: BoxShape) -> Self {
        self.geometry.coll_boxes.push(shape);
        self
    }

    pub fn collision_cylinder(mut self, shape: CylinderShape) -> Self {
        self.geometry.coll_cylinders.push(shape);
        self
    }

    pub fn visual_box(mut self, shape: BoxShape) -> Self {
        self.geometry.vis_boxes.push(shape);
        self
    }

    pub fn visual_cylinder(mut self, shape: CylinderShape) -> Self {
        self.geometry.vis_cylinders.push(shape);
        self
    }

    pub fn build(self) -> ShoeGeometry {
        self.geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_descriptor_rejects_non_positive_extents() {
        let result = BoxShape::new(
            Vec3::ZERO,
            Quat::IDENTITY,
            Vec3::new(0.2, 0.0, 0.05),
            None,
        );
        assert!(matches!(
            result,
            Err(DescriptorError::NonPositiveDimensions { .. })
        ));
    }

    #[test]
    fn cylinder_descriptor_rejects_bad_radius_and_length() {
        assert!(matches!(
            CylinderShape::new(Vec3::ZERO, Quat::IDENTITY, -0.1, 0.3, None),
            Err(DescriptorError::NonPositiveRadius { .. })
        ));
        assert!(matches!(
            CylinderShape::new(Vec3::ZERO, Quat::IDENTITY, 0.1, 0.0, None),
            Err(DescriptorError::NonPositiveLength { .. })
        ));
    }

    #[test]
    fn half_extents_are_half_the_full_dimensions() {
        let shape = BoxShape::new(
            Vec3::ZERO,
            Quat::IDENTITY,
            Vec3::new(0.2, 0.1, 0.05),
            Some(0),
        )
        .unwrap();

        assert_eq!(shape.half_extents(), Vec3::new(0.2, 0.1, 0.05) * 0.5);
    }

    #[test]
    fn deserialization_rejects_negative_box_dimensions() {
        let payload = r#"{
            "position": [0.0, 0.0, 0.0],
            "orientation": [0.0, 0.0, 0.0, 1.0],
            "dimensions": [-0.2, 0.1, 0.05],
            "material_index": 0
        }"#;

        let result: Result<BoxShape, _> = serde_json::from_str(payload);
        assert!(result.is_err());
    }

    #[test]
    fn deserialization_rejects_non_positive_cylinder_radius() {
        let payload = r#"{
            "position": [0.0, 0.0, 0.0],
            "orientation": [0.0, 0.0, 0.0, 1.0],
            "radius": 0.0,
            "length": 0.4
        }"#;

        let result: Result<CylinderShape, _> = serde_json::from_str(payload);
        assert!(result.is_err());
    }

    #[test]
    fn valid_descriptor_round_trips_through_serde() {
        let shape = BoxShape::new(
            Vec3::new(0.1, 0.2, 0.3),
            Quat::IDENTITY,
            Vec3::new(0.2, 0.1, 0.05),
            Some(1),
        )
        .unwrap();

        let encoded = serde_json::to_string(&shape).unwrap();
        let decoded: BoxShape = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.dimensions(), shape.dimensions());
        assert_eq!(decoded.material_index(), Some(1));
    }

    #[test]
    fn referenced_indices_follow_declaration_order() {
        let geometry = ShoeGeometry::builder()
            .collision_box(
                BoxShape::new(Vec3::ZERO, Quat::IDENTITY, Vec3::ONE, Some(1)).unwrap(),
            )
            .collision_box(BoxShape::new(Vec3::ZERO, Quat::IDENTITY, Vec3::ONE, None).unwrap())
            .collision_cylinder(
                CylinderShape::new(Vec3::ZERO, Quat::IDENTITY, 0.1, 0.2, Some(0)).unwrap(),
            )
            .build();

        let indices: Vec<usize> = geometry.referenced_material_indices().collect();
        assert_eq!(indices, vec![1, 0]);
        assert_eq!(geometry.collision_shape_count(), 3);
    }
}
