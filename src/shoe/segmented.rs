use log::{debug, trace, warn};

use crate::core::body::{BodyGeometry, ShoeBody};
use crate::core::types::Transform;
use crate::error::ShoeError;
use crate::materials::{ContactMethod, MaterialHandle, MaterialRegistry};
use crate::shoe::geometry::ShoeGeometry;

/// Contact materials supplied by a concrete shoe.
///
/// The sprocket material is used exclusively for contact with the sprocket.
/// The shoe list backs the shoe's own collision shapes (contact with wheels,
/// idler, and ground) and is indexed by the shape descriptors' material
/// indices, in insertion order.
#[derive(Debug, Clone)]
pub struct ShoeContactMaterials {
    sprocket: MaterialHandle,
    shoe: Vec<MaterialHandle>,
}

impl ShoeContactMaterials {
    /// Fails with [`ShoeError::EmptyShoeMaterials`] when no material backs the
    /// shoe's own collision shapes, and with
    /// [`ShoeError::SprocketMaterialReused`] when the sprocket handle also
    /// appears in the shoe list. Sprocket contact must never share a material
    /// object with ground/wheel contact.
    pub fn new(sprocket: MaterialHandle, shoe: Vec<MaterialHandle>) -> Result<Self, ShoeError> {
        if shoe.is_empty() {
            return Err(ShoeError::EmptyShoeMaterials);
        }
        if shoe
            .iter()
            .any(|material| MaterialHandle::same_material(&sprocket, material))
        {
            return Err(ShoeError::SprocketMaterialReused);
        }
        Ok(Self { sprocket, shoe })
    }

    pub fn sprocket(&self) -> &MaterialHandle {
        &self.sprocket
    }

    pub fn shoe_materials(&self) -> &[MaterialHandle] {
        &self.shoe
    }

    /// Resolves a descriptor's material index. Out-of-range indices are a
    /// configuration defect and fail loudly; clamping would silently bind the
    /// wrong physical material to a collision shape.
    pub fn resolve(&self, index: usize) -> Result<&MaterialHandle, ShoeError> {
        self.shoe
            .get(index)
            .ok_or(ShoeError::MaterialIndexOutOfRange {
                index,
                len: self.shoe.len(),
            })
    }
}

/// One segmented track shoe: one or more rigid links connected through joints
/// or compliant bushings, carrying declarative collision and visualization
/// geometry for its main body.
pub trait SegmentedTrackShoe {
    /// Identifier used in log records and body naming.
    fn name(&self) -> &str;

    /// Creates the contact materials for the shoe, consistent with the given
    /// contact formulation. An implementation must supply the material used
    /// for contact with the sprocket plus one or more materials backing the
    /// shoe's own collision shapes, in the order the shape descriptors
    /// reference them.
    fn create_contact_materials(
        &self,
        method: ContactMethod,
        registry: &MaterialRegistry,
    ) -> Result<ShoeContactMaterials, ShoeError>;

    /// Declarative geometry for the main shoe body.
    fn geometry(&self) -> &ShoeGeometry;

    /// Attaches the declared collision geometry to the shoe body.
    ///
    /// This geometry serves contact with wheels, idler, and ground only; it is
    /// never consulted when resolving sprocket contact, which exclusively uses
    /// the sprocket material through a sprocket-specific path.
    ///
    /// Every material index is validated before any shape is attached, so a
    /// failed call leaves the body untouched.
    fn add_shoe_contact(
        &self,
        materials: &ShoeContactMaterials,
        body: &mut dyn BodyGeometry,
    ) -> Result<(), ShoeError> {
        let geometry = self.geometry();

        for index in geometry.referenced_material_indices() {
            materials.resolve(index)?;
        }

        for shape in geometry.collision_boxes() {
            let material = match shape.material_index() {
                Some(index) => Some(materials.resolve(index)?.clone()),
                None => None,
            };
            trace!("{}: box collider at {}", self.name(), shape.position());
            body.attach_box_collider(
                Transform::from_position_rotation(shape.position(), shape.orientation()),
                shape.half_extents(),
                material,
            );
        }

        for shape in geometry.collision_cylinders() {
            let material = match shape.material_index() {
                Some(index) => Some(materials.resolve(index)?.clone()),
                None => None,
            };
            trace!("{}: cylinder collider at {}", self.name(), shape.position());
            body.attach_cylinder_collider(
                Transform::from_position_rotation(shape.position(), shape.orientation()),
                shape.radius(),
                shape.length(),
                material,
            );
        }

        debug!(
            "{}: attached {} collision shape(s)",
            self.name(),
            geometry.collision_shape_count()
        );
        Ok(())
    }

    /// Attaches the declared visualization geometry to the shoe body.
    ///
    /// Visual shapes never participate in contact. Material indices on
    /// visualization descriptors are cosmetic and ignored.
    fn add_shoe_visualization(&self, body: &mut dyn BodyGeometry) {
        let geometry = self.geometry();

        for shape in geometry.visualization_boxes() {
            if shape.material_index().is_some() {
                warn!(
                    "{}: visualization box carries a material index; ignored",
                    self.name()
                );
            }
            body.attach_box_visual(
                Transform::from_position_rotation(shape.position(), shape.orientation()),
                shape.half_extents(),
            );
        }

        for shape in geometry.visualization_cylinders() {
            if shape.material_index().is_some() {
                warn!(
                    "{}: visualization cylinder carries a material index; ignored",
                    self.name()
                );
            }
            body.attach_cylinder_visual(
                Transform::from_position_rotation(shape.position(), shape.orientation()),
                shape.radius(),
                shape.length(),
            );
        }
    }
}

/// Owns one shoe, its body, and the configuration lifecycle.
///
/// Configuration is strictly forward: materials are created once, contact
/// geometry is materialized once, and neither step can be repeated or run out
/// of order. There is no path to un-materialize or reconfigure afterward.
pub struct TrackShoeUnit {
    shoe: Box<dyn SegmentedTrackShoe>,
    body: ShoeBody,
    materials: Option<ShoeContactMaterials>,
    contact_materialized: bool,
    visualization_materialized: bool,
}

impl TrackShoeUnit {
    pub fn new(shoe: Box<dyn SegmentedTrackShoe>) -> Self {
        let body = ShoeBody::new(shoe.name());
        Self {
            shoe,
            body,
            materials: None,
            contact_materialized: false,
            visualization_materialized: false,
        }
    }

    /// Runs the shoe's material-creation contract once.
    pub fn create_contact_materials(
        &mut self,
        method: ContactMethod,
        registry: &MaterialRegistry,
    ) -> Result<(), ShoeError> {
        if self.materials.is_some() {
            return Err(ShoeError::MaterialsAlreadyCreated);
        }
        let materials = self.shoe.create_contact_materials(method, registry)?;
        debug!(
            "{}: created {} shoe material(s) plus sprocket material",
            self.shoe.name(),
            materials.shoe_materials().len()
        );
        self.materials = Some(materials);
        Ok(())
    }

    /// Material used exclusively for contact with the sprocket.
    ///
    /// `None` until [`Self::create_contact_materials`] has run; callers must
    /// treat that as a configuration error, not a crash.
    pub fn sprocket_contact_material(&self) -> Option<MaterialHandle> {
        self.materials.as_ref().map(|m| m.sprocket().clone())
    }

    /// Materializes the declared collision geometry onto the shoe body.
    /// A second call is rejected with [`ShoeError::AlreadyMaterialized`].
    pub fn add_shoe_contact(&mut self) -> Result<(), ShoeError> {
        if self.contact_materialized {
            return Err(ShoeError::AlreadyMaterialized);
        }
        let materials = self.materials.as_ref().ok_or(ShoeError::MaterialsNotCreated)?;
        self.shoe.add_shoe_contact(materials, &mut self.body)?;
        self.contact_materialized = true;
        Ok(())
    }

    /// Materializes the declared visualization geometry onto the shoe body.
    /// A second call is rejected with
    /// [`ShoeError::VisualizationAlreadyMaterialized`].
    pub fn add_shoe_visualization(&mut self) -> Result<(), ShoeError> {
        if self.visualization_materialized {
            return Err(ShoeError::VisualizationAlreadyMaterialized);
        }
        self.shoe.add_shoe_visualization(&mut self.body);
        self.visualization_materialized = true;
        Ok(())
    }

    pub fn body(&self) -> &ShoeBody {
        &self.body
    }

    pub fn shoe(&self) -> &dyn SegmentedTrackShoe {
        self.shoe.as_ref()
    }

    pub fn contact_materials(&self) -> Option<&ShoeContactMaterials> {
        self.materials.as_ref()
    }
}
