use glam::Vec3;
use thiserror::Error;

/// Top-level error type for track-shoe configuration.
#[derive(Debug, Error)]
pub enum ShoeError {
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// A shoe supplied no materials for its own collision shapes.
    #[error("shoe material list is empty; at least one contact material is required")]
    EmptyShoeMaterials,

    /// The sprocket material also appeared in the shoe material list.
    #[error("sprocket contact material must be distinct from every shoe material")]
    SprocketMaterialReused,

    /// A shape descriptor referenced a material past the end of the shoe's
    /// material list.
    #[error("material index {index} is out of range for {len} shoe material(s)")]
    MaterialIndexOutOfRange { index: usize, len: usize },

    /// Contact geometry was requested before the contact materials existed.
    #[error("contact materials have not been created for this shoe")]
    MaterialsNotCreated,

    /// The one-shot material-creation step was run a second time.
    #[error("contact materials have already been created for this shoe")]
    MaterialsAlreadyCreated,

    /// The one-shot contact-materialization step was run a second time.
    #[error("contact geometry has already been materialized for this shoe")]
    AlreadyMaterialized,

    /// The one-shot visualization step was run a second time.
    #[error("visualization geometry has already been materialized for this shoe")]
    VisualizationAlreadyMaterialized,
}

/// Errors raised while constructing shape descriptors.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("box dimensions {dimensions} must be strictly positive on every axis")]
    NonPositiveDimensions { dimensions: Vec3 },

    #[error("cylinder radius {radius} must be strictly positive")]
    NonPositiveRadius { radius: f32 },

    #[error("cylinder length {length} must be strictly positive")]
    NonPositiveLength { length: f32 },
}
