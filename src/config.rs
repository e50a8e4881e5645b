//! Default coefficients for contact materials in the running-gear toolkit.

/// Default static friction coefficient for shoe contact surfaces.
pub const DEFAULT_STATIC_FRICTION: f32 = 0.8;

/// Default dynamic friction coefficient for shoe contact surfaces.
pub const DEFAULT_DYNAMIC_FRICTION: f32 = 0.7;

/// Default restitution coefficient for shoe contact surfaces.
pub const DEFAULT_RESTITUTION: f32 = 0.1;

/// Default Young's modulus (Pa), consulted by the smooth contact formulation.
pub const DEFAULT_YOUNG_MODULUS: f32 = 1.0e7;

/// Default Poisson ratio, consulted by the smooth contact formulation.
pub const DEFAULT_POISSON_RATIO: f32 = 0.3;
