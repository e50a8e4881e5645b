//! Contact materials and the registry that shares them with the host engine.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_DYNAMIC_FRICTION, DEFAULT_POISSON_RATIO, DEFAULT_RESTITUTION, DEFAULT_STATIC_FRICTION,
    DEFAULT_YOUNG_MODULUS,
};

/// Contact formulation used by the hosting simulation. Materials are created
/// for one formulation and must match the one the host steps with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ContactMethod {
    /// Complementarity-based (non-smooth) contact.
    #[default]
    NonSmooth,
    /// Penalty-based (smooth) contact.
    Smooth,
}

/// Surface coefficients shared by both contact formulations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceProperties {
    pub static_friction: f32,
    pub dynamic_friction: f32,
    pub restitution: f32,
    /// Consulted by the smooth (penalty) formulation only.
    pub young_modulus: f32,
    /// Consulted by the smooth (penalty) formulation only.
    pub poisson_ratio: f32,
}

impl Default for SurfaceProperties {
    fn default() -> Self {
        Self {
            static_friction: DEFAULT_STATIC_FRICTION,
            dynamic_friction: DEFAULT_DYNAMIC_FRICTION,
            restitution: DEFAULT_RESTITUTION,
            young_modulus: DEFAULT_YOUNG_MODULUS,
            poisson_ratio: DEFAULT_POISSON_RATIO,
        }
    }
}

impl SurfaceProperties {
    pub fn rubber() -> Self {
        Self {
            static_friction: 1.1,
            dynamic_friction: 0.9,
            restitution: 0.3,
            young_modulus: 1.0e6,
            poisson_ratio: 0.49,
        }
    }

    pub fn steel() -> Self {
        Self {
            static_friction: 0.58,
            dynamic_friction: 0.44,
            restitution: 0.1,
            young_modulus: 2.0e11,
            poisson_ratio: 0.3,
        }
    }
}

/// A contact material registered with the host engine.
///
/// Opaque to the shoe core: shoes only store and hand out references, the
/// contact-resolution stage interprets the coefficients.
#[derive(Debug)]
pub struct ContactMaterial {
    method: ContactMethod,
    properties: SurfaceProperties,
}

impl ContactMaterial {
    /// Formulation this material was created for.
    pub fn method(&self) -> ContactMethod {
        self.method
    }

    pub fn properties(&self) -> &SurfaceProperties {
        &self.properties
    }
}

/// Shared handle to a registered contact material.
///
/// Handles compare by identity: two handles denote the same material only if
/// they point at the same registry entry, never by coefficient equality.
#[derive(Clone)]
pub struct MaterialHandle(Arc<ContactMaterial>);

impl MaterialHandle {
    pub fn same_material(a: &MaterialHandle, b: &MaterialHandle) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl Deref for MaterialHandle {
    type Target = ContactMaterial;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for MaterialHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MaterialHandle").field(&self.0).finish()
    }
}

/// Registry of contact materials, shared between the host engine and the
/// shoes referencing its entries. The registry retains a reference to every
/// material it mints, so handles stay valid for the life of the registry or
/// of their longest holder, whichever is longer.
#[derive(Default)]
pub struct MaterialRegistry {
    materials: RwLock<Vec<MaterialHandle>>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a material consistent with the given contact formulation and
    /// returns a shared handle to it.
    pub fn create(&self, method: ContactMethod, properties: SurfaceProperties) -> MaterialHandle {
        let handle = MaterialHandle(Arc::new(ContactMaterial { method, properties }));
        self.materials.write().push(handle.clone());
        handle
    }

    pub fn len(&self) -> usize {
        self.materials.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_mints_distinct_materials() {
        let registry = MaterialRegistry::new();
        let a = registry.create(ContactMethod::NonSmooth, SurfaceProperties::steel());
        let b = registry.create(ContactMethod::NonSmooth, SurfaceProperties::steel());

        assert!(!MaterialHandle::same_material(&a, &b));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn cloned_handles_denote_the_same_material() {
        let registry = MaterialRegistry::new();
        let a = registry.create(ContactMethod::Smooth, SurfaceProperties::rubber());
        let b = a.clone();

        assert!(MaterialHandle::same_material(&a, &b));
        assert_eq!(b.method(), ContactMethod::Smooth);
    }

    #[test]
    fn handles_outlive_the_registry() {
        let handle = {
            let registry = MaterialRegistry::new();
            registry.create(ContactMethod::NonSmooth, SurfaceProperties::default())
        };

        assert_eq!(handle.method(), ContactMethod::NonSmooth);
    }
}
