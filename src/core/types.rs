use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Rigid placement of a shape relative to its body frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Builds a homogeneous matrix representation of the transform.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// Applies another transform on top of this one, returning the composition.
    pub fn combine(&self, other: &Transform) -> Transform {
        Transform {
            position: self.position + self.rotation * other.position,
            rotation: (self.rotation * other.rotation).normalize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn combine_with_identity_is_a_no_op() {
        let placement = Transform::from_position_rotation(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::from_rotation_y(0.7),
        );
        let combined = placement.combine(&Transform::default());

        assert_relative_eq!(combined.position.x, placement.position.x);
        assert_relative_eq!(combined.position.y, placement.position.y);
        assert_relative_eq!(combined.position.z, placement.position.z);
    }

    #[test]
    fn combine_rotates_the_child_offset() {
        let parent = Transform::from_position_rotation(Vec3::ZERO, Quat::from_rotation_z(FRAC_PI_2));
        let child = Transform::from_position(Vec3::X);

        let combined = parent.combine(&child);

        assert_relative_eq!(combined.position.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(combined.position.y, 1.0, epsilon = 1e-6);
    }
}
