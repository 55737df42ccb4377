//! Light conversion

use crate::foundation::math::negate_swap_yz;
use crate::host::HostLight;
use crate::viewer::Light;

/// Convert a host light into a viewer light
///
/// The local location is negated and its Y and Z axes swapped, matching the
/// Y/Z relabeling the camera matrices go through. `matrix_world` is not
/// applied: a parented or constrained light lands at its local location.
pub fn convert_light(light: &HostLight) -> Light {
    let [x, y, z] = negate_swap_yz(&light.location);

    let mut out = Light::new();
    out.set_position(x, y, z);

    log::debug!("Converted light '{}' to {:?}", light.name, out.position());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Mat4, Vec3};

    #[test]
    fn test_location_is_negated_and_swapped() {
        let light = HostLight::new("Point", Vec3::new(4.0, 1.0, 5.9));
        assert_eq!(convert_light(&light).position(), [-4.0, -5.9, -1.0]);
    }

    #[test]
    fn test_origin_stays_at_origin() {
        let light = HostLight::new("Point", Vec3::zeros());
        let [x, y, z] = convert_light(&light).position();
        assert_eq!((x, y, z), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_world_matrix_is_not_applied() {
        let mut light = HostLight::new("Child", Vec3::new(1.0, 2.0, 3.0));
        light.matrix_world = Mat4::new_scaling(3.0);

        assert_eq!(convert_light(&light).position(), [-1.0, -3.0, -2.0]);
    }
}
