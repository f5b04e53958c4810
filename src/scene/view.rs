//! Camera placement and projection matrices
//!
//! Fixed right-handed camera at (0, 1, 10) looking at the origin. The
//! projection is either a 40-degree perspective or the demo's orthographic
//! box, remapped from GL clip space to WebGPU's [0, 1] depth range.

use nalgebra::{Matrix4, Point3, Vector3};

/// Vertical field of view for the perspective projection, degrees
pub const FOV_Y_DEG: f32 = 40.0;

/// GL clip space has z in [-1, 1]; WebGPU expects [0, 1]
#[rustfmt::skip]
fn opengl_to_wgpu() -> Matrix4<f32> {
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.5, 0.5,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// The demo's fixed view transform: eye (0, 1, 10), target origin, up +Y
pub fn view_matrix() -> Matrix4<f32> {
    Matrix4::look_at_rh(
        &Point3::new(0.0, 1.0, 10.0),
        &Point3::origin(),
        &Vector3::y(),
    )
}

/// Projection for the current toggle state.
///
/// Perspective: 40 degree vertical FOV, near 0.1, far 100. Orthographic:
/// +/-3.4 vertically (scaled by aspect horizontally), near 1, far 20.
pub fn projection_matrix(aspect: f32, perspective: bool) -> Matrix4<f32> {
    let gl = if perspective {
        Matrix4::new_perspective(aspect, FOV_Y_DEG.to_radians(), 0.1, 100.0)
    } else {
        Matrix4::new_orthographic(-3.4 * aspect, 3.4 * aspect, -3.4, 3.4, 1.0, 20.0)
    };
    opengl_to_wgpu() * gl
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    #[test]
    fn test_view_maps_eye_to_origin() {
        let view = view_matrix();
        let eye = view.transform_point(&Point3::new(0.0, 1.0, 10.0));
        assert_relative_eq!(eye, Point3::origin(), epsilon = 1e-5);
    }

    #[test]
    fn test_view_looks_down_negative_z() {
        let view = view_matrix();
        // The target ends up in front of the camera (negative z, RH)
        let target = view.transform_point(&Point3::origin());
        assert!(target.z < 0.0);
        assert_relative_eq!(target.x, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_perspective_depth_range_is_zero_to_one() {
        let p = projection_matrix(4.0 / 3.0, true);
        let near = p.transform_point(&Point3::new(0.0, 0.0, -0.1));
        let far = p.transform_point(&Point3::new(0.0, 0.0, -100.0));
        assert_relative_eq!(near.z, 0.0, epsilon = 1e-4);
        assert_relative_eq!(far.z, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_ortho_depth_range_is_zero_to_one() {
        let p = projection_matrix(4.0 / 3.0, false);
        let near = p.transform_point(&Point3::new(0.0, 0.0, -1.0));
        let far = p.transform_point(&Point3::new(0.0, 0.0, -20.0));
        assert_relative_eq!(near.z, 0.0, epsilon = 1e-5);
        assert_relative_eq!(far.z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_ortho_width_scales_with_aspect() {
        let p = projection_matrix(2.0, false);
        let right = p.transform_point(&Point3::new(6.8, 0.0, -5.0));
        assert_relative_eq!(right.x, 1.0, epsilon = 1e-5);
    }
}
