//! Camera conversion

use crate::core::config::RenderSettings;
use crate::error::ConvertError;
use crate::foundation::math::{to_viewer_layout, Mat4};
use crate::host::{HostObject, SceneCamera, ViewportState};
use crate::viewer::Camera;

/// Scale factor every converted camera carries
pub const CAMERA_SCALE: f32 = 0.5;

/// Where a camera comes from
#[derive(Debug, Clone, PartialEq)]
pub enum CameraSource {
    /// The host's interactive viewport
    Viewport(ViewportState),
    /// A camera object rendered with the given output settings
    Object {
        /// Camera object
        camera: SceneCamera,
        /// Output settings that shape the projection
        render: RenderSettings,
    },
    /// Something the host adapter could not classify as a camera
    Unrecognized {
        /// Host type name of the offending value
        kind: String,
    },
}

impl CameraSource {
    /// Classify a host object as a camera source
    pub fn from_host_object(object: &HostObject, render: &RenderSettings) -> Self {
        match object {
            HostObject::Camera(camera) => Self::Object {
                camera: camera.clone(),
                render: render.clone(),
            },
            other => Self::Unrecognized {
                kind: format!("{} '{}'", other.kind(), other.name()),
            },
        }
    }
}

fn invert(matrix: &Mat4, which: &'static str) -> Result<Mat4, ConvertError> {
    matrix.try_inverse().ok_or(ConvertError::SingularMatrix(which))
}

/// Convert a camera source into a viewer camera
///
/// The view transform is the inverse of the viewport's view matrix or of
/// the camera object's world matrix. The projection is the viewport's
/// window matrix or the host projection of the camera object. Both go
/// through [`to_viewer_layout`]. The viewport is set to
/// `viewport_dimensions` and the scale to [`CAMERA_SCALE`].
///
/// An [`CameraSource::Unrecognized`] source is reported and yields
/// [`ConvertError::InvalidCameraSource`].
pub fn convert_camera(source: &CameraSource, viewport_dimensions: (u32, u32)) -> Result<Camera, ConvertError> {
    let (view, projection) = match source {
        CameraSource::Viewport(state) => (invert(&state.view_matrix, "viewport view")?, state.window_matrix),
        CameraSource::Object { camera, render } => (
            invert(&camera.matrix_world, "camera world")?,
            camera.projection_matrix(render),
        ),
        CameraSource::Unrecognized { kind } => {
            log::warn!("Invalid camera source: {}", kind);
            return Err(ConvertError::InvalidCameraSource(kind.clone()));
        }
    };

    let mut camera = Camera::new();
    camera.set_transform_matrix(to_viewer_layout(&view));
    camera.set_projection(to_viewer_layout(&projection));

    let (width, height) = viewport_dimensions;
    camera.set_viewport(width, height);
    camera.set_scale(CAMERA_SCALE);

    log::debug!("Converted camera for {}x{} viewport", width, height);
    Ok(camera)
}
