//! # Host Camera Objects
//!
//! Data read from a camera object in the host scene, and the host's own
//! formula for turning lens settings plus render settings into a projection
//! matrix.
//!
//! ## Coordinate System
//! Matrices are in host convention (right-handed, Z-up world, camera looking
//! down its local -Z axis). Nothing here converts to viewer space; that is
//! the job of [`crate::convert`].

use serde::{Serialize, Deserialize};

use crate::core::config::RenderSettings;
use crate::foundation::math::{Mat4, Mat4Ext};

/// Lens model of a host camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraProjection {
    /// Perspective lens with focal length in millimeters
    Perspective {
        /// Focal length in millimeters
        lens: f32,
    },
    /// Orthographic camera covering `ortho_scale` units across the fitted axis
    Orthographic {
        /// Width of the view along the fitted sensor axis
        ortho_scale: f32,
    },
}

/// Which sensor dimension is matched to the output image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorFit {
    /// Fit the larger image dimension
    #[default]
    Auto,
    /// Fit the sensor width to the image width
    Horizontal,
    /// Fit the sensor height to the image height
    Vertical,
}

/// Camera object from the host scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneCamera {
    /// Object name in the host scene
    pub name: String,
    /// Camera-to-world transform
    pub matrix_world: Mat4,
    /// Lens model
    pub projection: CameraProjection,
    /// Sensor fitting mode
    pub sensor_fit: SensorFit,
    /// Sensor width in millimeters
    pub sensor_width: f32,
    /// Sensor height in millimeters
    pub sensor_height: f32,
    /// Horizontal lens shift as a fraction of the fitted dimension
    pub shift_x: f32,
    /// Vertical lens shift as a fraction of the fitted dimension
    pub shift_y: f32,
    /// Near clipping distance
    pub clip_start: f32,
    /// Far clipping distance
    pub clip_end: f32,
}

impl SceneCamera {
    /// Create a perspective camera with host default sensor and clipping
    pub fn perspective(name: impl Into<String>, lens: f32) -> Self {
        Self {
            name: name.into(),
            projection: CameraProjection::Perspective { lens },
            ..Default::default()
        }
    }

    /// Create an orthographic camera with host default sensor and clipping
    pub fn orthographic(name: impl Into<String>, ortho_scale: f32) -> Self {
        Self {
            name: name.into(),
            projection: CameraProjection::Orthographic { ortho_scale },
            ..Default::default()
        }
    }

    /// Set the camera-to-world transform
    pub fn with_matrix_world(mut self, matrix_world: Mat4) -> Self {
        self.matrix_world = matrix_world;
        self
    }

    /// Set the sensor fit
    pub fn with_sensor_fit(mut self, sensor_fit: SensorFit) -> Self {
        self.sensor_fit = sensor_fit;
        self
    }

    /// Set the lens shift
    pub fn with_shift(mut self, shift_x: f32, shift_y: f32) -> Self {
        self.shift_x = shift_x;
        self.shift_y = shift_y;
        self
    }

    /// Set the clipping range
    pub fn with_clipping(mut self, clip_start: f32, clip_end: f32) -> Self {
        self.clip_start = clip_start;
        self.clip_end = clip_end;
        self
    }

    /// Sensor dimension used for the pixel size, before auto fit is resolved
    fn sensor_size(&self) -> f32 {
        match self.sensor_fit {
            SensorFit::Vertical => self.sensor_height,
            SensorFit::Auto | SensorFit::Horizontal => self.sensor_width,
        }
    }

    /// Compute the projection matrix for the given output settings
    ///
    /// Follows the host's camera parameter pipeline:
    /// 1. Resolve the sensor fit against the aspect-corrected resolution
    /// 2. Derive the size of one pixel on the near plane (or in ortho units)
    /// 3. Build the view plane centered on the lens shift
    /// 4. Emit a frustum or orthographic box over that view plane
    ///
    /// The resolution is used as given, without the output percentage,
    /// because the percentage does not change the shape of the view.
    pub fn projection_matrix(&self, render: &RenderSettings) -> Mat4 {
        let win_x = render.resolution_x as f32;
        let win_y = render.resolution_y as f32;
        let ycor = render.pixel_aspect_y / render.pixel_aspect_x;

        let pixel_size = match self.projection {
            CameraProjection::Perspective { lens } => self.sensor_size() * self.clip_start / lens,
            CameraProjection::Orthographic { ortho_scale } => ortho_scale,
        };

        let horizontal = match self.sensor_fit {
            SensorFit::Auto => render.pixel_aspect_x * win_x >= render.pixel_aspect_y * win_y,
            SensorFit::Horizontal => true,
            SensorFit::Vertical => false,
        };
        let view_factor = if horizontal { win_x } else { ycor * win_y };
        let pixel_size = pixel_size / view_factor;

        let dx = self.shift_x * view_factor;
        let dy = self.shift_y * view_factor;

        let left = (-0.5 * win_x + dx) * pixel_size;
        let right = (0.5 * win_x + dx) * pixel_size;
        let bottom = (-0.5 * ycor * win_y + dy) * pixel_size;
        let top = (0.5 * ycor * win_y + dy) * pixel_size;

        log::trace!(
            "Camera '{}' view plane: [{}, {}] x [{}, {}]",
            self.name, left, right, bottom, top
        );

        match self.projection {
            CameraProjection::Perspective { .. } => {
                Mat4::frustum(left, right, bottom, top, self.clip_start, self.clip_end)
            }
            CameraProjection::Orthographic { .. } => {
                Mat4::orthographic(left, right, bottom, top, self.clip_start, self.clip_end)
            }
        }
    }
}

impl Default for SceneCamera {
    /// Host default camera: 50mm lens on a 36x24mm sensor, clipping 0.1 to 100
    fn default() -> Self {
        Self {
            name: "Camera".to_string(),
            matrix_world: Mat4::identity(),
            projection: CameraProjection::Perspective { lens: 50.0 },
            sensor_fit: SensorFit::Auto,
            sensor_width: 36.0,
            sensor_height: 24.0,
            shift_x: 0.0,
            shift_y: 0.0,
            clip_start: 0.1,
            clip_end: 100.0,
        }
    }
}
