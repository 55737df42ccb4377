//! # Viewer Camera
//!
//! Camera value accepted by the viewer. The viewer takes its matrices as
//! sixteen scalars in its own element order, plus the viewport size in pixels
//! and a scale factor.

use crate::foundation::math::{from_viewer_layout, Mat4};

const IDENTITY_VALUES: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

/// Camera as consumed by the viewer
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    transform: [f32; 16],
    projection: [f32; 16],
    viewport: (u32, u32),
    scale: f32,
}

impl Camera {
    /// Create a camera with identity matrices, an empty viewport and unit scale
    pub fn new() -> Self {
        Self {
            transform: IDENTITY_VALUES,
            projection: IDENTITY_VALUES,
            viewport: (0, 0),
            scale: 1.0,
        }
    }

    /// Set the camera transform from sixteen viewer-ordered scalars
    pub fn set_transform_matrix(&mut self, values: [f32; 16]) {
        self.transform = values;
        log::trace!("Camera transform set: {:?}", values);
    }

    /// Set the projection from sixteen viewer-ordered scalars
    pub fn set_projection(&mut self, values: [f32; 16]) {
        self.projection = values;
        log::trace!("Camera projection set: {:?}", values);
    }

    /// Set the viewport size in pixels
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    /// Set the scale factor
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// Transform scalars exactly as they were set
    pub fn transform_values(&self) -> &[f32; 16] {
        &self.transform
    }

    /// Projection scalars exactly as they were set
    pub fn projection_values(&self) -> &[f32; 16] {
        &self.projection
    }

    /// Transform reassembled into host element order
    pub fn transform_matrix(&self) -> Mat4 {
        from_viewer_layout(&self.transform)
    }

    /// Projection reassembled into host element order
    pub fn projection_matrix(&self) -> Mat4 {
        from_viewer_layout(&self.projection)
    }

    /// Viewport size in pixels
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Scale factor
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
