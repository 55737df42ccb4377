//! Viewer light

/// Point light as consumed by the viewer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Light {
    position: [f32; 3],
}

impl Light {
    /// Create a light at the viewer origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the light position in viewer space
    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position = [x, y, z];
    }

    /// Light position in viewer space
    pub fn position(&self) -> [f32; 3] {
        self.position
    }
}
