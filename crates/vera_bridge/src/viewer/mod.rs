//! Viewer scene values
//!
//! The values handed to the vera viewer: cameras, meshes and lights laid out
//! the way the viewer expects them. Only setters, appenders and read-back
//! accessors live here; all conversion logic is in [`crate::convert`].

pub mod camera;
pub mod light;
pub mod mesh;

// Re-export commonly used types
pub use camera::Camera;
pub use light::Light;
pub use mesh::Mesh;
