//! # Scene Converter
//!
//! Turns host scene entities into viewer values. Every function here is
//! stateless: each call builds fresh viewer values from its input and hands
//! them to the caller.
//!
//! ## Conventions
//!
//! - Camera matrices keep their row order and swap columns 1 and 2
//! - Mesh positions and normals are negated on every axis
//! - Light locations are negated with Y and Z swapped
//! - Triangle winding is passed through untouched
//!
//! Local coordinates are used for vertices and lights; world matrices are
//! carried on the host types but not applied.

pub mod camera;
pub mod light;
pub mod mesh;
pub mod scene;

pub use camera::{convert_camera, CameraSource, CAMERA_SCALE};
pub use light::convert_light;
pub use mesh::convert_mesh;
pub use scene::{convert_scene, ConvertedScene};

pub use crate::host::paths::file_exists;
