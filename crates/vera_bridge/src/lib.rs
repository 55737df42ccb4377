//! # Vera Bridge
//!
//! Converts scene entities read out of a 3D content-creation host into the
//! value types consumed by the vera real-time viewer.
//!
//! ## Features
//!
//! - **Camera conversion**: viewport state or scene camera objects become viewer cameras
//! - **Mesh conversion**: vertices, normals, triangles and per-corner UVs
//! - **Light conversion**: host light locations in viewer space
//! - **Host paths**: host-relative path expansion and a file existence probe
//! - **Configuration**: render settings loadable from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vera_bridge::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BridgeConfig::load_from_file("bridge.toml")?;
//!     vera_bridge::foundation::logging::init_with_config(&config.logging);
//!
//!     let source = CameraSource::Object {
//!         camera: SceneCamera::default(),
//!         render: config.render.clone(),
//!     };
//!     let camera = convert_camera(&source, config.render.pixel_dimensions())?;
//!     println!("viewport: {:?}", camera.viewport());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core modules
pub mod core;
pub mod config;
pub mod error;
pub mod foundation;

// Collaborator data models
pub mod host;
pub mod viewer;

// Scene converter
pub mod convert;

pub use error::{ConvertError, PathError};

/// Common imports for bridge users
pub mod prelude {
    pub use crate::{
        ConvertError, PathError,
        config::Config,
        convert::{
            convert_camera, convert_light, convert_mesh, convert_scene, file_exists,
            CameraSource, ConvertedScene, CAMERA_SCALE,
        },
        core::config::{BridgeConfig, LoggingConfig, RenderCameraType, RenderSettings},
        foundation::math::{Mat4, Vec3},
        host::{
            HostLight, HostMesh, HostObject, HostScene, HostVertex, LoopTriangle, SceneCamera,
            UvLayer, ViewportState,
        },
        viewer::{Camera, Light, Mesh},
    };
}
