//! Whole-scene conversion
//!
//! Walks a host scene snapshot and converts everything the viewer can show.
//! Collecting the results into the viewer's own scene is left to the caller.

use crate::core::config::RenderCameraType;
use crate::host::{HostObject, HostScene};
use crate::viewer::{Camera, Light, Mesh};

use super::{convert_camera, convert_light, convert_mesh, CameraSource};

/// Viewer values converted from one host scene
#[derive(Debug, Clone, Default)]
pub struct ConvertedScene {
    /// Render camera, when the scene has a usable active camera
    pub camera: Option<Camera>,
    /// Camera model the viewer should render with
    pub camera_type: RenderCameraType,
    /// Meshes keyed by host object name, in scene order
    pub meshes: Vec<(String, Mesh)>,
    /// Lights keyed by host object name, in scene order
    pub lights: Vec<(String, Light)>,
    /// Names of objects that were not converted
    pub skipped: Vec<String>,
}

impl ConvertedScene {
    /// Find a converted mesh by host object name
    pub fn mesh(&self, name: &str) -> Option<&Mesh> {
        self.meshes.iter().find(|(n, _)| n == name).map(|(_, mesh)| mesh)
    }

    /// Find a converted light by host object name
    pub fn light(&self, name: &str) -> Option<&Light> {
        self.lights.iter().find(|(n, _)| n == name).map(|(_, light)| light)
    }
}

/// Convert every mesh and light of a scene plus its active camera
///
/// The camera is converted as a camera object at the scene's render
/// settings, with the viewport set to the output pixel size. A missing or
/// unusable active camera is reported and leaves `camera` empty; the rest
/// of the scene is still converted. Camera objects other than the active
/// one, and objects of other kinds, are listed in `skipped`.
pub fn convert_scene(scene: &HostScene, camera_type: RenderCameraType) -> ConvertedScene {
    let mut converted = ConvertedScene {
        camera_type,
        ..Default::default()
    };

    for object in &scene.objects {
        match object {
            HostObject::Mesh(mesh) => converted.meshes.push((mesh.name.clone(), convert_mesh(mesh))),
            HostObject::Light(light) => converted.lights.push((light.name.clone(), convert_light(light))),
            HostObject::Camera(camera) if scene.active_camera.as_deref() == Some(camera.name.as_str()) => {}
            other => converted.skipped.push(other.name().to_string()),
        }
    }

    converted.camera = match scene.active_camera.as_deref() {
        Some(name) => match scene.object(name) {
            Some(object) => {
                let source = CameraSource::from_host_object(object, &scene.render);
                match convert_camera(&source, scene.render.pixel_dimensions()) {
                    Ok(camera) => Some(camera),
                    Err(e) => {
                        log::warn!("Scene camera '{}' not converted: {}", name, e);
                        None
                    }
                }
            }
            None => {
                log::warn!("Active camera '{}' is not in the scene", name);
                None
            }
        },
        None => {
            log::info!("Scene has no active camera");
            None
        }
    };

    log::info!(
        "Converted scene: {} meshes, {} lights, camera: {}, skipped: {}",
        converted.meshes.len(),
        converted.lights.len(),
        converted.camera.is_some(),
        converted.skipped.len()
    );
    converted
}
