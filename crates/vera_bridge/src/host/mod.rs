//! # Host Scene Model
//!
//! Plain data read out of the host application's scene graph by a host
//! adapter. The converters only ever see these types, never live host
//! handles.
//!
//! All coordinates are in host convention and local to their object unless a
//! field says otherwise.

pub mod camera;
pub mod paths;

use std::path::PathBuf;

use serde::{Serialize, Deserialize};

use crate::core::config::RenderSettings;
use crate::foundation::math::{Mat4, Vec3};

pub use camera::{CameraProjection, SceneCamera, SensorFit};

/// Interactive viewport state: the host's live 3D view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    /// World-to-view matrix of the viewport
    pub view_matrix: Mat4,
    /// Projection ("window") matrix of the viewport
    pub window_matrix: Mat4,
}

impl ViewportState {
    /// Create a viewport state from its two matrices
    pub fn new(view_matrix: Mat4, window_matrix: Mat4) -> Self {
        Self { view_matrix, window_matrix }
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(Mat4::identity(), Mat4::identity())
    }
}

/// One mesh vertex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HostVertex {
    /// Local-space position
    pub co: Vec3,
    /// Local-space normal
    pub normal: Vec3,
}

impl HostVertex {
    /// Create a vertex
    pub fn new(co: Vec3, normal: Vec3) -> Self {
        Self { co, normal }
    }
}

/// Triangle of the host's triangulated face loops
///
/// `vertices[i]` and `loops[i]` describe the same corner: the vertex it
/// uses and the face corner ("loop") that per-corner data is stored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopTriangle {
    /// Vertex indices in winding order
    pub vertices: [u32; 3],
    /// Loop indices matching `vertices`
    pub loops: [u32; 3],
}

impl LoopTriangle {
    /// Create a triangle from vertex and loop indices
    pub fn new(vertices: [u32; 3], loops: [u32; 3]) -> Self {
        Self { vertices, loops }
    }

    /// Iterate the corners as `(vertex, loop)` pairs
    pub fn corners(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.vertices.iter().copied().zip(self.loops.iter().copied())
    }
}

/// Per-loop texture coordinates
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UvLayer {
    /// Layer name in the host
    pub name: String,
    /// One UV per loop, indexed by loop index
    pub data: Vec<[f32; 2]>,
}

impl UvLayer {
    /// Create a UV layer
    pub fn new(name: impl Into<String>, data: Vec<[f32; 2]>) -> Self {
        Self { name: name.into(), data }
    }

    /// UV stored for a loop, if the layer covers it
    pub fn uv(&self, loop_index: u32) -> Option<[f32; 2]> {
        self.data.get(loop_index as usize).copied()
    }
}

/// Mesh object from the host scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostMesh {
    /// Object name in the host scene
    pub name: String,
    /// Object-to-world transform
    pub matrix_world: Mat4,
    /// Vertex array
    pub vertices: Vec<HostVertex>,
    /// Triangulated faces
    pub loop_triangles: Vec<LoopTriangle>,
    /// UV layers
    pub uv_layers: Vec<UvLayer>,
    /// Index of the active UV layer in `uv_layers`
    pub active_uv_index: Option<usize>,
}

impl HostMesh {
    /// Create an empty mesh object
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            matrix_world: Mat4::identity(),
            vertices: Vec::new(),
            loop_triangles: Vec::new(),
            uv_layers: Vec::new(),
            active_uv_index: None,
        }
    }

    /// Add a vertex
    pub fn add_vertex(&mut self, co: Vec3, normal: Vec3) {
        self.vertices.push(HostVertex::new(co, normal));
    }

    /// Add a triangle
    pub fn add_triangle(&mut self, triangle: LoopTriangle) {
        self.loop_triangles.push(triangle);
    }

    /// Add a UV layer and make it the active one
    pub fn add_active_uv_layer(&mut self, layer: UvLayer) {
        self.uv_layers.push(layer);
        self.active_uv_index = Some(self.uv_layers.len() - 1);
    }

    /// The active UV layer, if any
    pub fn active_uv_layer(&self) -> Option<&UvLayer> {
        self.active_uv_index.and_then(|index| self.uv_layers.get(index))
    }
}

/// Light object from the host scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostLight {
    /// Object name in the host scene
    pub name: String,
    /// Object-to-world transform
    pub matrix_world: Mat4,
    /// Local location of the light object
    pub location: Vec3,
}

impl HostLight {
    /// Create a light at a location with an identity world transform
    pub fn new(name: impl Into<String>, location: Vec3) -> Self {
        Self {
            name: name.into(),
            matrix_world: Mat4::identity(),
            location,
        }
    }
}

/// Any object a host adapter can hand over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HostObject {
    /// Camera object
    Camera(SceneCamera),
    /// Mesh object
    Mesh(HostMesh),
    /// Light object
    Light(HostLight),
    /// Object of a kind the bridge does not convert (empties, curves, ...)
    Other {
        /// Object name
        name: String,
        /// Host type name
        kind: String,
    },
}

impl HostObject {
    /// Object name in the host scene
    pub fn name(&self) -> &str {
        match self {
            Self::Camera(camera) => &camera.name,
            Self::Mesh(mesh) => &mesh.name,
            Self::Light(light) => &light.name,
            Self::Other { name, .. } => name,
        }
    }

    /// Host type name of the object
    pub fn kind(&self) -> &str {
        match self {
            Self::Camera(_) => "CAMERA",
            Self::Mesh(_) => "MESH",
            Self::Light(_) => "LIGHT",
            Self::Other { kind, .. } => kind,
        }
    }
}

/// Snapshot of a host scene
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HostScene {
    /// All objects in the scene
    pub objects: Vec<HostObject>,
    /// Name of the scene's active camera object
    pub active_camera: Option<String>,
    /// Output settings
    pub render: RenderSettings,
    /// Directory of the saved host file, for `//` paths
    pub base_dir: Option<PathBuf>,
}

impl HostScene {
    /// Create an empty scene with the given render settings
    pub fn new(render: RenderSettings) -> Self {
        Self {
            render,
            ..Default::default()
        }
    }

    /// Add an object
    pub fn add_object(&mut self, object: HostObject) {
        self.objects.push(object);
    }

    /// Find an object by name
    pub fn object(&self, name: &str) -> Option<&HostObject> {
        self.objects.iter().find(|object| object.name() == name)
    }

    /// Check a host path, resolving `//` against the scene's directory
    pub fn file_exists(&self, path: &str) -> bool {
        paths::file_exists(path, self.base_dir.as_deref())
    }
}
