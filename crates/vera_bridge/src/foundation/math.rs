//! Math utilities and types
//!
//! Provides the nalgebra aliases used on both sides of the bridge and the
//! helpers that relabel host coordinates into viewer coordinates.

pub use nalgebra::{Matrix4, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type, addressed `m[(row, col)]`
pub type Mat4 = Matrix4<f32>;

/// Column read for each slot of a viewer matrix row.
///
/// Host Y and Z columns trade places; X and W stay put.
pub const VIEWER_COLUMN_ORDER: [usize; 4] = [0, 2, 1, 3];

/// Flatten a host matrix into the scalar order of the viewer's matrix setters.
///
/// Rows are visited 0..3 and, within each row, columns in
/// [`VIEWER_COLUMN_ORDER`]. Nothing is recomputed: the output is a
/// permutation of the sixteen input scalars.
pub fn to_viewer_layout(matrix: &Mat4) -> [f32; 16] {
    let mut values = [0.0; 16];
    for row in 0..4 {
        for (slot, &col) in VIEWER_COLUMN_ORDER.iter().enumerate() {
            values[row * 4 + slot] = matrix[(row, col)];
        }
    }
    values
}

/// Reassemble a host matrix from viewer-ordered scalars.
///
/// The column swap is its own inverse, so this undoes [`to_viewer_layout`].
pub fn from_viewer_layout(values: &[f32; 16]) -> Mat4 {
    let mut matrix = Mat4::zeros();
    for row in 0..4 {
        for (slot, &col) in VIEWER_COLUMN_ORDER.iter().enumerate() {
            matrix[(row, col)] = values[row * 4 + slot];
        }
    }
    matrix
}

/// Host position or normal expressed in viewer orientation: every axis negated.
pub fn negate_axes(v: &Vec3) -> [f32; 3] {
    [-v.x, -v.y, -v.z]
}

/// Host location expressed in viewer space: negated, with Y and Z swapped.
pub fn negate_swap_yz(v: &Vec3) -> [f32; 3] {
    [-v.x, -v.z, -v.y]
}

/// Extension trait for Mat4 with the projection builders the host uses
pub trait Mat4Ext {
    /// Create an OpenGL-style perspective frustum from view plane bounds
    fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4;

    /// Create an OpenGL-style orthographic box from view plane bounds
    fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
        // P = [2n/(r-l)   0          (r+l)/(r-l)    0          ]
        //     [0          2n/(t-b)   (t+b)/(t-b)    0          ]
        //     [0          0          -(f+n)/(f-n)   -2fn/(f-n) ]
        //     [0          0          -1             0          ]
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;

        let mut result = Mat4::zeros();
        result[(0, 0)] = 2.0 * near / width;
        result[(1, 1)] = 2.0 * near / height;
        result[(0, 2)] = (right + left) / width;
        result[(1, 2)] = (top + bottom) / height;
        result[(2, 2)] = -(far + near) / depth;
        result[(2, 3)] = -2.0 * far * near / depth;
        result[(3, 2)] = -1.0;
        result
    }

    fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;

        let mut result = Mat4::identity();
        result[(0, 0)] = 2.0 / width;
        result[(1, 1)] = 2.0 / height;
        result[(2, 2)] = -2.0 / depth;
        result[(0, 3)] = -(right + left) / width;
        result[(1, 3)] = -(top + bottom) / height;
        result[(2, 3)] = -(far + near) / depth;
        result
    }
}
