//! Mesh representation for the viewer
//!
//! The viewer keeps vertex attributes in separate arrays (positions,
//! normals, texture coordinates, tangents) indexed by a shared triangle
//! index list. Attribute arrays are filled by appending, in vertex order.
//!
//! # Tangents
//! Tangents are derived from positions, normals and texture coordinates by
//! [`Mesh::compute_tangents`]. Each tangent is a 4-vector: XYZ is the
//! tangent direction orthogonalized against the normal, W is the handedness
//! of the UV frame (+1 or -1).

use crate::foundation::math::{Vec2, Vec3};

/// Triangle mesh as consumed by the viewer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    tex_coords: Vec<[f32; 2]>,
    tangents: Vec<[f32; 4]>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex position
    pub fn add_vertex(&mut self, x: f32, y: f32, z: f32) {
        self.vertices.push([x, y, z]);
    }

    /// Append a vertex normal
    pub fn add_normal(&mut self, x: f32, y: f32, z: f32) {
        self.normals.push([x, y, z]);
    }

    /// Append a texture coordinate
    pub fn add_tex_coord(&mut self, u: f32, v: f32) {
        self.tex_coords.push([u, v]);
    }

    /// Append one triangle corner
    pub fn add_index(&mut self, index: u32) {
        self.indices.push(index);
    }

    /// Append a whole triangle in the given winding
    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Number of vertex positions
    pub fn vertices_total(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex positions
    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    /// Vertex normals
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Texture coordinates
    pub fn tex_coords(&self) -> &[[f32; 2]] {
        &self.tex_coords
    }

    /// Tangents, empty until [`Mesh::compute_tangents`] succeeds
    pub fn tangents(&self) -> &[[f32; 4]] {
        &self.tangents
    }

    /// Triangle indices
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Whether every vertex has a texture coordinate
    pub fn has_tex_coords(&self) -> bool {
        !self.tex_coords.is_empty() && self.tex_coords.len() == self.vertices.len()
    }

    /// Derive per-vertex tangents from the UV layout
    ///
    /// Accumulates the UV-space tangent and bitangent of every triangle on
    /// its three vertices, then orthogonalizes against the vertex normal
    /// (Gram-Schmidt). Returns `false` and leaves the mesh unchanged when
    /// texture coordinates or normals do not cover every vertex.
    pub fn compute_tangents(&mut self) -> bool {
        let count = self.vertices.len();
        if !self.has_tex_coords() || self.normals.len() != count {
            log::warn!(
                "Cannot compute tangents: {} vertices, {} normals, {} texcoords",
                count,
                self.normals.len(),
                self.tex_coords.len()
            );
            return false;
        }

        let mut tan1 = vec![Vec3::zeros(); count];
        let mut tan2 = vec![Vec3::zeros(); count];

        for triangle in self.indices.chunks_exact(3) {
            let [i0, i1, i2] = [triangle[0] as usize, triangle[1] as usize, triangle[2] as usize];
            if i0 >= count || i1 >= count || i2 >= count {
                log::debug!("Skipping triangle with out of range index: {:?}", triangle);
                continue;
            }

            let p0 = Vec3::from(self.vertices[i0]);
            let e1 = Vec3::from(self.vertices[i1]) - p0;
            let e2 = Vec3::from(self.vertices[i2]) - p0;

            let uv0 = Vec2::from(self.tex_coords[i0]);
            let d1 = Vec2::from(self.tex_coords[i1]) - uv0;
            let d2 = Vec2::from(self.tex_coords[i2]) - uv0;

            let det = d1.x * d2.y - d2.x * d1.y;
            if det.abs() <= f32::EPSILON {
                // Degenerate UV triangle
                continue;
            }
            let r = 1.0 / det;

            let sdir = (e1 * d2.y - e2 * d1.y) * r;
            let tdir = (e2 * d1.x - e1 * d2.x) * r;

            for i in [i0, i1, i2] {
                tan1[i] += sdir;
                tan2[i] += tdir;
            }
        }

        self.tangents = (0..count)
            .map(|i| {
                let n = Vec3::from(self.normals[i]);
                let t = tan1[i];

                let ortho = t - n * n.dot(&t);
                let tangent = ortho.try_normalize(f32::EPSILON).unwrap_or_else(Vec3::zeros);
                let handedness = if n.cross(&t).dot(&tan2[i]) < 0.0 { -1.0 } else { 1.0 };

                [tangent.x, tangent.y, tangent.z, handedness]
            })
            .collect();

        log::debug!("Computed {} tangents", self.tangents.len());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Unit quad in the XY plane facing +Z with UVs matching XY
    fn quad() -> Mesh {
        let mut mesh = Mesh::new();
        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
            mesh.add_vertex(x, y, 0.0);
            mesh.add_normal(0.0, 0.0, 1.0);
            mesh.add_tex_coord(x, y);
        }
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(2, 3, 0);
        mesh
    }

    #[test]
    fn test_append_order() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(1.0, 2.0, 3.0);
        mesh.add_normal(0.0, 1.0, 0.0);
        mesh.add_index(0);

        assert_eq!(mesh.vertices_total(), 1);
        assert_eq!(mesh.vertices(), &[[1.0, 2.0, 3.0]]);
        assert_eq!(mesh.normals(), &[[0.0, 1.0, 0.0]]);
        assert_eq!(mesh.indices(), &[0]);
        assert!(!mesh.has_tex_coords());
    }

    #[test]
    fn test_quad_tangents_follow_u_axis() {
        let mut mesh = quad();
        assert!(mesh.compute_tangents());
        assert_eq!(mesh.tangents().len(), 4);

        for tangent in mesh.tangents() {
            assert_relative_eq!(tangent[0], 1.0, epsilon = 1e-6);
            assert_relative_eq!(tangent[1], 0.0, epsilon = 1e-6);
            assert_relative_eq!(tangent[2], 0.0, epsilon = 1e-6);
            assert_relative_eq!(tangent[3], 1.0);
        }
    }

    #[test]
    fn test_mirrored_uvs_flip_handedness() {
        let mut mesh = Mesh::new();
        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)] {
            mesh.add_vertex(x, y, 0.0);
            mesh.add_normal(0.0, 0.0, 1.0);
            mesh.add_tex_coord(x, 1.0 - y);
        }
        mesh.add_triangle(0, 1, 2);

        assert!(mesh.compute_tangents());
        for tangent in mesh.tangents() {
            assert_relative_eq!(tangent[3], -1.0);
        }
    }

    #[test]
    fn test_tangents_require_tex_coords() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(0.0, 0.0, 0.0);
        mesh.add_normal(0.0, 0.0, 1.0);

        assert!(!mesh.compute_tangents());
        assert!(mesh.tangents().is_empty());
    }

    #[test]
    fn test_out_of_range_triangle_is_skipped() {
        let mut mesh = quad();
        mesh.add_triangle(0, 1, 9);

        assert!(mesh.compute_tangents());
        assert_eq!(mesh.tangents().len(), 4);
    }
}
