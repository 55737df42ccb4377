//! Mesh conversion

use crate::foundation::math::negate_axes;
use crate::host::{HostMesh, UvLayer};
use crate::viewer::Mesh;

/// Convert a host mesh into a viewer mesh
///
/// Positions and normals are negated on every axis, in local space.
/// Triangles keep their winding. With an active UV layer, one texture
/// coordinate per vertex is emitted (see [`vertex_uvs`]) and tangents are
/// computed on the result.
pub fn convert_mesh(mesh: &HostMesh) -> Mesh {
    let mut out = Mesh::new();

    for vertex in &mesh.vertices {
        let [x, y, z] = negate_axes(&vertex.co);
        out.add_vertex(x, y, z);

        let [nx, ny, nz] = negate_axes(&vertex.normal);
        out.add_normal(nx, ny, nz);
    }

    for triangle in &mesh.loop_triangles {
        let [a, b, c] = triangle.vertices;
        out.add_triangle(a, b, c);
    }

    if let Some(layer) = mesh.active_uv_layer() {
        for [u, v] in vertex_uvs(mesh, layer) {
            out.add_tex_coord(u, v);
        }
        out.compute_tangents();
    }

    log::debug!(
        "Converted mesh '{}': {} vertices, {} triangles, uvs: {}",
        mesh.name,
        out.vertices_total(),
        mesh.loop_triangles.len(),
        out.has_tex_coords()
    );
    out
}

/// Resolve per-corner UVs into one UV per vertex, in vertex order
///
/// Each vertex takes the UV stored on the loop of the first triangle corner
/// that uses it. Vertices no triangle uses, or whose loop falls outside the
/// layer, get `[0.0, 0.0]`.
pub fn vertex_uvs(mesh: &HostMesh, layer: &UvLayer) -> Vec<[f32; 2]> {
    let mut uvs: Vec<Option<[f32; 2]>> = vec![None; mesh.vertices.len()];

    for triangle in &mesh.loop_triangles {
        for (vertex, loop_index) in triangle.corners() {
            if let Some(slot) = uvs.get_mut(vertex as usize) {
                if slot.is_none() {
                    *slot = layer.uv(loop_index);
                }
            }
        }
    }

    let missing = uvs.iter().filter(|uv| uv.is_none()).count();
    if missing > 0 {
        log::debug!("Mesh '{}': {} vertices without a UV in '{}'", mesh.name, missing, layer.name);
    }

    uvs.into_iter().map(|uv| uv.unwrap_or([0.0, 0.0])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Mat4, Vec3};
    use crate::host::LoopTriangle;

    /// Quad split into two triangles whose loops are *not* in vertex order
    fn quad_with_uvs() -> HostMesh {
        let mut mesh = HostMesh::new("Quad");
        mesh.add_vertex(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        mesh.add_vertex(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        mesh.add_vertex(Vec3::new(1.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        mesh.add_vertex(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0));

        // Face loops start at vertex 2: loops 0..3 -> vertices 2, 3, 0, 1
        mesh.add_triangle(LoopTriangle::new([2, 3, 0], [0, 1, 2]));
        mesh.add_triangle(LoopTriangle::new([2, 0, 1], [0, 2, 3]));
        mesh.add_active_uv_layer(UvLayer::new(
            "UVMap",
            vec![[1.0, 1.0], [0.0, 1.0], [0.0, 0.0], [1.0, 0.0]],
        ));
        mesh
    }

    #[test]
    fn test_positions_and_normals_are_negated() {
        let mut mesh = HostMesh::new("Points");
        mesh.add_vertex(Vec3::new(1.0, -2.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        mesh.add_vertex(Vec3::new(0.5, 0.25, -3.75), Vec3::new(-1.0, 0.0, 0.0));

        let out = convert_mesh(&mesh);

        assert_eq!(out.vertices(), &[[-1.0, 2.0, -0.0], [-0.5, -0.25, 3.75]]);
        assert_eq!(out.normals(), &[[-0.0, -0.0, -1.0], [1.0, -0.0, -0.0]]);
    }

    #[test]
    fn test_world_matrix_is_not_applied() {
        let mut mesh = HostMesh::new("Moved");
        mesh.matrix_world = Mat4::new_translation(&Vec3::new(10.0, 10.0, 10.0));
        mesh.add_vertex(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 1.0, 0.0));

        let out = convert_mesh(&mesh);
        assert_eq!(out.vertices(), &[[-1.0, -2.0, -3.0]]);
    }

    #[test]
    fn test_triangle_indices_keep_winding() {
        let mut mesh = HostMesh::new("Tri");
        for _ in 0..3 {
            mesh.add_vertex(Vec3::zeros(), Vec3::z());
        }
        mesh.add_triangle(LoopTriangle::new([2, 0, 1], [0, 1, 2]));

        let out = convert_mesh(&mesh);
        assert_eq!(out.indices(), &[2, 0, 1]);
    }

    #[test]
    fn test_no_uv_layer_means_no_tex_coords() {
        let mut mesh = quad_with_uvs();
        mesh.active_uv_index = None;

        let out = convert_mesh(&mesh);
        assert!(out.tex_coords().is_empty());
        assert!(out.tangents().is_empty());
    }

    #[test]
    fn test_one_uv_per_vertex_from_its_corner() {
        let out = convert_mesh(&quad_with_uvs());

        assert_eq!(out.tex_coords().len(), out.vertices_total());
        assert_eq!(
            out.tex_coords(),
            &[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]
        );
        assert_eq!(out.tangents().len(), 4);
    }

    #[test]
    fn test_unreferenced_vertex_gets_zero_uv() {
        let mut mesh = quad_with_uvs();
        mesh.add_vertex(Vec3::new(5.0, 5.0, 0.0), Vec3::z());

        let uvs = vertex_uvs(&mesh, mesh.active_uv_layer().unwrap());
        assert_eq!(uvs.len(), 5);
        assert_eq!(uvs[4], [0.0, 0.0]);
    }

    #[test]
    fn test_short_uv_layer_does_not_panic() {
        let mut mesh = quad_with_uvs();
        mesh.uv_layers[0].data.truncate(1);

        let out = convert_mesh(&mesh);
        assert_eq!(out.tex_coords().len(), 4);
        assert_eq!(out.tex_coords()[2], [1.0, 1.0]);
        assert_eq!(out.tex_coords()[0], [0.0, 0.0]);
    }
}
