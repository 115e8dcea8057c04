//! Wavefront OBJ export for inspecting generated terrain in external tools.

use std::io::{self, Write};

use crate::mesh_buffers::MeshBuffers;

/// Render the populated part of `mesh` as OBJ with positions, UVs and normals.
///
/// Slack vertex slots are omitted; indices never reference them.
pub fn export_obj(mesh: &MeshBuffers) -> String {
    let mut obj = String::new();

    obj.push_str("# Atoll terrain mesh\n");
    obj.push_str(&format!(
        "# {} vertices, {} triangles\n\n",
        mesh.vertex_count(),
        mesh.triangle_count()
    ));

    for v in mesh.populated_vertices() {
        obj.push_str(&format!("v {} {} {}\n", v.x, v.y, v.z));
    }
    obj.push('\n');

    for uv in mesh.populated_uvs() {
        obj.push_str(&format!("vt {} {}\n", uv.x, uv.y));
    }
    obj.push('\n');

    for n in mesh.vertex_normals() {
        obj.push_str(&format!("vn {} {} {}\n", n.x, n.y, n.z));
    }
    obj.push('\n');

    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        obj.push_str(&format!("f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}\n"));
    }

    obj
}

/// Write the OBJ rendering of `mesh` to `out`.
pub fn write_obj<W: Write>(mesh: &MeshBuffers, out: &mut W) -> io::Result<()> {
    out.write_all(export_obj(mesh).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lod_grid::LodGrid;
    use crate::tessellator::MeshTessellator;

    #[test]
    fn test_export_obj_counts() {
        let grid = LodGrid::new(3, 0).unwrap();
        let mesh = MeshTessellator::new(grid).tessellate(&|x: u32, _: u32| x as f32);
        let obj = export_obj(&mesh);

        assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 9);
        assert_eq!(obj.lines().filter(|l| l.starts_with("vt ")).count(), 9);
        assert_eq!(obj.lines().filter(|l| l.starts_with("vn ")).count(), 9);
        assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), 8);
    }

    #[test]
    fn test_faces_are_one_based() {
        let grid = LodGrid::new(2, 0).unwrap();
        let mesh = MeshTessellator::new(grid).tessellate(&|_: u32, _: u32| 0.0_f32);
        let obj = export_obj(&mesh);
        assert!(obj.contains("f 1/1/1 3/3/3 2/2/2"));
        assert!(!obj.contains(" 0/"));
    }

    #[test]
    fn test_write_obj_matches_export() {
        let grid = LodGrid::new(5, 1).unwrap();
        let mesh = MeshTessellator::new(grid).tessellate(&|x: u32, z: u32| (x + z) as f32);

        let mut buf = Vec::new();
        write_obj(&mesh, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), export_obj(&mesh));
    }
}
