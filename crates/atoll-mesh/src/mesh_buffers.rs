//! Terrain mesh output: positions, UVs and a triangle index list.

use glam::{Vec2, Vec3};

/// The mesh output of a tessellation pass.
///
/// `vertices` and `uvs` are index-aligned and sized to the LOD grid's
/// allocation, which keeps one slack row and column beyond the populated
/// `vertices_per_line²` prefix. Slack slots stay zeroed and are never
/// referenced by `indices`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions `(x, height, z)`.
    pub vertices: Vec<Vec3>,
    /// Texture coordinates in `[0, 1]²`, one per vertex slot.
    pub uvs: Vec<Vec2>,
    /// Index buffer (triangles, 3 indices per triangle).
    pub indices: Vec<u32>,
    populated: usize,
}

impl MeshBuffers {
    /// Creates zeroed buffers with `slots` vertex/UV entries and nothing populated.
    pub fn with_slots(slots: usize, index_capacity: usize) -> Self {
        Self {
            vertices: vec![Vec3::ZERO; slots],
            uvs: vec![Vec2::ZERO; slots],
            indices: Vec::with_capacity(index_capacity),
            populated: 0,
        }
    }

    /// Writes the next populated vertex. Vertices fill slots in order.
    ///
    /// # Panics
    ///
    /// Panics if every slot is already populated.
    pub fn push_vertex(&mut self, position: Vec3, uv: Vec2) {
        self.vertices[self.populated] = position;
        self.uvs[self.populated] = uv;
        self.populated += 1;
    }

    /// Appends one triangle.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Number of vertex slots actually written by tessellation.
    pub fn vertex_count(&self) -> usize {
        self.populated
    }

    /// Number of allocated vertex slots, slack included.
    pub fn allocated_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles in the index buffer.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// The populated vertex prefix.
    pub fn populated_vertices(&self) -> &[Vec3] {
        &self.vertices[..self.populated]
    }

    /// The populated UV prefix.
    pub fn populated_uvs(&self) -> &[Vec2] {
        &self.uvs[..self.populated]
    }

    /// Minimum and maximum populated height, or `None` for an empty mesh.
    pub fn height_range(&self) -> Option<(f32, f32)> {
        let mut iter = self.populated_vertices().iter().map(|v| v.y);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    /// Checks the buffer invariants: aligned UVs, in-range indices, whole
    /// triangles, and three distinct corners per triangle.
    pub fn is_consistent(&self) -> bool {
        if self.vertices.len() != self.uvs.len() || self.indices.len() % 3 != 0 {
            return false;
        }
        let len = self.vertices.len();
        self.triangles().all(|[a, b, c]| {
            (a as usize) < len && (b as usize) < len && (c as usize) < len
                && a != b
                && b != c
                && a != c
        })
    }

    /// Area-weighted per-vertex normals for the populated vertices.
    ///
    /// Triangles wind clockwise seen from above (left-handed, +Y up), so
    /// `(b - a) × (c - a)` points up for a flat grid.
    pub fn vertex_normals(&self) -> Vec<Vec3> {
        let mut normals = vec![Vec3::ZERO; self.populated];
        for [a, b, c] in self.triangles() {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            let pa = self.vertices[a];
            let face = (self.vertices[b] - pa).cross(self.vertices[c] - pa);
            for i in [a, b, c] {
                if let Some(n) = normals.get_mut(i) {
                    *n += face;
                }
            }
        }
        normals.into_iter().map(|n| n.normalize_or_zero()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> MeshBuffers {
        let mut mesh = MeshBuffers::with_slots(9, 6);
        mesh.push_vertex(Vec3::new(0.0, 0.0, 0.0), Vec2::new(0.0, 0.0));
        mesh.push_vertex(Vec3::new(1.0, 0.0, 0.0), Vec2::new(1.0, 0.0));
        mesh.push_vertex(Vec3::new(0.0, 0.0, 1.0), Vec2::new(0.0, 1.0));
        mesh.push_vertex(Vec3::new(1.0, 2.0, 1.0), Vec2::new(1.0, 1.0));
        mesh.push_triangle(0, 2, 1);
        mesh.push_triangle(1, 2, 3);
        mesh
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = MeshBuffers::default();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.height_range(), None);
        assert!(mesh.is_consistent());
    }

    #[test]
    fn test_slots_versus_populated() {
        let mesh = quad();
        assert_eq!(mesh.allocated_vertices(), 9);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.populated_vertices().len(), 4);
        assert_eq!(mesh.populated_uvs().len(), 4);
        assert_eq!(mesh.vertices[8], Vec3::ZERO);
    }

    #[test]
    fn test_triangles_iterator() {
        let mesh = quad();
        let tris: Vec<[u32; 3]> = mesh.triangles().collect();
        assert_eq!(tris, vec![[0, 2, 1], [1, 2, 3]]);
    }

    #[test]
    fn test_height_range() {
        assert_eq!(quad().height_range(), Some((0.0, 2.0)));
    }

    #[test]
    fn test_consistency_detects_bad_index() {
        let mut mesh = quad();
        mesh.push_triangle(0, 1, 99);
        assert!(!mesh.is_consistent());
    }

    #[test]
    fn test_consistency_detects_degenerate_triangle() {
        let mut mesh = quad();
        mesh.push_triangle(2, 2, 3);
        assert!(!mesh.is_consistent());
    }

    #[test]
    fn test_flat_normals_point_up() {
        let mut mesh = MeshBuffers::with_slots(4, 6);
        mesh.push_vertex(Vec3::new(0.0, 0.0, 0.0), Vec2::ZERO);
        mesh.push_vertex(Vec3::new(1.0, 0.0, 0.0), Vec2::ZERO);
        mesh.push_vertex(Vec3::new(0.0, 0.0, 1.0), Vec2::ZERO);
        mesh.push_vertex(Vec3::new(1.0, 0.0, 1.0), Vec2::ZERO);
        mesh.push_triangle(0, 2, 1);
        mesh.push_triangle(1, 2, 3);
        for n in mesh.vertex_normals() {
            assert!((n - Vec3::Y).length() < 1e-6, "normal {n} is not +Y");
        }
    }
}
