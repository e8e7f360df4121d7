//! Planar polygonal mesh.

use nalgebra::Point2;

use crate::{CellLevel, CellTable, Edge, Face, MarkerMap, Vertex};

/// A planar polygonal mesh made of vertices, edges and polygonal faces.
///
/// Each level is stored in its own [`CellTable`]. Cells refer to each other
/// by stored id only: edges name their endpoint vertices, faces name their
/// boundary vertices and edges. Nothing here checks that those references
/// resolve; that is the job of the validator suite.
///
/// The mesh is append-only. Counts are the table lengths, so they always
/// agree with the id sequences.
///
/// # Example
///
/// ```
/// use polymesh_types::{CellLevel, PolygonalMesh, Point2};
///
/// let mut mesh = PolygonalMesh::new();
/// mesh.push_vertex(0, 0, Point2::new(0.0, 0.0));
/// mesh.push_vertex(1, 5, Point2::new(1.0, 0.0));
/// mesh.push_vertex(2, 0, Point2::new(0.0, 1.0));
/// mesh.push_edge(0, 0, 0, 1);
/// mesh.push_edge(1, 0, 1, 2);
/// mesh.push_edge(2, 0, 2, 0);
/// mesh.push_face(0, 0, vec![0, 1, 2], vec![0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.cell_count(CellLevel::Cell2D), 1);
/// assert_eq!(mesh.markers(CellLevel::Cell0D).cells(5), &[1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PolygonalMesh {
    vertices: CellTable<Vertex>,
    edges: CellTable<Edge>,
    faces: CellTable<Face>,
}

impl PolygonalMesh {
    /// Create an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex. Returns its position.
    pub fn push_vertex(&mut self, id: u32, marker: u32, position: Point2<f64>) -> usize {
        self.vertices.push(Vertex::new(id, position), marker)
    }

    /// Append an edge from vertex `origin` to vertex `end`. Returns its position.
    pub fn push_edge(&mut self, id: u32, marker: u32, origin: u32, end: u32) -> usize {
        self.edges.push(Edge::new(id, origin, end), marker)
    }

    /// Append a face with the given boundary. Returns its position.
    pub fn push_face(
        &mut self,
        id: u32,
        marker: u32,
        vertices: Vec<u32>,
        edges: Vec<u32>,
    ) -> usize {
        self.faces.push(Face::new(id, vertices, edges), marker)
    }

    /// Vertex table.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> &CellTable<Vertex> {
        &self.vertices
    }

    /// Edge table.
    #[inline]
    #[must_use]
    pub const fn edges(&self) -> &CellTable<Edge> {
        &self.edges
    }

    /// Face table.
    #[inline]
    #[must_use]
    pub const fn faces(&self) -> &CellTable<Face> {
        &self.faces
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of cells at `level`.
    #[must_use]
    pub fn cell_count(&self, level: CellLevel) -> usize {
        match level {
            CellLevel::Cell0D => self.vertex_count(),
            CellLevel::Cell1D => self.edge_count(),
            CellLevel::Cell2D => self.face_count(),
        }
    }

    /// Markers recorded at `level`.
    #[must_use]
    pub const fn markers(&self, level: CellLevel) -> &MarkerMap {
        match level {
            CellLevel::Cell0D => self.vertices.markers(),
            CellLevel::Cell1D => self.edges.markers(),
            CellLevel::Cell2D => self.faces.markers(),
        }
    }

    /// Whether the mesh has no cells at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty() && self.faces.is_empty()
    }

    /// Position of the vertex with stored id `id`.
    #[must_use]
    pub fn vertex_position(&self, id: u32) -> Option<Point2<f64>> {
        self.vertices.get(id).map(|v| v.position)
    }

    /// Endpoint positions of an edge, if both endpoints resolve.
    #[must_use]
    pub fn edge_segment(&self, edge: &Edge) -> Option<[Point2<f64>; 2]> {
        Some([
            self.vertex_position(edge.origin)?,
            self.vertex_position(edge.end)?,
        ])
    }

    /// Boundary positions of a face, if every boundary vertex resolves.
    #[must_use]
    pub fn face_polygon(&self, face: &Face) -> Option<Vec<Point2<f64>>> {
        face.vertices
            .iter()
            .map(|&id| self.vertex_position(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> PolygonalMesh {
        let mut mesh = PolygonalMesh::new();
        mesh.push_vertex(10, 0, Point2::new(0.0, 0.0));
        mesh.push_vertex(11, 0, Point2::new(1.0, 0.0));
        mesh.push_vertex(12, 0, Point2::new(0.0, 1.0));
        mesh.push_edge(20, 1, 10, 11);
        mesh.push_edge(21, 1, 11, 12);
        mesh.push_edge(22, 0, 12, 10);
        mesh.push_face(30, 0, vec![10, 11, 12], vec![20, 21, 22]);
        mesh
    }

    #[test]
    fn counts_follow_tables() {
        let mesh = triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.edge_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        for level in CellLevel::ALL {
            assert!(mesh.cell_count(level) > 0);
        }
        assert!(!mesh.is_empty());
        assert!(PolygonalMesh::new().is_empty());
    }

    #[test]
    fn markers_per_level() {
        let mesh = triangle();
        assert!(mesh.markers(CellLevel::Cell0D).is_empty());
        assert_eq!(mesh.markers(CellLevel::Cell1D).cells(1), &[20, 21]);
        assert!(mesh.markers(CellLevel::Cell2D).is_empty());
    }

    #[test]
    fn resolves_geometry_by_id() {
        let mesh = triangle();
        let edge = mesh.edges().get(21).copied();
        let segment = edge.and_then(|e| mesh.edge_segment(&e));
        assert_eq!(
            segment,
            Some([Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)])
        );

        let polygon = mesh.faces().get(30).and_then(|f| mesh.face_polygon(f));
        assert_eq!(polygon.map(|p| p.len()), Some(3));
    }

    #[test]
    fn unresolved_vertex_yields_none() {
        let mut mesh = triangle();
        mesh.push_edge(23, 0, 10, 99);
        let edge = mesh.edges().get(23).copied();
        assert!(edge.and_then(|e| mesh.edge_segment(&e)).is_none());
        assert!(mesh.vertex_position(99).is_none());
    }
}
