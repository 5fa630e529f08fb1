use bytemuck::{Pod, Zeroable};
use cubespace_common::Direction;
use cubespace_layout::{CubeLayout, Cubelet};

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct FaceVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct EdgeVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Corner offsets (in half-extent units) of the quad for each face, wound
/// counter-clockwise seen from outside the cubelet.
#[rustfmt::skip]
fn face_corners(dir: Direction) -> [[f32; 3]; 4] {
    match dir {
        Direction::PosX => [[ 1., -1.,  1.], [ 1., -1., -1.], [ 1.,  1., -1.], [ 1.,  1.,  1.]],
        Direction::NegX => [[-1., -1., -1.], [-1., -1.,  1.], [-1.,  1.,  1.], [-1.,  1., -1.]],
        Direction::PosY => [[-1.,  1.,  1.], [ 1.,  1.,  1.], [ 1.,  1., -1.], [-1.,  1., -1.]],
        Direction::NegY => [[-1., -1., -1.], [ 1., -1., -1.], [ 1., -1.,  1.], [-1., -1.,  1.]],
        Direction::PosZ => [[-1., -1.,  1.], [ 1., -1.,  1.], [ 1.,  1.,  1.], [-1.,  1.,  1.]],
        Direction::NegZ => [[ 1., -1., -1.], [-1., -1., -1.], [-1.,  1., -1.], [ 1.,  1., -1.]],
    }
}

/// Corner `i` of a cubelet in half-extent units; bit 0 → x, bit 1 → y,
/// bit 2 → z.
fn box_corner(i: usize) -> [f32; 3] {
    [
        if i & 1 == 0 { -1.0 } else { 1.0 },
        if i & 2 == 0 { -1.0 } else { 1.0 },
        if i & 4 == 0 { -1.0 } else { 1.0 },
    ]
}

/// The 12 box edges as corner-index pairs (corners differing in one bit).
#[rustfmt::skip]
const BOX_EDGES: [[usize; 2]; 12] = [
    [0, 1], [2, 3], [4, 5], [6, 7], // along x
    [0, 2], [1, 3], [4, 6], [5, 7], // along y
    [0, 4], [1, 5], [2, 6], [3, 7], // along z
];

const EDGE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

fn vertex_at(cubelet: &Cubelet, offset: [f32; 3]) -> [f32; 3] {
    let half = cubelet.size / 2.0;
    [
        cubelet.position.x + offset[0] * half,
        cubelet.position.y + offset[1] * half,
        cubelet.position.z + offset[2] * half,
    ]
}

/// Build the colored-face geometry for a whole layout: 24 vertices and
/// 36 indices per cubelet, each quad colored from the cubelet material list.
pub fn face_mesh(layout: &CubeLayout) -> (Vec<FaceVertex>, Vec<u16>) {
    let mut vertices = Vec::with_capacity(layout.cubelets().len() * 24);
    let mut indices = Vec::with_capacity(layout.cubelets().len() * 36);

    for cubelet in layout.cubelets() {
        for dir in Direction::ORDER {
            let color = cubelet.material(dir).rgba_f32();
            let normal = dir.unit().to_array();
            let base = vertices.len() as u16;
            for offset in face_corners(dir) {
                vertices.push(FaceVertex {
                    position: vertex_at(cubelet, offset),
                    normal,
                    color,
                });
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        }
    }

    (vertices, indices)
}

/// Build the wireframe line list for a whole layout: the 12 edges of every
/// cubelet, drawn black.
pub fn edge_mesh(layout: &CubeLayout) -> Vec<EdgeVertex> {
    let mut vertices = Vec::with_capacity(layout.cubelets().len() * 24);

    for cubelet in layout.cubelets() {
        for [a, b] in BOX_EDGES {
            for corner in [a, b] {
                vertices.push(EdgeVertex {
                    position: vertex_at(cubelet, box_corner(corner)),
                    color: EDGE_COLOR,
                });
            }
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubespace_common::{Color, GridCoord};
    use cubespace_layout::{ColorScheme, FaceletString, LayoutParams};

    fn solved_layout() -> CubeLayout {
        CubeLayout::build(
            &FaceletString::solved(),
            &ColorScheme::classic(),
            &LayoutParams::default(),
        )
        .unwrap()
    }

    #[test]
    fn face_mesh_counts() {
        let (vertices, indices) = face_mesh(&solved_layout());
        assert_eq!(vertices.len(), 27 * 24);
        assert_eq!(indices.len(), 27 * 36);
        assert!(vertices.len() <= u16::MAX as usize);
    }

    #[test]
    fn edge_mesh_counts() {
        let vertices = edge_mesh(&solved_layout());
        assert_eq!(vertices.len(), 27 * 24);
        assert!(vertices.iter().all(|v| v.color == EDGE_COLOR));
    }

    #[test]
    fn face_quads_carry_material_colors() {
        let layout = solved_layout();
        let (vertices, _) = face_mesh(&layout);
        // First cubelet in enumeration order is (0,0,0); its first quad is
        // the +x face, which is interior there and must show the filler.
        let first = layout.get(GridCoord::new(0, 0, 0));
        assert_eq!(vertices[0].color, Color::WHITE.rgba_f32());
        // Its -x face (second quad) is the L sticker: classic green.
        assert_eq!(vertices[4].color, first.material(Direction::NegX).rgba_f32());
        assert_eq!(vertices[4].color, Color::GREEN.rgba_f32());
    }

    #[test]
    fn face_normals_are_outward_units() {
        let (vertices, _) = face_mesh(&solved_layout());
        for v in &vertices {
            let len: f32 = v.normal.iter().map(|c| c * c).sum::<f32>().sqrt();
            assert!((len - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn geometry_stays_inside_cube_bounds() {
        let layout = solved_layout();
        let params = layout.params();
        let (vertices, _) = face_mesh(&layout);
        let hi = 2.0 * (params.cubelet_size() + params.spacing()) + params.cubelet_size() / 2.0;
        let lo = -params.cubelet_size() / 2.0;
        for v in &vertices {
            for c in v.position {
                assert!(c >= lo - 1e-5 && c <= hi + 1e-5);
            }
        }
    }
}
