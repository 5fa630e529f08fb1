use crate::{ColorScheme, FaceletString, LayoutError};
use cubespace_common::{Color, Direction, Face, GridCoord};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Geometry parameters for assembling the 27 cubelets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Total edge length of the assembled cube in world units.
    pub cube_size: f32,
    /// Fraction of one cubelet's size used as the gap between cubelets,
    /// in [0, 1).
    pub spacing_fraction: f32,
    /// Translation applied uniformly to all cubelets. With a zero origin the
    /// (0,0,0) cubelet is centered on the world origin.
    pub origin: Vec3,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            cube_size: 2.0,
            spacing_fraction: 0.0,
            origin: Vec3::ZERO,
        }
    }
}

impl LayoutParams {
    /// Gap between adjacent cubelets.
    pub fn spacing(&self) -> f32 {
        (self.cube_size / 3.0) * self.spacing_fraction
    }

    /// Edge length of one cubelet.
    pub fn cubelet_size(&self) -> f32 {
        (self.cube_size - 3.0 * self.spacing()) / 3.0
    }

    /// Center of the assembled cube; the natural camera look-at target.
    pub fn center(&self) -> Vec3 {
        Vec3::splat(self.cubelet_size() + self.spacing()) + self.origin
    }
}

/// Classification of a cubelet by how many faces it shows on the assembled
/// cube's exterior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// Shows three faces.
    Corner,
    /// Shows two faces.
    Edge,
    /// Shows one face.
    Center,
    /// The hidden middle piece; shows nothing.
    Interior,
}

impl PieceKind {
    fn classify(exposed: usize) -> Self {
        match exposed {
            3 => PieceKind::Corner,
            2 => PieceKind::Edge,
            1 => PieceKind::Center,
            0 => PieceKind::Interior,
            n => unreachable!("a cubelet exposes at most three faces, got {n}"),
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PieceKind::Corner => "corner",
            PieceKind::Edge => "edge",
            PieceKind::Center => "center",
            PieceKind::Interior => "interior",
        };
        f.write_str(s)
    }
}

/// One of the 27 small cubes composing the puzzle.
///
/// `stickers` holds the exterior colors by `Direction::ORDER` slot, `None`
/// where the slot faces the cube interior. `materials` is the same list with
/// the scheme's filler substituted, ready for a renderer that expects a
/// complete six-entry list. `kind` is classified from the sticker slots
/// before filler substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cubelet {
    pub coord: GridCoord,
    /// Center of this cubelet in world units.
    pub position: Vec3,
    /// Edge length of this cubelet in world units.
    pub size: f32,
    pub stickers: [Option<Color>; 6],
    pub materials: [Color; 6],
    pub kind: PieceKind,
}

impl Cubelet {
    /// Sticker color on the given outward direction, `None` if that slot
    /// faces the interior.
    pub fn sticker(&self, dir: Direction) -> Option<Color> {
        self.stickers[dir.index()]
    }

    /// Material color on the given outward direction (filler where interior).
    pub fn material(&self, dir: Direction) -> Color {
        self.materials[dir.index()]
    }

    /// Number of exterior faces this cubelet shows.
    pub fn exposed_faces(&self) -> usize {
        self.stickers.iter().filter(|s| s.is_some()).count()
    }
}

/// The face whose sticker occupies `dir` on the cubelet at `coord`, if that
/// slot is on the cube's exterior.
///
/// Axis rules: x=0 touches L, x=2 touches R, y=0 touches D, y=2 touches U,
/// z=0 touches B, z=2 touches F.
fn exposed_face(coord: GridCoord, dir: Direction) -> Option<Face> {
    match dir {
        Direction::PosX if coord.x == 2 => Some(Face::R),
        Direction::NegX if coord.x == 0 => Some(Face::L),
        Direction::PosY if coord.y == 2 => Some(Face::U),
        Direction::NegY if coord.y == 0 => Some(Face::D),
        Direction::PosZ if coord.z == 2 => Some(Face::F),
        Direction::NegZ if coord.z == 0 => Some(Face::B),
        _ => None,
    }
}

/// Row-major sticker index (0..9) on `face` for the cubelet at `coord`.
///
/// Each axis pair shares one table: U/D read rows from z and columns from x,
/// F/B read rows from the inverted y and columns from x, L/R read rows from
/// the inverted y and columns from z.
fn facelet_index(face: Face, coord: GridCoord) -> usize {
    let (x, y, z) = (coord.x as usize, coord.y as usize, coord.z as usize);
    let (row, col) = match face {
        Face::U | Face::D => (z, x),
        Face::F | Face::B => (2 - y, x),
        Face::L | Face::R => (2 - y, z),
    };
    row * 3 + col
}

/// The full set of 27 cubelet descriptors computed from one facelet string.
///
/// Built once and immutable thereafter; renderers borrow color and position
/// data from it but never write back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeLayout {
    cubelets: Vec<Cubelet>,
    params: LayoutParams,
}

impl CubeLayout {
    /// Map a facelet string to 27 cubelet descriptors.
    ///
    /// Fails with [`LayoutError::UnmappedSymbol`] on the first symbol the
    /// scheme cannot resolve; no partial layout is returned.
    pub fn build(
        facelets: &FaceletString,
        scheme: &ColorScheme,
        params: &LayoutParams,
    ) -> Result<Self, LayoutError> {
        let size = params.cubelet_size();
        let step = size + params.spacing();
        let mut cubelets = Vec::with_capacity(27);

        for coord in GridCoord::enumerate() {
            let mut stickers = [None; 6];
            for dir in Direction::ORDER {
                let Some(face) = exposed_face(coord, dir) else {
                    continue;
                };
                let symbol = facelets.symbol_at(face, facelet_index(face, coord));
                let color = scheme
                    .color(symbol)
                    .ok_or(LayoutError::UnmappedSymbol { symbol, face })?;
                stickers[dir.index()] = Some(color);
            }

            let kind = PieceKind::classify(stickers.iter().filter(|s| s.is_some()).count());
            let mut materials = [scheme.filler(); 6];
            for (slot, sticker) in materials.iter_mut().zip(stickers) {
                if let Some(color) = sticker {
                    *slot = color;
                }
            }

            cubelets.push(Cubelet {
                coord,
                position: coord.as_vec3() * step + params.origin,
                size,
                stickers,
                materials,
                kind,
            });
        }

        tracing::debug!(
            cube_size = params.cube_size,
            spacing = params.spacing(),
            "built cube layout"
        );
        Ok(Self {
            cubelets,
            params: *params,
        })
    }

    /// All 27 cubelets in enumeration order (x outer, y middle, z inner).
    pub fn cubelets(&self) -> &[Cubelet] {
        &self.cubelets
    }

    /// The cubelet at a grid coordinate.
    pub fn get(&self, coord: GridCoord) -> &Cubelet {
        &self.cubelets[coord.ordinal()]
    }

    /// The parameters this layout was built with.
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Center of the assembled cube in world units.
    pub fn center(&self) -> Vec3 {
        self.params.center()
    }

    /// Number of cubelets of the given kind.
    pub fn count_of(&self, kind: PieceKind) -> usize {
        self.cubelets.iter().filter(|c| c.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved_layout() -> CubeLayout {
        CubeLayout::build(
            &FaceletString::solved(),
            &ColorScheme::classic(),
            &LayoutParams::default(),
        )
        .unwrap()
    }

    fn approx(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "{a} != {b}");
    }

    #[test]
    fn solved_cube_piece_census() {
        let layout = solved_layout();
        assert_eq!(layout.cubelets().len(), 27);
        assert_eq!(layout.count_of(PieceKind::Corner), 8);
        assert_eq!(layout.count_of(PieceKind::Edge), 12);
        assert_eq!(layout.count_of(PieceKind::Center), 6);
        assert_eq!(layout.count_of(PieceKind::Interior), 1);
    }

    #[test]
    fn middle_cubelet_is_interior() {
        let layout = solved_layout();
        let middle = layout.get(GridCoord::new(1, 1, 1));
        assert_eq!(middle.kind, PieceKind::Interior);
        assert_eq!(middle.exposed_faces(), 0);
        // Interior slots still carry a complete material list (all filler).
        assert_eq!(middle.materials, [Color::WHITE; 6]);
    }

    #[test]
    fn face_centers_show_their_face_color() {
        let layout = solved_layout();
        let cases = [
            (GridCoord::new(1, 2, 1), Direction::PosY, Color::WHITE),
            (GridCoord::new(1, 0, 1), Direction::NegY, Color::YELLOW),
            (GridCoord::new(1, 1, 2), Direction::PosZ, Color::RED),
            (GridCoord::new(1, 1, 0), Direction::NegZ, Color::ORANGE),
            (GridCoord::new(0, 1, 1), Direction::NegX, Color::GREEN),
            (GridCoord::new(2, 1, 1), Direction::PosX, Color::BLUE),
        ];
        for (coord, dir, color) in cases {
            let cubelet = layout.get(coord);
            assert_eq!(cubelet.kind, PieceKind::Center);
            assert_eq!(cubelet.sticker(dir), Some(color), "center at {coord:?}");
        }
    }

    #[test]
    fn solved_cube_full_sticker_audit() {
        // On a solved cube every exterior slot shows the color of the face
        // it sits on, and every interior slot is empty.
        let layout = solved_layout();
        let scheme = ColorScheme::classic();
        for cubelet in layout.cubelets() {
            for dir in Direction::ORDER {
                match exposed_face(cubelet.coord, dir) {
                    Some(face) => assert_eq!(
                        cubelet.sticker(dir),
                        scheme.color(face.symbol()),
                        "cubelet {:?} dir {dir:?}",
                        cubelet.coord
                    ),
                    None => assert_eq!(cubelet.sticker(dir), None),
                }
            }
        }
    }

    // The next four tests pin the exact index tables using a face of nine
    // distinct symbols. Sticker 0 is the top-left of each face in the net
    // diagram; see the FaceletString docs.

    fn marked_string(face: Face) -> (FaceletString, ColorScheme) {
        let mut raw = String::new();
        for f in Face::ORDER {
            raw.push_str(if f == face { "abcdefghi" } else { "XXXXXXXXX" });
        }
        let mut pairs: Vec<(char, Color)> = ('a'..='i')
            .enumerate()
            .map(|(i, c)| (c, Color(i as u32)))
            .collect();
        pairs.push(('X', Color(0xff)));
        (
            FaceletString::parse(&raw).unwrap(),
            ColorScheme::new(pairs, Color::WHITE),
        )
    }

    #[test]
    fn up_face_index_table() {
        // U: row from z, column from x.
        let (facelets, scheme) = marked_string(Face::U);
        let layout = CubeLayout::build(&facelets, &scheme, &LayoutParams::default()).unwrap();
        let sticker = |x, z| {
            layout
                .get(GridCoord::new(x, 2, z))
                .sticker(Direction::PosY)
                .unwrap()
        };
        assert_eq!(sticker(0, 0), Color(0)); // 'a' top-left
        assert_eq!(sticker(2, 0), Color(2)); // 'c'
        assert_eq!(sticker(1, 1), Color(4)); // 'e' center
        assert_eq!(sticker(0, 2), Color(6)); // 'g'
        assert_eq!(sticker(2, 2), Color(8)); // 'i' bottom-right
    }

    #[test]
    fn front_face_index_table() {
        // F: row from inverted y, column from x.
        let (facelets, scheme) = marked_string(Face::F);
        let layout = CubeLayout::build(&facelets, &scheme, &LayoutParams::default()).unwrap();
        let sticker = |x, y| {
            layout
                .get(GridCoord::new(x, y, 2))
                .sticker(Direction::PosZ)
                .unwrap()
        };
        assert_eq!(sticker(0, 2), Color(0)); // 'a' top-left
        assert_eq!(sticker(2, 2), Color(2)); // 'c'
        assert_eq!(sticker(0, 0), Color(6)); // 'g' bottom-left
        assert_eq!(sticker(2, 0), Color(8)); // 'i'
    }

    #[test]
    fn back_face_shares_the_front_table() {
        // The reference maps B through the same table as F.
        let (facelets, scheme) = marked_string(Face::B);
        let layout = CubeLayout::build(&facelets, &scheme, &LayoutParams::default()).unwrap();
        let sticker = |x, y| {
            layout
                .get(GridCoord::new(x, y, 0))
                .sticker(Direction::NegZ)
                .unwrap()
        };
        assert_eq!(sticker(0, 2), Color(0));
        assert_eq!(sticker(1, 1), Color(4));
        assert_eq!(sticker(2, 0), Color(8));
    }

    #[test]
    fn side_face_index_tables() {
        // L and R: row from inverted y, column from z.
        let (facelets, scheme) = marked_string(Face::L);
        let layout = CubeLayout::build(&facelets, &scheme, &LayoutParams::default()).unwrap();
        let sticker = |y, z| {
            layout
                .get(GridCoord::new(0, y, z))
                .sticker(Direction::NegX)
                .unwrap()
        };
        assert_eq!(sticker(2, 0), Color(0)); // 'a'
        assert_eq!(sticker(2, 2), Color(2)); // 'c'
        assert_eq!(sticker(0, 1), Color(7)); // 'h'

        let (facelets, scheme) = marked_string(Face::R);
        let layout = CubeLayout::build(&facelets, &scheme, &LayoutParams::default()).unwrap();
        let sticker = |y, z| {
            layout
                .get(GridCoord::new(2, y, z))
                .sticker(Direction::PosX)
                .unwrap()
        };
        assert_eq!(sticker(2, 0), Color(0));
        assert_eq!(sticker(1, 1), Color(4));
        assert_eq!(sticker(0, 2), Color(8));
    }

    #[test]
    fn build_is_idempotent() {
        let a = solved_layout();
        let b = solved_layout();
        assert_eq!(a, b);
        let coords_a: Vec<GridCoord> = a.cubelets().iter().map(|c| c.coord).collect();
        let coords_b: Vec<GridCoord> = b.cubelets().iter().map(|c| c.coord).collect();
        assert_eq!(coords_a, coords_b);
    }

    #[test]
    fn enumeration_order_is_x_outer_z_inner() {
        let layout = solved_layout();
        assert_eq!(layout.cubelets()[0].coord, GridCoord::new(0, 0, 0));
        assert_eq!(layout.cubelets()[1].coord, GridCoord::new(0, 0, 1));
        assert_eq!(layout.cubelets()[3].coord, GridCoord::new(0, 1, 0));
        assert_eq!(layout.cubelets()[9].coord, GridCoord::new(1, 0, 0));
        assert_eq!(layout.cubelets()[26].coord, GridCoord::new(2, 2, 2));
    }

    #[test]
    fn position_law_without_spacing() {
        let layout = solved_layout();
        let step = layout.params().cubelet_size();
        for a in layout.cubelets() {
            if a.coord.x < 2 {
                let b = layout.get(GridCoord::new(a.coord.x + 1, a.coord.y, a.coord.z));
                approx(b.position.x - a.position.x, step);
                approx(b.position.y, a.position.y);
                approx(b.position.z, a.position.z);
            }
        }
    }

    #[test]
    fn position_law_with_spacing() {
        let params = LayoutParams {
            spacing_fraction: 0.3,
            ..LayoutParams::default()
        };
        let layout =
            CubeLayout::build(&FaceletString::solved(), &ColorScheme::classic(), &params)
                .unwrap();
        let step = params.cubelet_size() + params.spacing();
        let a = layout.get(GridCoord::new(0, 0, 0));
        let b = layout.get(GridCoord::new(0, 1, 0));
        approx(b.position.y - a.position.y, step);
        assert!(params.spacing() > 0.0);
    }

    #[test]
    fn zero_spacing_spans_exactly_cube_size() {
        let params = LayoutParams::default();
        let layout =
            CubeLayout::build(&FaceletString::solved(), &ColorScheme::classic(), &params)
                .unwrap();
        approx(params.spacing(), 0.0);
        approx(params.cubelet_size() * 3.0, params.cube_size);
        // Edge-to-edge extent along x: far face of x=2 minus near face of x=0.
        let lo = layout.get(GridCoord::new(0, 0, 0));
        let hi = layout.get(GridCoord::new(2, 0, 0));
        let span = (hi.position.x + hi.size / 2.0) - (lo.position.x - lo.size / 2.0);
        approx(span, params.cube_size);
    }

    #[test]
    fn origin_offsets_every_cubelet() {
        let params = LayoutParams {
            origin: Vec3::new(1.0, 2.0, 3.0),
            ..LayoutParams::default()
        };
        let base = solved_layout();
        let moved =
            CubeLayout::build(&FaceletString::solved(), &ColorScheme::classic(), &params)
                .unwrap();
        for (a, b) in base.cubelets().iter().zip(moved.cubelets()) {
            assert_eq!(b.position - a.position, params.origin);
        }
    }

    #[test]
    fn center_sits_between_cubelets() {
        let layout = solved_layout();
        let center = layout.center();
        let lo = layout.get(GridCoord::new(0, 0, 0)).position;
        let hi = layout.get(GridCoord::new(2, 2, 2)).position;
        approx(center.x, (lo.x + hi.x) / 2.0);
        approx(center.y, (lo.y + hi.y) / 2.0);
        approx(center.z, (lo.z + hi.z) / 2.0);
    }

    #[test]
    fn unmapped_symbol_fails_the_build() {
        let mut raw = String::from(FaceletString::SOLVED);
        raw.replace_range(20..21, "Q"); // inside the D face
        let facelets = FaceletString::parse(&raw).unwrap();
        let err = CubeLayout::build(
            &facelets,
            &ColorScheme::classic(),
            &LayoutParams::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            LayoutError::UnmappedSymbol {
                symbol: 'Q',
                face: Face::D
            }
        );
    }

    #[test]
    fn materials_substitute_filler_only_where_interior() {
        let layout = solved_layout();
        let corner = layout.get(GridCoord::new(2, 2, 2));
        assert_eq!(corner.kind, PieceKind::Corner);
        assert_eq!(corner.material(Direction::PosX), Color::BLUE);
        assert_eq!(corner.material(Direction::PosY), Color::WHITE);
        assert_eq!(corner.material(Direction::PosZ), Color::RED);
        // Interior-facing slots get the filler.
        assert_eq!(corner.sticker(Direction::NegX), None);
        assert_eq!(corner.material(Direction::NegX), Color::WHITE);
    }
}
