use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One of the six faces of the cube.
///
/// The facelet string is segmented in the fixed order U, F, D, L, R, B
/// (`Face::ORDER`); each face reads row-major from its top-left sticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    /// Up
    U,
    /// Front
    F,
    /// Down
    D,
    /// Left
    L,
    /// Right
    R,
    /// Back
    B,
}

impl Face {
    /// Canonical segmentation order of the facelet string.
    pub const ORDER: [Face; 6] = [Face::U, Face::F, Face::D, Face::L, Face::R, Face::B];

    /// Position of this face in `ORDER` (also its 9-character segment index).
    pub fn index(self) -> usize {
        match self {
            Face::U => 0,
            Face::F => 1,
            Face::D => 2,
            Face::L => 3,
            Face::R => 4,
            Face::B => 5,
        }
    }

    /// The outward normal direction of this face on an assembled cube.
    pub fn normal(self) -> Direction {
        match self {
            Face::U => Direction::PosY,
            Face::D => Direction::NegY,
            Face::F => Direction::PosZ,
            Face::B => Direction::NegZ,
            Face::L => Direction::NegX,
            Face::R => Direction::PosX,
        }
    }

    /// Canonical symbol letter for this face.
    pub fn symbol(self) -> char {
        match self {
            Face::U => 'U',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::R => 'R',
            Face::B => 'B',
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Outward face-normal direction of a cubelet slot.
///
/// `Direction::ORDER` fixes the material-list convention consumed by
/// renderers: +x, -x, +y, -y, +z, -z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Direction {
    /// Fixed slot order of the six-element material list.
    pub const ORDER: [Direction; 6] = [
        Direction::PosX,
        Direction::NegX,
        Direction::PosY,
        Direction::NegY,
        Direction::PosZ,
        Direction::NegZ,
    ];

    /// Slot position of this direction in the material list.
    pub fn index(self) -> usize {
        match self {
            Direction::PosX => 0,
            Direction::NegX => 1,
            Direction::PosY => 2,
            Direction::NegY => 3,
            Direction::PosZ => 4,
            Direction::NegZ => 5,
        }
    }

    /// Unit normal vector for this direction.
    pub fn unit(self) -> Vec3 {
        match self {
            Direction::PosX => Vec3::X,
            Direction::NegX => Vec3::NEG_X,
            Direction::PosY => Vec3::Y,
            Direction::NegY => Vec3::NEG_Y,
            Direction::PosZ => Vec3::Z,
            Direction::NegZ => Vec3::NEG_Z,
        }
    }
}

/// Position of one cubelet in the 3x3x3 grid; each axis is in {0, 1, 2}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

impl GridCoord {
    /// Create a coordinate. Panics if any axis is outside {0, 1, 2}.
    pub fn new(x: u8, y: u8, z: u8) -> Self {
        assert!(x < 3 && y < 3 && z < 3, "grid coordinate out of range");
        Self { x, y, z }
    }

    /// All 27 coordinates in the deterministic enumeration order:
    /// x outer, y middle, z inner.
    pub fn enumerate() -> impl Iterator<Item = GridCoord> {
        (0..3u8).flat_map(|x| {
            (0..3u8).flat_map(move |y| (0..3u8).map(move |z| GridCoord { x, y, z }))
        })
    }

    /// Index of this coordinate in the enumeration order (0..27).
    pub fn ordinal(self) -> usize {
        self.x as usize * 9 + self.y as usize * 3 + self.z as usize
    }

    /// Coordinate as a float vector (grid units, not world units).
    pub fn as_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

/// Opaque 24-bit RGB sticker color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);
    pub const GREEN: Color = Color(0x128d38);
    pub const RED: Color = Color(0xa60027);
    pub const BLUE: Color = Color(0x03309c);
    pub const YELLOW: Color = Color(0xfecd09);
    pub const ORANGE: Color = Color(0xfb4007);

    /// RGB components as floats in [0, 1].
    pub fn rgb_f32(self) -> [f32; 3] {
        [
            ((self.0 >> 16) & 0xff) as f32 / 255.0,
            ((self.0 >> 8) & 0xff) as f32 / 255.0,
            (self.0 & 0xff) as f32 / 255.0,
        ]
    }

    /// RGBA components as floats in [0, 1], alpha fixed at 1.
    pub fn rgba_f32(self) -> [f32; 4] {
        let [r, g, b] = self.rgb_f32();
        [r, g, b, 1.0]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}
