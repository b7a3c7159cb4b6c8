//! Integer room-grid coordinates, unit axis directions, and rotations.

use crate::error::DirectionError;
use smallvec::SmallVec;
use std::fmt;
use std::ops::Add;

/// A room cell coordinate in the facility's logical grid.
///
/// Identifies a room independently of continuous world position.
/// Equality and hashing are by value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomCoord {
    /// East/west axis.
    pub x: i32,
    /// Vertical axis (floor level).
    pub y: i32,
    /// North/south axis.
    pub z: i32,
}

impl RoomCoord {
    /// Construct a coordinate from its three components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for RoomCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add<Direction> for RoomCoord {
    type Output = RoomCoord;

    fn add(self, d: Direction) -> RoomCoord {
        RoomCoord {
            x: self.x + d.dx,
            y: self.y + d.dy,
            z: self.z + d.dz,
        }
    }
}

/// A unit step between adjacent room cells.
///
/// Exactly one component is ±1 and the others are 0; [`Direction::new`]
/// rejects anything else, so every value of this type satisfies the
/// squared-magnitude-one invariant by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    dx: i32,
    dy: i32,
    dz: i32,
}

impl Direction {
    /// Toward +x.
    pub const EAST: Direction = Direction { dx: 1, dy: 0, dz: 0 };
    /// Toward -x.
    pub const WEST: Direction = Direction { dx: -1, dy: 0, dz: 0 };
    /// Toward +y (up one floor).
    pub const UP: Direction = Direction { dx: 0, dy: 1, dz: 0 };
    /// Toward -y (down one floor).
    pub const DOWN: Direction = Direction { dx: 0, dy: -1, dz: 0 };
    /// Toward +z.
    pub const NORTH: Direction = Direction { dx: 0, dy: 0, dz: 1 };
    /// Toward -z.
    pub const SOUTH: Direction = Direction { dx: 0, dy: 0, dz: -1 };

    /// All six axis directions, in a fixed canonical order.
    pub const AXES: [Direction; 6] = [
        Direction::EAST,
        Direction::WEST,
        Direction::UP,
        Direction::DOWN,
        Direction::NORTH,
        Direction::SOUTH,
    ];

    /// Validate a raw component triple into a unit axis direction.
    ///
    /// Returns `Err(DirectionError::NotUnit)` unless the squared
    /// magnitude is exactly 1.
    pub fn new(dx: i32, dy: i32, dz: i32) -> Result<Self, DirectionError> {
        if dx * dx + dy * dy + dz * dz != 1 {
            return Err(DirectionError::NotUnit { dx, dy, dz });
        }
        Ok(Self { dx, dy, dz })
    }

    /// X component.
    pub const fn dx(self) -> i32 {
        self.dx
    }

    /// Y component.
    pub const fn dy(self) -> i32 {
        self.dy
    }

    /// Z component.
    pub const fn dz(self) -> i32 {
        self.dz
    }

    /// Squared magnitude. Always 1 for a validly constructed direction.
    pub const fn magnitude_sq(self) -> i32 {
        self.dx * self.dx + self.dy * self.dy + self.dz * self.dz
    }

    /// Rotate this direction by a room's world orientation.
    ///
    /// Yaw rotation about the vertical (y) axis in exact integer
    /// arithmetic, so unit magnitude is preserved structurally and no
    /// rounding is involved.
    pub const fn rotated(self, orientation: Orientation) -> Direction {
        match orientation {
            Orientation::Deg0 => self,
            Orientation::Deg90 => Direction {
                dx: self.dz,
                dy: self.dy,
                dz: -self.dx,
            },
            Orientation::Deg180 => Direction {
                dx: -self.dx,
                dy: self.dy,
                dz: -self.dz,
            },
            Orientation::Deg270 => Direction {
                dx: -self.dz,
                dy: self.dy,
                dz: self.dx,
            },
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.dx, self.dy, self.dz)
    }
}

/// The finite set of room orientations: quarter-turn yaw rotations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Canonical (unrotated) placement.
    #[default]
    Deg0,
    /// Quarter turn.
    Deg90,
    /// Half turn.
    Deg180,
    /// Three-quarter turn.
    Deg270,
}

impl Orientation {
    /// All four orientations, in rotation order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Deg0,
        Orientation::Deg90,
        Orientation::Deg180,
        Orientation::Deg270,
    ];
}

/// An ordered set of propagation directions for one room.
///
/// `SmallVec<[Direction; 6]>` keeps the common case (at most the six
/// axis directions) off the heap.
pub type DirectionSet = SmallVec<[Direction; 6]>;
