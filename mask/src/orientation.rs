//! Axes, directions, and the six grid orientations.

/// A grid axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// The two other axes in cyclic order: X→(Y,Z), Y→(Z,X), Z→(X,Y).
    #[must_use]
    pub const fn perpendicular(self) -> (Self, Self) {
        match self {
            Self::X => (Self::Y, Self::Z),
            Self::Y => (Self::Z, Self::X),
            Self::Z => (Self::X, Self::Y),
        }
    }
}

/// Sign of travel along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Increasing => Self::Decreasing,
            Self::Decreasing => Self::Increasing,
        }
    }

    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Increasing => 1,
            Self::Decreasing => -1,
        }
    }
}

/// An axis crossed with a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Orientation {
    pub const ALL: [Self; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    #[must_use]
    pub const fn new(axis: Axis, direction: Direction) -> Self {
        match (axis, direction) {
            (Axis::X, Direction::Increasing) => Self::PosX,
            (Axis::X, Direction::Decreasing) => Self::NegX,
            (Axis::Y, Direction::Increasing) => Self::PosY,
            (Axis::Y, Direction::Decreasing) => Self::NegY,
            (Axis::Z, Direction::Increasing) => Self::PosZ,
            (Axis::Z, Direction::Decreasing) => Self::NegZ,
        }
    }

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::PosX | Self::NegX => Axis::X,
            Self::PosY | Self::NegY => Axis::Y,
            Self::PosZ | Self::NegZ => Axis::Z,
        }
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::PosX | Self::PosY | Self::PosZ => Direction::Increasing,
            Self::NegX | Self::NegY | Self::NegZ => Direction::Decreasing,
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::new(self.axis(), self.direction().reverse())
    }

    /// Unit step along this orientation.
    #[must_use]
    pub const fn normal(self) -> [i32; 3] {
        let s = self.direction().sign();
        match self.axis() {
            Axis::X => [s, 0, 0],
            Axis::Y => [0, s, 0],
            Axis::Z => [0, 0, s],
        }
    }
}
