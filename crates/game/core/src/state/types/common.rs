use std::fmt;

/// Unique identifier for any entity tracked in the state.
///
/// Party members and monsters share one id space so a stale id can never
/// resolve to an entity on the other side of the fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for rolls that are not owned by an entity
    /// (encounter spawning, treasure, victory gold).
    pub const SYSTEM: Self = Self(u32::MAX);

    /// Returns true if this entity represents a system actor.
    #[inline]
    pub const fn is_system(self) -> bool {
        self.0 == Self::SYSTEM.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass direction the party is facing.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    #[default]
    #[strum(serialize = "N")]
    North,
    #[strum(serialize = "E")]
    East,
    #[strum(serialize = "S")]
    South,
    #[strum(serialize = "W")]
    West,
}

impl Facing {
    /// Grid delta of one step in this direction (y grows southwards).
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    pub const fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    pub const fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }
}

/// Integer resource meter (health, mana) with `0 <= current <= maximum`.
///
/// Deserialization goes through [`ResourceMeter::new`], so restored meters
/// are clamped as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "MeterParts"))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MeterParts {
    current: u32,
    maximum: u32,
}

#[cfg(feature = "serde")]
impl From<MeterParts> for ResourceMeter {
    fn from(parts: MeterParts) -> Self {
        Self::new(parts.current, parts.maximum)
    }
}

impl ResourceMeter {
    /// Creates a meter, clamping `current` into range.
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    pub fn is_full(&self) -> bool {
        self.current == self.maximum
    }

    /// Removes up to `amount`, stopping at zero. Returns the amount removed.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.current);
        self.current -= removed;
        removed
    }

    /// Adds up to `amount`, stopping at the maximum. Returns the amount added.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let added = amount.min(self.maximum.saturating_sub(self.current));
        self.current += added;
        added
    }

    pub fn refill(&mut self) {
        self.current = self.maximum;
    }

    /// Raises the maximum and refills the meter.
    pub fn grow(&mut self, amount: u32) {
        self.maximum = self.maximum.saturating_add(amount);
        self.current = self.maximum;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn restore_tolerates_overfilled_meter() {
        let mut mp = ResourceMeter {
            current: 12,
            maximum: 10,
        };
        assert_eq!(mp.restore(5), 0);
        assert_eq!(mp.current, 12);
    }

    #[test]
    fn drain_clamps_at_zero() {
        let mut hp = ResourceMeter::full(10);
        assert_eq!(hp.drain(4), 4);
        assert_eq!(hp.drain(25), 6);
        assert_eq!(hp.current, 0);
        assert!(hp.is_empty());
    }

    #[test]
    fn restore_clamps_at_maximum() {
        let mut hp = ResourceMeter::new(3, 10);
        assert_eq!(hp.restore(19), 7);
        assert!(hp.is_full());
    }

    #[test]
    fn new_never_exceeds_maximum() {
        assert_eq!(ResourceMeter::new(12, 8).current, 8);
    }

    #[test]
    fn turning_four_times_returns_to_start() {
        for facing in Facing::iter() {
            assert_eq!(facing.left().left().left().left(), facing);
            assert_eq!(facing.left().right(), facing);
            assert_eq!(facing.opposite().opposite(), facing);
        }
    }

    #[test]
    fn left_of_north_is_west() {
        assert_eq!(Facing::North.left(), Facing::West);
        assert_eq!(Facing::North.right(), Facing::East);
        assert_eq!(Facing::North.delta(), (0, -1));
    }
}
