use super::Position;

/// The four compass moves available from a cell.
///
/// [`Direction::ALL`] fixes the order neighbors are produced in. Depth- and
/// breadth-first visitation sequences depend on it, so it must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Step one cell from `from`, or `None` if that leaves a
    /// `width` x `height` grid.
    pub fn step(self, from: Position, width: usize, height: usize) -> Option<Position> {
        let Position { x, y } = from;
        let (nx, ny) = match self {
            Direction::North => (x, y.checked_sub(1)?),
            Direction::South => (x, y + 1),
            Direction::East => (x + 1, y),
            Direction::West => (x.checked_sub(1)?, y),
        };
        (nx < width && ny < height).then_some(Position::new(nx, ny))
    }
}
