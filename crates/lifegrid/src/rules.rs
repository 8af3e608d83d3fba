//! The fixed B3/S23 transition rule.

/// Live-neighbour counts under which a live cell survives.
pub const SURVIVE: [u8; 2] = [2, 3];

/// Live-neighbour count at which a dead cell is born.
pub const BIRTH: u8 = 3;

/// State of a cell in the next generation given its current state and
/// number of live neighbours.
#[inline]
pub fn next_state(alive: bool, live_neighbours: u8) -> bool {
    if alive {
        SURVIVE.contains(&live_neighbours)
    } else {
        live_neighbours == BIRTH
    }
}
