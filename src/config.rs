pub const BOARD_SIZE: u8 = 10;
pub const BOARD_SQUARES: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;
pub const NUM_SHIPS: usize = 5;

/// Ship lengths of the standard fleet placed by the factory.
pub const SHIPS: [usize; NUM_SHIPS] = [2, 3, 3, 4, 5];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&SHIPS);

/// Sum of the ship lengths in `ships`.
pub const fn fleet_cells(ships: &[usize]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < ships.len() {
        total += ships[i];
        i += 1;
    }
    total
}

/// A game that has taken more shots than this is aborted as `TooManyShots`.
pub const MAX_SHOTS: usize = 100;
