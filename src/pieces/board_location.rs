/// A `(row, column)` pair. Signed so that off-board queries can be expressed.
pub type BoardLocation = (i32, i32);

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: i32 = 8;

/// Checks that a position lies on the 8x8 board (`0..=7` on both axes).
#[inline]
pub const fn is_within_board(row: i32, column: i32) -> bool {
    row >= 0 && row < BOARD_SIZE && column >= 0 && column < BOARD_SIZE
}

/// Every on-board location in row-major order, starting at `(0, 0)`.
pub fn all_board_locations() -> impl Iterator<Item = BoardLocation> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |column| (row, column)))
}

/// Bit index of an on-board location inside a 64-bit mask (`row * 8 + column`).
#[inline]
pub const fn location_bit(row: i32, column: i32) -> Option<u32> {
    if is_within_board(row, column) {
        Some((row * BOARD_SIZE + column) as u32)
    } else {
        None
    }
}
