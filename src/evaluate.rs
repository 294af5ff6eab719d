//! Static evaluation of a board position.

use crate::board::Board;
use crate::constants::Color;

/// Material balance from the perspective of `side`: own piece count minus
/// the opponent's, kings counting no more than men.
pub fn evaluate(board: &Board, side: Color) -> i32 {
    board.count_of(side) - board.count_of(side.opponent())
}
