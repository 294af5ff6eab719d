//! Capture and quiet-move generation, including the multi-jump chain search.

use log::trace;

use crate::board::Board;
use crate::config::Settings;
use crate::constants::{Color, Kind, Square};
use crate::r#move::{Move, Position};

/// A capture candidate before legality checks: the square being jumped and
/// the square the piece lands on.
type JumpPair = (Position, Position);

/// A fully explored capture chain: the ordered jumped squares and the final
/// landing square.
pub type Chain = (Vec<Position>, Position);

fn jump_pairs(from: Position, kind: Kind, dir: i32, backward_capture: bool) -> Vec<JumpPair> {
    let mut pairs = Vec::with_capacity(4);
    let mut push = |dx: i32, dy: i32| {
        pairs.push((
            Position::new(from.x + dx, from.y + dy),
            Position::new(from.x + 2 * dx, from.y + 2 * dy),
        ));
    };
    match kind {
        Kind::Man => {
            push(-1, dir);
            push(1, dir);
            if backward_capture {
                push(-1, -dir);
                push(1, -dir);
            }
        }
        Kind::King => {
            push(-1, dir);
            push(1, dir);
            push(-1, -dir);
            push(1, -dir);
        }
        // TODO: long-range slide captures for the flying king
        Kind::FlyingKing => {}
    }
    pairs
}

/// Every immediate one-jump capture available to `side`.
///
/// With `restrict` set, only that square is considered and the supplied
/// occupant is used as the jumping piece; the chain search relies on this
/// once the piece has conceptually left its origin square. Without it the
/// whole board is scanned and each piece jumps with its own kind.
pub fn single_captures(
    board: &Board,
    settings: &Settings,
    side: Color,
    restrict: Option<(Position, Square)>,
) -> Vec<Move> {
    let dir = side.forward();
    let pieces: Vec<(Position, Square)> = match restrict {
        Some((pos, taker)) => vec![(pos, taker)],
        None => board
            .pieces_of(side)
            .into_iter()
            .map(|pos| (pos, board.get(pos)))
            .collect(),
    };

    let mut moves = Vec::new();
    for (pos, taker) in pieces {
        let Some(kind) = taker.kind() else {
            continue;
        };
        for (over, landing) in jump_pairs(pos, kind, dir, settings.backward_capture) {
            if !board.in_bounds(over) || !board.in_bounds(landing) {
                continue;
            }
            if !board.is_empty_at(landing) {
                continue;
            }
            if board.get(over).color() != Some(side.opponent()) {
                continue;
            }
            moves.push(Move::new(pos, landing, vec![over], vec![board.get(over)]));
        }
    }
    moves
}

/// One-square diagonal steps for every piece of `side`: forward only for a
/// man, all four diagonals for a king, nothing for a flying king.
pub fn quiet_moves(board: &Board, side: Color) -> Vec<Move> {
    let dir = side.forward();
    let mut moves = Vec::new();
    for pos in board.pieces_of(side) {
        let dests: &[(i32, i32)] = match board.get(pos).kind() {
            Some(Kind::Man) => &[(-1, 1), (1, 1)],
            Some(Kind::King) => &[(-1, 1), (1, 1), (-1, -1), (1, -1)],
            Some(Kind::FlyingKing) | None => &[],
        };
        for &(dx, dy) in dests {
            let dest = Position::new(pos.x + dx, pos.y + dy * dir);
            if board.in_bounds(dest) && board.is_empty_at(dest) {
                moves.push(Move::quiet(pos, dest));
            }
        }
    }
    moves
}

/// Extends a first-step capture into every maximal chain reachable from it.
///
/// The jumping piece is lifted off its origin square for the duration of the
/// search so that lookahead from later landing squares does not see it
/// standing on its old square; the occupant is restored before returning on
/// every path.
pub fn capture_chains(
    board: &mut Board,
    settings: &Settings,
    side: Color,
    first: &Move,
) -> Vec<Chain> {
    let taker = board.get(first.origin);
    board.set(first.origin, Square::Empty);
    let mut take = first.clone();
    let chains = extend_capture(board, settings, side, &mut take, taker);
    board.set(first.origin, taker);
    chains
}

fn extend_capture(
    board: &Board,
    settings: &Settings,
    side: Color,
    take: &mut Move,
    taker: Square,
) -> Vec<Chain> {
    // A square may be jumped at most once per chain, even when a different
    // path could reach it again.
    let continuations: Vec<Move> = single_captures(board, settings, side, Some((take.dest, taker)))
        .into_iter()
        .filter(|next| !take.takes.contains(&next.takes[0]))
        .collect();

    if continuations.is_empty() {
        return vec![(take.takes.clone(), take.dest)];
    }

    let mut best: Vec<Chain> = Vec::new();
    for next in continuations {
        // In-place backtracking: push the jump, recurse, then roll back.
        take.takes.push(next.takes[0]);
        let prev_dest = std::mem::replace(&mut take.dest, next.dest);
        for (trail, dest) in extend_capture(board, settings, side, take, taker) {
            if best.is_empty() || trail.len() > best[0].0.len() {
                best = vec![(trail, dest)];
            } else if trail.len() == best[0].0.len() {
                best.push((trail, dest));
            }
        }
        take.dest = prev_dest;
        take.takes.pop();
    }
    best
}

/// The complete legal-move set for `side`.
///
/// Captures are mandatory whenever any exist, and only chains of the
/// globally greatest length survive; the `must_take` toggles are not
/// consulted. Quiet moves are offered only when no capture exists anywhere.
/// The board is mutated during chain exploration but unchanged on return.
pub fn legal_moves(board: &mut Board, settings: &Settings, side: Color) -> Vec<Move> {
    let first_jumps = single_captures(board, settings, side, None);
    if first_jumps.is_empty() {
        return quiet_moves(board, side);
    }

    let mut moves = Vec::new();
    for first in &first_jumps {
        for (trail, dest) in capture_chains(board, settings, side, first) {
            let taken_pieces = trail.iter().map(|&p| board.get(p)).collect();
            moves.push(Move::new(first.origin, dest, trail, taken_pieces));
        }
    }

    // Longest-chain rule, enforced across all pieces of the side.
    if let Some(longest) = moves.iter().map(|m| m.takes.len()).max() {
        moves.retain(|m| m.takes.len() == longest);
    }
    trace!("{side:?}: {} capture move(s)", moves.len());

    if moves.is_empty() {
        // Degenerate case: exploration produced nothing, fall back to the
        // raw first-step captures.
        return first_jumps;
    }
    moves
}
