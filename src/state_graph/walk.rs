use rand::Rng;
use crate::core::{apply_move, generate_moves_with, Move, MoveRules, Table};

pub struct Walk {
    pub moves: Vec<Move>,
    pub table: Table,
}

/// Plays up to `steps` uniformly random moves from `table`. Moves that would
/// undo the previous one are never picked, so the walk cannot bounce a card
/// back and forth. Stops early when no move is left.
pub fn random_walk<R: Rng + ?Sized>(table: &Table, steps: usize, rng: &mut R) -> Walk {
    let rules = MoveRules::linear_play();
    let mut table = *table;
    let mut moves = Vec::with_capacity(steps);
    for _ in 0..steps {
        let candidates = generate_moves_with(&table, moves.last().copied(), &rules);
        if candidates.is_empty() {
            break;
        }
        let mv = candidates[rng.random_range(0..candidates.len())];
        apply_move(&mut table, mv);
        moves.push(mv);
    }
    Walk { moves, table }
}
