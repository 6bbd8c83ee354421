//! Backtracking search interleaved with constraint propagation.
//!
//! The solver alternates two phases. *Propagation* prunes every empty cell's
//! candidate set against the rules and commits naked singles, repeating until
//! a fixed point. *Branching* picks the first empty cell in row-major order
//! and tries each remaining candidate on an independent copy of the board,
//! recursing into a fresh propagation phase. A branch whose propagation hits
//! a cell with no candidates left is discarded wholesale; because every
//! branch owns a deep copy, the caller's board and sibling branches are
//! never disturbed.
//!
//! Solutions can be consumed one at a time ([`BacktrackingSolver::solve`])
//! or as a lazy depth-first stream ([`BacktrackingSolver::solutions`]).

use omnidoku_core::{Board, CandidateSet, Cell, Position};

use crate::RuleSet;

/// The search space was exhausted without finding a valid complete
/// assignment.
///
/// This is an expected negative result, not a defect: an over-constrained
/// puzzle simply has no solution. Internal propagation and branching
/// failures never surface; only this aggregate outcome does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no solution exists for the board")]
pub struct NoSolutionFound;

/// Solver-internal failure signal driving backtracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
enum Contradiction {
    /// An empty cell ran out of candidates during propagation.
    #[display("no candidate left for the cell at {_0}")]
    NoCandidate(Position),
    /// Every candidate of a branching cell has been tried without success.
    #[display("all candidates exhausted")]
    Exhausted,
}

/// A solver combining naked-single propagation with backtracking search.
///
/// The rule set is fixed at construction and shared by all solve attempts;
/// the solver itself holds no per-puzzle state, so one instance can solve
/// any number of boards.
///
/// # Examples
///
/// ```
/// use omnidoku_core::Board;
/// use omnidoku_solver::BacktrackingSolver;
///
/// let board = Board::from_values(&[
///     3, 4, 1, 2,
///     0, 2, 3, 0,
///     0, 3, 2, 1,
///     2, 1, 4, 3,
/// ])?;
///
/// let solver = BacktrackingSolver::default();
/// let solution = solver.solve(&board)?;
/// assert_eq!(solution.cell(0, 1).value(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct BacktrackingSolver {
    rules: RuleSet,
}

impl BacktrackingSolver {
    /// Creates a solver using the given rule set.
    #[must_use]
    pub const fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Returns the solver's rule set.
    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns `true` if `board` is completely filled and every placement
    /// satisfies the rules.
    #[must_use]
    pub fn is_solved(&self, board: &Board) -> bool {
        board.is_filled() && self.placements_valid(board)
    }

    /// Solves the board, returning the first solution found.
    ///
    /// The input board is never mutated; the solution is an independent
    /// copy. Solving the same board twice yields the identical result.
    ///
    /// # Errors
    ///
    /// Returns [`NoSolutionFound`] if the search space is exhausted.
    pub fn solve(&self, board: &Board) -> Result<Board, NoSolutionFound> {
        self.solutions(board).next().ok_or(NoSolutionFound)
    }

    /// Returns a lazy iterator over every solution of `board`.
    ///
    /// Solutions are produced in depth-first order, with the branching
    /// cell's candidates tried in ascending order, so the sequence is
    /// deterministic. Consecutive solutions always differ in at least one
    /// cell: a new one is only reached after revising some earlier
    /// decision. Dropping the iterator abandons the search without further
    /// work.
    ///
    /// # Examples
    ///
    /// ```
    /// use omnidoku_core::Board;
    /// use omnidoku_solver::BacktrackingSolver;
    ///
    /// let board = Board::from_values(&[
    ///     3, 0, 0, 2,
    ///     0, 2, 3, 0,
    ///     0, 3, 2, 0,
    ///     2, 0, 0, 3,
    /// ])?;
    ///
    /// let solver = BacktrackingSolver::default();
    /// assert_eq!(solver.solutions(&board).count(), 2);
    /// # Ok::<(), omnidoku_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn solutions(&self, board: &Board) -> Solutions<'_> {
        let mut root = board.clone();

        if !self.placements_valid(&root) {
            log::debug!("existing placements violate the rules; nothing to search");
            return Solutions::empty(self);
        }
        if root.is_filled() {
            return Solutions::single(self, root);
        }

        self.reset_candidates(&mut root);
        match self.propagate_inner(&mut root) {
            Err(contradiction) => {
                log::debug!("propagation failed on the initial board: {contradiction}");
                Solutions::empty(self)
            }
            Ok(committed) => {
                log::debug!("initial propagation committed {} cells", committed.len());
                if root.is_filled() {
                    Solutions::single(self, root)
                } else {
                    Solutions::branching(self, root)
                }
            }
        }
    }

    /// Reinitializes every empty cell's candidate set to the full `1..=n`
    /// range.
    ///
    /// Called once at the start of a solving attempt; branches inherit the
    /// already-pruned sets of their parent instead, which is sound because
    /// adding placements can only shrink what is valid.
    pub fn reset_candidates(&self, board: &mut Board) {
        let full = CandidateSet::full(board.size());
        for position in empty_positions(board) {
            board
                .cell_mut(position.x(), position.y())
                .set_candidates(full);
        }
    }

    /// Runs a single forward-checking pass over every empty cell.
    ///
    /// Each remaining candidate is tentatively assigned, judged by the
    /// rules, and reverted; failing candidates are pruned. A cell left with
    /// exactly one candidate is committed immediately and reported in the
    /// returned list. Candidate sets must have been initialized first (see
    /// [`reset_candidates`](Self::reset_candidates)).
    ///
    /// # Errors
    ///
    /// Returns [`NoSolutionFound`] if some empty cell has no candidate
    /// left, which proves the board unsolvable as it stands.
    pub fn reduce_candidates(&self, board: &mut Board) -> Result<Vec<Position>, NoSolutionFound> {
        self.reduce_pass(board).map_err(|_| NoSolutionFound)
    }

    /// Repeats [`reduce_candidates`](Self::reduce_candidates) until a pass
    /// commits no cell, returning every committed position.
    ///
    /// This is naked-single elimination to a fixed point. Most nontrivial
    /// puzzles reach the fixed point with empty cells remaining; branching
    /// takes over from there.
    ///
    /// # Errors
    ///
    /// Returns [`NoSolutionFound`] if propagation hits a cell with no
    /// candidates left.
    pub fn propagate(&self, board: &mut Board) -> Result<Vec<Position>, NoSolutionFound> {
        self.propagate_inner(board).map_err(|_| NoSolutionFound)
    }

    fn propagate_inner(&self, board: &mut Board) -> Result<Vec<Position>, Contradiction> {
        let mut committed = Vec::new();
        loop {
            let changed = self.reduce_pass(board)?;
            if changed.is_empty() {
                break;
            }
            committed.extend(changed);
        }
        Ok(committed)
    }

    fn reduce_pass(&self, board: &mut Board) -> Result<Vec<Position>, Contradiction> {
        let mut changed = Vec::new();
        for position in empty_positions(board) {
            let (x, y) = (position.x(), position.y());

            // Tentatively place each candidate and let the rules judge it
            // against the current, partially-filled board.
            for value in board.cell(x, y).candidates() {
                board.cell_mut(x, y).set_value(value);
                let fits = self.rules.is_valid(board, board.cell(x, y));
                board.cell_mut(x, y).clear();
                if !fits {
                    board.cell_mut(x, y).candidates_mut().remove(value);
                }
            }

            let remaining = board.cell(x, y).candidates();
            if let Some(value) = remaining.as_single() {
                board.cell_mut(x, y).set_value(value);
                changed.push(position);
            } else if remaining.is_empty() {
                return Err(Contradiction::NoCandidate(position));
            }
        }
        Ok(changed)
    }

    fn placements_valid(&self, board: &Board) -> bool {
        board
            .cells()
            .filter(|cell| !cell.is_empty())
            .all(|cell| self.rules.is_valid(board, cell))
    }
}

/// Positions of all empty cells in row-major order.
fn empty_positions(board: &Board) -> Vec<Position> {
    board
        .cells()
        .filter(|cell| cell.is_empty())
        .map(Cell::position)
        .collect()
}

/// One suspended branch point: a propagated board plus the untried
/// candidates of its branching cell.
struct Frame {
    board: Board,
    /// Pending `(position, value)` trials, reversed so `pop` yields them in
    /// ascending candidate order.
    trials: Vec<(Position, u8)>,
}

impl Frame {
    /// Builds a frame branching on the first empty cell of `board`.
    ///
    /// `board` must be at a propagation fixed point with at least one empty
    /// cell; such a cell always has candidates left, otherwise propagation
    /// would have failed.
    fn branching(board: Board) -> Self {
        let cell = board
            .cells()
            .find(|cell| cell.is_empty())
            .expect("branching frame requires an empty cell");
        let position = cell.position();
        let mut trials: Vec<(Position, u8)> = cell
            .candidates()
            .iter()
            .map(|value| (position, value))
            .collect();
        trials.reverse();
        log::debug!(
            "branching on {position} with {} candidate(s)",
            trials.len()
        );
        Self { board, trials }
    }
}

/// Lazy depth-first stream of a board's solutions.
///
/// Created by [`BacktrackingSolver::solutions`]. Each call to `next` resumes
/// the search exactly where the previous solution was found, backtracking as
/// if that branch had failed, so successive items are distinct by
/// construction.
pub struct Solutions<'a> {
    solver: &'a BacktrackingSolver,
    stack: Vec<Frame>,
    /// A solution already in hand before any branching (an input board that
    /// was complete, or one finished by propagation alone).
    ready: Option<Board>,
}

impl<'a> Solutions<'a> {
    fn empty(solver: &'a BacktrackingSolver) -> Self {
        Self {
            solver,
            stack: Vec::new(),
            ready: None,
        }
    }

    fn single(solver: &'a BacktrackingSolver, board: Board) -> Self {
        Self {
            solver,
            stack: Vec::new(),
            ready: Some(board),
        }
    }

    fn branching(solver: &'a BacktrackingSolver, board: Board) -> Self {
        Self {
            solver,
            stack: vec![Frame::branching(board)],
            ready: None,
        }
    }
}

impl Iterator for Solutions<'_> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        if let Some(board) = self.ready.take() {
            return Some(board);
        }

        while let Some(frame) = self.stack.last_mut() {
            let Some((position, value)) = frame.trials.pop() else {
                log::trace!(
                    "backtracking at depth {}: {}",
                    self.stack.len(),
                    Contradiction::Exhausted
                );
                self.stack.pop();
                continue;
            };

            // Each trial works on its own deep copy; a failed branch is
            // dropped without touching the frame it came from.
            let mut board = frame.board.clone();
            board.cell_mut(position.x(), position.y()).set_value(value);

            match self.solver.propagate_inner(&mut board) {
                Err(contradiction) => {
                    log::trace!("trial {value} at {position} failed: {contradiction}");
                }
                Ok(_) => {
                    if board.is_filled() {
                        return Some(board);
                    }
                    self.stack.push(Frame::branching(board));
                }
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Solutions<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(values: &[u8]) -> Board {
        Board::from_values(values).unwrap()
    }

    fn values(board: &Board) -> Vec<u8> {
        board.cells().map(Cell::value).collect()
    }

    const UNIQUE_4: [u8; 16] = [
        3, 4, 1, 2, //
        0, 2, 3, 0, //
        0, 3, 2, 1, //
        2, 1, 4, 3, //
    ];

    const UNIQUE_4_SOLUTION: [u8; 16] = [
        3, 4, 1, 2, //
        1, 2, 3, 4, //
        4, 3, 2, 1, //
        2, 1, 4, 3, //
    ];

    const AMBIGUOUS_4: [u8; 16] = [
        3, 0, 0, 2, //
        0, 2, 3, 0, //
        0, 3, 2, 0, //
        2, 0, 0, 3, //
    ];

    // Row 2 holds two 2s and two 4s; row 3 two 3s.
    const CONTRADICTORY_4: [u8; 16] = [
        3, 4, 1, 2, //
        0, 2, 3, 4, //
        2, 4, 2, 4, //
        1, 3, 4, 3, //
    ];

    const SOLVED_4: [u8; 16] = [
        1, 2, 3, 4, //
        3, 4, 1, 2, //
        2, 1, 4, 3, //
        4, 3, 2, 1, //
    ];

    // The classic 9×9 puzzle from the text-format documentation.
    const PUZZLE_9: [u8; 81] = [
        5, 3, 0, 0, 7, 0, 0, 0, 0, //
        6, 0, 0, 1, 9, 5, 0, 0, 0, //
        0, 9, 8, 0, 0, 0, 0, 6, 0, //
        8, 0, 0, 0, 6, 0, 0, 0, 3, //
        4, 0, 0, 8, 0, 3, 0, 0, 1, //
        7, 0, 0, 0, 2, 0, 0, 0, 6, //
        0, 6, 0, 0, 0, 0, 2, 8, 0, //
        0, 0, 0, 4, 1, 9, 0, 0, 5, //
        0, 0, 0, 0, 8, 0, 0, 7, 9, //
    ];

    const PUZZLE_9_SOLUTION: [u8; 81] = [
        5, 3, 4, 6, 7, 8, 9, 1, 2, //
        6, 7, 2, 1, 9, 5, 3, 4, 8, //
        1, 9, 8, 3, 4, 2, 5, 6, 7, //
        8, 5, 9, 7, 6, 1, 4, 2, 3, //
        4, 2, 6, 8, 5, 3, 7, 9, 1, //
        7, 1, 3, 9, 2, 4, 8, 5, 6, //
        9, 6, 1, 5, 3, 7, 2, 8, 4, //
        2, 8, 7, 4, 1, 9, 6, 3, 5, //
        3, 4, 5, 2, 8, 6, 1, 7, 9, //
    ];

    #[test]
    fn test_unique_4x4_puzzle() {
        let solver = BacktrackingSolver::default();
        let solution = solver.solve(&board(&UNIQUE_4)).unwrap();
        assert_eq!(values(&solution), UNIQUE_4_SOLUTION);
        assert!(solver.is_solved(&solution));
    }

    #[test]
    fn test_classic_9x9_puzzle() {
        let solver = BacktrackingSolver::default();
        let solution = solver.solve(&board(&PUZZLE_9)).unwrap();
        assert_eq!(values(&solution), PUZZLE_9_SOLUTION);
    }

    #[test]
    fn test_solved_board_returned_immediately() {
        let solver = BacktrackingSolver::default();
        let input = board(&SOLVED_4);
        assert!(solver.is_solved(&input));
        let solution = solver.solve(&input).unwrap();
        assert_eq!(values(&solution), SOLVED_4);
    }

    #[test]
    fn test_reduce_is_a_no_op_on_a_solved_board() {
        let solver = BacktrackingSolver::default();
        let mut b = board(&SOLVED_4);
        solver.reset_candidates(&mut b);
        assert_eq!(solver.reduce_candidates(&mut b).unwrap(), vec![]);
        assert_eq!(values(&b), SOLVED_4);
    }

    #[test]
    fn test_naked_single_filled_by_propagation_alone() {
        let mut b = board(&[
            0, 2, 3, 4, //
            3, 4, 1, 2, //
            2, 1, 4, 3, //
            4, 3, 2, 1, //
        ]);
        let solver = BacktrackingSolver::default();
        solver.reset_candidates(&mut b);
        let committed = solver.propagate(&mut b).unwrap();
        assert_eq!(committed, vec![Position::new(0, 0)]);
        assert_eq!(b.cell(0, 0).value(), 1);
        assert!(b.is_filled());
    }

    #[test]
    fn test_propagation_is_idempotent_at_fixed_point() {
        let solver = BacktrackingSolver::default();
        let mut b = board(&AMBIGUOUS_4);
        solver.reset_candidates(&mut b);
        let first = solver.propagate(&mut b).unwrap();
        assert_eq!(first, vec![]); // ambiguous puzzle: nothing determinable
        let before = b.clone();
        let second = solver.propagate(&mut b).unwrap();
        assert_eq!(second, vec![]);
        assert_eq!(b, before);
    }

    #[test]
    fn test_contradictory_board_fails_never_false_solved() {
        let solver = BacktrackingSolver::default();
        let input = board(&CONTRADICTORY_4);
        assert!(!solver.is_solved(&input));
        assert_eq!(solver.solve(&input), Err(NoSolutionFound));

        // Propagation itself must also detect the dead end: the empty cell
        // at (0, 1) has every candidate excluded by its row and column.
        let mut b = input.clone();
        solver.reset_candidates(&mut b);
        assert_eq!(solver.propagate(&mut b), Err(NoSolutionFound));
    }

    #[test]
    fn test_filled_but_invalid_board_is_not_solved() {
        let mut invalid = SOLVED_4;
        invalid[0] = 2; // row 0 now holds two 2s
        let solver = BacktrackingSolver::default();
        let input = board(&invalid);
        assert!(input.is_filled());
        assert!(!solver.is_solved(&input));
        assert_eq!(solver.solve(&input), Err(NoSolutionFound));
    }

    #[test]
    fn test_all_solutions_distinct_and_complete() {
        let solver = BacktrackingSolver::default();
        let solutions: Vec<Board> = solver.solutions(&board(&AMBIGUOUS_4)).collect();
        assert_eq!(solutions.len(), 2);
        assert_ne!(values(&solutions[0]), values(&solutions[1]));
        for solution in &solutions {
            assert!(solver.is_solved(solution));
            // Givens are preserved.
            assert_eq!(solution.cell(0, 0).value(), 3);
            assert_eq!(solution.cell(3, 3).value(), 3);
        }
    }

    #[test]
    fn test_solutions_can_be_abandoned_early() {
        let solver = BacktrackingSolver::default();
        let first: Vec<Board> = solver.solutions(&board(&AMBIGUOUS_4)).take(1).collect();
        assert_eq!(first.len(), 1);
        assert!(solver.is_solved(&first[0]));
    }

    #[test]
    fn test_solutions_of_unsolvable_board_is_empty() {
        let solver = BacktrackingSolver::default();
        assert_eq!(solver.solutions(&board(&CONTRADICTORY_4)).count(), 0);
    }

    #[test]
    fn test_input_board_never_mutated_and_resolve_is_deterministic() {
        let solver = BacktrackingSolver::default();
        let input = board(&UNIQUE_4);
        let pristine = input.clone();

        let first = solver.solve(&input).unwrap();
        assert_eq!(input, pristine);

        let second = solver.solve(&input).unwrap();
        assert_eq!(values(&first), values(&second));
        assert_eq!(input, pristine);
    }

    #[test]
    fn test_empty_4x4_board_has_many_solutions() {
        let solver = BacktrackingSolver::default();
        let empty = board(&[0; 16]);
        let some: Vec<Board> = solver.solutions(&empty).take(5).collect();
        assert_eq!(some.len(), 5);
        let mut seen: Vec<Vec<u8>> = some.iter().map(values).collect();
        seen.dedup();
        assert_eq!(seen.len(), 5);
        for solution in &some {
            assert!(solver.is_solved(solution));
        }
    }

    #[test]
    fn test_custom_rule_constrains_search() {
        let mut rules = RuleSet::default();
        // Forbid value 1 on the main diagonal.
        rules.add_fn("no ones on the diagonal", |_, cell| {
            cell.position().x() != cell.position().y() || !cell.matches(1)
        });
        let solver = BacktrackingSolver::new(rules);
        for solution in solver.solutions(&board(&[0; 16])).take(3) {
            for i in 0..4 {
                assert_ne!(solution.cell(i, i).value(), 1);
            }
        }
    }
}
