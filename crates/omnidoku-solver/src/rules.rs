//! Constraint rules and the ordered rule list that evaluates them.
//!
//! A rule is a read-only predicate over `(board, cell)` answering whether the
//! cell's current value is admissible. The default rules enforce row, column,
//! and square uniqueness; custom rules can be added as types implementing
//! [`Rule`] or as plain closures via [`RuleSet::add_fn`].

use std::fmt;

use omnidoku_core::{Board, Cell};

/// A constraint predicate over a board cell.
///
/// Implementations must be read-only: a rule judges the cell's current value
/// against the board, it never mutates either. Rules are evaluated with the
/// cell holding a concrete (non-zero) value, either an existing placement or
/// a tentative assignment made by the solver.
///
/// Rules are `Send + Sync` so a [`RuleSet`] can be shared immutably across
/// concurrent solve attempts.
pub trait Rule: Send + Sync {
    /// Returns a short name for diagnostics.
    fn name(&self) -> &str;

    /// Returns `true` if `cell` fits the board under this rule.
    fn check(&self, board: &Board, cell: &Cell) -> bool;
}

/// Counts how many cells in `view` hold `value`.
fn occurrences<'a>(view: impl Iterator<Item = &'a Cell>, value: u8) -> usize {
    view.filter(|cell| cell.matches(value)).count()
}

/// Requires the cell's value to be unique within its row.
///
/// The cell itself is always part of the row, so a cell holding the only
/// instance of its value passes; two cells sharing a value both fail.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniqueInRow;

impl Rule for UniqueInRow {
    fn name(&self) -> &str {
        "unique in row"
    }

    fn check(&self, board: &Board, cell: &Cell) -> bool {
        occurrences(board.row(cell.position().y()), cell.value()) < 2
    }
}

/// Requires the cell's value to be unique within its column.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniqueInColumn;

impl Rule for UniqueInColumn {
    fn name(&self) -> &str {
        "unique in column"
    }

    fn check(&self, board: &Board, cell: &Cell) -> bool {
        occurrences(board.column(cell.position().x()), cell.value()) < 2
    }
}

/// Requires the cell's value to be unique within its sub-square.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniqueInSquare;

impl Rule for UniqueInSquare {
    fn name(&self) -> &str {
        "unique in square"
    }

    fn check(&self, board: &Board, cell: &Cell) -> bool {
        let position = cell.position();
        occurrences(
            board.square_containing(position.x(), position.y()),
            cell.value(),
        ) < 2
    }
}

/// Adapter turning a named closure into a [`Rule`].
struct FnRule<F> {
    name: String,
    check: F,
}

impl<F> Rule for FnRule<F>
where
    F: Fn(&Board, &Cell) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, board: &Board, cell: &Cell) -> bool {
        (self.check)(board, cell)
    }
}

/// An ordered collection of rules, evaluated with short-circuiting.
///
/// Evaluation order does not affect correctness, only performance: rules
/// that are cheap or likely to fail should be registered first so
/// [`is_valid`](RuleSet::is_valid) can bail out early.
///
/// The default set holds [`UniqueInRow`], [`UniqueInColumn`], and
/// [`UniqueInSquare`], in that order.
///
/// # Examples
///
/// ```
/// use omnidoku_core::Board;
/// use omnidoku_solver::RuleSet;
///
/// let board = Board::from_values(&[
///     1, 2, 3, 4,
///     3, 4, 1, 2,
///     2, 1, 4, 3,
///     4, 3, 2, 1,
/// ])?;
///
/// let rules = RuleSet::default();
/// assert!(rules.is_valid_at(&board, 0, 0));
/// # Ok::<(), omnidoku_core::BoardError>(())
/// ```
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RuleSet {
    fn default() -> Self {
        let mut rules = Self::empty();
        rules.add_rule(UniqueInRow);
        rules.add_rule(UniqueInColumn);
        rules.add_rule(UniqueInSquare);
        rules
    }
}

impl RuleSet {
    /// Creates a rule set with no rules; every cell is considered valid
    /// until rules are added.
    #[must_use]
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule to the evaluation list.
    pub fn add_rule(&mut self, rule: impl Rule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Appends a closure as a rule under the given diagnostic name.
    ///
    /// # Examples
    ///
    /// ```
    /// use omnidoku_solver::RuleSet;
    ///
    /// let mut rules = RuleSet::default();
    /// rules.add_fn("no ones on the diagonal", |_, cell| {
    ///     cell.position().x() != cell.position().y() || !cell.matches(1)
    /// });
    /// assert_eq!(rules.len(), 4);
    /// ```
    pub fn add_fn<F>(&mut self, name: impl Into<String>, check: F)
    where
        F: Fn(&Board, &Cell) -> bool + Send + Sync + 'static,
    {
        self.add_rule(FnRule {
            name: name.into(),
            check,
        });
    }

    /// Returns `true` if every rule accepts `cell`, stopping at the first
    /// failure.
    #[must_use]
    pub fn is_valid(&self, board: &Board, cell: &Cell) -> bool {
        self.rules.iter().all(|rule| rule.check(board, cell))
    }

    /// Coordinate form of [`is_valid`](RuleSet::is_valid).
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range for `board`.
    #[must_use]
    pub fn is_valid_at(&self, board: &Board, x: u8, y: u8) -> bool {
        self.is_valid(board, board.cell(x, y))
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the rule names in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name())
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
