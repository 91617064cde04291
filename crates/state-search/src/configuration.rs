//! Configuration contracts consumed by the search engines.
//!
//! A configuration is one state of the problem being solved: a node in an
//! implicit graph that the engines walk without ever materializing. Puzzles
//! own the domain rules; the engines own the traversal strategy.

use std::fmt;
use std::hash::Hash;

use smallvec::SmallVec;

/// Freshly allocated children of a configuration.
///
/// Most puzzles branch four ways or fewer, so children stay inline.
pub type Children<C> = SmallVec<[C; 4]>;

/// A complete state for the breadth-first solver.
///
/// Equality and hashing must agree and cover every domain-relevant field:
/// the solver deduplicates on them. A value handed to the solver is never
/// mutated again, so any "next state" must be a new value.
pub trait Configuration: Clone + Eq + Hash {
    /// Is this a solved state?
    fn is_goal(&self) -> bool;

    /// Every configuration reachable by exactly one legal move.
    ///
    /// May contain duplicates or states already seen; the solver filters them.
    /// The order of the returned children breaks ties between equally short
    /// paths.
    fn neighbors(&self) -> Children<Self>;
}

/// A partial assignment for the backtracker.
///
/// The configuration carries a cursor over its decision points. Each successor
/// fills the next decision point with one candidate value.
pub trait PartialConfiguration: Sized + fmt::Display {
    /// Check the most recently assigned decision point against what is already
    /// assigned around it. Not a full-board pass.
    fn is_valid(&self) -> bool;

    /// True once the cursor has filled the final decision point.
    fn is_goal(&self) -> bool;

    /// Children in declared order, one per candidate value for the next
    /// decision point. The first valid goal along this order wins.
    fn successors(&self) -> Children<Self>;
}
