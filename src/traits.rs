/// Caller-supplied definition of an implicit search graph.
///
/// The engine stores no graph of its own: states, adjacency, step costs and
/// the goal test all come through this trait, and neighbors are computed on
/// demand. All five operations are assumed pure and total for the states they
/// are handed; the engine performs no validation, so a `hash` that collides
/// for logically-distinct states or a non-deterministic `neighbors` degrades
/// results silently rather than raising an error.
pub trait SearchSpace {
    /// Opaque state type the search operates over.
    type State;

    /// Canonical unique key for `state`.
    ///
    /// Two states with equal keys are treated as the same search node, even
    /// if they are structurally different.
    fn hash(&self, state: &Self::State) -> String;

    /// Append the states reachable from `state` in one step into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, state: &Self::State, buf: &mut Vec<Self::State>);

    /// Heuristic estimate of the remaining cost from `state` to `target`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, state: &Self::State, target: &Self::State) -> i32;

    /// Goal test for `state` against `target`.
    fn is_target(&self, state: &Self::State, target: &Self::State) -> bool;

    /// Exact cost of moving from `from` to adjacent `to`. Must be >= 0.
    fn cost(&self, from: &Self::State, to: &Self::State) -> i32;
}
