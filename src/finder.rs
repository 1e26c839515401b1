use log::{debug, trace};

use crate::nodeset::{NO_PARENT, NodeSet, PathNode};
use crate::traits::SearchSpace;

/// Iteration budget used by [`PathFinder::find_path`].
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Outcome of a single path search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult<S> {
    /// Whether a target state was reached.
    pub found: bool,
    /// States in the order they were expanded (popped from the frontier).
    /// The terminal goal state is never expanded, so it never appears here.
    pub expanded: Vec<S>,
    /// Path from the chosen source to the target, both inclusive.
    /// Empty when `found` is `false`.
    pub steps: Vec<S>,
    /// Completed select/expand cycles, never exceeding the budget.
    ///
    /// A `found == false` result does not say whether the frontier ran dry or
    /// the budget ran out; compare this value against the budget to tell the
    /// two apart.
    pub iterations: usize,
}

/// Best-first path finder over a caller-defined [`SearchSpace`].
///
/// Frontier nodes are ranked by `f = estimate + accumulated cost` (the A*
/// evaluation function), with ties broken in favour of the earliest-inserted
/// node. Unlike strict A*, the engine never relaxes: once a state key has
/// entered the frontier or the closed set, later paths to it are dropped even
/// when they are cheaper. On graphs where several differently-priced paths
/// can reach a node before its first expansion, the returned path may
/// therefore not be globally optimal; the trade keeps every node insert-once.
///
/// The finder itself is stateless configuration. All search bookkeeping is
/// allocated per call and dropped on return, so one finder can serve many
/// searches, concurrently if the space is shareable.
pub struct PathFinder<G> {
    space: G,
}

impl<G> PathFinder<G> {
    /// Create a finder over `space`.
    pub fn new(space: G) -> Self {
        Self { space }
    }

    /// The underlying search space.
    pub fn space(&self) -> &G {
        &self.space
    }

    /// Consume the finder, returning the search space.
    pub fn into_inner(self) -> G {
        self.space
    }
}

impl<G: SearchSpace> PathFinder<G>
where
    G::State: Clone,
{
    /// Search for a least-cost path from any of `sources` to `target`, with
    /// the [`DEFAULT_MAX_ITERATIONS`] budget.
    pub fn find_path(&self, sources: &[G::State], target: &G::State) -> SearchResult<G::State> {
        self.find_path_bounded(sources, target, DEFAULT_MAX_ITERATIONS)
    }

    /// Search for a least-cost path from any of `sources` to `target`,
    /// giving up after `max_iterations` expansions.
    ///
    /// Every source is seeded at distance 0; sources with duplicate hash keys
    /// collapse to the first in input order. An empty `sources` slice (or a
    /// budget of 0) yields an immediate not-found result.
    pub fn find_path_bounded(
        &self,
        sources: &[G::State],
        target: &G::State,
        max_iterations: usize,
    ) -> SearchResult<G::State> {
        let mut arena: Vec<PathNode<G::State>> = Vec::new();
        let mut frontier = NodeSet::new();
        let mut closed = NodeSet::new();

        for source in sources {
            let key = self.space.hash(source);
            if frontier.has(&key) {
                continue;
            }
            let idx = arena.len();
            arena.push(PathNode {
                state: source.clone(),
                parent: NO_PARENT,
                distance: 0,
            });
            frontier.add(key, idx);
        }
        trace!("seeded {} source node(s)", frontier.len());

        let mut expanded: Vec<G::State> = Vec::new();
        let mut terminal: Option<usize> = None;
        let mut nbuf: Vec<G::State> = Vec::new();

        let mut iterations = 0;
        while iterations < max_iterations {
            let Some(best) = self.select(&arena, &frontier, target) else {
                break;
            };

            if self.space.is_target(&arena[best].state, target) {
                terminal = Some(best);
                break;
            }

            self.expand(best, &mut arena, &mut frontier, &mut closed, &mut nbuf);
            expanded.push(arena[best].state.clone());
            iterations += 1;
        }

        let mut steps = Vec::new();
        if let Some(idx) = terminal {
            // Walk parent links back to a source, then flip.
            let mut ci = idx;
            while ci != NO_PARENT {
                steps.push(arena[ci].state.clone());
                ci = arena[ci].parent;
            }
            steps.reverse();
        }

        debug!(
            "search done: found={} expanded={} iterations={}",
            terminal.is_some(),
            expanded.len(),
            iterations
        );

        SearchResult {
            found: terminal.is_some(),
            expanded,
            steps,
            iterations,
        }
    }

    /// Pick the frontier node minimizing `f = estimate + distance`.
    ///
    /// The scan runs in insertion order and only a strictly smaller f
    /// displaces the current best, so the earliest-inserted node wins ties.
    fn select(
        &self,
        arena: &[PathNode<G::State>],
        frontier: &NodeSet,
        target: &G::State,
    ) -> Option<usize> {
        let mut best: Option<usize> = None;
        let mut best_f = i32::MAX;

        for idx in frontier.iter() {
            let node = &arena[idx];
            let f = self.space.estimate(&node.state, target) + node.distance;
            if best.is_none() || f < best_f {
                best = Some(idx);
                best_f = f;
            }
        }

        best
    }

    /// Move the node at `idx` from the frontier to the closed set and push
    /// its undiscovered neighbors onto the frontier.
    fn expand(
        &self,
        idx: usize,
        arena: &mut Vec<PathNode<G::State>>,
        frontier: &mut NodeSet,
        closed: &mut NodeSet,
        nbuf: &mut Vec<G::State>,
    ) {
        let key = self.space.hash(&arena[idx].state);
        trace!("expanding {key} (distance={})", arena[idx].distance);

        closed.add(key.clone(), idx);
        frontier.remove(&key);

        nbuf.clear();
        self.space.neighbors(&arena[idx].state, nbuf);

        let base = arena[idx].distance;
        for neighbor in nbuf.drain(..) {
            let nkey = self.space.hash(&neighbor);
            // Closed nodes are never re-opened, and a key already on the
            // frontier keeps its first (possibly costlier) entry.
            if closed.fetch(&nkey).is_some() || frontier.has(&nkey) {
                continue;
            }
            let ndistance = base + self.space.cost(&arena[idx].state, &neighbor);
            let nidx = arena.len();
            arena.push(PathNode {
                state: neighbor,
                parent: idx,
                distance: ndistance,
            });
            frontier.add(nkey, nidx);
        }
    }
}
