//! Best-first pathfinding over caller-defined implicit state graphs.
//!
//! Unlike grid-bound pathfinding crates, this engine stores no graph at all:
//! the caller supplies an opaque state type and five operations through the
//! [`SearchSpace`] trait, and neighbors are computed on demand as the search
//! runs. [`PathFinder`] drives an A*-style loop over that space:
//!
//! - **Frontier ranking** by `f = estimate + accumulated cost`, ties going to
//!   the earliest-discovered node
//! - **Insert-once bookkeeping** — no relaxation, no re-expansion (see
//!   [`PathFinder`] for the optimality caveat this implies)
//! - **Iteration budget** as the sole cooperative cutoff
//! - **Path reconstruction** through parent-linked nodes in a per-call arena
//!
//! Search spaces can be dedicated types implementing [`SearchSpace`], or ad
//! hoc bundles of closures via [`FnSpace`].
//!
//! # Trait summary
//!
//! | Item | Role |
//! |---|---|
//! | [`SearchSpace`] | hashing, adjacency, costs and the goal test |
//! | [`FnSpace`] | `SearchSpace` from five closures |
//! | [`PathFinder`] | runs the search, yields a [`SearchResult`] |

mod closure;
mod finder;
mod nodeset;
mod traits;

pub use closure::FnSpace;
pub use finder::{DEFAULT_MAX_ITERATIONS, PathFinder, SearchResult};
pub use traits::SearchSpace;
