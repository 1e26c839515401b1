use std::marker::PhantomData;

use crate::traits::SearchSpace;

/// A [`SearchSpace`] assembled from five closures.
///
/// Handy when a dedicated graph type would be overkill — a test fixture, a
/// one-off experiment — the search space is just a bundle of functions:
///
/// ```
/// use wayfind::{FnSpace, PathFinder};
///
/// // A one-dimensional line of integers.
/// let space = FnSpace::new(
///     |s: &i32| s.to_string(),
///     |s: &i32, buf: &mut Vec<i32>| buf.extend([s - 1, s + 1]),
///     |s: &i32, t: &i32| (s - t).abs(),
///     |s: &i32, t: &i32| s == t,
///     |a: &i32, b: &i32| (a - b).abs(),
/// );
/// let result = PathFinder::new(space).find_path(&[0], &3);
/// assert_eq!(result.steps, vec![0, 1, 2, 3]);
/// ```
pub struct FnSpace<S, H, N, E, T, C> {
    hash: H,
    neighbors: N,
    estimate: E,
    is_target: T,
    cost: C,
    _state: PhantomData<fn(&S)>,
}

impl<S, H, N, E, T, C> FnSpace<S, H, N, E, T, C>
where
    H: Fn(&S) -> String,
    N: Fn(&S, &mut Vec<S>),
    E: Fn(&S, &S) -> i32,
    T: Fn(&S, &S) -> bool,
    C: Fn(&S, &S) -> i32,
{
    /// Bundle the five operations into a search space.
    pub fn new(hash: H, neighbors: N, estimate: E, is_target: T, cost: C) -> Self {
        Self {
            hash,
            neighbors,
            estimate,
            is_target,
            cost,
            _state: PhantomData,
        }
    }
}

impl<S, H, N, E, T, C> SearchSpace for FnSpace<S, H, N, E, T, C>
where
    H: Fn(&S) -> String,
    N: Fn(&S, &mut Vec<S>),
    E: Fn(&S, &S) -> i32,
    T: Fn(&S, &S) -> bool,
    C: Fn(&S, &S) -> i32,
{
    type State = S;

    fn hash(&self, state: &S) -> String {
        (self.hash)(state)
    }

    fn neighbors(&self, state: &S, buf: &mut Vec<S>) {
        (self.neighbors)(state, buf);
    }

    fn estimate(&self, state: &S, target: &S) -> i32 {
        (self.estimate)(state, target)
    }

    fn is_target(&self, state: &S, target: &S) -> bool {
        (self.is_target)(state, target)
    }

    fn cost(&self, from: &S, to: &S) -> i32 {
        (self.cost)(from, to)
    }
}
