use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::hash::Hash;

use crate::{Grid, SearchError, StateSpace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(steps: usize) -> Self {
        if steps % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

/// Result of a layered BFS: the step at which each state was first reached.
#[derive(Debug, Clone)]
pub struct Reached<S> {
    steps: HashMap<S, usize>,
    step_budget: usize,
    exhausted: bool,
}

impl<S: Eq + Hash> Reached<S> {
    pub fn steps(&self) -> &HashMap<S, usize> {
        &self.steps
    }

    pub fn into_steps(self) -> HashMap<S, usize> {
        self.steps
    }

    pub fn step_of(&self, state: &S) -> Option<usize> {
        self.steps.get(state).copied()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// States first reached on a step of the given parity.
    pub fn with_parity(&self, parity: Parity) -> impl Iterator<Item = (&S, usize)> {
        self.steps
            .iter()
            .filter(move |(_, &k)| Parity::of(k) == parity)
            .map(|(state, &k)| (state, k))
    }

    /// How many states a walker can stand on after exactly `steps` moves.
    ///
    /// A state first reached at step `k` stays reachable at `k + 2`, `k + 4`
    /// and so on by stepping back and forth, so this counts the states with
    /// `k <= steps` and the same parity as `steps`. Returns `None` when
    /// `steps` lies beyond what the search explored.
    pub fn count_exactly(&self, steps: usize) -> Option<usize> {
        if steps > self.step_budget && !self.exhausted {
            return None;
        }

        let parity = Parity::of(steps);
        Some(
            self.with_parity(parity)
                .filter(|&(_, k)| k <= steps)
                .count(),
        )
    }
}

/// Breadth-first search, one whole layer at a time, for at most
/// `step_budget` layers.
#[tracing::instrument(skip_all, fields(step_budget = step_budget))]
pub fn bfs_reachable<S: StateSpace>(
    grid: &Grid<S::Cell>,
    space: &S,
    start: S::State,
    step_budget: usize,
) -> Result<Reached<S::State>, SearchError> {
    space.validate(&start)?;

    let mut steps = HashMap::from([(start.clone(), 0)]);
    let mut frontier = vec![start];
    let mut level = 0;

    while level < step_budget && !frontier.is_empty() {
        level += 1;

        let mut next = Vec::with_capacity(frontier.len() * 2);
        for state in &frontier {
            for (neighbor, _) in space.neighbors(grid, state) {
                space.validate(&neighbor)?;
                if let Entry::Vacant(slot) = steps.entry(neighbor) {
                    next.push(slot.key().clone());
                    slot.insert(level);
                }
            }
        }
        frontier = next;
    }

    tracing::debug!(reached = steps.len(), level, "bfs finished");

    Ok(Reached {
        steps,
        step_budget,
        exhausted: frontier.is_empty(),
    })
}

/// Visits everything reachable from `start` and returns the visited states.
#[tracing::instrument(skip_all)]
pub fn bfs_loop<S: StateSpace>(
    grid: &Grid<S::Cell>,
    space: &S,
    start: S::State,
) -> Result<HashSet<S::State>, SearchError> {
    space.validate(&start)?;

    let mut visited = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([start]);

    while let Some(state) = queue.pop_front() {
        for (neighbor, _) in space.neighbors(grid, &state) {
            space.validate(&neighbor)?;
            if visited.insert(neighbor.clone()) {
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(visited = visited.len(), "queue exhausted");

    Ok(visited)
}

/// A queued state ordered so that [`BinaryHeap`] pops the cheapest first.
#[derive(Debug)]
struct Queued<S> {
    cost: u64,
    state: S,
}

impl<S> PartialEq for Queued<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl<S> Eq for Queued<S> {}

impl<S> PartialOrd for Queued<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Queued<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}

/// Cheapest cumulative cost from any of `starts` to a goal state.
///
/// Step costs must be non-negative, which makes the first goal popped off the
/// queue optimal.
#[tracing::instrument(skip_all)]
pub fn dijkstra<S: StateSpace>(
    grid: &Grid<S::Cell>,
    space: &S,
    starts: impl IntoIterator<Item = (S::State, u64)>,
) -> Result<u64, SearchError> {
    relax(grid, space, starts, |_, _| {})
}

/// Dijkstra with a hook that sees every state as it is finalized.
fn relax<S: StateSpace>(
    grid: &Grid<S::Cell>,
    space: &S,
    starts: impl IntoIterator<Item = (S::State, u64)>,
    mut on_finalize: impl FnMut(&S::State, u64),
) -> Result<u64, SearchError> {
    let mut best: HashMap<S::State, u64> = HashMap::new();
    let mut finalized: HashSet<S::State> = HashSet::new();
    let mut queue = BinaryHeap::new();

    for (state, cost) in starts {
        space.validate(&state)?;
        if best.get(&state).is_none_or(|&known| cost < known) {
            best.insert(state.clone(), cost);
            queue.push(Queued { cost, state });
        }
    }

    while let Some(Queued { cost, state }) = queue.pop() {
        // Stale copy, a cheaper one was popped first
        if !finalized.insert(state.clone()) {
            continue;
        }
        on_finalize(&state, cost);

        if space.is_goal(&state) {
            tracing::debug!(cost, finalized = finalized.len(), "goal reached");
            return Ok(cost);
        }

        for (neighbor, step) in space.neighbors(grid, &state) {
            space.validate(&neighbor)?;
            if finalized.contains(&neighbor) {
                continue;
            }

            let total = cost + step;
            if best.get(&neighbor).is_none_or(|&known| total < known) {
                best.insert(neighbor.clone(), total);
                queue.push(Queued {
                    cost: total,
                    state: neighbor,
                });
            }
        }
    }

    Err(SearchError::UnreachableGoal {
        finalized: finalized.len(),
    })
}
