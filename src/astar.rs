//! Best-first grid search: A*, with Dijkstra's algorithm as the
//! zero-heuristic case.

use nonmax::NonMaxUsize;
use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;

use crate::error::SearchError;
use crate::grid::{Cost, Grid, Pos};
use crate::heap_primitives::{index_down_left, index_down_right, index_up};
use crate::heuristic::Heuristic;

/// The ranking tuple that orders the open set.
///
/// We prefer lower f-values and tie break for lower h (closer to the goal).
/// Remaining ties are broken by node creation order, FIFO, so that equal-cost
/// instances always return the same path. A node that later improves its `g`
/// keeps its creation order.
///
/// Keeping the raw h value also avoids recomputing the heuristic when `g`
/// improves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Rank {
    f: OrderedFloat<f64>,
    h: OrderedFloat<f64>,
    seq: u64,
}

impl Rank {
    fn new(g: Cost, h: f64, seq: u64) -> Self {
        Self {
            f: OrderedFloat(f64::from(g) + h),
            h: OrderedFloat(h),
            seq,
        }
    }

    /// Improves `g` in `Rank{f, h}` without recomputing `h`.
    fn improve_g(&mut self, new_g: Cost) {
        self.f = OrderedFloat(f64::from(new_g) + self.h.0);
    }
}

/// One visited-or-frontier cell. Nodes live in the search's arena and do not
/// outlive a single `search` call.
#[derive(Debug)]
#[cfg_attr(feature = "inspect", derive(Clone))]
struct SearchNode {
    /// Arena index of the node this one was reached from; `None` for starts.
    parent: Option<NonMaxUsize>,
    pos: Pos,
    /// Accumulated cost of the best known path from the start.
    g: Cost,
    /// Heuristic estimate to the goal.
    h: f64,
    heap_index: usize,
}

impl SearchNode {
    fn new(heap_index: usize, pos: Pos, parent: Option<NonMaxUsize>, g: Cost, h: f64) -> Self {
        Self {
            parent,
            pos,
            g,
            h,
            heap_index,
        }
    }

    /// Gives this node a better path through a new parent.
    fn reach(&mut self, new_parent: NonMaxUsize, g: Cost) {
        debug_assert!(g < self.g);
        self.parent = Some(new_parent);
        self.g = g;
    }

    fn rank(&self, seq: u64) -> Rank {
        Rank::new(self.g, self.h, seq)
    }
}

#[derive(Debug)]
#[cfg_attr(feature = "inspect", derive(Clone))]
struct HeapNode {
    rank: Rank,
    /// The index of this node in the node arena.
    node_index: usize,
}

/// How a search ended.
///
/// `NoPath` and `Truncated` are normal outcomes, not errors: a disconnected
/// grid and an exhausted expansion budget are expected results the caller must
/// be able to tell apart from a goal-reaching path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was reached; `path` is minimum-cost for admissible heuristics.
    Found {
        path: Vec<Pos>,
        cost: Cost,
        expanded: usize,
    },
    /// The expansion budget ran out. `path` leads to the last expanded node,
    /// not the goal, and optimality is not guaranteed.
    Truncated {
        path: Vec<Pos>,
        cost: Cost,
        expanded: usize,
    },
    /// The open set emptied without reaching the goal.
    NoPath { expanded: usize },
}

impl SearchOutcome {
    #[must_use]
    pub fn path(&self) -> Option<&[Pos]> {
        match self {
            Self::Found { path, .. } | Self::Truncated { path, .. } => Some(path),
            Self::NoPath { .. } => None,
        }
    }

    #[must_use]
    pub fn cost(&self) -> Option<Cost> {
        match self {
            Self::Found { cost, .. } | Self::Truncated { cost, .. } => Some(*cost),
            Self::NoPath { .. } => None,
        }
    }

    #[must_use]
    pub fn expanded(&self) -> usize {
        match self {
            Self::Found { expanded, .. }
            | Self::Truncated { expanded, .. }
            | Self::NoPath { expanded } => *expanded,
        }
    }

    #[must_use]
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }

    #[must_use]
    pub fn reached_goal(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Runs a best-first search from `start` to `goal` over `grid`.
///
/// `max_expansions` bounds how many nodes may be finalized before the search
/// gives up with [`SearchOutcome::Truncated`]; pass `usize::MAX` for an
/// effectively unbounded search.
///
/// Fails fast with [`SearchError::InvalidStart`]/[`SearchError::InvalidGoal`]
/// when an endpoint is out of bounds or impassable, before any expansion.
pub fn search(
    grid: &Grid,
    start: Pos,
    goal: Pos,
    heuristic: Heuristic,
    allow_diagonal: bool,
    max_expansions: usize,
) -> Result<SearchOutcome, SearchError> {
    if !grid.is_traversable(start) {
        return Err(SearchError::InvalidStart { pos: start });
    }
    if !grid.is_traversable(goal) {
        return Err(SearchError::InvalidGoal { pos: goal });
    }
    Ok(AStarSearch::new(grid, start, goal, heuristic, allow_diagonal).run(max_expansions))
}

struct AStarSearch<'g> {
    grid: &'g Grid,
    goal: Pos,
    heuristic: Heuristic,
    allow_diagonal: bool,

    /// Node arena; parent handles index into it.
    nodes: Vec<SearchNode>,
    /// Intrusive heap of `(Rank, node index)` that keeps the referenced node
    /// updated (`SearchNode::heap_index`), so a node can be re-ranked without
    /// a linear scan for its entry.
    open: Vec<HeapNode>,
    /// Amalgamation of,
    /// - the `HashMap<Pos, &Node>`, but using just the node index
    /// - the "closed set" `HashSet<Pos>`
    node_map: FxHashMap<Pos, (usize, bool)>,

    /// Creation-order counter backing the FIFO tie-break.
    next_seq: u64,
}

impl<'g> AStarSearch<'g> {
    #[must_use]
    fn new(
        grid: &'g Grid,
        start: Pos,
        goal: Pos,
        heuristic: Heuristic,
        allow_diagonal: bool,
    ) -> Self {
        let mut search = Self {
            grid,
            goal,
            heuristic,
            allow_diagonal,
            nodes: vec![],
            open: vec![],
            node_map: FxHashMap::default(),
            next_seq: 0,
        };

        let h = heuristic.estimate(start, goal);
        search.push(start, None, 0, h);
        search
    }

    fn run(mut self, max_expansions: usize) -> SearchOutcome {
        let mut expanded = 0usize;
        let mut last_expanded: Option<usize> = None;

        while expanded < max_expansions {
            let Some(node_index) = self.pop() else {
                return SearchOutcome::NoPath { expanded };
            };
            let pos = self.nodes[node_index].pos;
            let g = self.nodes[node_index].g;
            debug_assert!(!self.is_closed(pos));

            // Finalize: no position is expanded twice.
            self.mark_closed(pos);
            expanded += 1;
            last_expanded = Some(node_index);

            if pos == self.goal {
                return SearchOutcome::Found {
                    path: self.build_path(node_index),
                    cost: g,
                    expanded,
                };
            }

            // Arena indices are Vec positions; they never reach usize::MAX.
            let parent = NonMaxUsize::new(node_index).unwrap();

            for n in self.grid.neighbors(pos, self.allow_diagonal) {
                if !self.grid.is_traversable(n) {
                    continue;
                }
                let tentative = g.saturating_add(self.grid.entry_cost(n));

                match self.node_map.get(&n).copied() {
                    Some((_, true)) => {
                        // Already finalized; a rediscovery is never an
                        // improvement under an admissible heuristic.
                        continue;
                    }
                    Some((neigh_index, false)) => {
                        // Known frontier node: retain only the best g.
                        let neigh = &mut self.nodes[neigh_index];
                        if tentative < neigh.g {
                            let heap_index = neigh.heap_index;
                            neigh.reach(parent, tentative);
                            self.open[heap_index].rank.improve_g(tentative);
                            self.sift_up(heap_index);
                        }
                    }
                    None => {
                        let h = self.heuristic.estimate(n, self.goal);
                        self.push(n, Some(parent), tentative, h);
                    }
                }
            }
        }

        // Budget exhausted: surface the path to the most recently expanded
        // node, flagged so the caller cannot mistake it for a complete path.
        match last_expanded {
            Some(node_index) => SearchOutcome::Truncated {
                cost: self.nodes[node_index].g,
                path: self.build_path(node_index),
                expanded,
            },
            None => SearchOutcome::Truncated {
                path: vec![],
                cost: 0,
                expanded,
            },
        }
    }

    /// Walks parent handles back to the start and reverses.
    #[must_use]
    fn build_path(&self, node_index: usize) -> Vec<Pos> {
        let mut node = &self.nodes[node_index];
        let mut path = vec![node.pos];
        while let Some(parent) = node.parent {
            node = &self.nodes[parent.get()];
            path.push(node.pos);
        }
        path.reverse();
        path
    }

    #[inline(always)]
    #[must_use]
    fn is_closed(&self, pos: Pos) -> bool {
        match self.node_map.get(&pos) {
            Some((_, closed)) => *closed,
            None => false,
        }
    }

    #[inline(always)]
    fn mark_closed(&mut self, pos: Pos) {
        match self.node_map.get_mut(&pos) {
            Some((_, closed)) => {
                // Membership is monotonic; nothing ever leaves the closed set.
                debug_assert!(!*closed);
                *closed = true;
            }
            None => {
                unreachable!("Tried closing a position without a node");
            }
        }
    }

    #[inline(always)]
    #[must_use]
    fn pop(&mut self) -> Option<usize> {
        match self.open.len() {
            0 | 1 => self.open.pop().map(|n| n.node_index),
            _ => {
                self.verify_heap();
                let node_index = self.pop_non_trivial();
                self.verify_heap();
                Some(node_index)
            }
        }
    }

    fn push(&mut self, pos: Pos, parent: Option<NonMaxUsize>, g: Cost, h: f64) {
        self.verify_heap();
        debug_assert!(!self.is_closed(pos));

        let node_index = self.nodes.len();
        let heap_index = self.open.len();
        let seq = self.next_seq;
        self.next_seq += 1;

        let node = SearchNode::new(heap_index, pos, parent, g, h);
        let rank = node.rank(seq);
        self.nodes.push(node);
        self.node_map.insert(pos, (node_index, false));
        self.open.push(HeapNode { rank, node_index });
        self.sift_up(heap_index);

        self.verify_heap();
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    fn verify_heap(&self) {
        // All good... (hopefully)
    }
    #[cfg(feature = "verify")]
    fn verify_heap(&self) {
        // Every node,
        for (i, e) in self.open.iter().enumerate() {
            // - Has the right intrusive index set.
            debug_assert!(self.nodes[e.node_index].heap_index == i);

            // - Goes after its parent node, if any.
            if i == 0 {
                continue;
            }
            let p = index_up(i);
            debug_assert!(
                self.open[p].rank <= self.open[i].rank,
                "Node[{p}]={:?} !<= child [{i}]={:?}. Out of heap of len={}",
                self.open[p],
                self.open[i],
                self.open.len(),
            );
        }
    }

    /// Pops the top node from a heap with at least 2 elements.
    ///
    /// Works by unfairly sifting the top node down to the last level, where it
    /// can be swapped with the very last element of the array and popped.
    /// Temporarily breaks invariants around the node sifting down unfairly.
    fn pop_non_trivial(&mut self) -> usize {
        debug_assert!(self.open.len() >= 2);

        let last = self.open.len() - 1;

        // 1. Pretend there is a hole at the root and bubble elements up until
        //    the hole reaches the bottom level.
        // 2. If the hole is not the last element, swap it with the last one.
        // 3. The last element now holds what was the top of the heap; pop it.
        let mut hole = 0;
        let mut child = index_down_left(hole);
        debug_assert!(child < self.open.len());

        loop {
            // Find the best child.
            let child_r = index_down_right(hole);
            if child_r < self.open.len() && self.open[child_r].rank < self.open[child].rank {
                child = child_r;
            }
            debug_assert!(self.open[hole].rank <= self.open[child].rank);

            self.half_swap_down(hole, child);

            hole = child;
            child = index_down_left(hole);
            if child >= self.open.len() {
                break;
            }
        }
        // The hole made it to the last level, but maybe not to the very end of
        // the array.
        debug_assert!(hole <= last && hole > index_up(last));
        if hole != last {
            self.half_swap_down(hole, last);
            self.sift_up(hole);
        }

        let heap_node = self.open.pop().unwrap();
        debug_assert_eq!(
            self.nodes[heap_node.node_index].heap_index, 0,
            "Top node half-swapped down should still have its 0 index"
        );

        heap_node.node_index
    }

    /// Raises a node. Returns its new index.
    fn sift_up(&mut self, index: usize) -> usize {
        debug_assert!(index < self.open.len());
        debug_assert_eq!(
            self.nodes[self.open[index].node_index].heap_index, index,
            "Node is out of sync."
        );

        // Can't improve
        if index == 0 {
            return index;
        }

        let mut pos = index;
        let mut parent = index_up(pos);
        while self.open[parent].rank > self.open[pos].rank {
            self.swap(parent, pos);

            if parent == 0 {
                return parent;
            }
            pos = parent;
            parent = index_up(pos);
        }
        pos
    }

    // Swapping primitives

    /// Swaps two elements in the heap, keeping both intrusive indices in sync.
    ///
    /// For consistency in calling code `l < r` is checked.
    #[inline(always)]
    fn swap(&mut self, l: usize, r: usize) {
        debug_assert!(l < r, "Swap({l}, {r}) uses wrong argument order");
        debug_assert!(r < self.open.len());

        self.open.swap(l, r);
        self.nodes[self.open[l].node_index].heap_index = l;
        self.nodes[self.open[r].node_index].heap_index = r;
        debug_assert!(
            self.open[l].rank <= self.open[r].rank,
            "Swaps must locally restore the heap invariant."
        );
    }

    /// Swaps two elements in the heap, only keeping the index of the element
    /// going up in sync; the element going down is about to be removed.
    #[inline(always)]
    fn half_swap_down(&mut self, l: usize, r: usize) {
        debug_assert!(l < r, "HalfSwapDown({l}, {r}) is wrong");
        debug_assert!(r < self.open.len());

        self.open.swap(l, r);
        self.nodes[self.open[l].node_index].heap_index = l;
        debug_assert!(
            self.open[l].rank >= self.open[r].rank,
            "Half swap down must be unfairly pushing a node down."
        );
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::generator::generate;

    const ALL_HEURISTICS: [Heuristic; 3] =
        [Heuristic::Zero, Heuristic::Manhattan, Heuristic::Euclidean];

    fn grid(s: &str) -> Grid {
        Grid::try_from(s).unwrap()
    }

    /// Exhaustive minimum cost over all simple paths; ground truth on small
    /// grids.
    fn brute_force_cost(
        grid: &Grid,
        start: Pos,
        goal: Pos,
        allow_diagonal: bool,
    ) -> Option<Cost> {
        fn go(
            grid: &Grid,
            pos: Pos,
            goal: Pos,
            allow_diagonal: bool,
            visited: &mut FxHashSet<Pos>,
            g: Cost,
            best: &mut Option<Cost>,
        ) {
            if pos == goal {
                if best.map_or(true, |b| g < b) {
                    *best = Some(g);
                }
                return;
            }
            for n in grid.neighbors(pos, allow_diagonal) {
                if grid.is_traversable(n) && visited.insert(n) {
                    go(
                        grid,
                        n,
                        goal,
                        allow_diagonal,
                        visited,
                        g + grid.entry_cost(n),
                        best,
                    );
                    visited.remove(&n);
                }
            }
        }

        let mut best = None;
        let mut visited = FxHashSet::default();
        visited.insert(start);
        go(grid, start, goal, allow_diagonal, &mut visited, 0, &mut best);
        best
    }

    #[test]
    fn rank_ordering() {
        let r = Rank::new;
        // Lower f first.
        assert!(r(1, 0.0, 0) < r(2, 0.0, 0));
        // f ties broken by lower h.
        assert!(r(2, 0.0, 1) < r(0, 2.0, 0));
        // Full ties broken FIFO by creation order.
        assert!(r(2, 0.0, 0) < r(2, 0.0, 1));
        // improve_g lowers f but keeps the creation order.
        let mut improved = r(5, 1.0, 3);
        improved.improve_g(2);
        assert_eq!(improved, r(2, 1.0, 3));
    }

    #[test]
    fn start_equals_goal() {
        let g = grid("1 1\n1 1");
        let p = Pos::new(1, 1);
        for h in ALL_HEURISTICS {
            let outcome = search(&g, p, p, h, false, usize::MAX).unwrap();
            assert_eq!(
                outcome,
                SearchOutcome::Found {
                    path: vec![p],
                    cost: 0,
                    expanded: 1,
                }
            );
        }
    }

    #[test]
    fn three_by_three_orthogonal() {
        let g = grid(indoc! {"
            1 1 1
            1 1 1
            1 1 1
        "});
        let outcome = search(
            &g,
            Pos::new(0, 0),
            Pos::new(2, 2),
            Heuristic::Zero,
            false,
            usize::MAX,
        )
        .unwrap();
        let path = outcome.path().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], Pos::new(0, 0));
        assert_eq!(path[4], Pos::new(2, 2));
        assert_eq!(outcome.cost(), Some(4));
    }

    #[test]
    fn three_by_three_diagonal() {
        let g = grid(indoc! {"
            1 1 1
            1 1 1
            1 1 1
        "});
        let outcome = search(
            &g,
            Pos::new(0, 0),
            Pos::new(2, 2),
            Heuristic::Zero,
            true,
            usize::MAX,
        )
        .unwrap();
        assert_eq!(outcome.path().map(<[Pos]>::len), Some(3));
        assert_eq!(outcome.cost(), Some(2));
    }

    #[test]
    fn fifo_tie_break_is_deterministic() {
        // Two equal-cost routes; FIFO creation order picks the one through the
        // top row, and repeated runs agree exactly.
        let g = grid("1 1 1\n1 1 1");
        let run = || {
            search(
                &g,
                Pos::new(0, 0),
                Pos::new(1, 2),
                Heuristic::Zero,
                false,
                usize::MAX,
            )
            .unwrap()
        };
        let outcome = run();
        assert_eq!(outcome, run());
        assert_eq!(
            outcome,
            SearchOutcome::Found {
                path: vec![
                    Pos::new(0, 0),
                    Pos::new(0, 1),
                    Pos::new(0, 2),
                    Pos::new(1, 2),
                ],
                cost: 3,
                expanded: 6,
            }
        );
    }

    #[test]
    fn start_entry_cost_is_not_charged() {
        let g = grid("9 1\n1 1");
        let outcome = search(
            &g,
            Pos::new(0, 0),
            Pos::new(1, 1),
            Heuristic::Zero,
            false,
            usize::MAX,
        )
        .unwrap();
        assert_eq!(outcome.cost(), Some(2));
    }

    #[test]
    fn dijkstra_matches_brute_force_on_fixture() {
        let g = grid(indoc! {"
            1 3 1 1
            1 0 9 1
            2 1 1 5
            0 4 1 1
        "});
        let (start, goal) = (Pos::new(0, 0), Pos::new(3, 3));
        for allow_diagonal in [false, true] {
            let expected = brute_force_cost(&g, start, goal, allow_diagonal);
            let outcome =
                search(&g, start, goal, Heuristic::Zero, allow_diagonal, usize::MAX).unwrap();
            assert_eq!(outcome.cost(), expected);
        }
    }

    #[test]
    fn dijkstra_matches_brute_force_on_generated_grids() {
        for seed in 0..6u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let g = generate(&mut rng, 5, seed % 2 == 0);
            let (rows, cols) = g.dimensions();
            let traversable: Vec<Pos> = (0..rows)
                .flat_map(|r| (0..cols).map(move |c| Pos::new(r, c)))
                .filter(|&p| g.is_traversable(p))
                .collect();
            if traversable.len() < 2 {
                continue;
            }
            let (start, goal) = (traversable[0], *traversable.last().unwrap());

            let expected = brute_force_cost(&g, start, goal, false);
            let outcome = search(&g, start, goal, Heuristic::Zero, false, usize::MAX).unwrap();
            match expected {
                Some(cost) => assert_eq!(outcome.cost(), Some(cost), "seed {seed}"),
                None => assert!(
                    matches!(outcome, SearchOutcome::NoPath { .. }),
                    "seed {seed}"
                ),
            }
        }
    }

    #[test]
    fn admissible_heuristics_preserve_optimality() {
        // Orthogonal movement: all three heuristics are admissible and must
        // agree on cost; only the expansion count may shrink.
        let g = grid(indoc! {"
            1 3 1 1
            1 0 9 1
            2 1 1 5
            0 4 1 1
        "});
        let (start, goal) = (Pos::new(0, 0), Pos::new(3, 3));
        let baseline = search(&g, start, goal, Heuristic::Zero, false, usize::MAX).unwrap();
        for h in [Heuristic::Manhattan, Heuristic::Euclidean] {
            let outcome = search(&g, start, goal, h, false, usize::MAX).unwrap();
            assert_eq!(outcome.cost(), baseline.cost(), "{h}");
        }
    }

    #[test]
    fn informed_heuristic_expands_no_more_nodes() {
        let g = Grid::new(vec![vec![1; 10]; 10]).unwrap();
        let (start, goal) = (Pos::new(0, 0), Pos::new(9, 9));
        let zero = search(&g, start, goal, Heuristic::Zero, false, usize::MAX).unwrap();
        let euclidean = search(&g, start, goal, Heuristic::Euclidean, false, usize::MAX).unwrap();
        assert_eq!(euclidean.cost(), zero.cost());
        assert!(euclidean.expanded() <= zero.expanded());
    }

    #[test]
    fn disconnected_grid_reports_no_path() {
        let g = grid(indoc! {"
            1 0 0
            0 0 0
            0 0 1
        "});
        let outcome = search(
            &g,
            Pos::new(0, 0),
            Pos::new(2, 2),
            Heuristic::Zero,
            false,
            usize::MAX,
        )
        .unwrap();
        assert_eq!(outcome, SearchOutcome::NoPath { expanded: 1 });
    }

    #[test]
    fn invalid_endpoints_fail_before_expansion() {
        let g = grid("1 0\n1 1");
        let wall = Pos::new(0, 1);
        let out = Pos::new(5, 5);
        let ok = Pos::new(0, 0);

        assert_eq!(
            search(&g, wall, ok, Heuristic::Zero, false, usize::MAX),
            Err(SearchError::InvalidStart { pos: wall })
        );
        assert_eq!(
            search(&g, out, ok, Heuristic::Zero, false, usize::MAX),
            Err(SearchError::InvalidStart { pos: out })
        );
        assert_eq!(
            search(&g, ok, wall, Heuristic::Zero, false, usize::MAX),
            Err(SearchError::InvalidGoal { pos: wall })
        );
        assert_eq!(
            search(&g, ok, out, Heuristic::Zero, false, usize::MAX),
            Err(SearchError::InvalidGoal { pos: out })
        );
    }

    #[test]
    fn path_routes_through_the_only_gap() {
        let g = grid(indoc! {"
            1 1 0 1 1
            1 1 0 1 1
            1 1 0 1 1
            1 1 1 1 1
            1 1 0 1 1
        "});
        let gap = Pos::new(3, 2);
        for h in ALL_HEURISTICS {
            let outcome = search(&g, Pos::new(0, 0), Pos::new(0, 4), h, false, usize::MAX).unwrap();
            assert!(outcome.reached_goal());
            assert!(outcome.path().unwrap().contains(&gap), "{h}");
        }
    }

    #[test]
    fn exhausted_budget_is_flagged_truncated() {
        let g = grid(indoc! {"
            1 1 1
            1 1 1
            1 1 1
        "});
        let outcome = search(
            &g,
            Pos::new(0, 0),
            Pos::new(2, 2),
            Heuristic::Zero,
            false,
            1,
        )
        .unwrap();
        assert!(outcome.is_truncated());
        assert!(!outcome.reached_goal());
        // The partial path leads to the only expanded node: the start.
        assert_eq!(
            outcome,
            SearchOutcome::Truncated {
                path: vec![Pos::new(0, 0)],
                cost: 0,
                expanded: 1,
            }
        );
    }

    #[test]
    fn zero_budget_expands_nothing() {
        let g = grid("1 1\n1 1");
        let outcome = search(
            &g,
            Pos::new(0, 0),
            Pos::new(1, 1),
            Heuristic::Zero,
            false,
            0,
        )
        .unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Truncated {
                path: vec![],
                cost: 0,
                expanded: 0,
            }
        );
    }

    #[test]
    fn budget_does_not_mask_a_trivial_goal() {
        let g = grid("1 1\n1 1");
        let p = Pos::new(0, 0);
        let outcome = search(&g, p, p, Heuristic::Zero, false, 1).unwrap();
        assert!(outcome.reached_goal());
    }
}
