use std::collections::HashSet;

use gridstar_core::Cell;

use crate::config::SearchConfig;
use crate::cost::CostMap;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::trace::{Phase, Trace};
use crate::traits::GridModel;

/// Result of [`search_with`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    /// Start-to-goal cells, or empty if the goal was not reached.
    pub path: Vec<Cell>,
    /// Exploration events in emission order.
    pub trace: Trace,
    /// Edge count of `path`, if one was found.
    pub cost: Option<u32>,
    /// Number of finalized cells.
    pub expanded: usize,
    /// Largest frontier size, stale entries included.
    pub max_frontier: usize,
    /// Whether the search stopped at [`SearchConfig::max_expansions`].
    pub truncated: bool,
}

impl SearchOutcome {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Compute an optimal 4-directional path from `start` to `goal` with A*
/// under the Euclidean heuristic.
///
/// Returns the path (empty if the goal is unreachable) and the exploration
/// trace. Fails if an endpoint is out of bounds or an obstacle.
pub fn search<G: GridModel>(
    grid: &G,
    start: Cell,
    goal: Cell,
) -> Result<(Vec<Cell>, Trace), SearchError> {
    let outcome = search_with(grid, start, goal, &SearchConfig::default())?;
    Ok((outcome.path, outcome.trace))
}

/// Run A* with explicit options.
///
/// Both endpoints are bounds-checked before either is checked for
/// passability. `start == goal` yields a one-cell path and an empty trace.
pub fn search_with<G: GridModel>(
    grid: &G,
    start: Cell,
    goal: Cell,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    let start_ok = grid.is_passable(start)?;
    let goal_ok = grid.is_passable(goal)?;
    if !start_ok {
        return Err(SearchError::InvalidEndpoint { cell: start });
    }
    if !goal_ok {
        return Err(SearchError::InvalidEndpoint { cell: goal });
    }

    if start == goal {
        return Ok(SearchOutcome {
            path: vec![start],
            cost: Some(0),
            ..SearchOutcome::default()
        });
    }

    log::debug!(
        "astar: {start} -> {goal} on {:?} grid, heuristic {}",
        grid.dimensions(),
        config.heuristic
    );

    let estimate = |c: Cell| config.heuristic.estimate(c, Some(goal));

    let mut costs = CostMap::new(start);
    let mut frontier = Frontier::new();
    frontier.push(start, estimate(start));
    let mut closed: HashSet<Cell> = HashSet::new();
    let mut trace = Trace::new();
    let mut truncated = false;
    let mut nbuf = Vec::with_capacity(4);

    let found = 'search: loop {
        let Some(entry) = frontier.pop() else {
            break 'search false;
        };
        let current = entry.cell;

        // Skip stale entries.
        if closed.contains(&current) {
            continue;
        }

        if current == goal {
            break 'search true;
        }

        if config.max_expansions.is_some_and(|max| closed.len() >= max) {
            truncated = true;
            break 'search false;
        }

        // Every pushed cell already has a cost record.
        let Some(current_g) = costs.cost(current) else {
            debug_assert!(false, "astar: {current} popped without a cost record");
            continue;
        };
        closed.insert(current);
        trace.push(current, Phase::Finalized);
        log::trace!("astar: finalize {current} g={current_g} f={:.3}", entry.priority);

        nbuf.clear();
        grid.neighbors(current, &mut nbuf);

        for &n in nbuf.iter() {
            let tentative_g = current_g + 1;
            if costs.relax(n, current, tentative_g) {
                frontier.push(n, f64::from(tentative_g) + estimate(n));
                trace.push(n, Phase::AddedToFrontier);
            }
        }
    };

    let (path, cost) = if found {
        (costs.path_to(goal), costs.cost(goal))
    } else {
        (Vec::new(), None)
    };

    log::debug!(
        "astar: {} after {} expansions ({} cells reached, frontier peak {}){}",
        match cost {
            Some(c) => format!("found cost {c}"),
            None => "no path".to_string(),
        },
        closed.len(),
        costs.len(),
        frontier.high_water(),
        if truncated { ", expansion cap hit" } else { "" }
    );

    Ok(SearchOutcome {
        path,
        trace,
        cost,
        expanded: closed.len(),
        max_frontier: frontier.high_water(),
        truncated,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use gridstar_core::{CellState, Grid};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::distance::{Heuristic, manhattan};
    use crate::path::validate_path;

    fn cells(v: &[(i32, i32)]) -> Vec<Cell> {
        v.iter().map(|&(r, c)| Cell::new(r, c)).collect()
    }

    fn walls(rows: i32, cols: i32, obstacles: &[(i32, i32)]) -> Grid {
        let mut g = Grid::new(rows, cols);
        for &(r, c) in obstacles {
            g.set(Cell::new(r, c), CellState::Obstacle);
        }
        g
    }

    /// Independent shortest distance by breadth-first search.
    fn bfs_distance(grid: &Grid, from: Cell, to: Cell) -> Option<u32> {
        let mut dist = std::collections::HashMap::new();
        let mut queue = VecDeque::new();
        dist.insert(from, 0u32);
        queue.push_back(from);
        while let Some(c) = queue.pop_front() {
            if c == to {
                return dist.get(&c).copied();
            }
            let d = dist[&c];
            for n in grid.passable_neighbors(c) {
                if !dist.contains_key(&n) {
                    dist.insert(n, d + 1);
                    queue.push_back(n);
                }
            }
        }
        None
    }

    fn random_grid(rng: &mut StdRng, rows: i32, cols: i32, density: f64) -> Grid {
        let mut g = Grid::new(rows, cols);
        for c in g.bounds() {
            if rng.random_bool(density) {
                g.set(c, CellState::Obstacle);
            }
        }
        g
    }

    #[test]
    fn open_3x3_corner_to_corner() {
        let g = Grid::new(3, 3);
        let (path, trace) = search(&g, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&Cell::new(0, 0)));
        assert_eq!(path.last(), Some(&Cell::new(2, 2)));
        assert!(validate_path(&g, &path));
        assert!(!trace.is_empty());
    }

    #[test]
    fn open_3x3_takes_south_first() {
        // South is enumerated first and ties pop first-in-first-out.
        let g = Grid::new(3, 3);
        let (path, _) = search(&g, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert_eq!(path, cells(&[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)]));
    }

    #[test]
    fn routes_through_only_corridor() {
        let g = walls(3, 3, &[(1, 1), (1, 2)]);
        let (path, _) = search(&g, Cell::new(0, 0), Cell::new(2, 0)).unwrap();
        assert_eq!(path, cells(&[(0, 0), (1, 0), (2, 0)]));
    }

    #[test]
    fn detours_around_wall() {
        // ....
        // ###.
        // ....
        let g = walls(3, 4, &[(1, 0), (1, 1), (1, 2)]);
        let (path, _) = search(&g, Cell::new(0, 0), Cell::new(2, 0)).unwrap();
        assert_eq!(path.len(), 9);
        assert!(validate_path(&g, &path));
        assert!(path.contains(&Cell::new(1, 3)));
    }

    #[test]
    fn start_equals_goal() {
        let g = Grid::new(4, 4);
        let c = Cell::new(2, 1);
        let (path, trace) = search(&g, c, c).unwrap();
        assert_eq!(path, vec![c]);
        assert!(trace.is_empty());
    }

    #[test]
    fn boxed_in_start_finalizes_only_itself() {
        let g = walls(3, 3, &[(1, 0), (0, 1)]);
        let (path, trace) = search(&g, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert!(path.is_empty());
        assert_eq!(
            trace.events(),
            &[crate::TraceEvent {
                cell: Cell::new(0, 0),
                phase: Phase::Finalized
            }]
        );
    }

    #[test]
    fn enclosed_goal_explores_every_reachable_cell() {
        // Goal (4,4) is walled off by (3,4) and (4,3).
        let g = walls(5, 5, &[(3, 4), (4, 3)]);
        let (path, trace) = search(&g, Cell::new(0, 0), Cell::new(4, 4)).unwrap();
        assert!(path.is_empty());
        let finalized: HashSet<_> = trace.finalized().collect();
        assert_eq!(finalized.len(), 25 - 3);
        assert_eq!(trace.count(Phase::Finalized), finalized.len());
        assert!(!finalized.contains(&Cell::new(4, 4)));
    }

    #[test]
    fn trace_starts_with_start_then_its_neighbors() {
        let g = Grid::new(3, 3);
        let (_, trace) = search(&g, Cell::new(1, 1), Cell::new(0, 0)).unwrap();
        let first: Vec<_> = trace.iter().take(5).map(|e| (e.cell, e.phase)).collect();
        assert_eq!(
            first,
            vec![
                (Cell::new(1, 1), Phase::Finalized),
                (Cell::new(2, 1), Phase::AddedToFrontier),
                (Cell::new(0, 1), Phase::AddedToFrontier),
                (Cell::new(1, 2), Phase::AddedToFrontier),
                (Cell::new(1, 0), Phase::AddedToFrontier),
            ]
        );
    }

    #[test]
    fn goal_is_never_finalized() {
        let g = Grid::new(6, 6);
        let goal = Cell::new(5, 3);
        let (_, trace) = search(&g, Cell::new(0, 0), goal).unwrap();
        assert!(trace.finalized().all(|c| c != goal));
        assert!(trace.added().any(|c| c == goal));
    }

    #[test]
    fn cells_finalized_at_most_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut g = random_grid(&mut rng, 20, 20, 0.25);
        let start = Cell::new(0, 0);
        g.set(start, CellState::Passable);
        g.set(Cell::new(19, 19), CellState::Passable);
        let (_, trace) = search(&g, start, Cell::new(19, 19)).unwrap();
        let mut seen = HashSet::new();
        for c in trace.finalized() {
            assert!(seen.insert(c), "{c} finalized twice");
        }
    }

    #[test]
    fn open_grid_length_is_manhattan() {
        let g = Grid::new(7, 9);
        for start in g.bounds().iter().step_by(5) {
            for goal in g.bounds().iter().step_by(7) {
                let (path, _) = search(&g, start, goal).unwrap();
                assert_eq!(path.len() as i32 - 1, manhattan(start, goal));
            }
        }
    }

    #[test]
    fn matches_bfs_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..40 {
            let g = random_grid(&mut rng, 12, 15, 0.3);
            let passable: Vec<Cell> = g
                .iter()
                .filter(|(_, s)| s.is_passable())
                .map(|(c, _)| c)
                .collect();
            if passable.len() < 2 {
                continue;
            }
            let start = passable[rng.random_range(0..passable.len())];
            let goal = passable[rng.random_range(0..passable.len())];
            let expected = bfs_distance(&g, start, goal);
            for heuristic in [Heuristic::Euclidean, Heuristic::Manhattan, Heuristic::Zero] {
                let config = SearchConfig::default().with_heuristic(heuristic);
                let out = search_with(&g, start, goal, &config).unwrap();
                assert_eq!(out.cost, expected, "{heuristic} {start} -> {goal}");
                if expected.is_some() {
                    assert!(validate_path(&g, &out.path));
                    assert_eq!(out.path.len() as u32 - 1, out.cost.unwrap_or(0));
                } else {
                    assert!(out.path.is_empty());
                }
            }
        }
    }

    #[test]
    fn repeated_search_is_identical() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut g = random_grid(&mut rng, 15, 15, 0.2);
        let (start, goal) = (Cell::new(0, 0), Cell::new(14, 14));
        g.set(start, CellState::Passable);
        g.set(goal, CellState::Passable);
        let a = search(&g, start, goal).unwrap();
        let b = search(&g, start, goal).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn endpoints_out_of_bounds() {
        let g = Grid::new(3, 3);
        let err = search(&g, Cell::new(-1, 0), Cell::new(2, 2)).unwrap_err();
        assert_eq!(
            err,
            SearchError::OutOfBounds {
                cell: Cell::new(-1, 0),
                rows: 3,
                cols: 3
            }
        );
        let err = search(&g, Cell::new(0, 0), Cell::new(0, 3)).unwrap_err();
        assert_eq!(err.cell(), Cell::new(0, 3));
        assert!(matches!(err, SearchError::OutOfBounds { .. }));
    }

    #[test]
    fn endpoints_on_obstacles() {
        let g = walls(3, 3, &[(1, 1)]);
        assert_eq!(
            search(&g, Cell::new(1, 1), Cell::new(0, 0)).unwrap_err(),
            SearchError::InvalidEndpoint {
                cell: Cell::new(1, 1)
            }
        );
        assert_eq!(
            search(&g, Cell::new(0, 0), Cell::new(1, 1)).unwrap_err(),
            SearchError::InvalidEndpoint {
                cell: Cell::new(1, 1)
            }
        );
        // Same cell, still rejected.
        assert!(search(&g, Cell::new(1, 1), Cell::new(1, 1)).is_err());
    }

    #[test]
    fn bounds_are_checked_before_passability() {
        let g = walls(3, 3, &[(0, 0)]);
        let err = search(&g, Cell::new(0, 0), Cell::new(9, 9)).unwrap_err();
        assert!(matches!(err, SearchError::OutOfBounds { .. }));
    }

    #[test]
    fn expansion_cap_truncates() {
        let g = Grid::new(10, 10);
        let config = SearchConfig::default().with_max_expansions(3);
        let out = search_with(&g, Cell::new(0, 0), Cell::new(9, 9), &config).unwrap();
        assert!(out.truncated);
        assert!(out.path.is_empty());
        assert_eq!(out.cost, None);
        assert_eq!(out.expanded, 3);
        assert_eq!(out.trace.count(Phase::Finalized), 3);

        let uncapped = search_with(&g, Cell::new(0, 0), Cell::new(9, 9), &SearchConfig::default())
            .unwrap();
        assert!(!uncapped.truncated);
        assert_eq!(uncapped.cost, Some(18));
    }

    #[test]
    fn cap_large_enough_is_not_hit() {
        let g = Grid::new(4, 4);
        let config = SearchConfig::default().with_max_expansions(16);
        let out = search_with(&g, Cell::new(0, 0), Cell::new(3, 3), &config).unwrap();
        assert!(!out.truncated);
        assert!(out.is_found());
        assert_eq!(out.cost, Some(6));
        assert!(out.max_frontier >= 1);
    }

    #[test]
    fn unreachable_is_not_truncated() {
        let g = walls(1, 3, &[(0, 1)]);
        let out = search_with(&g, Cell::new(0, 0), Cell::new(0, 2), &SearchConfig::default())
            .unwrap();
        assert!(!out.truncated);
        assert!(!out.is_found());
        assert_eq!(out.expanded, 1);
    }

    #[test]
    fn zero_heuristic_explores_at_least_as_much() {
        let g = Grid::new(12, 12);
        let (start, goal) = (Cell::new(0, 0), Cell::new(11, 6));
        let informed = search_with(&g, start, goal, &SearchConfig::default()).unwrap();
        let blind = search_with(
            &g,
            start,
            goal,
            &SearchConfig::default().with_heuristic(Heuristic::Zero),
        )
        .unwrap();
        assert_eq!(informed.cost, blind.cost);
        assert!(blind.expanded >= informed.expanded);
    }
}
