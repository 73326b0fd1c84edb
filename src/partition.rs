//! Deterministic split of the initial move frontier across workers.

use crate::mv::Move;

/// Enumerates the initial frontier cells for board side `n`.
///
/// For a non-wrap board the search can exploit diagonal reflection
/// symmetry: only the upper-left triangle
/// `{(i, j) : 0 <= i < n, 0 <= j < n - i}` needs to be enumerated. The
/// wrap-around board has no such automorphism, so its full `n * n` grid is
/// enumerated. Both are produced in row-major order.
#[must_use]
pub fn frontier_cells(n: usize, wrap: bool) -> Vec<(usize, usize)> {
    let mut cells = Vec::with_capacity(n * n);
    for i in 0..n {
        let row_len = if wrap { n } else { n - i };
        for j in 0..row_len {
            cells.push((i, j));
        }
    }
    cells
}

/// Assigns the initial frontier to `worker_count` workers by round-robin on
/// frontier index: cell at index `i` belongs to worker `i % worker_count`.
/// This spreads both high-degree central starts and low-degree corner
/// starts evenly across workers, which is a better static load balancer
/// than a contiguous split.
#[must_use]
pub fn frontier_for_worker(n: usize, wrap: bool, worker_count: usize, worker_id: usize) -> Vec<Move> {
    assert!(worker_count > 0, "worker_count must be positive");
    frontier_cells(n, wrap)
        .into_iter()
        .enumerate()
        .filter(|(i, _)| i % worker_count == worker_id)
        .map(|(_, (r, c))| Move::new(r, c, 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_wrap_frontier_is_upper_left_triangle() {
        let cells = frontier_cells(4, false);
        let expected_len: usize = (1..=4).sum();
        assert_eq!(cells.len(), expected_len);
        assert!(cells.iter().all(|&(i, j)| j < 4 - i));
    }

    #[test]
    fn wrap_frontier_is_full_grid() {
        let cells = frontier_cells(4, true);
        assert_eq!(cells.len(), 16);
    }

    #[test]
    fn round_robin_partition_is_a_disjoint_cover() {
        let n = 5;
        let p = 3;
        let mut all = Vec::new();
        for rank in 0..p {
            all.extend(frontier_for_worker(n, false, p, rank));
        }
        let expected_total: usize = (1..=n).sum();
        assert_eq!(all.len(), expected_total);

        let mut seen = std::collections::HashSet::new();
        for m in &all {
            assert!(seen.insert((m.row, m.col)), "duplicate move across ranks");
        }
    }

    #[test]
    fn every_move_starts_at_depth_one_and_unapplied() {
        for m in frontier_for_worker(4, true, 2, 0) {
            assert_eq!(m.depth, 1);
            assert!(!m.applied);
        }
    }

    #[test]
    fn single_worker_gets_the_whole_frontier() {
        let n = 5;
        let whole = frontier_cells(n, false);
        let for_one = frontier_for_worker(n, false, 1, 0);
        assert_eq!(for_one.len(), whole.len());
    }
}
