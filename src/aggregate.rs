//! Worker dispatch and all-to-one result aggregation.
//!
//! The original design calls for P independent single-threaded worker
//! *processes* coordinated by an external message-passing launcher, with one
//! barrier at the end: an all-to-root gather of solutions and counts plus an
//! all-reduce of `max_queens`. This crate has no MPI binding in its
//! dependency stack, so the same guarantees are realized with OS threads
//! instead of OS processes, following a Lazy-SMP-style worker-spawn pattern:
//! one thread per rank, an explicit large stack, no shared mutable state
//! between workers during search, and a single join per worker as the only
//! synchronization point.

use std::thread;

use log::{error, info};

use crate::bitboard::Bitboard;
use crate::error::AqError;
use crate::partition::frontier_for_worker;
use crate::search::SearchEngine;

/// Stack size reserved for each worker thread, generous enough for a
/// depth-`N^2` recursion stand-in plus the gather buffers each worker holds.
const WORKER_STACK_SIZE: usize = 64 * 1024 * 1024;

/// One worker's final contribution to the aggregation barrier.
struct WorkerOutput {
    rank: usize,
    max_queens: usize,
    solutions: Vec<Bitboard>,
}

/// The aggregated result of a full run: the deduplicated solution set at the
/// global maximum queen count, in rank-ascending, then per-rank discovery
/// order.
pub struct AggregateResult {
    pub max_queens: usize,
    pub solutions: Vec<Bitboard>,
}

/// Runs the search across `worker_count` worker threads and aggregates
/// their results.
///
/// # Errors
/// Returns [`AqError::BoardCapacity`] if `n` exceeds the board capacity, or
/// [`AqError::WorkerPanicked`] if any worker thread panics instead of
/// returning. A worker panic aborts the whole run — propagated here as an
/// error rather than `std::process::abort` so `main` can map it to the
/// documented exit code.
pub fn run(n: usize, k: i32, wrap: bool, worker_count: usize) -> Result<AggregateResult, AqError> {
    let worker_count = worker_count.clamp(1, 64);
    info!("dispatching search across {worker_count} worker(s) for N={n} k={k} wrap={wrap}");

    let mut handles = Vec::with_capacity(worker_count);
    for rank in 0..worker_count {
        let frontier = frontier_for_worker(n, wrap, worker_count, rank);
        let handle = thread::Builder::new()
            .name(format!("aq-worker-{rank}"))
            .stack_size(WORKER_STACK_SIZE)
            .spawn(move || -> Result<WorkerOutput, AqError> {
                let mut engine = SearchEngine::new(n, k, wrap, frontier)?;
                engine.run();
                let solutions = engine.into_solutions();
                Ok(WorkerOutput {
                    rank,
                    max_queens: solutions.max_queens(),
                    solutions: solutions.solutions().to_vec(),
                })
            })
            .expect("failed to spawn search worker");
        handles.push(handle);
    }

    let mut outputs = Vec::with_capacity(worker_count);
    for (rank, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(Ok(output)) => outputs.push(output),
            Ok(Err(e)) => {
                error!("worker {rank} returned a fatal error: {e}");
                return Err(e);
            }
            Err(_) => {
                error!("worker {rank} panicked during search");
                return Err(AqError::WorkerPanicked { worker_id: rank });
            }
        }
        info!("worker {rank} joined");
    }
    outputs.sort_by_key(|o| o.rank);

    Ok(aggregate(outputs))
}

/// Computes the global maximum queen count, then for each rank in
/// increasing order appends its solutions (while that rank's local maximum
/// equals the global one) unless an equal board is already present.
fn aggregate(outputs: Vec<WorkerOutput>) -> AggregateResult {
    let global_max = outputs.iter().map(|o| o.max_queens).max().unwrap_or(0);

    let mut global_solutions: Vec<Bitboard> = Vec::new();
    for output in &outputs {
        if output.max_queens != global_max {
            continue;
        }
        for s in &output.solutions {
            if !global_solutions.iter().any(|g| g.equals(s)) {
                global_solutions.push(*s);
            }
        }
    }

    AggregateResult { max_queens: global_max, solutions: global_solutions }
}
