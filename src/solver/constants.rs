// Letter count from which `SearchStrategy::Auto` goes parallel (604,800+ candidates)
pub const PARALLEL_THRESHOLD: usize = 7;
// Wall-clock budgets are checked once per this many candidates in each worker
pub const BUDGET_CHECK_INTERVAL: u64 = 4096;
// Chunks handed to rayon per worker thread
pub const CHUNKS_PER_THREAD: usize = 8;
