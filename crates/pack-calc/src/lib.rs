//! # Pack Calculation Engine
//!
//! 最佳包裝求解引擎：在滿足訂購數量的前提下，先最小化超出件數，再最小化包數。

pub mod assembler;
pub mod calculator;
pub mod normalizer;
pub mod observer;
pub mod service;
pub mod solver;

// Re-export 主要類型
pub use assembler::ResultAssembler;
pub use calculator::PackCalculator;
pub use normalizer::{InputNormalizer, NormalizedInput};
pub use observer::{NoopObserver, SolveObserver};
pub use service::PackService;
pub use solver::{SolverState, SolverTable, StateSolver};

/// 求解最佳包裝分配，見 [`PackCalculator::solve`]
pub fn solve(pack_sizes: &[i64], order_quantity: i64) -> pack_core::Result<pack_core::PackResult> {
    PackCalculator::solve(pack_sizes, order_quantity)
}
