//! # Pack
//!
//! 最佳包裝計算：匯出核心模型、求解引擎與日誌初始化。

pub mod logging;

pub use pack_calc::{
    solve, InputNormalizer, NoopObserver, NormalizedInput, PackCalculator, PackService,
    ResultAssembler, SolveObserver, SolverState, SolverTable, StateSolver,
};
pub use pack_core::{
    Calculation, CalculatorConfig, LogFormat, LoggingConfig, Pack, PackDistribution, PackError,
    PackResult, PackSizeSet, Result,
};
