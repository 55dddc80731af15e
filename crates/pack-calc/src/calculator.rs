//! 包裝計算主入口

use pack_core::PackResult;

use crate::assembler::ResultAssembler;
use crate::normalizer::{InputNormalizer, NormalizedInput};
use crate::observer::{NoopObserver, SolveObserver};
use crate::solver::StateSolver;

/// 最佳包裝計算器
///
/// 純函數：每次呼叫使用獨立的求解表，呼叫結束即丟棄，不同執行緒可同時呼叫。
pub struct PackCalculator;

impl PackCalculator {
    /// 求出滿足訂購數量的最佳包裝分配
    ///
    /// 先最小化超出件數，再最小化包數。
    ///
    /// # 範例
    /// ```
    /// use pack_calc::PackCalculator;
    ///
    /// let result = PackCalculator::solve(&[250, 500, 1000, 2000, 5000], 251).unwrap();
    /// assert_eq!(result.distribution.count_of(500), 1);
    /// assert_eq!(result.overage, 249);
    /// ```
    pub fn solve(pack_sizes: &[i64], order_quantity: i64) -> pack_core::Result<PackResult> {
        Self::solve_with_observer(pack_sizes, order_quantity, &mut NoopObserver)
    }

    /// 同 [`PackCalculator::solve`]，並在各階段通知觀察者
    pub fn solve_with_observer<O>(
        pack_sizes: &[i64],
        order_quantity: i64,
        observer: &mut O,
    ) -> pack_core::Result<PackResult>
    where
        O: SolveObserver + ?Sized,
    {
        let input = InputNormalizer::normalize(pack_sizes, order_quantity)?;
        Self::solve_normalized(&input, observer)
    }

    /// 對已驗證的輸入求解
    pub fn solve_normalized<O>(input: &NormalizedInput, observer: &mut O) -> pack_core::Result<PackResult>
    where
        O: SolveObserver + ?Sized,
    {
        observer.on_normalized(input);

        let table = StateSolver::solve(input)?;
        observer.on_solved(&table);

        let result = ResultAssembler::assemble(&table)?;
        observer.on_assembled(&result);

        Ok(result)
    }
}
