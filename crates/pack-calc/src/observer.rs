//! 求解過程觀察者

use pack_core::PackResult;

use crate::normalizer::NormalizedInput;
use crate::solver::SolverTable;

/// 求解各階段的回呼
///
/// 核心求解不依賴全域日誌；需要記錄時由呼叫方傳入實作。
pub trait SolveObserver {
    /// 輸入驗證通過
    fn on_normalized(&mut self, _input: &NormalizedInput) {}

    /// 求解表填寫完成
    fn on_solved(&mut self, _table: &SolverTable) {}

    /// 結果組裝完成
    fn on_assembled(&mut self, _result: &PackResult) {}
}

/// 不做任何事的觀察者
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SolveObserver for NoopObserver {}
