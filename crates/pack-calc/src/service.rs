//! 包裝計算服務
//!
//! 在核心求解外加上紀錄資訊（ID、時間戳、耗時）、訂購數量上限與日誌。

use std::time::Instant;

use pack_core::{Calculation, CalculatorConfig, Pack, PackError, PackResult};

use crate::calculator::PackCalculator;
use crate::normalizer::{InputNormalizer, NormalizedInput};
use crate::observer::SolveObserver;
use crate::solver::SolverTable;

/// 包裝計算服務
#[derive(Debug, Clone, Default)]
pub struct PackService {
    config: CalculatorConfig,
}

impl PackService {
    /// 創建新的服務
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// 計算最佳包裝分配並產生計算紀錄
    pub fn calculate_optimal(
        &self,
        pack_sizes: &[i64],
        order_quantity: i64,
    ) -> pack_core::Result<Calculation> {
        let start_time = Instant::now();

        tracing::debug!(?pack_sizes, order_quantity, "開始包裝計算");

        // 先驗證輸入，上限只套用在有效的訂購數量
        let result = InputNormalizer::normalize(pack_sizes, order_quantity)
            .and_then(|input| {
                self.check_order_limit(order_quantity)?;
                PackCalculator::solve_normalized(&input, &mut TracingObserver)
            })
            .map_err(|e| {
                tracing::error!(?pack_sizes, order_quantity, error = %e, "包裝計算失敗");
                e
            })?;

        let elapsed = start_time.elapsed();
        let calculation = Calculation::new(pack_sizes.to_vec(), order_quantity as u64, result, elapsed);

        tracing::info!(
            calculation_id = %calculation.id,
            ?pack_sizes,
            order_quantity,
            total_items = calculation.total_items,
            total_packs = calculation.total_packs,
            items_overage = calculation.items_overage,
            duration_ms = calculation.calculation_time_ms,
            "包裝計算完成"
        );

        Ok(calculation)
    }

    /// 使用配置中的預設包裝規格計算
    pub fn calculate_with_defaults(&self, order_quantity: i64) -> pack_core::Result<Calculation> {
        self.calculate_optimal(&self.config.default_pack_sizes, order_quantity)
    }

    /// 使用包裝主檔中啟用且有效的規格計算
    pub fn calculate_for_catalog(
        &self,
        packs: &[Pack],
        order_quantity: i64,
    ) -> pack_core::Result<Calculation> {
        let sizes: Vec<i64> = packs
            .iter()
            .filter(|p| p.is_available())
            .map(|p| p.size)
            .collect();

        if sizes.is_empty() {
            tracing::warn!(catalog_size = packs.len(), "包裝主檔沒有可用規格");
            return Err(PackError::NoValidPacks);
        }

        self.calculate_optimal(&sizes, order_quantity)
    }

    fn check_order_limit(&self, order_quantity: i64) -> pack_core::Result<()> {
        match self.config.max_order_quantity {
            Some(limit) if order_quantity > limit => Err(PackError::OrderTooLarge {
                order_quantity,
                limit,
            }),
            _ => Ok(()),
        }
    }
}

/// 將求解各階段輸出為 debug 事件
struct TracingObserver;

impl SolveObserver for TracingObserver {
    fn on_normalized(&mut self, input: &NormalizedInput) {
        tracing::debug!(
            pack_sizes = ?input.pack_sizes.as_slice(),
            order_quantity = input.order_quantity,
            "輸入驗證通過"
        );
    }

    fn on_solved(&mut self, table: &SolverTable) {
        let best = table.best();
        tracing::debug!(
            states = table.solved_states(),
            overage = best.overage,
            pack_count = best.pack_count,
            "求解表完成"
        );
    }

    fn on_assembled(&mut self, result: &PackResult) {
        tracing::debug!(distribution = ?result.distribution, "分配組裝完成");
    }
}
