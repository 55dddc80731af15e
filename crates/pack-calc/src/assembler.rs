//! 結果組裝

use pack_core::{PackDistribution, PackError, PackResult};

use crate::solver::SolverTable;

/// 結果組裝器
pub struct ResultAssembler;

impl ResultAssembler {
    /// 沿著所選規格由目標數量回溯至終止狀態，重建包裝分配
    ///
    /// 組裝結果若不滿足訂購數量，或與求解表記錄的最佳值不一致，回傳
    /// [`PackError::CalculationFailed`]。
    pub fn assemble(table: &SolverTable) -> pack_core::Result<PackResult> {
        let order_quantity = table.order_quantity();
        let mut distribution = PackDistribution::new();
        let mut remaining = order_quantity;

        while remaining > 0 {
            let state = table
                .state(remaining)
                .filter(|s| s.chosen > 0)
                .ok_or_else(|| Self::failed(order_quantity, &distribution))?;

            distribution.add_pack(state.chosen);
            remaining = remaining.saturating_sub(state.chosen);
        }

        let best = table.best();
        let total_items = distribution.total_items();

        PackResult::from_distribution(distribution, order_quantity)
            .filter(|r| r.overage == best.overage && r.total_packs == best.pack_count)
            .ok_or(PackError::CalculationFailed {
                order_quantity,
                total_items,
            })
    }

    fn failed(order_quantity: u64, distribution: &PackDistribution) -> PackError {
        PackError::CalculationFailed {
            order_quantity,
            total_items: distribution.total_items(),
        }
    }
}
