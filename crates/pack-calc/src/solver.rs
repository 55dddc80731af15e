//! 剩餘需求狀態求解
//!
//! 對每個剩餘需求值 `r`，求出可達到的最佳 (超出件數, 包數) 以及產生該結果
//! 的包裝規格。`r ≤ 0` 為終止狀態：超出件數為 `-r`，包數為 0。
//!
//! 以由小到大的動態規劃填表取代遞迴搜尋，避免大訂購量時的遞迴深度；
//! 每個狀態只保存所選規格，分配在組裝階段沿著所選規格回溯一次重建。

use std::mem::size_of;

use pack_core::PackError;

use crate::normalizer::NormalizedInput;

/// 單一剩餘需求值的最佳狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverState {
    /// 最佳超出件數
    pub overage: u64,

    /// 達成該超出件數的最少包數
    pub pack_count: u64,

    /// 此狀態選用的規格；前驅狀態為 `remaining - chosen`
    pub chosen: u64,
}

impl SolverState {
    const WORST: SolverState = SolverState {
        overage: u64::MAX,
        pack_count: u64::MAX,
        chosen: 0,
    };

    /// 先比超出件數，再比包數；相等時不算較佳
    pub fn is_better_than(&self, other: &SolverState) -> bool {
        (self.overage, self.pack_count) < (other.overage, other.pack_count)
    }
}

/// 求解表，索引為剩餘需求值 `1..=order_quantity`
#[derive(Debug, Clone)]
pub struct SolverTable {
    states: Vec<SolverState>,
}

impl SolverTable {
    /// 目標訂購數量
    pub fn order_quantity(&self) -> u64 {
        (self.states.len() - 1) as u64
    }

    /// 指定剩餘需求值的狀態；`remaining` 為 0 或超出範圍時回傳 `None`
    pub fn state(&self, remaining: u64) -> Option<&SolverState> {
        if remaining == 0 {
            return None;
        }
        usize::try_from(remaining)
            .ok()
            .and_then(|idx| self.states.get(idx))
    }

    /// 目標訂購數量的最佳狀態
    pub fn best(&self) -> &SolverState {
        &self.states[self.states.len() - 1]
    }

    /// 直接以狀態建立求解表，索引 0 為終止狀態
    #[cfg(test)]
    pub(crate) fn from_states(states: Vec<SolverState>) -> Self {
        Self { states }
    }

    /// 已求解的狀態數
    pub fn solved_states(&self) -> usize {
        self.states.len() - 1
    }
}

/// 狀態求解器
pub struct StateSolver;

impl StateSolver {
    /// 求解表可容納的最大訂購數量
    pub fn max_order_quantity() -> u64 {
        (isize::MAX as usize / size_of::<SolverState>() - 1) as u64
    }

    /// 填滿 `1..=order_quantity` 的求解表
    ///
    /// 規格依正規化後的遞減順序嘗試，只有嚴格較佳的候選才會取代目前最佳，
    /// 因此同分時較大的規格勝出。
    ///
    /// 訂購數量超過 [`StateSolver::max_order_quantity`] 回傳
    /// [`PackError::OrderTooLarge`]；無法配置求解表時回傳
    /// [`PackError::InsufficientMemory`]。
    pub fn solve(input: &NormalizedInput) -> pack_core::Result<SolverTable> {
        let order_quantity = input.order_quantity;
        let max = Self::max_order_quantity();
        if order_quantity > max {
            return Err(PackError::OrderTooLarge {
                order_quantity: i64::try_from(order_quantity).unwrap_or(i64::MAX),
                limit: i64::try_from(max).unwrap_or(i64::MAX),
            });
        }

        // 上限保證可轉為 usize
        let target = order_quantity as usize;

        let mut states = Vec::new();
        states
            .try_reserve_exact(target + 1)
            .map_err(|_| PackError::InsufficientMemory { order_quantity })?;
        states.push(SolverState {
            overage: 0,
            pack_count: 0,
            chosen: 0,
        });

        for remaining in 1..=target {
            let mut best = SolverState::WORST;

            for size in input.pack_sizes.iter() {
                let (overage, pack_count) = match remaining.checked_sub(size as usize) {
                    Some(rest) if rest > 0 => {
                        let sub = &states[rest];
                        (sub.overage, sub.pack_count)
                    }
                    // 終止狀態
                    _ => (size - remaining as u64, 0),
                };

                let candidate = SolverState {
                    overage,
                    pack_count: pack_count + 1,
                    chosen: size,
                };

                if candidate.is_better_than(&best) {
                    best = candidate;
                }
            }

            states.push(best);
        }

        Ok(SolverTable { states })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::InputNormalizer;

    fn table(sizes: &[i64], quantity: i64) -> SolverTable {
        let input = InputNormalizer::normalize(sizes, quantity).unwrap();
        StateSolver::solve(&input).unwrap()
    }

    #[test]
    fn test_single_item() {
        let table = table(&[250, 500, 1000, 2000, 5000], 1);
        let best = table.best();

        assert_eq!(best.overage, 249);
        assert_eq!(best.pack_count, 1);
        assert_eq!(best.chosen, 250);
    }

    #[test]
    fn test_prefers_single_larger_pack() {
        // 251：500×1 與 250×2 超出件數相同，500×1 包數較少
        let table = table(&[250, 500, 1000, 2000, 5000], 251);
        let best = table.best();

        assert_eq!(best.overage, 249);
        assert_eq!(best.pack_count, 1);
        assert_eq!(best.chosen, 500);
    }

    #[test]
    fn test_exact_cover() {
        let table = table(&[23, 31, 53], 500_000);
        let best = table.best();

        assert_eq!(best.overage, 0);
        assert_eq!(best.pack_count, 9438);
        assert_eq!(table.solved_states(), 500_000);
    }

    #[test]
    fn test_tie_goes_to_larger_size() {
        // 6 = 3+3 = 2+2+2；超出 0，3+3 包數較少
        // 4 = 2+2 = 3(+1 超出)；超出 0 只有 2+2
        let table = table(&[2, 3], 6);

        assert_eq!(table.best().chosen, 3);
        assert_eq!(table.state(4).unwrap().chosen, 2);
        assert_eq!(table.state(4).unwrap().overage, 0);
    }

    #[test]
    fn test_state_lookup_bounds() {
        let table = table(&[5], 12);

        assert_eq!(table.order_quantity(), 12);
        assert!(table.state(0).is_none());
        assert!(table.state(13).is_none());
        assert_eq!(table.state(12).unwrap().overage, 3);
        assert_eq!(table.state(12).unwrap().pack_count, 3);
    }

    #[test]
    fn test_quantity_beyond_table_capacity() {
        let input = InputNormalizer::normalize(&[1], i64::MAX).unwrap();

        assert!(matches!(
            StateSolver::solve(&input),
            Err(PackError::OrderTooLarge { order_quantity: i64::MAX, .. })
        ));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_table_allocation_failure() {
        // 約 2.4 EB，超出可用位址空間
        let quantity = 100_000_000_000_000_000_i64;
        let input = InputNormalizer::normalize(&[1], quantity).unwrap();

        assert!(quantity as u64 <= StateSolver::max_order_quantity());
        assert_eq!(
            StateSolver::solve(&input).unwrap_err(),
            PackError::InsufficientMemory {
                order_quantity: quantity as u64
            }
        );
    }

    #[test]
    fn test_ordering() {
        let a = SolverState { overage: 0, pack_count: 5, chosen: 1 };
        let b = SolverState { overage: 1, pack_count: 1, chosen: 2 };
        let c = SolverState { overage: 0, pack_count: 5, chosen: 3 };

        assert!(a.is_better_than(&b));
        assert!(!b.is_better_than(&a));
        assert!(!a.is_better_than(&c));
        assert!(!c.is_better_than(&a));
    }
}
