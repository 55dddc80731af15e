//! 包裝分配模型

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 包裝分配：規格 → 使用數量
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackDistribution {
    packs: BTreeMap<u64, u64>,
}

impl PackDistribution {
    /// 創建空的分配
    pub fn new() -> Self {
        Self::default()
    }

    /// 增加一包指定規格
    pub fn add_pack(&mut self, size: u64) {
        *self.packs.entry(size).or_insert(0) += 1;
    }

    /// 建構器模式：設置規格數量
    pub fn with_count(mut self, size: u64, count: u64) -> Self {
        if count > 0 {
            self.packs.insert(size, count);
        } else {
            self.packs.remove(&size);
        }
        self
    }

    /// 指定規格的數量
    pub fn count_of(&self, size: u64) -> u64 {
        self.packs.get(&size).copied().unwrap_or(0)
    }

    /// 總件數 = Σ 規格 × 數量
    pub fn total_items(&self) -> u64 {
        self.packs.iter().map(|(size, count)| size * count).sum()
    }

    /// 總包數 = Σ 數量
    pub fn total_packs(&self) -> u64 {
        self.packs.values().sum()
    }

    /// 檢查是否沒有任何包裝
    pub fn is_empty(&self) -> bool {
        self.total_packs() == 0
    }

    /// 檢查分配是否足以滿足訂購數量
    pub fn can_fulfill(&self, order_quantity: u64) -> bool {
        self.total_items() >= order_quantity
    }

    /// 依規格遞增順序迭代 (規格, 數量)
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.packs.iter().map(|(&size, &count)| (size, count))
    }

    /// 使用到的規格種類數
    pub fn len(&self) -> usize {
        self.packs.len()
    }
}

impl FromIterator<(u64, u64)> for PackDistribution {
    fn from_iter<T: IntoIterator<Item = (u64, u64)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |dist, (size, count)| {
                let total = dist.count_of(size) + count;
                dist.with_count(size, total)
            })
    }
}

/// 求解結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackResult {
    /// 包裝分配
    pub distribution: PackDistribution,

    /// 總件數
    pub total_items: u64,

    /// 總包數
    pub total_packs: u64,

    /// 超出訂購數量的件數
    pub overage: u64,
}

impl PackResult {
    /// 由分配與訂購數量建立結果
    ///
    /// 分配不足以滿足訂購數量時回傳 `None`。
    pub fn from_distribution(distribution: PackDistribution, order_quantity: u64) -> Option<Self> {
        let total_items = distribution.total_items();
        let overage = total_items.checked_sub(order_quantity)?;

        Some(Self {
            total_packs: distribution.total_packs(),
            total_items,
            overage,
            distribution,
        })
    }
}
