//! 計算紀錄模型

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{PackDistribution, PackResult};

/// 一次包裝計算的紀錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calculation {
    /// 計算ID
    pub id: Uuid,

    /// 呼叫方提供的包裝規格
    pub pack_sizes: Vec<i64>,

    /// 訂購數量
    pub order_quantity: u64,

    /// 包裝分配
    pub distribution: PackDistribution,

    /// 總件數
    pub total_items: u64,

    /// 總包數
    pub total_packs: u64,

    /// 超出件數
    pub items_overage: u64,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: u64,

    #[serde(skip)]
    pub calculation_time: Duration,

    /// 建立時間
    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Calculation {
    /// 創建新的計算紀錄
    pub fn new(
        pack_sizes: Vec<i64>,
        order_quantity: u64,
        result: PackResult,
        calculation_time: Duration,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            pack_sizes,
            order_quantity,
            distribution: result.distribution,
            total_items: result.total_items,
            total_packs: result.total_packs,
            items_overage: result.overage,
            calculation_time_ms: u64::try_from(calculation_time.as_millis()).unwrap_or(u64::MAX),
            calculation_time,
            created_at: Utc::now(),
            user_id: None,
        }
    }

    /// 建構器模式：設置使用者
    pub fn with_user_id(mut self, user_id: String) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// 取回求解結果部分
    pub fn result(&self) -> PackResult {
        PackResult {
            distribution: self.distribution.clone(),
            total_items: self.total_items,
            total_packs: self.total_packs,
            overage: self.items_overage,
        }
    }
}
