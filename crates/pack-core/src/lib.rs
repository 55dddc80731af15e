//! # Pack Core
//!
//! 包裝計算核心資料模型與類型定義

pub mod calculation;
pub mod config;
pub mod distribution;
pub mod pack;
pub mod sizes;

// Re-export 主要類型
pub use calculation::Calculation;
pub use config::{CalculatorConfig, LogFormat, LoggingConfig};
pub use distribution::{PackDistribution, PackResult};
pub use pack::Pack;
pub use sizes::PackSizeSet;

/// 包裝計算錯誤類型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PackError {
    #[error("包裝規格不可為空")]
    EmptyPackSizes,

    #[error("包裝規格必須大於零: {0}")]
    InvalidPackSize(i64),

    #[error("訂購數量必須大於零: {0}")]
    InvalidOrderQuantity(i64),

    #[error("無法計算包裝分配：訂購數量 {order_quantity}，總件數 {total_items}")]
    CalculationFailed { order_quantity: u64, total_items: u64 },

    #[error("訂購數量 {order_quantity} 超過上限 {limit}")]
    OrderTooLarge { order_quantity: i64, limit: i64 },

    #[error("記憶體不足，無法求解訂購數量 {order_quantity}")]
    InsufficientMemory { order_quantity: u64 },

    #[error("沒有可用的包裝規格")]
    NoValidPacks,

    #[error("包裝名稱不可為空")]
    InvalidPackName,

    #[error("配置錯誤: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PackError>;
