//! 日誌初始化

use std::str::FromStr;

use pack_core::{LogFormat, LoggingConfig};
use tracing::Level;

/// 日誌初始化錯誤
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("無效的日誌等級: {0}")]
    InvalidLevel(String),

    #[error("日誌已初始化: {0}")]
    AlreadyInitialized(String),
}

/// 依配置安裝全域 tracing subscriber
///
/// 同一行程只能安裝一次，重複呼叫回傳 [`LoggingError::AlreadyInitialized`]。
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let level = Level::from_str(&config.level)
        .map_err(|_| LoggingError::InvalidLevel(config.level.clone()))?;

    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };

    installed.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}
