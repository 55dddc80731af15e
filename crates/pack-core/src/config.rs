//! 包裝計算配置

use serde::{Deserialize, Serialize};

use crate::PackError;

/// 環境變數前綴
pub const ENV_PREFIX: &str = "PC_";

/// 包裝計算參數配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// 預設包裝規格（呼叫方未提供規格時使用）
    pub default_pack_sizes: Vec<i64>,

    /// 訂購數量上限
    ///
    /// 求解時間與記憶體隨訂購數量線性成長，由服務層在求解前檢查。
    /// `None` 表示不設上限。
    pub max_order_quantity: Option<i64>,

    /// 日誌配置
    pub logging: LoggingConfig,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_pack_sizes: vec![250, 500, 1000, 2000, 5000],
            max_order_quantity: Some(10_000_000),
            logging: LoggingConfig::default(),
        }
    }
}

impl CalculatorConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置預設包裝規格
    pub fn with_default_pack_sizes(mut self, sizes: Vec<i64>) -> Self {
        self.default_pack_sizes = sizes;
        self
    }

    /// 建構器模式：設置訂購數量上限
    pub fn with_max_order_quantity(mut self, limit: Option<i64>) -> Self {
        self.max_order_quantity = limit;
        self
    }

    /// 建構器模式：以整數設置訂購數量上限，小於或等於零表示不設上限
    pub fn with_order_limit(self, limit: i64) -> Self {
        self.with_max_order_quantity(Some(limit).filter(|&l| l > 0))
    }

    /// 建構器模式：設置日誌配置
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// 從 JSON 載入，缺少的欄位使用預設值
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| PackError::Config(e.to_string()))
    }

    /// 從行程環境變數載入（`PC_` 前綴）
    pub fn from_env() -> crate::Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// 以鍵值對覆蓋預設值
    ///
    /// 支援的鍵：
    /// * `PC_PACK_SIZES` - 逗號分隔的規格，例如 `250,500,1000`
    /// * `PC_MAX_ORDER_QUANTITY` - 上限；小於或等於 `0` 或空字串表示不設上限
    /// * `PC_LOGGING_LEVEL` - `trace` / `debug` / `info` / `warn` / `error`
    /// * `PC_LOGGING_FORMAT` - `json` / `pretty`
    pub fn from_vars<I, K, V>(vars: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();

        for (key, value) in vars {
            let Some(key) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let value = value.as_ref().trim();

            match key {
                "PACK_SIZES" => config.default_pack_sizes = parse_pack_sizes(value)?,
                "MAX_ORDER_QUANTITY" => {
                    config = match value {
                        "" => config.with_max_order_quantity(None),
                        v => config.with_order_limit(parse_int(key, v)?),
                    }
                }
                "LOGGING_LEVEL" => config.logging.level = parse_level(value)?,
                "LOGGING_FORMAT" => config.logging.format = value.parse()?,
                _ => {}
            }
        }

        Ok(config)
    }
}

fn parse_int(key: &str, value: &str) -> crate::Result<i64> {
    value
        .parse()
        .map_err(|_| PackError::Config(format!("{ENV_PREFIX}{key} 不是有效的整數: {value}")))
}

fn parse_pack_sizes(value: &str) -> crate::Result<Vec<i64>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_int("PACK_SIZES", s))
        .collect()
}

fn parse_level(value: &str) -> crate::Result<String> {
    let level = value.to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(level),
        _ => Err(PackError::Config(format!("無效的日誌等級: {value}"))),
    }
}

/// 日誌配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日誌等級
    pub level: String,

    /// 輸出格式
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Json,
        }
    }
}

/// 日誌輸出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// 結構化 JSON
    Json,
    /// 人類可讀
    Pretty,
}

impl std::str::FromStr for LogFormat {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            _ => Err(PackError::Config(format!("無效的日誌格式: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::new();

        assert_eq!(config.default_pack_sizes, vec![250, 500, 1000, 2000, 5000]);
        assert_eq!(config.max_order_quantity, Some(10_000_000));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_config_builder() {
        let config = CalculatorConfig::new()
            .with_default_pack_sizes(vec![23, 31, 53])
            .with_max_order_quantity(None)
            .with_logging(LoggingConfig {
                level: "debug".to_string(),
                format: LogFormat::Pretty,
            });

        assert_eq!(config.default_pack_sizes, vec![23, 31, 53]);
        assert_eq!(config.max_order_quantity, None);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_order_limit() {
        assert_eq!(CalculatorConfig::new().with_order_limit(500).max_order_quantity, Some(500));
        assert_eq!(CalculatorConfig::new().with_order_limit(0).max_order_quantity, None);
        assert_eq!(CalculatorConfig::new().with_order_limit(-1).max_order_quantity, None);
    }

    #[test]
    fn test_from_vars() {
        let config = CalculatorConfig::from_vars([
            ("PC_PACK_SIZES", "23, 31,53"),
            ("PC_MAX_ORDER_QUANTITY", "500000"),
            ("PC_LOGGING_LEVEL", "DEBUG"),
            ("PC_LOGGING_FORMAT", "pretty"),
            ("HOME", "/root"),
        ])
        .unwrap();

        assert_eq!(config.default_pack_sizes, vec![23, 31, 53]);
        assert_eq!(config.max_order_quantity, Some(500_000));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_from_vars_disables_limit() {
        let config = CalculatorConfig::from_vars([("PC_MAX_ORDER_QUANTITY", "0")]).unwrap();
        assert_eq!(config.max_order_quantity, None);
    }

    #[test]
    fn test_from_vars_rejects_garbage() {
        let err = CalculatorConfig::from_vars([("PC_PACK_SIZES", "250,abc")]).unwrap_err();
        assert!(matches!(err, PackError::Config(_)));

        let err = CalculatorConfig::from_vars([("PC_LOGGING_LEVEL", "loud")]).unwrap_err();
        assert!(matches!(err, PackError::Config(_)));

        let err = CalculatorConfig::from_vars([("PC_LOGGING_FORMAT", "xml")]).unwrap_err();
        assert!(matches!(err, PackError::Config(_)));
    }

    #[test]
    fn test_from_json_partial() {
        let config = CalculatorConfig::from_json(r#"{"max_order_quantity": 1000}"#).unwrap();

        assert_eq!(config.max_order_quantity, Some(1000));
        assert_eq!(config.default_pack_sizes, vec![250, 500, 1000, 2000, 5000]);
        assert_eq!(config.logging, LoggingConfig::default());

        assert!(CalculatorConfig::from_json("{not json").is_err());
    }
}
