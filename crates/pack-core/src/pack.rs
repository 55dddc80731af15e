//! 包裝規格主檔模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::PackError;

/// 包裝規格主檔
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pack {
    /// 主檔ID
    pub id: Uuid,

    /// 每包件數
    pub size: i64,

    /// 名稱
    pub name: String,

    /// 是否啟用
    pub active: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Pack {
    /// 創建新的包裝規格（預設啟用）
    pub fn new(size: i64, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            size,
            name,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// 檢查規格是否有效
    pub fn is_valid(&self) -> bool {
        self.size > 0
    }

    /// 驗證規格與名稱
    pub fn validate(&self) -> crate::Result<()> {
        if !self.is_valid() {
            return Err(PackError::InvalidPackSize(self.size));
        }
        if self.name.trim().is_empty() {
            return Err(PackError::InvalidPackName);
        }
        Ok(())
    }

    /// 停用
    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }

    /// 更新規格與名稱
    pub fn update(&mut self, size: i64, name: String) {
        self.size = size;
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// 檢查是否可用於計算
    pub fn is_available(&self) -> bool {
        self.active && self.is_valid()
    }
}
