//! 包裝規格集合

use serde::{Deserialize, Serialize};

use crate::PackError;

/// 已驗證的包裝規格集合
///
/// 規格一律為正整數，並以遞減順序保存。遞減順序決定求解時的
/// 迭代順序，同分時先出現的規格勝出，因此輸出是確定的。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<u64>")]
pub struct PackSizeSet {
    sizes: Vec<u64>,
}

impl PackSizeSet {
    /// 驗證並正規化包裝規格
    ///
    /// 空集合回傳 [`PackError::EmptyPackSizes`]，任何 ≤ 0 的規格回傳
    /// [`PackError::InvalidPackSize`]。重複規格會被合併。
    pub fn new(pack_sizes: &[i64]) -> crate::Result<Self> {
        if pack_sizes.is_empty() {
            return Err(PackError::EmptyPackSizes);
        }

        let mut sizes = pack_sizes
            .iter()
            .map(|&size| {
                u64::try_from(size)
                    .ok()
                    .filter(|&s| s > 0)
                    .ok_or(PackError::InvalidPackSize(size))
            })
            .collect::<crate::Result<Vec<u64>>>()?;

        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes.dedup();

        Ok(Self { sizes })
    }

    /// 規格（遞減順序）
    pub fn as_slice(&self) -> &[u64] {
        &self.sizes
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.sizes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl TryFrom<Vec<i64>> for PackSizeSet {
    type Error = PackError;

    fn try_from(value: Vec<i64>) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PackSizeSet> for Vec<u64> {
    fn from(value: PackSizeSet) -> Self {
        value.sizes
    }
}
