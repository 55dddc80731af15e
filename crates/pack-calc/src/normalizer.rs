//! 輸入驗證與正規化

use pack_core::{PackError, PackSizeSet};

/// 已驗證的求解輸入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
    /// 包裝規格（遞減）
    pub pack_sizes: PackSizeSet,

    /// 訂購數量
    pub order_quantity: u64,
}

/// 輸入正規化器
pub struct InputNormalizer;

impl InputNormalizer {
    /// 驗證輸入並產生規格的標準順序
    ///
    /// 檢查順序：規格為空 → 訂購數量 → 各規格。
    pub fn normalize(pack_sizes: &[i64], order_quantity: i64) -> pack_core::Result<NormalizedInput> {
        if pack_sizes.is_empty() {
            return Err(PackError::EmptyPackSizes);
        }

        let quantity = u64::try_from(order_quantity)
            .ok()
            .filter(|&q| q > 0)
            .ok_or(PackError::InvalidOrderQuantity(order_quantity))?;

        Ok(NormalizedInput {
            pack_sizes: PackSizeSet::new(pack_sizes)?,
            order_quantity: quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_normalize() {
        let input = InputNormalizer::normalize(&[250, 5000, 500], 12001).unwrap();

        assert_eq!(input.pack_sizes.as_slice(), &[5000, 500, 250]);
        assert_eq!(input.order_quantity, 12001);
    }

    #[rstest]
    #[case::empty_sizes(&[], 100, PackError::EmptyPackSizes)]
    #[case::zero_quantity(&[250, 500], 0, PackError::InvalidOrderQuantity(0))]
    #[case::negative_quantity(&[250, 500], -5, PackError::InvalidOrderQuantity(-5))]
    #[case::zero_size(&[250, 0, 500], 100, PackError::InvalidPackSize(0))]
    #[case::negative_size(&[-1], 100, PackError::InvalidPackSize(-1))]
    #[case::empty_before_quantity(&[], 0, PackError::EmptyPackSizes)]
    #[case::quantity_before_size(&[0], 0, PackError::InvalidOrderQuantity(0))]
    fn test_rejects(#[case] sizes: &[i64], #[case] quantity: i64, #[case] expected: PackError) {
        assert_eq!(InputNormalizer::normalize(sizes, quantity), Err(expected));
    }
}
