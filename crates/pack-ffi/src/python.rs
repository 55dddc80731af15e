//! Python 綁定實現

use std::collections::BTreeMap;

use pack_calc::PackService;
use pack_core::{Calculation, CalculatorConfig, PackError};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_py_err(err: PackError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python 包裝計算器
#[pyclass(name = "PackCalculator")]
pub struct PyPackCalculator {
    service: PackService,
}

#[pymethods]
impl PyPackCalculator {
    /// 未指定上限時沿用預設配置的上限；小於或等於零表示不設上限
    #[new]
    #[pyo3(signature = (max_order_quantity=None))]
    fn new(max_order_quantity: Option<i64>) -> Self {
        let config = match max_order_quantity {
            Some(limit) => CalculatorConfig::new().with_order_limit(limit),
            None => CalculatorConfig::new(),
        };
        Self {
            service: PackService::new(config),
        }
    }

    /// 執行包裝計算
    fn calculate(&self, pack_sizes: Vec<i64>, order_quantity: i64) -> PyResult<PyCalculationResult> {
        self.service
            .calculate_optimal(&pack_sizes, order_quantity)
            .map(PyCalculationResult::from)
            .map_err(to_py_err)
    }

    /// 使用預設包裝規格計算
    fn calculate_with_defaults(&self, order_quantity: i64) -> PyResult<PyCalculationResult> {
        self.service
            .calculate_with_defaults(order_quantity)
            .map(PyCalculationResult::from)
            .map_err(to_py_err)
    }

    #[getter]
    fn default_pack_sizes(&self) -> Vec<i64> {
        self.service.config().default_pack_sizes.clone()
    }
}

/// Python 計算結果
#[pyclass(name = "CalculationResult")]
pub struct PyCalculationResult {
    inner: Calculation,
}

impl From<Calculation> for PyCalculationResult {
    fn from(inner: Calculation) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyCalculationResult {
    #[getter]
    fn id(&self) -> String {
        self.inner.id.to_string()
    }

    #[getter]
    fn order_quantity(&self) -> u64 {
        self.inner.order_quantity
    }

    /// 規格 → 數量
    #[getter]
    fn distribution(&self) -> BTreeMap<u64, u64> {
        self.inner.distribution.iter().collect()
    }

    #[getter]
    fn total_items(&self) -> u64 {
        self.inner.total_items
    }

    #[getter]
    fn total_packs(&self) -> u64 {
        self.inner.total_packs
    }

    #[getter]
    fn items_overage(&self) -> u64 {
        self.inner.items_overage
    }

    #[getter]
    fn calculation_time_ms(&self) -> u64 {
        self.inner.calculation_time_ms
    }

    /// 序列化為 JSON
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "CalculationResult(total_items={}, total_packs={}, items_overage={})",
            self.inner.total_items, self.inner.total_packs, self.inner.items_overage
        )
    }
}
