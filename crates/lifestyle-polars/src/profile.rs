//! Derived per-column and per-table records

use crate::config::VariableKind;
use lifestyle_describe::{OutlierReport, SummaryStatistics};

/// Everything derived from one analyzed numeric column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProfile {
    pub name: String,
    /// Column values in table order
    pub values: Vec<f64>,
    /// True when the source dtype is an integer type
    pub integral: bool,
    pub summary: SummaryStatistics,
    pub outliers: OutlierReport,
}

/// Shape, dtypes and variable kinds of a loaded table
#[derive(Debug, Clone, PartialEq)]
pub struct TableOverview {
    pub rows: usize,
    pub columns: usize,
    /// `(column name, dtype name)` in table order
    pub dtypes: Vec<(String, String)>,
    /// `(column name, kind)` in table order
    pub kinds: Vec<(String, VariableKind)>,
}

impl TableOverview {
    /// Names of the columns classified as `kind`, in table order
    pub fn columns_of(&self, kind: VariableKind) -> Vec<&str> {
        self.kinds
            .iter()
            .filter(|(_, k)| *k == kind)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
