//! Extension trait for describing columns of a DataFrame

use crate::config::{is_integer_dtype, is_numeric_dtype, VariableKind};
use crate::profile::{ColumnProfile, TableOverview};
use crate::Result;
use lifestyle_core::Error as CoreError;
use lifestyle_describe::{classify, summarize};
use polars::prelude::*;
use tracing::{debug, instrument};

/// Descriptive statistics operations on Polars DataFrames
pub trait DescribeExt {
    /// Fail with `MissingColumn` for the first name not in the table
    fn require_columns(&self, names: &[&str]) -> Result<()>;

    /// Values of a numeric column as `f64`, in table order
    fn numeric_values(&self, name: &str) -> Result<Vec<f64>>;

    /// True when the named column has an integer dtype
    fn is_integral(&self, name: &str) -> Result<bool>;

    /// Summarize a numeric column and classify its outliers
    fn profile(&self, name: &str) -> Result<ColumnProfile>;

    /// Shape, dtypes and variable kinds of the table
    fn overview(&self) -> TableOverview;
}

fn missing(name: &str) -> CoreError {
    CoreError::MissingColumn {
        column: name.to_string(),
    }
}

impl DescribeExt for DataFrame {
    fn require_columns(&self, names: &[&str]) -> Result<()> {
        let present = self.get_column_names();
        match names
            .iter()
            .find(|name| !present.iter().any(|p| p.as_str() == **name))
        {
            Some(name) => Err(missing(name).into()),
            None => Ok(()),
        }
    }

    fn numeric_values(&self, name: &str) -> Result<Vec<f64>> {
        let column = self.column(name).map_err(|_| missing(name))?;
        if !is_numeric_dtype(column.dtype()) {
            return Err(CoreError::NonNumericColumn {
                column: name.to_string(),
                dtype: column.dtype().to_string(),
            }
            .into());
        }

        let as_float = column.cast(&DataType::Float64)?;
        let values: Option<Vec<f64>> = as_float.f64()?.into_iter().collect();
        values.ok_or_else(|| {
            CoreError::InvalidInput(format!("column '{name}' contains missing values")).into()
        })
    }

    fn is_integral(&self, name: &str) -> Result<bool> {
        let column = self.column(name).map_err(|_| missing(name))?;
        Ok(is_integer_dtype(column.dtype()))
    }

    #[instrument(skip(self))]
    fn profile(&self, name: &str) -> Result<ColumnProfile> {
        let values = self.numeric_values(name)?;
        let integral = self.is_integral(name)?;
        let summary = summarize(&values).map_err(|err| err.with_column(name))?;
        let outliers = classify(&values, summary.q1, summary.q3);

        debug!(
            count = summary.count,
            outliers = outliers.count(),
            "profiled column"
        );

        Ok(ColumnProfile {
            name: name.to_string(),
            values,
            integral,
            summary,
            outliers,
        })
    }

    fn overview(&self) -> TableOverview {
        let (rows, columns) = self.shape();
        let dtypes = self
            .get_columns()
            .iter()
            .map(|c| (c.name().to_string(), c.dtype().to_string()))
            .collect();
        let kinds = self
            .get_columns()
            .iter()
            .map(|c| (c.name().to_string(), VariableKind::classify(c.name(), c.dtype())))
            .collect();

        TableOverview {
            rows,
            columns,
            dtypes,
            kinds,
        }
    }
}
