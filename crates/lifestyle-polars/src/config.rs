//! Fixed analysis configuration: analyzed columns and variable kinds

use polars::prelude::DataType;
use std::fmt;

/// The three numeric columns the analysis summarizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnalyzedColumn {
    /// Minutes of physical activity per day
    PhysicalActivity,
    DailySteps,
    /// Resting heart rate in beats per minute
    HeartRate,
}

impl AnalyzedColumn {
    /// Every analyzed column, in report order
    pub const ALL: [AnalyzedColumn; 3] = [
        AnalyzedColumn::PhysicalActivity,
        AnalyzedColumn::DailySteps,
        AnalyzedColumn::HeartRate,
    ];

    /// Header name in the input file
    pub fn column_name(self) -> &'static str {
        match self {
            Self::PhysicalActivity => "Physical Activity Level",
            Self::DailySteps => "Daily Steps",
            Self::HeartRate => "Heart Rate",
        }
    }

    /// Names of every required column
    pub fn names() -> [&'static str; 3] {
        Self::ALL.map(Self::column_name)
    }

    /// Section heading in the text report
    pub fn heading(self) -> &'static str {
        match self {
            Self::PhysicalActivity => "Physical Activity (minutes)",
            Self::DailySteps => "Daily Steps",
            Self::HeartRate => "Heart Rate",
        }
    }

    /// Short name used in chart titles
    pub fn title(self) -> &'static str {
        match self {
            Self::PhysicalActivity => "Physical Activity",
            Self::DailySteps => "Daily Steps",
            Self::HeartRate => "Heart Rate",
        }
    }

    /// Axis description for chart panels
    pub fn axis_label(self) -> &'static str {
        match self {
            Self::PhysicalActivity => "Minutes of Physical Activity",
            Self::DailySteps => "Daily Steps",
            Self::HeartRate => "Heart Rate (bpm)",
        }
    }

    /// Unit of measurement used in annotations
    pub fn unit(self) -> &'static str {
        match self {
            Self::PhysicalActivity => "minutes",
            Self::DailySteps => "steps",
            Self::HeartRate => "bpm",
        }
    }
}

/// Statistical type of a dataset variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariableKind {
    Continuous,
    Integer,
    /// Ranked categories such as 1-10 scales
    Ordinal,
    /// Unordered categories
    Nominal,
}

impl VariableKind {
    pub const ALL: [VariableKind; 4] = [
        VariableKind::Continuous,
        VariableKind::Integer,
        VariableKind::Ordinal,
        VariableKind::Nominal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Continuous => "Continuous",
            Self::Integer => "Integer",
            Self::Ordinal => "Ordinal",
            Self::Nominal => "Nominal",
        }
    }

    /// Classify a column by name, falling back to its dtype
    ///
    /// The known columns of the sleep health dataset have a fixed kind. Any
    /// other column is Integer if integer-typed, Continuous if float-typed and
    /// Nominal otherwise.
    pub fn classify(name: &str, dtype: &DataType) -> Self {
        match name {
            "Sleep Duration" | "Age" => Self::Continuous,
            "Physical Activity Level" | "Daily Steps" => Self::Integer,
            "Quality of Sleep" | "Stress Level" => Self::Ordinal,
            "Gender" | "Occupation" | "BMI Category" | "Sleep Disorder" => Self::Nominal,
            _ if is_integer_dtype(dtype) => Self::Integer,
            _ if matches!(dtype, DataType::Float32 | DataType::Float64) => Self::Continuous,
            _ => Self::Nominal,
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub(crate) fn is_integer_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

pub(crate) fn is_numeric_dtype(dtype: &DataType) -> bool {
    is_integer_dtype(dtype) || matches!(dtype, DataType::Float32 | DataType::Float64)
}
