//! 服务错误定义

use std::fmt;

use tally_errors::AppError;

/// 单个字段约束违规
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// 校验错误，聚合全部违规字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryValidationError {
    violations: Vec<FieldViolation>,
}

impl EntryValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// 全部违规字段
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// 指定字段是否违规
    pub fn violates(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid timesheet entry: ")?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for EntryValidationError {}

impl From<EntryValidationError> for AppError {
    fn from(err: EntryValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}
