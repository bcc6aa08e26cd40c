//! SQL output formatting.
//!
//! The rendered text is accepted by [`Parser`](super::Parser), so a parsed
//! statement can be printed and parsed again.

use core::fmt::{self, Display};

use super::parser::{InsertStatement, SelectStatement, Statement};

impl Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT ")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}")?;
        }
        write!(f, " FROM {}", self.table_name)
    }
}

impl Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "INSERT INTO `{}` VALUES ", self.table_name)?;
        for (i, (key, row)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "('{key}'")?;
            for value in row {
                write!(f, ", '{value}'")?;
            }
            write!(f, ")")?;
        }
        write!(f, ";")
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Select(select) => Display::fmt(select, f),
            Statement::Insert(insert) => Display::fmt(insert, f),
        }
    }
}
