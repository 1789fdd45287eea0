use std::fmt;

/// Which coordinate of a click was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
        }
    }
}

/// A click landed outside the board.
///
/// Rows are validated before columns, so when both are out of range the error names the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidIndex {
    pub axis: Axis,
    /// The rejected index as supplied by the caller
    pub index: i32,
    /// Length of the rejected dimension (valid indices are `0..len`)
    pub len: usize,
}

impl InvalidIndex {
    pub fn row(index: i32, len: usize) -> Self {
        Self {
            axis: Axis::Row,
            index,
            len,
        }
    }

    pub fn column(index: i32, len: usize) -> Self {
        Self {
            axis: Axis::Column,
            index,
            len,
        }
    }

    pub fn code(self) -> &'static str {
        match self.axis {
            Axis::Row => "invalid_row",
            Axis::Column => "invalid_column",
        }
    }

    pub fn message(self) -> &'static str {
        match self.axis {
            Axis::Row => "Invalid row index",
            Axis::Column => "Invalid column index",
        }
    }
}

impl fmt::Display for InvalidIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} not in 0..{}",
            self.message(),
            self.index,
            self.len
        )
    }
}

impl std::error::Error for InvalidIndex {}
