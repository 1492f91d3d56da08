// row-oriented table with named columns; cells are optional strings (None = null/missing)

/// A materialized tabular document.
///
/// Rows always have exactly one cell per column: short rows are padded with
/// missing cells and extra cells are dropped on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, mut row: Vec<Option<String>>) {
        row.resize(self.columns.len(), None);
        self.rows.push(row);
    }

    //builder-style helper, mostly for callers assembling tables by hand
    pub fn with_row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        self.push_row(cells.into_iter().map(|c| c.map(Into::into)).collect());
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Schema probe: position of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell lookup; `None` for a missing cell, an out-of-range row, or an absent column.
    pub fn cell(&self, row: usize, column: Option<usize>) -> Option<&str> {
        let col = column?;
        self.rows.get(row)?.get(col)?.as_deref()
    }

    /// All values of a column in row order. An absent column reads as empty.
    pub fn column_values(&self, column: Option<usize>) -> Vec<Option<&str>> {
        match column {
            Some(col) => self
                .rows
                .iter()
                .map(|r| r.get(col).and_then(|c| c.as_deref()))
                .collect(),
            None => Vec::new(),
        }
    }
}
