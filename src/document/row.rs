#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    first_col: usize,
    cells: Vec<String>,
}

impl Row {
    pub fn new(first_col: usize, cells: Vec<String>) -> Self {
        Self { first_col, cells }
    }

    pub fn first_col(&self) -> usize {
        self.first_col
    }

    // Exclusive
    pub fn last_col(&self) -> usize {
        self.first_col + self.cells.len()
    }

    pub fn cell_text(&self, col: usize) -> &str {
        col.checked_sub(self.first_col)
            .and_then(|offset| self.cells.get(offset))
            .map_or("", String::as_str)
    }
}
