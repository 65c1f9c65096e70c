use std::fmt;

use anyhow::{ensure, Result};
use itertools::Itertools;

#[derive(Debug, Clone, PartialEq)]
pub struct FloatMatrix {
    pub number_of_columns: usize,
    pub rows: Vec<Vec<f64>>,
}

impl FloatMatrix {
    pub fn zeroes(rows: usize, cols: usize) -> Self {
        Self {
            number_of_columns: cols,
            rows: (0..rows).map(|_| vec![0.0; cols]).collect(),
        }
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        ensure!(!rows.is_empty(), "a matrix needs at least one row");
        let number_of_columns = rows[0].len();
        ensure!(number_of_columns > 0, "a matrix needs at least one column");
        for (idx, row) in rows.iter().enumerate() {
            ensure!(
                row.len() == number_of_columns,
                "row {} has {} columns, every row must have {}",
                idx,
                row.len(),
                number_of_columns
            );
        }
        Ok(Self {
            number_of_columns,
            rows,
        })
    }

    pub fn set(&mut self, r: usize, c: usize, v: f64) {
        self.rows[r][c] = v;
    }

    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.rows[r][c]
    }

    // column of the first nonzero entry of a row, None for a zero row
    pub fn leading_entry(&self, row: usize) -> Option<usize> {
        self.rows[row].iter().position(|&v| v != 0.0)
    }

    // leading entries strictly left of the last column; for an augmented
    // matrix in echelon form these are the pivot columns, anything missing
    // from the coefficient block is a free column
    pub fn pivot_columns(&self) -> Vec<usize> {
        let last_col_idx = self.number_of_columns - 1;
        (0..self.rows.len())
            .filter_map(|row| self.leading_entry(row))
            .filter(|&column| column < last_col_idx)
            .collect()
    }
}

impl fmt::Display for FloatMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.rows
                .iter()
                .map(|row| format!("[{}]", row.iter().join(", ")))
                .join("\n")
        )
    }
}
