use super::matrix::FloatMatrix;

pub struct ForwardElimination {
    pub matrix: FloatMatrix,
    active_row: usize,
}

impl ForwardElimination {
    pub fn of(b: &FloatMatrix) -> Self {
        Self {
            matrix: b.clone(),
            active_row: 0,
        }
    }

    pub fn go_to_echelon_form(&mut self) {
        while self.active_row + 1 < self.matrix.rows.len() {
            let Some((row, column)) = self.leftmost_nonzero_in_remaining_rows() else {
                // the whole unprocessed block is zero
                return;
            };
            if row > self.active_row {
                self.matrix.swap_rows(self.active_row, row);
            }
            self.eliminate_below_pivot(column);
            self.active_row += 1;
        }
    }

    // globally leftmost nonzero entry among the rows at or below the active
    // row; the topmost row reaching that column wins. the column scan starts
    // at the active row index, columns left of it were cleared by earlier
    // pivots.
    fn leftmost_nonzero_in_remaining_rows(&self) -> Option<(usize, usize)> {
        let mut best: Option<(usize, usize)> = None;
        for h in self.active_row..self.matrix.rows.len() {
            for k in self.active_row..self.matrix.number_of_columns {
                let beats_best = best.map_or(true, |(_, column)| k < column);
                if self.matrix.rows[h][k] != 0.0 && beats_best {
                    best = Some((h, k));
                    break;
                }
            }
        }
        best
    }

    fn eliminate_below_pivot(&mut self, pivot_column: usize) {
        for h in self.active_row + 1..self.matrix.rows.len() {
            self.matrix.reduce_row(self.active_row, h, pivot_column);
        }
    }
}
