use super::matrix::FloatMatrix;

pub struct BackSubstitution {
    pub matrix: FloatMatrix,
}

impl BackSubstitution {
    pub fn of(b: &FloatMatrix) -> Self {
        Self { matrix: b.clone() }
    }

    pub fn go_to_reduced_echelon_form(&mut self) {
        let last_col_idx = self.matrix.number_of_columns - 1;
        for i in 0..self.matrix.rows.len() {
            let pivot = match self.matrix.leading_entry(i) {
                // a zero row, or a row reading 0 = nonzero: no pivots left to
                // normalize below this point, return what was computed so far
                None => return,
                Some(column) if column == last_col_idx => return,
                Some(column) => column,
            };
            self.normalize_pivot_row(i, pivot);
            for j in 0..i {
                self.matrix.reduce_row(i, j, pivot);
            }
        }
    }

    fn normalize_pivot_row(&mut self, row: usize, pivot: usize) {
        let divisor = self.matrix.rows[row][pivot];
        for value in &mut self.matrix.rows[row] {
            *value /= divisor;
        }
    }
}
