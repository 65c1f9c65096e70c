use super::matrix::FloatMatrix;
use super::relative_error::relative_error;

// tolerate an accumulation of error 100 times larger than a single
// computation; crude, but it holds up while the entries share a dynamic range
pub const SNAP_TOLERANCE: f64 = 100.0 * f64::EPSILON;

impl FloatMatrix {
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.rows.swap(i, j);
    }

    // subtract factor * (source row) from the target row, with factor chosen
    // so the target entry at pivot_column becomes zero. entries whose update
    // lands within SNAP_TOLERANCE of cancelling are set to exactly 0.0 so
    // elimination noise does not masquerade as data.
    // the source entry at pivot_column must be nonzero.
    pub fn reduce_row(&mut self, source: usize, target: usize, pivot_column: usize) {
        let factor = self.rows[target][pivot_column] / self.rows[source][pivot_column];
        for k in 0..self.number_of_columns {
            let eliminated = factor * self.rows[source][k];
            if relative_error(self.rows[target][k], eliminated) < SNAP_TOLERANCE {
                self.rows[target][k] = 0.0;
            } else {
                self.rows[target][k] -= eliminated;
            }
        }
    }
}
