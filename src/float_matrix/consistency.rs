use super::matrix::FloatMatrix;

// expects a matrix already brought to echelon form. a row whose first nonzero
// entry sits in the last (right hand side) column asserts 0 = nonzero, so the
// system has no solution. all-zero rows never trigger.
pub fn inconsistent_system(a: &FloatMatrix) -> bool {
    let last_col_idx = a.number_of_columns - 1;
    for row in 0..a.rows.len() {
        if a.leading_entry(row) == Some(last_col_idx) {
            return true;
        }
    }
    false
}
