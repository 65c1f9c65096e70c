use anyhow::{ensure, Result};

use super::back_substitution::BackSubstitution;
use super::consistency::inconsistent_system;
use super::forward_elimination::ForwardElimination;
use super::matrix::FloatMatrix;

#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    Reduced(FloatMatrix),
    NoSolution,
}

pub fn solve(augmented: &FloatMatrix) -> Result<Solution> {
    ensure!(
        augmented.number_of_columns >= 2,
        "an augmented system needs at least one coefficient column and a right hand side, got {} columns",
        augmented.number_of_columns
    );
    let mut elimination = ForwardElimination::of(augmented);
    elimination.go_to_echelon_form();
    let echelon = elimination.matrix;
    log::debug!("echelon form:\n{echelon}");
    // the contradiction scan is only meaningful on the echelon form itself
    if inconsistent_system(&echelon) {
        return Ok(Solution::NoSolution);
    }
    let mut substitution = BackSubstitution::of(&echelon);
    substitution.go_to_reduced_echelon_form();
    Ok(Solution::Reduced(substitution.matrix))
}
