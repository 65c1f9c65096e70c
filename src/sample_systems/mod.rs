use anyhow::Result;

use crate::float_matrix::matrix::FloatMatrix;

// a 3x4 equilibrium system with the unique solution (500, 300, 400)
pub fn coupled_equilibrium() -> Result<FloatMatrix> {
    FloatMatrix::from_rows(vec![
        vec![1.0, -0.2, -0.3, 320.0],
        vec![-0.1, 1.0, -0.4, 90.0],
        vec![-0.2, -0.5, 1.0, 150.0],
    ])
}

// six flow-difference equations around a cycle. the coefficient rows sum to
// zero, so the right hand sides must too; these do not, and the system has no
// solution.
pub fn cyclic_network_flow() -> Result<FloatMatrix> {
    FloatMatrix::from_rows(vec![
        vec![1.0, -1.0, 0.0, 0.0, 0.0, 0.0, -100.0],
        vec![0.0, 1.0, -1.0, 0.0, 0.0, 0.0, 50.0],
        vec![0.0, 0.0, 1.0, -1.0, 0.0, 0.0, 120.0],
        vec![0.0, 0.0, 0.0, 1.0, -1.0, 0.0, 150.0],
        vec![0.0, 0.0, 0.0, 0.0, 1.0, -1.0, -80.0],
        vec![-1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 100.0],
    ])
}

// four measurements of two unknowns; the equations contradict each other
pub fn overdetermined_measurements() -> Result<FloatMatrix> {
    FloatMatrix::from_rows(vec![
        vec![160.0, 110.0, -310.0],
        vec![5.0, 2.0, -3.3],
        vec![6.0, 0.1, -2.46],
        vec![1.0, 0.4, -0.64],
    ])
}

// three homogeneous constraints on four unknowns, a parametrized family
pub fn homogeneous_underdetermined() -> Result<FloatMatrix> {
    FloatMatrix::from_rows(vec![
        vec![2.0, 0.0, -2.0, 0.0, 0.0],
        vec![4.0, 0.0, 0.0, -2.0, 0.0],
        vec![0.0, 2.0, 0.0, -1.0, 0.0],
    ])
}

// value and slope constraints pinning a cubic, solution (5, -13, 10, -3)
pub fn cubic_fit_constraints() -> Result<FloatMatrix> {
    FloatMatrix::from_rows(vec![
        vec![1.0, 1.0, 1.0, 1.0, -1.0],
        vec![1.0, 2.0, 4.0, 8.0, -5.0],
        vec![0.0, 1.0, 2.0, 3.0, -2.0],
        vec![0.0, 1.0, 4.0, 12.0, -9.0],
    ])
}

pub fn all() -> Result<Vec<(&'static str, FloatMatrix)>> {
    Ok(vec![
        ("coupled equilibrium", coupled_equilibrium()?),
        ("cyclic network flow", cyclic_network_flow()?),
        ("overdetermined measurements", overdetermined_measurements()?),
        ("homogeneous underdetermined", homogeneous_underdetermined()?),
        ("cubic fit constraints", cubic_fit_constraints()?),
    ])
}
