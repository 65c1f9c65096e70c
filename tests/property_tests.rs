//! Invariants that must hold for all valid inputs, complementing the unit
//! tests and the end-to-end scenarios.

use proptest::prelude::*;

use rref_solver::float_matrix::back_substitution::BackSubstitution;
use rref_solver::float_matrix::forward_elimination::ForwardElimination;
use rref_solver::float_matrix::matrix::FloatMatrix;
use rref_solver::float_matrix::relative_error::relative_error;
use rref_solver::float_matrix::solver::{solve, Solution};

// strictly diagonally dominant augmented system, guaranteed nonsingular.
// off-diagonal entries and right hand sides are read with a fixed stride of 5
// so the generated vectors can be sliced for any n up to 5.
fn dominant_augmented(n: usize, off: &[i32], rhs: &[i32]) -> FloatMatrix {
    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = Vec::with_capacity(n + 1);
        let mut magnitude = 0.0;
        for j in 0..n {
            let v = if i == j { 0.0 } else { f64::from(off[i * 5 + j]) };
            magnitude += v.abs();
            row.push(v);
        }
        row[i] = 100.0 + magnitude;
        row.push(f64::from(rhs[i]));
        rows.push(row);
    }
    FloatMatrix::from_rows(rows).unwrap()
}

fn integer_matrix(m: usize, n: usize, entries: &[i32]) -> FloatMatrix {
    let rows = (0..m)
        .map(|i| (0..n).map(|j| f64::from(entries[i * 6 + j])).collect())
        .collect();
    FloatMatrix::from_rows(rows).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_dominant_systems_reduce_to_identity_and_solve(
        n in 2usize..=5,
        off in prop::collection::vec(-5i32..=5, 25),
        rhs in prop::collection::vec(-100i32..=100, 5),
    ) {
        let system = dominant_augmented(n, &off, &rhs);
        let Solution::Reduced(reduced) = solve(&system).unwrap() else {
            return Err(TestCaseError::fail("dominant system reported no solution"));
        };
        for r in 0..n {
            for c in 0..n {
                let expected = if r == c { 1.0 } else { 0.0 };
                prop_assert_eq!(reduced.rows[r][c], expected, "entry ({}, {})", r, c);
            }
        }
        // the last column solves the input system
        for i in 0..n {
            let combined: f64 = (0..n).map(|j| system.rows[i][j] * reduced.rows[j][n]).sum();
            prop_assert!(
                (combined - system.rows[i][n]).abs() < 1e-6,
                "residual {} in equation {}",
                combined - system.rows[i][n],
                i
            );
        }
    }

    #[test]
    fn prop_a_contradictory_extra_equation_kills_the_system(
        n in 2usize..=5,
        off in prop::collection::vec(-5i32..=5, 25),
        rhs in prop::collection::vec(-100i32..=100, 5),
    ) {
        let mut system = dominant_augmented(n, &off, &rhs);
        let mut duplicate = system.rows[n - 1].clone();
        duplicate[n] += 1.0;
        system.rows.push(duplicate);
        prop_assert_eq!(solve(&system).unwrap(), Solution::NoSolution);
    }

    #[test]
    fn prop_back_substitution_is_idempotent(
        m in 1usize..=5,
        n in 2usize..=6,
        entries in prop::collection::vec(-5i32..=5, 30),
    ) {
        let input = integer_matrix(m, n, &entries);
        let mut elimination = ForwardElimination::of(&input);
        elimination.go_to_echelon_form();
        let mut first = BackSubstitution::of(&elimination.matrix);
        first.go_to_reduced_echelon_form();
        let mut second = BackSubstitution::of(&first.matrix);
        second.go_to_reduced_echelon_form();
        prop_assert_eq!(&first.matrix, &second.matrix);
    }

    #[test]
    fn prop_relative_error_of_a_value_with_itself_is_zero(a in -1e12f64..1e12) {
        prop_assert_eq!(relative_error(a, a), 0.0);
    }

    #[test]
    fn prop_relative_error_is_symmetric(a in -1e6f64..1e6, b in -1e6f64..1e6) {
        prop_assert_eq!(relative_error(a, b), relative_error(b, a));
    }
}
