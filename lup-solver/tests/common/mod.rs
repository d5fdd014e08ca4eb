#![allow(dead_code)]

use lup_solver::SquareMatrix;

// Helper for float comparison in tests
pub fn assert_approx_eq_vec(a: &[f64], b: &[f64], tolerance: f64) {
    assert_eq!(a.len(), b.len(), "Vector lengths differ");
    for i in 0..a.len() {
        let diff = (a[i] - b[i]).abs();
        assert!(
            diff <= tolerance,
            "Verification failed at index {}: expected {}, got {}, diff {}",
            i,
            b[i],
            a[i],
            diff
        );
    }
}

pub fn assert_approx_eq_matrix(a: &SquareMatrix<f64>, b: &SquareMatrix<f64>, tolerance: f64) {
    assert_eq!(a.dim(), b.dim(), "Matrix dimensions differ");
    for (i, (ra, rb)) in a.rows().zip(b.rows()).enumerate() {
        for (j, (x, y)) in ra.iter().zip(rb).enumerate() {
            let diff = (x - y).abs();
            assert!(
                diff <= tolerance,
                "Verification failed at ({}, {}): expected {}, got {}, diff {}",
                i,
                j,
                y,
                x,
                diff
            );
        }
    }
}

/// The 4x4 matrix used by the reference driver program.
pub fn reference_matrix() -> SquareMatrix<f64> {
    SquareMatrix::from_rows(vec![
        vec![1.0, 2.0, 3.0, 4.0],
        vec![5.0, 0.0, 6.0, 0.0],
        vec![7.0, 0.0, 9.0, 10.0],
        vec![11.0, 0.0, 12.0, 13.0],
    ])
    .expect("reference matrix is square")
}

/// Cofactor expansion along the first row. Independent of the LU code.
pub fn cofactor_determinant(rows: &[Vec<f64>]) -> f64 {
    let n = rows.len();
    match n {
        0 => 1.0,
        1 => rows[0][0],
        _ => (0..n)
            .map(|c| {
                let minor: Vec<Vec<f64>> = rows[1..]
                    .iter()
                    .map(|r| {
                        r.iter()
                            .enumerate()
                            .filter(|&(j, _)| j != c)
                            .map(|(_, &v)| v)
                            .collect()
                    })
                    .collect();
                let sign = if c % 2 == 0 { 1.0 } else { -1.0 };
                sign * rows[0][c] * cofactor_determinant(&minor)
            })
            .sum(),
    }
}

pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .is_test(true)
        .try_init();
}
