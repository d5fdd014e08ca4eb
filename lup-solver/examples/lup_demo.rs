use lup_solver::{
    algorithms::{decompose_with_observer, determinant, invert, solve},
    LupCoreError, SquareMatrix,
};

fn print_matrix(matrix: &SquareMatrix<f64>) {
    for (i, row) in matrix.rows().enumerate() {
        for (j, value) in row.iter().enumerate() {
            println!("a[{}][{}] = {:.6}", i, j, value);
        }
    }
}

fn main() -> Result<(), LupCoreError> {
    // Initialize logging based on RUST_LOG environment variable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let n = 4;
    let mut a = SquareMatrix::from_rows(vec![
        vec![1.0, 2.0, 3.0, 4.0],
        vec![5.0, 0.0, 6.0, 0.0],
        vec![7.0, 0.0, 9.0, 10.0],
        vec![11.0, 0.0, 12.0, 13.0],
    ])?;
    let original = a.clone();
    log::info!("Decomposing {}x{} matrix:\n{:.1}", n, n, original);

    let p = decompose_with_observer(&mut a, 1e-10, |step| {
        log::info!(
            "Column {}: pivot {} taken from row {}",
            step.column,
            step.pivot,
            step.pivot_row
        );
        print_matrix(step.matrix);
        println!("\n");
    })?;

    print_matrix(&a);
    log::info!("Permutation (flat): {:?}", p.to_flat());

    let det = determinant(&a, &p);
    println!("det: {:.6}", det);

    let b = [1.0, 1.0, 1.0, 1.0];
    let x = solve(&a, &p, &b);
    log::info!("Solution of A x = {:?}: {:?}", b, x);

    let inv = invert(&a, &p);
    let residual = original
        .matmul(&inv)?
        .max_abs_diff(&SquareMatrix::identity(n))
        .unwrap_or(f64::NAN);
    log::info!("Inverse:\n{:.6}max |A * inv(A) - I| = {:e}", inv, residual);

    Ok(())
}
