use densa::{add, mul, scale, sub, Axis, Matrix, MatrixError};

const TOL: f64 = 1e-12;

fn assert_matrix_near(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64, msg: &str) {
    assert_eq!(a.nrows(), b.nrows(), "{}: row count", msg);
    assert_eq!(a.ncols(), b.ncols(), "{}: column count", msg);
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            assert!(
                (a[(i, j)] - b[(i, j)]).abs() < tol,
                "{}: [{},{}] = {} vs {}",
                msg,
                i,
                j,
                a[(i, j)],
                b[(i, j)]
            );
        }
    }
}

// ── Construction ─────────────────────────────────────────────────────

#[test]
fn construction_shapes_and_contents() {
    let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    assert_eq!(m.nrows(), 2);
    assert_eq!(m.ncols(), 3);
    assert_eq!(m[(1, 2)], 6.0);

    let v = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(v[(1, 0)], 3.0);

    let z = Matrix::<f64>::zeros(2, 4);
    assert!(z.iter().all(|&x| x == 0.0));

    let id = Matrix::<f64>::eye(3);
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(id[(i, j)], if i == j { 1.0 } else { 0.0 });
        }
    }

    let f = Matrix::from_fn(2, 3, |i, j| (i * 3 + j) as i32);
    assert_eq!(f.as_slice(), &[0, 1, 2, 3, 4, 5]);

    let r = Matrix::from_row(&[1.0, 2.0, 3.0]);
    assert_eq!((r.nrows(), r.ncols()), (1, 3));
    let c = Matrix::from_col(&[1.0, 2.0, 3.0]);
    assert_eq!((c.nrows(), c.ncols()), (3, 1));
}

#[test]
#[should_panic(expected = "ragged rows")]
fn ragged_rows_panic() {
    let _ = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
}

#[test]
#[should_panic(expected = "does not match")]
fn from_vec_wrong_length_panics() {
    let _ = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]);
}

// ── Element access ───────────────────────────────────────────────────

#[test]
fn checked_get_and_set() {
    let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    assert_eq!(m.get(1, 1), Ok(4.0));
    assert_eq!(
        m.get(2, 0),
        Err(MatrixError::IndexOutOfBounds {
            row: 2,
            col: 0,
            nrows: 2,
            ncols: 2,
        })
    );

    m.set(0, 1, 9.0).unwrap();
    assert_eq!(m[(0, 1)], 9.0);
    assert!(m.set(0, 5, 0.0).is_err());
}

#[test]
#[should_panic(expected = "out of bounds")]
fn index_out_of_bounds_panics() {
    let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    // Both coordinates are checked; a flat offset in range must not excuse
    // a bad column.
    let _ = m[(0, 2)];
}

#[test]
fn row_iteration() {
    let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]);
    let rows: Vec<&[i32]> = m.rows().collect();
    assert_eq!(rows, vec![&[1, 2, 3][..], &[4, 5, 6][..]]);

    let mut sum = 0;
    for row in &m {
        sum += row.iter().sum::<i32>();
    }
    assert_eq!(sum, 21);
}

// ── Arithmetic ───────────────────────────────────────────────────────

#[test]
fn add_commutes() {
    let a = Matrix::from_fn(3, 4, |i, j| (i * 7 + j) as f64 * 0.5);
    let b = Matrix::from_fn(3, 4, |i, j| (j * 3 + i) as f64 * 1.5);
    assert_matrix_near(&add(&a, &b).unwrap(), &add(&b, &a).unwrap(), TOL, "a+b vs b+a");
}

#[test]
fn sub_self_is_zero() {
    let a = Matrix::from_fn(4, 3, |i, j| ((i + 1) * (j + 2)) as f64);
    assert_matrix_near(&sub(&a, &a).unwrap(), &Matrix::zeros(4, 3), TOL, "a-a");
}

#[test]
fn shape_mismatch_reports_both_shapes() {
    let a = Matrix::<f64>::zeros(2, 3);
    let b = Matrix::<f64>::zeros(3, 3);
    assert_eq!(
        add(&a, &b),
        Err(MatrixError::DimensionMismatch {
            lhs: (2, 3),
            rhs: (3, 3),
        })
    );
    assert_eq!(
        mul(&a, &Matrix::<f64>::zeros(2, 2)),
        Err(MatrixError::DimensionMismatch {
            lhs: (2, 3),
            rhs: (2, 2),
        })
    );
}

#[test]
fn operators_agree_with_checked_functions() {
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]);

    assert_eq!(&a + &b, add(&a, &b).unwrap());
    assert_eq!(&a - &b, sub(&a, &b).unwrap());
    assert_eq!(&a * &b, mul(&a, &b).unwrap());
    assert_eq!(&a * 2.0, scale(&a, 2.0));
    assert_eq!(2.0 * &a, scale(&a, 2.0));
}

#[test]
fn multiply_literal_2x2() {
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]);
    let expected = Matrix::from_rows(&[[19.0, 22.0], [43.0, 50.0]]);
    assert_eq!(mul(&a, &b).unwrap(), expected);
}

#[test]
fn multiply_rectangular() {
    // (2×3) · (3×2) → (2×2)
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let b = Matrix::from_rows(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
    let expected = Matrix::from_rows(&[[58.0, 64.0], [139.0, 154.0]]);
    assert_eq!(mul(&a, &b).unwrap(), expected);
}

#[test]
fn multiply_degenerate_dimensions() {
    // Any zero dimension short-circuits to a zero matrix of the result shape
    let cases = [(0, 3, 2), (2, 0, 3), (3, 2, 0)];
    for (m, k, n) in cases {
        let a = Matrix::<f64>::zeros(m, k);
        let b = Matrix::<f64>::zeros(k, n);
        let c = mul(&a, &b).unwrap();
        assert_eq!((c.nrows(), c.ncols()), (m, n), "shape for ({m},{k},{n})");
        assert!(c.iter().all(|&x| x == 0.0));
    }
}

#[test]
fn multiply_f32() {
    let a = Matrix::from_rows(&[[1.0_f32, 2.0], [3.0, 4.0]]);
    let b = Matrix::from_rows(&[[5.0_f32, 6.0], [7.0, 8.0]]);
    let c = mul(&a, &b).unwrap();
    assert_eq!(c[(0, 0)], 19.0);
    assert_eq!(c[(1, 1)], 50.0);
}

#[test]
fn multiply_integers() {
    let a = Matrix::from_rows(&[[1, 2], [3, 4]]);
    let b = Matrix::from_rows(&[[5, 6], [7, 8]]);
    assert_eq!(
        mul(&a, &b).unwrap(),
        Matrix::from_rows(&[[19, 22], [43, 50]])
    );
}

#[test]
fn element_wise_product_and_quotient() {
    let a = Matrix::from_rows(&[[1.0, 4.0], [9.0, 16.0]]);
    let b = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    assert_eq!(
        a.element_mul(&b).unwrap(),
        Matrix::from_rows(&[[1.0, 8.0], [27.0, 64.0]])
    );
    assert_eq!(
        a.element_div(&b).unwrap(),
        Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])
    );
    assert!(a.element_mul(&Matrix::zeros(2, 3)).is_err());
}

// ── Transpose and reductions ─────────────────────────────────────────

#[test]
fn transpose_shape_and_contents() {
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let t = a.transpose();
    assert_eq!((t.nrows(), t.ncols()), (3, 2));
    assert_eq!(t, Matrix::from_rows(&[[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]));
}

#[test]
fn double_transpose_is_identity() {
    let a = Matrix::from_fn(5, 7, |i, j| (i * 31 + j * 17) as f64 * 0.25);
    assert_eq!(a.transpose().transpose(), a);
}

#[test]
fn axis_sums() {
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    // Column axis collapses rows into one 1×n row
    assert_eq!(a.sum(Axis::Column), Matrix::from_row(&[5.0, 7.0, 9.0]));
    // Row axis collapses columns into one m×1 column
    assert_eq!(a.sum(Axis::Row), Matrix::from_col(&[6.0, 15.0]));
}

#[test]
fn powf_and_exp() {
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    assert_matrix_near(
        &a.powf(2.0),
        &Matrix::from_rows(&[[1.0, 4.0], [9.0, 16.0]]),
        TOL,
        "powf",
    );

    let e = Matrix::from_rows(&[[0.0, 1.0]]).exp();
    assert_eq!(e[(0, 0)], 1.0);
    assert!((e[(0, 1)] - std::f64::consts::E).abs() < TOL);
}

// ── Display ──────────────────────────────────────────────────────────

#[test]
fn display_bracket_glyphs() {
    let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    assert_eq!(format!("{}", m), "⎛\t1.0\t2.0\t⎞\n⎝\t3.0\t4.0\t⎠\n");

    let single = Matrix::from_row(&[1.5, 2.5]);
    assert_eq!(format!("{}", single), "(\t1.5\t2.5\t)\n");
}
