#[cfg(test)]
mod tests {
    use super::super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn approx_eq(a: f64, b: f64, tol: f64) {
        assert!(
            (a - b).abs() < tol,
            "approx_eq failed: {a} vs {b}, diff = {}, tol = {tol}",
            (a - b).abs()
        );
    }

    fn approx_eq_f32(a: f32, b: f32, tol: f32) {
        assert!(
            (a - b).abs() < tol,
            "approx_eq_f32 failed: {a} vs {b}, diff = {}, tol = {tol}",
            (a - b).abs()
        );
    }

    // =====================================================================
    // arithmetic
    // =====================================================================

    #[test]
    fn add_sub_mul_div_literal() {
        let x = [1.0_f64, 2.0, 3.0, 4.0];
        let y = [5.0_f64, 6.0, 7.0, 8.0];
        assert_eq!(add(&x, &y), vec![6.0, 8.0, 10.0, 12.0]);
        assert_eq!(sub(&x, &y), vec![-4.0, -4.0, -4.0, -4.0]);
        assert_eq!(mul(&x, &y), vec![5.0, 12.0, 21.0, 32.0]);
        assert_eq!(div(&[8.0, 9.0], &[2.0, 3.0]), vec![4.0, 3.0]);
    }

    #[test]
    fn add_empty_is_empty() {
        let out: Vec<f64> = add(&[], &[]);
        assert!(out.is_empty());
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn add_length_mismatch_panics() {
        let _ = add(&[1.0, 2.0], &[1.0]);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn dot_length_mismatch_panics() {
        let _ = dot(&[1.0, 2.0], &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn scalar_broadcast_variants() {
        assert_eq!(add_scalar(&[1.0, 2.0, 3.0], 10.0), vec![11.0, 12.0, 13.0]);
        assert_eq!(sub_scalar(&[1.0, 2.0, 3.0], 1.0), vec![0.0, 1.0, 2.0]);
        assert_eq!(mul_scalar(&[1.0, 2.0, 3.0], 2.0), vec![2.0, 4.0, 6.0]);
        assert_eq!(div_scalar(&[2.0, 4.0, 6.0], 2.0), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn scalar_broadcast_integers() {
        assert_eq!(add_scalar(&[1_i32, 2, 3], 10), vec![11, 12, 13]);
        assert_eq!(mul_scalar(&[1_i64, 2, 3], 3), vec![3, 6, 9]);
    }

    #[test]
    fn fmod_takes_sign_of_dividend() {
        assert_eq!(fmod(&[5.0, -5.0, 5.5], &[3.0, 3.0, 2.5]), vec![2.0, -2.0, 0.5]);
    }

    #[test]
    fn remainder_rounds_to_nearest() {
        // 5/3 ≈ 1.67 rounds to 2: 5 - 6 = -1. -5/3 rounds to -2: -5 + 6 = 1.
        assert_eq!(remainder(&[5.0, -5.0], &[3.0, 3.0]), vec![-1.0, 1.0]);
    }

    #[test]
    fn remainder_ties_round_to_even() {
        // 7.5/3 = 2.5 rounds to 2 (even), 4.5/3 = 1.5 rounds to 2 (even)
        assert_eq!(remainder(&[7.5, 4.5], &[3.0, 3.0]), vec![1.5, -1.5]);
    }

    #[test]
    fn sqrt_literal() {
        assert_eq!(sqrt(&[0.0, 1.0, 4.0, 9.0, 16.0]), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn dot_f64_and_integers() {
        assert_eq!(dot(&[1.0_f64, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        assert_eq!(dot(&[1_i32, 2, 3], &[4, 5, 6]), 32);
        let empty: [f64; 0] = [];
        assert_eq!(dot(&empty, &empty), 0.0);
    }

    #[test]
    fn dist_euclidean() {
        assert_eq!(dist(&[0.0, 3.0], &[4.0, 0.0]), 5.0);
        assert_eq!(dist(&[1.0, 2.0, 3.0], &[4.0, 6.0, 3.0]), 5.0);
        assert_eq!(dist(&[1.5, -2.5], &[1.5, -2.5]), 0.0);
    }

    // =====================================================================
    // exponential family
    // =====================================================================

    #[test]
    fn exp_known_points() {
        let out = exp(&[0.0_f64, 1.0, 2.0]);
        assert_eq!(out[0], 1.0);
        approx_eq(out[1], core::f64::consts::E, 1e-15);
        approx_eq(out[2], core::f64::consts::E * core::f64::consts::E, 1e-14);
    }

    #[test]
    fn exp2_and_log2_roundtrip() {
        assert_eq!(exp2(&[0.0, 1.0, 3.0]), vec![1.0, 2.0, 8.0]);
        assert_eq!(log2(&[1.0, 2.0, 8.0]), vec![0.0, 1.0, 3.0]);
    }

    #[test]
    fn ln_inverts_exp() {
        let x = [0.5_f64, 1.0, 2.0, 10.0];
        let back = ln(&exp(&x));
        for (a, b) in back.iter().zip(x.iter()) {
            approx_eq(*a, *b, 1e-14);
        }
    }

    #[test]
    fn log10_powers_of_ten() {
        let out = log10(&[1.0_f64, 10.0, 100.0, 1000.0]);
        for (i, v) in out.iter().enumerate() {
            approx_eq(*v, i as f64, 1e-14);
        }
    }

    #[test]
    fn pow_elementwise_exponents() {
        assert_eq!(pow(&[2.0, 3.0, 4.0], &[3.0, 2.0, 0.0]), vec![8.0, 9.0, 1.0]);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn pow_length_mismatch_panics() {
        let _ = pow(&[2.0, 3.0], &[1.0]);
    }

    #[test]
    fn powf_scalar_exponent() {
        assert_eq!(powf(&[2.0, 3.0, 4.0], 2.0), vec![4.0, 9.0, 16.0]);
        // fractional exponent: x^0.5 == sqrt(x)
        let roots = powf(&[4.0_f64, 9.0], 0.5);
        approx_eq(roots[0], 2.0, 1e-15);
        approx_eq(roots[1], 3.0, 1e-15);
    }

    #[test]
    fn powf_f32() {
        let out = powf(&[2.0_f32, 5.0], 3.0);
        approx_eq_f32(out[0], 8.0, 1e-5);
        approx_eq_f32(out[1], 125.0, 1e-4);
    }

    // =====================================================================
    // statistics
    // =====================================================================

    #[test]
    fn sum_family_mixed_signs() {
        let x = [1.0_f64, -2.0, 3.0, -4.0];
        assert_eq!(sum(&x), -2.0);
        assert_eq!(asum(&x), 10.0);
        assert_eq!(sumsq(&x), 30.0);
    }

    #[test]
    fn sum_family_empty_is_zero() {
        let x: [f64; 0] = [];
        assert_eq!(sum(&x), 0.0);
        assert_eq!(asum(&x), 0.0);
        assert_eq!(sumsq(&x), 0.0);
    }

    #[test]
    fn sum_integers() {
        assert_eq!(sum(&[1_i32, 2, 3, 4]), 10);
        assert_eq!(asum(&[1_i64, -2, 3]), 6);
    }

    #[test]
    fn mean_family_literal() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(meamg(&[1.0, -2.0, 3.0, -4.0]), 2.5);
        approx_eq(measq(&[1.0, 2.0, 3.0]), 14.0 / 3.0, 1e-14);
        approx_eq(rms(&[3.0, 4.0]), 12.5_f64.sqrt(), 1e-14);
    }

    #[test]
    fn mean_empty_is_nan() {
        assert!(mean::<f64>(&[]).is_nan());
        assert!(rms::<f64>(&[]).is_nan());
    }

    #[test]
    fn mean_f32() {
        approx_eq_f32(mean(&[1.0_f32, 2.0, 3.0]), 2.0, 1e-6);
        approx_eq_f32(rms(&[3.0_f32, 4.0]), 12.5_f32.sqrt(), 1e-6);
    }

    #[test]
    fn extrema_some_and_none() {
        let x = [3.0_f64, -1.0, 4.0, -1.0, 5.0];
        assert_eq!(max(&x), Some(5.0));
        assert_eq!(min(&x), Some(-1.0));
        assert_eq!(max::<f64>(&[]), None);
        assert_eq!(min::<f64>(&[]), None);
        assert_eq!(max(&[7.5_f64]), Some(7.5));
    }

    #[test]
    fn extrema_integers() {
        assert_eq!(max(&[3_i32, -1, 4, -1, 5]), Some(5));
        assert_eq!(min(&[3_i32, -1, 4, -1, 5]), Some(-1));
    }
}
