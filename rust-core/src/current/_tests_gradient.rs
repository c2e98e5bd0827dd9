#[cfg(test)]
mod _tests_gradient {
    use approx::assert_abs_diff_eq;
    use super::super::gradient::gradient;
    use crate::error::Error;

    const TOL: f64 = 1e-10;

    #[test]
    fn test_uniform_spacing_matches_centred_difference() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let f = [0.0, 1.0, 4.0, 9.0, 16.0];
        let g = gradient(&f, &x).unwrap();
        assert_eq!(g.len(), 5);
        // interior exact for x^2, ends one-sided
        assert_abs_diff_eq!(g[0], 1.0, epsilon = TOL);
        assert_abs_diff_eq!(g[1], 2.0, epsilon = TOL);
        assert_abs_diff_eq!(g[2], 4.0, epsilon = TOL);
        assert_abs_diff_eq!(g[3], 6.0, epsilon = TOL);
        assert_abs_diff_eq!(g[4], 7.0, epsilon = TOL);
    }

    #[test]
    fn test_non_uniform_spacing_is_exact_for_quadratics() {
        let x = [0.0, 0.1, 0.5, 0.6, 1.4, 2.0];
        let f: Vec<f64> = x.iter().map(|x| 3.0 * x * x - 2.0 * x + 1.0).collect();
        let g = gradient(&f, &x).unwrap();
        for i in 1..x.len() - 1 {
            let exact = 6.0 * x[i] - 2.0;
            assert_abs_diff_eq!(g[i], exact, epsilon = TOL);
        }
    }

    #[test]
    fn test_linear_function_exact_everywhere() {
        let x = [-1.0, -0.2, 0.3, 2.0];
        let f: Vec<f64> = x.iter().map(|x| 5.0 * x - 1.0).collect();
        let g = gradient(&f, &x).unwrap();
        for d in &g {
            assert_abs_diff_eq!(*d, 5.0, epsilon = TOL);
        }
    }

    #[test]
    fn test_decreasing_coordinates() {
        let x = [2.0, 1.0, 0.0];
        let f = [4.0, 2.0, 0.0];
        let g = gradient(&f, &x).unwrap();
        for d in &g {
            assert_abs_diff_eq!(*d, 2.0, epsilon = TOL);
        }
    }

    #[test]
    fn test_two_points() {
        let g = gradient(&[1.0, 3.0], &[0.0, 0.5]).unwrap();
        assert_eq!(g, vec![4.0, 4.0]);
    }

    #[test]
    fn test_rejects_short_and_mismatched_input() {
        assert!(matches!(gradient(&[1.0], &[0.0]), Err(Error::DegenerateInput(_))));
        assert!(matches!(gradient(&[], &[]), Err(Error::DegenerateInput(_))));
        assert!(matches!(
            gradient(&[1.0, 2.0], &[0.0, 1.0, 2.0]),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_repeated_coordinate() {
        let result = gradient(&[1.0, 2.0, 3.0], &[0.0, 1.0, 1.0]);
        assert!(matches!(result, Err(Error::DegenerateInput(_))));
    }
}
