#[cfg(test)]
mod _tests_dispersion_solver {
    use super::super::dispersion_solver::{compute_dispersion_vs_phase, solve};
    use super::super::sweep::linspace;
    use crate::error::Error;
    use crate::hamiltonian::PhysicalParameters;
    use crate::interfaces::ModelVariant;
    use crate::junction::{make_infinite_junction, make_infinite_junction_with};
    use std::f64::consts::PI;

    fn params() -> PhysicalParameters {
        PhysicalParameters::new(0.4, 0.2, 1.0)
    }

    #[test]
    fn test_table_shape() {
        let model = make_infinite_junction(6).unwrap();
        let phases = linspace(0.0, 2.0 * PI, 7);
        let momenta = linspace(-PI, PI, 11);

        let table = solve(&model, &phases, &momenta, &params()).unwrap();

        assert_eq!(table.phases, phases);
        assert_eq!(table.momenta, momenta);
        assert_eq!(table.len(), 7);
        assert_eq!(table.num_bands(), 12);
        for row in &table.dispersions {
            assert_eq!(row.len(), 11);
            assert!(row.iter().all(|energies| energies.len() == 12));
        }
    }

    #[test]
    fn test_rows_match_direct_evaluation() {
        let model = make_infinite_junction_with(4, ModelVariant::Spinful).unwrap();
        let run = params().with_rashba(0.5).with_zeeman(0.1, 0.0, 0.0);
        let phases = [0.3, 2.0, -1.0];
        let momenta = [-1.0, 0.0, 0.5, 2.0];

        let table = solve(&model, &phases, &momenta, &run).unwrap();

        for (i, &phase) in phases.iter().enumerate() {
            for (j, &k) in momenta.iter().enumerate() {
                let direct = model.evaluate(k, &run.with_phase(phase)).unwrap();
                assert_eq!(table.dispersions[i][j], direct);
            }
        }
    }

    #[test]
    fn test_phase_in_params_is_overridden() {
        let model = make_infinite_junction(4).unwrap();
        let momenta = [0.2];
        let a = solve(&model, &[1.0], &momenta, &params().with_phase(0.0)).unwrap();
        let b = solve(&model, &[1.0], &momenta, &params().with_phase(3.0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_phases_fail_fast() {
        let model = make_infinite_junction(4).unwrap();
        let result = solve(&model, &[], &[0.0, 1.0], &params());
        assert!(matches!(result, Err(Error::DegenerateInput(_))));
    }

    #[test]
    fn test_empty_momenta_fail_fast() {
        let model = make_infinite_junction(4).unwrap();
        let result = solve(&model, &[0.0], &[], &params());
        assert!(matches!(result, Err(Error::DegenerateInput(_))));
    }

    #[test]
    fn test_compute_dispersion_vs_phase_builds_model() {
        let table = compute_dispersion_vs_phase(
            3,
            &[0.0, PI],
            &[0.0],
            &params(),
            ModelVariant::Spinful,
        )
        .unwrap();
        assert_eq!(table.num_bands(), 12);

        let err = compute_dispersion_vs_phase(0, &[0.0], &[0.0], &params(), ModelVariant::ParticleHole);
        assert!(matches!(err, Err(Error::InvalidWidth(0))));
    }

    #[test]
    fn test_table_accessors() {
        let model = make_infinite_junction(2).unwrap();
        let table = solve(&model, &[0.0, 1.0], &[-1.0, 0.0, 1.0], &params()).unwrap();

        assert_eq!(table.spectrum_at(1).map(|s| s.len()), Some(3));
        assert!(table.spectrum_at(2).is_none());

        let lowest = table.band(0, 0).unwrap();
        assert_eq!(lowest.len(), 3);
        assert!(lowest.iter().all(|e| *e < 0.0));
        assert!(table.band(0, 4).is_none());
    }
}
