
#[cfg(test)]
mod _tests_sweep_config {
    use super::super::sweep::SweepConfig;
    use crate::interfaces::ModelVariant;
    use std::f64::consts::PI;

    #[test]
    fn test_default_matches_reference_run() {
        let config = SweepConfig::default();
        assert_eq!(config.width, 20);
        assert_eq!(config.variant, ModelVariant::ParticleHole);
        assert_eq!(config.phases().len(), 61);
        assert_eq!(config.momenta().len(), 121);
        assert_eq!(config.momenta()[0], -PI);
        assert_eq!(config.params.mu, 0.4);
        assert_eq!(config.params.delta, 0.2);
        assert_eq!(config.params.t, 1.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{
            "width": 8,
            "variant": "spinful",
            "params": { "alpha": 0.5, "zeeman": [0.0, 0.0, 0.1] }
        }"#;
        let config = SweepConfig::from_json(json).unwrap();
        assert_eq!(config.width, 8);
        assert_eq!(config.variant, ModelVariant::Spinful);
        assert_eq!(config.params.alpha, 0.5);
        assert_eq!(config.params.zeeman, [0.0, 0.0, 0.1]);
        assert_eq!(config.params.mu, 0.4);
        assert_eq!(config.phase_points, 61);
    }

    #[test]
    fn test_json_round_trip() {
        let config = SweepConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SweepConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(SweepConfig::from_json("{ \"width\": -1 }").is_err());
    }
}
