use crate::common::*;
use approx::assert_relative_eq;
use flyer::{
    components::{AircraftCatalog, AircraftSource, ConfigError},
    systems::IntegrationMethod,
    systems::FlightModel,
};
use pretty_assertions::assert_eq;

#[test]
fn test_shipped_catalog_loads() {
    let catalog = AircraftCatalog::from_file(catalog_path()).unwrap();
    assert_eq!(catalog.names(), vec!["generic", "glider", "trainer"]);

    let generic = catalog.get("generic").unwrap();
    assert_eq!(generic.name, "generic");
    assert_relative_eq!(generic.max_speed, 600.0 / 3.6, epsilon = 1e-9);
    assert_relative_eq!(generic.aspect_ratio, 12.0, epsilon = 1e-9);

    let trainer = catalog.get("trainer").unwrap();
    assert_relative_eq!(trainer.aspect_ratio, 7.5);
    assert!(trainer.side_force_vs_beta.is_some());
    assert!(trainer.path_deviation.is_some());

    let glider = catalog.get("glider").unwrap();
    assert_eq!(glider.max_thrust, 0.0);
    assert!(glider.path_deviation.is_none());
}

#[test]
fn test_catalog_source_flies() {
    let source = AircraftSource::Catalog {
        path: catalog_path(),
        name: "trainer".to_string(),
    };
    let spec = source.load().unwrap();
    let mut model = FlightModel::new(spec, level_state(300.0, 45.0))
        .with_method(IntegrationMethod::VelocityVerlet);
    model.set_throttle(0.5);

    for _ in 0..100 {
        model.update(0.02);
        assert_spatial_valid(&model.state().spatial);
    }
    assert!(model.state().spatial.position.y > 0.0);
}

#[test]
fn test_unknown_aircraft() {
    let source = AircraftSource::Catalog {
        path: catalog_path(),
        name: "zeppelin".to_string(),
    };
    assert!(matches!(
        source.load(),
        Err(ConfigError::UnknownAircraft(name)) if name == "zeppelin"
    ));
}

#[test]
fn test_missing_catalog_file() {
    let source = AircraftSource::Catalog {
        path: catalog_path().with_file_name("missing.yaml"),
        name: "generic".to_string(),
    };
    assert!(matches!(source.load(), Err(ConfigError::Io(_))));
}

#[test]
fn test_invalid_entry_names_aircraft_and_field() {
    let text = std::fs::read_to_string(catalog_path()).unwrap();
    let broken = text.replace("mass: 350.0", "mass: -350.0");
    let err = AircraftCatalog::from_yaml_str(&broken).unwrap_err();
    match err {
        ConfigError::Validation(msg) => {
            assert!(msg.starts_with("aircraft 'glider': mass"), "{}", msg)
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_unknown_field_is_rejected() {
    let yaml = "jet:\n  mass: 100.0\n  wingspan_typo: 3.0\n";
    assert!(matches!(
        AircraftCatalog::from_yaml_str(yaml),
        Err(ConfigError::Yaml(_))
    ));
}
