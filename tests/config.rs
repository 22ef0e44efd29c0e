use std::fs;

use oni_rocket_calculator::config::{
    ConfigError, load_rockets, parse_component_assignment, parse_component_count,
    parse_fuel_mass, select_rocket,
};
use oni_rocket_calculator::{CalcError, ComponentKind, FuelType, OxidizerType, compute_metrics};

#[test]
fn bundled_toml_catalog_loads_in_file_order() {
    let rockets = load_rockets("configs/rockets").expect("rocket catalog");
    let names: Vec<_> = rockets.iter().filter_map(|r| r.name.as_deref()).collect();
    assert_eq!(names, ["Scout", "Hauler", "Tourist"]);

    let hauler = rockets[1].to_configuration().expect("hauler config");
    assert_eq!(hauler.fuel_type, FuelType::LiquidHydrogen);
    assert_eq!(hauler.oxidizer_type, OxidizerType::LiquidOxygen);
    assert_eq!(hauler.quantity(ComponentKind::CargoBay), 1);
    assert_eq!(hauler.quantity(ComponentKind::ResearchStation), 1);
    assert_eq!(compute_metrics(&hauler).unwrap().total_weight_kg, 8_700.0);
}

#[test]
fn bundled_yaml_catalog_matches_toml_entries() {
    let rockets = load_rockets("configs/rockets.yaml").expect("rocket yaml");
    assert_eq!(rockets.len(), 3);
    let scout = select_rocket(&rockets, Some("scout")).expect("scout");
    let metrics = compute_metrics(&scout.to_configuration().unwrap()).unwrap();
    assert_eq!(metrics.viable_distance_km, 3_200.0);

    let grounded = select_rocket(&rockets, Some("Grounded")).unwrap();
    let metrics = compute_metrics(&grounded.to_configuration().unwrap()).unwrap();
    assert!(!metrics.is_viable());
}

#[test]
fn select_defaults_to_first_and_reports_missing() {
    let rockets = load_rockets("configs/rockets.yaml").unwrap();
    assert_eq!(
        select_rocket(&rockets, None).unwrap().name.as_deref(),
        Some("Scout")
    );
    assert!(matches!(
        select_rocket(&rockets, Some("Apollo")),
        Err(ConfigError::NotFound(name)) if name == "Apollo"
    ));
    assert!(matches!(select_rocket(&[], None), Err(ConfigError::EmptyManifest)));
}

#[test]
fn single_toml_file_with_unknown_keys_fails_typed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.toml");
    fs::write(
        &path,
        "fuel = \"petroleum\"\noxidizer = \"fertilizer\"\nfuel_mass_kg = 10.0\n",
    )
    .unwrap();
    let rockets = load_rockets(&path).expect("parse");
    assert_eq!(rockets.len(), 1);
    assert_eq!(
        rockets[0].to_configuration(),
        Err(CalcError::UnknownOxidizerType("fertilizer".to_string()))
    );

    let path = dir.path().join("bad_component.yaml");
    fs::write(
        &path,
        "- fuel: steam\n  oxidizer: oxylite\n  fuel_mass_kg: 10\n  components:\n    warp_drive: 1\n",
    )
    .unwrap();
    let rockets = load_rockets(&path).unwrap();
    assert_eq!(
        rockets[0].to_configuration(),
        Err(CalcError::UnknownComponent("warp_drive".to_string()))
    );
}

#[test]
fn negative_manifest_quantities_are_invalid() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("negative.yaml");
    fs::write(
        &path,
        "- fuel: steam\n  oxidizer: oxylite\n  fuel_mass_kg: 10\n  components:\n    cargo_bay: -1\n- fuel: steam\n  oxidizer: oxylite\n  fuel_mass_kg: -5\n",
    )
    .unwrap();
    let rockets = load_rockets(&path).unwrap();
    for rocket in &rockets {
        assert!(matches!(
            rocket.to_configuration(),
            Err(CalcError::InvalidQuantity { .. })
        ));
    }
}

#[test]
fn aliased_component_keys_add_up_without_overflow() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("aliases.yaml");
    fs::write(
        &path,
        "- fuel: steam\n  oxidizer: oxylite\n  fuel_mass_kg: 10\n  components:\n    cargo_bay: 2\n    cargo-bay: 3\n\
         - fuel: steam\n  oxidizer: oxylite\n  fuel_mass_kg: 10\n  components:\n    cargo_bay: 4000000000\n    cargo-bay: 4000000000\n",
    )
    .unwrap();
    let rockets = load_rockets(&path).unwrap();

    let config = rockets[0].to_configuration().expect("summed aliases");
    assert_eq!(config.quantity(ComponentKind::CargoBay), 5);

    assert!(matches!(
        rockets[1].to_configuration(),
        Err(CalcError::InvalidQuantity { ref field, .. }) if field == "cargo_bay quantity"
    ));
}

#[test]
fn broken_toml_in_catalog_names_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("01_ok.toml"),
        "fuel = \"steam\"\noxidizer = \"oxylite\"\nfuel_mass_kg = 10.0\n",
    )
    .unwrap();
    fs::write(dir.path().join("02_broken.toml"), "fuel = \n").unwrap();

    let err = load_rockets(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Manifest { ref path, .. } if path.ends_with("02_broken.toml")));
    assert!(err.to_string().contains("02_broken.toml"));
}

#[test]
fn missing_file_and_malformed_yaml_surface_errors() {
    assert!(matches!(
        load_rockets("configs/does-not-exist.yaml"),
        Err(ConfigError::Io(_))
    ));

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "- fuel: [unterminated\n").unwrap();
    assert!(matches!(load_rockets(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn form_fuel_mass_treats_blank_and_garbage_as_zero() {
    assert_eq!(parse_fuel_mass(""), Ok(0.0));
    assert_eq!(parse_fuel_mass("   "), Ok(0.0));
    assert_eq!(parse_fuel_mass("lots"), Ok(0.0));
    assert_eq!(parse_fuel_mass(" 1250.5 "), Ok(1_250.5));
    assert!(matches!(
        parse_fuel_mass("-10"),
        Err(CalcError::InvalidQuantity { .. })
    ));
}

#[test]
fn form_component_counts() {
    assert_eq!(parse_component_count(""), Ok(0));
    assert_eq!(parse_component_count("3"), Ok(3));
    assert_eq!(parse_component_count("two"), Ok(0));
    assert!(matches!(
        parse_component_count("-2"),
        Err(CalcError::InvalidQuantity { .. })
    ));
}

#[test]
fn component_assignments() {
    assert_eq!(
        parse_component_assignment("liquid-cargo-bay=2").unwrap(),
        (ComponentKind::LiquidCargoBay, 2)
    );
    assert!(matches!(
        parse_component_assignment("cargo_bay"),
        Err(ConfigError::InvalidAssignment(_))
    ));
    assert!(matches!(
        parse_component_assignment("hull=1"),
        Err(ConfigError::Calc(CalcError::UnknownComponent(_)))
    ));
}
