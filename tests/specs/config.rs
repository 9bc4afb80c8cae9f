//! Loading simulation tuning from TOML.

use crate::prelude::*;
use colony_engine::world::GridMap;
use std::io::Write;

fn config_file(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

#[test]
fn configured_speeds_shape_the_work() {
    let file = config_file("dig_ticks = 2\nmove_ticks_per_tile = 2\n");
    let mut sim = Simulation::from_config_file(GridMap::from_rows(&["..#"]), file.path()).unwrap();
    let dwarf = worker(&mut sim, "Urist", pt(0, 0), &[Category::Digging]);
    dig_site(&mut sim, pt(2, 0));

    let trace = trace(&mut sim, dwarf, 6);

    similar_asserts::assert_eq!(
        trace,
        vec![
            "1: (0, 0) dig/locate",
            "2: (0, 0) dig/locate",
            "3: (1, 0) dig/dig",
            "4: (1, 0) dig/dig",
            "5: (1, 0) idle",
            "6: (1, 0) idle",
        ]
    );
}

#[test]
fn empty_file_gives_defaults() {
    let file = config_file("");
    let sim = Simulation::from_config_file(GridMap::from_rows(&["."]), file.path()).unwrap();
    assert_eq!(sim.world().config, SimConfig::default());
}

#[test]
fn unknown_keys_are_rejected() {
    let file = config_file("dig_speed = 4\n");
    let err = Simulation::from_config_file(GridMap::from_rows(&["."]), file.path()).unwrap_err();
    assert!(err.to_string().contains("dig_speed"), "{err}");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("colony.toml");
    assert!(Simulation::from_config_file(GridMap::from_rows(&["."]), &path).is_err());
}
