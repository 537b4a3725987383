use cb_fuels::{FlowMode, FuelCatalog, FuelPhase, Mixture, PERCENTAGE_TOLERANCE};
use std::path::PathBuf;

fn data_file() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to crates
    path.pop(); // go to repo root
    path.push("data");
    path.push("fuels.json");
    path
}

#[test]
fn loads_shipped_catalog() {
    let catalog = FuelCatalog::from_json_path(&data_file()).expect("catalog should load");
    assert_eq!(catalog.len(), 5);

    let lignite = catalog.require("lignite").unwrap();
    assert_eq!(lignite.phase, FuelPhase::Solid);
    assert_eq!(lignite.moisture_content, 30.0);

    // Symbol is derived when the record leaves it out.
    assert_eq!(catalog.require("biogas").unwrap().symbol, "CH₂.₄O₀.₈");
    assert_eq!(catalog.require("light-fuel-oil").unwrap().symbol, "C₁₂H₂₃");
}

#[test]
fn missing_file_is_io_error() {
    let err = FuelCatalog::from_json_path(&data_file().with_file_name("nope.json")).unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn shipped_fuels_form_a_mass_metered_blend() {
    let catalog = FuelCatalog::from_json_path(&data_file()).unwrap();
    let mixture = Mixture::default()
        .with(catalog.require("lignite").unwrap().clone(), 70.0)
        .with(catalog.require("light-fuel-oil").unwrap().clone(), 30.0);

    mixture.validate(PERCENTAGE_TOLERANCE).unwrap();
    assert_eq!(mixture.flow_mode(), FlowMode::Mass);
    assert!(mixture.mean_elements().unwrap().stoich_o2() > 0.0);
}

#[test]
fn data_file_and_builtin_catalog_merge() {
    let mut catalog = FuelCatalog::builtin();
    let builtin_len = catalog.len();
    let file = FuelCatalog::from_json_path(&data_file()).unwrap();
    catalog.extend_from(&file);
    // methane and propane already exist in the builtin catalog
    assert_eq!(catalog.len(), builtin_len + 3);
}
