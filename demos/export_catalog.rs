use tline_zin::prelude::*;
use tline_zin::export::{export_catalog, SaveSettings};

fn main() {
    tracing_subscriber::fmt::init();
    std::fs::create_dir_all("data").unwrap();

    let mut store = CatalogStore::new(MemoryStore::new());
    store.load_or_bootstrap().unwrap();
    store.upsert(RlgcSet::new("Lossless", 0.0, 0.605e-3, 0.0, 0.0488e-6), |_| true).unwrap();

    let config = LineConfiguration {
        frequency: 1e3, // [Hz]
        line_length: 10.0, // [km]
        load_magnitude: 50.0, // [Ω]
        load_phase: 0.0, // [deg]
        ..LineConfiguration::default()
    };

    let written = export_catalog(
        &store,
        &config,
        SaveSettings {
            filename: "data/rlgc_profiles.h5",
            overwrite: true,
        },
        true,
    )
    .unwrap();
    println!("wrote {} profiles", written);
}
