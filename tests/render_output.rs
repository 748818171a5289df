use fairmap::{render, MapConfigLoader, MapGenerator};

#[test]
fn fixture_renders_to_png() {
    let loader = MapConfigLoader::new(env!("CARGO_MANIFEST_DIR"));
    let config = loader.load("maps/duel_small.yaml").unwrap();
    let map = MapGenerator::from_config(&config)
        .unwrap()
        .generate_seeded(config.seed)
        .unwrap();

    let temp_dir = tempfile::tempdir().unwrap();
    let output = temp_dir.path().join(config.output_path());
    render::save_png(&map, config.render.cell_size, &output).unwrap();

    assert!(output.exists(), "expected {} to exist", output.display());
    let img = image::open(&output).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (10 * 12, 8 * 12));
}

#[test]
fn zero_hill_map_renders_without_dividing_by_zero() {
    let map = MapGenerator::builder(5, 5)
        .num_hills(0)
        .build()
        .unwrap()
        .generate_seeded(0)
        .unwrap();
    let img = render::render_map(&map, 6).unwrap();
    assert!(img.pixels().all(|p| p.0[1] == 0));
}
