use psychomatrix::render::svg;
use psychomatrix::{
    CalendarDate, CountingMode, DiskFontProvider, LayoutModel, MatrixConfig, MatrixRenderer,
    NumerologyEngine, TripleTable,
};

const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn renderer(config: &MatrixConfig) -> MatrixRenderer<DiskFontProvider> {
    MatrixRenderer::new(config, DiskFontProvider::new(config.fonts.search_paths.clone()))
}

#[test]
fn test_render_produces_png_with_configured_dimensions() {
    let config = MatrixConfig::default();
    let date = CalendarDate::new(1998, 11, 1).unwrap();
    let profile = NumerologyEngine::default().profile(&date);

    let image = renderer(&config).render("Марго", &profile).unwrap();

    assert_eq!(&image.as_bytes()[..8], &PNG_SIGNATURE);
    assert_eq!(image.width(), 1080);
    assert_eq!(image.height(), 1360);

    let decoded = resvg::tiny_skia::Pixmap::decode_png(image.as_bytes()).unwrap();
    assert_eq!(decoded.width(), 1080);
    assert_eq!(decoded.height(), 1360);
}

#[test]
fn test_render_is_deterministic() {
    let config = MatrixConfig::default();
    let date = CalendarDate::new(2000, 2, 29).unwrap();
    let profile = NumerologyEngine::default().profile(&date);
    let r = renderer(&config);

    let first = r.render("Ольга", &profile).unwrap();
    let second = r.render("Ольга", &profile).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_custom_canvas_dimensions() {
    let mut config = MatrixConfig::default();
    config.canvas.width = 540;
    config.canvas.height = 680;

    let date = CalendarDate::new(1990, 5, 10).unwrap();
    let profile = NumerologyEngine::default().profile(&date);

    let image = renderer(&config).render("Іван", &profile).unwrap();
    let decoded = resvg::tiny_skia::Pixmap::decode_png(image.as_bytes()).unwrap();
    assert_eq!(decoded.width(), 540);
    assert_eq!(decoded.height(), 680);
}

#[test]
fn test_zero_sectors_render_the_placeholder_not_zero() {
    // Base-only counting leaves most sectors empty for this date.
    let engine = NumerologyEngine::new(CountingMode::BaseOnly, TripleTable::V1);
    let date = CalendarDate::new(1998, 11, 1).unwrap();
    let profile = engine.profile(&date);
    assert_eq!(profile.counts.count(5), 0);

    let layout = LayoutModel::build(&MatrixConfig::default());
    let document = svg::document(&layout, "Марго", &profile, "DejaVu Sans");

    assert!(document.contains(svg::EM_DASH));
    assert!(
        !document.contains(">0<"),
        "a zero count leaked into the card as a digit"
    );
}

#[test]
fn test_life_path_is_always_literal() {
    let engine = NumerologyEngine::new(CountingMode::BaseOnly, TripleTable::V1);
    let date = CalendarDate::new(1998, 11, 1).unwrap();
    let profile = engine.profile(&date);

    let layout = LayoutModel::build(&MatrixConfig::default());
    let document = svg::document(&layout, "Марго", &profile, "DejaVu Sans");
    assert!(document.contains(&format!(">{}<", profile.life_path)));
}

#[test]
fn test_core_has_no_minimum_name_length() {
    // Short names are the host's problem; the core renders them as-is.
    let config = MatrixConfig::default();
    let date = CalendarDate::new(1998, 11, 1).unwrap();
    let profile = NumerologyEngine::default().profile(&date);

    let image = renderer(&config).render("A", &profile).unwrap();
    assert_eq!(&image.as_bytes()[..8], &PNG_SIGNATURE);
}

#[test]
fn test_rendered_file_round_trip() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output = temp_dir.path().join("matrix.png");

    let config = MatrixConfig::default();
    let date = CalendarDate::new(1969, 2, 11).unwrap();
    let profile = NumerologyEngine::default().profile(&date);
    assert_eq!(profile.life_path, 11);

    let image = renderer(&config).render("Марго", &profile).unwrap();
    std::fs::write(&output, image.as_bytes()).unwrap();

    let data = std::fs::read(&output).unwrap();
    assert_eq!(&data[..8], &PNG_SIGNATURE);
    assert_eq!(data.len(), image.as_bytes().len());
}
