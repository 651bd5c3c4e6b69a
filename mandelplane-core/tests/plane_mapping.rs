use mandelplane_core::{
    max_supported_zoom, pixel_to_plane, size_at_zoom, EngineConfig, PlaneWindow, Viewport,
};

#[test]
fn window_height_follows_aspect_ratio() {
    let config = EngineConfig::default();
    for (width, height) in [(800, 600), (1920, 1080), (500, 500), (300, 900)] {
        let viewport = Viewport::new(width, height).unwrap();
        let window = PlaneWindow::initial(&config, &viewport);
        let expected = config.base_height * height as f64 / width as f64;
        assert_eq!(window.size.0, config.base_width);
        assert!((window.size.1 - expected).abs() < 1e-12);
    }
}

#[test]
fn one_pixel_step_moves_by_pixel_size() {
    let config = EngineConfig::default();
    let viewport = Viewport::new(800, 600).unwrap();
    let mut window = PlaneWindow::initial(&config, &viewport);
    window.set_zoom(4, &config, &viewport);
    window.center = (-0.75, 0.1);

    let step = window.pixel_step(&viewport);
    let (re_a, im_a) = pixel_to_plane(100, 200, &window, &viewport);
    let (re_b, _) = pixel_to_plane(101, 200, &window, &viewport);
    let (_, im_c) = pixel_to_plane(100, 201, &window, &viewport);

    assert!((re_b - re_a - step).abs() < 1e-12);
    // Moving down a row lowers the imaginary part
    assert!((im_a - im_c - window.size.1 / 600.0).abs() < 1e-12);
}

#[test]
fn zoom_levels_are_geometric() {
    let config = EngineConfig {
        zoom_factor: 0.8,
        ..EngineConfig::default()
    };
    let viewport = Viewport::new(640, 480).unwrap();
    let (w0, _) = size_at_zoom(&config, &viewport, 0);
    let (w5, h5) = size_at_zoom(&config, &viewport, 5);
    let (w_neg, _) = size_at_zoom(&config, &viewport, -5);

    assert!((w5 / w0 - 0.8f64.powi(5)).abs() < 1e-12);
    assert!((h5 / w5 - 0.75).abs() < 1e-12);
    assert!((w0 * w0 - w5 * w_neg).abs() < 1e-9);
}

#[test]
fn wider_viewport_supports_less_depth() {
    let config = EngineConfig::default();
    let narrow = Viewport::new(200, 150).unwrap();
    let wide = Viewport::new(3200, 2400).unwrap();
    let center = (-0.75, 0.1);
    assert!(
        max_supported_zoom(&config, &narrow, center) > max_supported_zoom(&config, &wide, center)
    );
}
