use letterbox::core::settings::BORDER_CROP_KEY;
use letterbox::core::{DisplayContext, DisplaySettings, DisplayTarget, SourceGeometry};
use letterbox::math::build_quad;
use letterbox::{
    compute_cropped_scale, compute_scale, ConfigStore, ScaleError, ScaledRect, ScreenMode, Size,
};

const TV: Size = Size::new(1920.0, 1080.0);
const DRC: Size = Size::new(854.0, 480.0);

/// Scale on the primary display, which must succeed
fn on_tv(source: Size, mode: ScreenMode) -> ScaledRect {
    compute_scale(source, TV, mode, DisplayTarget::Primary).unwrap()
}

/// Scale on a secondary display of `viewport`, which must succeed
fn on_secondary(source: Size, viewport: Size, mode: ScreenMode) -> ScaledRect {
    compute_scale(source, viewport, mode, DisplayTarget::Secondary).unwrap()
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

/// Size in pixels that a scaled quad covers on `viewport`
fn drawn_size(source: Size, viewport: Size, mode: ScreenMode, target: DisplayTarget) -> (f32, f32) {
    let rect = compute_scale(source, viewport, mode, target).unwrap();
    (rect.scale_x * viewport.width, rect.scale_y * viewport.height)
}

// ============================================================================
// Pixel-accurate
// ============================================================================

#[test]
fn test_bordered_source_exact_integer_on_primary() {
    let rect = on_tv(Size::new(256.0, 224.0), ScreenMode::PixelAccurate);

    // 1080 / 224 = 4.82 -> 4
    assert!(approx(rect.scale_x, 4.0 * 256.0 / 1920.0));
    assert!(approx(rect.scale_y, 4.0 * 224.0 / 1080.0));
}

#[test]
fn test_pixel_accurate_primary_is_integer_magnification() {
    for (w, h) in [(240.0, 160.0), (160.0, 144.0), (256.0, 224.0), (100.0, 37.0)] {
        let source = Size::new(w, h);
        let (drawn_w, drawn_h) =
            drawn_size(source, TV, ScreenMode::PixelAccurate, DisplayTarget::Primary);
        let factor = drawn_w / w;
        assert!(approx(factor, factor.round()), "{w}x{h} scaled by {factor}");
        assert!(approx(drawn_h / h, factor));
        assert!(factor >= 1.0);
    }
}

#[test]
fn test_pixel_accurate_secondary_falls_back_to_fit() {
    let source = Size::new(200.0, 150.0);
    let accurate = on_secondary(source, DRC, ScreenMode::PixelAccurate);
    let fit = on_secondary(source, DRC, ScreenMode::AspectFit);

    assert_eq!(accurate, fit);
    // Height is the limiting axis: 150 * (480 / 150) = 480
    assert!(approx(accurate.scale_y, 1.0));
}

#[test]
fn test_bordered_source_on_small_secondary_is_not_degenerate() {
    let source = Size::new(256.0, 224.0);
    let viewport = Size::new(200.0, 150.0);
    let accurate = on_secondary(source, viewport, ScreenMode::PixelAccurate);

    assert_eq!(accurate, on_secondary(source, viewport, ScreenMode::AspectFit));
    assert!(approx(accurate.scale_y, 1.0));
    assert!(accurate.scale_x > 0.0 && accurate.scale_x < 1.0);
}

#[test]
fn test_pixel_accurate_larger_than_viewport_falls_back_to_fit() {
    let source = Size::new(2560.0, 1440.0);
    let accurate = on_tv(source, ScreenMode::PixelAccurate);
    let fit = on_tv(source, ScreenMode::AspectFit);
    assert_eq!(accurate, fit);
}

// ============================================================================
// Properties over all modes
// ============================================================================

#[test]
fn test_fit_and_accurate_never_exceed_viewport() {
    let sources = [(240.0, 160.0), (256.0, 224.0), (160.0, 144.0), (1.0, 1.0), (4000.0, 10.0)];
    for (w, h) in sources {
        for viewport in [TV, DRC] {
            for target in DisplayTarget::ALL {
                for mode in [ScreenMode::PixelAccurate, ScreenMode::AspectFit] {
                    let rect = compute_scale(Size::new(w, h), viewport, mode, target).unwrap();
                    assert!(rect.scale_x <= 1.0 + 1e-5, "{w}x{h} {mode:?} {target:?}");
                    assert!(rect.scale_y <= 1.0 + 1e-5, "{w}x{h} {mode:?} {target:?}");
                    assert!(rect.scale_x > 0.0 && rect.scale_y > 0.0);
                }
            }
        }
    }
}

#[test]
fn test_non_stretched_modes_preserve_aspect_ratio() {
    for (w, h) in [(240.0, 160.0), (256.0, 224.0), (333.0, 77.0)] {
        for mode in [ScreenMode::PixelAccurate, ScreenMode::AspectFit] {
            let (drawn_w, drawn_h) =
                drawn_size(Size::new(w, h), DRC, mode, DisplayTarget::Secondary);
            assert!(approx(drawn_w / w, drawn_h / h), "{w}x{h} {mode:?}");
        }
    }
}

#[test]
fn test_aspect_fit_touches_one_edge() {
    let rect = on_tv(Size::new(240.0, 160.0), ScreenMode::AspectFit);
    assert!(approx(rect.scale_x.max(rect.scale_y), 1.0));
}

#[test]
fn test_stretched_fills_any_viewport() {
    for viewport in [TV, DRC, Size::new(3.0, 977.0)] {
        for target in DisplayTarget::ALL {
            let rect =
                compute_scale(Size::new(240.0, 160.0), viewport, ScreenMode::Stretched, target)
                    .unwrap();
            assert_eq!((rect.scale_x, rect.scale_y), (1.0, 1.0));
        }
    }
}

#[test]
fn test_scale_is_deterministic() {
    let source = Size::new(240.0, 160.0);
    for mode in ScreenMode::ALL {
        let first = compute_scale(source, DRC, mode, DisplayTarget::Secondary);
        let second = compute_scale(source, DRC, mode, DisplayTarget::Secondary);
        assert_eq!(first, second);
    }
}

#[test]
fn test_invalid_sizes_rejected() {
    let zero = compute_scale(
        Size::new(0.0, 160.0),
        TV,
        ScreenMode::AspectFit,
        DisplayTarget::Primary,
    );
    assert!(matches!(zero, Err(ScaleError::InvalidDimension { .. })));

    let viewport = compute_scale(
        Size::new(240.0, 160.0),
        Size::new(1920.0, 0.0),
        ScreenMode::Stretched,
        DisplayTarget::Primary,
    );
    assert!(matches!(viewport, Err(ScaleError::InvalidViewport { .. })));

    let nan = compute_scale(
        Size::new(f32::NAN, 160.0),
        TV,
        ScreenMode::PixelAccurate,
        DisplayTarget::Primary,
    );
    assert!(nan.is_err());
}

// ============================================================================
// Border crop
// ============================================================================

#[test]
fn test_crop_picks_factor_from_content() {
    let texture = Size::new(256.0, 224.0);
    let content = Size::new(160.0, 144.0);
    let cropped = compute_cropped_scale(
        texture,
        content,
        TV,
        ScreenMode::PixelAccurate,
        DisplayTarget::Primary,
    )
    .unwrap();

    // 1080 / 144 = 7.5 -> 7, applied to the whole texture
    assert!(approx(cropped.scale_x, 7.0 * 256.0 / 1920.0));
    assert!(approx(cropped.scale_y, 7.0 * 224.0 / 1080.0));
}

#[test]
fn test_crop_setting_changes_geometry() {
    let mut settings = DisplaySettings::default();
    let uncropped = settings.effective_source(256, 224);

    let mut config = ConfigStore::new();
    config.set_bool(BORDER_CROP_KEY, true);
    settings.load(&config);
    let cropped = settings.effective_source(256, 224);

    let display = DisplayContext::primary();
    let place = |source: SourceGeometry| {
        compute_cropped_scale(
            source.texture,
            source.content,
            display.size(),
            settings.screen_mode,
            display.target,
        )
        .unwrap()
    };
    let before = place(uncropped);
    let after = place(cropped);
    assert!(after.scale_x > before.scale_x);

    // Other source sizes are never cropped
    assert!(!settings.effective_source(240, 160).is_cropped());
}

// ============================================================================
// Mode cycling and quad geometry
// ============================================================================

#[test]
fn test_cycling_visits_every_mode_and_persists() {
    let mut settings = DisplaySettings::default();
    let mut config = ConfigStore::new();

    let visited: Vec<_> = (0..ScreenMode::COUNT)
        .map(|_| settings.cycle_screen_mode(&mut config))
        .collect();
    assert_eq!(
        visited,
        vec![ScreenMode::AspectFit, ScreenMode::Stretched, ScreenMode::PixelAccurate]
    );
    assert_eq!(config.get_uint("screenMode"), Some(0));
}

#[test]
fn test_quad_matches_scaled_rect() {
    let source = Size::new(240.0, 160.0);
    let rect = on_tv(source, ScreenMode::PixelAccurate);
    let quad = build_quad(&rect, source);

    assert_eq!(quad.half_extent(), [rect.scale_x, rect.scale_y]);
    assert_eq!(quad.vertices[0].position, [-rect.scale_x, -rect.scale_y]);
    assert!(approx(quad.tex_extent()[0], 240.0 / 256.0));
    assert!(approx(quad.tex_extent()[1], 160.0 / 224.0));
}
