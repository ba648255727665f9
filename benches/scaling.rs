use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use letterbox::core::{CanvasPresenter, DisplayContext, DisplaySettings, DisplayTarget, VideoFrame};
use letterbox::math::build_quad;
use letterbox::{compute_scale, Display, ScreenMode, Size};

/// Benchmark: scale factor for each mode on the primary display
fn bench_compute_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_scale");
    let source = Size::new(240.0, 160.0);
    let viewport = Size::new(1920.0, 1080.0);

    for mode in ScreenMode::ALL.iter() {
        group.bench_with_input(BenchmarkId::new("tv", mode.label()), mode, |b, mode| {
            b.iter(|| {
                black_box(compute_scale(
                    black_box(source),
                    black_box(viewport),
                    *mode,
                    DisplayTarget::Primary,
                ))
            })
        });
    }

    group.finish();
}

/// Benchmark: scale plus quad build for both displays
fn bench_placements(c: &mut Criterion) {
    let display = Display::new(CanvasPresenter::new(
        &DisplayContext::primary(),
        &DisplayContext::secondary(),
    ));
    let settings = DisplaySettings::default();
    let frame = VideoFrame::in_texture(256, 224, &[]);

    c.bench_function("placements_both_displays", |b| {
        b.iter(|| black_box(display.placements(black_box(&frame), &settings)))
    });
}

/// Benchmark: full software present of one frame
fn bench_canvas_present(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas_present");
    let pixels = vec![0xff80_8080u32; 256 * 224];
    let settings = DisplaySettings::default();

    for (width, height) in [(854u32, 480u32), (1280, 720), (1920, 1080)] {
        let primary = DisplayContext::new(DisplayTarget::Primary, width, height);
        let secondary = DisplayContext::secondary();
        let presenter = CanvasPresenter::new(&primary, &secondary);
        let mut display = Display::with_viewports(presenter, primary, secondary);
        let frame = VideoFrame::in_texture(240, 160, &pixels);

        group.bench_with_input(BenchmarkId::new("tv", format!("{width}x{height}")), &width, |b, _| {
            b.iter(|| black_box(display.draw_frame(&frame, &settings)))
        });
    }

    group.finish();
}

/// Benchmark: quad construction alone
fn bench_build_quad(c: &mut Criterion) {
    let source = Size::new(256.0, 224.0);
    let viewport = Size::new(854.0, 480.0);
    let rect = compute_scale(source, viewport, ScreenMode::AspectFit, DisplayTarget::Secondary);

    if let Ok(rect) = rect {
        c.bench_function("build_quad", |b| {
            b.iter(|| black_box(build_quad(black_box(&rect), source)))
        });
    }
}

criterion_group!(
    benches,
    bench_compute_scale,
    bench_placements,
    bench_canvas_present,
    bench_build_quad,
);

criterion_main!(benches);
