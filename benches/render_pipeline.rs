use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use escape_time_explorer::{
    Frame, PaletteKind, PresenterPort, RenderEvent, RenderPhase, RenderRequest, RenderScheduler,
    View, evaluate, render_frame_rayon, render_frame_serial,
};

struct NullPresenter;

impl PresenterPort for NullPresenter {
    fn present(&self, event: RenderEvent) {
        black_box(event);
    }
}

fn request() -> RenderRequest {
    RenderRequest {
        view: View::new(-0.5, 0.0, 200.0),
        frame: Frame::new(320, 240, 1.0),
        max_iterations: 200,
        palette: PaletteKind::Inferno,
    }
}

fn bench_evaluate(c: &mut Criterion) {
    c.bench_function("evaluate_interior_point", |b| {
        b.iter(|| evaluate(black_box(-0.5), black_box(0.0), black_box(200)))
    });
}

fn bench_frames(c: &mut Criterion) {
    let req = request();

    c.bench_function("render_frame_serial_320x240", |b| {
        b.iter(|| render_frame_serial(black_box(&req)))
    });

    c.bench_function("render_frame_rayon_320x240", |b| {
        b.iter(|| render_frame_rayon(black_box(&req)))
    });

    c.bench_function("cooperative_scheduler_320x240", |b| {
        b.iter(|| {
            let mut scheduler = RenderScheduler::cooperative(Arc::new(NullPresenter), 20);
            scheduler.start(req);
            while scheduler.tick() == RenderPhase::Rendering {}
        })
    });
}

criterion_group!(benches, bench_evaluate, bench_frames);
criterion_main!(benches);
