use criterion::{black_box, criterion_group, criterion_main, Criterion};
use immerse_tunnel::camera::rig::CameraRig;
use immerse_tunnel::scene::{FrameInput, SceneComposer};
use immerse_tunnel::{RecordingBridge, TunnelEngine};

fn compose_benchmark(c: &mut Criterion) {
    let composer = SceneComposer::default();
    let rig = CameraRig::default();
    let mut group = c.benchmark_group("compose");

    for aspect in [0.5_f32, 1.777, 3.5] {
        let _ = group.bench_function(format!("aspect_{aspect}"), |b| {
            b.iter(|| {
                let input = FrameInput {
                    offset: 0.3,
                    aspect,
                    time: 12.5,
                    rig: rig.update(0.3, 12.5),
                };
                black_box(composer.compose(black_box(&input)))
            });
        });
    }
    group.finish();
}

fn frame_benchmark(c: &mut Criterion) {
    let mut engine = TunnelEngine::default();
    let mut bridge = RecordingBridge::new();
    engine.set_canvas_size(Some(1920), Some(1080));
    engine.attach(&mut bridge);
    let mut ts = 0.0;

    let _ = c.bench_function("engine_frame", |b| {
        b.iter(|| {
            ts += 16.6;
            black_box(engine.frame(black_box(ts), &mut bridge))
        });
    });
}

criterion_group!(benches, compose_benchmark, frame_benchmark);
criterion_main!(benches);
