use criterion::{black_box, criterion_group, criterion_main, Criterion};
use term3d::core::{factory, Camera, CharBuffer, LightSource, Rasterizer, Vec3};
use term3d::engine::{RenderConfig, Scene};
use term3d::types::ModelKind;

fn camera() -> Camera {
    let mut cam = Camera::new(Vec3::new(0.0, 0.0, -10.0)).with_recording_surface(1.0, 1.0, 1.0);
    cam.configure_for_viewport(160, 48, 2.0);
    cam
}

fn bench_frame(c: &mut Criterion) {
    let mut scene = Scene::new(&RenderConfig {
        model: ModelKind::ToroidHighPoly,
        ..RenderConfig::default()
    })
    .unwrap();
    scene.set_viewport(160, 48);
    let mut buf = CharBuffer::new(160, 48);

    c.bench_function("frame_toroid_high_poly_160x48", |b| {
        b.iter(|| {
            scene.rotate_by(1.0, 1.0, 1.0);
            black_box(scene.render(&mut buf));
        })
    });
}

fn bench_depth_sort(c: &mut Criterion) {
    let torus = factory::toroid(2.0, 1.0, 40).unwrap();
    let cam = camera();

    c.bench_function("depth_sort_1600_faces", |b| {
        b.iter(|| black_box(torus.depth_sort_faces(&cam, None).len()))
    });
    c.bench_function("depth_sort_1600_faces_culled", |b| {
        b.iter(|| black_box(torus.depth_sort_faces(&cam, Some(90.0)).len()))
    });
}

fn bench_rasterize_face(c: &mut Criterion) {
    let mut cube = factory::cube(2.0).unwrap();
    cube.apply_light(&LightSource::new(Vec3::new(10.0, -10.0, -10.0), 2.0));
    let cam = camera();
    let raster = Rasterizer::default();
    let mut buf = CharBuffer::new(160, 48);
    let mut out = Vec::with_capacity(4096);
    let front = &cube.faces()[0];

    c.bench_function("rasterize_cube_face", |b| {
        b.iter(|| {
            out.clear();
            raster.draw_face_into(front, cube.vertices(), &cam, &mut buf, &mut out);
            black_box(out.len())
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut torus = factory::toroid(2.0, 1.0, 40).unwrap();
    let mut angle = 0.0;

    c.bench_function("rotate_toroid_1600_vertices", |b| {
        b.iter(|| {
            angle += 1.0;
            torus.rotate_to(Some(angle), Some(angle), Some(angle));
        })
    });
}

criterion_group!(
    benches,
    bench_frame,
    bench_depth_sort,
    bench_rasterize_face,
    bench_rotate
);
criterion_main!(benches);
