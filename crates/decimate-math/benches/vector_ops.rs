use criterion::{black_box, criterion_group, criterion_main, Criterion};
use decimate_math::{Vector2f, Vector3f, Vector4f};

fn bench_normalize(c: &mut Criterion) {
    let v2 = Vector2f::new(3.0, 4.0);
    let v3 = Vector3f::new(1.0, 2.0, 2.0);
    let v4 = Vector4f::new(1.0, 1.0, 1.0, 1.0);

    c.bench_function("normalize_vector2f", |b| b.iter(|| black_box(v2).normalized()));
    c.bench_function("normalize_vector3f", |b| b.iter(|| black_box(v3).normalized()));
    c.bench_function("normalize_vector4f", |b| b.iter(|| black_box(v4).normalized()));
    c.bench_function("normalize_degenerate_vector3f", |b| {
        b.iter(|| black_box(Vector3f::ZERO).normalized())
    });
}

fn bench_products(c: &mut Criterion) {
    let a = Vector3f::new(1.0, 2.0, 3.0);
    let b = Vector3f::new(-4.0, 0.5, 2.0);

    c.bench_function("dot_vector3f", |bench| {
        bench.iter(|| black_box(a).dot(&black_box(b)))
    });
    c.bench_function("cross_vector3f", |bench| {
        bench.iter(|| black_box(a).cross(&black_box(b)))
    });
    c.bench_function("angle_vector3f", |bench| {
        bench.iter(|| Vector3f::angle(&black_box(a), &black_box(b)))
    });
    c.bench_function("ortho_normalize_vector3f", |bench| {
        bench.iter(|| {
            let mut normal = black_box(a);
            let mut tangent = black_box(b);
            Vector3f::ortho_normalize(&mut normal, &mut tangent);
            (normal, tangent)
        })
    });
}

fn bench_interpolation(c: &mut Criterion) {
    let a = Vector4f::new(0.0, 1.0, 2.0, 3.0);
    let b = Vector4f::new(3.0, 2.0, 1.0, 0.0);

    c.bench_function("lerp_vector4f", |bench| {
        bench.iter(|| black_box(a).lerp(&black_box(b), black_box(0.25)))
    });
    c.bench_function("approx_eq_vector4f", |bench| {
        bench.iter(|| black_box(a) == black_box(b))
    });
}

criterion_group!(benches, bench_normalize, bench_products, bench_interpolation);
criterion_main!(benches);
