use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mask::{Dims, VoxelMask};

fn terrain() -> VoxelMask {
    let dims = Dims::new(144, 144, 48).unwrap();
    VoxelMask::from_fn(dims, |x, y, z| z < 24 + (x * 3 + y * 5) % 11)
}

fn bench_surface(c: &mut Criterion) {
    let solid = terrain();
    c.bench_function("extract_surface", |b| {
        b.iter(|| mesh::extract_surface(black_box(&solid)).unwrap().len());
    });
    let surface = mesh::extract_surface(&solid).unwrap();
    c.bench_function("obj_export", |b| {
        b.iter(|| mesh::ObjExport::from_mesh(black_box(&surface)).vertices.len());
    });
}

criterion_group!(benches, bench_surface);
criterion_main!(benches);
