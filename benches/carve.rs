use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use seamcarver::{SeamCarver, SeamFinder};

fn sample() -> RgbImage {
    RgbImage::from_fn(96, 64, |x, y| {
        Rgb([(x * 5 % 256) as u8, (y * 11 % 256) as u8, ((x ^ y) * 3 % 256) as u8])
    })
}

fn energy_benchmark(c: &mut Criterion) {
    let carver = SeamCarver::new(&sample());
    c.bench_function("energy map 96x64", |b| {
        b.iter(|| black_box(carver.energy_map()))
    });
}

fn vertical_seam_benchmark(c: &mut Criterion) {
    let carver = SeamCarver::new(&sample());
    c.bench_function("find and remove vertical seam 96x64", |b| {
        b.iter(|| {
            let mut scratch = carver.clone();
            let seam = scratch.find_vertical_seam().unwrap();
            scratch.remove_vertical_seam(&seam).unwrap();
            black_box(scratch.width())
        })
    });
}

fn horizontal_seam_benchmark(c: &mut Criterion) {
    let carver = SeamCarver::new(&sample());
    c.bench_function("find horizontal seam 96x64", |b| {
        b.iter(|| black_box(carver.find_horizontal_seam().unwrap()))
    });
}

criterion_group!(
    benches,
    energy_benchmark,
    vertical_seam_benchmark,
    horizontal_seam_benchmark
);
criterion_main!(benches);
