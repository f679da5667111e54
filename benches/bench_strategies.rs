use std::num::NonZeroU32;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use image_convolution::{ConvolveAlg, Convolver, Image, Kernel};

const SIZES: [u32; 3] = [256, 1024, 4096];
const THREADS: [u32; 4] = [1, 2, 4, 8];

fn gradient_image(size: u32) -> Image {
    let buffer = (0..size * size)
        .map(|i| ((i % size) ^ (i / size)) as u8)
        .collect();
    Image::from_vec(size, size, buffer).unwrap()
}

fn bench_algorithm<F>(c: &mut Criterion, name: &str, create_alg: F)
where
    F: Fn(NonZeroU32) -> ConvolveAlg,
{
    let kernel = Kernel::<5>::gaussian(1.0);
    let mut group = c.benchmark_group(name);
    group.sample_size(10);
    for size in SIZES {
        let src_image = gradient_image(size);
        group.throughput(Throughput::Elements(size as u64 * size as u64));
        for num_threads in THREADS {
            let convolver = Convolver::new(create_alg(NonZeroU32::new(num_threads).unwrap()));
            group.bench_with_input(
                BenchmarkId::new(format!("{size}x{size}"), num_threads),
                &src_image,
                |bencher, src_image| {
                    bencher.iter(|| convolver.convolve(src_image, &kernel).unwrap());
                },
            );
            if convolver.algorithm == ConvolveAlg::Sequential {
                break;
            }
        }
    }
    group.finish();
}

fn bench_sequential(c: &mut Criterion) {
    bench_algorithm(c, "Sequential", |_| ConvolveAlg::Sequential);
}

fn bench_naive_parallel(c: &mut Criterion) {
    bench_algorithm(c, "Naive parallel", ConvolveAlg::NaiveParallel);
}

fn bench_partitioned(c: &mut Criterion) {
    bench_algorithm(c, "Partitioned", ConvolveAlg::Partitioned);
}

criterion_group!(
    benches,
    bench_sequential,
    bench_naive_parallel,
    bench_partitioned
);
criterion_main!(benches);
