use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bgrkit_image::Image;
use bgrkit_imgproc::filter::median_filter;
use bgrkit_imgproc::morphology::{dilate, erode, neighborhood_filter, WindowReduction};
use bgrkit_imgproc::parallel::ExecutionStrategy;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_image(width: usize, height: usize) -> Image<u8, 3> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut data = vec![0u8; width * height * 3];
    rng.fill(&mut data[..]);
    Image::new([width, height].into(), data).unwrap()
}

fn bench_morphology(c: &mut Criterion) {
    let mut group = c.benchmark_group("Morphology");

    for (width, height) in [(256, 224), (512, 448)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);
        let image = random_image(*width, *height);

        group.bench_with_input(
            BenchmarkId::new("dilate", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(dilate(i, 1))),
        );

        group.bench_with_input(
            BenchmarkId::new("erode", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(erode(i, 1))),
        );

        group.bench_with_input(
            BenchmarkId::new("median", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(median_filter(i, 1))),
        );

        group.bench_with_input(
            BenchmarkId::new("dilate_serial", &parameter_string),
            &image,
            |b, i| {
                b.iter(|| {
                    black_box(neighborhood_filter(
                        i,
                        1,
                        WindowReduction::Max,
                        ExecutionStrategy::Serial,
                    ))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_morphology);
criterion_main!(benches);
