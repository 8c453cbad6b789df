use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bgrkit_image::Image;
use bgrkit_imgproc::color::{convert_hsv, hsv_from_bgr};
use bgrkit_imgproc::threshold::select_color;
use rand::{rngs::StdRng, Rng, SeedableRng};

// vanilla version
fn hsv_vanilla(image: &mut Image<u8, 3>) {
    for pixel in image.as_slice_mut().chunks_exact_mut(3) {
        let (b, g, r) = (pixel[0] as f64, pixel[1] as f64, pixel[2] as f64);
        let v = b.max(g).max(r);
        let diff = v - b.min(g).min(r);
        pixel[2] = v as u8;
        pixel[1] = if v != 0.0 { (255.0 * diff / v) as u8 } else { 0 };
        if diff != 0.0 {
            let h = if v == b {
                240.0 + 60.0 * (r - g) / diff
            } else if v == g {
                120.0 + 60.0 * (b - r) / diff
            } else {
                60.0 * (g - b) / diff
            };
            let h = if h < 0.0 { h + 360.0 } else { h };
            pixel[0] = (h / 2.0) as u8;
        }
    }
}

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("Color");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let mut rng = StdRng::seed_from_u64(42);
        let mut data = vec![0u8; width * height * 3];
        rng.fill(&mut data[..]);
        let image = Image::<u8, 3>::new([*width, *height].into(), data).unwrap();

        group.bench_with_input(
            BenchmarkId::new("hsv_vanilla", &parameter_string),
            &image,
            |b, i| {
                let mut dst = i.clone();
                b.iter(|| black_box(hsv_vanilla(&mut dst)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("convert_hsv", &parameter_string),
            &image,
            |b, i| {
                let mut dst = i.clone();
                b.iter(|| black_box(convert_hsv(&mut dst)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("hsv_from_bgr", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(hsv_from_bgr(i))),
        );

        group.bench_with_input(
            BenchmarkId::new("select_color", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(select_color(i, &[170, 80, 50], &[10, 255, 255]))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_color);
criterion_main!(benches);
