use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use auger_image::{Image, ImageSize};
use auger_imgproc::{
    interpolation::InterpolationMode,
    resize::{resize_fast, resize_native},
};

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("Resize");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_size = [*width, *height].into();
        let image = Image::<u8, 3>::new(image_size, vec![0u8; width * height * 3]).unwrap();

        // output image
        let new_size = ImageSize {
            width: width / 2,
            height: height / 2,
        };
        let output = Image::<u8, 3>::from_size_val(new_size, 0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("native_bilinear", &parameter_string),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| {
                    resize_native(
                        black_box(src),
                        black_box(&mut dst),
                        InterpolationMode::Bilinear,
                    )
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("fast_bilinear", &parameter_string),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| {
                    resize_fast(
                        black_box(src),
                        black_box(&mut dst),
                        InterpolationMode::Bilinear,
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_resize);
criterion_main!(benches);
