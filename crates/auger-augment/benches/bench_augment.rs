use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use auger_augment::{DefaultAugmenter, ImageAugmenter};
use auger_image::Image;
use rand::{rngs::StdRng, SeedableRng};

fn configured(pairs: &[(&str, &str)]) -> DefaultAugmenter {
    let kwargs = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<Vec<_>>();
    let mut augmenter = DefaultAugmenter::new();
    augmenter.init(&kwargs).unwrap();
    augmenter
}

fn bench_default_augmenter(c: &mut Criterion) {
    let mut group = c.benchmark_group("DefaultAugmenter");

    let configs = [
        ("crop", vec![("data_shape", "(3,224,224)"), ("rand_crop", "1")]),
        (
            "affine_crop",
            vec![
                ("data_shape", "(3,224,224)"),
                ("rand_crop", "1"),
                ("max_rotate_angle", "15"),
                ("max_shear_ratio", "0.1"),
                ("max_aspect_ratio", "0.25"),
            ],
        ),
        (
            "full",
            vec![
                ("data_shape", "(3,224,224)"),
                ("rand_crop", "1"),
                ("max_rotate_angle", "15"),
                ("max_aspect_ratio", "0.25"),
                ("pad", "8"),
                ("min_crop_size", "200"),
                ("max_crop_size", "256"),
                ("random_h", "10"),
                ("random_s", "20"),
                ("random_l", "20"),
                ("inter_method", "9"),
            ],
        ),
    ];

    for (width, height) in [(256, 256), (512, 384)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = [*width, *height].into();
        let data = (0..width * height * 3).map(|i| (i % 253) as u8).collect();
        let image = Image::<u8, 3>::new(image_size, data).unwrap();

        for (name, pairs) in configs.iter() {
            let augmenter = configured(pairs);
            group.bench_with_input(
                BenchmarkId::new(*name, &parameter_string),
                &image,
                |b, image| {
                    let mut rng = StdRng::seed_from_u64(0);
                    b.iter(|| augmenter.process(black_box(image), &mut rng))
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_default_augmenter);
criterion_main!(benches);
