use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pay_qr::classify;
use pay_qr::pipeline::classify_all;

const SAMPLES: [&str; 6] = [
    "https://example.com/pay",
    "example.com/pay",
    "momo://?action=transfer&to=123",
    "00020101021238420010A000000727012400069704220110035442436153037045802VN630458C2",
    "hello world",
    "javascript:alert(1)",
];

fn bench_classify_each(c: &mut Criterion) {
    for (i, text) in SAMPLES.iter().enumerate() {
        c.bench_function(&format!("classify_sample_{i}"), |b| {
            b.iter(|| classify(black_box(text)))
        });
    }
}

fn bench_classify_batch(c: &mut Criterion) {
    let texts: Vec<&str> = SAMPLES.iter().copied().cycle().take(6000).collect();
    c.bench_function("classify_all_6000", |b| {
        b.iter(|| classify_all(black_box(texts.as_slice())))
    });
}

criterion_group!(benches, bench_classify_each, bench_classify_batch);
criterion_main!(benches);
