use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vigenere_analysis::{decrypt, encrypt, estimate_length, normalize, AnalysisConfig, Key};

const CORPUS: &str = include_str!("../tests/fixtures/surveyor.txt");

fn bench_analysis(c: &mut Criterion) {
    let key: Key = "LEMON".parse().unwrap();
    let ciphertext = encrypt(CORPUS, &key).unwrap();
    let normalized = normalize(&ciphertext);

    c.bench_function("normalize", |b| b.iter(|| normalize(black_box(&ciphertext))));

    c.bench_function("estimate_length", |b| {
        b.iter(|| estimate_length(black_box(&normalized), 16, 0.065))
    });

    c.bench_function("analyze", |b| {
        let config = AnalysisConfig::default();
        b.iter(|| config.analyze(black_box(&ciphertext)))
    });

    c.bench_function("decrypt", |b| b.iter(|| decrypt(black_box(&ciphertext), &key)));
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);
