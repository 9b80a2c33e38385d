//! Benchmarks for text vectorization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use langsniff_core::{
    FeatureConfig, KeywordStatistics, PipelineConfig, Vectorizer, DEFAULT_KEYWORD_COUNT,
};

const SAMPLE: &str = r#"
import os
import sys

def walk(root, depth=0):
    for entry in os.listdir(root):
        path = os.path.join(root, entry)
        if os.path.isdir(path) and depth < 10:
            walk(path, depth + 1)
        else:
            print("  " * depth + entry)

if __name__ == "__main__":
    walk(sys.argv[1] if len(sys.argv) > 1 else ".")
"#;

fn vectorizer(parallel: bool) -> Vectorizer {
    let stats = KeywordStatistics::from_documents(&[SAMPLE], false);
    let config = FeatureConfig::new(stats.build(DEFAULT_KEYWORD_COUNT).unwrap());
    Vectorizer::new(&config)
        .unwrap()
        .with_settings(PipelineConfig {
            parallel,
            ..PipelineConfig::default()
        })
        .unwrap()
}

fn bench_vectorize_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("vectorize_text");
    let v = vectorizer(false);

    for repeat in [1usize, 10, 100].iter() {
        let text = SAMPLE.repeat(*repeat);
        group.bench_with_input(BenchmarkId::from_parameter(repeat), &text, |b, text| {
            b.iter(|| v.vectorize(black_box(text)));
        });
    }

    group.finish();
}

fn bench_vectorize_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("vectorize_batch");
    let texts: Vec<String> = (0..256).map(|i| SAMPLE.replace("walk", &format!("walk{i}"))).collect();

    for parallel in [false, true].iter() {
        let v = vectorizer(*parallel);
        let label = if *parallel { "parallel" } else { "sequential" };
        group.bench_with_input(BenchmarkId::from_parameter(label), &texts, |b, texts| {
            b.iter(|| v.vectorize_batch(black_box(texts)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_vectorize_text, bench_vectorize_batch);
criterion_main!(benches);
