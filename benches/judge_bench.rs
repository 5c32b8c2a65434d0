use cantodetect::{CantoneseDetector, DetectorConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const CANTO_TEXT: &str = "佢喺屋企食飯，跟住同埋朋友出去行街，仲話聽日返工好攰。";
const SWC_TEXT: &str = "他說了很多話，把那些事情都講清楚了，也沒有人反對他的看法。";
const QUOTED_TEXT: &str = "他看著窗外說了一句：「今日落雨，唔使出去喇」，然後把門關上了。";

fn bench_detector_construction(c: &mut Criterion) {
    c.bench_function("detector_construction", |b| {
        b.iter(|| CantoneseDetector::with_defaults().unwrap());
    });
}

fn bench_judge(c: &mut Criterion) {
    let plain = CantoneseDetector::with_defaults().unwrap();
    let split = CantoneseDetector::new(DetectorConfig {
        split_segments: true,
        ..DetectorConfig::default()
    })
    .unwrap();
    let quoted = CantoneseDetector::new(DetectorConfig {
        split_segments: true,
        separate_quotes: true,
        ..DetectorConfig::default()
    })
    .unwrap();

    let mut group = c.benchmark_group("judge");
    group.throughput(Throughput::Bytes(CANTO_TEXT.len() as u64));

    group.bench_function("single_segment_cantonese", |b| {
        b.iter(|| plain.judge(black_box(CANTO_TEXT)));
    });
    group.bench_function("single_segment_swc", |b| {
        b.iter(|| plain.judge(black_box(SWC_TEXT)));
    });
    group.bench_function("split_segments", |b| {
        b.iter(|| split.judge(black_box(CANTO_TEXT)));
    });
    group.bench_function("quote_separation", |b| {
        b.iter(|| quoted.judge(black_box(QUOTED_TEXT)));
    });

    group.finish();
}

fn bench_long_document(c: &mut Criterion) {
    let detector = CantoneseDetector::new(DetectorConfig {
        split_segments: true,
        separate_quotes: true,
        ..DetectorConfig::default()
    })
    .unwrap();
    let document = QUOTED_TEXT.repeat(200);

    let mut group = c.benchmark_group("judge_long_document");
    group.throughput(Throughput::Bytes(document.len() as u64));
    group.bench_function("repeated_quoted_paragraphs", |b| {
        b.iter(|| detector.judge(black_box(&document)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_detector_construction,
    bench_judge,
    bench_long_document
);
criterion_main!(benches);
