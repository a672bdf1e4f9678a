//! Capture matching benchmarks.
#![allow(missing_docs)]

use std::hint::black_box;

use capgroup::{CaptureMatcher, Pattern};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const HGVS: &str = r"^(g\.)?([[:digit:]]+)(_([[:digit:]]+))?(\.)?(del([atgcnATGCN[:digit:]]*))?(ins([atgcnATGCN]*))?(([atgcnATGCN?]*)>([atgcnATGCN?]*))?(dup([atgcATGCN[:digit:]]*))?$";

fn bench_compile(c: &mut Criterion) {
    c.bench_function("compile_hgvs", |b| {
        b.iter(|| CaptureMatcher::new(black_box(HGVS)));
    });
}

fn bench_match_and_extract(c: &mut Criterion) {
    let mut matcher = CaptureMatcher::new(HGVS).unwrap();
    let input = "g.123456_3432delATCinsAA";

    c.bench_function("match_extract_hgvs", |b| {
        b.iter(|| {
            let groups = matcher.matches(black_box(input)).unwrap();
            groups.extract_all()
        });
    });
}

fn bench_is_match_vs_captures(c: &mut Criterion) {
    let mut group = c.benchmark_group("hgvs");
    let pattern = Pattern::new(HGVS).unwrap();
    let mut matcher = CaptureMatcher::from_pattern(pattern.clone());

    for input in ["g.123456", "g.123456_3432dup", "g.123456_3432delATCinsAA"] {
        group.bench_with_input(BenchmarkId::new("is_match", input), input, |b, input| {
            b.iter(|| pattern.is_match(black_box(input)));
        });
        group.bench_with_input(BenchmarkId::new("captures", input), input, |b, input| {
            b.iter(|| matcher.matches(black_box(input)).map(|groups| groups.whole()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compile,
    bench_match_and_extract,
    bench_is_match_vs_captures
);
criterion_main!(benches);
