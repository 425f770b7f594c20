use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use hedgeui::domain::text::{truncate_lines, wrap_text};

const SUMMARY: &str = "Treasury yields climbed for a third straight session after the \
Federal Reserve signalled that rate cuts would come later than markets expected. Long \
duration bonds sold off while the dollar strengthened against major peers. Energy \
shares outperformed as crude rose on supply concerns, and small caps lagged on worries \
about refinancing costs. 日本株式は円安を背景に上昇し、輸出関連銘柄が相場を牽引した。";

fn benchmark(c: &mut Criterion) {
    c.bench_function("wrap-summary-40", |b| {
        b.iter(|| wrap_text(black_box(SUMMARY), black_box(40)))
    });

    c.bench_function("wrap-summary-120", |b| {
        b.iter(|| wrap_text(black_box(SUMMARY), black_box(120)))
    });

    c.bench_function("wrap-then-truncate", |b| {
        b.iter(|| truncate_lines(&wrap_text(black_box(SUMMARY), black_box(40)), 4))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
