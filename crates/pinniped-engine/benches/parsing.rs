use criterion::{Criterion, criterion_group, criterion_main};
use pulldown_cmark::Parser;
mod common;

fn bench_pulldown_cmark_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let events: Vec<_> = parser.collect();
            std::hint::black_box(events);
        });
    });

    group.bench_function("pinniped", |b| {
        b.iter(|| {
            let doc = pinniped_engine::parse(std::hint::black_box(&content));
            std::hint::black_box(doc);
        });
    });

    group.finish();
}

fn bench_pathological_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing_pathological");
    group.sample_size(10);

    let table = common::generate_wide_table(500, 20);
    group.bench_function("wide_table", |b| {
        b.iter(|| pinniped_engine::parse(std::hint::black_box(&table)));
    });

    let emphasis = common::generate_nested_emphasis(100);
    group.bench_function("nested_emphasis", |b| {
        b.iter(|| pinniped_engine::parse(std::hint::black_box(&emphasis)));
    });

    let unclosed = "**a *b [c](d `e ".repeat(200);
    group.bench_function("unclosed_delimiters", |b| {
        b.iter(|| pinniped_engine::parse(std::hint::black_box(&unclosed)));
    });

    group.finish();
}

criterion_group!(benches, bench_pulldown_cmark_baseline, bench_pathological_inputs);
criterion_main!(benches);
