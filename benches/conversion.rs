//! Benchmarks for value-tree to XML conversion.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use xylem::{Config, Value, to_document, to_xml_text};

/// A catalog-shaped tree: `entries` items mixing attributes, text content,
/// and nested mappings.
fn sample_tree(entries: usize) -> Value {
    let items: Vec<Value> = (0..entries)
        .map(|i| {
            Value::mapping([
                ("-id", Value::from(i as i64)),
                ("-lang", Value::from("en")),
                ("title", Value::from(format!("Item <{i}> & friends"))),
                (
                    "meta",
                    Value::mapping([
                        ("created", Value::from("2024-01-01")),
                        ("zz_last", Value::from(i as i64 * 7)),
                        ("aa_first", Value::from("yes")),
                    ]),
                ),
            ])
        })
        .collect();
    Value::mapping([("item", Value::Sequence(items))])
}

fn bench_text_compact(c: &mut Criterion) {
    let value = sample_tree(500);
    let config = Config::new().with_xml_decl(false);
    c.bench_function("text_compact_500", |b| {
        b.iter(|| to_xml_text(black_box(&value), &config).unwrap());
    });
}

fn bench_text_indented(c: &mut Criterion) {
    let value = sample_tree(500);
    let config = Config::new().with_xml_decl(false).with_indent(2);
    c.bench_function("text_indented_500", |b| {
        b.iter(|| to_xml_text(black_box(&value), &config).unwrap());
    });
}

fn bench_text_canonical(c: &mut Criterion) {
    let value = sample_tree(500);
    let config = Config::new().with_xml_decl(false).with_canonical(true);
    c.bench_function("text_canonical_500", |b| {
        b.iter(|| to_xml_text(black_box(&value), &config).unwrap());
    });
}

fn bench_dom_build(c: &mut Criterion) {
    let value = sample_tree(500);
    let config = Config::new().with_xml_decl(false);
    c.bench_function("dom_build_500", |b| {
        b.iter(|| to_document(black_box(&value), &config).unwrap());
    });
}

fn bench_escaping_heavy(c: &mut Criterion) {
    let noisy = "a&b<c>d\"e".repeat(50);
    let items: Vec<Value> = (0..100).map(|_| Value::scalar(noisy.clone())).collect();
    let value = Value::mapping([("line", Value::Sequence(items))]);
    let config = Config::new().with_xml_decl(false);
    c.bench_function("text_escaping_heavy", |b| {
        b.iter(|| to_xml_text(black_box(&value), &config).unwrap());
    });
}

criterion_group!(
    benches,
    bench_text_compact,
    bench_text_indented,
    bench_text_canonical,
    bench_dom_build,
    bench_escaping_heavy
);
criterion_main!(benches);
