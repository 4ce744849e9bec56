// benches/export.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use college_scout::{
    export::to_csv,
    heuristics::{extract_deadline, Highlighter},
    CollegeRecord,
};

fn load_sample() -> CollegeRecord {
    CollegeRecord::from_json(include_str!("../tests/fixtures/college.json"))
        .expect("parse tests/fixtures/college.json")
}

fn bench_export(c: &mut Criterion) {
    let record = load_sample();

    c.bench_function("to_csv", |b| {
        b.iter(|| black_box(to_csv(black_box(&record)).len()))
    });
}

fn bench_heuristics(c: &mut Criterion) {
    let record = load_sample();
    let hl = Highlighter::default_vocabulary();

    c.bench_function("highlight_scholarships", |b| {
        b.iter(|| {
            let spans: usize = record
                .scholarships
                .iter()
                .map(|s| hl.highlight(black_box(&s.description)).len())
                .sum();
            black_box(spans)
        })
    });

    c.bench_function("extract_deadline", |b| {
        b.iter(|| {
            let found = record
                .scholarships
                .iter()
                .filter_map(|s| extract_deadline(black_box(&s.description)))
                .count();
            black_box(found)
        })
    });
}

criterion_group!(benches, bench_export, bench_heuristics);
criterion_main!(benches);
