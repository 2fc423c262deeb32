//! Performance benchmarks for card rendering
//!
//! Tests HTML flattening and card layout for different body sizes.
//! Run with: cargo bench

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stackit::html::html_to_text;
use stackit::models::Question;
use stackit::ui::question_card_lines;

/// Generate editor-style HTML with the given number of paragraphs
fn generate_html(paragraphs: usize) -> String {
    let paragraph = "<p>Borrowing a <strong>mutable</strong> reference across an \
                     <code>.await</code> point &amp; holding a lock&nbsp;is fine with \
                     <em>tokio::sync::Mutex</em>.</p><ul><li>one</li><li>two</li></ul>";
    (0..paragraphs)
        .map(|i| format!("<h2>Section {}</h2>{}", i + 1, paragraph))
        .collect()
}

fn question(paragraphs: usize) -> Question {
    Question {
        id: 1,
        title: "How do I share state between tasks without a global?".to_string(),
        description: generate_html(paragraphs),
        tags: "rust, tokio, async, concurrency".to_string(),
        image_url: None,
        owner_id: Some(1),
        created_at: Utc::now(),
        answers: Vec::new(),
    }
}

/// Benchmark HTML to plain text conversion
fn bench_html_to_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("html_to_text");

    for size in [1, 5, 25, 100].iter() {
        let html = generate_html(*size);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &html, |b, html| {
            b.iter(|| html_to_text(black_box(html)))
        });
    }

    group.finish();
}

/// Benchmark laying out a home page card at common terminal widths
fn bench_question_card(c: &mut Criterion) {
    let mut group = c.benchmark_group("question_card_lines");
    let q = question(25);
    let now = Utc::now();

    for width in [40usize, 80, 160].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(width), width, |b, width| {
            b.iter(|| question_card_lines(black_box(&q), true, now, *width))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_html_to_text, bench_question_card);
criterion_main!(benches);
