// benches/parse_region.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use review_appender::{
    config::consts::{END_MARKER, START_MARKER},
    document::locate_region,
    entry::{Entry, make_id, render_row},
    parse::{DayTags, count_today_entries, extract_existing},
};

/// A page with `n` rendered rows, a few days' worth each.
fn sample_page(n: usize) -> String {
    let mut rows = String::new();
    for i in 0..n {
        let day = format!("202405{:02}", 1 + i % 28);
        let e = Entry {
            id: make_id(&day, "1015", i as u32),
            date_tag: format!("2024-05-{:02}", 1 + i % 28),
            title: format!("Title number {i}"),
            body: format!("Body text {i} with a few <escaped> & \"quoted\" bits"),
            author: "김**".into(),
            rating: 4,
            timestamp: "2024-05-01 10:15".into(),
        };
        rows.push_str(&render_row(&e));
    }
    format!("<html><body><table>{START_MARKER}{rows}\n{END_MARKER}</table></body></html>")
}

fn bench_parse(c: &mut Criterion) {
    let doc = sample_page(2_000);
    let region = locate_region(&doc).expect("sample page has markers");
    let block = region.slice(&doc);
    let today = DayTags { date_tag: "2024-05-01".into(), compact: "20240501".into() };

    c.bench_function("extract_existing_2000", |b| {
        b.iter(|| {
            let ex = extract_existing(black_box(block));
            black_box(ex.pairs.len())
        })
    });

    c.bench_function("count_today_2000", |b| {
        b.iter(|| black_box(count_today_entries(black_box(block), &today)))
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
