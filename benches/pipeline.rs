use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tribute_wall::{
    listing::TextColumn,
    pipeline::build_listing,
    render::render_table,
    sort::Collation,
};

/// Synthetic listing: a few thousand rows spread over every letter.
fn sample(rows: usize) -> String {
    const FIRST: &[&str] = &[
        "Ada", "Émile", "bruno", "Chloé", "Dmitri", "eve", "Farah", "Günter", "Hiro", "Ingrid",
        "Jonas", "Kai", "Lena", "Mateo", "nora", "Óscar", "Priya", "Quinn", "Rosa", "Søren",
        "Tariq", "Uma", "Vera", "Wen", "Xavi", "Yara", "Zoë",
    ];
    let mut s = String::from("Donor,Memory,Tribute,Image URL\n");
    for i in 0..rows {
        let name = FIRST[(i * 7) % FIRST.len()];
        s.push_str(&format!(
            "Donor {i};Partner {i},{name} Family{i},Tribute {i},img/{i}.png;img/{i}b.png\n"
        ));
    }
    s
}

fn bench_pipeline(c: &mut Criterion) {
    let text = sample(5_000);
    let collation = Collation::new("en").expect("en collation");

    c.bench_function("build_listing_5k", |b| {
        b.iter(|| {
            let l = build_listing(black_box(&text), TextColumn::InHonorMemoryOf, &collation);
            black_box(l.lines.len())
        })
    });

    let listing = build_listing(&text, TextColumn::InHonorMemoryOf, &collation);
    c.bench_function("render_table_5k", |b| {
        b.iter(|| black_box(render_table(black_box(&listing)).len()))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
