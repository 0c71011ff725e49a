use criterion::{criterion_group, criterion_main, Criterion};
use jsonmend::repair;
use std::hint::black_box;

fn bench_repair(c: &mut Criterion) {
    let mut group = c.benchmark_group("repair");
    let cases: Vec<(&str, &str)> = vec![
        ("strict_small", r#"{"a": 1, "b": [2, 3], "c": "text"}"#),
        ("unquoted", "{name: 'John', age: 30, tags: [a b c]}"),
        (
            "comments",
            "// header\n{\"a\": 1, /* inline */ \"b\": 2,}\n",
        ),
        ("fenced", "```json\n{c:3}\n```"),
        ("truncated_string", r#"{"text": "The quick brown fox, \n jumps"#),
        ("ndjson", "{\"a\":1}\n{\"b\":2}\n{\"c\":3}"),
        ("concat", r#""hello" + "world" + "again""#),
    ];
    for (name, s) in cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                let out = repair(black_box(s)).unwrap();
                black_box(out);
            })
        });
    }
    group.finish();
}

fn bench_repair_large(c: &mut Criterion) {
    // a larger document with a sprinkling of repairs
    let mut doc = String::from("[\n");
    for i in 0..500 {
        doc.push_str(&format!("{{id: {}, name: 'item {}', ok: True}},\n", i, i));
    }
    doc.push(']');

    let mut group = c.benchmark_group("repair_large");
    group.bench_function("array_500", |b| {
        b.iter(|| {
            let out = repair(black_box(&doc)).unwrap();
            black_box(out);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_repair, bench_repair_large);
criterion_main!(benches);
