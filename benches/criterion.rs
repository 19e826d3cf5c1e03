use {
    criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput},
    debin::rewrite,
};

criterion_main!(benches);
criterion_group! {
    benches,
    bench_rewrite,
}

fn bench_rewrite(c: &mut Criterion) {
    let mut c = c.benchmark_group("rewriting hex literals");

    let mut dump = String::new();
    for i in 0..8_192 {
        let path = format!("/posts/{i}/index.html");
        dump.push_str(&format!(
            "INSERT INTO paths VALUES({i},X'{}',X'{}');\n",
            ::hex::encode(&path),
            ::hex::encode(format!("Post number {i}")),
        ));
    }
    let plain = dump.replace("X'", "Y'");

    c.throughput(Throughput::Bytes(dump.len() as u64));

    c.bench_function("dump full of literals", |b| {
        b.iter(|| black_box(rewrite(black_box(&dump))).unwrap())
    });

    c.bench_function("dump without literals", |b| {
        b.iter(|| black_box(rewrite(black_box(&plain))).unwrap())
    });
}
