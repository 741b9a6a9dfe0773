//! Benchmarks for configuration translation.

use criterion::{Criterion, criterion_group, criterion_main};
use dbconf::{RawConfig, Translator};
use std::hint::black_box;

fn translate_benchmark(c: &mut Criterion) {
    let translator = Translator::new().with_application_root("/path/to/app");

    let postgres = RawConfig::new()
        .set("adapter", "postgresql")
        .set("host", "db.example.com")
        .set("port", 5432)
        .set("username", "app")
        .set("password", "secret")
        .set("database", "app_production")
        .set("pool", 10);

    let postgres_hostless = RawConfig::new()
        .set("adapter", "postgresql")
        .set("username", "app")
        .set("password", "secret")
        .set("database", "app_development");

    let sqlite = RawConfig::new()
        .set("adapter", "sqlite3")
        .set("database", "db/development.sqlite3");

    let mut group = c.benchmark_group("translate");

    group.bench_function("postgres", |b| {
        b.iter(|| translator.translate(black_box(&postgres)))
    });

    group.bench_function("postgres_hostless", |b| {
        b.iter(|| translator.translate(black_box(&postgres_hostless)))
    });

    group.bench_function("sqlite", |b| {
        b.iter(|| translator.translate(black_box(&sqlite)))
    });

    group.finish();
}

criterion_group!(benches, translate_benchmark);
criterion_main!(benches);
