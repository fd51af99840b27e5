// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for resource lookups.
//!
//! Measures the performance of:
//! - Direct string hits in the active culture
//! - Hits that walk the culture fallback chain
//! - Misses that end in the placeholder string

use criterion::{criterion_group, criterion_main, Criterion};
use loc_lens::bundle::BundleLoader;
use loc_lens::i18n::{parse_culture, LocalizationProvider};
use std::hint::black_box;
use std::rc::Rc;

fn provider(tag: &str) -> LocalizationProvider {
    LocalizationProvider::new(
        Rc::new(BundleLoader::embedded()),
        "LocLens.Resources.Main.Strings",
        Some(parse_culture(tag).unwrap()),
    )
    .unwrap()
}

fn bench_get_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    let exact = provider("de-DE");
    group.bench_function("exact_culture", |b| {
        b.iter(|| black_box(exact.get_string(black_box("Title"))));
    });

    let regional = provider("fr-CA");
    group.bench_function("neutral_fallback", |b| {
        b.iter(|| black_box(regional.get_string(black_box("Title"))));
    });

    group.bench_function("invariant_fallback", |b| {
        b.iter(|| black_box(regional.get_string(black_box("AppName"))));
    });

    group.bench_function("missing_key", |b| {
        b.iter(|| black_box(exact.get_string(black_box("NoSuchKey"))));
    });

    group.finish();
}

fn bench_update_culture(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    let mut loc = provider("en-US");
    let cultures = [parse_culture("en-US").unwrap(), parse_culture("de-DE").unwrap()];

    group.bench_function("switch_culture_then_lookup", |b| {
        let mut index = 0;
        b.iter(|| {
            index ^= 1;
            loc.update_culture(Some(cultures[index].clone()));
            black_box(loc.get_string("Title"));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_get_string, bench_update_culture);
criterion_main!(benches);
