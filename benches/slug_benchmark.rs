// Copyright © 2025 Potato Util. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the slug normalisation core.

use criterion::{criterion_group, criterion_main, Criterion};
use potato_util::{slug_name, Slugifier};
use std::hint::black_box;

fn bench_slug_name(c: &mut Criterion) {
    let ascii_input = "My Photo File!!.png";
    let unicode_input = "Café Münster / Straße — über alles (v2).txt";

    _ = c.bench_function("slug_name_ascii", |b| {
        b.iter(|| slug_name(black_box(ascii_input)))
    });
    _ = c.bench_function("slug_name_unicode", |b| {
        b.iter(|| slug_name(black_box(unicode_input)))
    });
    let bounded = Slugifier::new()
        .with_max_length(16)
        .unwrap()
        .with_transliteration(false);
    _ = c.bench_function("slug_name_bounded", |b| {
        b.iter(|| bounded.slugify(black_box(unicode_input)))
    });
}

criterion_group!(benches, bench_slug_name);
criterion_main!(benches);
