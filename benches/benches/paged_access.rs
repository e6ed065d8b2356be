// Copyright 2026 the Paged Vec Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `paged_vec`.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use paged_vec::PagedVec;

const LEN: usize = 1024;
const PAGE_LEN: usize = 32;

fn filled() -> PagedVec<u64> {
    let mut vec = PagedVec::new(LEN, PAGE_LEN).unwrap();
    for page in 1..=vec.page_count() {
        let range = vec.index_range_for_page(page).unwrap();
        let items: Vec<u64> = range.map(|i| i as u64).collect();
        vec.set_page(page, items).unwrap();
    }
    vec
}

fn bench_paged_vec(c: &mut Criterion) {
    c.bench_function("set_page/fill_1k_by_32", |b| {
        b.iter_batched(
            || PagedVec::<u64>::new(LEN, PAGE_LEN).unwrap(),
            |mut vec| {
                for page in 1..=vec.page_count() {
                    let range = vec.index_range_for_page(page).unwrap();
                    let items: Vec<u64> = range.map(|i| i as u64).collect();
                    vec.set_page(page, items).unwrap();
                }
                vec
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("get/sequential_hit_1k", |b| {
        let vec = filled();
        b.iter(|| {
            let mut sum = 0u64;
            for index in 0..vec.len() {
                if let Some(&item) = vec.get(index).unwrap() {
                    sum += item;
                }
            }
            black_box(sum)
        });
    });

    c.bench_function("fetch/placeholder_1k", |b| {
        // No loader attached: every access resolves to the placeholder.
        let mut vec = PagedVec::<u64>::new(LEN, PAGE_LEN).unwrap();
        b.iter(|| {
            let mut misses = 0usize;
            for index in 0..vec.len() {
                if vec.fetch(index).unwrap().is_none() {
                    misses += 1;
                }
            }
            black_box(misses)
        });
    });

    c.bench_function("existing/iterate_1k", |b| {
        let vec = filled();
        b.iter(|| {
            let mut sum = 0u64;
            for (index, &item) in vec.existing() {
                sum += index as u64 + item;
            }
            black_box(sum)
        });
    });
}

criterion_group!(benches, bench_paged_vec);
criterion_main!(benches);
