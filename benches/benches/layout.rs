// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chronos_layout::{LanePacker, LayoutConfig, calculate_layout, group_by_region};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

mod common;

fn bench_calculate_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/calculate_layout");
    let config = LayoutConfig::default();

    for len in [64usize, 512, 4_096] {
        let entities = common::gen_entities(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &entities, |b, entities| {
            b.iter(|| black_box(calculate_layout(black_box(entities), &config)));
        });
    }

    group.finish();
}

fn bench_lane_packing(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/lane_packer");

    // Sorted input is what the layout feeds the packer.
    for len in [512usize, 4_096] {
        let buffer_ratio = LayoutConfig::default().buffer_ratio;
        let mut entities = common::gen_entities(len);
        entities.sort_by(|a, b| a.start_year.total_cmp(&b.start_year));
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &entities, |b, entities| {
            b.iter(|| {
                let mut packer = LanePacker::new(buffer_ratio);
                for entity in entities {
                    black_box(packer.place(entity.start_year, entity.end_year));
                }
                packer
            });
        });
    }

    group.finish();
}

fn bench_group_by_region(c: &mut Criterion) {
    let entities = common::gen_entities(4_096);
    c.bench_function("layout/group_by_region/4096", |b| {
        b.iter(|| black_box(group_by_region(black_box(&entities))));
    });
}

criterion_group!(
    benches,
    bench_calculate_layout,
    bench_lane_packing,
    bench_group_by_region
);
criterion_main!(benches);
