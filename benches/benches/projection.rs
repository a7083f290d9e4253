// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chronos_layout::{LayoutConfig, calculate_layout};
use chronos_model::Language;
use chronos_projection::{ProjectionConfig, RenderProjector, Scene, visible_items};
use chronos_view::TimelineViewport;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;

mod common;

const VIEW: Size = Size::new(1920.0, 1080.0);

fn bench_visible_items(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection/visible_items");
    let config = ProjectionConfig::default();

    for len in [512usize, 4_096] {
        let entities = common::gen_entities(len);
        let layout = calculate_layout(&entities, &LayoutConfig::default());
        let scene = Scene::new(&entities, &layout, VIEW, Language::En);
        group.throughput(Throughput::Elements(len as u64));

        // Whole history on screen versus a few centuries.
        for (name, scale) in [("overview", 0.15), ("century", 5.0)] {
            let view = TimelineViewport::centered_on(-3000.0, scale, VIEW.width);
            group.bench_with_input(BenchmarkId::new(name, len), &scene, |b, scene| {
                b.iter(|| black_box(visible_items(scene, &view, &config)));
            });
        }
    }

    group.finish();
}

fn bench_project_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection/project");
    let projector = RenderProjector::default();

    for len in [512usize, 4_096] {
        let entities = common::gen_entities(len);
        let layout = calculate_layout(&entities, &LayoutConfig::default());
        let selected = entities[len / 2].id.clone();
        let scene = Scene::new(&entities, &layout, VIEW, Language::En)
            .with_selected_entity(Some(&selected));
        let view = TimelineViewport::centered_on(entities[len / 2].start_year, 0.5, VIEW.width);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &scene, |b, scene| {
            b.iter(|| black_box(projector.project(scene, &view)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_visible_items, bench_project_frame);
criterion_main!(benches);
