// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chronos_model::{Entity, EntityType, LocalizedText, SubEvent};

const LOCATIONS: [&str; 7] = [
    "Egypt",
    "Mesopotamia",
    "Greece",
    "China",
    "Peru",
    "Steppe",
    "Anatolia",
];

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Generates `count` entities spread over the last 10000 years, with spans
/// of 10 to 1000 years and a few sub-events each.
pub(crate) fn gen_entities(count: usize) -> Vec<Entity> {
    let mut rng = Rng::new(0xC4_0C_05_1A_2B_3C_4D_5E);
    (0..count)
        .map(|i| {
            let start = -8000.0 + rng.next_f64() * 10_000.0;
            let end = start + 10.0 + rng.next_f64() * 990.0;
            let location = LOCATIONS[i % LOCATIONS.len()];
            let events = (0..3)
                .map(|_| SubEvent {
                    year: start + rng.next_f64() * (end - start),
                    title: None,
                    description: LocalizedText::same("Something happened. Then more."),
                })
                .collect();
            Entity::new(
                format!("e{i}"),
                LocalizedText::same(format!("Entity {i}")),
                LocalizedText::same(location),
                start.floor(),
                end.floor(),
                EntityType::State,
            )
            .with_events(events)
        })
        .collect()
}
