// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use docshell_spy::spy::ScrollSpy;
use docshell_spy::types::{AnchorBounds, AnchorId, Generation, VisibilityReport};
use docshell_spy::window::ObservationWindow;
use kurbo::Rect;

const VIEWPORT_W: f64 = 1280.0;
const VIEWPORT_H: f64 = 800.0;

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

/// `n` stacked sections with heights between 200 and 1400 px.
fn gen_sections(n: usize) -> Vec<AnchorBounds> {
    let mut rng = Rng::new(0xD0C5_5E11_0BAD_F00D);
    let mut y = 0.0;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let h = 200.0 + rng.next_f64() * 1200.0;
        out.push(AnchorBounds {
            id: AnchorId::new(format!("section-{i}")),
            bounds: Rect::new(0.0, y, VIEWPORT_W, y + h),
        });
        y += h;
    }
    out
}

fn gen_offsets(sections: &[AnchorBounds], count: usize) -> Vec<f64> {
    let end = sections.last().map_or(0.0, |s| s.bounds.y1);
    let mut rng = Rng::new(0x5C80_11ED_CAFE_BABE);
    (0..count).map(|_| rng.next_f64() * end).collect()
}

fn report(generation: Generation, offset: f64, sections: &[AnchorBounds]) -> VisibilityReport {
    VisibilityReport {
        generation,
        viewport: Rect::new(0.0, offset, VIEWPORT_W, offset + VIEWPORT_H),
        anchors: sections.to_vec(),
    }
}

fn tracked_spy(sections: &[AnchorBounds]) -> ScrollSpy {
    let mut spy = ScrollSpy::new(ObservationWindow::default());
    let _ = spy.track(sections.iter().map(|s| s.id.clone()));
    spy
}

fn bench_observe(c: &mut Criterion) {
    let mut group = c.benchmark_group("observe");
    for &n in &[16usize, 128, 512] {
        let sections = gen_sections(n);
        let offsets = gen_offsets(&sections, 64);
        group.throughput(Throughput::Elements(offsets.len() as u64));
        group.bench_function(format!("passive_scroll_n{}", n), |b| {
            b.iter_batched(
                || {
                    let spy = tracked_spy(&sections);
                    let reports: Vec<_> = offsets
                        .iter()
                        .map(|&o| report(spy.generation(), o, &sections))
                        .collect();
                    (spy, reports)
                },
                |(mut spy, reports)| {
                    for r in &reports {
                        black_box(spy.observe(r));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");
    let sections = gen_sections(128);
    let offsets = gen_offsets(&sections, 64);
    group.throughput(Throughput::Elements(offsets.len() as u64));
    // Every report lands while a lock is held, and half of them are stale.
    group.bench_function("locked_and_stale_n128", |b| {
        b.iter_batched(
            || tracked_spy(&sections),
            |mut spy| {
                for (i, &o) in offsets.iter().enumerate() {
                    let stale = spy.generation();
                    let target = &sections[i % sections.len()].id;
                    let _ = spy.navigate(target.as_str());
                    black_box(spy.observe(&report(stale, o, &sections)));
                    black_box(spy.observe(&report(spy.generation(), o, &sections)));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("retrack_n128", |b| {
        b.iter_batched(
            || tracked_spy(&sections),
            |mut spy| {
                black_box(spy.track(sections.iter().rev().map(|s| s.id.clone())));
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_observe, bench_navigation);
criterion_main!(benches);
