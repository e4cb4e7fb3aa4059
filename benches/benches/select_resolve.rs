// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use docshell_select::panel::IntegrationPanel;
use docshell_select::types::{ApiOption, IntegrationData, LanguageOption};

const LANGS: [&str; 8] = ["curl", "python", "node", "go", "rust", "java", "ruby", "php"];

/// `apis` APIs; API `i` offers a sliding window of four languages, so neighbours overlap.
fn gen_data(apis: usize) -> IntegrationData {
    IntegrationData {
        apis: (0..apis)
            .map(|i| ApiOption {
                id: format!("api-{i}"),
                label: format!("API {i}"),
                endpoint: Some(format!("/v1/api/{i}")),
                languages: (0..4)
                    .map(|k| {
                        let id = LANGS[(i + k) % LANGS.len()];
                        LanguageOption {
                            id: id.into(),
                            label: id.into(),
                            code: format!("{id} sample for api {i}"),
                        }
                    })
                    .collect(),
                default_language: Some(LANGS[(i + 3) % LANGS.len()].into()),
            })
            .collect(),
        ..Default::default()
    }
}

fn bench_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade");
    for &n in &[8usize, 64] {
        let data = gen_data(n);
        let ids: Vec<String> = data.apis.iter().map(|a| a.id.clone()).collect();
        group.throughput(Throughput::Elements(ids.len() as u64));
        group.bench_function(format!("switch_api_n{}", n), |b| {
            b.iter_batched(
                || IntegrationPanel::new(data.clone()),
                |mut panel| {
                    for id in &ids {
                        black_box(panel.select_api(id));
                        black_box(panel.view());
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cascade);
criterion_main!(benches);
