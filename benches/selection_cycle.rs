// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_pano::config::Config;
use iced_pano::domain::gallery::CATALOG;
use iced_pano::domain::media::RawImage;
use iced_pano::i18n::fluent::I18n;
use iced_pano::test_utils::RecordingViewer;
use iced_pano::ui::viewer_host::{Message, State};
use std::hint::black_box;

fn selection_cycle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection_cycle");
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    let frame = RawImage::from_rgba(64, 32, vec![128; 64 * 32 * 4]);

    group.bench_function("select_then_ready_over_catalog", |b| {
        let mut host = State::new(Box::new(RecordingViewer::new()), 480.0);
        b.iter(|| {
            for option in &CATALOG {
                let _ = host.handle_selection(black_box(option.full_image_ref), &i18n);
                let generation = host.generation();
                let _ = host.handle_message(
                    Message::ViewerReady {
                        generation,
                        result: Ok(frame.clone()),
                    },
                    &i18n,
                );
            }
            black_box(host.phase())
        });
    });

    group.bench_function("stale_ready_dropped", |b| {
        let mut host = State::new(Box::new(RecordingViewer::new()), 480.0);
        let _ = host.handle_selection("/photo/earth.jpg", &i18n);
        let stale = host.generation();
        let _ = host.handle_selection("/photo/desert.jpg", &i18n);
        b.iter(|| {
            let _ = host.handle_message(
                Message::ViewerReady {
                    generation: black_box(stale),
                    result: Ok(frame.clone()),
                },
                &i18n,
            );
        });
    });

    group.finish();
}

criterion_group!(benches, selection_cycle_benchmark);
criterion_main!(benches);
