use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tool_finder::core::state::AppState;
use tool_finder::filter;

fn sample_tools(count: usize) -> Vec<String> {
    let words = ["image", "pdf", "unit", "color", "json", "text", "qr", "audio"];
    let kinds = ["converter", "merge-tool", "picker", "formatter", "generator"];
    (0..count)
        .map(|i| {
            format!(
                "{}-{}_{}.html",
                words[i % words.len()],
                kinds[i % kinds.len()],
                i
            )
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let tools = sample_tools(5_000);

    c.bench_function("filter_empty_term", |b| {
        b.iter(|| filter(black_box(&tools), black_box("")))
    });
    c.bench_function("filter_keystroke", |b| {
        b.iter(|| filter(black_box(&tools), black_box("conv")))
    });
    c.bench_function("filter_display_name", |b| {
        b.iter(|| filter(black_box(&tools), black_box("Merge Tool")))
    });
}

fn bench_view(c: &mut Criterion) {
    let state = AppState {
        tools: sample_tools(5_000),
        search_term: "pick".to_string(),
        ..AppState::default()
    };

    c.bench_function("build_view", |b| {
        b.iter(|| black_box(&state).view(Duration::from_millis(50)))
    });
}

criterion_group!(benches, bench_filter, bench_view);
criterion_main!(benches);
