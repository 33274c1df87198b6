use aqi_chart::{hit_test, project, Insets, HIT_RADIUS};
use aqi_core::{CityTable, Generator, Metric};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_pointer_move(c: &mut Criterion) {
    let table = CityTable::builtin().expect("city table");
    let hourly = Generator::new(&table).hourly(168, "Delhi");

    c.bench_function("project_hourly", |b| {
        b.iter(|| black_box(project(black_box(&hourly), Metric::Aqi, 800, 320, Insets::uniform(50))))
    });

    let pts = project(&hourly, Metric::Aqi, 800, 320, Insets::uniform(50));
    c.bench_function("sweep_hit_test_hourly", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for x in (0..800).step_by(4) {
                if hit_test((x as f32, 160.0), black_box(&pts), HIT_RADIUS).is_some() { hits += 1; }
            }
            black_box(hits)
        })
    });
}

criterion_group!(benches, bench_pointer_move);
criterion_main!(benches);
