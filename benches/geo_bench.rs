//! Benchmarks for the geodesic scoring functions.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bygaetter::catalog::ALL_CITIES;
use bygaetter::geo::{bearing_label, distance_km};

fn bench_distance(c: &mut Criterion) {
    c.bench_function("distance_km all pairs", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for a in ALL_CITIES {
                for x in ALL_CITIES {
                    total += distance_km(black_box(a.coordinate()), black_box(x.coordinate()));
                }
            }
            total
        })
    });
}

fn bench_bearing(c: &mut Criterion) {
    c.bench_function("bearing_label all pairs", |b| {
        b.iter(|| {
            let mut count = 0usize;
            for a in ALL_CITIES {
                for x in ALL_CITIES {
                    count += bearing_label(black_box(a.coordinate()), black_box(x.coordinate()))
                        as usize;
                }
            }
            count
        })
    });
}

criterion_group!(benches, bench_distance, bench_bearing);
criterion_main!(benches);
