use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundli_time::Instant;
use kundli_vedic::{
    ALL_PLANETS, DashaRegistry, DashaSystemId, Planet, PlanetPosition, Rasi, TropicalPosition,
    build_kattams, find_running_dasha, lahiri_ayanamsa_deg, nakshatra_from_longitude,
    sidereal_placement,
};

fn ayanamsa_bench(c: &mut Criterion) {
    let t = Instant::from_utc(2024, 1, 1, 0, 0, 0.0).unwrap();
    c.bench_function("lahiri_ayanamsa", |b| {
        b.iter(|| lahiri_ayanamsa_deg(black_box(&t)))
    });
}

fn placement_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    group.bench_function("sidereal_placement", |b| {
        b.iter(|| sidereal_placement(black_box(123.456), black_box(24.19)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(287.5)))
    });
    group.finish();
}

fn kattam_bench(c: &mut Criterion) {
    let place = |planet: Planet, lon: f64| {
        let trop = TropicalPosition {
            planet,
            latitude_deg: 0.0,
            longitude_deg: lon,
            distance_au: 1.0,
        };
        PlanetPosition::enrich(&trop, 24.0, Rasi::Simha, false)
    };
    let asc = place(Planet::Ascendant, 154.0);
    let planets: Vec<PlanetPosition> = ALL_PLANETS
        .iter()
        .enumerate()
        .map(|(i, &p)| place(p, i as f64 * 41.0))
        .collect();
    c.bench_function("build_kattams", |b| {
        b.iter(|| build_kattams(black_box(&asc), black_box(&planets)))
    });
}

fn dasha_bench(c: &mut Criterion) {
    let reg = DashaRegistry::builtin();
    let birth = Instant::from_utc(1990, 1, 1, 0, 0, 0.0).unwrap();
    let now = Instant::from_utc(2020, 1, 1, 0, 0, 0.0).unwrap();
    c.bench_function("find_running_dasha", |b| {
        b.iter(|| {
            find_running_dasha(
                &reg,
                black_box(&birth),
                black_box(&now),
                DashaSystemId::VIMSHOTTARI,
            )
        })
    });
}

criterion_group!(
    benches,
    ayanamsa_bench,
    placement_bench,
    kattam_bench,
    dasha_bench
);
criterion_main!(benches);
