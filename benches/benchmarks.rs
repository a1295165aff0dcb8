use rochambeau::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        comparing_all_sign_pairs,
        dealing_random_round,
        playing_oracle_game,
        playing_fish_game,
}

fn comparing_all_sign_pairs(c: &mut criterion::Criterion) {
    c.bench_function("compare all 9 Sign pairs", |b| {
        b.iter(|| {
            Sign::all()
                .into_iter()
                .flat_map(|a| Sign::all().into_iter().map(move |b| a.beats(b)))
                .filter(|won| *won)
                .count()
        })
    });
}

fn dealing_random_round(c: &mut criterion::Criterion) {
    let ref mut thrower = Random::seeded(0);
    c.bench_function("deal a Round", |b| b.iter(|| Round::deal(thrower)));
}

fn playing_oracle_game(c: &mut criterion::Criterion) {
    c.bench_function("play a full game with Oracle", |b| {
        b.iter(|| Table::new(Random::seeded(0), Oracle).limit(1).play())
    });
}

fn playing_fish_game(c: &mut criterion::Criterion) {
    c.bench_function("play a full game with Fish", |b| {
        b.iter(|| Table::new(Random::seeded(0), Fish::seeded(0)).limit(1).play())
    });
}
