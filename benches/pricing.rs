use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stagetip_backend::models::commission::{CommissionScenario, ShowScenario};
use stagetip_backend::pricing::commission::{commission_scenario, show_commission};
use stagetip_backend::pricing::fees::donation_breakdown;

fn bench_donation_breakdown(c: &mut Criterion) {
    c.bench_function("donation_breakdown", |b| {
        b.iter(|| donation_breakdown(black_box(37.77)))
    });
}

fn bench_commission_scenario(c: &mut Criterion) {
    let scenario = CommissionScenario {
        referred_artist_count: 5,
        second_tier_artist_count: 10,
        avg_donation_per_artist: 500.0,
    };
    c.bench_function("commission_scenario", |b| {
        b.iter(|| commission_scenario(black_box(&scenario)))
    });
}

fn bench_show_commission(c: &mut Criterion) {
    let scenario = ShowScenario {
        attendees: 100,
        donation_rate_pct: 40.0,
        avg_donation_amount: 20.0,
    };
    c.bench_function("show_commission", |b| {
        b.iter(|| show_commission(black_box(&scenario)))
    });
}

criterion_group!(
    benches,
    bench_donation_breakdown,
    bench_commission_scenario,
    bench_show_commission
);
criterion_main!(benches);
