//! Benchmarks for the boxing ring.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- fight
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use boxing_ring::engine::fighting_skill;
use boxing_ring::{Boxer, LeaderboardSort, RingEngine, Roster, SeededSource};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Roster of `count` boxers with varied attributes, ids 1..=count.
fn populate_roster(count: usize) -> Roster {
    let mut roster = Roster::with_capacity(count);
    for i in 0..count {
        let weight = 125 + (i % 100) as u32;
        let reach = 60.0 + (i % 20) as f64;
        let age = 18 + (i % 23) as u32;
        roster
            .create_boxer(&format!("Boxer {i}"), weight, 170, reach, age)
            .expect("valid boxer");
    }
    roster
}

// ============================================================================
// BENCHMARK: Skill
// ============================================================================

fn bench_skill(c: &mut Criterion) {
    let boxer = Boxer::new(1, "Boxer 1", 180, 167, 72.0, 30).expect("valid boxer");
    c.bench_function("fighting_skill", |b| {
        b.iter(|| black_box(fighting_skill(black_box(&boxer))))
    });
}

// ============================================================================
// BENCHMARK: Full bout (enter, fight, record)
// ============================================================================

fn bench_fight(c: &mut Criterion) {
    let mut group = c.benchmark_group("fight");

    group.bench_function("single_bout", |b| {
        let mut roster = populate_roster(2);
        let first = roster.get_boxer_by_id(1).expect("boxer 1");
        let second = roster.get_boxer_by_id(2).expect("boxer 2");
        let mut ring = RingEngine::new();
        let mut source = SeededSource::new(42);

        b.iter(|| {
            ring.enter_ring(first.clone()).expect("ring has room");
            ring.enter_ring(second.clone()).expect("ring has room");
            black_box(ring.fight(&mut roster, &mut source).expect("bout resolves"))
        });
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Leaderboard
// ============================================================================

fn bench_leaderboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaderboard");

    for size in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let mut roster = populate_roster(size);
                    let mut ring = RingEngine::new();
                    let mut source = SeededSource::new(7);
                    for id in (1..size as u64).step_by(2) {
                        let first = roster.get_boxer_by_id(id).expect("boxer");
                        let second = roster.get_boxer_by_id(id + 1).expect("boxer");
                        ring.enter_ring(first).expect("ring has room");
                        ring.enter_ring(second).expect("ring has room");
                        ring.fight(&mut roster, &mut source).expect("bout resolves");
                    }
                    roster
                },
                |roster| black_box(roster.get_leaderboard(LeaderboardSort::WinPct)),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_skill, bench_fight, bench_leaderboard);
criterion_main!(benches);
