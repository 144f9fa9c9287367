//! Performance benchmarks for the scorebook.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scorebook::{ManualClock, MatchConfig, MatchState, TeamId, Timestamp};

fn create_match(clock: &ManualClock) -> MatchState {
    let mut state = MatchState::with_clock(MatchConfig::default(), clock.clone());
    for team in TeamId::ALL {
        for slot in 0..6 {
            state.set_player_name(team, slot, format!("Player {}", slot + 1));
        }
    }
    state.start_match();
    state
}

/// Fill a match with `events` mixed operations, one second apart.
fn play(state: &mut MatchState, clock: &ManualClock, events: usize) {
    for i in 0..events {
        let team = TeamId::ALL[i % 2];
        match i % 4 {
            0 => state.serve(team, "Player 1"),
            1 => state.record_point(team),
            2 => state.rotate(team),
            _ => state.substitute(team, i % 6, "Bench"),
        };
        clock.advance(1);
    }
}

/// Benchmark recording operations followed by undoing all of them
fn bench_record_and_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_and_undo");

    for events in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("events", events), &events, |b, &events| {
            b.iter(|| {
                let clock = ManualClock::new(Timestamp::parse("2024-05-01 18:00:00").unwrap());
                let mut state = create_match(&clock);
                play(&mut state, &clock, events);
                while state.undo() {}
                black_box(state.team(TeamId::Home).score);
            });
        });
    }

    group.finish();
}

/// Benchmark merging logs and rendering CSV
fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_csv");

    for events in [100, 1000, 5000] {
        let clock = ManualClock::new(Timestamp::parse("2024-05-01 18:00:00").unwrap());
        let mut state = create_match(&clock);
        play(&mut state, &clock, events);

        group.bench_with_input(BenchmarkId::new("events", events), &state, |b, state| {
            b.iter(|| {
                black_box(state.report().to_csv().unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_record_and_undo, bench_export);
criterion_main!(benches);
