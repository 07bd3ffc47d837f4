//! # Ledger Benchmarks
//!
//! | Path | Target |
//! |------|--------|
//! | Uncontended transfer through `LedgerService` | < 1µs |
//! | Mint with cap check | < 1µs |
//! | Snapshot of N holders | linear in N |
//! | Contended transfers across threads | no collapse vs. single thread |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ledger_core::{
    Account, Amount, LedgerApi, LedgerConfig, LedgerService, LedgerState, NoOpSink,
};
use rand::Rng;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const SUPPLY: Amount = 1_000_000_000_000;

fn owner() -> Account {
    Account::from_low_u64(1)
}

fn service() -> LedgerService {
    let config = LedgerConfig::new(owner(), SUPPLY, SUPPLY * 10);
    match LedgerService::new(&config, Arc::new(NoOpSink)) {
        Ok(service) => service,
        Err(e) => panic!("bench ledger rejected: {e}"),
    }
}

fn bench_commands(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger-commands");
    group.measurement_time(Duration::from_secs(5));

    let ledger = service();
    let to = Account::from_low_u64(2);

    group.bench_function("transfer", |b| {
        b.iter(|| ledger.transfer(owner(), black_box(to), black_box(1)))
    });

    group.bench_function("mint", |b| {
        b.iter(|| ledger.mint(owner(), black_box(to), black_box(1)))
    });

    group.bench_function("rejected_mint_unauthorized", |b| {
        b.iter(|| ledger.mint(black_box(to), to, 1))
    });

    group.bench_function("balance_of", |b| b.iter(|| ledger.balance_of(black_box(&to))));

    group.finish();
}

fn bench_state_without_lock(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger-state");

    let mut state = match LedgerState::genesis(owner(), SUPPLY, SUPPLY * 10) {
        Ok(genesis) => genesis.state,
        Err(e) => panic!("bench genesis rejected: {e}"),
    };
    let to = Account::from_low_u64(3);

    group.bench_function("transfer", |b| {
        b.iter(|| state.transfer(owner(), black_box(to), black_box(1)))
    });

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger-snapshot");

    for holders in [100u64, 1_000, 10_000] {
        let ledger = service();
        for id in 0..holders {
            let _ = ledger.transfer(owner(), Account::from_low_u64(10 + id), 1);
        }

        group.throughput(Throughput::Elements(holders));
        group.bench_with_input(BenchmarkId::new("snapshot", holders), &ledger, |b, l| {
            b.iter(|| black_box(l.snapshot()))
        });
    }

    group.finish();
}

fn bench_contention(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger-contention");
    group.sample_size(10);

    for threads in [1usize, 2, 4, 8] {
        group.throughput(Throughput::Elements((threads * 1_000) as u64));
        group.bench_with_input(
            BenchmarkId::new("random_transfers", threads),
            &threads,
            |b, &threads| {
                let ledger = Arc::new(service());
                b.iter(|| {
                    let handles: Vec<_> = (0..threads)
                        .map(|_| {
                            let ledger = Arc::clone(&ledger);
                            thread::spawn(move || {
                                let mut rng = rand::thread_rng();
                                for _ in 0..1_000 {
                                    let to = Account::from_low_u64(rng.gen_range(2..1_000));
                                    let _ = ledger.transfer(owner(), to, 1);
                                }
                            })
                        })
                        .collect();
                    for handle in handles {
                        let _ = handle.join();
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_commands,
    bench_state_without_lock,
    bench_snapshot,
    bench_contention
);
criterion_main!(benches);
