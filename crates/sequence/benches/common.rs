use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::apply_small_runtime_config;
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId};
use rand::Rng;
use rand::rngs::StdRng;

use sequence::{ArraySequence, LinkedSequence, Sequence};

const SIZES: [usize; 3] = [1_000, 8_000, 64_000];
const CHURN_OPS_PER_ITER: usize = 200;

pub fn bench_append<M, S>(group: &mut BenchmarkGroup<'_, M>, label: &str)
where
    M: Measurement<Value = Duration>,
    S: Sequence<Item = u64>,
{
    for &size in &SIZES {
        apply_small_runtime_config(group);
        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let start = Instant::now();
                    let mut seq = S::new();
                    for item in 0..size as u64 {
                        seq.add_after(item);
                    }
                    black_box(seq.len());
                    total += start.elapsed();
                }
                total
            })
        });
    }
}

pub fn bench_sweep<M, S>(group: &mut BenchmarkGroup<'_, M>, label: &str)
where
    M: Measurement<Value = Duration>,
    S: Sequence<Item = u64>,
{
    for &size in &SIZES {
        apply_small_runtime_config(group);
        let mut seq = S::new();
        for item in 0..size as u64 {
            seq.add_after(item);
        }

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| {
                let mut sum = 0u64;
                seq.start();
                while seq.is_current() {
                    sum = sum.wrapping_add(*seq.current().unwrap());
                    seq.advance().unwrap();
                }
                black_box(sum)
            })
        });
    }
}

pub fn bench_churn<M, S>(group: &mut BenchmarkGroup<'_, M>, label: &str, rng: &mut StdRng)
where
    M: Measurement<Value = Duration>,
    S: Sequence<Item = u64>,
{
    for &size in &SIZES {
        apply_small_runtime_config(group);
        let mut seq = S::new();
        for item in 0..size as u64 {
            seq.add_after(item);
        }
        seq.start();

        // Alternating insert/remove around the cursor, with occasional
        // advances so the cursor drifts through the sequence.
        let rolls: Vec<u8> = (0..CHURN_OPS_PER_ITER).map(|_| rng.random()).collect();
        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| {
                for &roll in &rolls {
                    if !seq.is_current() {
                        seq.start();
                    }
                    match roll % 4 {
                        0 => seq.add_before(u64::from(roll)),
                        1 => seq.add_after(u64::from(roll)),
                        2 => {
                            let _ = black_box(seq.remove_current());
                        }
                        _ => {
                            let _ = seq.advance();
                        }
                    }
                }
                black_box(seq.len())
            })
        });
    }
}

pub fn bench_all_append<M: Measurement<Value = Duration>>(group: &mut BenchmarkGroup<'_, M>) {
    bench_append::<M, ArraySequence<u64>>(group, "array");
    bench_append::<M, LinkedSequence<u64>>(group, "linked");
}

pub fn bench_all_sweep<M: Measurement<Value = Duration>>(group: &mut BenchmarkGroup<'_, M>) {
    bench_sweep::<M, ArraySequence<u64>>(group, "array");
    bench_sweep::<M, LinkedSequence<u64>>(group, "linked");
}

pub fn bench_all_churn<M: Measurement<Value = Duration>>(group: &mut BenchmarkGroup<'_, M>) {
    let mut rng = bench::default_rng();
    bench_churn::<M, ArraySequence<u64>>(group, "array", &mut rng);
    bench_churn::<M, LinkedSequence<u64>>(group, "linked", &mut rng);
}
