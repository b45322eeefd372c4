use std::env;

use criterion::{black_box, BatchSize, Criterion};

use once_cell::sync::OnceCell;

use regex::Regex;

pub fn pin_thread_to_core() {
    use std::cell::Cell;
    let pin_core_id: usize = 2;

    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = Cell::new(false); }

    // Set affinity only once per thread.
    AFFINITY_ALREADY_SET.with(|affinity_already_set| {
        if !affinity_already_set.get() {
            if let Some(core_id_2) = core_affinity::get_core_ids()
                .as_ref()
                .and_then(|ids| ids.get(pin_core_id))
            {
                core_affinity::set_for_current(*core_id_2);
            }

            affinity_already_set.set(true);
        }
    });
}

/// Honors the `CUSTOM_BENCH_REGEX` env var, benchmarks whose name doesn't match are skipped.
pub fn should_run_benchmark(name: &str) -> bool {
    static FILTER_REGEX: OnceCell<Option<Regex>> = OnceCell::new();

    let filter_regex = FILTER_REGEX.get_or_init(|| {
        env::var("CUSTOM_BENCH_REGEX")
            .ok()
            .map(|filter_regex| Regex::new(&filter_regex).unwrap())
    });

    filter_regex
        .as_ref()
        .map(|reg| reg.is_match(name))
        .unwrap_or(true)
}

#[inline(never)]
pub fn bench_fn(
    c: &mut Criterion,
    test_len: usize,
    pattern_name: &str,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
    bench_name: &str,
    sort_fn: impl Fn(&mut [i32]),
) {
    // Pin the benchmark to the same core to improve repeatability. Doing it this way allows
    // criterion to do other stuff with other threads, which greatly impacts overall benchmark
    // throughput.
    pin_thread_to_core();

    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    let bench_name_hot = format!("{bench_name}-hot-i32-{pattern_name}-{test_len}");
    if should_run_benchmark(&bench_name_hot) {
        c.bench_function(&bench_name_hot, |b| {
            b.iter_batched_ref(
                || pattern_provider(test_len),
                |test_data| {
                    sort_fn(black_box(test_data.as_mut_slice()));
                    black_box(test_data); // side-effect
                },
                batch_size,
            )
        });
    }

    #[cfg(feature = "cold_benchmarks")]
    {
        let bench_name_cold = format!("{bench_name}-cold-i32-{pattern_name}-{test_len}");
        if should_run_benchmark(&bench_name_cold) {
            c.bench_function(&bench_name_cold, |b| {
                b.iter_batched_ref(
                    || {
                        let test_data = pattern_provider(test_len);

                        // Try as best as possible to trash all prediction state in the CPU, to
                        // simulate calling the sort as part of a larger program. Caveat, memory
                        // caches. We don't want to benchmark how expensive it is to load something
                        // from main memory.
                        black_box(trash_prediction_state(black_box(
                            test_data.first().copied().unwrap_or(0),
                        )));

                        test_data
                    },
                    |test_data| {
                        sort_fn(black_box(test_data.as_mut_slice()));
                        black_box(test_data); // side-effect
                    },
                    BatchSize::PerIteration,
                )
            });
        }
    }
}

/// Runs data dependent branches over noise, leaving the branch predictors in a state unrelated to
/// the sort.
#[cfg(feature = "cold_benchmarks")]
#[inline(never)]
fn trash_prediction_state(seed: i32) -> i32 {
    let noise = sort_test_tools::patterns::random_uniform(20_000, 0..=1_000);

    let mut acc = seed;
    for val in noise {
        if val % 3 == 0 {
            acc = acc.wrapping_add(val);
        } else if val % 5 == 0 {
            acc ^= val;
        } else {
            acc = acc.rotate_left(1);
        }
    }

    acc
}
