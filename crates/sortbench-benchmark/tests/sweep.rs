//! End-to-end sweeps through the public API.

use sortbench_algorithms::{BucketSort, QuickSort, SortStrategy, Strategy};
use sortbench_benchmark::{
    run_benchmark, BenchmarkError, BenchmarkJob, RandomArrayGenerator, TrialAggregator,
};
use sortbench_config::RunConfig;
use sortbench_core::{AlgorithmKind, SortBenchError};
use sortbench_test::{is_permutation, is_sorted, ScriptedStrategy};

fn selection_config() -> RunConfig {
    RunConfig::new()
        .with_bounds(1, 1000)
        .with_max_size(10)
        .with_repetitions(5)
        .with_algorithm(AlgorithmKind::Selection)
}

#[test]
fn test_selection_sweep_shape() {
    let table = run_benchmark(&selection_config()).unwrap();

    assert_eq!(table.algorithm(), AlgorithmKind::Selection);
    assert_eq!(table.len(), 9);
    assert_eq!(table.sizes(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);

    for record in table.records() {
        assert_eq!(record.estimated_cost, (record.size * record.size) as f64);
        assert!(record.measured_time_micros >= 0.0);
        let n = record.size as f64;
        assert_eq!(record.operation_count, (n - 1.0) + n * (n - 1.0) / 2.0);
    }
    assert_eq!(table.record(1).unwrap().operation_count, 2.0);
}

#[test]
fn test_bucket_sort_small_array() {
    let mut data = vec![5_i64, 3, 8, 1];
    BucketSort::by_key().sort(&mut data).unwrap();
    assert_eq!(data, vec![1, 3, 5, 8]);
}

#[test]
fn test_quick_sort_descending_input() {
    let mut data = vec![5_i64, 4, 3, 2, 1];
    QuickSort.sort(&mut data).unwrap();
    assert_eq!(data, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_single_repetition_reports_raw_count() {
    // count encodes both the size and which call produced it
    let strategy = ScriptedStrategy::new(|len, call| len as u64 * 1000 + call);
    let config = selection_config().with_repetitions(1).with_max_size(6);

    let mut aggregator = TrialAggregator::new(RandomArrayGenerator::with_seed(2));
    let table = aggregator.run(&strategy, &config).unwrap();

    assert_eq!(table.operation_counts(), &[1000.0, 2001.0, 3002.0, 4003.0, 5004.0]);
    assert_eq!(strategy.calls(), 5);
}

#[test]
fn test_repetitions_are_averaged() {
    let strategy = ScriptedStrategy::new(|len, call| len as u64 + call % 2);
    let config = selection_config().with_repetitions(4).with_max_size(3);

    let mut aggregator = TrialAggregator::new(RandomArrayGenerator::with_seed(2));
    let table = aggregator.run(&strategy, &config).unwrap();

    // calls 0..4 at size 1 give 1,2,1,2; calls 4..8 at size 2 give 2,3,2,3
    assert_eq!(table.operation_counts(), &[1.5, 2.5]);
    assert_eq!(strategy.calls(), 8);
}

#[test]
fn test_operation_count_grows_with_size() {
    let config = RunConfig::new()
        .with_bounds(1, 10_000)
        .with_max_size(50)
        .with_repetitions(20)
        .with_random_seed(17);

    let selection = run_benchmark(&config.clone().with_algorithm(AlgorithmKind::Selection)).unwrap();
    assert!(selection
        .operation_counts()
        .windows(2)
        .all(|w| w[0] <= w[1]));

    for kind in AlgorithmKind::ALL {
        let table = run_benchmark(&config.clone().with_algorithm(kind)).unwrap();
        let counts = table.operation_counts();
        assert!(counts.iter().all(|c| *c >= 0.0), "{}", kind);
        assert!(counts[4] < counts[48], "{}: {:?}", kind, counts);
    }
}

#[test]
fn test_estimated_cost_column_follows_model() {
    for kind in AlgorithmKind::ALL {
        let config = RunConfig::new()
            .with_algorithm(kind)
            .with_max_size(8)
            .with_repetitions(1)
            .with_random_seed(5);
        let table = run_benchmark(&config).unwrap();
        for record in table.records() {
            assert_eq!(record.estimated_cost, kind.estimated_cost(record.size));
        }
    }
}

#[test]
fn test_invalid_config_never_starts() {
    let strategy = ScriptedStrategy::new(|_, _| 0);
    let mut aggregator = TrialAggregator::new(RandomArrayGenerator::with_seed(1));

    for config in [
        selection_config().with_bounds(500, 500),
        selection_config().with_bounds(0, 10),
        selection_config().with_max_size(0),
        selection_config().with_repetitions(0),
    ] {
        let err = aggregator.run(&strategy, &config).unwrap_err();
        assert!(matches!(err, BenchmarkError::Config(_)), "{:?}", err);
    }
    assert_eq!(strategy.calls(), 0);
}

#[test]
fn test_failing_trial_aborts_sweep() {
    let strategy = ScriptedStrategy::new(|len, _| len as u64).failing_at(3);
    let mut aggregator = TrialAggregator::new(RandomArrayGenerator::with_seed(1));

    let err = aggregator.run(&strategy, &selection_config()).unwrap_err();

    assert!(matches!(err, BenchmarkError::Sort(SortBenchError::DegenerateInput(_))));
    // sizes 1 and 2 ran fully, size 3 stopped at its first trial
    assert_eq!(strategy.calls(), 5 + 5 + 1);
}

#[test]
fn test_bucket_sort_rejects_negative_projection() {
    let mut data = vec![3_i64, -1, 2];
    let err = BucketSort::by_key().sort(&mut data).unwrap_err();
    assert!(matches!(err, SortBenchError::DegenerateInput(_)));
    assert_eq!(data, vec![3, -1, 2]);
}

#[test]
fn test_every_strategy_sorts_generated_arrays() {
    let mut generator = RandomArrayGenerator::with_seed(9);
    for kind in AlgorithmKind::ALL {
        for size in [0, 1, 2, 17, 200] {
            let original = generator.generate(size, 1, 100);
            let mut data = original.clone();
            kind.sort(&mut data).unwrap();
            assert!(is_sorted(&data), "{} at {}", kind, size);
            assert!(is_permutation(&data, &original), "{} at {}", kind, size);
        }
    }
}

#[test]
fn test_background_job_streams_progress() {
    let config = selection_config().with_random_seed(4);
    let mut job = BenchmarkJob::spawn(config.clone()).unwrap();

    let mut streamed = Vec::new();
    while let Some(record) = job.blocking_next_record() {
        streamed.push(record.size);
    }
    let table = job.join().unwrap();

    assert_eq!(streamed, (1..10).collect::<Vec<_>>());
    assert_eq!(table.operation_counts(), run_benchmark(&config).unwrap().operation_counts());
}
