//! Integration tests: configuration search end-to-end

use gpuplan::planner::{
    estimate_minutes, find_optimal_configuration, SearchBounds, WorkloadSpec,
};

#[test]
fn test_trivial_target_picks_highest_rate_one_gpu() {
    // One partition producing one article; any configuration finishes far
    // inside the target, so the first rate tried wins with a single GPU.
    let workload = WorkloadSpec::new(1, 1);
    let outcome = find_optimal_configuration(1_000_000.0, SearchBounds::default(), &workload);

    let best = outcome.best_configuration().expect("target is trivially satisfiable");
    assert_eq!((best.rate, best.parallelism), (150, 1));
    assert_eq!(
        outcome.achieved_minutes(),
        estimate_minutes(150, 1, &workload)
    );
}

#[test]
fn test_unreachable_target_finds_nothing() {
    let workload = WorkloadSpec::new(1, 1);
    let outcome = find_optimal_configuration(0.0001, SearchBounds::default(), &workload);

    assert!(!outcome.is_feasible());
    assert!(outcome.best_configuration().is_none());
    assert!(outcome.achieved_minutes().is_infinite());
}

#[test]
fn test_single_cell_grid() {
    let bounds = SearchBounds::new(1, 1);
    let workload = WorkloadSpec::new(1, 1);

    // 4700 tokens on one GPU at 1 token/sec: ~78.3 minutes.
    let only_cell = estimate_minutes(1, 1, &workload);

    let outcome = find_optimal_configuration(only_cell + 1.0, bounds, &workload);
    let best = outcome.best_configuration().unwrap();
    assert_eq!((best.rate, best.parallelism), (1, 1));

    let outcome = find_optimal_configuration(only_cell - 1.0, bounds, &workload);
    assert!(!outcome.is_feasible());
}

#[test]
fn test_newsfeed_sizing_scenario() {
    // 7 partitions × 150 articles of 2500 words at 1.88 tokens/word, to be
    // processed within 30 minutes on at most 70 GPUs of up to 150 tokens/sec.
    let workload = WorkloadSpec::new(7, 150);
    let bounds = SearchBounds::default();
    let outcome = find_optimal_configuration(30.0, bounds, &workload);

    let best = outcome.best_configuration().expect("30 minutes is reachable");
    assert_eq!((best.rate, best.parallelism), (144, 20));
    assert_eq!(
        outcome.achieved_minutes(),
        estimate_minutes(144, 20, &workload)
    );
    assert!(outcome.achieved_minutes() <= 30.0);
}

#[test]
fn test_search_result_is_not_the_full_grid_minimum() {
    // The search keeps only the first feasible GPU count per rate, so its
    // result can sit well above the exhaustive minimum over the same grid.
    // That shortcut is deliberate; this test documents it.
    let workload = WorkloadSpec::new(7, 150);
    let bounds = SearchBounds::default();
    let outcome = find_optimal_configuration(30.0, bounds, &workload);

    let mut grid_min = f64::INFINITY;
    for rate in 1..=bounds.max_rate {
        for parallelism in 1..=bounds.max_parallelism {
            let minutes = estimate_minutes(rate, parallelism, &workload);
            if minutes <= 30.0 && minutes < grid_min {
                grid_min = minutes;
            }
        }
    }

    assert!(grid_min < outcome.achieved_minutes());
}

#[test]
fn test_larger_bounds_never_hurt() {
    let workload = WorkloadSpec::new(7, 150);
    let narrow = find_optimal_configuration(30.0, SearchBounds::new(100, 40), &workload);
    let wide = find_optimal_configuration(30.0, SearchBounds::new(150, 70), &workload);

    assert!(wide.achieved_minutes() <= narrow.achieved_minutes());
}
