//! Capacity sizing walkthrough
//!
//! Sizes a GPU fleet for the default newsfeed workload across a range of
//! processing-time targets.

use gpuplan::planner::{estimate_minutes, find_optimal_configuration, SearchBounds, WorkloadSpec};

fn main() {
    let workload = WorkloadSpec::new(7, 150);
    println!(
        "workload: {:.0} tokens per scheduling window\n",
        workload.total_tokens()
    );

    for target in [120.0, 60.0, 30.0, 10.0, 5.0] {
        let outcome = find_optimal_configuration(target, SearchBounds::default(), &workload);
        match outcome.best_configuration() {
            Some(config) => println!(
                "target {target:>6.1} min -> {:>3} tokens/sec x {:>2} GPUs, achieved {:.2} min",
                config.rate,
                config.parallelism,
                outcome.achieved_minutes()
            ),
            None => println!("target {target:>6.1} min -> not reachable within default bounds"),
        }
    }

    println!(
        "\nsingle GPU at 150 tokens/sec: {:.1} min",
        estimate_minutes(150, 1, &workload)
    );
}
