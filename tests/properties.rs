//! Schedule invariants checked across all disciplines on generated workloads.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use u_cpusched::comparison::compare;
use u_cpusched::generator::{WorkloadConfig, WorkloadGenerator};
use u_cpusched::models::{ProcessRecord, Workload};
use u_cpusched::scheduler::{
    schedule_round_robin, schedule_srtf, Algorithm, ScheduleMetrics, Scheduler,
};

const SEEDS: [u64; 6] = [1, 2, 3, 42, 1234, 9_999];

fn generated(seed: u64, count: usize) -> Workload {
    let mut rng = SmallRng::seed_from_u64(seed);
    WorkloadGenerator::new(WorkloadConfig::default().with_process_count(count))
        .generate_with(&mut rng)
        .unwrap()
}

fn fixed(records: &[(u32, i64, i64)]) -> Workload {
    Workload::new(
        records
            .iter()
            .map(|&(pid, arrival, burst)| ProcessRecord::new(pid, arrival, burst, 1))
            .collect(),
    )
    .unwrap()
}

#[test]
fn test_derived_times_consistent() {
    for seed in SEEDS {
        let mut workload = generated(seed, 40);
        for quantum in [1, 4, 7] {
            let scheduler = Scheduler::new().with_time_quantum(quantum);
            for algorithm in Algorithm::ALL {
                scheduler.run(algorithm, workload.records_mut()).unwrap();

                for p in workload.records() {
                    let start = p.start_time.unwrap();
                    let completion = p.completion_time.unwrap();
                    let turnaround = p.turnaround_time.unwrap();
                    let waiting = p.waiting_time.unwrap();

                    assert_eq!(turnaround, completion - p.arrival_time, "{algorithm} seed {seed}");
                    assert_eq!(waiting, turnaround - p.burst_time, "{algorithm} seed {seed}");
                    assert!(waiting >= 0, "{algorithm} seed {seed} pid {}", p.pid);
                    assert!(start >= p.arrival_time);
                    assert!(start <= completion);
                    assert_eq!(p.remaining_time, 0);
                    assert!(p.is_done());
                }
            }
        }
    }
}

#[test]
fn test_waiting_sum_identity() {
    for seed in SEEDS {
        let mut workload = generated(seed, 30);
        let total_burst = workload.total_burst();
        for algorithm in Algorithm::ALL {
            Scheduler::new().run(algorithm, workload.records_mut()).unwrap();

            let waiting: i64 = workload.records().iter().filter_map(|p| p.waiting_time).sum();
            let turnaround: i64 = workload
                .records()
                .iter()
                .filter_map(|p| p.turnaround_time)
                .sum();
            assert_eq!(waiting, turnaround - total_burst, "{algorithm}");
        }
    }
}

#[test]
fn test_timeline_never_overlaps() {
    for seed in SEEDS {
        let mut workload = generated(seed, 25);
        let total_burst = workload.total_burst();
        for algorithm in Algorithm::ALL {
            let timeline = Scheduler::new().run(algorithm, workload.records_mut()).unwrap();

            assert!(timeline.is_consistent(), "{algorithm}");
            assert_eq!(timeline.busy_time(), total_burst, "{algorithm}");
            for p in workload.records() {
                let executed: i64 = timeline.slices_for(p.pid).map(|s| s.duration()).sum();
                assert_eq!(executed, p.burst_time);
                let first = timeline.slices_for(p.pid).next().unwrap();
                assert_eq!(Some(first.start), p.start_time);
            }
        }
    }
}

#[test]
fn test_non_preemptive_runs_contiguously() {
    let mut workload = generated(7, 30);
    for algorithm in [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::Priority] {
        let timeline = Scheduler::new().run(algorithm, workload.records_mut()).unwrap();
        assert_eq!(timeline.slices.len(), workload.len(), "{algorithm}");
        for p in workload.records() {
            assert_eq!(p.completion_time.unwrap() - p.start_time.unwrap(), p.burst_time);
        }
    }
}

#[test]
fn test_rerun_after_reset_is_identical() {
    for seed in SEEDS {
        let mut workload = generated(seed, 35);
        for algorithm in Algorithm::ALL {
            let scheduler = Scheduler::new();
            scheduler.run(algorithm, workload.records_mut()).unwrap();
            let first = workload.records().to_vec();

            workload.reset_all();
            scheduler.run(algorithm, workload.records_mut()).unwrap();
            assert_eq!(workload.records(), first.as_slice(), "{algorithm}");
        }
    }
}

#[test]
fn test_fcfs_fixture() {
    let mut workload = fixed(&[(1, 0, 5), (2, 1, 3)]);
    Scheduler::new().run(Algorithm::Fcfs, workload.records_mut()).unwrap();

    let p1 = workload.find(1).unwrap();
    let p2 = workload.find(2).unwrap();
    assert_eq!((p1.start_time, p1.completion_time), (Some(0), Some(5)));
    assert_eq!((p2.start_time, p2.completion_time), (Some(5), Some(8)));
}

#[test]
fn test_sjf_fixture() {
    let mut workload = fixed(&[(1, 0, 8), (2, 1, 4), (3, 2, 9), (4, 3, 5)]);
    let timeline = Scheduler::new().run(Algorithm::Sjf, workload.records_mut()).unwrap();

    let order: Vec<u32> = timeline.slices.iter().map(|s| s.pid).collect();
    assert_eq!(order, vec![1, 2, 4, 3]);

    let metrics = ScheduleMetrics::calculate(workload.records(), 67);
    assert!((metrics.avg_waiting_time - 7.75).abs() < 1e-10);
    assert_eq!(metrics.makespan, 26);
}

#[test]
fn test_round_robin_fixture() {
    let mut workload = fixed(&[(1, 0, 5), (2, 0, 3)]);
    let timeline = Scheduler::new()
        .with_time_quantum(4)
        .run(Algorithm::RoundRobin, workload.records_mut())
        .unwrap();

    let slices: Vec<(u32, i64, i64)> =
        timeline.slices.iter().map(|s| (s.pid, s.start, s.end)).collect();
    assert_eq!(slices, vec![(1, 0, 4), (2, 4, 7), (1, 7, 8)]);
    assert_eq!(workload.find(1).unwrap().completion_time, Some(8));
}

#[test]
fn test_srtf_never_worse_than_sjf_on_average_wait() {
    // SRTF is optimal for average waiting time on a single CPU
    for seed in SEEDS {
        let mut workload = generated(seed, 40);
        let outcomes = compare(
            &mut workload,
            &[Algorithm::Sjf, Algorithm::Srtf],
            &Scheduler::new(),
            67,
        )
        .unwrap();
        assert!(
            outcomes[1].metrics.avg_waiting_time <= outcomes[0].metrics.avg_waiting_time + 1e-9,
            "seed {seed}"
        );
    }
}

#[test]
fn test_transient_reported_by_every_algorithm() {
    let mut workload = generated(42, 66);
    let outcomes = compare(&mut workload, &Algorithm::ALL, &Scheduler::new(), 67).unwrap();
    for outcome in outcomes {
        let m = outcome.metrics;
        assert!(m.transient_waiting_time.unwrap() >= 0);
        assert_eq!(
            m.transient_turnaround_time.unwrap() - m.transient_waiting_time.unwrap(),
            10
        );
    }
}

#[test]
fn test_empty_workload() {
    let mut workload = Workload::new(Vec::new()).unwrap();
    for algorithm in Algorithm::ALL {
        let timeline = Scheduler::new().run(algorithm, workload.records_mut()).unwrap();
        assert!(timeline.is_empty());
    }
    let m = ScheduleMetrics::calculate(workload.records(), 67);
    assert_eq!(m.avg_waiting_time, 0.0);
    assert_eq!(m.avg_turnaround_time, 0.0);
    assert!(m.transient_waiting_time.is_none());
    assert!(m.transient_turnaround_time.is_none());
}

#[test]
fn test_json_records_schedule_without_reset() {
    let json = r#"[
        {"pid": 1, "arrival_time": 0, "burst_time": 5, "priority": 1},
        {"pid": 2, "arrival_time": 0, "burst_time": 3, "priority": 1}
    ]"#;

    let mut srtf: Vec<ProcessRecord> = serde_json::from_str(json).unwrap();
    schedule_srtf(&mut srtf);
    let times: Vec<(u32, Option<i64>, Option<i64>)> =
        srtf.iter().map(|p| (p.pid, p.completion_time, p.waiting_time)).collect();
    assert_eq!(times, vec![(1, Some(8), Some(3)), (2, Some(3), Some(0))]);

    let mut rr: Vec<ProcessRecord> = serde_json::from_str(json).unwrap();
    schedule_round_robin(&mut rr, 4).unwrap();
    let times: Vec<(u32, Option<i64>, Option<i64>)> =
        rr.iter().map(|p| (p.pid, p.completion_time, p.waiting_time)).collect();
    assert_eq!(times, vec![(1, Some(8), Some(3)), (2, Some(7), Some(4))]);
}
