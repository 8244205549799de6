//! Experiments comparing the structures, each producing one CSV table.
//!
//! Every experiment sweeps n = 2^min_exp ..= 2^max_exp, repeats each size `trials` times on
//! fresh uniform workloads and reports the average over the trials.

mod structure;
mod table;

pub use structure::Structure;
pub use table::Table;

use crate::baseline::{HashIndex, OrderedIndex};
use crate::map::{ScoreMap, ScoreTree};
use crate::util::random::{queries, workload, Record};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    hint::black_box,
    time::{Duration, Instant},
};

/// structures timed by the insert and search experiments
pub const TIMED_STRUCTURES: [Structure; 4] = [
    Structure::Bst,
    Structure::Avl,
    Structure::Treap,
    Structure::SkipList(0.5),
];

/// skip list probabilities compared by the height experiment
pub const HEIGHT_PROBABILITIES: [f64; 3] = [0.5, 0.75, 0.25];

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub min_exp: u32,
    pub max_exp: u32,
    pub trials: usize,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_exp: 10,
            max_exp: 20,
            trials: 10,
            seed: 123456,
        }
    }
}

impl Config {
    /// problem sizes of the sweep
    pub fn sizes(&self) -> Vec<usize> {
        (self.min_exp..=self.max_exp).map(|exp| 1 << exp).collect()
    }

    fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

fn insert_all<M: ScoreMap + ?Sized>(map: &mut M, data: &[Record]) {
    for record in data {
        let _ = black_box(map.insert(record.id, record.score));
    }
}

fn time_inserts<M: ScoreMap + ?Sized>(map: &mut M, data: &[Record]) -> Duration {
    let start = Instant::now();
    insert_all(map, data);
    start.elapsed()
}

fn time_searches<M: ScoreMap + ?Sized>(map: &mut M, ids: &[i32]) -> Duration {
    let start = Instant::now();
    for id in ids {
        let _ = black_box(map.search_avg(*id));
    }
    start.elapsed()
}

fn micros_per_op(duration: Duration, ops: usize) -> f64 {
    duration.as_secs_f64() * 1e6 / ops as f64
}

/// Figure 1: average insert time per element (microseconds)
pub fn insert_time(config: &Config) -> Table {
    let mut rng = config.rng();
    let mut table = Table::new(
        TIMED_STRUCTURES
            .iter()
            .map(|structure| format!("{}_us_per_insert", structure)),
    );

    for n in config.sizes() {
        let mut sums = [0.0; TIMED_STRUCTURES.len()];

        for trial in 0..config.trials {
            let data = workload(&mut rng, n);

            for (structure, sum) in TIMED_STRUCTURES.iter().zip(sums.iter_mut()) {
                println!("Figure 1: n={}, trial={} - {} insert", n, trial, structure);

                let mut map = structure.build(rng.gen());
                *sum += micros_per_op(time_inserts(map.as_mut(), &data), n);
            }
        }

        table.push_row(n, average(&sums, config.trials));
    }

    table
}

/// Figure 2: average `search_avg` time per query (microseconds), n queries per trial
pub fn search_time(config: &Config) -> Table {
    let mut rng = config.rng();
    let mut table = Table::new(
        TIMED_STRUCTURES
            .iter()
            .map(|structure| format!("{}_us_per_search", structure)),
    );

    for n in config.sizes() {
        let mut sums = [0.0; TIMED_STRUCTURES.len()];

        for trial in 0..config.trials {
            let data = workload(&mut rng, n);
            let ids = queries(&mut rng, n);

            for (structure, sum) in TIMED_STRUCTURES.iter().zip(sums.iter_mut()) {
                println!("Figure 2: n={}, trial={} - {} search", n, trial, structure);

                let mut map = structure.build(rng.gen());
                insert_all(map.as_mut(), &data);
                *sum += micros_per_op(time_searches(map.as_mut(), &ids), n);
            }
        }

        table.push_row(n, average(&sums, config.trials));
    }

    table
}

/// structures of the height experiment, in the column order of its header
pub fn height_structures(probabilities: &[f64]) -> Vec<Structure> {
    let mut structures = vec![Structure::Bst, Structure::Avl, Structure::Treap];
    structures.extend(probabilities.iter().map(|&p| Structure::SkipList(p)));
    structures.push(Structure::AvlBf3);

    structures
}

/// Figure 3: average height after n inserts
pub fn height(config: &Config, probabilities: &[f64]) -> Table {
    let mut rng = config.rng();
    let structures = height_structures(probabilities);
    let mut table = Table::new(
        structures
            .iter()
            .map(|structure| format!("{}_height", structure)),
    );

    for n in config.sizes() {
        let mut sums = vec![0.0; structures.len()];

        for trial in 0..config.trials {
            let data = workload(&mut rng, n);

            for (structure, sum) in structures.iter().zip(sums.iter_mut()) {
                println!("Figure 3: n={}, trial={} - {} height", n, trial, structure);

                let mut map = structure.build(rng.gen());
                insert_all(map.as_mut(), &data);
                *sum += map.height() as f64;
            }
        }

        table.push_row(n, average(&sums, config.trials));
    }

    table
}

/// ordered map vs hash map: total insert time of n records per trial (nanoseconds)
pub fn baseline_insert(config: &Config) -> Table {
    let mut rng = config.rng();
    let mut table = Table::new(["BST_insert", "HT_insert"]);

    for n in config.sizes() {
        let mut sums = [0.0; 2];

        for trial in 0..config.trials {
            println!("Baseline: n={}, trial={} - insert", n, trial);

            let data = workload(&mut rng, n);
            sums[0] += time_inserts(&mut OrderedIndex::new(), &data).as_nanos() as f64;

            let data = workload(&mut rng, n);
            sums[1] += time_inserts(&mut HashIndex::new(), &data).as_nanos() as f64;
        }

        table.push_row(n, average(&sums, config.trials));
    }

    table
}

/// ordered map vs hash map: total time of `num_queries` searches per trial (nanoseconds)
pub fn baseline_search(config: &Config, num_queries: usize) -> Table {
    let mut rng = config.rng();
    let mut table = Table::new(["BST_search", "HT_search"]);

    for n in config.sizes() {
        let mut sums = [0.0; 2];

        for trial in 0..config.trials {
            println!("Baseline: n={}, trial={} - search", n, trial);

            let data = workload(&mut rng, n);
            let mut ordered = OrderedIndex::new();
            let mut hashed = HashIndex::new();
            insert_all(&mut ordered, &data);
            insert_all(&mut hashed, &data);

            let ids = queries(&mut rng, num_queries);
            sums[0] += time_searches(&mut ordered, &ids).as_nanos() as f64;

            let ids = queries(&mut rng, num_queries);
            sums[1] += time_searches(&mut hashed, &ids).as_nanos() as f64;
        }

        table.push_row(n, average(&sums, config.trials));
    }

    table
}

fn average(sums: &[f64], trials: usize) -> Vec<f64> {
    sums.iter().map(|sum| sum / trials as f64).collect()
}

/// Build each structure from the same records and report its height.
///
/// Used by the demo to compare the shapes on one workload.
pub fn heights_of(structures: &[Structure], data: &[Record], seed: u64) -> Vec<usize> {
    structures
        .iter()
        .map(|structure| {
            let mut map: Box<dyn ScoreTree> = structure.build(seed);
            insert_all(map.as_mut(), data);
            map.height()
        })
        .collect()
}
