//! The propagation driver.

use crate::{community::Communities, graph::Graph, types::VId};
use log::debug;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Drives the speaker-listener rounds over a graph and applies the
/// post-processing threshold.
///
/// The driver owns the only random source of the run: one seedable generator
/// threaded through every shuffle and every spoken label, so two runs with
/// the same seed, graph, iteration count, and threshold produce identical
/// communities.
pub struct PropagationDriver {
    iterations: usize,
    threshold: f64,
    rng: StdRng,
}

impl PropagationDriver {
    /// Creates a driver running `iterations` rounds with post-processing
    /// threshold `threshold`, seeded from `seed` when given and from system
    /// entropy otherwise.
    pub fn new(iterations: usize, threshold: f64, seed: Option<u64>) -> PropagationDriver {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_seed(rand::random()),
        };
        PropagationDriver {
            iterations,
            threshold,
            rng,
        }
    }

    /// Runs the propagation rounds and returns the thresholded communities.
    pub fn run(mut self, graph: &mut Graph) -> Communities {
        self.propagate(graph);
        extract_communities(graph, self.threshold)
    }

    /// Mutates the vertex memories through the configured number of rounds.
    ///
    /// Each round visits every vertex exactly once in a fresh uniform random
    /// permutation, and each visit reads the current memories of the
    /// listener's neighbors: a listener late in the round observes labels
    /// spoken from memories already updated earlier in the same round. That
    /// ordering is part of the algorithm, so the rounds are strictly
    /// sequential.
    pub fn propagate(&mut self, graph: &mut Graph) {
        let mut order: Vec<VId> = (0..graph.num_vertices()).collect();
        for round in 1..=self.iterations {
            debug!("starting round {} of {}", round, self.iterations);
            order.shuffle(&mut self.rng);
            for &listener in &order {
                graph.listen(listener, &mut self.rng);
            }
        }
    }
}

/// Applies the post-processing threshold to the propagated memories.
///
/// A vertex joins the community of every label occupying at least
/// `threshold` of its memory.
pub fn extract_communities(graph: &Graph, threshold: f64) -> Communities {
    let mut communities = Communities::new();
    for vid in 0..graph.num_vertices() {
        let memory = graph.memory(vid);
        for (&label, &count) in memory.entries() {
            if count as f64 / memory.total() as f64 >= threshold {
                communities.add(label, vid);
            }
        }
    }
    communities
}
