use crate::{
    graph::{Err, Memory, Result},
    types::{Count, Label, VId},
};
use rand::Rng;
use std::collections::{BTreeMap, HashSet};

/// The undirected graph on which label propagation runs.
///
/// The topology is an index-based adjacency arena: vertices are plain ids in
/// `[0, num_vertices)` and never reference each other directly. It is fixed
/// at construction; afterwards only the per-vertex memories mutate, and only
/// through [`listen`](Graph::listen).
#[derive(Debug)]
pub struct Graph {
    adjacency: Vec<Vec<VId>>,
    memories: Vec<Memory>,
    num_edges: usize,
}

impl Graph {
    /// Builds the graph from the declared counts and an edge iterator.
    ///
    /// Every edge is inserted symmetrically. Self loops and duplicate edges
    /// are rejected, endpoints must lie in `[0, num_vertices)`, and the
    /// number of inserted edges must agree with `num_edges`. Any violation
    /// is a hard error: no partial graph is ever returned.
    pub fn build<E>(num_vertices: usize, num_edges: usize, edges: E) -> Result<Graph>
    where
        E: IntoIterator<Item = (VId, VId)>,
    {
        let mut adjacency = vec![Vec::new(); num_vertices];
        let mut seen = HashSet::new();
        let mut inserted = 0;
        for (u, v) in edges {
            if u >= num_vertices {
                return Err(Err::VertexOutOfRange(u, num_vertices));
            }
            if v >= num_vertices {
                return Err(Err::VertexOutOfRange(v, num_vertices));
            }
            if u == v {
                return Err(Err::SelfLoop(u));
            }
            if !seen.insert(if u < v { (u, v) } else { (v, u) }) {
                return Err(Err::DuplicateEdge(u, v));
            }
            adjacency[u].push(v);
            adjacency[v].push(u);
            inserted += 1;
        }
        // Every insertion is symmetric, so the adjacency total is exactly
        // twice the inserted count; comparing the counts avoids arithmetic
        // on the untrusted declared value.
        if inserted != num_edges {
            return Err(Err::EdgeCountMismatch {
                declared: num_edges,
                inserted,
            });
        }
        let memories = (0..num_vertices).map(Memory::new).collect();
        Ok(Graph {
            adjacency,
            memories,
            num_edges,
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns the neighbors of `vid` in insertion order.
    pub fn neighbors(&self, vid: VId) -> &[VId] {
        &self.adjacency[vid]
    }

    pub fn memory(&self, vid: VId) -> &Memory {
        &self.memories[vid]
    }

    /// Performs one listen step with `listener` as the listening vertex.
    ///
    /// Every neighbor speaks one label drawn from its current memory, and
    /// the label with the strictly highest tally is recorded into the
    /// listener's memory, ties broken by the lowest label id. A vertex with
    /// no neighbors records its own seed label, so every vertex records
    /// exactly one label per step. Returns the recorded label.
    pub fn listen<R: Rng + ?Sized>(&mut self, listener: VId, rng: &mut R) -> Label {
        let mut tally: BTreeMap<Label, Count> = BTreeMap::new();
        for &speaker in &self.adjacency[listener] {
            *tally.entry(self.memories[speaker].speak(rng)).or_insert(0) += 1;
        }
        let mut popular = self.memories[listener].owner();
        let mut popular_count = 0;
        for (&label, &count) in &tally {
            if count > popular_count {
                popular = label;
                popular_count = count;
            }
        }
        self.memories[listener].record(popular);
        popular
    }
}
