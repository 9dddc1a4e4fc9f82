//! Record arena: `AgentStore` (records) and `AgentRngs` (per-agent RNG).
//!
//! # Two arenas
//!
//! Solvers take the per-agent RNG as a separate argument so that a solver
//! implementation cannot reach another agent's RNG through the record.  The
//! dispatch zips both arenas slot by slot:
//!
//! ```ignore
//! store.records_mut()
//!     .par_iter_mut()
//!     .zip(rngs.inner.par_iter_mut())
//!     .for_each(|(record, rng)| solver.solve(record, &ctx, rng));
//! ```

use swarm_core::{AgentId, AgentRng, Obstacle};

use crate::AgentRecord;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, indexed by `AgentId`.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Arena of agent records; `AgentId` is the slot index.
pub struct AgentStore {
    records: Vec<AgentRecord>,
}

impl AgentStore {
    pub(crate) fn new(records: Vec<AgentRecord>) -> Self {
        Self { records }
    }

    /// Number of agents.
    #[inline]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> &AgentRecord {
        &self.records[agent.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRecord {
        &mut self.records[agent.index()]
    }

    #[inline]
    pub fn records(&self) -> &[AgentRecord] {
        &self.records
    }

    /// Mutable slice of all records.  Slots can be handed out disjointly
    /// (`iter_mut`, `par_iter_mut`, `split_at_mut`), never resized.
    #[inline]
    pub fn records_mut(&mut self) -> &mut [AgentRecord] {
        &mut self.records
    }

    /// The obstacle list shared by every record (empty for an empty store).
    pub fn obstacles(&self) -> &[Obstacle] {
        self.records.first().map(|r| &*r.obstacles).unwrap_or(&[])
    }
}
