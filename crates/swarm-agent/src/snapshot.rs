//! `SwarmSnapshot`: the read-only broadcast of every agent's position.
//!
//! One matrix per axis, `agent_count × horizon`, row-major.  Row `i` is agent
//! `i`'s planned trajectory as of the end of the previous tick; column 0 is
//! its current position.  On tick 0 no plan exists yet, so every row holds
//! the agent's initial position.

use std::fmt;

use swarm_core::{AgentId, Tick, Vec3};

use crate::AgentStore;

/// Spatial axis of a snapshot matrix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(s)
    }
}

/// Positions of the whole swarm for one tick.
///
/// Built once per tick by the orchestrator via [`share`][Self::share] and then
/// only ever borrowed immutably, so every solver in the tick sees the same
/// consistent picture.
#[derive(Clone, Debug, PartialEq)]
pub struct SwarmSnapshot {
    tick:    Tick,
    agents:  usize,
    horizon: usize,
    x:       Vec<f64>,
    y:       Vec<f64>,
    z:       Vec<f64>,
}

impl SwarmSnapshot {
    /// Build the snapshot for `tick` from the records' latest plans.
    pub fn share(tick: Tick, store: &AgentStore) -> Self {
        let agents = store.count();
        let horizon = store
            .records()
            .first()
            .map_or(0, |r| r.trajectory().horizon());

        let mut x = Vec::with_capacity(agents * horizon);
        let mut y = Vec::with_capacity(agents * horizon);
        let mut z = Vec::with_capacity(agents * horizon);

        for record in store.records() {
            if tick.is_first() {
                for _ in 0..horizon {
                    x.push(record.init.x);
                    y.push(record.init.y);
                    z.push(record.init.z);
                }
            } else {
                for p in record.trajectory().samples() {
                    x.push(p.x);
                    y.push(p.y);
                    z.push(p.z);
                }
            }
        }

        Self { tick, agents, horizon, x, y, z }
    }

    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agents
    }

    #[inline]
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Whole matrix for one axis, row-major.
    #[inline]
    pub fn axis(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Agent `agent`'s row for one axis.
    #[inline]
    pub fn row(&self, axis: Axis, agent: AgentId) -> &[f64] {
        let start = agent.index() * self.horizon;
        &self.axis(axis)[start..start + self.horizon]
    }

    /// Sample `k` of agent `agent`'s row as a point.
    #[inline]
    pub fn sample(&self, agent: AgentId, k: usize) -> Vec3 {
        let i = agent.index() * self.horizon + k;
        Vec3::new(self.x[i], self.y[i], self.z[i])
    }

    /// Current position (column 0) of `agent`.
    #[inline]
    pub fn position(&self, agent: AgentId) -> Vec3 {
        self.sample(agent, 0)
    }

    /// Current positions of every agent, in `AgentId` order.
    pub fn positions(&self) -> Vec<Vec3> {
        (0..self.agents as u32).map(|i| self.position(AgentId(i))).collect()
    }
}
