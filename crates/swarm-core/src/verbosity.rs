//! Diagnostic verbosity levels.
//!
//! Each gated diagnostic is tied to one exact level, so raising the level
//! switches channels rather than accumulating them:
//!
//! | Level | Emits                                                 |
//! |-------|-------------------------------------------------------|
//! | 0–1   | only always-on warnings and the final run banner      |
//! | 2     | per-tick progress and the distance-to-goal vector     |
//! | 3     | every colliding agent/obstacle pair                   |
//! | 4     | per-tick solver batch time and planning frequency     |

use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verbosity(pub u8);

impl Verbosity {
    pub const QUIET: Verbosity = Verbosity(0);
    pub const PROGRESS: Verbosity = Verbosity(2);
    pub const COLLISIONS: Verbosity = Verbosity(3);
    pub const TIMING: Verbosity = Verbosity(4);

    #[inline]
    pub fn progress(self) -> bool {
        self == Self::PROGRESS
    }

    #[inline]
    pub fn collisions(self) -> bool {
        self == Self::COLLISIONS
    }

    #[inline]
    pub fn timing(self) -> bool {
        self == Self::TIMING
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "verbosity {}", self.0)
    }
}
