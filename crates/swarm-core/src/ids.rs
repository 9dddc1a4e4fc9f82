//! Typed indices for agents and obstacles.
//!
//! Both wrap the position of the item in its owning `Vec` (the record arena
//! or the scenario's obstacle list) and print as `<label> <n>` in logs.

use std::fmt;

macro_rules! typed_index {
    ($(#[$attr:meta])* $name:ident, $label:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            /// Slot in the owning `Vec`.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " {}"), self.0)
            }
        }
    };
}

typed_index! {
    /// Badge of a drone; equals its slot in the record arena.
    AgentId, "agent"
}

typed_index! {
    /// Position of a static obstacle in the scenario's obstacle list.
    ObstacleId, "obstacle"
}
