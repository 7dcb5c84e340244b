//! Newtype identifiers for type-safe numbering.
//!
//! Menu items, tables, and orders are all numbered with small positive
//! integers; the newtypes keep them from being mixed up, e.g. passing a
//! table number where an item id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype number structs.
macro_rules! define_number {
    ($name:ident) => {
        /// A numeric identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create from a raw number.
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Get the raw number.
            pub const fn value(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }
    };
}

define_number!(ItemId);
define_number!(TableNumber);
define_number!(OrderNumber);

impl OrderNumber {
    /// Generate a display order number in 1..=999.
    ///
    /// Mixes the clock's sub-second nanos with an atomic counter, the same
    /// trick the storefront id generator uses; good enough for a per-session
    /// ticket number, which only needs to look distinct to staff.
    pub fn generate() -> Self {
        use std::sync::atomic::{AtomicU32, Ordering};

        static COUNTER: AtomicU32 = AtomicU32::new(0);

        let nanos = chrono::Utc::now().timestamp_subsec_nanos();
        let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
        let mixed = nanos ^ counter.wrapping_mul(0x9e37_79b9);

        Self(mixed % 1000 + 1)
    }
}
