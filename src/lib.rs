//! Treap - a randomized self-balancing ordered-key container.
//!
//! # Quick Start
//!
//! ```
//! use treap::Treap;
//!
//! // Create an empty treap (use `Treap::with_seed` for reproducible runs)
//! let mut treap = Treap::new();
//!
//! // Insert some keys; duplicates are silent no-ops
//! for k in [3, 1, 4, 1, 5, 9] {
//!     treap.insert(k);
//! }
//! assert_eq!(treap.len(), 5);
//!
//! // Membership and predecessor-style lookup
//! assert!(treap.exist(&4));
//! assert_eq!(treap.search_max_le(&8), Some(&5));
//!
//! // Deleting an absent key is also a no-op
//! treap.delete(&4);
//! assert!(!treap.exist(&4));
//! ```

mod dump;
pub mod treap;

pub use treap::{Iter, Treap};
