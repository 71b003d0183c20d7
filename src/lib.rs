//! seq-collections: capacity-managed sequences, a sentinel-linked list,
//! an insertion-ordered map and a stable binary-heap priority queue.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small family of in-memory containers that share one capacity
//!   model and one error taxonomy, composed from a few traits rather than
//!   a deep type hierarchy.
//! - Layers:
//!   - CapacityPolicy: pure arithmetic deciding the next logical capacity
//!     from `(len, capacity)` after every structural mutation.
//!   - GrowableBuffer<T>: contiguous storage that follows a policy. Backs
//!     FixedArray, ImmutableArray, Map/Set and PriorityQueue.
//!   - Deque<T>: power-of-two ring buffer; logical index `i` lives in slot
//!     `(head + i) & (capacity - 1)`.
//!   - DoublyLinkedList<T>: slotmap arena with head/tail sentinels and a
//!     seek cursor. Backs Stack and Queue.
//!   - Map<K, V, E>/Set<T, E>: dense pair buffer searched linearly with a
//!     pluggable key equality.
//!   - PriorityQueue<T>: max-heap over a buffer, ties broken by insertion
//!     stamp.
//! - Traits: `Collection` (len, to_vec), `Sequence` (indexed and
//!   end-based access), `Resizable` (capacity, allocate).
//!
//! Constraints
//! - Single-threaded: containers own their storage and hold no shared
//!   state. The list cursor is a `Cell`, so lists are `!Sync`.
//! - Every failure is a synchronous [`Error`]; an `Err` leaves the
//!   container as it was.
//! - Capacity never drops below the policy minimum (8) and is a power of
//!   two under the squared policy.
//!
//! Cursor semantics
//! - `DoublyLinkedList` remembers the last node it visited. Indexed reads
//!   walk from whichever of the cursor, head or tail is closest, so
//!   sequential scans by index are O(1) per step.
//! - Removing a node parks the cursor on its predecessor; the cursor never
//!   refers to an unlinked node.
//! - `iter`/`iter_rev` follow links directly and leave the cursor alone.
//!
//! Notes and non-goals
//! - Map and Set lookups are O(n). Keys are only compared, never hashed,
//!   so custom equalities need no matching hash contract.
//! - `Stack::drain`, `Queue::drain` and `PriorityQueue::drain` empty the
//!   source as they iterate.
//! - No persistence, serialization or concurrent mutation.

pub mod buffer;
pub mod capacity;
pub mod deque;
pub mod error;
pub mod fixed_array;
pub mod immutable_array;
pub mod list;
pub mod map;
pub mod priority_queue;
pub mod queue;
pub mod set;
pub mod stack;
pub mod traits;

mod buffer_proptest;
mod deque_proptest;
mod list_proptest;
mod priority_queue_proptest;

// Public surface
pub use buffer::GrowableBuffer;
pub use capacity::{CapacityPolicy, GrowTrigger, Rounding, MIN_CAPACITY};
pub use deque::Deque;
pub use error::{Error, Result};
pub use fixed_array::FixedArray;
pub use immutable_array::ImmutableArray;
pub use list::DoublyLinkedList;
pub use map::{DefaultEquality, KeyEquality, Map, Pair};
pub use priority_queue::PriorityQueue;
pub use queue::Queue;
pub use set::Set;
pub use stack::Stack;
pub use traits::{Collection, Resizable, Sequence};
