//! Centralized limits and thresholds for type translation.
//!
//! The translator recurses through a type graph that is owned by the external
//! type-checking engine and may be cyclic. Type literals are guarded by the
//! translator's visited set, but other edges (for example type arguments of a
//! reference that eventually mention the reference again) are not. These limits
//! bound that recursion so a malformed graph degrades to `?` instead of
//! overflowing the stack.

/// Maximum nesting depth of a single `translate` call.
///
/// Each nested type (union member, type argument, record field, parameter,
/// return type) adds one level. Real-world annotations rarely exceed a depth
/// of 20; anything near this limit is almost certainly a cycle.
///
/// # TypeScript example
///
/// ```typescript
/// // A reference whose type arguments loop back onto itself is only
/// // reachable through a malformed engine graph, never through source:
/// type Box<T> = { value: T };
/// let x: Box<Box<Box<Box</* ... */>>>>;
/// ```
pub const MAX_TRANSLATION_DEPTH: u32 = 128;

/// Initial capacity reserved for the visited type-literal set.
pub const SEEN_TYPE_LITERALS_CAPACITY: usize = 16;
