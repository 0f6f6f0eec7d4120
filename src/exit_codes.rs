//! Exit code constants for the promptree CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable files, invalid config)
//! - 2: Tree operation rejected (missing node, bad target, cycle, protected root)
//! - 3: Invalid tree document (malformed JSON or schema mismatch)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, I/O failure, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// A structural tree operation was rejected.
pub const TREE_FAILURE: i32 = 2;

/// A tree document could not be parsed.
pub const FORMAT_FAILURE: i32 = 3;
