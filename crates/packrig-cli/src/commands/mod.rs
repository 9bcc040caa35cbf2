//! Command implementations.
//!
//! Each command exposes an `execute` function taking its parsed arguments.

pub mod aliases;
pub mod apply;
pub mod check;
pub(crate) mod utils;

pub use aliases::execute as aliases_execute;
pub use apply::execute as apply_execute;
pub use check::execute as check_execute;
