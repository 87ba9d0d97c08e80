//! Command implementations for the prism CLI.
//!
//! - [`build`] - emit every profile
//! - [`profiles`] - list the resolved profiles

pub mod build;
pub mod profiles;
pub(crate) mod utils;

pub use build::execute as build_execute;
pub use profiles::execute as profiles_execute;
pub use utils::resolve_cwd;
