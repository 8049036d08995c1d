/// Value-tree rendering helpers.
pub mod print;
/// Schema inspection command.
pub mod schema;
/// Shared argument parsing helpers.
pub mod util;
/// Value-tree build and assignment command.
pub mod value;
