//! In-process hook dispatch

mod hook_table;

pub use hook_table::HookTable;
