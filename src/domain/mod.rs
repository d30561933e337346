pub mod hook_name;

pub use hook_name::{HookName, UnknownHook};
