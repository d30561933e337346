pub mod dispatch;

use std::ffi::OsString;

use crate::domain::HookName;

/// How the dispatcher was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// `fishook <args...>`: arguments forwarded as-is.
    Generic,
    /// A hook entrypoint: the hook token goes in front of the arguments.
    Hook(HookName),
}

impl Entry {
    /// Classify the program name the binary was started as.
    pub fn from_program(program: &str) -> Self {
        HookName::from_entrypoint(program).map_or(Entry::Generic, Entry::Hook)
    }

    /// Build the argument list handed to the script, preserving order.
    pub fn script_args<I>(self, args: I) -> Vec<OsString>
    where
        I: IntoIterator<Item = OsString>,
    {
        let token = match self {
            Entry::Generic => None,
            Entry::Hook(hook) => Some(OsString::from(hook.as_str())),
        };
        token.into_iter().chain(args).collect()
    }
}
