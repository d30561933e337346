use std::str::FromStr;

/// A git hook that fishook can be invoked as.
///
/// The token returned by [`HookName::as_str`] is prepended to the forwarded
/// arguments so `fishook.sh` can tell which hook it is running for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookName {
    ApplypatchMsg,
    PreApplypatch,
    PostApplypatch,
    PreCommit,
    PreMergeCommit,
    PrepareCommitMsg,
    CommitMsg,
    PostCommit,
    PreRebase,
    PostCheckout,
    PostMerge,
    PostRewrite,
    PrePush,
    PreAutoGc,
    PreReceive,
    Update,
    PostReceive,
    PostUpdate,
    PushToCheckout,
    ProcReceive,
    SendemailValidate,
    FsmonitorWatchman,
}

/// Prefix accepted in front of a hook name, e.g. `fishook-pre-commit`.
const ENTRYPOINT_PREFIX: &str = "fishook-";

impl HookName {
    /// Every supported hook, in the order git documents them.
    pub const ALL: [HookName; 22] = [
        HookName::ApplypatchMsg,
        HookName::PreApplypatch,
        HookName::PostApplypatch,
        HookName::PreCommit,
        HookName::PreMergeCommit,
        HookName::PrepareCommitMsg,
        HookName::CommitMsg,
        HookName::PostCommit,
        HookName::PreRebase,
        HookName::PostCheckout,
        HookName::PostMerge,
        HookName::PostRewrite,
        HookName::PrePush,
        HookName::PreAutoGc,
        HookName::PreReceive,
        HookName::Update,
        HookName::PostReceive,
        HookName::PostUpdate,
        HookName::PushToCheckout,
        HookName::ProcReceive,
        HookName::SendemailValidate,
        HookName::FsmonitorWatchman,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HookName::ApplypatchMsg => "applypatch-msg",
            HookName::PreApplypatch => "pre-applypatch",
            HookName::PostApplypatch => "post-applypatch",
            HookName::PreCommit => "pre-commit",
            HookName::PreMergeCommit => "pre-merge-commit",
            HookName::PrepareCommitMsg => "prepare-commit-msg",
            HookName::CommitMsg => "commit-msg",
            HookName::PostCommit => "post-commit",
            HookName::PreRebase => "pre-rebase",
            HookName::PostCheckout => "post-checkout",
            HookName::PostMerge => "post-merge",
            HookName::PostRewrite => "post-rewrite",
            HookName::PrePush => "pre-push",
            HookName::PreAutoGc => "pre-auto-gc",
            HookName::PreReceive => "pre-receive",
            HookName::Update => "update",
            HookName::PostReceive => "post-receive",
            HookName::PostUpdate => "post-update",
            HookName::PushToCheckout => "push-to-checkout",
            HookName::ProcReceive => "proc-receive",
            HookName::SendemailValidate => "sendemail-validate",
            HookName::FsmonitorWatchman => "fsmonitor-watchman",
        }
    }

    /// Map the name the binary was run as to a hook.
    ///
    /// Takes the basename, drops a trailing `.exe` and an optional `fishook-`
    /// prefix, then looks the rest up in [`HookName::ALL`].
    /// `/usr/bin/fishook-pre-commit` → `PreCommit`, `fishook` → `None`.
    pub fn from_entrypoint(program: &str) -> Option<Self> {
        let basename = program.rsplit(['/', '\\']).next().unwrap_or(program);
        let stem = basename.strip_suffix(".exe").unwrap_or(basename);
        let name = stem.strip_prefix(ENTRYPOINT_PREFIX).unwrap_or(stem);
        name.parse().ok()
    }
}

/// Returned when a string is not one of the supported hook names.
#[derive(Debug, thiserror::Error)]
#[error("unknown git hook: {0}")]
pub struct UnknownHook(pub String);

impl FromStr for HookName {
    type Err = UnknownHook;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookName::ALL
            .into_iter()
            .find(|hook| hook.as_str() == s)
            .ok_or_else(|| UnknownHook(s.to_string()))
    }
}

impl std::fmt::Display for HookName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
