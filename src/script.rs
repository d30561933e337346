use std::path::{Path, PathBuf};

/// File name of the hook script shipped alongside fishook.
pub const SCRIPT_NAME: &str = "fishook.sh";

/// Directory under `<prefix>/share` that holds the script.
const DATA_DIR_NAME: &str = "fishook";

/// Where the install layout puts `fishook.sh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptLocation {
    /// Same directory as the running executable.
    CoLocated,
    /// `<prefix>/share/fishook/fishook.sh`.
    InstalledData,
}

impl ScriptLocation {
    /// The layout this binary was built for (`installed-data` feature).
    pub const BUILD: ScriptLocation = if cfg!(feature = "installed-data") {
        ScriptLocation::InstalledData
    } else {
        ScriptLocation::CoLocated
    };

    /// Compute the script path for an executable at `exe`.
    ///
    /// `prefix` pins the installed-data root; when `None` it is inferred as
    /// the parent of the directory holding the executable
    /// (`<prefix>/bin/fishook` → `<prefix>`). Ignored for `CoLocated`.
    pub fn resolve_from(self, exe: &Path, prefix: Option<&Path>) -> PathBuf {
        let exe_dir = exe.parent().unwrap_or(Path::new(""));
        match self {
            ScriptLocation::CoLocated => exe_dir.join(SCRIPT_NAME),
            ScriptLocation::InstalledData => {
                let root = prefix.unwrap_or_else(|| exe_dir.parent().unwrap_or(exe_dir));
                data_path(root)
            }
        }
    }
}

fn data_path(root: &Path) -> PathBuf {
    root.join("share").join(DATA_DIR_NAME).join(SCRIPT_NAME)
}

/// Resolve the script path for this build. Never fails and never checks
/// that the file exists; a missing script shows up when the interpreter runs.
pub fn resolve() -> PathBuf {
    let location = ScriptLocation::BUILD;
    let prefix = option_env!("FISHOOK_PREFIX").map(Path::new);

    if let (ScriptLocation::InstalledData, Some(root)) = (location, prefix) {
        return data_path(root);
    }

    match std::env::current_exe() {
        Ok(exe) => {
            // Entry points are often symlinks to the real binary.
            let exe = exe.canonicalize().unwrap_or(exe);
            location.resolve_from(&exe, prefix)
        }
        Err(e) => {
            tracing::warn!(error = %e, "cannot locate current executable");
            PathBuf::from(SCRIPT_NAME)
        }
    }
}
