use std::path::{Path, PathBuf};

/// Environment variable naming the KDL config file.
pub const CONFIG_ENV: &str = "FISHOOK_CONFIG";

/// Optional overrides loaded from a KDL file.
///
/// ```kdl
/// interpreter "/usr/local/bin/bash"
/// script "/opt/fishook/fishook.sh"
/// ```
#[derive(Debug, Default, PartialEq)]
pub struct Config {
    /// Interpreter used when `$BASH` is not set.
    pub interpreter: Option<String>,
    /// Replaces the install-layout script location entirely.
    pub script: Option<PathBuf>,
}

/// Errors that can occur when loading or parsing a config file.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    #[diagnostic(help("unset FISHOOK_CONFIG or point it at an existing file"))]
    NotFound(PathBuf),
    #[error("failed to read config: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("invalid KDL syntax: {0}")]
    ParseError(String),
    #[error("invalid config: {0}")]
    ValidationError(String),
}

impl Config {
    /// Load the config named by `$FISHOOK_CONFIG`, or defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Config::default()),
        }
    }

    /// Load a config from a KDL file at the given path.
    ///
    /// A relative `script` is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::ReadError(e)
            }
        })?;
        let mut config = Self::parse(&content)?;
        if let (Some(script), Some(dir)) = (&config.script, path.parent()) {
            if script.is_relative() {
                config.script = Some(dir.join(script));
            }
        }
        Ok(config)
    }

    /// Parse a KDL string into a Config. Unknown nodes are ignored.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let doc: kdl::KdlDocument = content
            .parse()
            .map_err(|e: kdl::KdlError| ConfigError::ParseError(e.to_string()))?;
        Ok(Config {
            interpreter: single_string(&doc, "interpreter")?,
            script: single_string(&doc, "script")?.map(PathBuf::from),
        })
    }
}

/// Read the one positional string argument of a top-level node.
///
/// Missing node → `None`. Repeated node, wrong arity, or a non-string
/// value → `ValidationError`.
fn single_string(
    doc: &kdl::KdlDocument,
    node_name: &str,
) -> Result<Option<String>, ConfigError> {
    let mut nodes = doc
        .nodes()
        .iter()
        .filter(|n| n.name().value() == node_name);
    let Some(node) = nodes.next() else {
        return Ok(None);
    };
    if nodes.next().is_some() {
        return Err(ConfigError::ValidationError(format!(
            "'{node_name}' may only be set once"
        )));
    }

    let values: Vec<&kdl::KdlEntry> = node.entries().iter().collect();
    match values.as_slice() {
        [entry] if entry.name().is_none() => entry
            .value()
            .as_string()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| {
                ConfigError::ValidationError(format!("'{node_name}' expects a string"))
            }),
        _ => Err(ConfigError::ValidationError(format!(
            "'{node_name}' expects exactly one string argument"
        ))),
    }
}
