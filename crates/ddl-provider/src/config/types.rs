//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Engine selection and output formatting.
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Script rendering.
    #[serde(default)]
    pub script: ScriptConfig,
}

/// Engine selection and formatting options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Engine name or alias (default: "mssql").
    #[serde(default = "default_engine")]
    pub engine: String,

    /// Schema to qualify tables with. Unset uses the engine default
    /// (`dbo` for SQL Server, none elsewhere); an empty string disables
    /// qualification.
    #[serde(default)]
    pub schema: Option<String>,

    /// Column indentation inside `CREATE TABLE` (default: tab).
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Line separator inside multi-line commands (default: "\n").
    #[serde(default = "default_newline")]
    pub newline: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            schema: None,
            indent: default_indent(),
            newline: default_newline(),
        }
    }
}

/// Script rendering options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptConfig {
    /// Line placed between commands. Unset uses the engine default
    /// (`GO` for SQL Server, `;` elsewhere).
    #[serde(default)]
    pub batch_separator: Option<String>,
}

fn default_engine() -> String {
    "mssql".to_string()
}

fn default_indent() -> String {
    "\t".to_string()
}

fn default_newline() -> String {
    "\n".to_string()
}
