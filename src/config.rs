use crate::catalog::SamplerCatalog;
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Mode flag value editors use for bypassed nodes.
pub const BYPASS_MODE: i64 = 4;

/// Node type of the editor's reroute dot.
pub const REROUTE_TYPE: &str = "Reroute";

/// Control-widget values that sit in the positional widget list but feed no input.
pub const CONTROL_WIDGET_VALUES: [&str; 4] = ["randomize", "fixed", "increment", "decrement"];

/// How a pass-through node picks the input to follow upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSelection {
    /// The first input that carries a link, whatever its type.
    #[default]
    FirstLinked,
    /// The first linked input whose declared type equals the type carried by
    /// the outgoing link, falling back to [`InputSelection::FirstLinked`].
    TypeMatched,
}

/// Tunable behavior of the resolver. Defaults match the editor's conventions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverOptions {
    pub passthrough_types: Vec<String>,
    pub disabled_modes: Vec<i64>,
    pub widget_sentinels: Vec<String>,
    /// Drop list-valued entries from the positional widget values.
    pub skip_list_widget_values: bool,
    /// Drop inputs whose value is a mapping holding a list.
    pub discard_nested_list_values: bool,
    pub input_selection: InputSelection,
    /// Overrides the built-in sampler/scheduler catalog.
    pub catalog: Option<SamplerCatalog>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            passthrough_types: vec![REROUTE_TYPE.to_string()],
            disabled_modes: vec![BYPASS_MODE],
            widget_sentinels: CONTROL_WIDGET_VALUES.iter().map(|s| s.to_string()).collect(),
            skip_list_widget_values: true,
            discard_nested_list_values: true,
            input_selection: InputSelection::FirstLinked,
            catalog: None,
        }
    }
}

impl ResolverOptions {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Options reproducing the first release: list-valued widget entries and
    /// list-holding mappings pass through untouched.
    pub fn legacy() -> Self {
        Self {
            skip_list_widget_values: false,
            discard_nested_list_values: false,
            ..Self::default()
        }
    }
}
