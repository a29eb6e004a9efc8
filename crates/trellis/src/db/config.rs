use serde::Deserialize;

/// Engine settings.
///
/// Deserializes with every field optional, falling back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Deepest nesting a resolution may reach, the root call counting as 1.
    /// Guards against cyclic schemas.
    pub max_depth: usize,

    /// How many rows of one nextpage link are resolved at the same time.
    /// With `1`, nested calls run strictly in row order.
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 32,
            concurrency: 1,
        }
    }
}
