use crate::utils::get_environment;

pub const DEFAULT_PROMPT: &str = "$ ";
pub const DEFAULT_HISTORY: &str = "./history";
pub const DEFAULT_FLAGS: &[&str] = &["help", "version", "verbose"];

/// Settings of the interactive front-end, read from `ARGSCAN_*` variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    /// `None` turns history off.
    pub history: Option<String>,
    pub flags: Vec<String>,
}

impl Default for Config {
    fn default () -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            history: Some(DEFAULT_HISTORY.to_string()),
            flags: DEFAULT_FLAGS.iter().map(|flag| flag.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn from_env () -> Self {
        Self::from_lookup(get_environment)
    }

    pub fn from_lookup <F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>
    {
        let mut config = Self::default();

        if let Some(prompt) = lookup("ARGSCAN_PROMPT") {
            config.prompt = prompt;
        }

        if let Some(history) = lookup("ARGSCAN_HISTORY") {
            config.history = if history.is_empty() { None } else { Some(history) };
        }

        if let Some(flags) = lookup("ARGSCAN_FLAGS") {
            config.flags = flags
                .split(',')
                .map(|flag| flag.trim().trim_start_matches('-'))
                .filter(|flag| !flag.is_empty())
                .map(str::to_string)
                .collect();
        }

        config
    }
}
