use crate::logging::DEFAULT_FILTER;

/// Process-wide configuration for the Bezel toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` filter directive passed to the log subscriber.
    pub log_filter: String,
    pub profiling: ProfilingMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: DEFAULT_FILTER.to_string(),
            profiling: ProfilingMode::Off,
        }
    }
}

impl Config {
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_profiling(mut self, profiling: ProfilingMode) -> Self {
        self.profiling = profiling;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfilingMode {
    /// Profiling scopes are compiled in but not recorded
    #[default]
    Off,
    /// Scopes are recorded and served to 'puffin_viewer' over HTTP
    PuffinHttp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.profiling, ProfilingMode::Off);
    }

    #[test]
    fn test_builder_methods() {
        let config = Config::default()
            .with_log_filter("bezel_curve=trace")
            .with_profiling(ProfilingMode::PuffinHttp);
        assert_eq!(config.log_filter, "bezel_curve=trace");
        assert_eq!(config.profiling, ProfilingMode::PuffinHttp);
    }
}
