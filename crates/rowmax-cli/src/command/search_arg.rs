use std::time::Duration;

use rowmax_search::{
    CutoffKind, SearchConfig,
    config::{DEFAULT_DEPTH_LIMIT, DEFAULT_RECURSION_LIMIT},
};

use crate::schema::record::SearchSettings;

/// Search options shared by every command that runs the engine.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SearchArg {
    /// When a node stops being expanded (`margin` or `horizon`)
    #[arg(long, default_value = "margin")]
    cutoff: CutoffKind,
    /// Ply limit used by the horizon cutoff
    #[arg(long, default_value_t = DEFAULT_DEPTH_LIMIT)]
    depth_limit: usize,
    /// Alpha bound each candidate search starts with
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    alpha: i32,
    /// Beta bound each candidate search starts with
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    beta: i32,
    /// Start each candidate search from the unbounded window instead
    #[arg(long, conflicts_with_all = ["alpha", "beta"])]
    full_window: bool,
    /// Evaluate nodes at this depth as tied instead of expanding them
    #[arg(long, default_value_t = DEFAULT_RECURSION_LIMIT)]
    recursion_limit: usize,
    /// Time budget for each computer move, in milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,
}

impl Default for SearchArg {
    fn default() -> Self {
        let config = SearchConfig::default();
        Self {
            cutoff: CutoffKind::default(),
            depth_limit: config.depth_limit,
            alpha: config.initial_alpha,
            beta: config.initial_beta,
            full_window: false,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            time_limit_ms: None,
        }
    }
}

impl SearchArg {
    pub(crate) fn to_settings(&self) -> SearchSettings {
        let config = SearchConfig {
            depth_limit: self.depth_limit,
            initial_alpha: self.alpha,
            initial_beta: self.beta,
            recursion_limit: Some(self.recursion_limit),
            time_limit: self.time_limit_ms.map(Duration::from_millis),
        };
        let config = if self.full_window {
            config.full_window()
        } else {
            config
        };
        SearchSettings {
            cutoff: self.cutoff,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rowmax_search::{NEG_INFINITY, POS_INFINITY};

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[clap(flatten)]
        search: SearchArg,
    }

    #[test]
    fn test_defaults_match_search_config() {
        let cli = TestCli::parse_from(["rowmax"]);
        let settings = cli.search.to_settings();
        assert_eq!(settings.cutoff, CutoffKind::Margin);
        assert_eq!(settings.config, SearchConfig::default());
        assert_eq!(settings.config.recursion_limit, Some(DEFAULT_RECURSION_LIMIT));
        assert_eq!(SearchArg::default().to_settings(), settings);
    }

    #[test]
    fn test_window_and_limits() {
        let cli = TestCli::parse_from([
            "rowmax",
            "--cutoff",
            "horizon",
            "--depth-limit",
            "4",
            "--alpha",
            "-2",
            "--beta",
            "5",
            "--time-limit-ms",
            "150",
            "--recursion-limit",
            "64",
        ]);
        let settings = cli.search.to_settings();
        assert_eq!(settings.cutoff, CutoffKind::Horizon);
        assert_eq!(settings.config.depth_limit, 4);
        assert_eq!(settings.config.initial_alpha, -2);
        assert_eq!(settings.config.initial_beta, 5);
        assert_eq!(settings.config.time_limit, Some(Duration::from_millis(150)));
        assert_eq!(settings.config.recursion_limit, Some(64));
    }

    #[test]
    fn test_full_window_flag() {
        let cli = TestCli::parse_from(["rowmax", "--full-window"]);
        let config = cli.search.to_settings().config;
        assert_eq!(config.initial_alpha, NEG_INFINITY);
        assert_eq!(config.initial_beta, POS_INFINITY);

        assert!(TestCli::try_parse_from(["rowmax", "--full-window", "--alpha", "1"]).is_err());
    }
}
