use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    cutoff::{CutoffRule, DecisiveMargin, Horizon},
    minimax::{NEG_INFINITY, POS_INFINITY},
};

/// Default ply limit.
pub const DEFAULT_DEPTH_LIMIT: usize = 10;

/// Default depth at which recursion stops regardless of the cutoff rule.
///
/// Tied boards are expanded until they fill, so without this limit the call
/// stack grows with the cell count of the board. Boards of up to 45x45 never
/// reach it.
pub const DEFAULT_RECURSION_LIMIT: usize = 2048;

/// Tunable parameters of a search.
///
/// The defaults reproduce the reference game: a depth limit of 10 plies, an
/// initial window of `0..0`, and no time limit. Recursion stops at
/// [`DEFAULT_RECURSION_LIMIT`] plies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Ply count at which the [`Horizon`] rule evaluates statically.
    ///
    /// The default [`DecisiveMargin`] rule never stops on depth alone.
    pub depth_limit: usize,
    /// Alpha bound each candidate search starts with.
    pub initial_alpha: i32,
    /// Beta bound each candidate search starts with.
    pub initial_beta: i32,
    /// Unconditional recursion cutoff.
    ///
    /// A node at this depth that the cutoff rule would still expand evaluates
    /// to [`TIED_VALUE`](crate::TIED_VALUE) instead. `None` removes the limit
    /// and lets the stack grow with the board.
    pub recursion_limit: Option<usize>,
    /// Wall-clock budget for one move selection. Off by default.
    pub time_limit: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limit: DEFAULT_DEPTH_LIMIT,
            initial_alpha: 0,
            initial_beta: 0,
            recursion_limit: Some(DEFAULT_RECURSION_LIMIT),
            time_limit: None,
        }
    }
}

impl SearchConfig {
    /// Returns this configuration with the textbook `(-∞, +∞)` initial window.
    #[must_use]
    pub fn full_window(self) -> Self {
        Self {
            initial_alpha: NEG_INFINITY,
            initial_beta: POS_INFINITY,
            ..self
        }
    }
}

/// Selects a [`CutoffRule`] by name (`margin` or `horizon`).
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
pub enum CutoffKind {
    /// Stop as soon as the run scores differ ([`DecisiveMargin`]).
    #[default]
    Margin,
    /// Stop on a full board or at the depth limit ([`Horizon`]).
    Horizon,
}

impl CutoffKind {
    #[must_use]
    pub fn rule(self) -> Box<dyn CutoffRule> {
        match self {
            CutoffKind::Margin => Box::new(DecisiveMargin),
            CutoffKind::Horizon => Box::new(Horizon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth_limit, 10);
        assert_eq!((config.initial_alpha, config.initial_beta), (0, 0));
        assert_eq!(config.recursion_limit, Some(DEFAULT_RECURSION_LIMIT));
        assert!(config.time_limit.is_none());
    }

    #[test]
    fn test_full_window_keeps_other_fields() {
        let config = SearchConfig {
            depth_limit: 3,
            ..SearchConfig::default()
        }
        .full_window();
        assert_eq!(config.depth_limit, 3);
        assert_eq!(config.initial_alpha, i32::MIN);
        assert_eq!(config.initial_beta, i32::MAX);
    }

    #[test]
    fn test_cutoff_kind_from_str() {
        assert_eq!("margin".parse::<CutoffKind>().unwrap(), CutoffKind::Margin);
        assert_eq!("Horizon".parse::<CutoffKind>().unwrap(), CutoffKind::Horizon);
        assert!("depth".parse::<CutoffKind>().is_err());
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = SearchConfig {
            time_limit: Some(Duration::from_millis(250)),
            recursion_limit: Some(12),
            ..SearchConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
