//! Search engine configuration and difficulty presets

use std::time::Duration;

use crate::error::{Error, Result};

/// Depth and time budget for one engine search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiConfig {
    /// Ply limit, at least 1
    pub max_depth: u32,
    /// Soft wall-clock budget per move
    pub time_limit: Duration,
}

impl AiConfig {
    /// Validated configuration; `time_limit_secs` must be finite and positive.
    pub fn new(max_depth: u32, time_limit_secs: f64) -> Result<Self> {
        Ok(Self {
            max_depth: validate_depth(max_depth)?,
            time_limit: validate_time_limit(time_limit_secs)?,
        })
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            time_limit: Duration::from_secs(2),
        }
    }
}

pub(crate) fn validate_depth(depth: u32) -> Result<u32> {
    if depth == 0 {
        return Err(Error::InvalidDepth { depth });
    }
    Ok(depth)
}

pub(crate) fn validate_time_limit(seconds: f64) -> Result<Duration> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(Error::InvalidTimeLimit { seconds });
    }
    Ok(Duration::from_secs_f64(seconds))
}

/// Difficulty presets 1..=5: depth equals the level, 0.8 s per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Seconds of search budget per level
    const SECONDS_PER_LEVEL: f64 = 0.8;

    pub fn new(level: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&level) {
            return Err(Error::InvalidDifficulty {
                level,
                max: Self::MAX,
            });
        }
        Ok(Self(level))
    }

    #[inline]
    pub fn level(self) -> u8 {
        self.0
    }

    /// Next level, wrapping from the hardest back to the easiest
    pub fn next(self) -> Self {
        if self.0 >= Self::MAX {
            Self(Self::MIN)
        } else {
            Self(self.0 + 1)
        }
    }

    pub fn config(self) -> AiConfig {
        AiConfig {
            max_depth: u32::from(self.0),
            time_limit: Duration::from_secs_f64(f64::from(self.0) * Self::SECONDS_PER_LEVEL),
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        assert!(AiConfig::new(3, 1.5).is_ok());
        assert_eq!(AiConfig::new(0, 1.0), Err(Error::InvalidDepth { depth: 0 }));
        assert!(matches!(
            AiConfig::new(2, 0.0),
            Err(Error::InvalidTimeLimit { .. })
        ));
        assert!(AiConfig::new(2, -1.0).is_err());
        assert!(AiConfig::new(2, f64::NAN).is_err());
        assert!(AiConfig::new(2, f64::INFINITY).is_err());
    }

    #[test]
    fn test_default_config() {
        let config = AiConfig::default();
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.time_limit, Duration::from_secs(2));
    }

    #[test]
    fn test_difficulty_cycle() {
        let mut level = Difficulty::default();
        assert_eq!(level.level(), 2);
        let seen: Vec<u8> = (0..5)
            .map(|_| {
                level = level.next();
                level.level()
            })
            .collect();
        assert_eq!(seen, vec![3, 4, 5, 1, 2]);
    }

    #[test]
    fn test_difficulty_config() {
        let config = Difficulty::new(5).unwrap().config();
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.time_limit, Duration::from_secs_f64(5.0 * 0.8));
        assert!(Difficulty::new(0).is_err());
        assert!(Difficulty::new(6).is_err());
    }
}
