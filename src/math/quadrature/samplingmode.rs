use std::fmt;

use crate::math::quadrature::quadratureerror::QuadratureError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingMode {
    Left,
    Right,
    Center
}

impl SamplingMode {
    /// Exact match over the three keywords. A keyword that merely contains
    /// one of them (e.g. "left right") is rejected.
    pub fn parse(mode_str: &str) -> Result<SamplingMode, QuadratureError> {
        match mode_str {
            "left" => Ok(SamplingMode::Left),
            "right" => Ok(SamplingMode::Right),
            "center" => Ok(SamplingMode::Center),
            _ => Err(QuadratureError::UnknownSamplingMode(mode_str.to_owned()))
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            SamplingMode::Left => "left",
            SamplingMode::Right => "right",
            SamplingMode::Center => "center"
        }
    }
}

impl fmt::Display for SamplingMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_keywords_parse() {
        assert_eq!(SamplingMode::parse("left").unwrap(), SamplingMode::Left);
        assert_eq!(SamplingMode::parse("right").unwrap(), SamplingMode::Right);
        assert_eq!(SamplingMode::parse("center").unwrap(), SamplingMode::Center);
    }

    #[test]
    fn unrecognized_keywords_are_rejected() {
        assert!(SamplingMode::parse("midpoint").is_err());
        assert!(SamplingMode::parse("Centre").is_err());
    }

    #[test]
    fn keyword_containing_a_mode_is_rejected() {
        assert!(SamplingMode::parse("left right center").is_err());
        assert!(SamplingMode::parse("lefty").is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for mode in [SamplingMode::Left, SamplingMode::Right, SamplingMode::Center] {
            assert_eq!(SamplingMode::parse(mode.keyword()).unwrap(), mode);
        }
    }
}
