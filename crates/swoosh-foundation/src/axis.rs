//! Swipe and move axis resolution.
//!
//! Axes are configured either with a literal token (`x`, `x+`, `x-`, `y`,
//! `y+`, `y-`) or an explicit vector. Resolution is permissive: anything
//! unrecognised, or no configuration at all, yields the caller's default.

use std::borrow::Cow;
use swoosh_ui_graphics::Vector2;

/// Axis configuration value as supplied by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisConfig {
    /// Literal direction token such as `"x-"`.
    Token(Cow<'static, str>),
    /// Explicit direction. Passed through as-is; the caller keeps it unit length.
    Vector(Vector2),
}

impl AxisConfig {
    pub fn token(token: impl Into<Cow<'static, str>>) -> Self {
        AxisConfig::Token(token.into())
    }

    /// Resolves this configuration, falling back to `default` for
    /// unrecognised tokens.
    pub fn resolve(&self, default: Vector2) -> Vector2 {
        match self {
            AxisConfig::Token(token) => parse_axis_token(token).unwrap_or_else(|| {
                log::debug!("unrecognised axis token {token:?}, using {default:?}");
                default
            }),
            AxisConfig::Vector(vector) => *vector,
        }
    }
}

impl From<&'static str> for AxisConfig {
    fn from(token: &'static str) -> Self {
        AxisConfig::Token(Cow::Borrowed(token))
    }
}

impl From<String> for AxisConfig {
    fn from(token: String) -> Self {
        AxisConfig::Token(Cow::Owned(token))
    }
}

impl From<Vector2> for AxisConfig {
    fn from(vector: Vector2) -> Self {
        AxisConfig::Vector(vector)
    }
}

impl From<(f32, f32)> for AxisConfig {
    fn from(vector: (f32, f32)) -> Self {
        AxisConfig::Vector(vector.into())
    }
}

/// Maps a literal token to its axis-aligned unit vector.
///
/// A bare axis name means the positive direction.
pub fn parse_axis_token(token: &str) -> Option<Vector2> {
    match token.trim() {
        "x" | "x+" | "X" | "X+" => Some(Vector2::POSITIVE_X),
        "x-" | "X-" => Some(Vector2::NEGATIVE_X),
        "y" | "y+" | "Y" | "Y+" => Some(Vector2::POSITIVE_Y),
        "y-" | "Y-" => Some(Vector2::NEGATIVE_Y),
        _ => None,
    }
}

/// Resolves an optional axis configuration against a default.
pub fn resolve_axis(config: Option<&AxisConfig>, default: Vector2) -> Vector2 {
    config.map_or(default, |config| config.resolve(default))
}
