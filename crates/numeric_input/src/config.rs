//! Guard configuration and its construction from host element attributes.

use crate::error::ConfigError;
use crate::number::MAX_FRACTION_DIGITS;

/// Bounds and precision a guard enforces.
///
/// Every field is optional. An unset bound is not checked; an unset scale
/// normalizes to whole numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NumericInputConfig {
    /// Inclusive lower bound.
    pub min: Option<f64>,
    /// Inclusive upper bound.
    pub max: Option<f64>,
    /// Fraction digits kept when the field is normalized.
    pub scale: Option<u8>,
    /// Revert keystrokes that leave non-empty text without a numeric prefix.
    ///
    /// Off by default: such text compares false against both bounds and is
    /// left alone, which is what lets a lone `-` or `.` be typed.
    pub revert_unparseable: bool,
}

impl NumericInputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_range(self, min: f64, max: f64) -> Self {
        self.with_min(min).with_max(max)
    }

    pub fn with_scale(mut self, scale: u8) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_revert_unparseable(mut self, revert: bool) -> Self {
        self.revert_unparseable = revert;
        self
    }

    /// Fraction digits used for normalization.
    pub fn fraction_digits(&self) -> usize {
        usize::from(self.scale.unwrap_or(0)).min(MAX_FRACTION_DIGITS)
    }

    /// Whether `value` violates a configured bound.
    ///
    /// NaN violates nothing, since every comparison with it is false.
    pub fn is_out_of_range(&self, value: f64) -> bool {
        self.min.is_some_and(|min| value < min) || self.max.is_some_and(|max| value > max)
    }

    /// Check the configuration for contradictions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (attr, bound) in [("min", self.min), ("max", self.max)] {
            if let Some(v) = bound.filter(|v| !v.is_finite()) {
                return Err(ConfigError::InvalidNumber {
                    attr,
                    value: v.to_string(),
                });
            }
        }
        if let Some(scale) = self.scale
            && usize::from(scale) > MAX_FRACTION_DIGITS
        {
            return Err(ConfigError::ScaleOutOfRange {
                scale: u64::from(scale),
            });
        }
        if let (Some(min), Some(max)) = (self.min, self.max)
            && min > max
        {
            return Err(ConfigError::InvertedRange { min, max });
        }
        Ok(())
    }

    /// Build a configuration from a host element's attribute list.
    ///
    /// Reads `min`, `max` and `scale` (names are case-insensitive, values
    /// trimmed, empty values count as unset) and the boolean
    /// `revert-unparseable` attribute.
    ///
    /// ```
    /// use numeric_input::NumericInputConfig;
    ///
    /// let attrs = vec![
    ///     ("min".to_string(), Some("0".to_string())),
    ///     ("MAX".to_string(), Some(" 100 ".to_string())),
    ///     ("scale".to_string(), Some("2".to_string())),
    /// ];
    /// let config = NumericInputConfig::from_attributes(&attrs).unwrap();
    /// assert_eq!(config, NumericInputConfig::new().with_range(0.0, 100.0).with_scale(2));
    /// ```
    pub fn from_attributes(attributes: &[(String, Option<String>)]) -> Result<Self, ConfigError> {
        let config = Self {
            min: parse_bound(attributes, "min")?,
            max: parse_bound(attributes, "max")?,
            scale: parse_scale(attributes)?,
            revert_unparseable: has_attr(attributes, "revert-unparseable"),
        };
        config.validate()?;
        Ok(config)
    }
}

fn attr<'a>(attributes: &'a [(String, Option<String>)], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .and_then(|(_, v)| v.as_deref())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn has_attr(attributes: &[(String, Option<String>)], name: &str) -> bool {
    attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
}

fn parse_bound(
    attributes: &[(String, Option<String>)],
    name: &'static str,
) -> Result<Option<f64>, ConfigError> {
    let Some(raw) = attr(attributes, name) else {
        return Ok(None);
    };
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| ConfigError::InvalidNumber {
            attr: name,
            value: raw.to_string(),
        })
}

fn parse_scale(attributes: &[(String, Option<String>)]) -> Result<Option<u8>, ConfigError> {
    let Some(raw) = attr(attributes, "scale") else {
        return Ok(None);
    };
    let scale = raw
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidScale {
            value: raw.to_string(),
        })?;
    u8::try_from(scale)
        .ok()
        .filter(|s| usize::from(*s) <= MAX_FRACTION_DIGITS)
        .map(Some)
        .ok_or(ConfigError::ScaleOutOfRange { scale })
}
