use thiserror::Error;

use crate::color::ColorParseError;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ThemeError {
    #[error("invalid color for `{field}`: {value:?}")]
    InvalidColor {
        field: &'static str,
        value: String,
        #[source]
        source: ColorParseError,
    },
    #[error("invalid dimension for `{field}`: {value} is out of range")]
    InvalidDimension { field: &'static str, value: f64 },
}

impl ThemeError {
    pub fn invalid_color(field: &'static str, value: &str, source: ColorParseError) -> Self {
        Self::InvalidColor {
            field,
            value: value.to_string(),
            source,
        }
    }

    pub fn invalid_dimension(field: &'static str, value: f64) -> Self {
        Self::InvalidDimension { field, value }
    }
}
