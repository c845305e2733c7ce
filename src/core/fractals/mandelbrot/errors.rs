/// A render parameter that cannot be turned into a usable viewport.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamsError {
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl ParamsError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// A palette token that names none of the known palettes.
///
/// Never reaches callers of the normalizer: unknown palettes fall back to the
/// default palette.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown palette '{0}'")]
pub struct InvalidPaletteError(pub String);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColourMapError {
    #[error("iterations {iterations} exceeds maximum {max_iterations}")]
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_names_the_parameter() {
        let err = ParamsError::invalid("zoom", "must be positive");

        assert_eq!(err.to_string(), "invalid parameter 'zoom': must be positive");
    }

    #[test]
    fn test_colour_map_error_display() {
        let err = ColourMapError::IterationsExceedMax {
            iterations: 11,
            max_iterations: 10,
        };

        assert_eq!(err.to_string(), "iterations 11 exceeds maximum 10");
    }
}
