use crate::utils::error::{PoacError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_exclusive(first: (&str, bool), second: (&str, bool)) -> Result<()> {
    if first.1 && second.1 {
        return Err(PoacError::ConfigError {
            message: format!("`{}` and `{}` cannot both be enabled", first.0, second.0),
        });
    }
    Ok(())
}
