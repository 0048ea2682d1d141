use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidSetFormat(String),

    #[error("Key cannot be empty in '{0}'.")]
    EmptyKey(String),
}

/// Splits a `-S KEY=VALUE` override at the first `=`.
pub fn parse_set_value(kv_pair: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = kv_pair
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidSetFormat(kv_pair.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(kv_pair.to_string()));
    }
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_the_first_equals_sign() {
        assert_eq!(
            parse_set_value("display.separator=a=b"),
            Ok(("display.separator", "a=b"))
        );
    }

    #[test]
    fn keeps_empty_values() {
        assert_eq!(
            parse_set_value("display.separator="),
            Ok(("display.separator", ""))
        );
    }

    #[test]
    fn rejects_missing_equals_sign() {
        assert_eq!(
            parse_set_value("display.name-mode"),
            Err(ParseError::InvalidSetFormat("display.name-mode".to_string()))
        );
    }

    #[test]
    fn rejects_empty_key() {
        assert_eq!(
            parse_set_value(" =long"),
            Err(ParseError::EmptyKey(" =long".to_string()))
        );
    }
}
