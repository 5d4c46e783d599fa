use thiserror::Error;

/// Errors returned by hex codec operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Hex string has odd length or contains a non-hex digit.
    #[error("malformed hex input: {0}")]
    MalformedInput(#[from] hex::FromHexError),
}

#[cfg(test)]
mod tests {
    use super::CodecError;

    #[test]
    fn error_messages_are_stable() {
        assert_eq!(
            CodecError::MalformedInput(hex::FromHexError::OddLength).to_string(),
            "malformed hex input: Odd number of digits"
        );
    }
}
