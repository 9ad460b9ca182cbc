//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Problems found while decoding a byte stream.
///
/// These are never fatal: the offending byte is rendered inline as a `.byte`
/// directive and decoding resumes at the next byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The byte is not a documented 6502 opcode.
    #[error("undefined opcode ${0:02X}")]
    UndefinedOpcode(u8),
}

/// Errors raised while building an [`Image`](crate::Image) from a file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_load_error_keeps_cause_in_source_chain() {
        let err = LoadError::Io {
            path: PathBuf::from("rom.bin"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };

        assert_eq!(err.to_string(), "cannot read rom.bin");
        assert_eq!(err.source().map(|e| e.to_string()), Some("no such file".to_string()));
    }

    #[test]
    fn test_undefined_opcode_message() {
        assert_eq!(DecodeError::UndefinedOpcode(0x02).to_string(), "undefined opcode $02");
    }
}
