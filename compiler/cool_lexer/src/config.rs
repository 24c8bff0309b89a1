//! Scanner configuration.

/// Maximum string constant size, counting the implicit terminator.
///
/// A literal whose decoded contents reach this many bytes is rejected, so
/// the longest accepted string holds `MAX_STR_CONST - 1` bytes.
pub const MAX_STR_CONST: usize = 1025;

/// Tunable limits for a [`Scanner`](crate::Scanner).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScannerConfig {
    /// Decoded string length (in bytes) at which a literal is too long.
    pub max_string_len: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            max_string_len: MAX_STR_CONST,
        }
    }
}

impl ScannerConfig {
    /// A config without a string length limit (for testing).
    pub fn unlimited() -> Self {
        ScannerConfig {
            max_string_len: usize::MAX,
        }
    }
}
