//! Configurable limits for bounded decoding.

/// Limits enforced while decoding a tag stream.
///
/// Every declared length is checked against these values before anything is
/// allocated, so a corrupt count cannot drive a huge allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum size of the whole input in bytes.
    pub max_input_bytes: usize,

    /// Maximum nesting depth of compounds and lists.
    pub max_depth: usize,

    /// Maximum element count of a byte/int/long array.
    pub max_array_len: usize,

    /// Maximum element count of a list.
    pub max_list_len: usize,

    /// Maximum byte length of a string payload.
    pub max_string_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // A 288x288x256 grid of five masks is well under this
            max_input_bytes: 256 * 1024 * 1024,

            max_depth: 512,
            max_array_len: 64 * 1024 * 1024,
            max_list_len: 16 * 1024 * 1024,
            max_string_len: usize::from(u16::MAX),
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_input_bytes: 64 * 1024,
            max_depth: 16,
            max_array_len: 8192,
            max_list_len: 1024,
            max_string_len: 256,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_input_bytes: usize::MAX,
            max_depth: usize::MAX,
            max_array_len: usize::MAX,
            max_list_len: usize::MAX,
            max_string_len: usize::MAX,
        }
    }
}
