//! Validator configuration

/// Knobs controlling how strictly raw input is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Reject keys the operation does not declare. When disabled they are dropped with a warning.
    pub strict_fields: bool,
    /// Decode `imageData`/`maskData` and require a JPEG or PNG payload.
    pub verify_inline_data: bool,
    /// Upper bound on the decoded size of an inline payload, in bytes.
    pub max_inline_bytes: Option<usize>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            strict_fields: true,
            verify_inline_data: true,
            max_inline_bytes: None,
        }
    }
}

impl ValidatorConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set strict field checking
    pub fn with_strict_fields(mut self, strict: bool) -> Self {
        self.strict_fields = strict;
        self
    }

    /// Set inline payload verification
    pub fn with_verify_inline_data(mut self, verify: bool) -> Self {
        self.verify_inline_data = verify;
        self
    }

    /// Cap the decoded size of inline payloads
    pub fn with_max_inline_bytes(mut self, max: usize) -> Self {
        self.max_inline_bytes = Some(max);
        self
    }
}
