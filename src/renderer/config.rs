//! Configuration for picture rendering

use crate::charset::Charset;

/// Configuration options for the picture renderer
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Charset used to resolve glyph tokens
    pub charset: Charset,

    /// Debug mode: trace row classification while drawing
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the charset used to resolve glyph tokens
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
