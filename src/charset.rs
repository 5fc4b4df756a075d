//! Charset system for glyph substitution
//!
//! This module provides symbolic glyph tokens that can be resolved to
//! concrete characters via charset files. The picture geometry stays fixed
//! while the characters it is drawn with can be swapped out.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing charsets
#[derive(Error, Debug)]
pub enum CharsetError {
    #[error("Failed to read charset file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse charset TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Glyph '{token}' must be exactly one character, got {value:?}")]
    GlyphWidth { token: String, value: String },
}

/// A charset mapping symbolic glyph tokens to concrete characters
#[derive(Debug, Clone)]
pub struct Charset {
    /// Optional name for the charset
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Glyph mappings: token name -> character
    pub glyphs: HashMap<String, char>,
}

/// TOML structure for deserializing charsets
#[derive(Deserialize)]
struct TomlCharset {
    metadata: Option<TomlMetadata>,
    glyphs: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default charset - the classic framed diamond drawn with ASCII punctuation
const DEFAULT_CHARSET: &str = r#"
[glyphs]
# Frame
corner = '+'
frame-horizontal = '-'
frame-vertical = '|'

# Diamond tips on the center row
tip-left = '<'
tip-right = '>'

# Slanted edges
diagonal-rising = '/'
diagonal-falling = '\'

# Interior fill; single on even rows, double on odd rows
fill-single = '-'
fill-double = '='

# Outside the diamond
padding = ' '
"#;

impl Charset {
    /// Load charset from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CharsetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load charset from a TOML string
    pub fn from_str(content: &str) -> Result<Self, CharsetError> {
        let parsed: TomlCharset = toml::from_str(content)?;

        let mut glyphs = HashMap::new();
        for (token, value) in parsed.glyphs {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    glyphs.insert(token, c);
                }
                _ => {
                    return Err(CharsetError::GlyphWidth { token, value });
                }
            }
        }

        Ok(Charset {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            glyphs,
        })
    }

    /// Resolve a symbolic glyph token to a character
    ///
    /// Returns None if the token is not defined in this charset.
    pub fn glyph(&self, token: &str) -> Option<char> {
        self.glyphs.get(token).copied()
    }

    /// Resolve a symbolic glyph token with fallback to the default charset
    ///
    /// Fallback order:
    /// 1. Check this charset for the token
    /// 2. Check the default charset for the token
    /// 3. Use `?` for tokens unknown to both
    pub fn glyph_or_default(&self, token: &str) -> char {
        if let Some(c) = self.glyph(token) {
            return c;
        }

        if let Some(c) = Self::default().glyph(token) {
            return c;
        }

        '?'
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::from_str(DEFAULT_CHARSET).expect("Default charset should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_charset() {
        let charset = Charset::default();
        assert_eq!(charset.glyph("corner"), Some('+'));
        assert_eq!(charset.glyph("frame-horizontal"), Some('-'));
        assert_eq!(charset.glyph("frame-vertical"), Some('|'));
        assert_eq!(charset.glyph("tip-left"), Some('<'));
        assert_eq!(charset.glyph("tip-right"), Some('>'));
        assert_eq!(charset.glyph("diagonal-rising"), Some('/'));
        assert_eq!(charset.glyph("diagonal-falling"), Some('\\'));
        assert_eq!(charset.glyph("fill-single"), Some('-'));
        assert_eq!(charset.glyph("fill-double"), Some('='));
        assert_eq!(charset.glyph("padding"), Some(' '));
    }

    #[test]
    fn test_glyph_missing_token() {
        let charset = Charset::default();
        assert_eq!(charset.glyph("nonexistent"), None);
    }

    #[test]
    fn test_glyph_or_default_fallback() {
        // A sparse charset falls back to the default glyphs
        let sparse = Charset::from_str(
            r#"
[glyphs]
corner = '*'
"#,
        )
        .unwrap();
        assert_eq!(sparse.glyph_or_default("corner"), '*');
        assert_eq!(sparse.glyph_or_default("tip-left"), '<');
        assert_eq!(sparse.glyph_or_default("no-such-token"), '?');
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let charset = Charset::from_str(
            r#"
[metadata]
name = "Dots"
description = "Diamond drawn with dots"

[glyphs]
fill-single = '.'
fill-double = ':'
"#,
        )
        .unwrap();
        assert_eq!(charset.name.as_deref(), Some("Dots"));
        assert_eq!(charset.description.as_deref(), Some("Diamond drawn with dots"));
        assert_eq!(charset.glyph("fill-single"), Some('.'));
    }

    #[test]
    fn test_multi_character_glyph_rejected() {
        let result = Charset::from_str(
            r#"
[glyphs]
corner = '++'
"#,
        );
        assert!(matches!(
            result,
            Err(CharsetError::GlyphWidth { ref token, .. }) if token == "corner"
        ));
    }

    #[test]
    fn test_empty_glyph_rejected() {
        let result = Charset::from_str(
            r#"
[glyphs]
padding = ''
"#,
        );
        assert!(matches!(result, Err(CharsetError::GlyphWidth { .. })));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let result = Charset::from_str("not [ valid toml");
        assert!(matches!(result, Err(CharsetError::ParseError(_))));
    }
}
