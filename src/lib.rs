//! Framed Diamond - an ASCII-art diamond picture renderer
//!
//! This library draws a framed diamond picture of a caller-specified size,
//! row by row, into an output sink.
//!
//! # Example
//!
//! ```rust
//! let picture = framed_diamond::render(2);
//! assert_eq!(picture, "\
//! +----+
//! | /\\ |
//! |<-->|
//! | \\/ |
//! +----+
//! ");
//! ```

pub mod charset;
pub mod geometry;
pub mod renderer;
pub mod sink;

pub use charset::{Charset, CharsetError};
pub use geometry::{Dimensions, RowKind};
pub use renderer::{DiamondRenderer, RenderConfig};
pub use sink::OutputSink;

/// Render the picture for `size` with the default configuration
///
/// This is the main entry point for the library. A picture of size `n` has
/// `2n + 1` rows of `2n + 2` columns, each row terminated by a newline.
/// Rendering never fails; any size renders, a size of zero collapsing to a
/// single frame row.
///
/// # Example
///
/// ```rust
/// let picture = framed_diamond::render(1);
/// assert_eq!(picture, "+--+\n|<>|\n+--+\n");
/// ```
pub fn render(size: usize) -> String {
    render_with_config(size, RenderConfig::default())
}

/// Render the picture for `size` with a custom configuration
///
/// # Example
///
/// ```rust
/// use framed_diamond::{render_with_config, Charset, RenderConfig};
///
/// let charset = Charset::from_str(r#"
/// [glyphs]
/// corner = '*'
/// "#).unwrap();
///
/// let config = RenderConfig::new().with_charset(charset);
/// let picture = render_with_config(0, config);
/// assert_eq!(picture, "**\n");
/// ```
pub fn render_with_config(size: usize, config: RenderConfig) -> String {
    DiamondRenderer::new(config).render(size)
}

/// Render the picture for `size` directly into `sink`
///
/// Streaming variant of [`render`]: the sink receives one print call per
/// glyph and one per row terminator, in drawing order.
pub fn render_to_sink<S: OutputSink + ?Sized>(size: usize, config: RenderConfig, sink: &mut S) {
    DiamondRenderer::new(config).render_to(size, sink);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_size_zero() {
        assert_eq!(render(0), "++\n");
    }

    #[test]
    fn test_render_line_and_column_counts() {
        for size in 0..8 {
            let picture = render(size);
            let lines: Vec<&str> = picture.lines().collect();
            assert_eq!(lines.len(), 2 * size + 1);
            for line in lines {
                assert_eq!(line.len(), 2 * size + 2);
            }
        }
    }

    #[test]
    fn test_render_to_sink_matches_render() {
        let mut out = String::new();
        render_to_sink(3, RenderConfig::default(), &mut out);
        assert_eq!(out, render(3));
    }

    #[test]
    fn test_render_with_default_config_matches_render() {
        assert_eq!(render_with_config(4, RenderConfig::default()), render(4));
    }
}
