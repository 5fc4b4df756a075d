//! Row emitters for the framed diamond picture

use log::{debug, trace};

use crate::charset::Charset;
use crate::geometry::{is_double_dashed, Dimensions, RowKind};
use crate::sink::OutputSink;

use super::RenderConfig;

/// Glyphs resolved once per render so row emission stays lookup-free
struct Glyphs {
    corner: char,
    frame_horizontal: char,
    frame_vertical: char,
    tip_left: char,
    tip_right: char,
    diagonal_rising: char,
    diagonal_falling: char,
    fill_single: char,
    fill_double: char,
    padding: char,
}

impl Glyphs {
    fn resolve(charset: &Charset) -> Self {
        Self {
            corner: charset.glyph_or_default("corner"),
            frame_horizontal: charset.glyph_or_default("frame-horizontal"),
            frame_vertical: charset.glyph_or_default("frame-vertical"),
            tip_left: charset.glyph_or_default("tip-left"),
            tip_right: charset.glyph_or_default("tip-right"),
            diagonal_rising: charset.glyph_or_default("diagonal-rising"),
            diagonal_falling: charset.glyph_or_default("diagonal-falling"),
            fill_single: charset.glyph_or_default("fill-single"),
            fill_double: charset.glyph_or_default("fill-double"),
            padding: charset.glyph_or_default("padding"),
        }
    }

    fn fill(&self, double_dashed: bool) -> char {
        if double_dashed {
            self.fill_double
        } else {
            self.fill_single
        }
    }
}

/// Renders the framed diamond picture for a given size
///
/// Each picture is `2*size + 1` rows of `2*size + 2` columns, every row
/// terminated by a newline. Rendering is stateless across calls; the renderer
/// only carries its configuration.
pub struct DiamondRenderer {
    config: RenderConfig,
}

impl DiamondRenderer {
    /// Create a renderer with the given configuration
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the picture into a fresh string
    pub fn render(&self, size: usize) -> String {
        let dims = Dimensions::of(size);
        let mut out = String::with_capacity(dims.total_rows * (dims.total_columns + 1));
        self.render_to(size, &mut out);
        out
    }

    /// Render the picture row by row into `sink`
    ///
    /// The sink receives one print call per glyph and one per row terminator,
    /// in drawing order.
    pub fn render_to<S: OutputSink + ?Sized>(&self, size: usize, sink: &mut S) {
        let dims = Dimensions::of(size);
        let glyphs = Glyphs::resolve(&self.config.charset);

        debug!(
            "drawing a diamond of size {}: total_rows={}, total_columns={}, center_row={}",
            size, dims.total_rows, dims.total_columns, dims.center_row
        );

        for i in 0..dims.total_rows {
            let kind = dims.classify(i);
            if self.config.debug {
                trace!("row {}: {:?}", i, kind);
            }

            match kind {
                RowKind::Frame => self.draw_frame_row(&dims, &glyphs, sink),
                RowKind::Center => {
                    self.draw_center_row(&dims, &glyphs, is_double_dashed(i), sink);
                }
                RowKind::Body { width, upper } => {
                    self.draw_body_row(&dims, &glyphs, width, is_double_dashed(i), upper, sink);
                }
            }

            // Move to the next row
            sink.print("\n");
        }
    }

    /// Draw a frame row, e.g. `+----+` for six columns
    fn draw_frame_row<S: OutputSink + ?Sized>(
        &self,
        dims: &Dimensions,
        glyphs: &Glyphs,
        sink: &mut S,
    ) {
        for j in 0..dims.total_columns {
            if j == 0 || j == dims.total_columns - 1 {
                put(sink, glyphs.corner);
            } else {
                put(sink, glyphs.frame_horizontal);
            }
        }
    }

    /// Draw the center row with the tip markers, e.g. `|<-->|`
    fn draw_center_row<S: OutputSink + ?Sized>(
        &self,
        dims: &Dimensions,
        glyphs: &Glyphs,
        double_dashed: bool,
        sink: &mut S,
    ) {
        for j in 0..dims.total_columns {
            if j == 0 || j == dims.total_columns - 1 {
                put(sink, glyphs.frame_vertical);
            } else if j == 1 {
                put(sink, glyphs.tip_left);
            } else if j == dims.total_columns - 2 {
                put(sink, glyphs.tip_right);
            } else {
                put(sink, glyphs.fill(double_dashed));
            }
        }
    }

    /// Draw a non-center diamond row, e.g. `| /--\ |`
    ///
    /// The diamond is centred, so the indent on both sides is
    /// `(total_columns - width) / 2`; the integers involved are even, so no
    /// rounding occurs.
    fn draw_body_row<S: OutputSink + ?Sized>(
        &self,
        dims: &Dimensions,
        glyphs: &Glyphs,
        width: usize,
        double_dashed: bool,
        upper: bool,
        sink: &mut S,
    ) {
        let indent = dims.indent(width);

        for j in 0..dims.total_columns {
            if j == 0 || j == dims.total_columns - 1 {
                put(sink, glyphs.frame_vertical);
            } else if j < indent || j > dims.total_columns - 1 - indent {
                put(sink, glyphs.padding);
            } else if j == indent {
                put(
                    sink,
                    if upper {
                        glyphs.diagonal_rising
                    } else {
                        glyphs.diagonal_falling
                    },
                );
            } else if j == dims.total_columns - 1 - indent {
                put(
                    sink,
                    if upper {
                        glyphs.diagonal_falling
                    } else {
                        glyphs.diagonal_rising
                    },
                );
            } else {
                put(sink, glyphs.fill(double_dashed));
            }
        }
    }
}

/// Emit a single glyph as one sink print call
fn put<S: OutputSink + ?Sized>(sink: &mut S, glyph: char) {
    let mut buf = [0u8; 4];
    sink.print(glyph.encode_utf8(&mut buf));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> DiamondRenderer {
        DiamondRenderer::new(RenderConfig::default())
    }

    #[test]
    fn test_size_zero_is_a_single_frame_row() {
        assert_eq!(renderer().render(0), "++\n");
    }

    #[test]
    fn test_size_one() {
        assert_eq!(renderer().render(1), "+--+\n|<>|\n+--+\n");
    }

    #[test]
    fn test_render_matches_render_to() {
        let renderer = renderer();
        for size in 0..6 {
            let mut streamed = String::new();
            renderer.render_to(size, &mut streamed);
            assert_eq!(renderer.render(size), streamed);
        }
    }

    #[test]
    fn test_one_print_call_per_glyph() {
        // A picture of size 2 is 5 rows of 6 columns; every glyph and every
        // row terminator arrives as its own print call.
        struct Recording(Vec<String>);

        impl OutputSink for Recording {
            fn print(&mut self, text: &str) {
                self.0.push(text.to_string());
            }
        }

        let mut sink = Recording(Vec::new());
        renderer().render_to(2, &mut sink);

        assert_eq!(sink.0.len(), 5 * 6 + 5);
        assert!(sink.0.iter().all(|unit| unit.chars().count() == 1));
        assert_eq!(sink.0.iter().filter(|unit| *unit == "\n").count(), 5);
    }

    #[test]
    fn test_custom_charset_changes_glyphs_not_geometry() {
        let charset = Charset::from_str(
            r#"
[glyphs]
corner = '#'
fill-double = '~'
"#,
        )
        .unwrap();
        let renderer = DiamondRenderer::new(RenderConfig::new().with_charset(charset));

        let picture = renderer.render(3);
        let lines: Vec<&str> = picture.lines().collect();
        assert_eq!(lines[0], "#------#");
        assert_eq!(lines[3], "|<~~~~>|");
        // Untouched tokens keep their defaults
        assert_eq!(lines[1], "|  /\\  |");
    }
}
