//! Single-page SVG output.
//!
//! The page transform centers the viewport on the page, scales one decade
//! to `points_per_decade` points and flips the y axis, so chart coordinates
//! can be streamed straight through.

use std::io::Write;

use tracing::debug;

use crate::chart::label::{HorizontalAlign, Label, VerticalAlign};
use crate::chart::viewport::Viewport;
use crate::errors::ChartError;
use crate::math::{scaling, translation, Affine, Point, Scalar};

/// Page geometry and text styling.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    /// Page width in points.
    pub width: Scalar,
    /// Page height in points.
    pub height: Scalar,
    /// Length of one decade on the page, in points.
    pub points_per_decade: Scalar,
    /// Font size in decade units.
    pub font_size: Scalar,
    /// CSS font family for labels.
    pub font_family: String,
    /// Stroke and text color.
    pub color: String,
}

impl Default for PageLayout {
    /// US Letter, 60 points per decade, 12/72-decade Arial, red ink.
    fn default() -> Self {
        Self {
            width: 72.0 * 8.5,
            height: 72.0 * 11.0,
            points_per_decade: 60.0,
            font_size: 12.0 / 72.0,
            font_family: String::from("Arial"),
            color: String::from("#ff0000"),
        }
    }
}

impl PageLayout {
    /// Checks that every dimension is positive and the text style is usable.
    pub fn validate(&self) -> Result<(), ChartError> {
        let dims = [
            ("width", self.width),
            ("height", self.height),
            ("points_per_decade", self.points_per_decade),
            ("font_size", self.font_size),
        ];
        for (name, value) in dims {
            if !(value.is_finite() && value > 0.0) {
                return Err(ChartError::config(format!(
                    "page `{name}` must be positive, got {value}"
                )));
            }
        }
        if self.font_family.trim().is_empty() {
            return Err(ChartError::config("page font_family must not be empty"));
        }
        if self.color.trim().is_empty() {
            return Err(ChartError::config("page color must not be empty"));
        }
        Ok(())
    }

    /// Chart-to-page transform for `viewport`.
    #[must_use]
    pub fn transform(&self, viewport: &Viewport) -> Affine {
        let s = self.points_per_decade;
        translation(self.width / 2.0, self.height / 2.0)
            * scaling(s, -s)
            * translation(
                -Scalar::from(viewport.columns()) / 2.0,
                -Scalar::from(viewport.rows()) / 2.0,
            )
    }
}

/// [`super::DrawingSink`] that streams an SVG document into a writer.
pub struct SvgSink<W: Write> {
    writer: W,
    layout: PageLayout,
    transform: Affine,
    path: String,
    stroke_width: Scalar,
}

impl<W: Write> SvgSink<W> {
    /// Validates `layout` and writes the document header.
    pub fn new(mut writer: W, layout: PageLayout, viewport: &Viewport) -> Result<Self, ChartError> {
        layout.validate()?;
        writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}pt" height="{h}pt" viewBox="0 0 {w} {h}">"#,
            w = layout.width,
            h = layout.height,
        )?;
        let transform = layout.transform(viewport);
        debug!(
            width = layout.width,
            height = layout.height,
            points_per_decade = layout.points_per_decade,
            "opened svg page"
        );
        Ok(Self {
            writer,
            layout,
            transform,
            path: String::new(),
            stroke_width: 1.0 / 72.0,
        })
    }

    fn to_page(&self, p: Point) -> Point {
        self.transform.transform_point(&p)
    }

    fn page_length(&self, decades: Scalar) -> Scalar {
        decades * self.layout.points_per_decade
    }
}

impl<W: Write> super::DrawingSink for SvgSink<W> {
    type Output = W;

    fn move_to(&mut self, p: Point) {
        let p = self.to_page(p);
        self.path.push_str(&format!("M{:.3} {:.3} ", p.x, p.y));
    }

    fn line_to(&mut self, p: Point) {
        let p = self.to_page(p);
        self.path.push_str(&format!("L{:.3} {:.3} ", p.x, p.y));
    }

    fn set_stroke_width(&mut self, width: Scalar) {
        self.stroke_width = width;
    }

    fn stroke(&mut self) -> Result<(), ChartError> {
        if self.path.is_empty() {
            return Ok(());
        }
        writeln!(
            self.writer,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{:.4}"/>"#,
            self.path.trim_end(),
            escape(&self.layout.color),
            self.page_length(self.stroke_width),
        )?;
        self.path.clear();
        Ok(())
    }

    fn draw_label(&mut self, label: &Label) -> Result<(), ChartError> {
        let anchor = self.to_page(label.anchor);
        let gap = self.page_length(label.gap);
        let (dx, text_anchor) = match label.h_align {
            HorizontalAlign::Left => (gap, "start"),
            HorizontalAlign::Center => (0.0, "middle"),
            HorizontalAlign::Right => (-gap, "end"),
        };
        // SVG y grows downward, so "below the anchor" is a positive offset.
        let (dy, baseline) = match label.v_align {
            VerticalAlign::Top => (gap, "hanging"),
            VerticalAlign::Middle => (0.0, "central"),
            VerticalAlign::Bottom => (-gap, "alphabetic"),
        };
        writeln!(
            self.writer,
            r#"<text transform="translate({:.3} {:.3}) rotate({:.3})" x="{:.3}" y="{:.3}" font-family="{}" font-size="{:.3}" fill="{}" text-anchor="{}" dominant-baseline="{}">{}</text>"#,
            anchor.x,
            anchor.y,
            -label.rotation.to_degrees() + 0.0,
            dx,
            dy,
            escape(&self.layout.font_family),
            self.page_length(self.layout.font_size),
            escape(&self.layout.color),
            text_anchor,
            baseline,
            escape(&label.text),
        )?;
        Ok(())
    }

    fn finish(mut self) -> Result<W, ChartError> {
        writeln!(self.writer, "</svg>")?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
