//! SVG output of a contour map.
//!
//! The document is written in a single pass to any [`std::io::Write`]:
//! header, contour lines, generated points, declared points, footer. All
//! coordinates are in millimetres, mapped as `coord * scale + margin`.

use std::io::{self, Write};

use num_traits::Signed;
use terrain_common::exact::{self, Integer, Rational};
use terrain_common::{
    Color, ContourError, ContourResult, DeclaredPoint, GeneratedPoint, Grid, RenderConfig,
};
use thiserror::Error;

use crate::colorscale::{ColorfulLine, ColorfulPoint};

/// Errors while writing a document.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write SVG: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Contour(#[from] ContourError),
}

pub type RenderResult<T> = Result<T, RenderError>;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;
const DOCTYPE: &str = r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#;

/// Height units per label unit of a generated point.
const LABEL_UNIT: i64 = 10;

/// Right edge, in millimetres, past which declared labels are right-aligned.
const LABEL_RIGHT_EDGE: f64 = 270.0;

/// Left edge, in millimetres, before which declared labels are left-aligned.
const LABEL_LEFT_EDGE: f64 = 5.0;

/// Escape the XML special characters of text and attribute values.
pub fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

fn mm(value: f64) -> String {
    format!("{:.2}mm", value)
}

/// Writes contour maps as SVG documents.
#[derive(Debug, Clone)]
pub struct SvgRenderer<'a> {
    config: &'a RenderConfig,
    scale: Rational,
    margin_x: Rational,
    margin_y: Rational,
}

impl<'a> SvgRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> ContourResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            scale: exact::rational(config.scale_numerator, config.scale_denominator)?,
            margin_x: exact::to_rational(&exact::integer(config.margin_x)),
            margin_y: exact::to_rational(&exact::integer(config.margin_y)),
        })
    }

    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    /// Display position, in millimetres, of a point at `(x, y)`.
    pub fn position(&self, x: &Rational, y: &Rational) -> (f64, f64) {
        let dx = x * &self.scale + &self.margin_x;
        let dy = y * &self.scale + &self.margin_y;
        (exact::to_f64(&dx), exact::to_f64(&dy))
    }

    fn declared_position(&self, point: &DeclaredPoint) -> (f64, f64) {
        self.position(&exact::to_rational(point.x()), &exact::to_rational(point.y()))
    }

    pub fn write_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", XML_DECLARATION)?;
        writeln!(out, "{}", DOCTYPE)?;
        writeln!(out, r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg">"#)?;
        writeln!(out, "<title>{}</title>", xml_escape(&self.config.title))?;
        writeln!(out, r#"<svg x="0cm" y="0cm">"#)
    }

    pub fn write_footer<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "</svg></svg>")
    }

    /// One `<line>` per contour segment, stroked in the segment's colour.
    pub fn write_lines<W: Write>(&self, out: &mut W, lines: &[ColorfulLine]) -> io::Result<()> {
        for line in lines {
            let (x1, y1) = self.position(line.element().beginning().x(), line.element().beginning().y());
            let (x2, y2) = self.position(line.element().end().x(), line.element().end().y());
            writeln!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="0.2mm" stroke="{}" />"#,
                mm(x1),
                mm(y1),
                mm(x2),
                mm(y2),
                line.color()
            )?;
        }
        Ok(())
    }

    /// A small dot per generated point, labelled with its height in tens
    /// modulo 100.
    pub fn write_points<W: Write>(&self, out: &mut W, points: &[ColorfulPoint]) -> RenderResult<()> {
        for point in points {
            self.write_generated(out, point.element(), point.color())?;
        }
        Ok(())
    }

    fn write_generated<W: Write>(
        &self,
        out: &mut W,
        point: &GeneratedPoint,
        color: Color,
    ) -> RenderResult<()> {
        let (x, y) = self.position(point.x(), point.y());
        let label = generated_label(point)?;
        let text_x = x + 2.0;
        let text_y = (y - 4.0).max(0.0);

        writeln!(
            out,
            r#"<circle cx="{}" cy="{}" r="0.3mm" fill="{}"/>"#,
            mm(x),
            mm(y),
            color
        )?;
        writeln!(
            out,
            r#"<text x="{}" y="{}" text-anchor="middle" font-family="monospace" font-size="7px" font-weight="lighter" fill="{}" dy="4ex" dx="-2em">{}</text>"#,
            mm(text_x),
            mm(text_y),
            color,
            label
        )?;
        Ok(())
    }

    /// A dot per valid declared point of the grid, with its zero-padded
    /// height. Absent points are skipped.
    pub fn write_declared<W: Write>(&self, out: &mut W, grid: &Grid) -> io::Result<()> {
        let label_color = self.config.label_color();
        for point in grid.valid_points() {
            self.write_declared_point(out, point, label_color)?;
        }
        Ok(())
    }

    fn write_declared_point<W: Write>(
        &self,
        out: &mut W,
        point: &DeclaredPoint,
        label_color: Color,
    ) -> io::Result<()> {
        let (x, y) = self.declared_position(point);

        match (point.sequence(), point.index()) {
            (None, None) => {
                writeln!(out, r#"<circle cx="{}" cy="{}" r="0.5mm"/>"#, mm(x), mm(y))?;
            }
            (sequence, index) => {
                writeln!(out, r#"<circle cx="{}" cy="{}" r="0.5mm">"#, mm(x), mm(y))?;
                if let Some(n) = sequence {
                    writeln!(out, "<title>point[{}]</title>", n)?;
                }
                if let Some(index) = index {
                    writeln!(out, "<desc>({},{})</desc>", index.column, index.row)?;
                }
                writeln!(out, "</circle>")?;
            }
        }

        let text_x = x.min(LABEL_RIGHT_EDGE);
        let text_y = y.max(4.0);
        let anchor = if x < LABEL_LEFT_EDGE {
            "start"
        } else if x > LABEL_RIGHT_EDGE {
            "end"
        } else {
            "middle"
        };

        writeln!(
            out,
            r#"<text x="{}" y="{}" text-anchor="{}" font-family="sans-serif" font-size="8px"><tspan fill="{}">{}</tspan></text>"#,
            mm(text_x),
            mm(text_y),
            anchor,
            label_color,
            height_label(point.z())
        )
    }

    /// Write a complete document.
    pub fn write_document<W: Write>(
        &self,
        out: &mut W,
        lines: &[ColorfulLine],
        points: &[ColorfulPoint],
        grid: &Grid,
    ) -> RenderResult<()> {
        self.write_header(out)?;
        self.write_lines(out, lines)?;
        if self.config.draw_generated_points {
            self.write_points(out, points)?;
        }
        if self.config.draw_declared_points {
            self.write_declared(out, grid)?;
        }
        self.write_footer(out)?;
        Ok(())
    }

    /// Render a complete document into a string.
    pub fn render_to_string(
        &self,
        lines: &[ColorfulLine],
        points: &[ColorfulPoint],
        grid: &Grid,
    ) -> RenderResult<String> {
        let mut buffer = Vec::new();
        self.write_document(&mut buffer, lines, points, grid)?;
        String::from_utf8(buffer)
            .map_err(|err| RenderError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
    }
}

/// `(z / 10) mod 100` of a generated point's height.
fn generated_label(point: &GeneratedPoint) -> ContourResult<Integer> {
    let height = exact::to_integer(point.height())?;
    let tens = exact::div_floor(&height, &exact::integer(LABEL_UNIT))?;
    exact::modulo(&tens, &exact::integer(100))
}

/// Height padded to four digits, sign first.
fn height_label(z: &Integer) -> String {
    if z.is_negative() {
        format!("-{:0>3}", z.abs())
    } else {
        format!("{:0>4}", z)
    }
}
