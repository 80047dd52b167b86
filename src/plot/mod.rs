//! Plot composer
//!
//! Holds data series in data coordinates, derives axis limits and layout,
//! normalizes everything into a [`Canvas`] and frames the rendered rows with
//! a border, tick labels, a legend, a title and an x label.

mod options;

pub use options::{color_token, parse_options, Limits, SeriesStyle, Size};

use std::io::Write;

use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::canvas::{Canvas, Color, Encoding};
use crate::errors::{PlotError, Result};
use crate::style::Styler;

/// Box-drawing characters of the frame
mod border {
    pub const TL: &str = "\u{250c}";
    pub const TR: &str = "\u{2510}";
    pub const BL: &str = "\u{2514}";
    pub const BR: &str = "\u{2518}";
    pub const H: &str = "\u{2500}";
    pub const V: &str = "\u{2502}";
}

/// Color of the frame and tick labels
const SECONDARY: Color = Color::Grey;

/// Fallback when the terminal size cannot be queried
const DEFAULT_TERMINAL: (u16, u16) = (80, 24);

/// One data series
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub style: SeriesStyle,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub color: Color,
}

/// A plot of one or more series
#[derive(Debug, Clone, Default)]
pub struct Plot {
    series: Vec<Series>,
    next_color: usize,
    width: Size,
    height: Size,
    xlimits: Limits,
    ylimits: Limits,
    encoding: Encoding,
    legend: Vec<Option<String>>,
    title: Option<String>,
    xlabel: Option<String>,
    xlines: Vec<f64>,
    ylines: Vec<f64>,
    styler: Option<Styler>,
    terminal: Option<(u16, u16)>,
}

impl Plot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a series with explicit x values
    ///
    /// `opts` holds at most one style (`-` lines, `x` `:` `*` points) and one
    /// color (`r g b c m y`). Without a color the next series color is used.
    pub fn add(&mut self, xs: &[f64], ys: &[f64], opts: &str) -> Result<&mut Self> {
        if xs.len() != ys.len() {
            return Err(PlotError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        let (style, color) = parse_options(opts)?;
        let color = color.unwrap_or_else(|| {
            let color = Color::SERIES[self.next_color % Color::SERIES.len()];
            self.next_color += 1;
            color
        });
        self.series.push(Series {
            style: style.unwrap_or_default(),
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            color,
        });
        Ok(self)
    }

    /// Add a series plotted against its indices
    pub fn add_y(&mut self, ys: &[f64], opts: &str) -> Result<&mut Self> {
        let xs: Vec<f64> = (0..ys.len()).map(|i| i as f64).collect();
        self.add(&xs, ys, opts)
    }

    /// Horizontal reference line at data coordinate `y`
    pub fn xline(&mut self, y: f64) -> &mut Self {
        self.xlines.push(y);
        self
    }

    /// Vertical reference line at data coordinate `x`
    pub fn yline(&mut self, x: f64) -> &mut Self {
        self.ylines.push(x);
        self
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn set_width(&mut self, width: Size) -> &mut Self {
        self.width = width;
        self
    }

    pub fn set_height(&mut self, height: Size) -> &mut Self {
        self.height = height;
        self
    }

    pub fn set_xlimits(&mut self, limits: Limits) -> &mut Self {
        self.xlimits = limits;
        self
    }

    pub fn set_ylimits(&mut self, limits: Limits) -> &mut Self {
        self.ylimits = limits;
        self
    }

    pub fn set_encoding(&mut self, encoding: Encoding) -> &mut Self {
        self.encoding = encoding;
        self
    }

    /// One optional label per series, in add order
    pub fn set_legend(&mut self, legend: Vec<Option<String>>) -> &mut Self {
        self.legend = legend;
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into()).filter(|t| !t.is_empty());
        self
    }

    pub fn set_xlabel(&mut self, xlabel: impl Into<String>) -> &mut Self {
        self.xlabel = Some(xlabel.into()).filter(|l| !l.is_empty());
        self
    }

    /// Use `styler` instead of the process-wide color toggle
    pub fn with_styler(mut self, styler: Styler) -> Self {
        self.styler = Some(styler);
        self
    }

    /// Use a fixed terminal size instead of querying the terminal
    pub fn with_terminal_size(mut self, columns: u16, rows: u16) -> Self {
        self.terminal = Some((columns, rows));
        self
    }

    /// Copy of the settings without any data
    pub fn blank(&self) -> Self {
        Self {
            series: Vec::new(),
            next_color: 0,
            xlines: Vec::new(),
            ylines: Vec::new(),
            ..self.clone()
        }
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    fn terminal_size(&self) -> (u16, u16) {
        self.terminal
            .unwrap_or_else(|| crossterm::terminal::size().unwrap_or(DEFAULT_TERMINAL))
    }

    /// Outer width in cells
    pub fn width(&self) -> u16 {
        self.width.resolve(self.terminal_size().0, 0)
    }

    /// Outer height in cells
    pub fn height(&self) -> u16 {
        // Full height leaves room for a prompt
        self.height.resolve(self.terminal_size().1, 1)
    }

    /// Resolved x limits
    pub fn xlimits(&self) -> Result<(f64, f64)> {
        self.xlimits
            .resolve(self.series.iter().flat_map(|s| s.xs.iter()))
    }

    /// Resolved y limits
    pub fn ylimits(&self) -> Result<(f64, f64)> {
        self.ylimits
            .resolve(self.series.iter().flat_map(|s| s.ys.iter()))
    }

    fn styler(&self) -> Styler {
        self.styler.unwrap_or_else(Styler::current)
    }

    /// Draw the whole plot
    pub fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        for line in self.lines()? {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// The whole plot as lines of text
    pub fn lines(&self) -> Result<Vec<String>> {
        let layout = Layout::new(self)?;
        let canvas = self.canvas(&layout)?;
        let styler = self.styler();

        let mut lines = Vec::with_capacity(layout.canvas_height as usize + 4);
        self.top_part(&layout, styler, &mut lines);
        self.body(&layout, &canvas, styler, &mut lines);
        self.bottom_part(&layout, styler, &mut lines);
        Ok(lines)
    }

    /// Canvas holding every series and reference line, normalized to `[0, 1]`
    fn canvas(&self, layout: &Layout) -> Result<Canvas> {
        let (minx, maxx) = layout.xlimits;
        let (miny, maxy) = layout.ylimits;
        let nx = |v: &f64| (v - minx) / (maxx - minx);
        let ny = |v: &f64| (v - miny) / (maxy - miny);

        let mut canvas = Canvas::new(layout.canvas_width, layout.canvas_height, self.encoding)?;
        for y in &self.xlines {
            let y = ny(y);
            canvas.lines(&[0.0, 1.0], &[y, y], None)?;
        }
        for x in &self.ylines {
            let x = nx(x);
            canvas.lines(&[x, x], &[0.0, 1.0], None)?;
        }
        for series in &self.series {
            let xs: Vec<f64> = series.xs.iter().map(nx).collect();
            let ys: Vec<f64> = series.ys.iter().map(ny).collect();
            match series.style {
                SeriesStyle::Lines if xs.len() >= 2 => {
                    canvas.lines(&xs, &ys, Some(series.color))?;
                }
                _ => {
                    canvas.points(&xs, &ys, Some(series.color))?;
                }
            }
        }
        Ok(canvas)
    }

    fn top_part(&self, layout: &Layout, styler: Styler, lines: &mut Vec<String>) {
        let cw = layout.canvas_width as usize;
        if let Some(title) = &self.title {
            let pad = 1 + cw.saturating_sub(title.width()) / 2;
            lines.push(format!("{}{title}", " ".repeat(pad)));
        }
        let top = format!("{}{}{}", border::TL, border::H.repeat(cw), border::TR);
        lines.push(styler.paint(&top, Some(SECONDARY)));
    }

    fn body(&self, layout: &Layout, canvas: &Canvas, styler: Styler, lines: &mut Vec<String>) {
        let legend: Vec<(&str, Color)> = self
            .legend
            .iter()
            .zip(self.series.iter().map(|s| s.color))
            .filter_map(|(label, color)| {
                label
                    .as_deref()
                    .filter(|l| !l.is_empty())
                    .map(|l| (l, color))
            })
            .collect();
        let (miny, maxy) = &layout.ytick_labels;
        let yticks = layout.yticks_width;
        let last = layout.canvas_height as usize - 1;
        let tick = |label: &str| {
            let pad = " ".repeat(yticks.saturating_sub(label.width()));
            format!("{}{pad}", styler.paint(label, Some(SECONDARY)))
        };

        for (i, row) in canvas.rows_with(styler).enumerate() {
            let mut line = styler.paint(border::V, Some(SECONDARY));
            line.push_str(&row);
            line.push_str(&styler.paint(border::V, Some(SECONDARY)));
            if i == 0 {
                line.push_str(&tick(maxy.as_str()));
            } else if i == last {
                line.push_str(&tick(miny.as_str()));
            } else {
                line.push_str(&" ".repeat(yticks));
            }
            if let Some((label, color)) = legend.get(i) {
                line.push(' ');
                line.push_str(&styler.paint(label, Some(*color)));
            }
            lines.push(line);
        }
    }

    fn bottom_part(&self, layout: &Layout, styler: Styler, lines: &mut Vec<String>) {
        let cw = layout.canvas_width as usize;
        let bottom = format!("{}{}{}", border::BL, border::H.repeat(cw), border::BR);
        lines.push(styler.paint(&bottom, Some(SECONDARY)));

        let (minx, maxx) = &layout.xtick_labels;
        let xlabel = self.xlabel.as_deref().unwrap_or("");
        let left = (cw.saturating_sub(xlabel.width()) / 2).saturating_sub(minx.width());
        let right = cw.saturating_sub(left + minx.width() + maxx.width() + xlabel.width());
        lines.push(format!(
            " {}{}{xlabel}{}{}",
            styler.paint(minx, Some(SECONDARY)),
            " ".repeat(left),
            " ".repeat(right),
            styler.paint(maxx, Some(SECONDARY)),
        ));
    }
}

/// Resolved sizes and limits for one draw
#[derive(Debug, Clone)]
struct Layout {
    canvas_width: u32,
    canvas_height: u32,
    xlimits: (f64, f64),
    ylimits: (f64, f64),
    xtick_labels: (String, String),
    ytick_labels: (String, String),
    yticks_width: usize,
}

impl Layout {
    fn new(plot: &Plot) -> Result<Self> {
        let xlimits = plot.xlimits()?;
        let ylimits = plot.ylimits()?;
        let xtick_labels = (tick_label(xlimits.0), tick_label(xlimits.1));
        let ytick_labels = (tick_label(ylimits.0), tick_label(ylimits.1));
        let yticks_width = ytick_labels.0.width().max(ytick_labels.1.width());
        let legend_width = plot
            .legend
            .iter()
            .flatten()
            .map(|l| l.width())
            .max()
            .unwrap_or(0);

        let (width, height) = (plot.width(), plot.height());
        let legend_part = if legend_width == 0 { 0 } else { legend_width + 1 };
        // 2 for the borders
        let canvas_width = i64::from(width) - (yticks_width + legend_part) as i64 - 2;
        // 2 for the borders, 1 for the x ticks
        let canvas_height = i64::from(height) - i64::from(plot.title.is_some()) - 3;
        if canvas_width < 1 || canvas_height < 1 {
            return Err(PlotError::LayoutTooSmall { width, height });
        }
        debug!(
            "Plot layout {}x{} -> canvas {}x{}, x {:?}, y {:?}",
            width, height, canvas_width, canvas_height, xlimits, ylimits
        );

        Ok(Self {
            canvas_width: canvas_width as u32,
            canvas_height: canvas_height as u32,
            xlimits,
            ylimits,
            xtick_labels,
            ytick_labels,
            yticks_width,
        })
    }
}

fn tick_label(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot(width: u16, height: u16) -> Plot {
        let mut p = Plot::new()
            .with_styler(Styler::plain())
            .with_terminal_size(150, 35);
        p.set_width(Size::Cells(width)).set_height(Size::Cells(height));
        p
    }

    #[test]
    fn test_add_incompatible_sizes() {
        let mut p = Plot::new();
        assert!(matches!(
            p.add(&[1.0, 2.0], &[3.0], ""),
            Err(PlotError::LengthMismatch { .. })
        ));
        assert!(p.add(&[1.0, 2.0], &[3.0, 4.0, 5.0], "").is_err());
        assert!(p.series().is_empty());
    }

    #[test]
    fn test_default_colors_cycle() {
        let mut p = Plot::new();
        p.add_y(&[1.0, 2.0], "").unwrap();
        p.add_y(&[1.0, 2.0], "m").unwrap();
        p.add_y(&[1.0, 2.0], "x").unwrap();
        let colors: Vec<Color> = p.series().iter().map(|s| s.color).collect();
        assert_eq!(colors, vec![Color::Red, Color::Magenta, Color::Green]);
        assert_eq!(p.series()[2].style, SeriesStyle::Points);
        assert_eq!(p.series()[0].xs, vec![0.0, 1.0]);
    }

    #[test]
    fn test_sizes() {
        let mut p = Plot::new().with_terminal_size(150, 35);
        assert_eq!((p.width(), p.height()), (75, 17));
        p.set_width(Size::Full).set_height(Size::Full);
        assert_eq!((p.width(), p.height()), (150, 34));
    }

    #[test]
    fn test_frame_dimensions() {
        let mut p = plot(20, 10);
        p.add(&[0.0, 1.0], &[0.0, 1.0], "").unwrap();
        let lines = p.lines().unwrap();
        // top border, 7 canvas rows, bottom border, x ticks
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with('\u{250c}'));
        assert!(lines[8].starts_with('\u{2514}'));
        // y ticks "0" and "1" take one column
        assert_eq!(lines[0].chars().count(), 20 - 1);
        assert!(lines[1].ends_with('1'));
        assert!(lines[7].ends_with('0'));
        assert_eq!(lines[9], format!(" 0{}1", " ".repeat(15)));
    }

    #[test]
    fn test_title_and_legend() {
        let mut p = plot(30, 10);
        p.add_y(&[1.0, 3.0, 2.0], "").unwrap();
        p.add_y(&[2.0, 1.0, 3.0], "").unwrap();
        p.set_legend(vec![None, Some("cos".into())]);
        p.set_title("Trig");
        let lines = p.lines().unwrap();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].trim_start().starts_with("Trig"));
        assert!(lines[2].ends_with(" cos"));
        assert!(!lines[3].ends_with(" cos"));
    }

    #[test]
    fn test_xlabel_centered() {
        let mut p = plot(20, 6);
        p.add(&[0.0, 9.0], &[0.0, 1.0], "").unwrap();
        p.set_xlabel("x");
        let last = p.lines().unwrap().pop().unwrap();
        assert_eq!(last.chars().count(), 1 + 17);
        assert!(last.starts_with(" 0"));
        assert!(last.ends_with('9'));
        assert!(last.contains(" x "));
    }

    #[test]
    fn test_layout_too_small() {
        let mut p = plot(4, 3);
        p.add_y(&[1.0, 2.0], "").unwrap();
        assert!(matches!(p.lines(), Err(PlotError::LayoutTooSmall { .. })));
    }

    #[test]
    fn test_empty_plot() {
        assert!(matches!(plot(20, 10).lines(), Err(PlotError::EmptyPlot)));
    }

    #[test]
    fn test_reference_lines_span_canvas() {
        let mut p = plot(12, 8);
        p.set_encoding(Encoding::Dot);
        p.add(&[0.0, 10.0], &[0.0, 0.0], "x").unwrap();
        p.set_ylimits(Limits::Fixed(-1.0, 1.0));
        p.xline(0.5);
        let lines = p.lines().unwrap();
        // canvas 8 wide: 12 - 2 (ytick "-1") - 2
        let body = &lines[1..6];
        let full = body
            .iter()
            .filter(|l| l.chars().skip(1).take(8).all(|c| c != ' '))
            .count();
        assert_eq!(full, 1);
    }

    #[test]
    fn test_styled_frame() {
        let mut p = Plot::new()
            .with_styler(Styler::new(true))
            .with_terminal_size(80, 24);
        p.set_width(Size::Cells(10)).set_height(Size::Cells(5));
        p.add_y(&[1.0, 2.0], "").unwrap();
        let lines = p.lines().unwrap();
        assert!(lines[0].starts_with("\x1b[90m\u{250c}"));
        assert!(lines[1].contains("\x1b[31m"));
    }

    #[test]
    fn test_blank_keeps_settings() {
        let mut p = plot(20, 10);
        p.set_encoding(Encoding::Density).add_y(&[1.0, 2.0], "").unwrap();
        let blank = p.blank();
        assert!(blank.series().is_empty());
        assert_eq!(blank.encoding(), Encoding::Density);
        assert_eq!(blank.width(), 20);
    }
}
