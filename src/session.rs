//! Interactive plotting session
//!
//! Keeps the current plot between calls so that series can be layered with
//! `hold`, and remembers property changes across new plots until `reset`.

use std::io::Write;
use std::sync::Arc;

use tracing::debug;

use crate::canvas::Encoding;
use crate::errors::{PlotError, Result};
use crate::plot::{Limits, Plot, Size};

/// Properties applied to every plot of the session
#[derive(Debug, Clone, Default)]
struct Props {
    width: Option<Size>,
    height: Option<Size>,
    xlimits: Option<Limits>,
    ylimits: Option<Limits>,
    encoding: Option<Encoding>,
    legend: Option<Vec<Option<String>>>,
    title: Option<String>,
    xlabel: Option<String>,
}

impl Props {
    fn apply(&self, plot: &mut Plot) {
        if let Some(width) = self.width {
            plot.set_width(width);
        }
        if let Some(height) = self.height {
            plot.set_height(height);
        }
        if let Some(limits) = self.xlimits {
            plot.set_xlimits(limits);
        }
        if let Some(limits) = self.ylimits {
            plot.set_ylimits(limits);
        }
        if let Some(encoding) = self.encoding {
            plot.set_encoding(encoding);
        }
        if let Some(legend) = &self.legend {
            plot.set_legend(legend.clone());
        }
        if let Some(title) = &self.title {
            plot.set_title(title.clone());
        }
        if let Some(xlabel) = &self.xlabel {
            plot.set_xlabel(xlabel.clone());
        }
    }
}

/// Stateful plotting session writing to `W`
#[derive(Debug)]
pub struct Session<W: Write> {
    out: W,
    base: Plot,
    plot: Option<Plot>,
    hold: bool,
    props: Props,
}

impl<W: Write> Session<W> {
    pub fn new(out: W) -> Self {
        Self::with_base(out, Plot::new())
    }

    /// Session whose new plots start from the settings of `base`
    pub fn with_base(out: W, base: Plot) -> Self {
        Self {
            out,
            base: base.blank(),
            plot: None,
            hold: false,
            props: Props::default(),
        }
    }

    /// Add a series and redraw
    ///
    /// With hold on the series joins the current plot, otherwise it starts a
    /// new one.
    pub fn plot(&mut self, xs: Option<&[f64]>, ys: &[f64], opts: &str) -> Result<()> {
        let mut plot = match (&self.plot, self.hold) {
            (Some(current), true) => current.clone(),
            _ => self.base.clone(),
        };
        match xs {
            Some(xs) => plot.add(xs, ys, opts)?,
            None => plot.add_y(ys, opts)?,
        };
        debug!("Session plot now has {} series", plot.series().len());
        self.plot = Some(plot);
        self.redraw()
    }

    pub fn hold(&mut self, on: bool) {
        self.hold = on;
    }

    /// Hold from its textual form, `on` or `off`
    pub fn hold_str(&mut self, value: &str) -> Result<()> {
        match value {
            "on" => self.hold(true),
            "off" => self.hold(false),
            other => return Err(PlotError::UnknownHold(Arc::new(other.to_string()))),
        }
        Ok(())
    }

    pub fn is_holding(&self) -> bool {
        self.hold
    }

    /// Forget the plot, hold state and properties
    pub fn reset(&mut self) {
        self.plot = None;
        self.hold = false;
        self.props = Props::default();
    }

    /// Draw the current plot with the session properties, if there is one
    pub fn redraw(&mut self) -> Result<()> {
        if let Some(plot) = &mut self.plot {
            self.props.apply(plot);
            plot.draw(&mut self.out)?;
        }
        Ok(())
    }

    pub fn current_plot(&self) -> Option<&Plot> {
        self.plot.as_ref()
    }

    pub fn set_width(&mut self, width: Size) -> Result<()> {
        self.props.width = Some(width);
        self.redraw()
    }

    pub fn set_height(&mut self, height: Size) -> Result<()> {
        self.props.height = Some(height);
        self.redraw()
    }

    pub fn set_xlimits(&mut self, min: f64, max: f64) -> Result<()> {
        self.props.xlimits = Some(Limits::fixed(min, max)?);
        self.redraw()
    }

    pub fn set_ylimits(&mut self, min: f64, max: f64) -> Result<()> {
        self.props.ylimits = Some(Limits::fixed(min, max)?);
        self.redraw()
    }

    /// Encoding by name, e.g. `"dot"`
    pub fn set_encoding(&mut self, name: &str) -> Result<()> {
        self.props.encoding = Some(name.parse()?);
        self.redraw()
    }

    pub fn set_legend(&mut self, legend: Vec<Option<String>>) -> Result<()> {
        self.props.legend = Some(legend);
        self.redraw()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.props.title = Some(title.into());
        self.redraw()
    }

    pub fn set_xlabel(&mut self, xlabel: impl Into<String>) -> Result<()> {
        self.props.xlabel = Some(xlabel.into());
        self.redraw()
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
