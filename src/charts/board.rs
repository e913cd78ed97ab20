//! The four dashboard chart panels

use std::cell::RefCell;
use std::rc::Rc;

use super::renderer::{draw_large_chart, draw_line_chart};
use super::series::generate_series;
use super::surface::DrawSurface;
use crate::models::{LARGE_CHART_POINTS, SMALL_CHART_POINTS};
use crate::state::SharedRandom;

/// How a panel is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStyle {
    /// One filled line
    Line { color: &'static str },
    /// Three overlaid lines derived from one series, with axes
    Layered { colors: [&'static str; 3] },
}

/// Static description of a dashboard chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSpec {
    pub canvas_id: &'static str,
    pub title: &'static str,
    pub style: ChartStyle,
    pub points: usize,
}

pub const DASHBOARD_CHARTS: [ChartSpec; 4] = [
    ChartSpec {
        canvas_id: "dailyUsageChart",
        title: "Daily Energy Usage",
        style: ChartStyle::Line { color: "#f1c40f" },
        points: SMALL_CHART_POINTS,
    },
    ChartSpec {
        canvas_id: "dailyReclaimedChart",
        title: "Daily Energy Reclaimed",
        style: ChartStyle::Line { color: "#f39c12" },
        points: SMALL_CHART_POINTS,
    },
    ChartSpec {
        canvas_id: "energyUsageChart",
        title: "Energy Usage",
        style: ChartStyle::Layered {
            colors: ["#3498db", "#2980b9", "#1abc9c"],
        },
        points: LARGE_CHART_POINTS,
    },
    ChartSpec {
        canvas_id: "energyReclaimedChart",
        title: "Energy Reclaimed",
        style: ChartStyle::Layered {
            colors: ["#9b59b6", "#8e44ad", "#e74c3c"],
        },
        points: LARGE_CHART_POINTS,
    },
];

pub fn chart_spec(canvas_id: &str) -> Option<&'static ChartSpec> {
    DASHBOARD_CHARTS.iter().find(|c| c.canvas_id == canvas_id)
}

/// Synthesize a fresh series for `spec` and draw it
pub fn draw_chart(spec: &ChartSpec, surface: &mut dyn DrawSurface, rng: &SharedRandom) {
    let series = generate_series(spec.points, rng);

    match spec.style {
        ChartStyle::Line { color } => draw_line_chart(surface, &series, color),
        ChartStyle::Layered { colors } => draw_large_chart(surface, &series, &colors, rng),
    }
}

struct ChartPanel {
    spec: &'static ChartSpec,
    surface: Box<dyn DrawSurface>,
}

/// Charts attached to drawing surfaces, redrawn together on each data tick.
///
/// Panels attach as their canvases mount; a panel without a surface is
/// simply skipped.
#[derive(Clone, Default)]
pub struct ChartBoard {
    panels: Rc<RefCell<Vec<ChartPanel>>>,
}

impl ChartBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a surface to the chart with `canvas_id`, replacing any previous one
    pub fn attach(&self, canvas_id: &str, surface: Box<dyn DrawSurface>) -> bool {
        let Some(spec) = chart_spec(canvas_id) else {
            log::warn!("No chart registered for canvas {}", canvas_id);
            return false;
        };

        let mut panels = self.panels.borrow_mut();
        panels.retain(|p| p.spec.canvas_id != canvas_id);
        panels.push(ChartPanel { spec, surface });
        true
    }

    pub fn detach(&self, canvas_id: &str) {
        self.panels
            .borrow_mut()
            .retain(|p| p.spec.canvas_id != canvas_id);
    }

    pub fn attached(&self) -> Vec<&'static str> {
        self.panels
            .borrow()
            .iter()
            .map(|p| p.spec.canvas_id)
            .collect()
    }

    /// Draw one chart right away, e.g. as its canvas mounts
    pub fn redraw_chart(&self, canvas_id: &str, rng: &SharedRandom) {
        let mut panels = self.panels.borrow_mut();
        if let Some(panel) = panels.iter_mut().find(|p| p.spec.canvas_id == canvas_id) {
            draw_chart(panel.spec, panel.surface.as_mut(), rng);
        }
    }

    /// Regenerate and redraw every attached chart
    pub fn redraw(&self, rng: &SharedRandom) {
        let mut panels = self.panels.borrow_mut();
        log::debug!("Redrawing {} charts", panels.len());

        for panel in panels.iter_mut() {
            draw_chart(panel.spec, panel.surface.as_mut(), rng);
        }
    }
}
