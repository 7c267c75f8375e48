//! SVG rendering for the timing chart: elapsed time against target
//! amount, successes as a solid line with circle markers, failures as a
//! dashed line with x markers. Callers pass each series already sorted
//! by target.

use crate::domain::model::TimingPoint;
use std::fmt::Write;

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 170.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 70.0;
const TICKS: usize = 5;

const TITLE: &str = "Elapsed Time vs Total Amount for Knapsack Problem";
const X_LABEL: &str = "Total Amount";
const Y_LABEL: &str = "Elapsed Time (seconds)";

struct Scale {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Scale {
    fn from_points(points: &[&TimingPoint]) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_max = 0.0f64;
        for p in points {
            x_min = x_min.min(p.target as f64);
            x_max = x_max.max(p.target as f64);
            y_max = y_max.max(p.elapsed_secs);
        }
        if points.is_empty() {
            x_min = 0.0;
            x_max = 1.0;
        }
        if x_max <= x_min {
            x_max = x_min + 1.0;
        }
        if y_max <= 0.0 {
            y_max = 1.0;
        }
        Self {
            x_min,
            x_max,
            y_min: 0.0,
            y_max,
        }
    }

    fn x(&self, target: i64) -> f64 {
        let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        MARGIN_LEFT + (target as f64 - self.x_min) / (self.x_max - self.x_min) * plot_w
    }

    fn y(&self, elapsed: f64) -> f64 {
        let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        MARGIN_TOP + plot_h - (elapsed - self.y_min) / (self.y_max - self.y_min) * plot_h
    }
}

pub fn render(successes: &[TimingPoint], failures: &[TimingPoint]) -> String {
    let all: Vec<&TimingPoint> = successes.iter().chain(failures.iter()).collect();
    let scale = Scale::from_points(&all);

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = WIDTH,
        h = HEIGHT
    );
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

    draw_grid_and_axes(&mut svg, &scale);
    draw_series(&mut svg, &scale, successes, "green", false);
    draw_series(&mut svg, &scale, failures, "red", true);
    draw_legend(&mut svg);

    let _ = write!(
        svg,
        "<text x=\"{}\" y=\"30\" text-anchor=\"middle\" font-size=\"18\" font-family=\"sans-serif\">{}</text>\n",
        WIDTH / 2.0,
        TITLE
    );
    svg.push_str("</svg>\n");
    svg
}

fn draw_grid_and_axes(svg: &mut String, scale: &Scale) {
    let left = MARGIN_LEFT;
    let right = WIDTH - MARGIN_RIGHT;
    let top = MARGIN_TOP;
    let bottom = HEIGHT - MARGIN_BOTTOM;

    for i in 0..=TICKS {
        let frac = i as f64 / TICKS as f64;

        let x_value = scale.x_min + (scale.x_max - scale.x_min) * frac;
        let x = left + (right - left) * frac;
        let _ = write!(
            svg,
            "<line x1=\"{x}\" y1=\"{top}\" x2=\"{x}\" y2=\"{bottom}\" stroke=\"#ddd\"/>\n\
             <text x=\"{x}\" y=\"{ty}\" text-anchor=\"middle\" font-size=\"12\" font-family=\"sans-serif\">{v:.0}</text>\n",
            ty = bottom + 20.0,
            v = x_value
        );

        let y_value = scale.y_min + (scale.y_max - scale.y_min) * frac;
        let y = bottom - (bottom - top) * frac;
        let _ = write!(
            svg,
            "<line x1=\"{left}\" y1=\"{y}\" x2=\"{right}\" y2=\"{y}\" stroke=\"#ddd\"/>\n\
             <text x=\"{tx}\" y=\"{y}\" text-anchor=\"end\" font-size=\"12\" font-family=\"sans-serif\">{v:.4}</text>\n",
            tx = left - 8.0,
            v = y_value
        );
    }

    let _ = write!(
        svg,
        "<line x1=\"{left}\" y1=\"{bottom}\" x2=\"{right}\" y2=\"{bottom}\" stroke=\"black\"/>\n\
         <line x1=\"{left}\" y1=\"{top}\" x2=\"{left}\" y2=\"{bottom}\" stroke=\"black\"/>\n"
    );

    let _ = write!(
        svg,
        "<text x=\"{x}\" y=\"{y}\" text-anchor=\"middle\" font-size=\"14\" font-family=\"sans-serif\">{label}</text>\n",
        x = (left + right) / 2.0,
        y = HEIGHT - 20.0,
        label = X_LABEL
    );
    let _ = write!(
        svg,
        "<text x=\"25\" y=\"{y}\" text-anchor=\"middle\" font-size=\"14\" font-family=\"sans-serif\" transform=\"rotate(-90 25 {y})\">{label}</text>\n",
        y = (top + bottom) / 2.0,
        label = Y_LABEL
    );
}

fn draw_series(
    svg: &mut String,
    scale: &Scale,
    points: &[TimingPoint],
    color: &str,
    dashed: bool,
) {
    if points.is_empty() {
        return;
    }

    if points.len() > 1 {
        let coords: Vec<String> = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", scale.x(p.target), scale.y(p.elapsed_secs)))
            .collect();
        let dash = if dashed { " stroke-dasharray=\"6 4\"" } else { "" };
        let _ = write!(
            svg,
            "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"{}/>\n",
            coords.join(" "),
            color,
            dash
        );
    }

    for p in points {
        let x = scale.x(p.target);
        let y = scale.y(p.elapsed_secs);
        if dashed {
            // x marker
            let _ = write!(
                svg,
                "<path d=\"M {x0:.2} {y0:.2} L {x1:.2} {y1:.2} M {x0:.2} {y1:.2} L {x1:.2} {y0:.2}\" stroke=\"{color}\" stroke-width=\"2\"/>\n",
                x0 = x - 4.0,
                y0 = y - 4.0,
                x1 = x + 4.0,
                y1 = y + 4.0,
            );
        } else {
            // o marker
            let _ = write!(
                svg,
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"4\" fill=\"{}\"/>\n",
                x, y, color
            );
        }
    }
}

fn draw_legend(svg: &mut String) {
    let x = WIDTH - MARGIN_RIGHT + 20.0;
    let y = MARGIN_TOP + 10.0;

    let _ = write!(
        svg,
        "<line x1=\"{x}\" y1=\"{y}\" x2=\"{x2}\" y2=\"{y}\" stroke=\"green\" stroke-width=\"2\"/>\n\
         <circle cx=\"{cx}\" cy=\"{y}\" r=\"4\" fill=\"green\"/>\n\
         <text x=\"{tx}\" y=\"{ty}\" font-size=\"13\" font-family=\"sans-serif\">Successes</text>\n",
        x2 = x + 30.0,
        cx = x + 15.0,
        tx = x + 38.0,
        ty = y + 4.0,
    );

    let y = y + 24.0;
    let _ = write!(
        svg,
        "<line x1=\"{x}\" y1=\"{y}\" x2=\"{x2}\" y2=\"{y}\" stroke=\"red\" stroke-width=\"2\" stroke-dasharray=\"6 4\"/>\n\
         <path d=\"M {mx0} {my0} L {mx1} {my1} M {mx0} {my1} L {mx1} {my0}\" stroke=\"red\" stroke-width=\"2\"/>\n\
         <text x=\"{tx}\" y=\"{ty}\" font-size=\"13\" font-family=\"sans-serif\">Failures</text>\n",
        x2 = x + 30.0,
        mx0 = x + 11.0,
        my0 = y - 4.0,
        mx1 = x + 19.0,
        my1 = y + 4.0,
        tx = x + 38.0,
        ty = y + 4.0,
    );
}
