//! Salary boxplot rendered as a standalone SVG document.
//!
//! One box per category spanning Q1..Q3 with a median line, whiskers to the
//! observed min and max, and a red diamond at the mean. Dashed reference lines
//! are drawn every [`GRIDLINE_STEP`] up to [`GRIDLINE_COUNT`] lines.
//! Output is fully determined by the input so identical data yields
//! byte-identical documents.

use std::fmt::Write;

use crate::config::{GRIDLINE_COUNT, GRIDLINE_STEP};

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 90.0;
const BOX_FILL_RATIO: f64 = 0.6;

/// Five-number summary and mean of one category.
///
/// Statistics of an empty category are NaN; its slot is labelled but left
/// blank.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub label: String,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
}

impl BoxSummary {
    fn is_drawable(&self) -> bool {
        [self.min, self.q1, self.median, self.q3, self.max]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Vertical mapping from salary to pixel row.
struct YScale {
    top: f64,
    max: f64,
}

impl YScale {
    fn new(boxes: &[BoxSummary]) -> Self {
        let data_max = boxes
            .iter()
            .filter(|b| b.is_drawable())
            .map(|b| b.max.max(b.mean))
            .filter(|v| v.is_finite())
            .fold(0.0f64, f64::max);
        let grid_max = GRIDLINE_STEP * GRIDLINE_COUNT as f64;
        // Headroom of one step above whichever is higher
        let top = (data_max.max(grid_max) / GRIDLINE_STEP).ceil() * GRIDLINE_STEP + GRIDLINE_STEP;
        Self {
            top,
            max: HEIGHT - MARGIN_BOTTOM,
        }
    }

    fn y(&self, value: f64) -> f64 {
        let plot_height = self.max - MARGIN_TOP;
        self.max - (value.max(0.0) / self.top) * plot_height
    }
}

/// Render a boxplot of salary by `variable`, one box per summary in order.
pub fn render_boxplot(variable: &str, boxes: &[BoxSummary]) -> String {
    let scale = YScale::new(boxes);
    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let slot = plot_width / boxes.len().max(1) as f64;
    let box_width = slot * BOX_FILL_RATIO;

    let mut svg = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = WIDTH,
        h = HEIGHT
    );
    let _ = writeln!(
        svg,
        r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        WIDTH, HEIGHT
    );
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="30" font-size="18" text-anchor="middle">Salário por {}</text>"#,
        WIDTH / 2.0,
        escape_xml(variable)
    );

    // Axes
    let _ = writeln!(
        svg,
        r#"<line x1="{x:.1}" y1="{t:.1}" x2="{x:.1}" y2="{b:.1}" stroke="black"/>"#,
        x = MARGIN_LEFT,
        t = MARGIN_TOP,
        b = scale.max
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{l:.1}" y1="{y:.1}" x2="{r:.1}" y2="{y:.1}" stroke="black"/>"#,
        l = MARGIN_LEFT,
        r = WIDTH - MARGIN_RIGHT,
        y = scale.max
    );
    let _ = writeln!(
        svg,
        r#"<text x="20" y="{:.1}" font-size="13" text-anchor="middle" transform="rotate(-90 20 {:.1})">R$</text>"#,
        (MARGIN_TOP + scale.max) / 2.0,
        (MARGIN_TOP + scale.max) / 2.0
    );
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" font-size="13" text-anchor="middle">{}</text>"#,
        MARGIN_LEFT + plot_width / 2.0,
        HEIGHT - 15.0,
        escape_xml(variable)
    );

    // Reference lines with tick labels
    for i in 1..=GRIDLINE_COUNT {
        let value = GRIDLINE_STEP * i as f64;
        let y = scale.y(value);
        let _ = writeln!(
            svg,
            r##"<line class="gridline" x1="{l:.1}" y1="{y:.1}" x2="{r:.1}" y2="{y:.1}" stroke="#808080" stroke-width="1" stroke-dasharray="6,4" stroke-opacity="0.5"/>"##,
            l = MARGIN_LEFT,
            r = WIDTH - MARGIN_RIGHT,
            y = y
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" font-size="10" text-anchor="end">{}</text>"#,
            MARGIN_LEFT - 6.0,
            y + 3.0,
            value as u64
        );
    }

    for (i, summary) in boxes.iter().enumerate() {
        let center = MARGIN_LEFT + slot * (i as f64 + 0.5);
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" font-size="10" text-anchor="middle">{}</text>"#,
            center,
            scale.max + 18.0,
            escape_xml(&summary.label)
        );
        if !summary.is_drawable() {
            continue;
        }
        write_box(&mut svg, &scale, center, box_width, summary, coolwarm(i, boxes.len()));
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_box(
    svg: &mut String,
    scale: &YScale,
    center: f64,
    box_width: f64,
    summary: &BoxSummary,
    fill: (u8, u8, u8),
) {
    let left = center - box_width / 2.0;
    let (y_min, y_q1, y_med, y_q3, y_max) = (
        scale.y(summary.min),
        scale.y(summary.q1),
        scale.y(summary.median),
        scale.y(summary.q3),
        scale.y(summary.max),
    );
    let cap = box_width / 4.0;

    let _ = writeln!(svg, r#"<g class="box">"#);
    // Whiskers
    let _ = writeln!(
        svg,
        r#"<line x1="{c:.1}" y1="{a:.1}" x2="{c:.1}" y2="{b:.1}" stroke="black"/>"#,
        c = center,
        a = y_q3,
        b = y_max
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{c:.1}" y1="{a:.1}" x2="{c:.1}" y2="{b:.1}" stroke="black"/>"#,
        c = center,
        a = y_q1,
        b = y_min
    );
    for y in [y_min, y_max] {
        let _ = writeln!(
            svg,
            r#"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="black"/>"#,
            center - cap,
            center + cap,
            y = y
        );
    }
    let _ = writeln!(
        svg,
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="rgb({},{},{})" stroke="black"/>"#,
        left,
        y_q3,
        box_width,
        (y_q1 - y_q3).max(0.0),
        fill.0,
        fill.1,
        fill.2
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="black" stroke-width="2"/>"#,
        left,
        left + box_width,
        y = y_med
    );
    if summary.mean.is_finite() {
        let y_mean = scale.y(summary.mean);
        let r = 5.0;
        let _ = writeln!(
            svg,
            r#"<polygon class="mean" points="{cx:.1},{t:.1} {rx:.1},{cy:.1} {cx:.1},{b:.1} {lx:.1},{cy:.1}" fill="red" stroke="black"/>"#,
            cx = center,
            cy = y_mean,
            t = y_mean - r,
            b = y_mean + r,
            lx = center - r,
            rx = center + r
        );
    }
    let _ = writeln!(svg, "</g>");
}

/// Diverging blue-to-red palette, evaluated at slot `i` of `n`.
fn coolwarm(i: usize, n: usize) -> (u8, u8, u8) {
    const COLD: (f64, f64, f64) = (59.0, 76.0, 192.0);
    const MID: (f64, f64, f64) = (221.0, 221.0, 221.0);
    const WARM: (f64, f64, f64) = (180.0, 4.0, 38.0);

    let t = if n <= 1 {
        0.5
    } else {
        i as f64 / (n - 1) as f64
    };
    let (from, to, s) = if t < 0.5 {
        (COLD, MID, t * 2.0)
    } else {
        (MID, WARM, (t - 0.5) * 2.0)
    };
    let lerp = |a: f64, b: f64| (a + (b - a) * s).round() as u8;
    (lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(label: &str, values: [f64; 6]) -> BoxSummary {
        BoxSummary {
            label: label.to_string(),
            min: values[0],
            q1: values[1],
            median: values[2],
            q3: values[3],
            max: values[4],
            mean: values[5],
        }
    }

    #[test]
    fn test_render_structure() {
        let boxes = vec![
            summary("Analista", [4000.0, 5000.0, 6000.0, 7000.0, 9000.0, 6100.0]),
            summary("Cientista", [8000.0, 9000.0, 9500.0, 12000.0, 20000.0, 11000.0]),
        ];
        let svg = render_boxplot("Cargo", &boxes);

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Salário por Cargo"));
        assert!(svg.contains(">R$</text>"));
        assert_eq!(svg.matches(r#"class="gridline""#).count(), GRIDLINE_COUNT);
        assert_eq!(svg.matches(r#"class="box""#).count(), 2);
        assert_eq!(svg.matches(r#"class="mean""#).count(), 2);
        assert!(svg.contains(">40000</text>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let boxes = vec![summary("A", [1.0, 2.0, 3.0, 4.0, 5.0, 3.0])];
        assert_eq!(render_boxplot("Genero", &boxes), render_boxplot("Genero", &boxes));
    }

    #[test]
    fn test_empty_category_has_label_but_no_box() {
        let boxes = vec![
            summary("Com dados", [1000.0, 2000.0, 3000.0, 4000.0, 5000.0, 3000.0]),
            summary("Sem dados", [f64::NAN; 6]),
        ];
        let svg = render_boxplot("Raça", &boxes);
        assert!(svg.contains(">Sem dados</text>"));
        assert_eq!(svg.matches(r#"class="box""#).count(), 1);
    }

    #[test]
    fn test_labels_are_escaped() {
        let boxes = vec![summary("P&D <TI>", [1.0, 2.0, 3.0, 4.0, 5.0, 3.0])];
        let svg = render_boxplot("Cargo", &boxes);
        assert!(svg.contains("P&amp;D &lt;TI&gt;"));
    }

    #[test]
    fn test_scale_covers_large_salaries() {
        let boxes = vec![summary("Diretor", [30000.0, 40000.0, 45000.0, 50000.0, 62000.0, 46000.0])];
        let scale = YScale::new(&boxes);
        assert!(scale.top > 62000.0);
        assert!(scale.y(62000.0) > MARGIN_TOP);
    }

    #[test]
    fn test_coolwarm_endpoints() {
        assert_eq!(coolwarm(0, 3), (59, 76, 192));
        assert_eq!(coolwarm(1, 3), (221, 221, 221));
        assert_eq!(coolwarm(2, 3), (180, 4, 38));
    }
}
