// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Text-mode rendering of a chart, for viewing straight from the terminal.

use crate::Chart;

use std::fmt::Write;

/// Columns reserved left of the y axis for its labels.
const MARGIN: usize = 10;

/// Widest value printed in full on the axis range lines.
const RANGE_WIDTH: usize = 16;

const POINT: char = 'o';
const GLYPHS: &[char] = &['*', '#', '+', '%', '@', '&', '=', '~'];

/// A fixed-size grid of characters. The plotting area is `width` by `height`
/// cells; the axes and labels sit outside it.
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(2);
        let height = height.max(2);
        let mut canvas = Self {
            width,
            height,
            cells: vec![vec![' '; MARGIN + 1 + width]; height + 1],
        };
        canvas.draw_axes();
        canvas
    }

    fn draw_axes(&mut self) {
        for row in 0..self.height {
            self.cells[row][MARGIN] = '|';
        }
        for cell in self.cells[self.height].iter_mut().skip(MARGIN) {
            *cell = '-';
        }
        self.cells[0][MARGIN] = '^';
        self.cells[self.height][MARGIN] = '+';
        self.cells[self.height][MARGIN + self.width] = '>';
    }

    /// Map a fraction of each axis (0.0 ..= 1.0) onto a plotting cell.
    fn cell(&self, fx: f64, fy: f64) -> (i64, i64) {
        let col = (fx * (self.width - 1) as f64).round() as i64;
        let row = ((1.0 - fy) * (self.height - 1) as f64).round() as i64;
        (MARGIN as i64 + 1 + col, row)
    }

    fn in_plot(&self, col: i64, row: i64) -> bool {
        col > MARGIN as i64
            && (col as usize) <= MARGIN + self.width
            && row >= 0
            && (row as usize) < self.height
    }

    fn get(&self, col: i64, row: i64) -> Option<char> {
        if self.in_plot(col, row) {
            Some(self.cells[row as usize][col as usize])
        } else {
            None
        }
    }

    fn set(&mut self, col: i64, row: i64, c: char) {
        if self.in_plot(col, row) {
            self.cells[row as usize][col as usize] = c;
        }
    }

    /// Bresenham line between two cells. Points already marked are kept.
    fn line(&mut self, from: (i64, i64), to: (i64, i64), glyph: char) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = (to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            if self.get(x, y).map_or(false, |c| c != POINT) {
                self.set(x, y, glyph);
            }
            if (x, y) == to {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn label(&mut self, row: usize, text: &str) {
        for (col, c) in text.chars().take(MARGIN - 1).enumerate() {
            self.cells[row][col] = c;
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_owned())
    }
}

/// Draw every series of `chart` and return the text to print.
pub fn render(chart: &Chart, width: usize, height: usize) -> String {
    let bounds = chart.bounds();
    let mut canvas = Canvas::new(width, height);

    for (i, series) in chart.series().iter().enumerate() {
        let glyph = GLYPHS[i % GLYPHS.len()];
        for segment in series.segments() {
            let cells: Vec<_> = segment
                .iter()
                .map(|&(x, y)| {
                    let (fx, fy) = bounds.fraction(x, y);
                    canvas.cell(fx, fy)
                })
                .collect();

            for &(col, row) in &cells {
                canvas.set(col, row, POINT);
            }
            for pair in cells.windows(2) {
                canvas.line(pair[0], pair[1], glyph);
            }
        }
    }

    canvas.label(0, &compact(bounds.y.end, MARGIN - 1));
    let bottom = canvas.height - 1;
    canvas.label(bottom, &compact(bounds.y.start, MARGIN - 1));

    let mut out = String::new();
    if let Some(title) = chart.title() {
        let _ = writeln!(out, "{:^w$}", title, w = MARGIN + 1 + canvas.width);
    }
    for row in canvas.rows() {
        let _ = writeln!(out, "{}", row);
    }

    let _ = writeln!(
        out,
        "X: {} [{}, {}]",
        chart.x_label().unwrap_or("x"),
        compact(bounds.x.start, RANGE_WIDTH),
        compact(bounds.x.end, RANGE_WIDTH)
    );
    let _ = writeln!(
        out,
        "Y: {} [{}, {}]",
        chart.y_label().unwrap_or("y"),
        compact(bounds.y.start, RANGE_WIDTH),
        compact(bounds.y.end, RANGE_WIDTH)
    );

    if chart.has_legend() {
        let _ = writeln!(out, "Legend:");
        for (i, series) in chart.series().iter().enumerate() {
            let _ = writeln!(out, "  {} {}", GLYPHS[i % GLYPHS.len()], series.label());
        }
    }

    out
}

/// Two decimal places, or scientific notation when that is wider than
/// `width` characters.
fn compact(value: f64, width: usize) -> String {
    let fixed = format!("{:.2}", value);
    if fixed.len() <= width {
        fixed
    } else {
        format!("{:.2e}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Series;

    use std::path::Path;

    fn linear(label: &str) -> Series {
        let mut series = Series::new(label);
        for i in 0..5 {
            series.push(i as f64, (i * 100) as f64);
        }
        series
    }

    #[test]
    fn axes_frame_the_plot() {
        let canvas = Canvas::new(20, 5);
        let rows: Vec<_> = canvas.rows().collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].chars().nth(MARGIN), Some('^'));
        assert_eq!(rows[3].chars().nth(MARGIN), Some('|'));
        assert_eq!(rows[5].chars().nth(MARGIN), Some('+'));
        assert!(rows[5].ends_with('>'));
        assert_eq!(rows[5].chars().count(), MARGIN + 21);
    }

    #[test]
    fn line_keeps_points() {
        let mut canvas = Canvas::new(10, 10);
        canvas.set(15, 5, POINT);
        canvas.line((11, 5), (20, 5), '*');
        let rows: Vec<_> = canvas.rows().collect();
        let row: Vec<char> = rows[5].chars().collect();
        assert_eq!(row[11], '*');
        assert_eq!(row[15], POINT);
        assert_eq!(row[20], '*');
    }

    #[test]
    fn empty_chart_still_renders() {
        let mut chart = Chart::new();
        chart.x_desc("Number of Elements").y_desc("Time").legend().caption("Performance Graphs");

        let out = render(&chart, 40, 10);
        assert_eq!(out.lines().next().unwrap().trim(), "Performance Graphs");
        assert!(out.contains("X: Number of Elements [0.00, 1.00]"));
        assert!(out.contains("Y: Time [0.00, 1.00]"));
        assert!(out.ends_with("Legend:\n"));
        assert!(out.lines().skip(1).take(11).all(|row| !row.contains(POINT)));
    }

    #[test]
    fn series_corners_land_on_plot_corners() {
        let mut chart = Chart::new();
        chart.plot(linear("a.txt"));

        let out = render(&chart, 40, 10);
        let rows: Vec<&str> = out.lines().collect();
        // lowest sample at bottom left, highest at top right
        assert_eq!(rows[9].chars().nth(MARGIN + 1), Some(POINT));
        assert_eq!(rows[0].chars().nth(MARGIN + 40), Some(POINT));
        assert!(rows[0].starts_with("4.00"));
        assert!(rows[9].starts_with("0.00"));
        assert!(out.contains("X: x [0.00, 400.00]"));
    }

    #[test]
    fn legend_lists_series_with_glyphs() {
        let mut chart = Chart::new();
        chart.plot(linear("a.txt")).plot(linear("b.txt")).legend();

        let out = render(&chart, 40, 10);
        assert!(out.contains("  * a.txt\n"));
        assert!(out.contains("  # b.txt\n"));
    }

    fn parsed(content: &str) -> Chart {
        let mut chart = Chart::new();
        chart.plot(Series::parse(Path::new("a.txt"), "a.txt", content.as_bytes()).unwrap());
        chart
    }

    fn plotted_cells(out: &str, height: usize) -> usize {
        out.lines()
            .take(height)
            .flat_map(|row| row.chars().skip(MARGIN + 1))
            .filter(|&c| c != ' ')
            .count()
    }

    #[test]
    fn non_finite_samples_leave_a_gap() {
        let out = render(&parsed("1.0 10\nnan 20\n3.0 30\n"), 20, 5);
        let rows: Vec<&str> = out.lines().collect();
        // two isolated points and nothing joining them
        assert_eq!(rows[4].chars().nth(MARGIN + 1), Some(POINT));
        assert_eq!(rows[0].chars().nth(MARGIN + 20), Some(POINT));
        assert_eq!(plotted_cells(&out, 5), 2);
        assert!(out.contains("X: x [10.00, 30.00]"));
        assert!(out.contains("Y: y [1.00, 3.00]"));
    }

    #[test]
    fn extreme_samples_stay_on_the_canvas() {
        let out = render(&parsed("1e308 1\n-1e308 2\n"), 20, 5);
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows[0].chars().nth(MARGIN + 1), Some(POINT));
        assert_eq!(rows[4].chars().nth(MARGIN + 20), Some(POINT));
        assert!(rows[0].starts_with("1.00e308"));
        assert!(rows[4].starts_with("-1.00e308"));
        assert!(out.contains("Y: y [-1.00e308, 1.00e308]"));

        let out = render(&parsed("1.7e308 1\n"), 20, 5);
        assert_eq!(plotted_cells(&out, 5), 1);
        assert!(out.contains("Y: y [8.50e307, 1.80e308]"));
    }

    #[test]
    fn wide_labels_switch_to_scientific_notation() {
        assert_eq!(compact(1234.5, 9), "1234.50");
        assert_eq!(compact(1234567.89, 9), "1.23e6");
        assert_eq!(compact(-1e308, 9), "-1.00e308");
        assert_eq!(compact(f64::MAX, 9), "1.80e308");
    }
}
