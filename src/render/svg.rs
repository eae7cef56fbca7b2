// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Chart, Error};

use plotters::coord::Shift;
use plotters::prelude::*;

use std::path::Path;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

const COLOURS: &[RGBColor] = &[
    hexcolour!(0xAA0000),
    hexcolour!(0x0000FF),
    hexcolour!(0x117733),
    hexcolour!(0xDDCC77),
    hexcolour!(0x332288),
    hexcolour!(0x888888),
    hexcolour!(0x88CCEE),
    hexcolour!(0x882255),
];

const FONT: &str = "sans-serif";

/// Render `chart` as an SVG image at `path`.
pub fn save(chart: &Chart, path: impl AsRef<Path>, size: (u32, u32)) -> Result<(), Error> {
    let path = path.as_ref();
    let root = SVGBackend::new(path, size).into_drawing_area();
    draw(chart, &root)?;
    root.present().map_err(render_error)?;

    info!("saved chart to {}", path.display());
    Ok(())
}

/// Render `chart` into an SVG document held in memory.
pub fn to_string(chart: &Chart, size: (u32, u32)) -> Result<String, Error> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, size).into_drawing_area();
        draw(chart, &root)?;
        root.present().map_err(render_error)?;
    }
    Ok(buffer)
}

fn draw<DB: DrawingBackend>(chart: &Chart, root: &DrawingArea<DB, Shift>) -> Result<(), Error> {
    root.fill(&WHITE).map_err(render_error)?;

    let bounds = chart.bounds();
    if !bounds.has_finite_span() {
        return Err(Error::Render(format!(
            "axis span overflows: x {:?}, y {:?}",
            bounds.x, bounds.y
        )));
    }

    let mut builder = ChartBuilder::on(root);
    builder
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 100)
        .set_label_area_size(LabelAreaPosition::Bottom, 60);
    if let Some(caption) = chart.title() {
        builder.caption(caption, (FONT, 40));
    }
    let mut context = builder
        .build_cartesian_2d(bounds.x, bounds.y)
        .map_err(render_error)?;

    let mut mesh = context.configure_mesh();
    mesh.x_label_style((FONT, 20)).y_label_style((FONT, 20));
    if let Some(x_desc) = chart.x_label() {
        mesh.x_desc(x_desc);
    }
    if let Some(y_desc) = chart.y_label() {
        mesh.y_desc(y_desc);
    }
    mesh.draw().map_err(render_error)?;

    for (i, series) in chart.series().iter().enumerate() {
        let colour = COLOURS[i % COLOURS.len()];
        let mut segments = series.segments().into_iter();

        // the first run carries the legend entry, even when it is empty
        let first = segments.next().unwrap_or_default();
        context
            .draw_series(LineSeries::new(first, colour.stroke_width(2)))
            .map_err(render_error)?
            .label(series.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], colour.stroke_width(2))
            });

        for segment in segments {
            context
                .draw_series(LineSeries::new(segment, colour.stroke_width(2)))
                .map_err(render_error)?;
        }
    }

    if chart.has_legend() {
        context
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()
            .map_err(render_error)?;
    }

    Ok(())
}

fn render_error<E: std::error::Error>(e: E) -> Error {
    Error::Render(e.to_string())
}
