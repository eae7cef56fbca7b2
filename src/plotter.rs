// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Chart, Error, Series};

use std::path::Path;

/// Result files looked for, in plotting order.
pub const CANDIDATES: [&str; 4] = [
    "result_time_matrix_hash.txt",
    "result_time_matrix_b.txt",
    "result_time_vector_hash.txt",
    "result_time_vector_b.txt",
];

pub const X_DESC: &str = "Number of Elements";
pub const Y_DESC: &str = "Time";
pub const CAPTION: &str = "Performance Graphs";

/// Plot every candidate present in `dir` and finalize the chart. Absent
/// candidates are skipped; the first unreadable or malformed file aborts.
pub fn collect(dir: &Path) -> Result<Chart, Error> {
    let mut chart = Chart::new();

    for name in CANDIDATES.iter() {
        let path = dir.join(name);
        if !path.exists() {
            trace!("skipping {}: not found", path.display());
            continue;
        }
        chart.plot(Series::load(&path, name)?);
    }

    chart.x_desc(X_DESC).y_desc(Y_DESC).legend().caption(CAPTION);

    info!("collected {} series", chart.series().len());

    Ok(chart)
}
