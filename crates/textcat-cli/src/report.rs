//! Plain text output for classification results and validation tallies.

use std::collections::BTreeMap;
use std::io::{self, Write};

use textcat_runtime::{CategoryTally, ClassificationResults};

/// One `<path>: <category>` line per document, in path order.
pub fn write_results<W: Write>(out: &mut W, results: &ClassificationResults) -> io::Result<()> {
    for (path, category) in results {
        writeln!(out, "{}: {}", path.display(), category)?;
    }
    Ok(())
}

/// Counts and scores per category.
pub fn write_tallies<W: Write>(
    out: &mut W,
    tallies: &BTreeMap<String, CategoryTally>,
) -> io::Result<()> {
    for (category, stats) in tallies {
        writeln!(out, "{}: {}", category, stats)?;
        writeln!(
            out,
            "{}: Balanced F measure: {:.4} precision: {:.4} recall: {:.4}",
            category,
            stats.f_measure(),
            stats.precision(),
            stats.recall()
        )?;
    }
    Ok(())
}
