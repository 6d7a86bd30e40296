use std::io::Write;

use tickscript_core::chart::encode_base64;
use tickscript_core::ClusterAssignment;

/// The whole chart as a single base64 line.
pub fn write_chart(out: &mut impl Write, png: &[u8]) -> std::io::Result<()> {
    writeln!(out, "{}", encode_base64(png))?;
    out.flush()
}

/// One `cluster ticker r,g,b` line per assignment, in the order given.
pub fn write_clusters(
    out: &mut impl Write,
    assignments: &[ClusterAssignment],
) -> std::io::Result<()> {
    for assignment in assignments {
        writeln!(
            out,
            "{} {} {}",
            assignment.cluster, assignment.ticker, assignment.color
        )?;
    }
    out.flush()
}
