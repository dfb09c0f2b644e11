use std::io::{self, Write};
use std::path::Path;

use shellmark::{AnnotateReport, UnmarkReport};

pub fn write_annotate_header(out: &mut impl Write, input: &Path, output: &Path) -> io::Result<()> {
    writeln!(out, "shellmark: shell syntax highlighting")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "input:  {}", input.display())?;
    writeln!(out, "output: {}", output.display())?;
    writeln!(out)
}

/// Block counts, one line per block in document order, then totals.
/// `output` is `None` for a dry run.
pub fn write_annotate_summary(
    out: &mut impl Write,
    report: &AnnotateReport,
    output: Option<&Path>,
) -> io::Result<()> {
    writeln!(out, "Found {} shell code block(s)", report.found)?;

    let mut lines: Vec<(usize, String)> = report
        .processed
        .iter()
        .map(|block| (block.ordinal, block.to_string()))
        .chain(
            report
                .skipped
                .iter()
                .map(|ordinal| (*ordinal, format!("skipped block {} (already highlighted)", ordinal))),
        )
        .collect();
    lines.sort_by_key(|(ordinal, _)| *ordinal);
    for (_, line) in &lines {
        writeln!(out, "  {}", line)?;
    }

    writeln!(out)?;
    writeln!(out, "Done.")?;
    writeln!(out, "  processed: {}", report.processed.len())?;
    writeln!(out, "  skipped:   {}", report.skipped.len())?;
    match output {
        Some(path) => writeln!(out, "  output:    {}", path.display()),
        None => writeln!(out, "  output:    (dry run, nothing written)"),
    }
}

pub fn write_unmark_summary(out: &mut impl Write, report: &UnmarkReport, path: &Path) -> io::Result<()> {
    writeln!(
        out,
        "Removed {} tag(s) from {} of {} shell code block(s) in {}",
        report.tags_removed,
        report.cleaned,
        report.found,
        path.display()
    )?;
    writeln!(out, "Run `shellmark annotate {}` to highlight again.", path.display())
}
