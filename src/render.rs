//! Markdown rendering of parsed metric families.
//!
//! The output relies on GitHub flavored tables and on raw HTML passthrough
//! for the `<details>` blocks holding the original lines.

use std::fmt::Write;

use crate::prom::Metric;

const TABLE_HEADER: &str = "| Available Labels | Example Value |\n|------------------|---------------|\n";
const SEPARATOR: &str = "---\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit the collapsible block with the raw exposition lines.
    pub raw_source: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { raw_source: true }
    }
}

/// Render metrics with the default options.
pub fn render(metrics: &[Metric]) -> String {
    render_with(metrics, &RenderOptions::default())
}

/// Render one section per metric, sorted by name in byte order.
///
/// An empty slice renders to an empty string.
pub fn render_with(metrics: &[Metric], options: &RenderOptions) -> String {
    let mut sorted: Vec<&Metric> = metrics.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut output = String::new();
    for metric in sorted {
        render_metric(&mut output, metric, options);
    }
    output
}

fn render_metric(output: &mut String, metric: &Metric, options: &RenderOptions) {
    // writing into a String cannot fail
    let _ = writeln!(output, "## {}\n", metric.name);
    let _ = writeln!(output, "Type: {}\n", metric.metric_type);
    let _ = writeln!(output, "Description: {}\n", metric.description);

    if !metric.labels.is_empty() {
        output.push_str(TABLE_HEADER);
        for label in &metric.labels {
            let example = label.example().map(String::as_str).unwrap_or_default();
            let _ = writeln!(
                output,
                "| {} | {} |",
                escape_cell(&label.key),
                escape_cell(example)
            );
        }
        output.push('\n');
    }

    if options.raw_source {
        render_raw(output, &metric.source_lines);
    }
    output.push_str(SEPARATOR);
}

fn render_raw(output: &mut String, lines: &[String]) {
    let fence = fence_for(lines);
    output.push_str("<details>\n<summary>Raw</summary>\n\n");
    let _ = writeln!(output, "{fence}text");
    for line in lines {
        output.push_str(line);
        output.push('\n');
    }
    let _ = writeln!(output, "{fence}\n\n</details>\n");
}

/// A backtick fence longer than any backtick run inside the block.
fn fence_for(lines: &[String]) -> String {
    let longest_run = lines
        .iter()
        .flat_map(|line| line.split(|c: char| c != '`'))
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest_run.max(2) + 1)
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
