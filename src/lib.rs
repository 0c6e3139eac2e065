//! Turn Prometheus/OpenMetrics exposition text into a Markdown reference of
//! the metric families it declares.

pub mod prom;
pub mod render;

/// Parse `text` and render the resulting metric families as Markdown.
///
/// Pure and infallible: malformed input degrades to whatever structure can be
/// recovered, and blank input renders to an empty string.
pub fn parse_and_render(text: &str) -> String {
    render::render(&prom::parse(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_renders_empty() {
        assert_eq!(parse_and_render(""), "");
        assert!(parse_and_render(" \n \n").trim().is_empty());
    }

    #[test]
    fn composes_parser_and_renderer() {
        let text = "# HELP up Target is up\n# TYPE up gauge\nup{job=\"node\"} 1";
        let output = parse_and_render(text);
        assert!(output.starts_with("## up\n\nType: gauge\n\nDescription: Target is up\n"));
        assert!(output.contains("| job | node |"));
    }
}
