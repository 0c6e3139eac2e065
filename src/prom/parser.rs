use std::collections::HashMap;
use std::sync::OnceLock;

use log::{debug, trace};
use regex::Regex;

use super::model::Metric;

const HELP_PREFIX: &str = "# HELP ";
const TYPE_PREFIX: &str = "# TYPE ";

/// Parse exposition text into metric families, in declaration order.
///
/// Parsing is lenient: it never fails and never panics. Lines that cannot be
/// attributed to a declared metric are dropped from label aggregation but are
/// still kept in the raw source of the metric that is currently open.
pub fn parse(text: &str) -> Vec<Metric> {
    let mut state = ParseState::default();
    let mut lines = text
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .peekable();

    while let Some(line) = lines.next() {
        if let Some(declaration) = line.strip_prefix(HELP_PREFIX) {
            let type_line = lines.next_if(|next| next.starts_with(TYPE_PREFIX));
            state.declare(line, declaration, type_line);
        } else if line.starts_with(TYPE_PREFIX) {
            state.stray_type_line(line);
        } else {
            state.sample(line);
        }
    }

    debug!("Parsed {} metric families", state.metrics.len());
    state.metrics
}

#[derive(Debug, Default)]
struct ParseState {
    metrics: Vec<Metric>,
    by_name: HashMap<String, usize>,
    // The most recently declared metric, owner of the raw lines that follow.
    current: Option<usize>,
}

impl ParseState {
    fn declare(&mut self, help_line: &str, declaration: &str, type_line: Option<&str>) {
        let (name, description) = split_declaration(declaration);
        let metric_type = type_line.map(type_token).unwrap_or_default();
        if type_line.is_none() {
            debug!("No type line after the declaration of {name}");
        }

        let index = match self.by_name.get(name) {
            Some(&index) => {
                debug!("{name} is declared again, keeping the first declaration");
                index
            }
            None => {
                let mut metric = Metric::new(name, description);
                metric.metric_type = metric_type.to_string();
                self.metrics.push(metric);
                let index = self.metrics.len() - 1;
                self.by_name.insert(name.to_string(), index);
                index
            }
        };

        let metric = &mut self.metrics[index];
        metric.push_source_line(help_line);
        if let Some(type_line) = type_line {
            metric.push_source_line(type_line);
        }
        self.current = Some(index);
    }

    fn stray_type_line(&mut self, line: &str) {
        match self.current {
            Some(index) => self.metrics[index].push_source_line(line),
            None => trace!("Ignoring type line outside of any metric: {line}"),
        }
    }

    fn sample(&mut self, line: &str) {
        if let Some(index) = self.current {
            self.metrics[index].push_source_line(line);
        }

        let name = sample_name(line);
        let Some(&index) = self.by_name.get(name) else {
            trace!("Dropping sample of undeclared metric {name}");
            return;
        };
        for (key, value) in extract_labels(line) {
            self.metrics[index].add_label_value(key, value);
        }
    }
}

/// Split `<name> <description>`; the description is not trimmed any further.
fn split_declaration(declaration: &str) -> (&str, &str) {
    let declaration = declaration.trim_start();
    declaration
        .split_once(char::is_whitespace)
        .unwrap_or((declaration, ""))
}

/// The second token after the type marker, `# TYPE <name> <type>`.
fn type_token(type_line: &str) -> &str {
    type_line
        .strip_prefix(TYPE_PREFIX)
        .and_then(|rest| rest.split_whitespace().nth(1))
        .unwrap_or_default()
}

fn sample_name(line: &str) -> &str {
    line.split(|c: char| c.is_whitespace() || c == '{')
        .next()
        .unwrap_or_default()
}

/// The text between the first `{` and the first `}` that is not inside a
/// quoted value. Runs to the end of the line when the block is unterminated.
fn label_block(line: &str) -> Option<&str> {
    let start = line.find('{')? + 1;
    let rest = &line[start..];
    let mut in_quotes = false;
    let mut escaped = false;
    for (offset, c) in rest.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            '}' if !in_quotes => return Some(&rest[..offset]),
            _ => {}
        }
    }
    Some(rest)
}

fn label_regex() -> &'static Regex {
    static LABEL_RE: OnceLock<Regex> = OnceLock::new();
    LABEL_RE.get_or_init(|| {
        Regex::new(r#"(\w+)="((?:[^"\\]|\\.)*)""#).expect("label pattern to compile")
    })
}

/// `key="value"` pairs of a sample line, values left escaped.
///
/// A key repeated within the same line keeps its first position and its last value.
fn extract_labels(line: &str) -> Vec<(&str, &str)> {
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    let Some(block) = label_block(line) else {
        return pairs;
    };
    for captures in label_regex().captures_iter(block) {
        let (_, [key, value]) = captures.extract();
        match pairs.iter_mut().find(|(seen, _)| *seen == key) {
            Some(pair) => pair.1 = value,
            None => pairs.push((key, value)),
        }
    }
    pairs
}
