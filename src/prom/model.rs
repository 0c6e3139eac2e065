/// A label key together with every value observed for it, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub key: String,
    pub values: Vec<String>,
}

impl Label {
    pub fn new(key: &str, value: &str) -> Label {
        Label {
            key: key.to_string(),
            values: vec![value.to_string()],
        }
    }

    /// The value shown in the labels table.
    pub fn example(&self) -> Option<&String> {
        self.values.first()
    }
}

/// One metric family, as declared by a `# HELP` line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Metric {
    pub name: String,
    /// Verbatim type token from the `# TYPE` line, empty if it was missing.
    pub metric_type: String,
    pub description: String,
    /// Ordered by the first appearance of each key.
    pub labels: Vec<Label>,
    /// Trimmed input lines belonging to this family, in input order.
    pub source_lines: Vec<String>,
}

impl Metric {
    pub fn new(name: &str, description: &str) -> Metric {
        Metric {
            name: name.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    pub fn label(&self, key: &str) -> Option<&Label> {
        self.labels.iter().find(|label| label.key == key)
    }

    pub fn first_value(&self, key: &str) -> Option<&String> {
        self.label(key).and_then(Label::example)
    }

    pub fn get_labels(&self) -> Vec<&String> {
        self.labels.iter().map(|label| &label.key).collect()
    }

    pub(crate) fn add_label_value(&mut self, key: &str, value: &str) {
        match self.labels.iter_mut().find(|label| label.key == key) {
            Some(label) => label.values.push(value.to_string()),
            None => self.labels.push(Label::new(key, value)),
        }
    }

    pub(crate) fn push_source_line(&mut self, line: &str) {
        self.source_lines.push(line.to_string());
    }
}
