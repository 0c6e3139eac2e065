mod model;
pub use self::model::Label;
pub use self::model::Metric;
pub(crate) mod parser;
pub use self::parser::parse;

#[cfg(test)]
pub(crate) mod test_data;
