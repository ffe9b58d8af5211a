pub mod converter;
pub mod value_parser;

pub use converter::{spaces_table, Conversion, Converter};
pub use value_parser::{classify, parse_literal, ValueSyntax};
