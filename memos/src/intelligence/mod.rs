pub mod parser;

pub use parser::{parse_summary, parse_tags};
