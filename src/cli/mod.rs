/// CLI layer: argument parsing and output writers.
pub mod args;
pub mod output;

pub use args::{Cli, OutputFormat, normalize_args};
pub use output::{CsvOut, Outputter, TableOut, UserInfoOutputter, writer};
