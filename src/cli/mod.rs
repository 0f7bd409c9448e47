mod args;

pub use args::{Args, Invocation, parse_args};
