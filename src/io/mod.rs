pub mod input;

pub use input::{FileReader, InputReader, StdinReader, VecReader};
