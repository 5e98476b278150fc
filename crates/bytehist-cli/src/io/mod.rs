// crates/bytehist-cli/src/io/mod.rs

pub mod input;
