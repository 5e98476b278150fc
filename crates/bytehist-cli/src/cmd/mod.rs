// crates/bytehist-cli/src/cmd/mod.rs

pub mod hist;
