pub mod cmd;
pub mod io;
pub mod render;
