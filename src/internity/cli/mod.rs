mod commands;
mod parser;
mod print;
mod render;
mod setup;
mod styles;

pub use commands::run;
