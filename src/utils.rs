pub mod io;
pub mod parser;
