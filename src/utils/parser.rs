use anyhow::{anyhow, Result};
use std::path::PathBuf;
pub const USAGE: &str = "usage: akima <x.npy> <y.npy> <x_new.npy> <out.npy> [axis]";
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub x_path: PathBuf,
    pub y_path: PathBuf,
    pub x_new_path: PathBuf,
    pub out_path: PathBuf,
    pub axis: Option<isize>,
}
/// Accepts a signed axis index or `last`.
pub fn axis_parser(arg: &str) -> Result<Option<isize>> {
    match arg.trim() {
        "last" => Ok(None),
        s => s
            .parse::<isize>()
            .map(Some)
            .map_err(|e| anyhow!("Invalid axis '{}': {}", arg, e)),
    }
}
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    if args.len() < 4 || args.len() > 5 {
        return Err(anyhow!("Expected 4 or 5 arguments, got {}\n{}", args.len(), USAGE));
    }
    let axis = match args.get(4) {
        Some(arg) => axis_parser(arg)?,
        None => None,
    };
    Ok(CliArgs {
        x_path: PathBuf::from(&args[0]),
        y_path: PathBuf::from(&args[1]),
        x_new_path: PathBuf::from(&args[2]),
        out_path: PathBuf::from(&args[3]),
        axis,
    })
}
