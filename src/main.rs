use akima::utils::{
    io::{read_data, read_vector, write_array},
    parser::parse_args,
};
use akima::{AKIMA_CONFIG, interpolate_along_axis};
use anyhow::{anyhow, Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*};
use mimalloc::MiMalloc;
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
fn init_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(AKIMA_CONFIG.log_level)
        .with(fmt::layer()
            .without_time()
            .with_target(false)
            .with_thread_names(false))
        .init();
    Ok(())
}
fn init_thread_pool(max_workers: usize) -> Result<()> {
    if max_workers > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_workers)
            .build_global()
            .context("Configure rayon thread pool")?;
        info!("Rayon pool limited to {} worker(s)", max_workers);
    }
    Ok(())
}
fn main() -> Result<()> {
    init_logging()?;
    init_thread_pool(AKIMA_CONFIG.max_workers)?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    let x = read_vector(&cli.x_path)?;
    let y = read_data(&cli.y_path)?;
    let x_new = read_vector(&cli.x_new_path)?;
    let out = interpolate_along_axis(x.view(), y.view(), x_new.view(), cli.axis, None)
        .with_context(|| format!("Interpolate {}", cli.y_path.display()))?
        .ok_or_else(|| anyhow!("Interpolation produced no output array"))?;
    write_array(&cli.out_path, &out, AKIMA_CONFIG.overwrite)?;
    info!("Successfully processed: {} -> {}", cli.y_path.display(), cli.out_path.display());
    Ok(())
}
