use anyhow::{anyhow, Context, Result};
use ndarray::{Array1, ArrayD, Dimension, ArrayBase, Data};
use ndarray_npy::{read_npy, write_npy};
use std::fs;
use std::path::Path;
use tracing::info;
fn validate_file_path(path: &Path) -> Result<()> {
    if path.exists() && path.is_dir() {
        return Err(anyhow!("Path {:?} is a directory (expected file)", path));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Create parent dir: {:?}", parent))?;
    }
    Ok(())
}
pub fn read_vector(path: &Path) -> Result<Array1<f64>> {
    let data = read_npy::<_, Array1<f64>>(path)
        .with_context(|| format!("Read 1-D f64 array from {}", path.display()))?;
    info!("Loaded {}: {} values", path.display(), data.len());
    Ok(data)
}
pub fn read_data(path: &Path) -> Result<ArrayD<f64>> {
    let data = read_npy::<_, ArrayD<f64>>(path)
        .with_context(|| format!("Read f64 array from {}", path.display()))?;
    info!("Loaded {}: shape {:?}", path.display(), data.shape());
    Ok(data)
}
/// Write `data` through a temporary file renamed into place.
pub fn write_array<S, D>(path: &Path, data: &ArrayBase<S, D>, overwrite: bool) -> Result<()>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if path.is_file() && !overwrite {
        return Err(anyhow!("Output {} exists and overwrite is disabled", path.display()));
    }
    validate_file_path(path)?;
    let temp_path = path.with_extension("tmp");
    if temp_path.exists() {
        fs::remove_file(&temp_path)
            .with_context(|| format!("Remove temp file {:?}", temp_path))?;
    }
    write_npy(&temp_path, data)
        .with_context(|| format!("Write temp file {:?}", temp_path))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Rename {:?} → {:?}", temp_path, path))?;
    info!("Saved {}: shape {:?}", path.display(), data.shape());
    Ok(())
}
