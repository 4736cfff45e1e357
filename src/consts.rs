pub const MIN_SAMPLES: usize = 3;
/// Smallest accepted gap between consecutive x nodes.
pub const MIN_SPACING: f64 = 1e-12;
/// Below this total weight the derivative falls back to the plain slope average.
pub const WEIGHT_EPS: f64 = 1e-9;
pub const CONFIG_FILE: &str = "akimaconfig.ini";
use ini::Ini;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;
use tracing::level_filters::LevelFilter;
#[derive(Debug, Clone, PartialEq)]
pub struct AkimaConfig {
    pub parallel: bool,
    pub min_parallel_slices: usize,
    pub max_workers: usize,
    pub log_level: LevelFilter,
    pub overwrite: bool,
}
pub static AKIMA_CONFIG: Lazy<AkimaConfig> = Lazy::new(|| load_akima_config(CONFIG_FILE));
pub fn load_akima_config<P: AsRef<Path>>(path: P) -> AkimaConfig {
    match Ini::load_from_file(path.as_ref()) {
        Ok(ini) => AkimaConfig::from_ini(&ini),
        Err(_) => AkimaConfig::default(),
    }
}
impl AkimaConfig {
    pub fn from_ini(ini: &Ini) -> Self {
        let default_section: HashMap<String, String> = ini
            .section(None::<String>)
            .map(|props| props.iter().map(|(k, v)| (k.to_string(), v.trim().to_string())).collect())
            .unwrap_or_default();
        let defaults = Self::default();
        Self {
            parallel: default_section
                .get("parallel")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.parallel),
            min_parallel_slices: default_section
                .get("min_parallel_slices")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.min_parallel_slices),
            max_workers: default_section
                .get("max_workers")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_workers),
            log_level: default_section
                .get("log_level")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.log_level),
            overwrite: default_section
                .get("overwrite")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.overwrite),
        }
    }
}
impl Default for AkimaConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            min_parallel_slices: 64,
            max_workers: 0,
            log_level: LevelFilter::INFO,
            overwrite: true,
        }
    }
}
#[cfg(test)]
mod tests {
    use std::path::Path;
    use super::*;
    #[test]
    fn test_default_config() {
        let default = AkimaConfig::default();
        assert_eq!(default.parallel, true);
        assert_eq!(default.min_parallel_slices, 64);
        assert_eq!(default.max_workers, 0);
        assert_eq!(default.log_level, LevelFilter::INFO);
        assert_eq!(default.overwrite, true);
    }
    #[test]
    fn test_from_ini() {
        let ini = Ini::load_from_str(
            "parallel = false\nmin_parallel_slices = 8\nmax_workers = 4\nlog_level = debug\noverwrite = false\n",
        )
        .unwrap();
        let cfg = AkimaConfig::from_ini(&ini);
        assert_eq!(cfg.parallel, false);
        assert_eq!(cfg.min_parallel_slices, 8);
        assert_eq!(cfg.max_workers, 4);
        assert_eq!(cfg.log_level, LevelFilter::DEBUG);
        assert_eq!(cfg.overwrite, false);
    }
    #[test]
    fn test_parse_fault_tolerance() {
        let ini = Ini::load_from_str("parallel = maybe\nmin_parallel_slices = -3\nlog_level = loud\n").unwrap();
        let cfg = AkimaConfig::from_ini(&ini);
        assert_eq!(cfg, AkimaConfig::default());
    }
    #[test]
    fn test_missing_file_falls_back() {
        let cfg = load_akima_config("does/not/exist/akimaconfig.ini");
        assert_eq!(cfg, AkimaConfig::default());
    }
    #[test]
    fn test_real_ini_load() {
        let ini_exists = Path::new(CONFIG_FILE).exists();
        let cfg = &AKIMA_CONFIG;
        if ini_exists {
            println!("Real {} exists, verify parsed result is valid", CONFIG_FILE);
            assert!(cfg.max_workers <= 1024);
        } else {
            println!("Real {} does not exist, verify default config is returned", CONFIG_FILE);
            assert_eq!(**cfg, AkimaConfig::default());
        }
    }
}
