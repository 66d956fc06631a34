use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

/// Default pixels per module for raster output
pub const DEFAULT_MODULE_PX: usize = 8;
/// Default light margin around the symbol, in modules
pub const DEFAULT_QUIET_ZONE: usize = 2;

static MODULE_PX: OnceLock<usize> = OnceLock::new();

/// Pixels per module for raster output (`QR_MODULE_PX`, 1..=64)
pub fn module_px() -> usize {
    *MODULE_PX.get_or_init(|| parse_env_usize("QR_MODULE_PX", DEFAULT_MODULE_PX).clamp(1, 64))
}

static QUIET_ZONE: OnceLock<usize> = OnceLock::new();

/// Quiet zone width in modules (`QR_QUIET_ZONE`, 0..=16)
pub fn quiet_zone() -> usize {
    *QUIET_ZONE.get_or_init(|| parse_env_usize("QR_QUIET_ZONE", DEFAULT_QUIET_ZONE).clamp(0, 16))
}
