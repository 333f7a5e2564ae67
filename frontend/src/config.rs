use log::LevelFilter;
use shared::spin::SpinConfig;
use web_sys::window;

fn query_param(name: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// `?verbose=1` forces debug logging regardless of the stored setting.
pub fn verbose_from_location() -> bool {
    matches!(query_param("verbose").as_deref(), Some("1") | Some("true") | Some(""))
}

pub fn apply_log_level(verbose: bool) {
    let level = if verbose || verbose_from_location() {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    log::set_max_level(level);
}

/// Spin settings, with an optional `?spin_ms=` override for demos.
pub fn spin_config() -> SpinConfig {
    let mut config = SpinConfig::default();

    if let Some(raw) = query_param("spin_ms") {
        match raw.parse::<u32>() {
            Ok(ms) => config.duration_ms = ms,
            Err(_) => log::warn!("Ignoring spin_ms={}, not a number", raw),
        }
    }

    if let Err(e) = config.validate() {
        log::warn!("Invalid spin settings ({}), using defaults", e);
        return SpinConfig::default();
    }
    config
}
