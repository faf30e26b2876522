//! Default values for config fields.

pub(super) fn default_name() -> String {
    "Sprout".to_string()
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_banner() -> bool {
    true
}
