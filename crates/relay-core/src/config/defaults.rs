pub(super) fn default_true() -> bool {
    true
}

pub(super) fn default_name() -> String {
    "relay".to_string()
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// Conservative limit that fits SMS-style concatenated messages.
pub(super) fn default_max_length() -> usize {
    640
}
