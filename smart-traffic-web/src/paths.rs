//! Deployment-time locations: router base path and backend API base.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/traffic` when hosted under
/// a subdirectory), the router is mounted there. Local builds without it fall
/// back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Backend API base baked in through `SMART_TRAFFIC_API_BASE`, if any.
#[must_use]
pub fn api_base_override() -> Option<String> {
    api_base_with_value(option_env!("SMART_TRAFFIC_API_BASE").unwrap_or(""))
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

fn api_base_with_value(value: &str) -> Option<String> {
    let value = value.trim().trim_end_matches('/');
    (!value.is_empty()).then(|| value.to_string())
}
