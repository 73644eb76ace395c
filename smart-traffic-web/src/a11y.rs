// Accessibility helpers

/// Id of the polite live region rendered by the app shell.
pub const STATUS_REGION_ID: &str = "status-live";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Injected by the app shell so keyboard users always see where focus is.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #007bff;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Announce a message through the live region for screen readers
///
/// Used for search progress, navigation steps, and failures that are
/// otherwise only visible.
pub fn set_status(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}
