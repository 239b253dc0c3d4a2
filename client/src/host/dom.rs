//! Small DOM lookups used by the host surface.

/// Whether an element with `id` is in the document.
pub fn element_exists(id: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)).is_some()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        true
    }
}

/// Remove every child of the element with `id` (the engine's canvas).
pub fn clear_children(id: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(element) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) {
            element.set_inner_html("");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}
