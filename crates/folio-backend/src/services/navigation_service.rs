use folio_bridge::section::SectionBounds;

/// Handles a scroll update (see [`folio_bridge::MessageToBackend::Scroll`]).
pub async fn handle_scroll(context: &super::AppContextHandle, offset: f64, viewport_height: f64) {
    let mut guard = context.state.lock().await;
    let state = &mut *guard;
    if let Some(section) = state.sections.observe(offset, viewport_height) {
        state.store.set_current_section(section);
    }
}

/// Handles a new section layout reported by the frontend.
pub async fn handle_section_layout(context: &super::AppContextHandle, layout: Vec<SectionBounds>) {
    log::debug!("Section layout updated with {} sections", layout.len());
    let mut state = context.state.lock().await;
    state.sections.set_layout(layout);
}
