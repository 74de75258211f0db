use folio_bridge::section::SectionBounds;

/// Maps scroll positions to the section in view.
///
/// The reference point is the middle of the viewport. The first section whose
/// bounds contain it wins; positions between or past all sections leave the
/// current section unchanged.
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    layout: Vec<SectionBounds>,
    last_reported: Option<String>,
}

impl SectionTracker {
    pub fn new(layout: Vec<SectionBounds>) -> Self {
        Self {
            layout,
            last_reported: None,
        }
    }

    /// Replaces the layout. The next located section is always reported.
    pub fn set_layout(&mut self, layout: Vec<SectionBounds>) {
        self.layout = layout;
        self.last_reported = None;
    }

    /// Section containing the viewport midpoint, if any.
    pub fn locate(&self, offset: f64, viewport_height: f64) -> Option<&str> {
        let midpoint = offset + viewport_height / 2.0;
        self.layout
            .iter()
            .find(|bounds| bounds.contains(midpoint))
            .map(|bounds| bounds.id.as_str())
    }

    /// Reports the section in view only when it differs from the previously
    /// reported one.
    pub fn observe(&mut self, offset: f64, viewport_height: f64) -> Option<String> {
        let section = self.locate(offset, viewport_height)?.to_string();
        if self.last_reported.as_deref() == Some(section.as_str()) {
            return None;
        }
        log::debug!("Section in view changed to {section}");
        self.last_reported = Some(section.clone());
        Some(section)
    }
}

#[cfg(test)]
mod tests {
    use folio_bridge::section::uniform_layout;

    use super::*;

    #[test]
    fn picks_by_the_middle_of_the_viewport() {
        let tracker = SectionTracker::new(uniform_layout(1000.0));
        assert_eq!(tracker.locate(0.0, 800.0), Some("hero"));
        // 600 + 400 lands exactly on the start of the second section.
        assert_eq!(tracker.locate(600.0, 800.0), Some("skills"));
        assert_eq!(tracker.locate(599.0, 800.0), Some("hero"));
        assert_eq!(tracker.locate(10_000.0, 800.0), None);
    }

    #[test]
    fn reports_only_changes() {
        let mut tracker = SectionTracker::new(uniform_layout(1000.0));
        assert_eq!(tracker.observe(0.0, 800.0).as_deref(), Some("hero"));
        assert_eq!(tracker.observe(100.0, 800.0), None);
        assert_eq!(tracker.observe(1700.0, 800.0).as_deref(), Some("projects"));
        assert_eq!(tracker.observe(50_000.0, 800.0), None);
        assert_eq!(tracker.observe(0.0, 800.0).as_deref(), Some("hero"));
    }

    #[test]
    fn new_layout_reports_again() {
        let mut tracker = SectionTracker::new(uniform_layout(1000.0));
        assert!(tracker.observe(0.0, 800.0).is_some());
        tracker.set_layout(uniform_layout(500.0));
        assert_eq!(tracker.observe(0.0, 800.0).as_deref(), Some("hero"));
    }
}
