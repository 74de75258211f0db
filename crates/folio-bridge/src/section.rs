/// Page sections that take part in scroll tracking and navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Section {
    /// Sections in page order.
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    /// Label used by the navigation menu.
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }
}

/// Vertical placement of a rendered section, in pixels from the page top.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.offset_top && position < self.offset_top + self.height
    }
}

/// Lays every section out back to back with the same height.
pub fn uniform_layout(section_height: f64) -> Vec<SectionBounds> {
    Section::ALL
        .iter()
        .enumerate()
        .map(|(index, section)| SectionBounds {
            id: section.id().to_string(),
            offset_top: index as f64 * section_height,
            height: section_height,
        })
        .collect()
}

/// Skill filter categories. The "All" filter is represented by no selection.
pub const SKILL_CATEGORIES: [&str; 4] = ["Frontend", "Backend", "AI/3D", "DevOps"];

/// Maps a filter button label to the stored selection. Matching is
/// case-insensitive; `all` clears the filter.
pub fn skill_category_selection(label: &str) -> Option<Option<String>> {
    if label.eq_ignore_ascii_case("all") {
        return Some(None);
    }

    SKILL_CATEGORIES
        .iter()
        .find(|category| category.eq_ignore_ascii_case(label))
        .map(|category| Some(category.to_string()))
}
