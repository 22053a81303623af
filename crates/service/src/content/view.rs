//! Read model for the public page: display fallbacks resolved and projects
//! grouped into sections.

use models::{ContactIcon, ContactLink, PortfolioState, Project, SectionKey, StackIcon};
use serde::Serialize;

const FALLBACK_HANDLE: &str = "strxdale";
const FALLBACK_INSTAGRAM_LINK: &str = "https://instagram.com/strxdale";
const FALLBACK_STATUS: &str = "Available for freelance";
const FALLBACK_SKILLS: &str = "Design System, Interaction Design, Full Stack Dev, System Architecture";
const FALLBACK_STACK: &str = "React · Next.js · Tailwind · Livewire · Laravel";
const FALLBACK_LOCATION: &str = "Bengkulu, Indonesia (UTC+7)";
const OTHER_GROUP_TITLE: &str = "Kolaborasi Lainnya";

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GroupKey {
    Solo,
    Team,
    Other,
}

impl GroupKey {
    /// Case-insensitive substring match on the category. A category naming
    /// both lands in `Solo` only, so no project is listed twice.
    pub fn classify(category: &str) -> Self {
        let category = category.to_lowercase();
        if category.contains("solo") {
            GroupKey::Solo
        } else if category.contains("team") {
            GroupKey::Team
        } else {
            GroupKey::Other
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ProjectGroup {
    pub key: GroupKey,
    pub title: String,
    pub items: Vec<Project>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct InstagramCard {
    pub handle: String,
    pub link: String,
    pub status: String,
    pub photo: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    pub profile_photo: String,
    pub navbar_icon: String,
    pub location: String,
    pub skills_description: String,
    pub stack_description: String,
    pub instagram: InstagramCard,
    pub project_groups: Vec<ProjectGroup>,
    pub stacks: Vec<StackIcon>,
    pub contacts: Vec<ContactLink>,
}

fn trimmed_or(value: &str, fallback: &str) -> String {
    let value = value.trim();
    if value.is_empty() { fallback.to_string() } else { value.to_string() }
}

impl PortfolioView {
    pub fn from_state(state: &PortfolioState) -> Self {
        let instagram_contact = state.contacts.iter().find(|c| c.icon == ContactIcon::Instagram);

        let handle = match state.instagram_handle.trim() {
            "" => instagram_contact.map_or(FALLBACK_HANDLE, |c| c.value.as_str()).to_string(),
            handle => handle.to_string(),
        };
        let link = match state.instagram_link.trim() {
            "" => instagram_contact.map_or(FALLBACK_INSTAGRAM_LINK, |c| c.href.as_str()).to_string(),
            link => link.to_string(),
        };
        let status = if state.profile_status.is_empty() {
            instagram_contact.map_or(FALLBACK_STATUS, |c| c.label.as_str()).to_string()
        } else {
            state.profile_status.clone()
        };
        let photo = if state.instagram_photo.is_empty() {
            state.profile_photo.clone()
        } else {
            state.instagram_photo.clone()
        };

        Self {
            profile_photo: state.profile_photo.clone(),
            navbar_icon: state.navbar_icon.clone(),
            location: trimmed_or(&state.location, FALLBACK_LOCATION),
            skills_description: trimmed_or(&state.skills_description, FALLBACK_SKILLS),
            stack_description: trimmed_or(&state.stack_description, FALLBACK_STACK),
            instagram: InstagramCard { handle, link, status, photo },
            project_groups: group_projects(state),
            stacks: state.stacks.clone(),
            contacts: state.contacts.clone(),
        }
    }
}

/// Non-empty groups in `solo, team, other` order, keeping store order inside each.
pub fn group_projects(state: &PortfolioState) -> Vec<ProjectGroup> {
    let titles = &state.project_section_titles;
    let mut groups = [
        ProjectGroup { key: GroupKey::Solo, title: titles.get(SectionKey::Solo).to_string(), items: Vec::new() },
        ProjectGroup { key: GroupKey::Team, title: titles.get(SectionKey::Team).to_string(), items: Vec::new() },
        ProjectGroup { key: GroupKey::Other, title: OTHER_GROUP_TITLE.to_string(), items: Vec::new() },
    ];
    for project in &state.projects {
        let idx = match GroupKey::classify(&project.category) {
            GroupKey::Solo => 0,
            GroupKey::Team => 1,
            GroupKey::Other => 2,
        };
        groups[idx].items.push(project.clone());
    }
    groups.into_iter().filter(|g| !g.items.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::default_portfolio;

    #[test]
    fn default_projects_fill_all_three_groups() {
        let view = PortfolioView::from_state(&default_portfolio());
        let keys: Vec<_> = view.project_groups.iter().map(|g| g.key).collect();
        assert_eq!(keys, [GroupKey::Solo, GroupKey::Team, GroupKey::Other]);
        assert_eq!(view.project_groups[0].title, "Solo Project");
        assert_eq!(view.project_groups[0].items[0].id, "atlas");
        assert_eq!(view.project_groups[1].items[0].id, "aurora");
        assert_eq!(view.project_groups[2].title, "Kolaborasi Lainnya");
        assert_eq!(view.project_groups[2].items[0].id, "pulse");
    }

    #[test]
    fn classify_is_case_insensitive_and_exclusive() {
        assert_eq!(GroupKey::classify("SOLO-ish Project"), GroupKey::Solo);
        assert_eq!(GroupKey::classify("team"), GroupKey::Team);
        assert_eq!(GroupKey::classify("Solo and Team"), GroupKey::Solo);
        assert_eq!(GroupKey::classify("Freelance"), GroupKey::Other);
    }

    #[test]
    fn empty_groups_are_dropped() {
        let mut state = default_portfolio();
        state.projects.retain(|p| p.id == "pulse");
        let groups = group_projects(&state);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, GroupKey::Other);
    }

    #[test]
    fn blank_profile_text_falls_back() {
        let mut state = default_portfolio();
        state.instagram_handle = "  ".into();
        state.instagram_link = String::new();
        state.profile_status = String::new();
        state.instagram_photo = String::new();
        state.location = " ".into();

        let view = PortfolioView::from_state(&state);
        assert_eq!(view.instagram.handle, "@gibran.ui");
        assert_eq!(view.instagram.link, "https://instagram.com/gibran.ui");
        assert_eq!(view.instagram.status, "Instagram");
        assert_eq!(view.instagram.photo, "/profile.svg");
        assert_eq!(view.location, "Bengkulu, Indonesia (UTC+7)");
        assert_eq!(view.skills_description, FALLBACK_SKILLS);
        assert_eq!(view.stack_description, FALLBACK_STACK);

        state.contacts.clear();
        let view = PortfolioView::from_state(&state);
        assert_eq!(view.instagram.handle, "strxdale");
        assert_eq!(view.instagram.status, "Available for freelance");
    }
}
