use serde::Deserialize;

use crate::portfolio::{ContactLink, PortfolioState, Project, SectionTitles, StackIcon};

/// A persisted snapshot as read back from storage, where any field may be
/// missing (older versions, hand edits). `null` counts as missing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartialPortfolioState {
    pub profile_photo: Option<String>,
    pub navbar_icon: Option<String>,
    pub location: Option<String>,
    pub skills_description: Option<String>,
    pub stack_description: Option<String>,
    pub project_section_titles: Option<PartialSectionTitles>,
    pub instagram_handle: Option<String>,
    pub instagram_link: Option<String>,
    pub profile_status: Option<String>,
    pub instagram_photo: Option<String>,
    pub projects: Option<Vec<Project>>,
    pub stacks: Option<Vec<StackIcon>>,
    pub contacts: Option<Vec<ContactLink>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PartialSectionTitles {
    pub solo: Option<String>,
    pub team: Option<String>,
}

impl PartialPortfolioState {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Overlay the present fields on `base`. Scalars and section titles merge
    /// field by field; the three collections replace wholesale.
    pub fn merge_over(self, base: PortfolioState) -> PortfolioState {
        PortfolioState {
            profile_photo: self.profile_photo.unwrap_or(base.profile_photo),
            navbar_icon: self.navbar_icon.unwrap_or(base.navbar_icon),
            location: self.location.unwrap_or(base.location),
            skills_description: self.skills_description.unwrap_or(base.skills_description),
            stack_description: self.stack_description.unwrap_or(base.stack_description),
            project_section_titles: match self.project_section_titles {
                Some(titles) => titles.merge_over(base.project_section_titles),
                None => base.project_section_titles,
            },
            instagram_handle: self.instagram_handle.unwrap_or(base.instagram_handle),
            instagram_link: self.instagram_link.unwrap_or(base.instagram_link),
            profile_status: self.profile_status.unwrap_or(base.profile_status),
            instagram_photo: self.instagram_photo.unwrap_or(base.instagram_photo),
            projects: self.projects.unwrap_or(base.projects),
            stacks: self.stacks.unwrap_or(base.stacks),
            contacts: self.contacts.unwrap_or(base.contacts),
        }
    }
}

impl PartialSectionTitles {
    pub fn merge_over(self, base: SectionTitles) -> SectionTitles {
        SectionTitles {
            solo: self.solo.unwrap_or(base.solo),
            team: self.team.unwrap_or(base.team),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_portfolio;

    #[test]
    fn empty_object_yields_defaults() {
        let merged = PartialPortfolioState::from_json("{}").unwrap().merge_over(default_portfolio());
        assert_eq!(merged, default_portfolio());
    }

    #[test]
    fn present_scalars_override_and_missing_keep_default() {
        let raw = r#"{"location":"Jakarta","profileStatus":"","navbarIcon":null}"#;
        let merged = PartialPortfolioState::from_json(raw).unwrap().merge_over(default_portfolio());
        assert_eq!(merged.location, "Jakarta");
        // empty string is a value, not an absence
        assert_eq!(merged.profile_status, "");
        assert_eq!(merged.navbar_icon, "/profile.svg");
        assert_eq!(merged.instagram_handle, "strxdale");
    }

    #[test]
    fn section_titles_merge_key_by_key() {
        let raw = r#"{"projectSectionTitles":{"team":"Collaborations"}}"#;
        let merged = PartialPortfolioState::from_json(raw).unwrap().merge_over(default_portfolio());
        assert_eq!(merged.project_section_titles.team, "Collaborations");
        assert_eq!(merged.project_section_titles.solo, "Solo Project");
    }

    #[test]
    fn collections_replace_wholesale() {
        let raw = r#"{"stacks":[{"id":"rust","name":"Rust","short":"Rs","gradient":"g"}],"contacts":[]}"#;
        let merged = PartialPortfolioState::from_json(raw).unwrap().merge_over(default_portfolio());
        assert_eq!(merged.stacks.len(), 1);
        assert_eq!(merged.stacks[0].id, "rust");
        assert!(merged.contacts.is_empty());
        assert_eq!(merged.projects, default_portfolio().projects);
    }

    #[test]
    fn wrong_shapes_fail_to_parse() {
        assert!(PartialPortfolioState::from_json("not json").is_err());
        assert!(PartialPortfolioState::from_json("[1,2,3]").is_err());
        assert!(PartialPortfolioState::from_json(r#"{"location":42}"#).is_err());
    }
}
