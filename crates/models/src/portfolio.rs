use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Key under which the full snapshot is persisted.
pub const STORAGE_KEY: &str = "portfolio_data_v1";

/// Complete portfolio content. Field names on the wire are camelCase and form
/// the persisted contract shared with the render and editor surfaces.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioState {
    pub profile_photo: String,
    pub navbar_icon: String,
    pub location: String,
    pub skills_description: String,
    pub stack_description: String,
    pub project_section_titles: SectionTitles,
    pub instagram_handle: String,
    pub instagram_link: String,
    pub profile_status: String,
    pub instagram_photo: String,
    pub projects: Vec<Project>,
    pub stacks: Vec<StackIcon>,
    pub contacts: Vec<ContactLink>,
}

impl PortfolioState {
    pub fn profile_field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::ProfilePhoto => &self.profile_photo,
            ProfileField::NavbarIcon => &self.navbar_icon,
            ProfileField::Location => &self.location,
            ProfileField::SkillsDescription => &self.skills_description,
            ProfileField::StackDescription => &self.stack_description,
            ProfileField::InstagramHandle => &self.instagram_handle,
            ProfileField::InstagramLink => &self.instagram_link,
            ProfileField::ProfileStatus => &self.profile_status,
            ProfileField::InstagramPhoto => &self.instagram_photo,
        }
    }

    pub fn profile_field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::ProfilePhoto => &mut self.profile_photo,
            ProfileField::NavbarIcon => &mut self.navbar_icon,
            ProfileField::Location => &mut self.location,
            ProfileField::SkillsDescription => &mut self.skills_description,
            ProfileField::StackDescription => &mut self.stack_description,
            ProfileField::InstagramHandle => &mut self.instagram_handle,
            ProfileField::InstagramLink => &mut self.instagram_link,
            ProfileField::ProfileStatus => &mut self.profile_status,
            ProfileField::InstagramPhoto => &mut self.instagram_photo,
        }
    }
}

/// Titles of the named project sections.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionTitles {
    pub solo: String,
    pub team: String,
}

impl SectionTitles {
    pub fn get(&self, key: SectionKey) -> &str {
        match key {
            SectionKey::Solo => &self.solo,
            SectionKey::Team => &self.team,
        }
    }

    pub fn set(&mut self, key: SectionKey, value: String) {
        match key {
            SectionKey::Solo => self.solo = value,
            SectionKey::Team => self.team = value,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Solo,
    Team,
}

impl SectionKey {
    pub const ALL: [SectionKey; 2] = [SectionKey::Solo, SectionKey::Team];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Solo => "solo",
            SectionKey::Team => "team",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free text; grouping by category is done by the render view.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stack: Vec<String>,
    /// Remote URL or inline data URL.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StackIcon {
    pub id: String,
    pub name: String,
    /// Abbreviation shown when no icon image is set.
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub gradient: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactLink {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub href: String,
    pub icon: ContactIcon,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContactIcon {
    Instagram,
    Linkedin,
    Github,
    Email,
    Website,
}

impl ContactIcon {
    pub const ALL: [ContactIcon; 5] = [
        ContactIcon::Instagram,
        ContactIcon::Linkedin,
        ContactIcon::Github,
        ContactIcon::Email,
        ContactIcon::Website,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactIcon::Instagram => "instagram",
            ContactIcon::Linkedin => "linkedin",
            ContactIcon::Github => "github",
            ContactIcon::Email => "email",
            ContactIcon::Website => "website",
        }
    }
}

/// Scalar profile fields that the editor replaces one at a time.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    ProfilePhoto,
    NavbarIcon,
    Location,
    SkillsDescription,
    StackDescription,
    InstagramHandle,
    InstagramLink,
    ProfileStatus,
    InstagramPhoto,
}

impl ProfileField {
    pub const ALL: [ProfileField; 9] = [
        ProfileField::ProfilePhoto,
        ProfileField::NavbarIcon,
        ProfileField::Location,
        ProfileField::SkillsDescription,
        ProfileField::StackDescription,
        ProfileField::InstagramHandle,
        ProfileField::InstagramLink,
        ProfileField::ProfileStatus,
        ProfileField::InstagramPhoto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::ProfilePhoto => "profilePhoto",
            ProfileField::NavbarIcon => "navbarIcon",
            ProfileField::Location => "location",
            ProfileField::SkillsDescription => "skillsDescription",
            ProfileField::StackDescription => "stackDescription",
            ProfileField::InstagramHandle => "instagramHandle",
            ProfileField::InstagramLink => "instagramLink",
            ProfileField::ProfileStatus => "profileStatus",
            ProfileField::InstagramPhoto => "instagramPhoto",
        }
    }
}

/// The three id-keyed collections of the snapshot.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Projects,
    Stacks,
    Contacts,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Projects, Collection::Stacks, Collection::Contacts];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::Stacks => "stacks",
            Collection::Contacts => "contacts",
        }
    }
}

macro_rules! str_enum_impls {
    ($ty:ty, $kind:literal) => {
        impl FromStr for $ty {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ModelError::unknown($kind, s))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum_impls!(SectionKey, "section key");
str_enum_impls!(ContactIcon, "contact icon");
str_enum_impls!(ProfileField, "profile field");
str_enum_impls!(Collection, "collection");

/// Items addressable by a collection-unique string id.
pub trait Keyed {
    fn id(&self) -> &str;
}

impl Keyed for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Keyed for StackIcon {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Keyed for ContactLink {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_portfolio;

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_value(default_portfolio()).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "profilePhoto",
            "navbarIcon",
            "location",
            "skillsDescription",
            "stackDescription",
            "projectSectionTitles",
            "instagramHandle",
            "instagramLink",
            "profileStatus",
            "instagramPhoto",
            "projects",
            "stacks",
            "contacts",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj.len(), 13);
        assert_eq!(json["projectSectionTitles"]["solo"], "Solo Project");
    }

    #[test]
    fn contact_icon_rejects_unknown_kind() {
        let ok: ContactLink = serde_json::from_str(
            r#"{"id":"m","label":"Mail","value":"me@x.dev","href":"mailto:me@x.dev","icon":"email"}"#,
        )
        .unwrap();
        assert_eq!(ok.icon, ContactIcon::Email);

        let bad = serde_json::from_str::<ContactLink>(
            r#"{"id":"m","label":"Mail","value":"x","href":"x","icon":"myspace"}"#,
        );
        assert!(bad.is_err());
        assert!("myspace".parse::<ContactIcon>().is_err());
    }

    #[test]
    fn optional_item_fields_are_omitted_when_unset() {
        let stack = StackIcon {
            id: "rust".into(),
            name: "Rust".into(),
            short: "Rs".into(),
            gradient: "from-orange-400 to-red-500".into(),
            icon: None,
        };
        let json = serde_json::to_value(&stack).unwrap();
        assert!(json.get("icon").is_none());

        let project: Project = serde_json::from_str(
            r#"{"id":"p","title":"t","description":"d","category":"Solo","stack":[],"image":"","link":""}"#,
        )
        .unwrap();
        assert_eq!(project.highlight, None);
    }

    #[test]
    fn missing_item_text_fields_read_as_empty() {
        let project: Project = serde_json::from_str(r#"{"id":"p","title":"t"}"#).unwrap();
        assert_eq!(project.link, "");
        assert!(project.stack.is_empty());

        let contact: ContactLink = serde_json::from_str(r#"{"id":"c","icon":"github"}"#).unwrap();
        assert_eq!(contact.href, "");

        // wrong types and a missing icon still fail
        assert!(serde_json::from_str::<Project>(r#"{"id":"p","title":"t","stack":"Go"}"#).is_err());
        assert!(serde_json::from_str::<ContactLink>(r#"{"id":"c","label":"x"}"#).is_err());
    }

    #[test]
    fn profile_fields_parse_from_wire_names() {
        for field in ProfileField::ALL {
            assert_eq!(field.as_str().parse::<ProfileField>().unwrap(), field);
        }
        assert!(matches!(
            "projects".parse::<ProfileField>(),
            Err(ModelError::Unknown { kind: "profile field", .. })
        ));

        let mut state = default_portfolio();
        *state.profile_field_mut(ProfileField::Location) = "Jakarta".into();
        assert_eq!(state.profile_field(ProfileField::Location), "Jakarta");
    }

    #[test]
    fn section_titles_get_and_set_by_key() {
        let mut titles = default_portfolio().project_section_titles;
        titles.set(SectionKey::Team, "Studio".into());
        assert_eq!(titles.get(SectionKey::Team), "Studio");
        assert_eq!(titles.get(SectionKey::Solo), "Solo Project");
        assert!("other".parse::<SectionKey>().is_err());
    }
}
