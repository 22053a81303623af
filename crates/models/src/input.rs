//! Upsert payloads. An absent or blank `id` means "create"; the store then
//! assigns a fresh one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::portfolio::{ContactIcon, ContactLink, Project, StackIcon};

/// Returns the caller's id when non-blank, otherwise a random UUIDv4.
pub fn resolve_id(id: Option<String>) -> String {
    match id {
        Some(id) if !id.trim().is_empty() => id,
        _ => Uuid::new_v4().to_string(),
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectInput {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub highlight: Option<bool>,
}

impl ProjectInput {
    pub fn into_project(self) -> Project {
        Project {
            id: resolve_id(self.id),
            title: self.title,
            description: self.description,
            category: self.category,
            stack: self.stack,
            image: self.image,
            link: self.link,
            highlight: self.highlight,
        }
    }
}

impl From<Project> for ProjectInput {
    fn from(p: Project) -> Self {
        Self {
            id: Some(p.id),
            title: p.title,
            description: p.description,
            category: p.category,
            stack: p.stack,
            image: p.image,
            link: p.link,
            highlight: p.highlight,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct StackIconInput {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub gradient: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl StackIconInput {
    pub fn into_stack(self) -> StackIcon {
        StackIcon {
            id: resolve_id(self.id),
            name: self.name,
            short: self.short,
            gradient: self.gradient,
            // the editor form sends "" for "no image"
            icon: self.icon.filter(|icon| !icon.is_empty()),
        }
    }
}

impl From<StackIcon> for StackIconInput {
    fn from(s: StackIcon) -> Self {
        Self { id: Some(s.id), name: s.name, short: s.short, gradient: s.gradient, icon: s.icon }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactLinkInput {
    #[serde(default)]
    pub id: Option<String>,
    pub label: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub href: String,
    pub icon: ContactIcon,
}

impl ContactLinkInput {
    pub fn into_contact(self) -> ContactLink {
        ContactLink {
            id: resolve_id(self.id),
            label: self.label,
            value: self.value,
            href: self.href,
            icon: self.icon,
        }
    }
}

impl From<ContactLink> for ContactLinkInput {
    fn from(c: ContactLink) -> Self {
        Self { id: Some(c.id), label: c.label, value: c.value, href: c.href, icon: c.icon }
    }
}
