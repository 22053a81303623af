use crate::portfolio::{ContactIcon, ContactLink, PortfolioState, Project, SectionTitles, StackIcon};

/// The fixed snapshot used on first run and as the backfill source on load.
pub fn default_portfolio() -> PortfolioState {
    PortfolioState {
        profile_photo: "/profile.svg".into(),
        navbar_icon: "/profile.svg".into(),
        location: "Bandung, Indonesia".into(),
        skills_description: String::new(),
        stack_description: String::new(),
        project_section_titles: default_section_titles(),
        instagram_handle: "strxdale".into(),
        instagram_link: "https://instagram.com/strxdale".into(),
        profile_status: "Available for freelance".into(),
        instagram_photo: "/profile.svg".into(),
        projects: default_projects(),
        stacks: default_stacks(),
        contacts: default_contacts(),
    }
}

pub fn default_section_titles() -> SectionTitles {
    SectionTitles { solo: "Solo Project".into(), team: "Team Project".into() }
}

pub fn default_projects() -> Vec<Project> {
    vec![
        project(
            "aurora",
            "Aurora Finance Dashboard",
            "Redesigned dashboard multi-platform dengan analitik real-time untuk tim operasi finansial global.",
            "Team Project",
            &["Next.js", "TypeScript", "Tailwind"],
            "/projects/aurora.svg",
            "https://dribbble.com/shots/12345678",
        ),
        project(
            "atlas",
            "Atlas Travel App",
            "Aplikasi travel planner mobile-first dengan storytelling visual dan itinerary yang adaptif.",
            "Solo Project",
            &["React Native", "Expo", "Figma"],
            "/projects/atlas.svg",
            "https://www.behance.net/gallery/1234567",
        ),
        project(
            "pulse",
            "Pulse Marketing Site",
            "Situs marketing SaaS dengan tipografi kontras tinggi dan micro interactions berbasis motion.",
            "Studio Collab",
            &["Next.js", "Framer Motion", "Storybook"],
            "/projects/pulse.svg",
            "https://pulse.app",
        ),
    ]
}

pub fn default_stacks() -> Vec<StackIcon> {
    vec![
        stack("react", "React", "R", "from-cyan-400 to-blue-500"),
        stack("next", "Next.js", "N", "from-slate-200 to-slate-400"),
        stack("tailwind", "Tailwind", "T", "from-sky-400 to-indigo-500"),
        stack("node", "Node.js", "Nd", "from-emerald-400 to-teal-500"),
        stack("supabase", "Supabase", "S", "from-lime-300 to-emerald-500"),
    ]
}

pub fn default_contacts() -> Vec<ContactLink> {
    vec![
        contact("ig", "Instagram", "@gibran.ui", "https://instagram.com/gibran.ui", ContactIcon::Instagram),
        contact("linkedin", "LinkedIn", "linkedin.com/in/gibran", "https://linkedin.com", ContactIcon::Linkedin),
        contact("github", "GitHub", "github.com/gibrandev", "https://github.com", ContactIcon::Github),
    ]
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    stack: &[&str],
    image: &str,
    link: &str,
) -> Project {
    Project {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        category: category.into(),
        stack: stack.iter().map(|s| s.to_string()).collect(),
        image: image.into(),
        link: link.into(),
        highlight: Some(true),
    }
}

fn stack(id: &str, name: &str, short: &str, gradient: &str) -> StackIcon {
    StackIcon { id: id.into(), name: name.into(), short: short.into(), gradient: gradient.into(), icon: None }
}

fn contact(id: &str, label: &str, value: &str, href: &str, icon: ContactIcon) -> ContactLink {
    ContactLink { id: id.into(), label: label.into(), value: value.into(), href: href.into(), icon }
}
