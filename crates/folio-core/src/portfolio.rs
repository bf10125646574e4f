//! Static portfolio content. Display data only; nothing here talks to the session.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image_url: String,
}

impl Project {
    fn new(id: u32, title: &str, description: &str, tags: &[&str], image_url: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image_url: image_url.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Chat,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Chat,
        Section::Contact,
    ];

    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Chat => "ai-chat",
            Section::Contact => "contact",
        }
    }
}

pub const OWNER: &str = "Emmanuel Oluwasegun Taiwo";
pub const CONTACT_EMAIL: &str = "michael.dev@example.com";

pub const ABOUT: &str = "\
I am Emmanuel Oluwasegun Taiwo, professionally known as Michael. I specialize in crafting \
high-performance digital experiences. My passion lies at the intersection of creative design \
and robust engineering.

With extensive experience in designing chatbot systems and integrating complex 3D assets \
using Three.js, I build websites that are not just functional, but immersive. I turn static \
pages into dynamic worlds.";

pub const TECH_STACK: &[&str] = &[
    "JavaScript (ES6+)",
    "TypeScript",
    "React 18",
    "Three.js / R3F",
    "Gemini AI API",
    "Tailwind CSS",
    "Node.js",
    "Python",
];

pub fn featured_projects() -> Vec<Project> {
    vec![
        Project::new(
            1,
            "AI Chatbot Orchestrator",
            "A centralized system for managing multiple conversational agents using Gemini API and WebSocket streams.",
            &["React", "Gemini API", "WebSockets"],
            "https://picsum.photos/600/400?random=1",
        ),
        Project::new(
            2,
            "3D E-Commerce Visualizer",
            "Interactive 3D product configurator using Three.js allowing users to customize laptop specs visually.",
            &["Three.js", "WebGL", "React Fiber"],
            "https://picsum.photos/600/400?random=2",
        ),
        Project::new(
            3,
            "FinTech Dashboard",
            "High-performance real-time data visualization dashboard for crypto assets.",
            &["D3.js", "TypeScript", "Tailwind"],
            "https://picsum.photos/600/400?random=3",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_projects_have_unique_ids() {
        let projects = featured_projects();
        assert_eq!(projects.len(), 3);
        let mut ids: Vec<u32> = projects.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(projects.iter().all(|p| !p.tags.is_empty()));
    }

    #[test]
    fn test_chat_section_anchor() {
        assert_eq!(Section::Chat.anchor(), "ai-chat");
        assert_eq!(Section::ALL.len(), 5);
    }
}
