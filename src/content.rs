//! Canned portfolio content: the text blocks behind the virtual files plus
//! the typed skills table. Everything here is static data; the interesting
//! code lives in the command handlers that render it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::render::ContactChannel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

/// skills.json is literally the serialized form of this table, so `cat
/// skills.json` and `skills` can never drift apart.
pub type SkillTable = BTreeMap<String, SkillGroup>;

fn group(category: &str, skills: &[(&str, u8)]) -> SkillGroup {
    SkillGroup {
        category: category.to_string(),
        skills: skills
            .iter()
            .map(|(name, level)| Skill {
                name: name.to_string(),
                level: *level,
            })
            .collect(),
    }
}

pub fn skill_table() -> SkillTable {
    let mut table = SkillTable::new();
    table.insert(
        "Backend Languages".to_string(),
        group(
            "core",
            &[
                ("JavaScript", 90),
                ("Go", 85),
                ("Python", 75),
                ("TypeScript", 88),
            ],
        ),
    );
    table.insert(
        "Frameworks".to_string(),
        group(
            "development",
            &[
                ("Node.js", 92),
                ("Express.js", 88),
                ("Fastify", 80),
                ("NestJS", 78),
            ],
        ),
    );
    table.insert(
        "DevOps & Infrastructure".to_string(),
        group(
            "operations",
            &[
                ("Docker", 92),
                ("Kubernetes", 85),
                ("CI/CD", 88),
                ("Monitoring", 82),
            ],
        ),
    );
    table.insert(
        "Cloud & Systems".to_string(),
        group(
            "infrastructure",
            &[
                ("Linux", 90),
                ("AWS", 75),
                ("Networking", 80),
                ("Security", 75),
            ],
        ),
    );
    table
}

pub fn skills_json() -> String {
    // the table is code-defined and always serializable
    serde_json::to_string_pretty(&skill_table()).unwrap_or_default()
}

pub fn contact_channels() -> Vec<ContactChannel> {
    vec![
        ContactChannel {
            label: "Email".to_string(),
            value: "sithukyaw27500@gmail.com".to_string(),
            link: "mailto:sithukyaw27500@gmail.com".to_string(),
        },
        ContactChannel {
            label: "X (Twitter)".to_string(),
            value: "@Sithukyaw666".to_string(),
            link: "https://twitter.com/Sithukyaw666".to_string(),
        },
        ContactChannel {
            label: "GitHub".to_string(),
            value: "github.com/Sithukyaw666".to_string(),
            link: "https://github.com/Sithukyaw666".to_string(),
        },
        ContactChannel {
            label: "LinkedIn".to_string(),
            value: "Connect with me".to_string(),
            link: "https://linkedin.com/in/sithukyaw".to_string(),
        },
    ]
}

pub fn about() -> String {
    "# About Sithu Kyaw\n\
     \n\
     ## Who Am I?\n\
     \n\
     Name's Sithu Kyaw. Technically a former student at the University of Information Technology — not that it matters. I just throw the name around to make it sound like I had a plan at some point.\n\
     \n\
     I somehow convince myself I'm doing \"deep Linux stuff,\" messing with networks I barely understand, and writing backend code like I'm deploying to Mars and also sprinkling in some DevOps and DevSecOps buzzwords to sound employable.\n\
     \n\
     Basically the human version of a half-loaded man page and still talks like building the next Google from a laptop that sounds like it's about to take off every time VSCode is running.\n\
     \n\
     A jack of all trades, master of none, enthusiast of everything I half understand.\n\
     \n\
     ## Status\n\
     **Current**: Professional trash pretending to be engineer-ish\n\
     **Mood**: ONLINE_AND_CONFUSED\n\
     **Coffee Level**: Dangerously low"
        .to_string()
}

pub fn contact() -> String {
    "# Contact Information\n\
     \n\
     ## Get in Touch\n\
     \n\
     Feel free to reach out through any of these channels:\n\
     \n\
     **Email**: sithukyaw27500@gmail.com\n\
     **X (Twitter)**: @Sithukyaw666\n\
     **GitHub**: github.com/Sithukyaw666\n\
     **LinkedIn**: Connect with me for professional networking\n\
     \n\
     ## Response Time\n\
     - Email: Within 24 hours\n\
     - Social Media: Usually pretty quick\n\
     - Carrier Pigeon: Not recommended\n\
     \n\
     ## Time Zone\n\
     Currently operating in Myanmar Time (UTC+6:30)\n\
     \n\
     ## Availability\n\
     Available for:\n\
     - Full-stack development projects\n\
     - DevOps consulting\n\
     - System architecture discussions\n\
     - Coffee-fueled coding sessions\n\
     - Debugging mysterious issues at 3 AM\n\
     \n\
     ## Note\n\
     I'm always ready for nothing, but somehow manage to get things done. Feel free to drop a message!"
        .to_string()
}

pub fn readme() -> String {
    "# STK Terminal Portfolio\n\
     \n\
     Welcome to my interactive terminal portfolio!\n\
     \n\
     ## Features\n\
     - Interactive command-line interface\n\
     - File system simulation\n\
     - Multiple cyberpunk themes\n\
     - Command history and autocomplete\n\
     - Mobile-responsive design\n\
     \n\
     ## Quick Start\n\
     Type 'help' to see all available commands.\n\
     \n\
     ## Contact\n\
     - Email: sithukyaw27500@gmail.com\n\
     - GitHub: github.com/Sithukyaw666\n\
     \n\
     ## Version\n\
     Terminal Portfolio v2.1\n\
     \n\
     Built with ❤️ and lots of coffee ☕"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_json_round_trips() {
        let parsed: SkillTable = serde_json::from_str(&skills_json()).unwrap();
        assert_eq!(parsed, skill_table());
    }

    #[test]
    fn skill_table_has_four_groups() {
        let table = skill_table();
        assert_eq!(table.len(), 4);
        assert!(table.contains_key("Backend Languages"));
        assert_eq!(table["Frameworks"].skills.len(), 4);
    }

    #[test]
    fn contact_channels_carry_links() {
        let channels = contact_channels();
        assert_eq!(channels.len(), 4);
        assert!(channels.iter().all(|c| !c.link.is_empty()));
    }
}
