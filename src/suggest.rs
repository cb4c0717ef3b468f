//! Prefix matching for the live suggestion dropdown and Tab completion.
//!
//! The engine snapshots command and file names at session construction -
//! both registries are immutable after startup, so the snapshots never go
//! stale and every call is deterministic.

/// Result of an explicit completion request (Tab).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Nothing matched; leave the input alone.
    None,
    /// Exactly one match - replace the input with this.
    Fill(String),
    /// Several matches - list them, fill nothing.
    Candidates {
        heading: &'static str,
        items: Vec<String>,
    },
}

pub struct SuggestionEngine {
    commands: Vec<String>,
    files: Vec<String>,
}

impl SuggestionEngine {
    pub fn new(mut commands: Vec<String>, mut files: Vec<String>) -> Self {
        commands.sort_unstable();
        files.sort_unstable();
        Self { commands, files }
    }

    /// All candidates whose name starts with `prefix`, case-insensitively.
    /// Inside a `cat ` prefix the candidates are file names instead of
    /// command names. Display policy (how many to show, when to auto-fill)
    /// belongs to the caller.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        let lowered = prefix.to_lowercase();
        if let Some(partial) = lowered.strip_prefix("cat ") {
            return matching(&self.files, partial.trim_start());
        }
        matching(&self.commands, &lowered)
    }

    /// Tab completion over the full input line.
    pub fn complete(&self, line: &str) -> Completion {
        let trimmed = line.trim_start();
        let lowered = trimmed.to_lowercase();

        if let Some(partial) = lowered.strip_prefix("cat ") {
            let matches = matching(&self.files, partial.trim_start());
            return match matches.len() {
                0 => Completion::None,
                1 => Completion::Fill(format!("cat {}", matches[0])),
                _ => Completion::Candidates {
                    heading: "Available files:",
                    items: matches,
                },
            };
        }

        let matches = matching(&self.commands, &lowered);
        match matches.len() {
            0 => Completion::None,
            1 => Completion::Fill(matches.into_iter().next().unwrap()),
            _ => Completion::Candidates {
                heading: "Available commands:",
                items: matches,
            },
        }
    }
}

fn matching(candidates: &[String], prefix: &str) -> Vec<String> {
    candidates
        .iter()
        .filter(|c| c.to_lowercase().starts_with(prefix))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SuggestionEngine {
        SuggestionEngine::new(
            vec![
                "help".into(),
                "history".into(),
                "cat".into(),
                "clear".into(),
                "cls".into(),
                "theme".into(),
                "tree".into(),
            ],
            vec!["about.md".into(), "contact.md".into(), "cv.pdf".into()],
        )
    }

    #[test]
    fn suggest_matches_prefix_case_insensitively() {
        let e = engine();
        assert_eq!(e.suggest("he"), vec!["help"]);
        assert_eq!(e.suggest("HE"), vec!["help"]);
        assert_eq!(e.suggest("c"), vec!["cat", "clear", "cls"]);
        assert!(e.suggest("zz").is_empty());
    }

    #[test]
    fn suggest_is_order_stable() {
        let e = engine();
        assert_eq!(e.suggest("t"), e.suggest("t"));
        assert_eq!(e.suggest("t"), vec!["theme", "tree"]);
    }

    #[test]
    fn cat_prefix_switches_to_files() {
        let e = engine();
        assert_eq!(e.suggest("cat c"), vec!["contact.md", "cv.pdf"]);
        assert_eq!(e.suggest("cat about"), vec!["about.md"]);
        // empty partial matches every file
        assert_eq!(e.suggest("cat ").len(), 3);
    }

    #[test]
    fn complete_fills_unambiguous_command() {
        let e = engine();
        assert_eq!(e.complete("hel"), Completion::Fill("help".into()));
    }

    #[test]
    fn complete_lists_ambiguous_commands() {
        let e = engine();
        match e.complete("c") {
            Completion::Candidates { heading, items } => {
                assert_eq!(heading, "Available commands:");
                assert_eq!(items, vec!["cat", "clear", "cls"]);
            }
            other => panic!("expected candidates, got {:?}", other),
        }
    }

    #[test]
    fn complete_fills_unambiguous_file() {
        let e = engine();
        assert_eq!(
            e.complete("cat ab"),
            Completion::Fill("cat about.md".into())
        );
    }

    #[test]
    fn complete_with_no_match_is_none() {
        let e = engine();
        assert_eq!(e.complete("xyz"), Completion::None);
        assert_eq!(e.complete("cat zzz"), Completion::None);
    }
}
