use serde::Serialize;

use crate::content;

/// Tag that picks the rendering strategy inside `cat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Markdown,
    Json,
    Plain,
    // cv.pdf - prints a stub line instead of raw bytes
    Binary,
}

#[derive(Debug, Clone)]
pub struct VirtualFile {
    pub name: &'static str,
    pub content: String,
    pub size: &'static str,
    pub modified: &'static str,
    pub kind: FileKind,
}

/// Read-only file table presented as a filesystem. Seeded once at startup,
/// never mutated: no create, no write, no delete. Insertion order is the
/// listing order.
#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    files: Vec<VirtualFile>,
}

impl VirtualFileSystem {
    pub fn new(files: Vec<VirtualFile>) -> Self {
        debug_assert!(
            {
                let mut names: Vec<_> = files.iter().map(|f| f.name).collect();
                names.sort_unstable();
                names.windows(2).all(|w| w[0] != w[1])
            },
            "duplicate file name in seed table"
        );
        Self { files }
    }

    /// Exact-match lookup on the stored name. Case-sensitive - file names
    /// are data, unlike command names.
    pub fn get(&self, name: &str) -> Option<&VirtualFile> {
        self.files.iter().find(|f| f.name == name)
    }

    pub fn list(&self) -> &[VirtualFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(|f| f.name.to_string()).collect()
    }

    /// The portfolio content set this site ships with.
    pub fn portfolio() -> Self {
        Self::new(vec![
            VirtualFile {
                name: "about.md",
                content: content::about(),
                size: "2.1K",
                modified: "2024-08-06",
                kind: FileKind::Markdown,
            },
            VirtualFile {
                name: "contact.md",
                content: content::contact(),
                size: "1.5K",
                modified: "2024-08-06",
                kind: FileKind::Markdown,
            },
            VirtualFile {
                name: "skills.json",
                content: content::skills_json(),
                size: "3.2K",
                modified: "2024-08-06",
                kind: FileKind::Json,
            },
            VirtualFile {
                name: "cv.pdf",
                content: "Binary file (PDF) - Use 'cv' command to view formatted version"
                    .to_string(),
                size: "245K",
                modified: "2024-08-06",
                kind: FileKind::Binary,
            },
            VirtualFile {
                name: "status.txt",
                content: "Status: ONLINE_AND_CONFUSED\nMode: Professional trash pretending to be engineer-ish\nLast seen: Just now"
                    .to_string(),
                size: "156B",
                modified: "2024-08-06",
                kind: FileKind::Plain,
            },
            VirtualFile {
                name: "readme.md",
                content: content::readme(),
                size: "1.8K",
                modified: "2024-08-06",
                kind: FileKind::Markdown,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_seeds_six_files() {
        let vfs = VirtualFileSystem::portfolio();
        assert_eq!(vfs.len(), 6);
        assert_eq!(vfs.list()[0].name, "about.md");
        assert_eq!(vfs.list()[5].name, "readme.md");
    }

    #[test]
    fn get_is_exact_and_case_sensitive() {
        let vfs = VirtualFileSystem::portfolio();
        assert!(vfs.get("about.md").is_some());
        assert!(vfs.get("About.md").is_none());
        assert!(vfs.get("missing.txt").is_none());
    }

    #[test]
    fn kinds_match_extensions() {
        let vfs = VirtualFileSystem::portfolio();
        assert_eq!(vfs.get("skills.json").unwrap().kind, FileKind::Json);
        assert_eq!(vfs.get("cv.pdf").unwrap().kind, FileKind::Binary);
        assert_eq!(vfs.get("status.txt").unwrap().kind, FileKind::Plain);
    }

    #[test]
    fn skills_content_is_valid_json() {
        let vfs = VirtualFileSystem::portfolio();
        let parsed: serde_json::Value =
            serde_json::from_str(&vfs.get("skills.json").unwrap().content).unwrap();
        assert!(parsed.is_object());
    }
}
