use crate::command::{Command, CommandResult, Invocation, Outcome};
use crate::context::SessionContext;
use crate::error::ShellError;
use crate::markdown;
use crate::render::Line;
use crate::vfs::FileKind;

/// cat <file>
/// Exact, case-sensitive lookup; the file's kind picks the renderer:
/// markdown goes through the line renderer, json gets a fenced block,
/// everything else prints verbatim.
pub struct CatCommand;

impl Command for CatCommand {
    fn summary(&self) -> &'static str {
        "Display file contents"
    }

    fn manual(&self) -> Option<&'static str> {
        Some("Usage: cat <filename>\nDisplay the contents of a file.")
    }

    fn execute(&self, inv: &Invocation, ctx: &mut SessionContext) -> CommandResult {
        let name = inv
            .args
            .first()
            .ok_or_else(|| ShellError::invalid("Usage: cat <filename>"))?;

        let file = ctx
            .vfs
            .get(name)
            .ok_or_else(|| ShellError::FileNotFound(name.clone()))?;

        let mut out = Outcome::none();
        match file.kind {
            FileKind::Markdown => {
                for line in markdown::render(&file.content) {
                    out.push(line);
                }
            }
            FileKind::Json => {
                out.push(Line::info("```json"));
                for line in file.content.lines() {
                    out.push(Line::plain(line));
                }
                out.push(Line::info("```"));
            }
            FileKind::Plain | FileKind::Binary => {
                for line in file.content.lines() {
                    out.push(Line::plain(line));
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Renderable, Style};

    fn run(line: &str) -> CommandResult {
        let mut ctx = SessionContext::new();
        let inv = Invocation::parse(line).unwrap();
        CatCommand.execute(&inv, &mut ctx)
    }

    fn first_line(out: &Outcome) -> &Line {
        match &out.renderables[0] {
            Renderable::Text(line) => line,
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_a_file_not_found_error() {
        let err = run("cat missing.txt").unwrap_err();
        assert_eq!(err, ShellError::FileNotFound("missing.txt".into()));
        assert_eq!(
            err.to_string(),
            "cat: missing.txt: No such file or directory"
        );
    }

    #[test]
    fn no_argument_is_a_usage_error() {
        let err = run("cat").unwrap_err();
        assert_eq!(err, ShellError::InvalidArgument("Usage: cat <filename>".into()));
    }

    #[test]
    fn json_files_are_fenced() {
        let out = run("cat skills.json").unwrap();
        assert_eq!(first_line(&out), &Line::info("```json"));
        match out.renderables.last().unwrap() {
            Renderable::Text(line) => assert_eq!(line, &Line::info("```")),
            other => panic!("expected fence close, got {:?}", other),
        }
    }

    #[test]
    fn markdown_files_get_the_structural_renderer() {
        let out = run("cat about.md").unwrap();
        let first = first_line(&out);
        assert_eq!(first.style, Style::Info);
        assert_eq!(first.text, "About Sithu Kyaw");
    }

    #[test]
    fn plain_files_print_verbatim() {
        let out = run("cat status.txt").unwrap();
        assert_eq!(first_line(&out), &Line::plain("Status: ONLINE_AND_CONFUSED"));
    }
}
