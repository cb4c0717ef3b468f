// native REPL over the same session the page uses - handy for poking at
// the command set without a browser
use std::io::{self, Write};

use terminal_portfolio::render::{
    Block, Line, Navigator, OutputSink, Renderable, Style, ThemeSurface,
};
use terminal_portfolio::session::{SessionPhase, ShellSession};
use terminal_portfolio::theme::Theme;

struct ConsoleSink;

impl ConsoleSink {
    fn print_line(line: &Line) {
        match line.style {
            Style::Error => println!("! {}", line.text),
            Style::Warning => println!("~ {}", line.text),
            _ => println!("{}", line.text),
        }
    }

    fn print_block(block: &Block) {
        match block {
            // the terminal already shows what was typed
            Block::CommandEcho { .. } => {}
            Block::FileListing { entries } => {
                for entry in entries {
                    println!("{:<14} {:>6}  {}", entry.name, entry.size, entry.modified);
                }
            }
            Block::ContactCard { channels } => {
                for channel in channels {
                    println!("{}: {} <{}>", channel.label, channel.value, channel.link);
                }
            }
            Block::SkillChart { categories } => {
                for category in categories {
                    println!("{}", category.name);
                    for skill in &category.skills {
                        let filled = (skill.level / 10) as usize;
                        println!(
                            "  {:<12} [{}{}] {}%",
                            skill.name,
                            "#".repeat(filled),
                            "-".repeat(10 - filled),
                            skill.level
                        );
                    }
                }
            }
            // never produced without a graph collaborator
            Block::SkillGraph { .. } => {}
        }
    }
}

impl OutputSink for ConsoleSink {
    fn append(&mut self, renderable: Renderable) {
        match &renderable {
            Renderable::Text(line) => Self::print_line(line),
            Renderable::Block(block) => Self::print_block(block),
        }
    }
    fn clear(&mut self) {
        // ansi clear + home
        print!("\x1b[2J\x1b[H");
    }
    fn scroll_to_end(&mut self) {}
}

struct ConsoleTheme;
impl ThemeSurface for ConsoleTheme {
    fn set_theme(&self, _theme: Theme) {}
}

struct ConsoleNavigator;
impl Navigator for ConsoleNavigator {
    fn navigate_to(&self, url: &str) {
        println!("(navigating to {})", url);
    }
}

fn main() {
    let mut session = ShellSession::new(
        Box::new(ConsoleSink),
        Box::new(ConsoleTheme),
        Box::new(ConsoleNavigator),
        None,
    );
    session.start();
    // no point pacing boot messages on stdout
    session.fast_forward();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    while session.phase() == SessionPhase::Ready {
        print!("guest@fedora:~$ ");
        if stdout.flush().is_err() {
            break;
        }
        let mut input = String::new();
        if stdin.read_line(&mut input).is_err() || input.is_empty() {
            break;
        }
        session.submit(input.trim());
        // fire any delayed navigation right away
        session.fast_forward();
    }
}
