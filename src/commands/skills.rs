use uuid::Uuid;

use crate::command::{Command, CommandResult, Invocation, Outcome};
use crate::content::SkillTable;
use crate::context::SessionContext;
use crate::error::ShellError;
use crate::render::{Block, GraphEdge, GraphNode, Line, SkillBar, SkillCategory};

const CENTER_ID: &str = "stk";

/// skills [--view=list|graph]
/// The data comes from skills.json in the virtual file system, so the
/// chart and `cat skills.json` always agree. Graph view needs the
/// optional visualization collaborator; without it the command prints a
/// notice and falls back to the exact list output.
pub struct SkillsCommand;

impl SkillsCommand {
    fn load(ctx: &SessionContext) -> Result<SkillTable, ShellError> {
        let file = ctx
            .vfs
            .get("skills.json")
            .ok_or_else(|| ShellError::FileNotFound("skills.json".to_string()))?;
        serde_json::from_str(&file.content).map_err(|e| ShellError::Handler(e.to_string()))
    }

    fn chart(table: &SkillTable) -> Block {
        Block::SkillChart {
            categories: table
                .iter()
                .map(|(name, group)| SkillCategory {
                    name: name.clone(),
                    skills: group
                        .skills
                        .iter()
                        .map(|s| SkillBar {
                            name: s.name.clone(),
                            level: s.level,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    // hub-and-spoke: center node, one node per category, one per skill
    fn graph(table: &SkillTable) -> (Vec<GraphNode>, Vec<GraphEdge>) {
        let mut nodes = vec![GraphNode {
            id: CENTER_ID.to_string(),
            label: "STK".to_string(),
            group: "main".to_string(),
            level: 100,
        }];
        let mut edges = Vec::new();

        for (name, group) in table {
            nodes.push(GraphNode {
                id: name.clone(),
                label: name.clone(),
                group: group.category.clone(),
                level: 100,
            });
            edges.push(GraphEdge {
                source: CENTER_ID.to_string(),
                target: name.clone(),
            });
            for skill in &group.skills {
                let id = format!("{}-{}", name, skill.name);
                nodes.push(GraphNode {
                    id: id.clone(),
                    label: skill.name.clone(),
                    group: group.category.clone(),
                    level: skill.level,
                });
                edges.push(GraphEdge {
                    source: name.clone(),
                    target: id,
                });
            }
        }
        (nodes, edges)
    }
}

impl Command for SkillsCommand {
    fn summary(&self) -> &'static str {
        "Display technical skills"
    }

    fn manual(&self) -> Option<&'static str> {
        Some("Usage: skills [--view=list|graph]\nDisplay technical skills. Use --view=graph for the interactive constellation visualization.")
    }

    fn execute(&self, inv: &Invocation, ctx: &mut SessionContext) -> CommandResult {
        let view = inv
            .args
            .iter()
            .find_map(|arg| arg.strip_prefix("--view="))
            .unwrap_or("list");

        let table = Self::load(ctx)?;
        let mut out = Outcome::none();

        if view.eq_ignore_ascii_case("graph") {
            if ctx.graph_available {
                let (nodes, edges) = Self::graph(&table);
                out.push(Line::info("Initializing skills constellation..."));
                out.push(Line::plain(""));
                out.push(Block::SkillGraph {
                    container_id: format!("constellation-{}", Uuid::new_v4()),
                    nodes,
                    edges,
                });
                return Ok(out);
            }
            // required fallback, not best-effort: notice + the plain list
            out.push(Line::info(
                "Graph view unavailable: visualization library not loaded. Showing list instead.",
            ));
        }

        out.push(Self::chart(&table));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderable;

    fn run(line: &str, graph_available: bool) -> Outcome {
        let mut ctx = SessionContext::new();
        ctx.graph_available = graph_available;
        let inv = Invocation::parse(line).unwrap();
        SkillsCommand.execute(&inv, &mut ctx).unwrap()
    }

    #[test]
    fn list_view_renders_the_chart() {
        let out = run("skills", false);
        match &out.renderables[0] {
            Renderable::Block(Block::SkillChart { categories }) => {
                assert_eq!(categories.len(), 4);
                assert!(categories.iter().all(|c| !c.skills.is_empty()));
            }
            other => panic!("expected chart, got {:?}", other),
        }
    }

    #[test]
    fn graph_view_without_collaborator_falls_back_to_the_list() {
        let plain = run("skills", false);
        let fallback = run("skills --view=graph", false);
        // notice line first, then output identical to the plain list
        match &fallback.renderables[0] {
            Renderable::Text(line) => assert!(line.text.contains("unavailable")),
            other => panic!("expected notice, got {:?}", other),
        }
        assert_eq!(&fallback.renderables[1..], &plain.renderables[..]);
    }

    #[test]
    fn graph_view_with_collaborator_emits_nodes_and_edges() {
        let out = run("skills --view=graph", true);
        let block = out
            .renderables
            .iter()
            .find_map(|r| match r {
                Renderable::Block(Block::SkillGraph { nodes, edges, .. }) => Some((nodes, edges)),
                _ => None,
            })
            .expect("graph block");
        let (nodes, edges) = block;
        // 1 center + 4 categories + 16 skills
        assert_eq!(nodes.len(), 21);
        assert_eq!(edges.len(), 20);
        assert!(edges.iter().any(|e| e.source == CENTER_ID));
    }
}
