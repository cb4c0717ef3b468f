use crate::command::{Command, CommandResult, Invocation, Outcome};
use crate::context::SessionContext;
use crate::render::Line;

/// cv
/// The formatted resume. Registered under `resume` as well.
pub struct CvCommand;

impl Command for CvCommand {
    fn summary(&self) -> &'static str {
        "Display CV/Resume information"
    }

    fn manual(&self) -> Option<&'static str> {
        Some("Usage: cv\nDisplay CV/Resume information.")
    }

    fn execute(&self, _inv: &Invocation, _ctx: &mut SessionContext) -> CommandResult {
        let rule = "=".repeat(60);
        let mut out = Outcome::none();
        out.push(Line::info(rule.clone()));
        out.push(Line::info("                     CURRICULUM VITAE"));
        out.push(Line::info(rule));
        out.push(Line::plain(""));

        out.push(Line::info("PERSONAL INFORMATION"));
        out.push(Line::plain("Name: Sithu Kyaw"));
        out.push(Line::plain("Role: Professional Trash Pretending to be Engineer-ish"));
        out.push(Line::plain("Location: Myanmar"));
        out.push(Line::plain("Email: sithukyaw27500@gmail.com"));
        out.push(Line::plain(""));

        out.push(Line::info("EDUCATION"));
        out.push(Line::plain("University of Information Technology (UIT)"));
        out.push(Line::plain("Bachelor of Computer Science"));
        out.push(Line::plain(""));

        out.push(Line::info("EXPERIENCE"));
        out.push(Line::plain("• Full-Stack Development"));
        out.push(Line::plain("• DevOps & Infrastructure"));
        out.push(Line::plain("• Container Orchestration"));
        out.push(Line::plain("• Microservices Architecture"));
        out.push(Line::plain(""));

        out.push(Line::info("KEY SKILLS"));
        out.push(Line::plain("Backend: JavaScript, Go, Python, TypeScript"));
        out.push(Line::plain("Frontend: React, Node.js"));
        out.push(Line::plain("DevOps: Docker, Kubernetes, CI/CD"));
        out.push(Line::plain("Cloud: AWS, GCP, Monitoring"));
        out.push(Line::plain(""));

        out.push(Line::success("For detailed CV, contact me via email."));
        Ok(out)
    }
}
