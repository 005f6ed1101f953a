use super::Project;
use crate::output::print_json;
use anyhow::Context;
use assist_core::suggest::suggest;

pub fn run(project: &Project, ticket_id: &str, json: bool) -> anyhow::Result<()> {
    let registry = project.registry()?;
    let ticket = registry
        .get(ticket_id)
        .with_context(|| format!("no suggestion for '{ticket_id}'"))?;
    let s = suggest(ticket);

    if json {
        return print_json(&serde_json::json!({
            "ticket_id": ticket.ticket_id,
            "suggestion": s.suggestion,
            "explanation": s.explanation,
            "confidence": s.confidence,
            "tags": s.tags,
        }));
    }

    println!("{}", s.suggestion);
    println!();
    println!("explanation: {}", s.explanation);
    println!("confidence:  {}", s.confidence);
    let tags: Vec<String> = s
        .tags
        .iter()
        .map(|t| format!("{} ({})", t.tag, t.score))
        .collect();
    println!("tags:        {}", tags.join(", "));
    Ok(())
}
