use super::Project;
use crate::output::{print_json, print_table};

pub fn run(project: &Project, json: bool) -> anyhow::Result<()> {
    let registry = project.registry()?;

    if json {
        return print_json(&registry.list());
    }

    if registry.is_empty() {
        println!("No tickets.");
        return Ok(());
    }

    let rows = registry
        .list()
        .iter()
        .map(|t| vec![t.ticket_id.clone(), t.status.to_string(), t.subject.clone()])
        .collect();
    print_table(&["ID", "STATUS", "SUBJECT"], rows);
    Ok(())
}
