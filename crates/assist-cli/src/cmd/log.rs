use super::Project;
use crate::output::{print_json, print_table};

pub fn run(project: &Project, json: bool) -> anyhow::Result<()> {
    let entries = project.log_store().load();

    if json {
        return print_json(&entries);
    }

    if entries.is_empty() {
        println!("Accept log is empty.");
        return Ok(());
    }

    let rows = entries
        .iter()
        .map(|e| {
            vec![
                e.timestamp().unwrap_or("-").to_string(),
                e.ticket_id().unwrap_or("-").to_string(),
                e.action().unwrap_or("-").to_string(),
                e.response_time()
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                e.tag_keys().collect::<Vec<_>>().join(","),
            ]
        })
        .collect();
    print_table(&["TIMESTAMP", "TICKET", "ACTION", "MINUTES", "TAGS"], rows);
    Ok(())
}
