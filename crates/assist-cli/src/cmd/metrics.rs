use super::Project;
use crate::output::{print_json, print_table};
use assist_core::metrics::compute;

pub fn run(project: &Project, total_shown: i64, json: bool) -> anyhow::Result<()> {
    let metrics = compute(&project.log_store().load(), total_shown);

    if json {
        return print_json(&metrics);
    }

    println!("suggestions shown:     {}", metrics.suggestions_shown);
    println!("suggestions accepted:  {}", metrics.suggestions_accepted);
    println!("acceptance rate:       {}%", metrics.acceptance_rate_percent);
    println!("avg response time:     {} min", metrics.avg_response_time_min);
    println!("log length:            {}", metrics.log_length);

    if !metrics.tag_counts.is_empty() {
        println!();
        let rows = metrics
            .tag_counts
            .iter()
            .map(|(tag, n)| vec![tag.clone(), n.to_string()])
            .collect();
        print_table(&["TAG", "COUNT"], rows);
    }
    Ok(())
}
