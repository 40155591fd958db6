use homework_bot_core::Verdict;
use serde_json::json;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let rows: Vec<_> = Verdict::ALL
            .iter()
            .map(|v| json!({ "status": v, "text": v.text() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for verdict in Verdict::ALL {
        println!("{:<10} {}", verdict.code(), verdict.text());
    }
    Ok(())
}
