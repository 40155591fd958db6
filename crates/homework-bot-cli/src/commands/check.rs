use homework_bot_core::config::REQUIRED_VARS;
use homework_bot_core::Config;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let missing = Config::missing_vars();
    for key in REQUIRED_VARS {
        let state = if missing.contains(&key) { "missing" } else { "ok" };
        println!("{key:<18} {state}");
    }

    // Also surfaces malformed optional values.
    let config = Config::from_env()?;
    println!("endpoint           {}", config.endpoint);
    println!("retry period       {}s", config.retry_period.as_secs());
    Ok(())
}
