use homework_bot_core::{Config, MessageSink, TelegramNotifier};

pub fn run(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let notifier = TelegramNotifier::new(&config)?;
        notifier.send(text).await?;
        Ok::<_, Box<dyn std::error::Error>>(())
    })?;

    println!("sent");
    Ok(())
}
