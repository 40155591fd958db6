use std::time::Duration;

use clap::Args;
use homework_bot_core::{Config, PollMemory, Poller, PracticumClient, TelegramNotifier};

#[derive(Args)]
pub struct RunArgs {
    /// Run a single poll cycle and exit
    #[arg(long)]
    pub once: bool,
    /// Seconds to sleep between cycles (overrides RETRY_PERIOD_SECS)
    #[arg(long)]
    pub retry_period: Option<u64>,
    /// First `from_date` cursor in Unix seconds (default: now; 0 for full history)
    #[arg(long)]
    pub from_date: Option<i64>,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("CRITICAL: {e}; the bot is stopped");
            return Err(e.into());
        }
    };
    if let Some(secs) = args.retry_period {
        config.retry_period = Duration::from_secs(secs);
    }

    let memory = match args.from_date {
        Some(ts) => PollMemory::starting_at(ts),
        None => PollMemory::starting_now(),
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let source = PracticumClient::new(&config)?;
        let sink = TelegramNotifier::new(&config)?;

        tracing::info!(
            endpoint = %config.endpoint,
            retry_period_secs = config.retry_period.as_secs(),
            from_date = memory.cursor,
            "bot started"
        );

        let mut poller = Poller::with_memory(source, sink, config.retry_period, memory);
        poller.run(args.once.then_some(1)).await;
        Ok::<_, Box<dyn std::error::Error>>(())
    })
}
