pub mod practicum;
pub mod telegram;
pub mod traits;

pub use practicum::PracticumClient;
pub use telegram::TelegramNotifier;
pub use traits::{MessageSink, StatusSource, MAX_MESSAGE_CHARS};
