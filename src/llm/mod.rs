pub mod http_client;
pub mod scrub;
pub mod traits;
pub mod types;
pub mod yandex;

pub use http_client::build_backend_client;
pub use scrub::{sanitize_api_error, scrub_secret_patterns};
pub use traits::GenerationClient;
pub use types::RawReply;
pub use yandex::YandexGptClient;
