use crate::error::CardError;
use std::future::Future;
use std::pin::Pin;

/// Turns filled markup into a PNG screenshot.
///
/// Each call uses its own isolated surface sized to `width` x `height` at
/// device scale 1, and releases it before returning, on success or failure.
pub trait RenderEngine: Send + Sync {
    fn capture<'a>(
        &'a self,
        markup: &'a str,
        width: u32,
        height: u32,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, CardError>> + Send + 'a>>;
}
