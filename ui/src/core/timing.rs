//! Cross-platform timers for short UI delays.

use std::time::Duration;

/// Sleep without blocking the UI thread (tokio on native, browser timers on wasm).
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::sleep(duration).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(duration).await;
    }
}
