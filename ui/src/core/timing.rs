//! Timer helpers shared by animated sections and the simulated contact submit.

/// Sleep for `ms` milliseconds on the current platform's executor.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

/// Sleep for `ms` milliseconds on the current platform's executor.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
