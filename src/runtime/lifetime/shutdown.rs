use tokio::signal;
use tracing::warn;

/// 等待停机信号
///
/// 开发环境下通常是 Ctrl+C；容器环境下编排器发 SIGTERM，
/// 两者都要响应，否则滚动更新会等到超时被强杀。
pub async fn listen_for_shutdown() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal as unix_signal};

        let mut sigterm =
            unix_signal(SignalKind::terminate()).expect("Failed to listen for SIGTERM");

        tokio::select! {
            _ = signal::ctrl_c() => {
                warn!("SIGINT received, initiating graceful shutdown...");
            }
            _ = sigterm.recv() => {
                warn!("SIGTERM received, initiating graceful shutdown...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        warn!("Shutdown signal received, initiating graceful shutdown...");
    }
}
