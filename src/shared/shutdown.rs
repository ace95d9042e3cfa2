// =====================================================
// 종료 시그널
// Shutdown Signal
// =====================================================
// Ctrl+C(SIGINT)와 SIGTERM을 모두 기다립니다.
// 핸들러는 install() 시점에 등록되므로, 서버 시작 전에 설치해 두면
// 이후 도착한 시그널을 놓치지 않습니다.
// =====================================================

use std::io;

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

/// 설치된 종료 시그널 핸들러
/// Installed shutdown signal handlers
pub struct ShutdownSignal {
    #[cfg(unix)]
    interrupt: Signal,
    #[cfg(unix)]
    terminate: Signal,
}

impl ShutdownSignal {
    /// 시그널 핸들러 등록
    /// Register the signal handlers
    #[cfg(unix)]
    pub fn install() -> io::Result<Self> {
        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    #[cfg(not(unix))]
    pub fn install() -> io::Result<Self> {
        Ok(Self {})
    }

    /// 첫 번째 종료 시그널을 기다린 뒤 그 이름을 반환
    /// Wait for the first shutdown signal and return its name
    #[cfg(unix)]
    pub async fn recv(mut self) -> &'static str {
        tokio::select! {
            _ = self.interrupt.recv() => "SIGINT",
            _ = self.terminate.recv() => "SIGTERM",
        }
    }

    #[cfg(not(unix))]
    pub async fn recv(self) -> &'static str {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        "ctrl-c"
    }
}
