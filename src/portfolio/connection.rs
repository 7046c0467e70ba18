//! Secure-shell handshake gating the contact terminal

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Idle,
    Connecting,
    Connected,
}

impl ConnectionStatus {
    /// Status block printed for this state
    pub fn lines(&self) -> [&'static str; 3] {
        match self {
            ConnectionStatus::Idle => [
                "Initializing secure shell connection...",
                "Encryption protocols: RSA-4096, AES-256",
                "Status: Awaiting authorization",
            ],
            ConnectionStatus::Connecting => [
                "Establishing secure connection...",
                "Handshake in progress...",
                "Authentication successful",
            ],
            ConnectionStatus::Connected => [
                "Connection established",
                "Security level: MAXIMUM",
                "Ready for secure communication",
            ],
        }
    }
}

/// `Idle → Connecting → Connected`; no other transitions
#[derive(Debug, Clone, Default)]
pub struct ConnectionState {
    status: ConnectionStatus,
}

impl ConnectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    /// Move from `Idle` to `Connecting`; false if already past idle
    pub fn begin(&mut self) -> bool {
        if self.status != ConnectionStatus::Idle {
            return false;
        }
        self.status = ConnectionStatus::Connecting;
        true
    }

    /// Move from `Connecting` to `Connected`
    pub fn complete(&mut self) -> bool {
        if self.status != ConnectionStatus::Connecting {
            return false;
        }
        self.status = ConnectionStatus::Connected;
        true
    }

    /// Run the whole handshake, waiting `delay` while connecting
    pub async fn connect(&mut self, delay: Duration) -> ConnectionStatus {
        if self.begin() {
            debug!("Handshake started, completing in {:?}", delay);
            tokio::time::sleep(delay).await;
            self.complete();
        }
        self.status
    }

    /// The command terminal accepts input only once connected
    pub fn terminal_unlocked(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }
}
