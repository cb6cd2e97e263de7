use std::io::{IsTerminal, Write};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use crate::config::constants::SPINNER_FRAME_MS;

/// Indeterminate progress indicator drawn on stderr while a request is loading.
pub struct AnimatedLogger {
    message: String,
    stages: Vec<String>,
    animation_chars: Vec<&'static str>,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(message: &str) -> Self {
        let animation_chars = vec!["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

        Self {
            message: message.to_string(),
            stages: Vec::new(),
            animation_chars,
            stop_sender: None,
            task_handle: None,
        }
    }

    /// Sub-steps cycled after the message, one per dozen frames.
    pub fn with_stages(mut self, stages: &[&str]) -> Self {
        self.stages = stages.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn is_running(&self) -> bool {
        self.task_handle.is_some()
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        if !std::io::stderr().is_terminal() {
            log::info!("{}", self.message);
            return;
        }

        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = self.message.clone();
        let stages = self.stages.clone();
        let animation_chars = self.animation_chars.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0usize;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(SPINNER_FRAME_MS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let stage = if stages.is_empty() {
                            String::new()
                        } else {
                            format!(" {}", stages[(frame / 12) % stages.len()])
                        };
                        eprint!("\r\x1b[K{} {}{}", animation_chars[frame % animation_chars.len()], message, stage);
                        let _ = std::io::stderr().flush();
                        frame = frame.wrapping_add(1);
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    async fn halt(&mut self) -> bool {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        match self.task_handle.take() {
            Some(handle) => {
                let _ = handle.await;
                true
            }
            None => false,
        }
    }

    pub async fn stop(&mut self, final_message: &str) {
        if self.halt().await {
            eprint!("\r\x1b[K✅ {}\n", final_message);
            let _ = std::io::stderr().flush();
        }
    }

    pub async fn error(&mut self, error_message: &str) {
        if self.halt().await {
            eprint!("\r\x1b[K❌ {}\n", error_message);
            let _ = std::io::stderr().flush();
        }
    }
}
