//! Background generation requests for the TUI.
//!
//! The manager owns both ends of its result channel: `request` spawns a
//! task that talks to the endpoint, and the main event loop awaits
//! `recv_update` in its `tokio::select!`.

use tokio::sync::mpsc::{Receiver, Sender};
use tracing::{error, info};

use super::{EndpointClient, GenerateRequest};

/// Result of a generation request, keyed by the submitted topic.
#[derive(Debug, Clone)]
pub enum GenerationUpdate {
    Done { topic: String, text: String },
    Error { topic: String, message: String },
}

pub struct GenerationManager {
    client: EndpointClient,
    result_tx: Sender<GenerationUpdate>,
    result_rx: Receiver<GenerationUpdate>,
}

impl GenerationManager {
    /// Result channel buffer; requests are user-paced so this never fills.
    const RESULT_CHANNEL_BUFFER: usize = 8;

    pub fn new(client: EndpointClient) -> Self {
        let (result_tx, result_rx) = tokio::sync::mpsc::channel(Self::RESULT_CHANNEL_BUFFER);
        Self {
            client,
            result_tx,
            result_rx,
        }
    }

    /// Fire a generation request; the outcome arrives via `recv_update`.
    pub fn request(&self, req: GenerateRequest) {
        let client = self.client.clone();
        let result_tx = self.result_tx.clone();
        info!("Requesting generation for topic: {}", req.topic);

        tokio::spawn(async move {
            let topic = req.topic.clone();
            let update = match client.generate(&req).await {
                Ok(text) => GenerationUpdate::Done { topic, text },
                Err(e) => {
                    error!("Generation failed for {topic}: {e:#}");
                    GenerationUpdate::Error {
                        topic,
                        message: e.to_string(),
                    }
                }
            };
            if result_tx.send(update).await.is_err() {
                error!("Generation result dropped: receiver closed");
            }
        });
    }

    /// Await the next generation result. Call from the main event loop.
    pub async fn recv_update(&mut self) -> Option<GenerationUpdate> {
        self.result_rx.recv().await
    }
}
