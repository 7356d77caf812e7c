//! Renderer contracts implemented over the App's message channel.
//!
//! Submissions run on their own tasks; everything they render is forwarded to
//! the event loop, which stays the only writer of view state.

use tokio::sync::mpsc;
use tracing::warn;

use kokoro_proto::protocol::Track;
use kokoro_proto::render::{MessageRenderer, Navigator, RecommendationRenderer, Sender};

use crate::app::AppMessage;

pub struct ChannelFrontend {
    tx: mpsc::Sender<AppMessage>,
}

impl ChannelFrontend {
    pub fn new(tx: mpsc::Sender<AppMessage>) -> Self {
        Self { tx }
    }

    fn forward(&self, msg: AppMessage) {
        if let Err(e) = self.tx.try_send(msg) {
            warn!("frontend: dropped render message: {}", e);
        }
    }
}

impl MessageRenderer for ChannelFrontend {
    fn append(&self, sender: Sender, text: &str) {
        self.forward(AppMessage::Chat {
            sender,
            text: text.to_string(),
        });
    }
}

impl RecommendationRenderer for ChannelFrontend {
    fn render(&self, tracks: Option<&[Track]>) {
        self.forward(AppMessage::Recommendations(tracks.map(<[Track]>::to_vec)));
    }
}

impl Navigator for ChannelFrontend {
    fn navigate(&self, target: &str) {
        self.forward(AppMessage::Navigate(target.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_calls_arrive_in_order() {
        let (tx, mut rx) = mpsc::channel(8);
        let view = ChannelFrontend::new(tx);

        view.append(Sender::User, "hello");
        view.render(Some(&[][..]));
        view.navigate("/tmp/emergency.html");

        match rx.recv().await {
            Some(AppMessage::Chat { sender, text }) => {
                assert_eq!(sender, Sender::User);
                assert_eq!(text, "hello");
            }
            _ => panic!("expected chat line"),
        }
        match rx.recv().await {
            Some(AppMessage::Recommendations(Some(tracks))) => assert!(tracks.is_empty()),
            _ => panic!("expected recommendations"),
        }
        match rx.recv().await {
            Some(AppMessage::Navigate(target)) => assert_eq!(target, "/tmp/emergency.html"),
            _ => panic!("expected navigation"),
        }
    }

    #[tokio::test]
    async fn test_closed_loop_does_not_panic() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let view = ChannelFrontend::new(tx);
        view.append(Sender::Bot, "nobody listening");
    }
}
