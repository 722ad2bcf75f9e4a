//! Link-event capability: the cold-start launch URL plus a push
//! subscription for URLs opened while the process runs.

use tokio::sync::mpsc;

/// Host capability delivering external URLs to the app.
pub trait LinkEvents: Send {
    /// URL that launched the process, if the process was started by a link.
    /// Queried exactly once at startup.
    fn launch_url(&self) -> Option<String>;

    /// Subscribe to URLs opened while the process runs. A single consumer
    /// holds the subscription; it owns the disposal path.
    fn subscribe(&mut self) -> LinkSubscription;
}

/// Receiving side of the link-event subscription.
pub struct LinkSubscription {
    rx: mpsc::UnboundedReceiver<String>,
}

impl LinkSubscription {
    pub fn new(rx: mpsc::UnboundedReceiver<String>) -> Self {
        Self { rx }
    }

    /// Next delivered URL, or `None` once the host side is gone.
    pub async fn next(&mut self) -> Option<String> {
        self.rx.recv().await
    }

    /// Dispose of the subscription; the host's sender observes closure.
    pub fn close(&mut self) {
        self.rx.close();
    }
}

/// In-process link-event source. The host adapter pushes runtime URLs
/// through the cloned [`sender`](ChannelLinkEvents::sender) handle.
pub struct ChannelLinkEvents {
    launch_url: Option<String>,
    tx: mpsc::UnboundedSender<String>,
    rx: Option<mpsc::UnboundedReceiver<String>>,
}

impl ChannelLinkEvents {
    pub fn new(launch_url: Option<String>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            launch_url,
            tx,
            rx: Some(rx),
        }
    }

    /// Handle for pushing runtime link deliveries. Sending fails once the
    /// subscription has been closed.
    pub fn sender(&self) -> mpsc::UnboundedSender<String> {
        self.tx.clone()
    }
}

impl LinkEvents for ChannelLinkEvents {
    fn launch_url(&self) -> Option<String> {
        self.launch_url.clone()
    }

    fn subscribe(&mut self) -> LinkSubscription {
        // A second subscription gets an already-closed stream.
        let rx = self.rx.take().unwrap_or_else(|| {
            let (_tx, rx) = mpsc::unbounded_channel();
            rx
        });
        LinkSubscription::new(rx)
    }
}
