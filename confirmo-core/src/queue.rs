use async_trait::async_trait;

/// Producer side of the record feed. Messages are serialized records;
/// serialization stays at the edges so the carrier can be swapped out.
#[async_trait]
pub trait SenderChannel: Send + Sync {
    async fn send(&self, message: String) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Consumer side of the record feed. `receive` resolves once per inserted
/// record and errors once the feed is closed for good.
#[async_trait]
pub trait ReceiverChannel: Send + Sync {
    async fn receive(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}

#[async_trait]
impl SenderChannel for flume::Sender<String> {
    async fn send(&self, message: String) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.send_async(message).await?)
    }
}

#[async_trait]
impl ReceiverChannel for flume::Receiver<String> {
    async fn receive(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.recv_async().await?)
    }
}
