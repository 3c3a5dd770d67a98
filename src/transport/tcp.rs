//! Length-prefixed JSON transport over TCP, with bounded connect
//! retries matching what the stroke controller expects.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::{sleep, timeout, Duration};

use crate::protocol::Message;
use crate::transport::Transport;

/// Default timeout for a single send or receive.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum frame size to prevent excessive memory allocation.
const MAX_MESSAGE_SIZE: u32 = 1_000_000;

/// Connection attempts before `connect_with_retry` gives up.
const MAX_CONNECT_RETRIES: u32 = 3;

/// Delay between connection attempts.
const RETRY_DELAY: Duration = Duration::from_secs(5);

pub struct TcpTransport {
    stream: TcpStream,
    timeout_duration: Duration,
    max_message_size: u32,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            timeout_duration: DEFAULT_TIMEOUT,
            max_message_size: MAX_MESSAGE_SIZE,
        }
    }

    pub fn with_timeout(stream: TcpStream, timeout_duration: Duration) -> Self {
        Self {
            stream,
            timeout_duration,
            max_message_size: MAX_MESSAGE_SIZE,
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }

    /// Connect with bounded retries and a fixed delay between attempts.
    pub async fn connect_with_retry<A: ToSocketAddrs + Clone>(addr: A) -> anyhow::Result<Self> {
        let mut last_err = None;
        for attempt in 1..=MAX_CONNECT_RETRIES {
            match TcpStream::connect(addr.clone()).await {
                Ok(stream) => {
                    log::info!("connected on attempt {}", attempt);
                    return Ok(Self::new(stream));
                }
                Err(e) => {
                    log::warn!("connection attempt {} failed: {}", attempt, e);
                    last_err = Some(e);
                    if attempt < MAX_CONNECT_RETRIES {
                        sleep(RETRY_DELAY).await;
                    }
                }
            }
        }
        match last_err {
            Some(e) => Err(anyhow::anyhow!(
                "unable to connect after {} attempts: {}",
                MAX_CONNECT_RETRIES,
                e
            )),
            None => Err(anyhow::anyhow!("unable to connect")),
        }
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        let send_op = async {
            let data = serde_json::to_vec(&msg)
                .map_err(|e| anyhow::anyhow!("Serialization error: {}", e))?;

            if data.len() as u32 > self.max_message_size {
                return Err(anyhow::anyhow!(
                    "Message too large: {} bytes (max: {})",
                    data.len(),
                    self.max_message_size
                ));
            }

            let len = (data.len() as u32).to_be_bytes();
            self.stream.write_all(&len).await.map_err(map_write_err)?;
            self.stream.write_all(&data).await.map_err(map_write_err)?;
            anyhow::Ok(())
        };

        timeout(self.timeout_duration, send_op)
            .await
            .map_err(|_| anyhow::anyhow!("Send timeout after {:?}", self.timeout_duration))?
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        let recv_op = async {
            let mut len_buf = [0u8; 4];
            self.stream
                .read_exact(&mut len_buf)
                .await
                .map_err(map_read_err)?;

            let len = u32::from_be_bytes(len_buf);
            if len > self.max_message_size {
                return Err(anyhow::anyhow!(
                    "Message too large: {} bytes (max: {})",
                    len,
                    self.max_message_size
                ));
            }
            if len == 0 {
                return Err(anyhow::anyhow!("Invalid message length: 0"));
            }

            let mut buf = vec![0u8; len as usize];
            self.stream
                .read_exact(&mut buf)
                .await
                .map_err(map_read_err)?;

            let msg = serde_json::from_slice(&buf)
                .map_err(|e| anyhow::anyhow!("Deserialization error: {}", e))?;
            anyhow::Ok(msg)
        };

        timeout(self.timeout_duration, recv_op)
            .await
            .map_err(|_| anyhow::anyhow!("Receive timeout after {:?}", self.timeout_duration))?
    }
}

fn map_write_err(e: std::io::Error) -> anyhow::Error {
    if e.kind() == std::io::ErrorKind::BrokenPipe || e.kind() == std::io::ErrorKind::ConnectionReset
    {
        anyhow::anyhow!("Connection closed by peer")
    } else {
        anyhow::anyhow!("Write error: {}", e)
    }
}

fn map_read_err(e: std::io::Error) -> anyhow::Error {
    match e.kind() {
        std::io::ErrorKind::UnexpectedEof => anyhow::anyhow!("Connection closed by peer"),
        std::io::ErrorKind::ConnectionReset => anyhow::anyhow!("Connection reset by peer"),
        _ => anyhow::anyhow!("Read error: {}", e),
    }
}
