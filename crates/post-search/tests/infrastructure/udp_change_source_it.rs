// crates/post-search/tests/infrastructure/udp_change_source_it.rs

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use post_search::application::dispatch_change::DispatchChangeUseCase;
use post_search::application::ports::ChangeSource;
use post_search::application::workers::ChangeListener;
use post_search::domain::entities::{ChangeMessage, PostInfo};
use post_search::domain::value_objects::PostId;
use post_search::infrastructure::udp::{SyncMeaning, SyncMessage, UdpChangeSource, UdpConfig};
use post_search::utils::PostIndexStub;
use shared_kernel::errors::DomainError;
use tokio::net::UdpSocket;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

const WAIT: Duration = Duration::from_secs(2);

fn loopback() -> SocketAddr {
    "127.0.0.1:0".parse().unwrap()
}

async fn recv_sync(socket: &UdpSocket) -> SyncMessage {
    let mut buffer = [0u8; 4096];
    let (len, _) = timeout(WAIT, socket.recv_from(&mut buffer))
        .await
        .expect("no datagram received in time")
        .unwrap();
    serde_json::from_slice(&buffer[..len]).unwrap()
}

#[tokio::test]
async fn test_bind_greets_bootstrap_captain() {
    // Arrange
    let captain = UdpSocket::bind(loopback()).await.unwrap();
    let config = UdpConfig { listen_addr: loopback(), captain: Some(captain.local_addr().unwrap()) };

    // Act
    let _source = UdpChangeSource::bind(&config, CancellationToken::new()).await.unwrap();

    // Assert
    assert_eq!(recv_sync(&captain).await.meaning, SyncMeaning::ConsumerAck);
}

#[tokio::test]
async fn test_unreachable_captain_does_not_prevent_listening() {
    let config = UdpConfig { listen_addr: loopback(), captain: Some("127.0.0.1:9".parse().unwrap()) };

    let source = UdpChangeSource::bind(&config, CancellationToken::new()).await;

    assert!(source.is_ok());
}

#[tokio::test]
async fn test_datagrams_are_decoded_and_acknowledged_after_dispatch() {
    // Arrange : listener réel sur loopback, index en mémoire
    let token = CancellationToken::new();
    let source = UdpChangeSource::bind(&UdpConfig { listen_addr: loopback(), captain: None }, token.clone())
        .await
        .unwrap();
    let source_addr = source.local_addr().unwrap();
    let index = Arc::new(PostIndexStub::default());
    let listener = ChangeListener::new(Arc::new(source), Arc::new(DispatchChangeUseCase::new(index.clone())));
    let listener_token = token.clone();
    let task = tokio::spawn(async move { listener.run(listener_token).await });

    let peer = UdpSocket::bind(loopback()).await.unwrap();
    let id = PostId::try_new("a1").unwrap();
    let create = ChangeMessage::create(id.clone(), PostInfo::new("red bike", "").with_price(50.0, 1));

    // Act : un datagramme illisible (pas d'ack) puis un create
    peer.send_to(b"{ not json", source_addr).await.unwrap();
    peer.send_to(&create.encode().unwrap(), source_addr).await.unwrap();

    // Assert
    assert_eq!(recv_sync(&peer).await.meaning, SyncMeaning::ConsumerAck);
    assert_eq!(index.document(&id).unwrap().title, "red bike");

    token.cancel();
    let report = timeout(WAIT, task).await.unwrap().unwrap();
    assert_eq!((report.received, report.applied, report.skipped), (2, 1, 1));
}

#[tokio::test]
async fn test_sync_messages_are_not_changes() {
    let token = CancellationToken::new();
    let source = UdpChangeSource::bind(&UdpConfig { listen_addr: loopback(), captain: None }, token.clone())
        .await
        .unwrap();
    let peer = UdpSocket::bind(loopback()).await.unwrap();
    let source_addr = source.local_addr().unwrap();

    peer.send_to(&SyncMessage::consumer_ack().to_bytes(), source_addr).await.unwrap();
    peer.send_to(&ChangeMessage::remove(PostId::try_new("a1").unwrap()).encode().unwrap(), source_addr)
        .await
        .unwrap();

    let change = timeout(WAIT, source.next_change()).await.unwrap().unwrap().unwrap();
    assert_eq!(change.message.id.as_str(), "a1");
    assert_eq!(change.reply_to, Some(peer.local_addr().unwrap()));
}

#[tokio::test]
async fn test_garbage_datagram_is_a_decode_error() {
    let source = UdpChangeSource::bind(&UdpConfig { listen_addr: loopback(), captain: None }, CancellationToken::new())
        .await
        .unwrap();
    let peer = UdpSocket::bind(loopback()).await.unwrap();

    peer.send_to(b"garbage", source.local_addr().unwrap()).await.unwrap();

    let delivery = timeout(WAIT, source.next_change()).await.unwrap().unwrap();
    assert!(matches!(delivery, Err(DomainError::Decode(_))));
}

#[tokio::test]
async fn test_cancelled_source_signals_shutdown() {
    let token = CancellationToken::new();
    let source = UdpChangeSource::bind(&UdpConfig { listen_addr: loopback(), captain: None }, token.clone())
        .await
        .unwrap();

    token.cancel();

    assert!(timeout(WAIT, source.next_change()).await.unwrap().is_none());
}
