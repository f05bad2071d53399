//! Background tasks feeding the message channel

use std::sync::Arc;
use std::time::Duration;

use awaazein_core::prelude::*;
use chrono::Utc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::credentials::{SecureCredentialStore, StoreEvent};
use crate::message::Message;

/// Send [`Message::Tick`] with the wall clock every `period`.
///
/// Stops when the receiving side is dropped.
pub fn spawn_ticker(tx: mpsc::Sender<Message>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            if tx.send(Message::Tick(Utc::now())).await.is_err() {
                trace!("Ticker stopped: channel closed");
                break;
            }
        }
    })
}

/// Forward store change events as [`Message::LivestreamUpdated`]
pub fn spawn_store_listener(
    store: Arc<SecureCredentialStore>,
    tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    let mut events = store.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(StoreEvent::LivestreamLinkUpdated) => {
                    if tx.send(Message::LivestreamUpdated).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    // Events carry no payload; one refresh covers all of them
                    debug!("Store listener lagged by {} events", skipped);
                    if tx.send(Message::LivestreamUpdated).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}
