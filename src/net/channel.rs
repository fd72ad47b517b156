//! Realtime message channel over WebSocket.
//!
//! The channel owns a single live connection to the messaging server, mirrors
//! inbound `receiveMessage` events into the chat state's ordered message
//! list, and offers a narrow outbound API: send message, join/leave a
//! conversation room. It is the primary bridge between the server's event
//! protocol and the Leptos UI state.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! There is no typed error surface. Transport failures show up only as the
//! connection flag going false; undecodable inbound frames and duplicate
//! deliveries are discarded; empty outbound content is suppressed. The loop
//! reconnects with exponential backoff until the handle is closed.

#[path = "channel_ingest.rs"]
mod channel_ingest;
#[path = "channel_requests.rs"]
mod channel_requests;

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use crate::net::types::ChannelEvent;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::ChatMessage;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::chat::ChatState;
#[cfg(feature = "hydrate")]
use leptos::prelude::GetUntracked;
#[cfg(feature = "hydrate")]
use leptos::prelude::Update;
#[cfg(any(test, feature = "hydrate"))]
use std::cell::RefCell;

#[cfg(any(test, feature = "hydrate"))]
thread_local! {
    static MESSAGE_OBSERVER: RefCell<Option<Box<dyn Fn(&ChatMessage)>>> = const { RefCell::new(None) };
}

/// Register the message-observed hook.
///
/// A single slot: registering replaces any prior callback, so at most one
/// observer exists at a time. The callback runs synchronously after each new
/// message is appended to the local list, and is used to refresh the
/// conversation sidebar.
#[cfg(any(test, feature = "hydrate"))]
pub fn set_message_observer(callback: impl Fn(&ChatMessage) + 'static) {
    MESSAGE_OBSERVER.with(|slot| *slot.borrow_mut() = Some(Box::new(callback)));
}

/// Drop the registered message-observed hook, if any.
#[cfg(any(test, feature = "hydrate"))]
pub fn clear_message_observer() {
    MESSAGE_OBSERVER.with(|slot| *slot.borrow_mut() = None);
}

#[cfg(any(test, feature = "hydrate"))]
fn notify_message_observer(msg: &ChatMessage) {
    MESSAGE_OBSERVER.with(|slot| {
        if let Some(callback) = slot.borrow().as_ref() {
            callback(msg);
        }
    });
}

/// Apply one inbound message to the chat state and, when it was unseen,
/// invoke the observer — in that order. Duplicate deliveries notify nobody.
#[cfg(any(test, feature = "hydrate"))]
fn ingest_and_observe(chat: &mut ChatState, msg: ChatMessage) -> bool {
    if !channel_ingest::apply_receive_message(chat, msg.clone()) {
        return false;
    }
    notify_message_observer(&msg);
    true
}

/// Build the channel endpoint URL, attaching the bearer token as the auth
/// query field when one is present. An absent token still yields a URL; the
/// server decides acceptance.
#[cfg(any(test, feature = "hydrate"))]
fn channel_endpoint(location_href: &str, host: &str, token: Option<&str>) -> String {
    let proto = if location_href.starts_with("https") { "wss" } else { "ws" };
    match token {
        Some(t) if !t.is_empty() => format!("{proto}://{host}/ws?token={t}"),
        _ => format!("{proto}://{host}/ws"),
    }
}

/// Cloneable handle for emitting events over the active channel.
///
/// Provided through Leptos context so any component can send without holding
/// the owning [`MessageChannel`].
#[derive(Clone, Default)]
pub struct ChannelSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl ChannelSender {
    /// Serialize one event and queue it for the socket writer.
    ///
    /// Returns `false` when no channel is open. Fire-and-forget beyond that:
    /// a send queued while the transport is down is dropped with the
    /// connection, never retried.
    pub fn send(&self, event: &ChannelEvent) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(tx) = &self.tx else {
                return false;
            };
            match serde_json::to_string(event) {
                Ok(json) => tx.unbounded_send(json).is_ok(),
                Err(_) => false,
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = event;
            false
        }
    }

    /// Emit a `sendMessage` event. No-op returning `false` when the trimmed
    /// content is empty.
    pub fn send_message(&self, from: &str, to: &str, content: &str) -> bool {
        let Some(event) = channel_requests::send_message_event(from, to, content) else {
            return false;
        };
        self.send(&event)
    }

    /// Emit an advisory `joinConversation` room signal.
    pub fn join_conversation(&self, conversation_id: &str) -> bool {
        leptos::logging::log!("channel: join conversation {conversation_id}");
        self.send(&channel_requests::join_conversation_event(conversation_id))
    }

    /// Emit an advisory `leaveConversation` room signal.
    pub fn leave_conversation(&self, conversation_id: &str) -> bool {
        leptos::logging::log!("channel: leave conversation {conversation_id}");
        self.send(&channel_requests::leave_conversation_event(conversation_id))
    }
}

/// Owned handle for the channel lifecycle: construction opens the connection,
/// [`MessageChannel::close`] guarantees the loop terminates. The chat page
/// holds one per mount and closes it on cleanup.
pub struct MessageChannel {
    sender: ChannelSender,
    #[cfg(feature = "hydrate")]
    stop: std::rc::Rc<std::cell::Cell<bool>>,
}

impl MessageChannel {
    /// A cloneable sender for context providers.
    pub fn sender(&self) -> ChannelSender {
        self.sender.clone()
    }

    /// Tear the channel down: stop the reconnect loop and close the socket
    /// writer queue. In-flight sends are not tracked or cancelable.
    pub fn close(&self) {
        #[cfg(feature = "hydrate")]
        {
            self.stop.set(true);
            if let Some(tx) = &self.sender.tx {
                tx.close_channel();
            }
        }
    }
}

/// Open the realtime channel and spawn its connection loop as a local task.
///
/// The bearer token is read from persisted storage at each connection
/// attempt; connect/disconnect events drive `chat.connection_status`.
#[cfg(feature = "hydrate")]
pub fn spawn_message_channel(chat: leptos::prelude::RwSignal<ChatState>) -> MessageChannel {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();
    let stop = std::rc::Rc::new(std::cell::Cell::new(false));

    leptos::task::spawn_local(channel_loop(chat, std::rc::Rc::clone(&stop), rx));

    MessageChannel {
        sender: ChannelSender { tx: Some(tx) },
        stop,
    }
}

/// SSR stand-in: no connection is opened on the server.
#[cfg(not(feature = "hydrate"))]
pub fn spawn_message_channel(
    _chat: leptos::prelude::RwSignal<crate::state::chat::ChatState>,
) -> MessageChannel {
    MessageChannel { sender: ChannelSender::default() }
}

/// Replace the live message list with a REST history fetch, rebuilding the
/// duplicate-suppression index.
#[cfg(feature = "hydrate")]
pub fn ingest_history(
    chat: leptos::prelude::RwSignal<ChatState>,
    history: Vec<crate::net::types::ChatMessage>,
) {
    chat.update(|c| channel_ingest::apply_history(c, history));
}

/// Land one message created over the HTTP fallback path. No `receiveMessage`
/// echo arrives while the socket is down, so the server's copy goes through
/// the same dedup-and-observe path as inbound events.
#[cfg(feature = "hydrate")]
pub fn ingest_message(chat: leptos::prelude::RwSignal<ChatState>, msg: ChatMessage) {
    chat.update(|c| {
        ingest_and_observe(c, msg);
    });
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn channel_loop(
    chat: leptos::prelude::RwSignal<ChatState>,
    stop: std::rc::Rc<std::cell::Cell<bool>>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        if stop.get() {
            break;
        }

        chat.update(|c| c.connection_status = crate::state::chat::ConnectionStatus::Connecting);

        let token = crate::util::auth_token::read_token()
            .map(|t| String::from(js_sys::encode_uri_component(&t)));
        let location = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let host = web_sys::window()
            .and_then(|w| w.location().host().ok())
            .unwrap_or_else(|| "localhost:3000".to_owned());
        let url = channel_endpoint(&location, &host, token.as_deref());

        match connect_and_run(&url, chat, &rx).await {
            Ok(()) => {
                leptos::logging::log!("channel disconnected cleanly");
            }
            Err(e) => {
                leptos::logging::warn!("channel error: {e}");
            }
        }

        chat.update(|c| channel_ingest::apply_transport_disconnected(c));

        if stop.get() {
            break;
        }

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Connect to the WebSocket and process events until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    chat: leptos::prelude::RwSignal<ChatState>,
    rx: &std::rc::Rc<RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    chat.update(|c| channel_ingest::apply_transport_connected(c));
    rejoin_active_conversation(chat, &mut ws_write).await;

    // Forward queued outbound events to the socket.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(json) = rx_borrow.next().await {
            if ws_write.send(Message::Text(json)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: decode and dispatch inbound events.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if let Ok(event) = serde_json::from_str::<ChannelEvent>(&text) {
                        dispatch_event(event, chat);
                    }
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("channel recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run send/recv loops; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

/// Re-announce room membership for the active conversation after a
/// (re)connect, so the server resumes scoping deliveries to it.
#[cfg(feature = "hydrate")]
async fn rejoin_active_conversation<S>(chat: leptos::prelude::RwSignal<ChatState>, ws_write: &mut S)
where
    S: futures::Sink<gloo_net::websocket::Message> + Unpin,
{
    use futures::SinkExt;

    let Some(active) = chat.get_untracked().active else {
        return;
    };
    let event = channel_requests::join_conversation_event(&active.id);
    if let Ok(json) = serde_json::to_string(&event) {
        let _ = ws_write.send(gloo_net::websocket::Message::Text(json)).await;
    }
}

/// Dispatch one inbound event into chat state.
#[cfg(feature = "hydrate")]
fn dispatch_event(event: ChannelEvent, chat: leptos::prelude::RwSignal<ChatState>) {
    match event {
        ChannelEvent::ReceiveMessage(msg) => {
            chat.update(|c| {
                ingest_and_observe(c, msg);
            });
        }
        other => {
            // Outbound-only event names arriving inbound signal a confused
            // server; log and drop.
            leptos::logging::warn!("unexpected inbound channel event: {other:?}");
        }
    }
}
