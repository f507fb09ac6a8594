use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::Stream;
use tracing::debug;

use crate::state::AppState;

/// `GET /events` - one long-lived Server-Sent Events stream per listener.
///
/// The subscription is registered before the response starts, so any pending
/// backlog is captured for this listener and written ahead of live events.
/// The stream ends on server shutdown; a client disconnect drops the stream,
/// and with it the subscription, which unregisters from the hub.
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let mut subscription = state.hub.register(state.shutdown.child_token());

    let stream = async_stream::stream! {
        while let Some(event) = subscription.next_event().await {
            debug!(subscriber = %subscription.id(), "Writing speak event");
            yield Ok::<_, Infallible>(speak_frame(&event.text));
        }
        debug!(subscriber = %subscription.id(), "Event stream closed");
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Frame `text` as a `data:` event. Line breaks of any flavour become
/// separate `data:` lines, which clients join back with `\n`.
pub(crate) fn speak_frame(text: &str) -> Event {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    Event::default().data(text)
}
