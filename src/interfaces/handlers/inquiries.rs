use actix_web::{
    http::header,
    web::{self, Bytes},
    HttpResponse, Responder,
};
use futures_util::stream;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entities::inquiry::{Inquiry, NewInquiry},
    errors::AppError,
    events::bus::InquiryEvent,
    use_cases::extractors::AdminClaims,
    AppState,
};

/// Public submission endpoint for the contact form.
#[instrument(skip(state, data))]
pub async fn submit_inquiry(
    state: web::Data<AppState>,
    data: web::Json<NewInquiry>,
) -> Result<impl Responder, AppError> {
    let response = state.inquiry_handler.submit_inquiry(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(_claims, state))]
pub async fn list_inquiries(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let inquiries = state.inquiry_handler.list_inquiries().await?;
    Ok(HttpResponse::Ok().json(inquiries))
}

#[instrument(skip(_claims, inquiry_id, state))]
pub async fn delete_inquiry(
    _claims: AdminClaims,
    inquiry_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.inquiry_handler.delete_inquiry(&inquiry_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

struct FeedState {
    receiver: broadcast::Receiver<InquiryEvent>,
    app: web::Data<AppState>,
    primed: bool,
}

/// Live feed for the messages dashboard, delivered as server-sent events.
///
/// Each frame carries the entire inquiry collection re-read from the store
/// and re-sorted newest-first; the client replaces its list wholesale. A
/// lagged receiver skips straight to the next event, since the following
/// snapshot covers everything that was missed. A failed snapshot read ends
/// the stream; the client is expected to surface the drop and stay stale
/// until a manual reload.
#[instrument(skip(_claims, state))]
pub async fn stream_inquiries(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> impl Responder {
    let feed = FeedState {
        receiver: state.events.subscribe(),
        app: state.clone(),
        primed: false,
    };

    let events = stream::unfold(feed, |mut feed| async move {
        if !feed.primed {
            feed.primed = true;
            return Some((snapshot_frame(&feed.app).await, feed));
        }

        match feed.receiver.recv().await {
            Ok(_) => Some((snapshot_frame(&feed.app).await, feed)),
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "inquiry feed lagged, resnapshotting");
                Some((snapshot_frame(&feed.app).await, feed))
            }
            Err(RecvError::Closed) => None,
        }
    });

    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/event-stream"))
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(events)
}

async fn snapshot_frame(app: &web::Data<AppState>) -> Result<Bytes, actix_web::Error> {
    let listing = app.inquiry_handler.list_inquiries().await?;
    Ok(feed_frame(listing.inquiries)?)
}

/// Renders one SSE frame: the collection sorted newest-first, serialized
/// under the `inquiries` event name.
pub fn feed_frame(mut inquiries: Vec<Inquiry>) -> Result<Bytes, AppError> {
    inquiries.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let json = serde_json::to_string(&inquiries)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(Bytes::from(format!("event: inquiries\ndata: {}\n\n", json)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn inquiry_at(name: &str, age_minutes: i64) -> Inquiry {
        Inquiry {
            id: uuid::Uuid::new_v4(),
            full_name: name.to_string(),
            governorate: "Cairo".to_string(),
            video_type: "Commercial Ad".to_string(),
            video_duration: 30.0,
            expected_price: 1500.0,
            phone: "01110711006".to_string(),
            created_at: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    #[test]
    fn feed_frame_sorts_newest_first() {
        let frame = feed_frame(vec![
            inquiry_at("Oldest", 30),
            inquiry_at("Newest", 0),
            inquiry_at("Middle", 10),
        ])
        .unwrap();

        let frame = std::str::from_utf8(&frame).unwrap();
        let data = frame
            .strip_prefix("event: inquiries\ndata: ")
            .and_then(|rest| rest.strip_suffix("\n\n"))
            .expect("frame should carry the inquiries event envelope");

        let entries: Vec<serde_json::Value> = serde_json::from_str(data).unwrap();
        let names: Vec<&str> = entries
            .iter()
            .map(|e| e["fullName"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);
    }

    #[test]
    fn feed_frame_of_an_empty_collection_is_an_empty_list() {
        let frame = feed_frame(Vec::new()).unwrap();
        assert_eq!(&frame[..], b"event: inquiries\ndata: []\n\n");
    }
}
