use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::inquiry::{InquiryCreatedResponse, InquiryListResponse, NewInquiry},
    errors::AppError,
    events::bus::{EventBus, InquiryEvent},
    repositories::inquiry::InquiryRepository,
};

/// At most this many inquiries may exist per phone number at submission time.
const PHONE_SUBMISSION_CAP: i64 = 2;

pub struct InquiryHandler<R>
where
    R: InquiryRepository,
{
    pub inquiry_repo: R,
    events: Arc<EventBus>,
}

impl<R> InquiryHandler<R>
where
    R: InquiryRepository,
{
    pub fn new(inquiry_repo: R, events: Arc<EventBus>) -> Self {
        InquiryHandler { inquiry_repo, events }
    }

    /// Runs the full submission workflow: validate, check the per-phone cap,
    /// then write.
    ///
    /// The count and the insert are two independent store calls; concurrent
    /// submissions from the same phone can both pass the check, so the cap
    /// is best-effort rather than strict.
    pub async fn submit_inquiry(
        &self,
        request: NewInquiry,
    ) -> Result<InquiryCreatedResponse, AppError> {
        let request = request.normalized();
        request.validate()?;

        let existing = self.inquiry_repo.count_inquiries_by_phone(&request.phone).await?;
        if existing >= PHONE_SUBMISSION_CAP {
            tracing::info!(phone = %request.phone, existing, "inquiry rejected by submission cap");
            return Err(AppError::DuplicateLimit(
                "You have already submitted 2 requests.".to_string(),
            ));
        }

        let id = self.inquiry_repo.create_inquiry(&request).await?;
        self.events.publish(InquiryEvent::created(id));

        Ok(InquiryCreatedResponse {
            id,
            message: "Your request was sent successfully".to_string(),
        })
    }

    /// Lists all inquiries, newest first.
    pub async fn list_inquiries(&self) -> Result<InquiryListResponse, AppError> {
        let inquiries = self.inquiry_repo.list_inquiries().await?;
        let total = inquiries.len() as i64;

        Ok(InquiryListResponse { inquiries, total })
    }

    /// Deletes an inquiry and notifies live subscribers.
    pub async fn delete_inquiry(&self, id: &Uuid) -> Result<(), AppError> {
        self.inquiry_repo
            .delete_inquiry(id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::NotFound("Inquiry not found".to_string()),
                _ => e,
            })?;

        self.events.publish(InquiryEvent::deleted(*id));
        Ok(())
    }
}
