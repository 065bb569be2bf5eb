// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reservation commit pipeline and reservation admin operations.
//!
//! The pipeline validates guest fields, persists the reservation and its
//! occupying restriction, and hands two notifications to the sink. The
//! two inserts are separate store calls: a restriction-insert failure
//! leaves the reservation row behind without its interval. That latent
//! inconsistency is logged, not rolled back, and is left for a separate
//! reconciliation job.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use innkeep_config::{BookingConfig, MailConfig};
use innkeep_core::{
    dates, BookingStore, InnkeepError, MailData, NewReservation, NewRestriction,
    NotificationSink, Reservation, RestrictionKind,
};

use crate::draft::{DraftReservation, GuestDetails};
use crate::forms::Form;

/// Result of driving a draft through the commit pipeline.
#[derive(Debug)]
pub enum CommitOutcome {
    /// Validation failed. The draft (with the submitted guest fields
    /// attached) and the annotated form ride back to the caller so the
    /// entry form can be re-rendered without losing input.
    Invalid {
        draft: DraftReservation,
        form: Form,
    },
    /// The reservation is durable.
    Booked(Reservation),
}

/// Front desk: commits drafts and serves the admin reservation surface.
pub struct BookingDesk {
    store: Arc<dyn BookingStore>,
    mailer: Arc<dyn NotificationSink>,
    mail: MailConfig,
    booking: BookingConfig,
}

impl BookingDesk {
    pub fn new(
        store: Arc<dyn BookingStore>,
        mailer: Arc<dyn NotificationSink>,
        mail: MailConfig,
        booking: BookingConfig,
    ) -> Self {
        Self {
            store,
            mailer,
            mail,
            booking,
        }
    }

    /// Apply the guest-field validation rules to a submitted form.
    ///
    /// All rules run; violations accumulate per field. Phone is always
    /// optional.
    pub fn validate_guest(form: &mut Form) {
        form.required(&["first_name", "last_name", "email"]);
        form.min_length("first_name", 3);
        form.is_email("email");
    }

    /// Drive a draft through validation and the two-step persist.
    ///
    /// The draft must carry a chosen room; it may come from the search
    /// flow or a "book now" deep link. Availability is not re-checked
    /// here: two concurrent commits for the same room can both pass the
    /// earlier resolver gate and both insert.
    pub async fn commit(
        &self,
        mut draft: DraftReservation,
        submitted: HashMap<String, String>,
    ) -> Result<CommitOutcome, InnkeepError> {
        let room_id = draft
            .room_id
            .ok_or_else(|| InnkeepError::Internal("draft has no room selected".into()))?;

        let mut form = Form::new(submitted);
        Self::validate_guest(&mut form);

        let details = GuestDetails {
            first_name: form.get("first_name").to_string(),
            last_name: form.get("last_name").to_string(),
            email: form.get("email").to_string(),
            phone: form.get("phone").to_string(),
        };
        draft.submit_details(details.clone());

        if !form.valid() {
            debug!(
                room_id = room_id,
                error_count = form.errors.len(),
                "guest form failed validation"
            );
            return Ok(CommitOutcome::Invalid { draft, form });
        }

        // Re-resolve the room; a vanished room aborts the request.
        let room = self.store.room_by_id(room_id).await?;

        let reservation_id = self
            .store
            .insert_reservation(&NewReservation {
                room_id,
                start_date: draft.start_date,
                end_date: draft.end_date,
                first_name: details.first_name.clone(),
                last_name: details.last_name.clone(),
                email: details.email.clone(),
                phone: details.phone.clone(),
            })
            .await?;

        if let Err(e) = self
            .store
            .insert_restriction(&NewRestriction {
                room_id,
                start_date: draft.start_date,
                end_date: draft.end_date,
                reservation_id: Some(reservation_id),
                kind: RestrictionKind::Reservation,
            })
            .await
        {
            warn!(
                reservation_id = reservation_id,
                room_id = room_id,
                error = %e,
                "reservation persisted without its restriction; needs reconciliation"
            );
            return Err(e);
        }

        self.send_notifications(&details, &room.name, draft.start_date, draft.end_date);

        let reservation = self.store.reservation_by_id(reservation_id).await?;
        info!(
            reservation_id = reservation_id,
            room_id = room_id,
            start = %draft.start_date,
            end = %draft.end_date,
            "reservation committed"
        );
        Ok(CommitOutcome::Booked(reservation))
    }

    /// Hand the guest confirmation and owner notification to the sink.
    /// Fire-and-forget; the booking never waits on or fails with delivery.
    fn send_notifications(
        &self,
        details: &GuestDetails,
        room_name: &str,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    ) {
        let start = dates::format_display(start);
        let end = dates::format_display(end);

        self.mailer.send(MailData {
            to: details.email.clone(),
            from: self.mail.from_address.clone(),
            subject: "Reservation Confirmation".to_string(),
            content: format!(
                "Dear {}: this is to confirm your reservation from {start} to {end}.",
                details.first_name
            ),
        });

        self.mailer.send(MailData {
            to: self.mail.owner_address.clone(),
            from: self.mail.from_address.clone(),
            subject: "Reservation Notification".to_string(),
            content: format!(
                "A reservation has been made for {room_name} from {start} to {end}."
            ),
        });
    }

    // --- Admin surface ---

    pub async fn reservation(&self, id: i64) -> Result<Reservation, InnkeepError> {
        self.store.reservation_by_id(id).await
    }

    pub async fn all_reservations(&self) -> Result<Vec<Reservation>, InnkeepError> {
        self.store.all_reservations().await
    }

    pub async fn unprocessed_reservations(&self) -> Result<Vec<Reservation>, InnkeepError> {
        self.store.unprocessed_reservations().await
    }

    /// Replace a reservation's guest fields.
    pub async fn update_guest_details(
        &self,
        id: i64,
        details: GuestDetails,
    ) -> Result<(), InnkeepError> {
        let mut reservation = self.store.reservation_by_id(id).await?;
        reservation.first_name = details.first_name;
        reservation.last_name = details.last_name;
        reservation.email = details.email;
        reservation.phone = details.phone;
        self.store.update_reservation(&reservation).await
    }

    /// Mark a reservation processed. Idempotent.
    pub async fn mark_processed(&self, id: i64) -> Result<(), InnkeepError> {
        self.store.set_processed(id, true).await
    }

    /// Delete a reservation. When `cascade_delete_restrictions` is set,
    /// linked restrictions go first; otherwise the occupancy interval
    /// stays behind.
    pub async fn remove_reservation(&self, id: i64) -> Result<(), InnkeepError> {
        if self.booking.cascade_delete_restrictions {
            self.store.delete_restrictions_for_reservation(id).await?;
        }
        self.store.delete_reservation(id).await
    }
}
