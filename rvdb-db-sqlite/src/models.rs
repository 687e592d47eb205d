#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::ensure;
use serde::{Deserialize, Serialize};

use rvdb_core::entities as e;

use super::schema::*;

///////////////////////////////////////////////////////////////////////
// Reviews
///////////////////////////////////////////////////////////////////////

#[derive(Insertable)]
#[diesel(table_name = review)]
pub struct NewReview {
    pub id: String,
    pub booking_id: Option<String>,
    pub customer_id: Option<String>,
    pub provider_id: String,
    pub rating: i16,
    pub comment: Option<String>,
    pub is_admin_created: bool,
    pub admin_created_by: Option<String>,
    pub admin_notes: Option<String>,
    pub visibility: i16,
    pub is_verified: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<e::Review> for NewReview {
    fn from(from: e::Review) -> Self {
        let e::Review {
            id,
            booking_id,
            customer_id,
            provider_id,
            rating,
            comment,
            is_admin_created,
            admin_created_by,
            admin_notes,
            visibility,
            is_verified,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            booking_id: booking_id.map(Into::into),
            customer_id: customer_id.map(Into::into),
            provider_id: provider_id.into(),
            rating: i16::from(i8::from(rating)),
            comment,
            is_admin_created,
            admin_created_by: admin_created_by.map(Into::into),
            admin_notes,
            visibility: e::VisibilityPrimitive::from(visibility),
            is_verified,
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}

/// Mutable fields of a review row. Immutable columns (identity, origin,
/// provider) are deliberately absent.
#[derive(AsChangeset)]
#[diesel(table_name = review, treat_none_as_null = true)]
pub struct ReviewChangeset {
    pub rating: i16,
    pub comment: Option<String>,
    pub admin_notes: Option<String>,
    pub visibility: i16,
    pub is_verified: bool,
    pub updated_at: i64,
}

impl From<&e::Review> for ReviewChangeset {
    fn from(from: &e::Review) -> Self {
        Self {
            rating: i16::from(i8::from(from.rating)),
            comment: from.comment.clone(),
            admin_notes: from.admin_notes.clone(),
            visibility: e::VisibilityPrimitive::from(from.visibility),
            is_verified: from.is_verified,
            updated_at: from.updated_at.as_millis(),
        }
    }
}

#[derive(Queryable)]
pub struct ReviewRow {
    pub rowid: i64,
    pub id: String,
    pub booking_id: Option<String>,
    pub customer_id: Option<String>,
    pub provider_id: String,
    pub rating: i16,
    pub comment: Option<String>,
    pub is_admin_created: bool,
    pub admin_created_by: Option<String>,
    pub admin_notes: Option<String>,
    pub visibility: i16,
    pub is_verified: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TryFrom<ReviewRow> for e::Review {
    type Error = anyhow::Error;

    fn try_from(from: ReviewRow) -> Result<Self, Self::Error> {
        let ReviewRow {
            rowid: _,
            id,
            booking_id,
            customer_id,
            provider_id,
            rating,
            comment,
            is_admin_created,
            admin_created_by,
            admin_notes,
            visibility,
            is_verified,
            created_at,
            updated_at,
        } = from;
        let rating = e::RatingValue::from(i8::try_from(rating)?);
        ensure!(rating.is_valid(), "rating value out of range");
        Ok(Self {
            id: id.into(),
            booking_id: booking_id.map(Into::into),
            customer_id: customer_id.map(Into::into),
            provider_id: provider_id.into(),
            rating,
            comment,
            is_admin_created,
            admin_created_by: admin_created_by.map(Into::into),
            admin_notes,
            visibility: e::Visibility::try_from(visibility)?,
            is_verified,
            created_at: e::Timestamp::from_millis(created_at),
            updated_at: e::Timestamp::from_millis(updated_at),
        })
    }
}

///////////////////////////////////////////////////////////////////////
// Synthetic customers
///////////////////////////////////////////////////////////////////////

#[derive(Insertable)]
#[diesel(table_name = synthetic_customer)]
pub struct NewSyntheticCustomer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub marker: String,
    pub placeholder_contact: String,
    pub is_active: bool,
    pub created_at: i64,
}

impl From<e::SyntheticCustomer> for NewSyntheticCustomer {
    fn from(from: e::SyntheticCustomer) -> Self {
        let e::SyntheticCustomer {
            id,
            first_name,
            last_name,
            marker,
            placeholder_contact,
            is_active,
            created_at,
        } = from;
        Self {
            id: id.into(),
            first_name,
            last_name,
            marker,
            placeholder_contact,
            is_active,
            created_at: created_at.as_millis(),
        }
    }
}

#[derive(Queryable)]
pub struct SyntheticCustomerRow {
    pub rowid: i64,
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub marker: String,
    pub placeholder_contact: String,
    pub is_active: bool,
    pub created_at: i64,
}

impl From<SyntheticCustomerRow> for e::SyntheticCustomer {
    fn from(from: SyntheticCustomerRow) -> Self {
        let SyntheticCustomerRow {
            rowid: _,
            id,
            first_name,
            last_name,
            marker,
            placeholder_contact,
            is_active,
            created_at,
        } = from;
        Self {
            id: id.into(),
            first_name,
            last_name,
            marker,
            placeholder_contact,
            is_active,
            created_at: e::Timestamp::from_millis(created_at),
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Rating summaries
///////////////////////////////////////////////////////////////////////

#[derive(Insertable)]
#[diesel(table_name = rating_summary)]
pub struct NewRatingSummary {
    pub provider_id: String,
    pub avg_rating: f64,
    pub review_count: i64,
    pub stars_1: i64,
    pub stars_2: i64,
    pub stars_3: i64,
    pub stars_4: i64,
    pub stars_5: i64,
    pub updated_at: i64,
}

impl NewRatingSummary {
    pub fn from_summary(summary: e::RatingSummary, updated_at: e::Timestamp) -> Self {
        let e::RatingSummary {
            provider_id,
            average,
            review_count,
            histogram,
        } = summary;
        let [stars_1, stars_2, stars_3, stars_4, stars_5] =
            histogram.into_counts().map(|c| c as i64);
        Self {
            provider_id: provider_id.into(),
            avg_rating: average.into(),
            review_count: review_count as i64,
            stars_1,
            stars_2,
            stars_3,
            stars_4,
            stars_5,
            updated_at: updated_at.as_millis(),
        }
    }
}

#[derive(Queryable)]
pub struct RatingSummaryRow {
    pub rowid: i64,
    pub provider_id: String,
    pub avg_rating: f64,
    pub review_count: i64,
    pub stars_1: i64,
    pub stars_2: i64,
    pub stars_3: i64,
    pub stars_4: i64,
    pub stars_5: i64,
    pub updated_at: i64,
}

impl TryFrom<RatingSummaryRow> for e::RatingSummary {
    type Error = anyhow::Error;

    fn try_from(from: RatingSummaryRow) -> Result<Self, Self::Error> {
        let RatingSummaryRow {
            rowid: _,
            provider_id,
            avg_rating,
            review_count,
            stars_1,
            stars_2,
            stars_3,
            stars_4,
            stars_5,
            updated_at: _,
        } = from;
        let counts = [stars_1, stars_2, stars_3, stars_4, stars_5];
        ensure!(
            counts.iter().all(|c| *c >= 0) && review_count >= 0,
            "negative count in rating summary"
        );
        Ok(Self {
            provider_id: provider_id.into(),
            average: avg_rating.into(),
            review_count: review_count as u64,
            histogram: e::StarHistogram::from_counts(counts.map(|c| c as u64)),
        })
    }
}

///////////////////////////////////////////////////////////////////////
// Audit log
///////////////////////////////////////////////////////////////////////

/// JSON shape of the review snapshots embedded in audit rows.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewSnapshotJson {
    pub id: String,
    pub booking_id: Option<String>,
    pub customer_id: Option<String>,
    pub provider_id: String,
    pub rating: i8,
    pub comment: Option<String>,
    pub is_admin_created: bool,
    pub admin_created_by: Option<String>,
    pub admin_notes: Option<String>,
    pub visibility: i16,
    pub is_verified: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<&e::Review> for ReviewSnapshotJson {
    fn from(from: &e::Review) -> Self {
        Self {
            id: from.id.to_string(),
            booking_id: from.booking_id.clone().map(Into::into),
            customer_id: from.customer_id.clone().map(Into::into),
            provider_id: from.provider_id.to_string(),
            rating: from.rating.into(),
            comment: from.comment.clone(),
            is_admin_created: from.is_admin_created,
            admin_created_by: from.admin_created_by.clone().map(Into::into),
            admin_notes: from.admin_notes.clone(),
            visibility: e::VisibilityPrimitive::from(from.visibility),
            is_verified: from.is_verified,
            created_at: from.created_at.as_millis(),
            updated_at: from.updated_at.as_millis(),
        }
    }
}

impl TryFrom<ReviewSnapshotJson> for e::Review {
    type Error = anyhow::Error;

    fn try_from(from: ReviewSnapshotJson) -> Result<Self, Self::Error> {
        let ReviewSnapshotJson {
            id,
            booking_id,
            customer_id,
            provider_id,
            rating,
            comment,
            is_admin_created,
            admin_created_by,
            admin_notes,
            visibility,
            is_verified,
            created_at,
            updated_at,
        } = from;
        Ok(Self {
            id: id.into(),
            booking_id: booking_id.map(Into::into),
            customer_id: customer_id.map(Into::into),
            provider_id: provider_id.into(),
            rating: e::RatingValue::from(rating),
            comment,
            is_admin_created,
            admin_created_by: admin_created_by.map(Into::into),
            admin_notes,
            visibility: e::Visibility::try_from(visibility)?,
            is_verified,
            created_at: e::Timestamp::from_millis(created_at),
            updated_at: e::Timestamp::from_millis(updated_at),
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = audit_log)]
pub struct NewAuditEntry {
    pub id: String,
    pub review_id: Option<String>,
    pub actor_id: String,
    pub action: i16,
    pub before_state: Option<String>,
    pub after_state: Option<String>,
    pub reason: Option<String>,
    pub created_at: i64,
}

impl TryFrom<e::AuditEntry> for NewAuditEntry {
    type Error = anyhow::Error;

    fn try_from(from: e::AuditEntry) -> Result<Self, Self::Error> {
        let e::AuditEntry {
            id,
            review_id,
            actor_id,
            action,
            before,
            after,
            reason,
            created_at,
        } = from;
        let before_state = before
            .as_ref()
            .map(|r| serde_json::to_string(&ReviewSnapshotJson::from(r)))
            .transpose()?;
        let after_state = after
            .as_ref()
            .map(|r| serde_json::to_string(&ReviewSnapshotJson::from(r)))
            .transpose()?;
        Ok(Self {
            id: id.into(),
            review_id: review_id.map(Into::into),
            actor_id: actor_id.into(),
            action: e::AuditActionPrimitive::from(action),
            before_state,
            after_state,
            reason,
            created_at: created_at.as_millis(),
        })
    }
}

#[derive(Queryable)]
pub struct AuditEntryRow {
    pub rowid: i64,
    pub id: String,
    pub review_id: Option<String>,
    pub actor_id: String,
    pub action: i16,
    pub before_state: Option<String>,
    pub after_state: Option<String>,
    pub reason: Option<String>,
    pub created_at: i64,
}

impl TryFrom<AuditEntryRow> for e::AuditEntry {
    type Error = anyhow::Error;

    fn try_from(from: AuditEntryRow) -> Result<Self, Self::Error> {
        let AuditEntryRow {
            rowid: _,
            id,
            review_id,
            actor_id,
            action,
            before_state,
            after_state,
            reason,
            created_at,
        } = from;
        let before = before_state
            .as_deref()
            .map(|json| {
                serde_json::from_str::<ReviewSnapshotJson>(json)
                    .map_err(anyhow::Error::from)
                    .and_then(TryInto::try_into)
            })
            .transpose()?;
        let after = after_state
            .as_deref()
            .map(|json| {
                serde_json::from_str::<ReviewSnapshotJson>(json)
                    .map_err(anyhow::Error::from)
                    .and_then(TryInto::try_into)
            })
            .transpose()?;
        Ok(Self {
            id: id.into(),
            review_id: review_id.map(Into::into),
            actor_id: actor_id.into(),
            action: e::AuditAction::try_from(action)?,
            before,
            after,
            reason,
            created_at: e::Timestamp::from_millis(created_at),
        })
    }
}
