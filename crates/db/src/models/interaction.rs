//! Interaction entity model and DTOs.

use chrono::Utc;
use interaction_core::types::{DbId, Timestamp};
use interaction_core::validation::{not_in_future, touchpoint_id};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationErrors};

/// How the interaction took place. Stored as a SMALLINT code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum Channel {
    FaceToFace = 1,
    Telephone = 2,
    Webchat = 3,
    Videochat = 4,
    Email = 5,
    SocialMedia = 6,
    Sms = 7,
    Post = 8,
    CoBrowse = 9,
    Other = 99,
}

/// What the interaction was about. Stored as a SMALLINT code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum InteractionType {
    Enquiry = 1,
    Referral = 2,
    GeneralInformation = 3,
    CareersAssessment = 4,
    ActionPlan = 5,
    Other = 99,
}

/// An interaction row from the `interactions` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Interaction {
    pub id: DbId,
    pub customer_id: DbId,
    /// Touchpoint that created the record.
    pub touchpoint_id: Option<String>,
    pub adviser_details_id: Option<DbId>,
    pub date_and_time_of_interaction: Option<Timestamp>,
    pub channel: Option<Channel>,
    pub interaction_type: Option<InteractionType>,
    pub last_modified_date: Option<Timestamp>,
    pub last_modified_touchpoint_id: Option<String>,
}

impl Interaction {
    /// Copy every field present in `patch` onto this interaction.
    ///
    /// Identity and ownership (`id`, `customer_id`, `touchpoint_id`) are never
    /// touched by a patch.
    pub fn patched(mut self, patch: &InteractionPatch) -> Self {
        if let Some(adviser) = patch.adviser_details_id {
            self.adviser_details_id = Some(adviser);
        }
        if let Some(when) = patch.date_and_time_of_interaction {
            self.date_and_time_of_interaction = Some(when);
        }
        if let Some(channel) = patch.channel {
            self.channel = Some(channel);
        }
        if let Some(kind) = patch.interaction_type {
            self.interaction_type = Some(kind);
        }
        if let Some(modified) = patch.last_modified_date {
            self.last_modified_date = Some(modified);
        }
        if let Some(tp) = &patch.last_modified_touchpoint_id {
            self.last_modified_touchpoint_id = Some(tp.clone());
        }
        self
    }
}

/// DTO for creating a new interaction.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInteraction {
    pub customer_id: DbId,
    pub touchpoint_id: Option<String>,
    pub adviser_details_id: Option<DbId>,
    pub date_and_time_of_interaction: Option<Timestamp>,
    pub channel: Option<Channel>,
    pub interaction_type: Option<InteractionType>,
}

/// Partial update for an interaction. All fields are optional; absent fields
/// are left untouched by [`Interaction::patched`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InteractionPatch {
    pub adviser_details_id: Option<DbId>,
    pub date_and_time_of_interaction: Option<Timestamp>,
    pub channel: Option<Channel>,
    pub interaction_type: Option<InteractionType>,
    pub last_modified_date: Option<Timestamp>,
    pub last_modified_touchpoint_id: Option<String>,
}

impl InteractionPatch {
    /// Stamp the request's audit fields onto the patch.
    ///
    /// The calling touchpoint always becomes the last modifier; the
    /// modification time defaults to `now` when the caller did not send one.
    pub fn with_request_defaults(mut self, touchpoint: &str, now: Timestamp) -> Self {
        self.last_modified_touchpoint_id = Some(touchpoint.to_string());
        if self.last_modified_date.is_none() {
            self.last_modified_date = Some(now);
        }
        self
    }
}

impl Validate for InteractionPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let now = Utc::now();
        let mut errors = ValidationErrors::new();

        if let Some(when) = &self.date_and_time_of_interaction {
            if let Err(e) = not_in_future(when, &now) {
                errors.add("date_and_time_of_interaction", e);
            }
        }
        if let Some(modified) = &self.last_modified_date {
            if let Err(e) = not_in_future(modified, &now) {
                errors.add("last_modified_date", e);
            }
        }
        if let Some(tp) = &self.last_modified_touchpoint_id {
            if let Err(e) = touchpoint_id(tp) {
                errors.add("last_modified_touchpoint_id", e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use interaction_core::validation::validate_resource;
    use serde_json::json;

    fn existing() -> Interaction {
        Interaction {
            id: DbId::new_v4(),
            customer_id: DbId::new_v4(),
            touchpoint_id: Some("0000000001".into()),
            adviser_details_id: None,
            date_and_time_of_interaction: None,
            channel: Some(Channel::Telephone),
            interaction_type: Some(InteractionType::Enquiry),
            last_modified_date: None,
            last_modified_touchpoint_id: None,
        }
    }

    #[test]
    fn patch_only_overwrites_present_fields() {
        let before = existing();
        let patch = InteractionPatch {
            channel: Some(Channel::Email),
            ..Default::default()
        };

        let after = before.clone().patched(&patch);

        assert_eq!(after.channel, Some(Channel::Email));
        assert_eq!(after.interaction_type, before.interaction_type);
        assert_eq!(after.touchpoint_id, before.touchpoint_id);
        assert_eq!(after.id, before.id);
        assert_eq!(after.customer_id, before.customer_id);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let before = existing();
        let after = before.clone().patched(&InteractionPatch::default());
        assert_eq!(after, before);
    }

    #[test]
    fn request_defaults_stamp_touchpoint_and_time() {
        let now = Utc::now();
        let patch = InteractionPatch::default().with_request_defaults("0000000002", now);
        assert_eq!(patch.last_modified_touchpoint_id.as_deref(), Some("0000000002"));
        assert_eq!(patch.last_modified_date, Some(now));
    }

    #[test]
    fn request_defaults_keep_caller_modified_date() {
        let earlier = Utc::now() - Duration::hours(3);
        let patch = InteractionPatch {
            last_modified_date: Some(earlier),
            last_modified_touchpoint_id: Some("9999999999".into()),
            ..Default::default()
        }
        .with_request_defaults("0000000002", Utc::now());

        assert_eq!(patch.last_modified_date, Some(earlier));
        assert_eq!(patch.last_modified_touchpoint_id.as_deref(), Some("0000000002"));
    }

    #[test]
    fn deserializes_partial_payload() {
        let patch: InteractionPatch =
            serde_json::from_value(json!({"channel": "webchat", "unknown": 1})).unwrap();
        assert_eq!(patch.channel, Some(Channel::Webchat));
        assert!(patch.interaction_type.is_none());
    }

    #[test]
    fn unknown_enum_variant_is_rejected() {
        let result = serde_json::from_value::<InteractionPatch>(json!({"channel": "pigeon"}));
        assert!(result.is_err());
    }

    #[test]
    fn future_dates_and_bad_touchpoint_all_fail() {
        let tomorrow = Utc::now() + Duration::days(1);
        let patch = InteractionPatch {
            date_and_time_of_interaction: Some(tomorrow),
            last_modified_date: Some(tomorrow),
            last_modified_touchpoint_id: Some("12".into()),
            ..Default::default()
        };

        let fields: Vec<String> = validate_resource(&patch)
            .into_iter()
            .map(|f| f.field)
            .collect();
        assert_eq!(
            fields,
            [
                "date_and_time_of_interaction",
                "last_modified_date",
                "last_modified_touchpoint_id",
            ]
        );
    }

    #[test]
    fn valid_patch_has_no_failures() {
        let patch = InteractionPatch {
            date_and_time_of_interaction: Some(Utc::now() - Duration::minutes(10)),
            interaction_type: Some(InteractionType::Referral),
            ..Default::default()
        }
        .with_request_defaults("0000000001", Utc::now());

        assert!(validate_resource(&patch).is_empty());
    }

    #[test]
    fn interaction_serializes_enums_as_snake_case() {
        let mut interaction = existing();
        interaction.channel = Some(Channel::FaceToFace);
        let json = serde_json::to_value(&interaction).unwrap();
        assert_eq!(json["channel"], "face_to_face");
        assert_eq!(json["interaction_type"], "enquiry");
    }
}
