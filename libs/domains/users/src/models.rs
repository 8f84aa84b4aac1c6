use chrono::{DateTime, Local, TimeZone};
use mongodb::bson::{oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use utoipa::ToSchema;

/// Role value that grants admin status
pub const ADMIN_ROLE: &str = "admin";

/// User document from the `users` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    #[schema(value_type = String, example = "65a1b2c3d4e5f60718293a4b")]
    pub id: ObjectId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    #[serde(default)]
    pub email: String,

    /// Only `admin` has meaning; set out of band
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(
        rename = "creationTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(example = "07-MAR-2024, 3:04:05 PM")]
    pub creation_time: Option<String>,

    /// Written once at registration and never refreshed
    #[serde(
        rename = "lastLogInTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_log_in_time: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }
}

/// Document written on registration; the store assigns `_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub email: String,
    #[serde(rename = "creationTime")]
    pub creation_time: String,
    #[serde(rename = "lastLogInTime")]
    pub last_log_in_time: String,
}

impl NewUser {
    /// Stamp both timestamps with the same local time.
    pub fn from_registration(input: RegisterUser, now: &DateTime<Local>) -> Self {
        let stamp = format_timestamp(now);
        Self {
            name: input.name,
            photo_url: input.photo_url,
            email: input.email,
            creation_time: stamp.clone(),
            last_log_in_time: stamp,
        }
    }

    /// Materialize the stored form once an id is known.
    pub fn into_user(self, id: ObjectId) -> User {
        User {
            id,
            name: self.name,
            photo_url: self.photo_url,
            email: self.email,
            role: None,
            creation_time: Some(self.creation_time),
            last_log_in_time: Some(self.last_log_in_time),
        }
    }
}

/// Body of `POST /userRegister`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterUser {
    #[serde(default)]
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "https://i.ibb.co/ada.png")]
    pub photo_url: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResult {
    pub acknowledged: bool,
    /// Hex id of the new user document
    pub inserted_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct EmailExists {
    pub exists: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct AdminStatus {
    pub admin: bool,
}

/// `DD-MON-YYYY, h:mm:ss AM` with an uppercase month abbreviation.
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{}-{}-{}, {}",
        at.format("%d"),
        at.format("%b").to_string().to_uppercase(),
        at.format("%Y"),
        at.format("%-I:%M:%S %p"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mongodb::bson::{doc, from_document};

    #[test]
    fn test_format_timestamp_afternoon() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 15, 4, 5).unwrap();
        assert_eq!(format_timestamp(&at), "07-MAR-2024, 3:04:05 PM");
    }

    #[test]
    fn test_format_timestamp_midnight_and_noon() {
        let midnight = Utc.with_ymd_and_hms(2023, 12, 25, 0, 0, 9).unwrap();
        assert_eq!(format_timestamp(&midnight), "25-DEC-2023, 12:00:09 AM");

        let noon = Utc.with_ymd_and_hms(2023, 1, 1, 12, 30, 0).unwrap();
        assert_eq!(format_timestamp(&noon), "01-JAN-2023, 12:30:00 PM");
    }

    #[test]
    fn test_new_user_stamps_both_times() {
        let now = Local::now();
        let user = NewUser::from_registration(
            RegisterUser {
                name: Some("Ada".into()),
                photo_url: None,
                email: "ada@example.com".into(),
            },
            &now,
        );

        assert_eq!(user.creation_time, user.last_log_in_time);
        assert_eq!(user.creation_time, format_timestamp(&now));

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("_id").is_none());
        assert!(json.get("photo_url").is_none());
        assert!(json.get("creationTime").is_some());
    }

    #[test]
    fn test_user_reads_sparse_document() {
        let id = ObjectId::new();
        let user: User = from_document(doc! {
            "_id": id,
            "email": "grace@example.com",
            "role": "admin",
        })
        .unwrap();

        assert!(user.is_admin());
        assert!(user.name.is_none());

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["_id"], id.to_hex());
        assert_eq!(json["email"], "grace@example.com");
    }

    #[test]
    fn test_only_exact_admin_role_is_admin() {
        let mut user = NewUser {
            name: None,
            photo_url: None,
            email: "x@example.com".into(),
            creation_time: String::new(),
            last_log_in_time: String::new(),
        }
        .into_user(ObjectId::new());
        assert!(!user.is_admin());

        user.role = Some("Admin".into());
        assert!(!user.is_admin());

        user.role = Some("admin".into());
        assert!(user.is_admin());
    }

    #[test]
    fn test_register_result_shape() {
        let result = RegisterResult {
            acknowledged: true,
            inserted_id: "65a1b2c3d4e5f60718293a4b".into(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["insertedId"], "65a1b2c3d4e5f60718293a4b");
    }
}
