use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chick {
    pub id: Uuid,
    pub flock_id: Uuid,
    pub name: String,
    pub breed: Option<String>,
    pub hatch_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChickPhoto {
    pub id: Uuid,
    pub chick_id: Uuid,
    pub image_url: String,
    pub thumbnail_url: String,
    pub taken_at: DateTime<Utc>,
    pub week_number: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChickNote {
    pub id: Uuid,
    pub chick_id: Uuid,
    pub content: String,
    pub week_number: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChickInput {
    pub name: String,
    pub breed: Option<String>,
    pub hatch_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateChickInput {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub hatch_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChickPhotoInput {
    pub image_url: String,
    pub thumbnail_url: String,
    pub taken_at: Option<DateTime<Utc>>,
    pub week_number: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChickNoteInput {
    pub content: String,
    pub week_number: Option<i64>,
}

/// Gallery listing entry: a chick plus its most recent photo, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChickSummary {
    #[serde(flatten)]
    pub chick: Chick,
    pub latest_photo: Option<ChickPhoto>,
}

/// Full profile view: the chick with its journal attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChickProfile {
    #[serde(flatten)]
    pub chick: Chick,
    pub photos: Vec<ChickPhoto>,
    pub notes: Vec<ChickNote>,
}
