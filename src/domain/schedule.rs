use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    Occupied,
    Clean,
    #[serde(rename = "Needs Cleaning")]
    NeedsCleaning,
}

/// One entry of the enriched live schedule (`GET /schedules/live`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: i64,
    pub class_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub room_number: String,
    pub status: RoomStatus,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub class_code: Option<String>,
    #[serde(default)]
    pub teacher_name: Option<String>,
}
