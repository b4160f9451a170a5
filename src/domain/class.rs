use serde::{Deserialize, Serialize};

/// A class as the backend reports it. Only `id`, `name` and `code` are
/// guaranteed; the remaining fields depend on which endpoint served the
/// record (the teacher listing adds `student_count`, the student listing
/// adds `teacher_name`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassRecord {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub teacher_id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub academic_year: Option<String>,
    #[serde(default)]
    pub teacher_name: Option<String>,
    #[serde(default)]
    pub student_count: Option<i64>,
}

/// Aggregate block returned alongside the teacher's classes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub total_classes: i64,
    pub total_students: i64,
}

/// Response shape of `GET /teachers/me/classes`.
#[derive(Debug, Clone, Deserialize)]
pub struct TeacherClassesResponse {
    pub classes: Vec<ClassRecord>,
    #[serde(default)]
    pub metrics: ClassMetrics,
}
