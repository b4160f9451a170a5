use std::collections::HashMap;

use crate::domain::{AssignmentRecord, ClassRecord};

/// Backfills assignment display fields from the matching class record.
///
/// Class data is authoritative: when the lookup succeeds, the class's name
/// and code overwrite whatever the assignment carried. When it fails, the
/// assignment keeps its own values, and anything still missing gets a
/// placeholder deterministic in the class id.
///
/// Assignments and classes load independently, in no guaranteed order, so
/// this runs again whenever either collection changes. It is a pure
/// function of the current inputs and idempotent.
pub fn reconcile_assignments(assignments: &mut [AssignmentRecord], classes: &[ClassRecord]) {
    let by_id: HashMap<i64, &ClassRecord> = classes.iter().map(|c| (c.id, c)).collect();

    for assignment in assignments.iter_mut() {
        match by_id.get(&assignment.class_id) {
            Some(class) => {
                assignment.class_name = Some(class.name.clone());
                assignment.class_code = Some(class.code.clone());
                if let Some(teacher) = &class.teacher_name {
                    assignment.teacher_name = Some(teacher.clone());
                } else if is_blank(&assignment.teacher_name) {
                    assignment.teacher_name = Some("Teacher".to_string());
                }
            }
            None => {
                if is_blank(&assignment.class_name) {
                    assignment.class_name = Some(format!("Class {}", assignment.class_id));
                }
                if is_blank(&assignment.class_code) {
                    assignment.class_code = Some(format!("CODE-{}", assignment.class_id));
                }
                if is_blank(&assignment.teacher_name) {
                    assignment.teacher_name = Some("Teacher".to_string());
                }
            }
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}
