/// Result of applying the weekly overtime rule to a total.
#[derive(Debug, Clone, Copy)]
pub struct OvertimeAssessment {
    pub is_overtime: bool,
    pub overtime_hours: f64,
}

/// Pure threshold rule: hours above `threshold_hours` are overtime.
pub fn evaluate(total_hours: f64, threshold_hours: f64) -> OvertimeAssessment {
    let overtime_hours = (total_hours - threshold_hours).max(0.0);

    OvertimeAssessment {
        is_overtime: overtime_hours > 0.0,
        overtime_hours,
    }
}
