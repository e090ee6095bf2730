use mentalload_core::{effective_minutes, Assignment, TaskResponse, TimeAdjustment};

fn adjusted(adjustment: TimeAdjustment) -> TaskResponse {
    TaskResponse::new("dishes", Assignment::Me).with_adjustment(adjustment)
}

#[test]
fn adjustment_table_scales_baseline() {
    assert_eq!(effective_minutes(&adjusted(TimeAdjustment::MuchLess), 200), 100);
    assert_eq!(effective_minutes(&adjusted(TimeAdjustment::Less), 200), 150);
    assert_eq!(effective_minutes(&adjusted(TimeAdjustment::AboutRight), 200), 200);
    assert_eq!(effective_minutes(&adjusted(TimeAdjustment::More), 200), 250);
    assert_eq!(effective_minutes(&adjusted(TimeAdjustment::MuchMore), 200), 300);
}

#[test]
fn unknown_adjustment_falls_back_to_baseline() {
    let response: TaskResponse = serde_json::from_value(serde_json::json!({
        "task_id": "dishes",
        "assignment": "me",
        "time_adjustment": "much_much_more",
        "estimated_minutes": 10,
    }))
    .unwrap();

    assert_eq!(effective_minutes(&response, 80), 80);
    assert_eq!(TimeAdjustment::parse("sideways"), TimeAdjustment::Unrecognized);
}

#[test]
fn estimated_minutes_used_verbatim_without_adjustment() {
    let response = TaskResponse::new("dishes", Assignment::Me).with_estimated_minutes(37);
    assert_eq!(effective_minutes(&response, 210), 37);
}

#[test]
fn baseline_used_when_nothing_given() {
    let response = TaskResponse::new("dishes", Assignment::Me);
    assert_eq!(effective_minutes(&response, 210), 210);
}
