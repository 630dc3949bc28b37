use super::common::*;
use crate::tracker::domain::{ApplicationStatus, InterviewStatus};
use crate::tracker::stats::aggregate;

#[test]
fn empty_input_yields_zeroes_and_absences() {
    let stats = aggregate(&[], &[], reference_now());

    assert_eq!(stats.total, 0);
    assert_eq!(stats.conversion_rate, 0);
    assert!(stats.top_company.is_none());
    assert!(stats.most_active_month.is_none());
    assert!(stats.earliest_application.is_none());
    assert!(stats.latest_completed_interview.is_none());
    assert_eq!(stats.days_in_use, 0);
}

#[test]
fn worked_example_matches_expected_values() {
    let applications = vec![
        application_with_status(1, "Acme", date(2024, 1, 5), ApplicationStatus::Interview),
        application_with_status(2, "Acme", date(2024, 1, 10), ApplicationStatus::Interview),
        application_with_status(3, "Globex", date(2024, 2, 1), ApplicationStatus::Waiting),
    ];

    let stats = aggregate(&applications, &[], datetime(2024, 2, 10, 0, 0));

    assert_eq!(stats.total, 3);
    assert_eq!(stats.waiting, 1);
    assert_eq!(stats.interview, 2);
    assert_eq!(stats.rejected, 0);
    // 2/3 rounds to 67, not truncates to 66
    assert_eq!(stats.conversion_rate, 67);

    let top = stats.top_company.expect("top company present");
    assert_eq!(top.name, "Acme");
    assert_eq!(top.count, 2);

    let month = stats.most_active_month.expect("most active month present");
    assert_eq!(month.month.to_string(), "2024-01");
    assert_eq!(month.count, 2);

    assert_eq!(stats.earliest_application, Some(date(2024, 1, 5)));
    assert_eq!(stats.days_in_use, 36);
}

#[test]
fn unknown_statuses_count_as_other() {
    let applications = vec![
        application_with_status(1, "Acme", date(2024, 1, 5), ApplicationStatus::Other),
        application_with_status(2, "Acme", date(2024, 1, 6), ApplicationStatus::Interview),
    ];

    let stats = aggregate(&applications, &[], reference_now());

    assert_eq!(stats.total, 2);
    assert_eq!(stats.other, 1);
    assert_eq!(stats.conversion_rate, 50);
}

#[test]
fn company_ties_break_by_first_occurrence() {
    let applications = vec![
        application(1, "Globex", date(2024, 1, 5)),
        application(2, "Acme", date(2024, 1, 6)),
        application(3, "Globex", date(2024, 1, 7)),
        application(4, "Acme", date(2024, 1, 8)),
    ];

    let stats = aggregate(&applications, &[], reference_now());

    let top = stats.top_company.expect("top company present");
    assert_eq!(top.name, "Globex");
    assert_eq!(top.count, 2);
}

#[test]
fn month_ties_break_by_first_occurrence() {
    let applications = vec![
        application(1, "Acme", date(2024, 2, 5)),
        application(2, "Acme", date(2024, 1, 6)),
        application(3, "Acme", date(2024, 2, 7)),
        application(4, "Acme", date(2024, 1, 8)),
    ];

    let stats = aggregate(&applications, &[], reference_now());

    let month = stats.most_active_month.expect("most active month present");
    assert_eq!(month.month.to_string(), "2024-02");
    assert_eq!(month.count, 2);
}

#[test]
fn latest_completed_interview_ignores_other_statuses_and_orphans() {
    let applications = vec![application(1, "Acme", date(2024, 1, 5))];
    let interviews = vec![
        interview_with_status(1, 1, datetime(2024, 1, 10, 9, 0), InterviewStatus::Completed),
        interview_with_status(2, 1, datetime(2024, 1, 20, 9, 0), InterviewStatus::Completed),
        // scheduled later, but not completed
        interview_with_status(3, 1, datetime(2024, 1, 25, 9, 0), InterviewStatus::Scheduled),
        // completed later, but orphaned
        interview_with_status(4, 99, datetime(2024, 1, 28, 9, 0), InterviewStatus::Completed),
    ];

    let stats = aggregate(&applications, &interviews, reference_now());

    assert_eq!(
        stats.latest_completed_interview,
        Some(datetime(2024, 1, 20, 9, 0))
    );
    assert_eq!(stats.skipped_interviews, 1);
}

#[test]
fn future_earliest_date_clamps_days_in_use_to_zero() {
    let applications = vec![application(1, "Acme", date(2024, 3, 1))];

    let stats = aggregate(&applications, &[], reference_now());

    assert_eq!(stats.earliest_application, Some(date(2024, 3, 1)));
    assert_eq!(stats.days_in_use, 0);
}

#[test]
fn aggregation_is_deterministic() {
    let applications = vec![
        application_with_status(1, "Acme", date(2024, 1, 5), ApplicationStatus::Interview),
        application(2, "Globex", date(2024, 2, 1)),
    ];
    let interviews = vec![interview_with_status(
        1,
        1,
        datetime(2024, 1, 10, 9, 0),
        InterviewStatus::Completed,
    )];

    let first = aggregate(&applications, &interviews, reference_now());
    let second = aggregate(&applications, &interviews, reference_now());

    let first_json = serde_json::to_string(&first).expect("stats serialize");
    let second_json = serde_json::to_string(&second).expect("stats serialize");
    assert_eq!(first_json, second_json);
}
