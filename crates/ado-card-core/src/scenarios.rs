//! Built-in Levels
//!
//! Every level shares the same palette and dropdown options; only the
//! answer key and the framing change.

use crate::catalog::{Candidate, CorrectAnswers};
use crate::field::{FieldDescriptor, FieldKey};
use crate::scenario::Scenario;

pub const LOGIN_CRITERIA: &str = "When the user enters valid credentials, then they should be logged in and redirected to the dashboard.\nWhen the user enters invalid credentials, then an error message should be displayed.\nWhen the user clicks \"Forgot Password\", then they should be redirected to the password reset page.";

pub const DASHBOARD_CRITERIA: &str = "When the user logs in, then the dashboard should display their profile information, recent activity, and account balance.\nWhen the user clicks on a menu item, then the corresponding page should load without refreshing the entire page.";

pub const PAYMENT_CRITERIA: &str = "When a customer initiates a payment, then the system should process it without errors.\nWhen a payment fails, then an appropriate error message should be displayed to the user and logged for the admin.";

const STATE_OPTIONS: [&str; 4] = ["New", "Active", "Resolved", "Closed"];
const ASSIGNED_TO_OPTIONS: [&str; 4] = ["John Doe", "Jane Smith", "Alice Johnson", "Bob Brown"];
const AREA_OPTIONS: [&str; 4] = ["Frontend", "Backend", "Database", "DevOps"];
const REASON_OPTIONS: [&str; 4] = ["New Feature", "Bug Fix", "Improvement", "Technical Debt"];
const ITERATION_OPTIONS: [&str; 4] = ["Sprint 1", "Sprint 2", "Sprint 3", "Backlog"];
const STORY_POINT_OPTIONS: [&str; 7] = ["1", "2", "3", "5", "8", "13", "21"];
const PRIORITY_OPTIONS: [&str; 4] = ["1", "2", "3", "4"];

fn plain(values: &[&str]) -> Vec<Candidate> {
    values.iter().copied().map(Candidate::plain).collect()
}

/// Palette and dropdowns shared by every level
fn card_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::droppable(
            FieldKey::Title,
            plain(&[
                "Implement login functionality",
                "Design new user dashboard",
                "Fix payment processing bug",
            ]),
        ),
        FieldDescriptor::droppable(
            FieldKey::Labels,
            vec![
                Candidate::labeled("Feature", Some("#2e7d32")),
                Candidate::labeled("Bug", Some("#c62828")),
                Candidate::labeled("Blocked", Some("#ef6c00")),
                Candidate::labeled("Enhancement", Some("#1565c0")),
            ],
        ),
        FieldDescriptor::droppable(
            FieldKey::Description,
            plain(&[
                "Create a secure login system with email and password",
                "Design an intuitive dashboard for users to view their account info",
                "Investigate and resolve issues with payment gateway integration",
            ]),
        ),
        FieldDescriptor::droppable(
            FieldKey::AcceptanceCriteria,
            plain(&[LOGIN_CRITERIA, DASHBOARD_CRITERIA, PAYMENT_CRITERIA]),
        ),
        FieldDescriptor::droppable(
            FieldKey::Parent,
            plain(&[
                "User Authentication Epic",
                "Dashboard Redesign Project",
                "Payment System Overhaul",
            ]),
        ),
        FieldDescriptor::droppable(
            FieldKey::Related,
            plain(&[
                "Update password reset flow",
                "Implement user settings page",
                "Integrate with new payment provider API",
            ]),
        ),
        FieldDescriptor::dropdown(FieldKey::AssignedTo, ASSIGNED_TO_OPTIONS),
        FieldDescriptor::dropdown(FieldKey::State, STATE_OPTIONS),
        FieldDescriptor::dropdown(FieldKey::Area, AREA_OPTIONS),
        FieldDescriptor::dropdown(FieldKey::Reason, REASON_OPTIONS),
        FieldDescriptor::dropdown(FieldKey::Iteration, ITERATION_OPTIONS),
        FieldDescriptor::dropdown(FieldKey::StoryPoints, STORY_POINT_OPTIONS),
        FieldDescriptor::dropdown(FieldKey::Priority, PRIORITY_OPTIONS),
    ]
}

/// Level 1: the login user story
pub fn login_story() -> Scenario {
    Scenario::new(
        "login-story",
        "USER STORY",
        "📘",
        "US1001",
        "John is starting the new login feature in Sprint 1. Fill in his user story.",
        card_fields(),
        CorrectAnswers::new([
            (FieldKey::Title, "Implement login functionality"),
            (FieldKey::Labels, "Feature"),
            (FieldKey::Description, "Create a secure login system with email and password"),
            (FieldKey::AcceptanceCriteria, LOGIN_CRITERIA),
            (FieldKey::Parent, "User Authentication Epic"),
            (FieldKey::Related, "Update password reset flow"),
            (FieldKey::AssignedTo, "John Doe"),
            (FieldKey::State, "New"),
            (FieldKey::Area, "Frontend"),
            (FieldKey::Reason, "New Feature"),
            (FieldKey::Iteration, "Sprint 1"),
            (FieldKey::StoryPoints, "5"),
            (FieldKey::Priority, "2"),
        ]),
    )
}

/// Level 2: dashboard redesign already in progress
pub fn dashboard_story() -> Scenario {
    Scenario::new(
        "dashboard-story",
        "USER STORY",
        "📘",
        "US1002",
        "Jane picked up the dashboard redesign in Sprint 2 and is actively working on it. Update her story.",
        card_fields(),
        CorrectAnswers::new([
            (FieldKey::Title, "Design new user dashboard"),
            (FieldKey::Labels, "Enhancement"),
            (FieldKey::Description, "Design an intuitive dashboard for users to view their account info"),
            (FieldKey::AcceptanceCriteria, DASHBOARD_CRITERIA),
            (FieldKey::Parent, "Dashboard Redesign Project"),
            (FieldKey::Related, "Implement user settings page"),
            (FieldKey::AssignedTo, "Jane Smith"),
            (FieldKey::State, "Active"),
            (FieldKey::Area, "Frontend"),
            (FieldKey::Reason, "Improvement"),
            (FieldKey::Iteration, "Sprint 2"),
            (FieldKey::StoryPoints, "8"),
            (FieldKey::Priority, "3"),
        ]),
    )
}

/// Level 3: urgent payment bug
pub fn payment_bug() -> Scenario {
    Scenario::new(
        "payment-bug",
        "BUG",
        "🐞",
        "BUG1003",
        "Payments are failing in production. Bob is on it right now, at top priority.",
        card_fields(),
        CorrectAnswers::new([
            (FieldKey::Title, "Fix payment processing bug"),
            (FieldKey::Labels, "Bug"),
            (FieldKey::Description, "Investigate and resolve issues with payment gateway integration"),
            (FieldKey::AcceptanceCriteria, PAYMENT_CRITERIA),
            (FieldKey::Parent, "Payment System Overhaul"),
            (FieldKey::Related, "Integrate with new payment provider API"),
            (FieldKey::AssignedTo, "Bob Brown"),
            (FieldKey::State, "Active"),
            (FieldKey::Area, "Backend"),
            (FieldKey::Reason, "Bug Fix"),
            (FieldKey::Iteration, "Sprint 1"),
            (FieldKey::StoryPoints, "3"),
            (FieldKey::Priority, "1"),
        ]),
    )
}

pub fn all() -> Vec<Scenario> {
    vec![login_story(), dashboard_story(), payment_bug()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_a_full_answer_key() {
        for scenario in all() {
            assert_eq!(scenario.correct().len(), FieldKey::ALL.len(), "{}", scenario.id);
            assert_eq!(scenario.fields().len(), FieldKey::ALL.len(), "{}", scenario.id);
        }
    }

    #[test]
    fn test_login_palette_order() {
        let scenario = login_story();
        let groups: Vec<_> = scenario.catalog().groups().map(|(key, _)| key).collect();
        assert_eq!(
            groups,
            vec![
                FieldKey::Title,
                FieldKey::Labels,
                FieldKey::Description,
                FieldKey::AcceptanceCriteria,
                FieldKey::Parent,
                FieldKey::Related,
            ]
        );
    }

    #[test]
    fn test_criteria_are_three_lines() {
        assert_eq!(LOGIN_CRITERIA.lines().count(), 3);
        assert!(LOGIN_CRITERIA.contains("\"Forgot Password\""));
    }
}
