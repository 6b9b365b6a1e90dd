//! Calendar events driven through the application container.

mod common;

use puppy_care::application::{
    CreateEventCommand, DeleteEventCommand, GetEventQuery, ListEventsQuery, RecurringPatternInput,
    ScheduleNextOccurrenceCommand, UpdateEventCommand,
};
use puppy_care::domain::calendar::{EventType, UrgencyLevel};
use puppy_care::domain::foundation::ErrorCode;

fn create(title: &str, days: i64, event_type: &str) -> CreateEventCommand {
    CreateEventCommand {
        title: title.to_string(),
        description: None,
        event_date_time: common::days_from_now(days),
        event_type: event_type.to_string(),
        puppy_id: "pup-1".to_string(),
        recurring_pattern: None,
    }
}

#[tokio::test]
async fn weekly_training_rolls_forward_until_its_end_date() {
    let (app, clock) = common::container();

    let first = app
        .create_event
        .handle(CreateEventCommand {
            recurring_pattern: Some(RecurringPatternInput {
                frequency: "weekly".to_string(),
                interval: 1,
                end_date: Some(common::days_from_now(16)),
            }),
            ..create("Puppy class", 2, "training")
        })
        .await
        .unwrap();

    let second = app
        .schedule_next_occurrence
        .handle(ScheduleNextOccurrenceCommand {
            event_id: first.id().to_string(),
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(second.event_date_time().value(), common::now().plus_days(9));

    let third = app
        .schedule_next_occurrence
        .handle(ScheduleNextOccurrenceCommand {
            event_id: second.id().to_string(),
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(third.event_date_time().value(), common::now().plus_days(16));

    // Day 23 is past the end date.
    let none = app
        .schedule_next_occurrence
        .handle(ScheduleNextOccurrenceCommand {
            event_id: third.id().to_string(),
        })
        .await
        .unwrap();
    assert!(none.is_none());

    clock.advance_days(5);
    let upcoming = app
        .list_events
        .handle(ListEventsQuery::Upcoming {
            puppy_id: "pup-1".to_string(),
            limit: None,
        })
        .await
        .unwrap();
    let ids: Vec<_> = upcoming.iter().map(|e| e.id().clone()).collect();
    assert_eq!(ids, vec![second.id().clone(), third.id().clone()]);
}

#[tokio::test]
async fn listings_are_sorted_by_date() {
    let (app, _clock) = common::container();

    for (title, days, event_type) in [
        ("Grooming", 20, "grooming"),
        ("Vet", 3, "vet_appointment"),
        ("Dinner", -1, "feeding"),
        ("Second vet", 10, "vet_appointment"),
    ] {
        app.create_event
            .handle(create(title, days, event_type))
            .await
            .unwrap();
    }

    let titles = |events: Vec<puppy_care::domain::calendar::Event>| -> Vec<String> {
        events
            .iter()
            .map(|e| e.title().value().to_string())
            .collect()
    };

    let all = app
        .list_events
        .handle(ListEventsQuery::ByPuppy {
            puppy_id: "pup-1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(titles(all), vec!["Dinner", "Vet", "Second vet", "Grooming"]);

    let vets = app
        .list_events
        .handle(ListEventsQuery::ByType {
            event_type: EventType::VetAppointment.to_string(),
        })
        .await
        .unwrap();
    assert_eq!(titles(vets), vec!["Vet", "Second vet"]);

    let window = app
        .list_events
        .handle(ListEventsQuery::DateRange {
            start: common::days_from_now(0),
            end: common::days_from_now(10),
        })
        .await
        .unwrap();
    assert_eq!(titles(window), vec!["Vet", "Second vet"]);

    let next_one = app
        .list_events
        .handle(ListEventsQuery::Upcoming {
            puppy_id: "pup-1".to_string(),
            limit: Some(1),
        })
        .await
        .unwrap();
    assert_eq!(titles(next_one), vec!["Vet"]);
}

#[tokio::test]
async fn update_view_and_delete_an_event() {
    let (app, _clock) = common::container();
    let event = app
        .create_event
        .handle(create("Vet check", 10, "vet_appointment"))
        .await
        .unwrap();

    let moved = app
        .update_event
        .handle(UpdateEventCommand {
            event_id: event.id().to_string(),
            event_date_time: Some(common::days_from_now(1)),
            description: Some("Bring vaccination card".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(moved.title(), event.title());
    assert_eq!(moved.description().value(), "Bring vaccination card");

    let view = app
        .get_event
        .handle(GetEventQuery {
            event_id: event.id().to_string(),
        })
        .await
        .unwrap();
    assert!(view.is_upcoming);
    assert!(!view.is_overdue);
    assert_eq!(view.days_until, 1);
    assert_eq!(view.urgency, UrgencyLevel::High);

    app.delete_event
        .handle(DeleteEventCommand {
            event_id: event.id().to_string(),
        })
        .await
        .unwrap();

    let err = app
        .delete_event
        .handle(DeleteEventCommand {
            event_id: event.id().to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
}

#[tokio::test]
async fn invalid_update_leaves_event_untouched() {
    let (app, _clock) = common::container();
    let event = app
        .create_event
        .handle(create("Vet check", 10, "vet_appointment"))
        .await
        .unwrap();

    let err = app
        .update_event
        .handle(UpdateEventCommand {
            event_id: event.id().to_string(),
            title: Some("New title".to_string()),
            event_type: Some("party".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.message, "Invalid EventType: party");

    let view = app
        .get_event
        .handle(GetEventQuery {
            event_id: event.id().to_string(),
        })
        .await
        .unwrap();
    assert_eq!(view.event, event);
}
