use chrono::NaiveDate;

use super::error::{EventError, VenueError};
use super::requests::EventDraft;
use super::types::{Event, Venue};

/// Events on `date` whose primary venue is `venue_id`.
///
/// Only the primary venue is considered. Use [`events_in_column`] to find
/// every event displayed under a venue.
pub fn events_for_date_and_venue<'a>(
    events: &'a [Event],
    date: NaiveDate,
    venue_id: &str,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| event.date == date && event.primary_venue_id() == Some(venue_id))
        .collect()
}

/// Events on `date` that are booked against `venue_id`, primary or not.
pub fn events_in_column<'a>(events: &'a [Event], date: NaiveDate, venue_id: &str) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| event.date == date && event.occupies(venue_id))
        .collect()
}

/// Events on `date`, in insertion order.
pub fn events_on_date(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|event| event.date == date).collect()
}

/// Outcome of removing a venue from every event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueRemoval {
    /// The surviving events, in their original order.
    pub events: Vec<Event>,
    /// Ids of events dropped because the venue was their last one.
    pub removed_events: Vec<String>,
    /// Ids of events that lost the venue but kept at least one other.
    pub updated_events: Vec<String>,
}

/// Removes `venue_id` from every event's venue list.
///
/// Each decision is taken against the event as it was before the call. An
/// event left without venues is dropped; otherwise it keeps the remaining
/// venues in order, so its primary venue becomes the next one.
pub fn remove_venue_from_events(events: &[Event], venue_id: &str) -> VenueRemoval {
    let mut removal = VenueRemoval::default();

    for event in events {
        if !event.occupies(venue_id) {
            removal.events.push(event.clone());
            continue;
        }

        let remaining: Vec<String> = event
            .venue_ids
            .iter()
            .filter(|id| id.as_str() != venue_id)
            .cloned()
            .collect();

        if remaining.is_empty() {
            removal.removed_events.push(event.id.clone());
        } else {
            let mut updated = event.clone();
            updated.venue_ids = remaining;
            removal.updated_events.push(updated.id.clone());
            removal.events.push(updated);
        }
    }

    removal
}

/// Validates an event draft collected from the user.
///
/// `venues` is the current venue list; every referenced venue must exist.
pub fn validate_draft(draft: &EventDraft, venues: &[Venue]) -> Result<(), EventError> {
    if draft.title.trim().is_empty() {
        return Err(EventError::EmptyTitle);
    }
    if draft.venue_ids.is_empty() {
        return Err(EventError::NoVenues);
    }
    if let Some(missing) = draft
        .venue_ids
        .iter()
        .find(|id| !venues.iter().any(|venue| &venue.id == *id))
    {
        return Err(EventError::UnknownVenue(missing.clone()));
    }
    if let Some(color) = &draft.color {
        if !is_valid_color(color) {
            return Err(EventError::InvalidColor(color.clone()));
        }
    }
    Ok(())
}

/// Validates a venue name collected from the user.
pub fn validate_venue_name(name: &str) -> Result<(), VenueError> {
    if name.trim().is_empty() {
        return Err(VenueError::EmptyName);
    }
    Ok(())
}

/// Checks if a color string is a hex color (#RGB, #RRGGBB, #RRGGBBAA).
fn is_valid_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => [3, 6, 8].contains(&hex.len()) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_time(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    fn event(id: &str, venues: &[&str], date: NaiveDate) -> Event {
        Event::new(id, id, venues[0], date, make_time(9, 0), make_time(10, 0))
            .with_venues(venues.iter().copied())
    }

    fn venues() -> Vec<Venue> {
        vec![Venue::new("venue-1", "Venue 1"), Venue::new("venue-2", "Venue 2")]
    }

    #[test]
    fn test_events_for_date_and_venue_matches_primary_only() {
        let date = make_date(2024, 1, 15);
        let events = vec![
            event("a", &["venue-1"], date),
            event("b", &["venue-2", "venue-1"], date),
            event("c", &["venue-1"], make_date(2024, 1, 16)),
        ];

        let found = events_for_date_and_venue(&events, date, "venue-1");
        let ids: Vec<&str> = found.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn test_events_in_column_matches_any_venue() {
        let date = make_date(2024, 1, 15);
        let events = vec![
            event("a", &["venue-1"], date),
            event("b", &["venue-2", "venue-1"], date),
            event("c", &["venue-3"], date),
        ];

        let found = events_in_column(&events, date, "venue-1");
        let ids: Vec<&str> = found.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_events_on_date() {
        let date = make_date(2024, 1, 15);
        let events = vec![
            event("a", &["venue-1"], date),
            event("b", &["venue-1"], make_date(2024, 1, 16)),
        ];
        assert_eq!(events_on_date(&events, date).len(), 1);
    }

    #[test]
    fn test_remove_venue_deletes_single_venue_event() {
        let date = make_date(2024, 1, 15);
        let events = vec![event("a", &["venue-1"], date), event("b", &["venue-2"], date)];

        let removal = remove_venue_from_events(&events, "venue-1");

        assert_eq!(removal.removed_events, vec!["a"]);
        assert!(removal.updated_events.is_empty());
        assert_eq!(removal.events.len(), 1);
        assert_eq!(removal.events[0].id, "b");
    }

    #[test]
    fn test_remove_venue_shrinks_multi_venue_event() {
        let date = make_date(2024, 1, 15);
        let events = vec![event("a", &["venue-1", "venue-2", "venue-3"], date)];

        let removal = remove_venue_from_events(&events, "venue-1");

        assert!(removal.removed_events.is_empty());
        assert_eq!(removal.updated_events, vec!["a"]);
        assert_eq!(removal.events[0].venue_ids, vec!["venue-2", "venue-3"]);
        assert_eq!(removal.events[0].primary_venue_id(), Some("venue-2"));
    }

    #[test]
    fn test_remove_venue_from_middle_keeps_primary() {
        let date = make_date(2024, 1, 15);
        let events = vec![event("a", &["venue-1", "venue-2", "venue-3"], date)];

        let removal = remove_venue_from_events(&events, "venue-2");

        assert_eq!(removal.events[0].venue_ids, vec!["venue-1", "venue-3"]);
        assert_eq!(removal.events[0].primary_venue_id(), Some("venue-1"));
    }

    #[test]
    fn test_remove_venue_preserves_order_and_untouched_events() {
        let date = make_date(2024, 1, 15);
        let events = vec![
            event("a", &["venue-2"], date),
            event("b", &["venue-1"], date),
            event("c", &["venue-1", "venue-2"], date),
            event("d", &["venue-3"], date),
        ];

        let removal = remove_venue_from_events(&events, "venue-1");
        let ids: Vec<&str> = removal.events.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, vec!["a", "c", "d"]);
        assert_eq!(removal.events[0], events[0]);
        assert_eq!(removal.events[2], events[3]);
    }

    #[test]
    fn test_remove_unknown_venue_is_noop() {
        let date = make_date(2024, 1, 15);
        let events = vec![event("a", &["venue-1"], date)];

        let removal = remove_venue_from_events(&events, "venue-9");

        assert_eq!(removal.events, events);
        assert!(removal.removed_events.is_empty());
        assert!(removal.updated_events.is_empty());
    }

    #[test]
    fn test_validate_draft() {
        let date = make_date(2024, 1, 15);
        let draft = EventDraft::new("Standup", "venue-1", date, make_time(9, 0), make_time(9, 15));
        assert_eq!(validate_draft(&draft, &venues()), Ok(()));

        let blank = EventDraft { title: "   ".to_string(), ..draft.clone() };
        assert_eq!(validate_draft(&blank, &venues()), Err(EventError::EmptyTitle));

        let no_venues = draft.clone().with_venues(Vec::<String>::new());
        assert_eq!(validate_draft(&no_venues, &venues()), Err(EventError::NoVenues));

        let unknown = draft.clone().with_venues(["venue-1", "venue-9"]);
        assert_eq!(
            validate_draft(&unknown, &venues()),
            Err(EventError::UnknownVenue("venue-9".to_string()))
        );

        let bad_color = draft.clone().with_color("blue-ish");
        assert_eq!(
            validate_draft(&bad_color, &venues()),
            Err(EventError::InvalidColor("blue-ish".to_string()))
        );
    }

    #[test]
    fn test_validate_draft_allows_degenerate_time_range() {
        let date = make_date(2024, 1, 15);
        let draft = EventDraft::new("Oops", "venue-1", date, make_time(10, 0), make_time(9, 30));
        assert_eq!(validate_draft(&draft, &venues()), Ok(()));
    }

    #[test]
    fn test_validate_venue_name() {
        assert_eq!(validate_venue_name("Main Hall"), Ok(()));
        assert_eq!(validate_venue_name("  "), Err(VenueError::EmptyName));
    }

    #[test]
    fn test_is_valid_color() {
        assert!(is_valid_color("#3b82f6"));
        assert!(is_valid_color("#FFF"));
        assert!(!is_valid_color("3b82f6"));
        assert!(!is_valid_color("#12345"));
    }
}
