//! Command dispatch: turns parsed CLI input into store calls and output.

use anyhow::{bail, Context};
use venuegrid_core::schedule::{
    events_on_date, layout_day, validate_draft, validate_venue_name, Event, EventDraft,
    EventPatch,
};
use venuegrid_core::storage::KeyValueStorage;
use venuegrid_core::time::{generate_time_slots, get_week_days, today};

use crate::cli::events::EventsAction;
use crate::cli::venues::VenuesAction;
use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::output::{format_output, pretty};
use crate::store::Scheduler;

/// Runs `cli` against `scheduler` and returns the text to print.
pub fn run<S: KeyValueStorage>(
    cli: Cli,
    config: &Config,
    scheduler: &mut Scheduler<S>,
) -> anyhow::Result<String> {
    let format = cli.format;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Venues(cmd) => match cmd.action {
            VenuesAction::List => Ok(match format {
                OutputFormat::Json => format_output(&scheduler.venues(), format),
                OutputFormat::Pretty => pretty::format_venues(scheduler.venues()),
            }),
            VenuesAction::Add { name } => {
                let name = name.trim().to_string();
                validate_venue_name(&name)?;
                let venue = scheduler.add_venue(name).context("Failed to add venue")?;
                Ok(match format {
                    OutputFormat::Json => format_output(&venue, format),
                    OutputFormat::Pretty => format!("Created:\n{}", pretty::format_venue(&venue)),
                })
            }
            VenuesAction::Delete { id } => {
                if !scheduler.delete_venue(&id).context("Failed to delete venue")? {
                    bail!("Venue not found: {id}");
                }
                Ok(confirmation(quiet, format!("Deleted venue {id}")))
            }
        },
        Commands::Events(cmd) => match cmd.action {
            EventsAction::List { date, venue } => {
                let events: Vec<&Event> = match (date, venue.as_deref()) {
                    (Some(date), Some(venue_id)) => {
                        scheduler.events_for_date_and_venue(date, venue_id)
                    }
                    (Some(date), None) => events_on_date(scheduler.events(), date),
                    (None, Some(venue_id)) => scheduler
                        .events()
                        .iter()
                        .filter(|event| event.primary_venue_id() == Some(venue_id))
                        .collect(),
                    (None, None) => scheduler.events().iter().collect(),
                };
                Ok(match format {
                    OutputFormat::Json => format_output(&events, format),
                    OutputFormat::Pretty => pretty::format_events(events),
                })
            }
            EventsAction::Add {
                title,
                venues,
                date,
                start,
                end,
                color,
            } => {
                let draft = EventDraft {
                    title: title.trim().to_string(),
                    venue_ids: venues,
                    date,
                    start_time: start,
                    end_time: end,
                    color,
                };
                validate_draft(&draft, scheduler.venues())?;

                let event = scheduler.add_event(draft).context("Failed to add event")?;
                Ok(match format {
                    OutputFormat::Json => format_output(&event, format),
                    OutputFormat::Pretty => format!("Created:\n{}", pretty::format_event(&event)),
                })
            }
            EventsAction::Update {
                id,
                title,
                venues,
                date,
                start,
                end,
                color,
            } => {
                let patch = EventPatch {
                    title: title.map(|t| t.trim().to_string()),
                    venue_ids: (!venues.is_empty()).then_some(venues),
                    date,
                    start_time: start,
                    end_time: end,
                    color,
                };
                if patch.is_empty() {
                    bail!("Nothing to update");
                }

                let Some(current) = scheduler.event(&id) else {
                    bail!("Event not found: {id}");
                };
                let mut preview = current.clone();
                patch.clone().apply_to(&mut preview);
                validate_draft(&draft_of(&preview), scheduler.venues())?;

                let event = scheduler
                    .update_event(&id, patch)
                    .context("Failed to update event")?
                    .with_context(|| format!("Event not found: {id}"))?;
                Ok(match format {
                    OutputFormat::Json => format_output(&event, format),
                    OutputFormat::Pretty => format!("Updated:\n{}", pretty::format_event(&event)),
                })
            }
            EventsAction::Delete { id } => {
                if !scheduler.delete_event(&id).context("Failed to delete event")? {
                    bail!("Event not found: {id}");
                }
                Ok(confirmation(quiet, format!("Deleted event {id}")))
            }
        },
        Commands::Grid(args) => {
            let mut spec = config.grid_spec();
            if let Some(slot_height) = args.slot_height {
                if !(slot_height.is_finite() && slot_height > 0.0) {
                    bail!("Slot height must be a positive number");
                }
                spec.slot_height = slot_height;
            }
            let layout = layout_day(scheduler.data(), args.date.unwrap_or_else(today), &spec);
            Ok(match format {
                OutputFormat::Json => format_output(&layout, format),
                OutputFormat::Pretty => pretty::format_layout(&layout),
            })
        }
        Commands::Days(args) => {
            let selected = args.date.unwrap_or_else(today);
            let days = get_week_days(selected);
            Ok(match format {
                OutputFormat::Json => format_output(&days, format),
                OutputFormat::Pretty => pretty::format_days(&days, selected),
            })
        }
        Commands::Slots(args) => {
            let slots = generate_time_slots(
                args.start_hour.unwrap_or(config.start_hour),
                args.end_hour.unwrap_or(config.end_hour),
            );
            Ok(match format {
                OutputFormat::Json => {
                    let labels: Vec<String> = slots
                        .iter()
                        .map(|slot| slot.format("%H:%M").to_string())
                        .collect();
                    format_output(&labels, format)
                }
                OutputFormat::Pretty => pretty::format_slots(&slots),
            })
        }
    }
}

/// The draft an existing event would be created from.
fn draft_of(event: &Event) -> EventDraft {
    EventDraft {
        title: event.title.clone(),
        venue_ids: event.venue_ids.clone(),
        date: event.date,
        start_time: event.start_time,
        end_time: event.end_time,
        color: event.color.clone(),
    }
}

fn confirmation(quiet: bool, message: String) -> String {
    if quiet {
        String::new()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::NaiveDate;
    use clap::Parser;
    use venuegrid_core::schedule::EventError;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn scheduler() -> Scheduler<MemoryStorage> {
        Scheduler::load_with_date(MemoryStorage::new(), sample_date()).unwrap()
    }

    fn exec(scheduler: &mut Scheduler<MemoryStorage>, args: &[&str]) -> anyhow::Result<String> {
        let mut argv = vec!["venuegrid"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        run(cli, &Config::default(), scheduler)
    }

    #[test]
    fn test_venues_list_json() {
        let mut scheduler = scheduler();
        let output = exec(&mut scheduler, &["--format", "json", "venues", "list"]).unwrap();
        let venues: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();

        assert_eq!(venues.len(), 10);
        assert_eq!(venues[0]["id"], "venue-1");
    }

    #[test]
    fn test_venues_add_trims_name() {
        let mut scheduler = scheduler();
        let output = exec(&mut scheduler, &["venues", "add", "  Rooftop  "]).unwrap();

        assert!(output.starts_with("Created:\nRooftop"));
        assert_eq!(scheduler.venues().last().unwrap().name, "Rooftop");
    }

    #[test]
    fn test_venues_add_rejects_blank_name() {
        let mut scheduler = scheduler();
        let err = exec(&mut scheduler, &["venues", "add", "   "]).unwrap_err();

        assert_eq!(err.to_string(), "Venue name cannot be empty");
        assert_eq!(scheduler.venues().len(), 10);
    }

    #[test]
    fn test_venues_delete_cascades() {
        let mut scheduler = scheduler();
        let output = exec(&mut scheduler, &["venues", "delete", "venue-1"]).unwrap();

        assert_eq!(output, "Deleted venue venue-1");
        assert!(scheduler.events().iter().all(|e| !e.occupies("venue-1")));
        assert_eq!(scheduler.events().len(), 4);
    }

    #[test]
    fn test_venues_delete_unknown_is_an_error() {
        let mut scheduler = scheduler();
        assert!(exec(&mut scheduler, &["venues", "delete", "nope"]).is_err());
    }

    #[test]
    fn test_events_add_and_list_by_venue() {
        let mut scheduler = scheduler();
        exec(
            &mut scheduler,
            &[
                "events", "add", "--title", " Gala ", "--venue", "venue-3", "--venue", "venue-1",
                "--date", "2024-06-15", "--start", "18:00", "--end", "21:00",
            ],
        )
        .unwrap();

        let output = exec(
            &mut scheduler,
            &["--format", "json", "events", "list", "--date", "2024-06-15", "--venue", "venue-3"],
        )
        .unwrap();
        let events: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();
        let titles: Vec<&str> = events.iter().map(|e| e["title"].as_str().unwrap()).collect();

        assert_eq!(titles, vec!["Presentation", "Gala"]);
    }

    #[test]
    fn test_events_add_rejects_unknown_venue() {
        let mut scheduler = scheduler();
        let err = exec(
            &mut scheduler,
            &[
                "events", "add", "--title", "Gala", "--venue", "venue-99", "--date", "2024-06-15",
                "--start", "18:00", "--end", "21:00",
            ],
        )
        .unwrap_err();

        assert_eq!(
            err.downcast_ref::<EventError>(),
            Some(&EventError::UnknownVenue("venue-99".to_string()))
        );
        assert_eq!(scheduler.events().len(), 6);
    }

    #[test]
    fn test_events_add_rejects_blank_title() {
        let mut scheduler = scheduler();
        let err = exec(
            &mut scheduler,
            &[
                "events", "add", "--title", "  ", "--venue", "venue-1", "--date", "2024-06-15",
                "--start", "18:00", "--end", "21:00",
            ],
        )
        .unwrap_err();

        assert_eq!(err.downcast_ref::<EventError>(), Some(&EventError::EmptyTitle));
    }

    #[test]
    fn test_events_update_changes_only_given_fields() {
        let mut scheduler = scheduler();
        exec(&mut scheduler, &["events", "update", "event-1", "--title", "Standup"]).unwrap();

        let event = scheduler.event("event-1").unwrap();
        assert_eq!(event.title, "Standup");
        assert_eq!(event.venue_ids, vec!["venue-1"]);
        assert_eq!(event.color.as_deref(), Some("#3b82f6"));
    }

    #[test]
    fn test_events_update_unknown_is_an_error() {
        let mut scheduler = scheduler();
        let err = exec(&mut scheduler, &["events", "update", "nope", "--title", "X"]).unwrap_err();
        assert_eq!(err.to_string(), "Event not found: nope");
    }

    #[test]
    fn test_events_update_without_fields_is_an_error() {
        let mut scheduler = scheduler();
        assert!(exec(&mut scheduler, &["events", "update", "event-1"]).is_err());
    }

    #[test]
    fn test_events_delete_quiet() {
        let mut scheduler = scheduler();
        let output = exec(&mut scheduler, &["--quiet", "events", "delete", "event-2"]).unwrap();

        assert!(output.is_empty());
        assert!(scheduler.event("event-2").is_none());
    }

    #[test]
    fn test_grid_json_has_a_column_per_venue() {
        let mut scheduler = scheduler();
        let output = exec(
            &mut scheduler,
            &["--format", "json", "grid", "--date", "2024-06-15", "--slot-height", "20"],
        )
        .unwrap();
        let layout: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(layout["columns"].as_array().unwrap().len(), 10);
        assert_eq!(layout["grid_height"], 740.0);
        assert_eq!(layout["slots"][0], "09:00");
    }

    #[test]
    fn test_days_json() {
        let mut scheduler = scheduler();
        let output = exec(&mut scheduler, &["--format", "json", "days", "--date", "2024-06-15"]).unwrap();
        let days: Vec<String> = serde_json::from_str(&output).unwrap();

        assert_eq!(days.len(), 14);
        assert_eq!(days[0], "2024-06-10");
    }

    #[test]
    fn test_slots_pretty() {
        let mut scheduler = scheduler();
        let output = exec(&mut scheduler, &["slots", "--start-hour", "23", "--end-hour", "24"]).unwrap();

        assert_eq!(output, "23:00  11:00 PM\n23:15  11:15 PM\n23:30  11:30 PM\n23:45  11:45 PM");
    }
}
