//! Itinerary assembly: expanding a trip's date range into day buckets and
//! mutating the activities scheduled in them.
//!
//! The service never persists anything. Every mutation works on an
//! itinerary the caller owns; saving the result back onto the trip (via
//! `TripService::update_trip`) is the caller's job, matching the staged
//! editing flow.
//!
//! Index arguments address days and activities by position. Passing an
//! out-of-range index is a caller bug, not a runtime condition, and
//! panics like any other slice indexing.

use chrono::{Duration, Utc};
use log::warn;

use crate::domain::models::{Activity, Day, Place, Trip};

/// Service for building and editing day-bucketed itineraries.
#[derive(Clone, Default)]
pub struct ItineraryService;

impl ItineraryService {
    pub fn new() -> Self {
        Self
    }

    /// Number of day buckets the trip's date range calls for, inclusive of
    /// both endpoints. `None` for drafts without a start date.
    pub fn expected_day_count(&self, trip: &Trip) -> Option<usize> {
        let start = trip.start_date?;
        let end = trip.effective_end_date()?;
        // Stored data can carry an inverted range; clamp instead of
        // wrapping on the cast.
        Some((end - start).num_days().max(0) as usize + 1)
    }

    /// Build the itinerary for a trip.
    ///
    /// A previously saved itinerary is reused verbatim, even if the trip's
    /// dates have changed since it was created; reconciling the two is a
    /// product decision this layer does not guess at. A length mismatch is
    /// logged so callers can surface it.
    ///
    /// Without a saved itinerary, one empty `Day` per date in the range is
    /// produced, dated `start_date + (day - 1)`. Drafts get an empty
    /// itinerary.
    pub fn initialize_itinerary(&self, trip: &Trip) -> Vec<Day> {
        if !trip.itinerary.is_empty() {
            if let Some(expected) = self.expected_day_count(trip) {
                if trip.itinerary.len() != expected {
                    warn!(
                        "Trip {} has a {}-day itinerary but its dates span {} days",
                        trip.id,
                        trip.itinerary.len(),
                        expected
                    );
                }
            }
            return trip.itinerary.clone();
        }

        let (Some(start), Some(count)) = (trip.start_date, self.expected_day_count(trip)) else {
            return Vec::new();
        };

        (0..count)
            .map(|i| Day {
                day: i as u32 + 1,
                date: start + Duration::days(i as i64),
                activities: Vec::new(),
            })
            .collect()
    }

    /// Append a new activity for `place` to the addressed day, with no
    /// time or notes set yet. Returns the created activity's ID.
    ///
    /// # Panics
    /// Panics if `day_index` is out of range.
    pub fn add_activity(&self, itinerary: &mut [Day], day_index: usize, place: Place) -> String {
        let activity = Activity {
            id: Activity::generate_id(Utc::now().timestamp_millis() as u64),
            place,
            time: None,
            notes: None,
        };
        let id = activity.id.clone();
        itinerary[day_index].activities.push(activity);
        id
    }

    /// Remove an activity by position, returning it.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn remove_activity(
        &self,
        itinerary: &mut [Day],
        day_index: usize,
        activity_index: usize,
    ) -> Activity {
        itinerary[day_index].activities.remove(activity_index)
    }

    /// Move an activity from one day to the end of another, unchanged.
    /// A no-op when source and target are the same day.
    ///
    /// # Panics
    /// Panics if any index is out of range.
    pub fn move_activity(
        &self,
        itinerary: &mut [Day],
        source_day_index: usize,
        activity_index: usize,
        target_day_index: usize,
    ) {
        if source_day_index == target_day_index {
            return;
        }

        let activity = itinerary[source_day_index].activities.remove(activity_index);
        itinerary[target_day_index].activities.push(activity);
    }

    /// Set the free-form time label on an activity.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn set_activity_time(
        &self,
        itinerary: &mut [Day],
        day_index: usize,
        activity_index: usize,
        time: Option<String>,
    ) {
        itinerary[day_index].activities[activity_index].time = time;
    }

    /// Set the notes on an activity.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn set_activity_notes(
        &self,
        itinerary: &mut [Day],
        day_index: usize,
        activity_index: usize,
        notes: Option<String>,
    ) {
        itinerary[day_index].activities[activity_index].notes = notes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Coordinates, DEFAULT_MAP_CENTER, GUEST_USER_ID};
    use chrono::NaiveDate;

    fn trip_with_dates(start: Option<&str>, end: Option<&str>) -> Trip {
        let now = Utc::now();
        Trip {
            id: "trip_test".to_string(),
            user_id: GUEST_USER_ID.to_string(),
            title: None,
            destination: "Test".to_string(),
            start_date: start.map(|s| s.parse().unwrap()),
            end_date: end.map(|s| s.parse().unwrap()),
            selected_places: Vec::new(),
            itinerary: Vec::new(),
            map_center: DEFAULT_MAP_CENTER,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_place(id: &str) -> Place {
        Place {
            id: id.to_string(),
            name: "Meiji Shrine".to_string(),
            address: None,
            location: Coordinates { lat: 35.6764, lng: 139.6993 },
            rating: None,
            tags: Vec::new(),
        }
    }

    fn total_activities(itinerary: &[Day]) -> usize {
        itinerary.iter().map(|d| d.activities.len()).sum()
    }

    #[test]
    fn test_initialize_builds_inclusive_day_range() {
        let service = ItineraryService::new();
        let trip = trip_with_dates(Some("2024-01-01"), Some("2024-01-03"));

        let itinerary = service.initialize_itinerary(&trip);

        assert_eq!(itinerary.len(), 3);
        for (i, day) in itinerary.iter().enumerate() {
            assert_eq!(day.day, i as u32 + 1);
            assert!(day.activities.is_empty());
        }
        assert_eq!(itinerary[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(itinerary[1].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(itinerary[2].date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    }

    #[test]
    fn test_initialize_single_day_without_end_date() {
        let service = ItineraryService::new();
        let trip = trip_with_dates(Some("2024-01-01"), None);

        let itinerary = service.initialize_itinerary(&trip);
        assert_eq!(itinerary.len(), 1);
    }

    #[test]
    fn test_initialize_draft_trip_is_empty() {
        let service = ItineraryService::new();
        let trip = trip_with_dates(None, None);
        assert!(service.initialize_itinerary(&trip).is_empty());
    }

    #[test]
    fn test_initialize_reuses_saved_itinerary_verbatim() {
        let service = ItineraryService::new();
        let mut trip = trip_with_dates(Some("2024-01-01"), Some("2024-01-03"));

        let mut saved = service.initialize_itinerary(&trip);
        service.add_activity(&mut saved, 0, sample_place("p1"));
        trip.itinerary = saved.clone();

        // Dates later moved out from under the saved itinerary.
        trip.end_date = Some("2024-01-10".parse().unwrap());

        let reloaded = service.initialize_itinerary(&trip);
        assert_eq!(reloaded, saved);
        assert_eq!(service.expected_day_count(&trip), Some(10));
    }

    #[test]
    fn test_add_and_remove_activity() {
        let service = ItineraryService::new();
        let trip = trip_with_dates(Some("2024-01-01"), Some("2024-01-02"));
        let mut itinerary = service.initialize_itinerary(&trip);

        let id = service.add_activity(&mut itinerary, 1, sample_place("p1"));
        assert_eq!(itinerary[1].activities.len(), 1);
        assert_eq!(itinerary[1].activities[0].id, id);
        assert_eq!(itinerary[1].activities[0].time, None);
        assert_eq!(itinerary[1].activities[0].notes, None);

        let removed = service.remove_activity(&mut itinerary, 1, 0);
        assert_eq!(removed.id, id);
        assert_eq!(total_activities(&itinerary), 0);
    }

    #[test]
    fn test_move_preserves_activity_and_total_count() {
        let service = ItineraryService::new();
        let trip = trip_with_dates(Some("2024-01-01"), Some("2024-01-03"));
        let mut itinerary = service.initialize_itinerary(&trip);

        service.add_activity(&mut itinerary, 0, sample_place("p1"));
        let moved_id = service.add_activity(&mut itinerary, 1, sample_place("p2"));
        service.set_activity_time(&mut itinerary, 1, 0, Some("14:00".to_string()));

        let before = total_activities(&itinerary);
        service.move_activity(&mut itinerary, 1, 0, 2);
        assert_eq!(total_activities(&itinerary), before);

        assert!(itinerary[1].activities.is_empty());
        let moved = &itinerary[2].activities[0];
        assert_eq!(moved.id, moved_id);
        assert_eq!(moved.time.as_deref(), Some("14:00"));
        assert_eq!(moved.place.id, "p2");
    }

    #[test]
    fn test_move_to_same_day_is_noop() {
        let service = ItineraryService::new();
        let trip = trip_with_dates(Some("2024-01-01"), Some("2024-01-02"));
        let mut itinerary = service.initialize_itinerary(&trip);

        service.add_activity(&mut itinerary, 0, sample_place("p1"));
        let before = itinerary.clone();
        service.move_activity(&mut itinerary, 0, 0, 0);
        assert_eq!(itinerary, before);
    }

    #[test]
    fn test_set_time_and_notes() {
        let service = ItineraryService::new();
        let trip = trip_with_dates(Some("2024-01-01"), None);
        let mut itinerary = service.initialize_itinerary(&trip);

        service.add_activity(&mut itinerary, 0, sample_place("p1"));
        service.set_activity_time(&mut itinerary, 0, 0, Some("09:30".to_string()));
        service.set_activity_notes(&mut itinerary, 0, 0, Some("buy tickets ahead".to_string()));

        let activity = &itinerary[0].activities[0];
        assert_eq!(activity.time.as_deref(), Some("09:30"));
        assert_eq!(activity.notes.as_deref(), Some("buy tickets ahead"));

        service.set_activity_time(&mut itinerary, 0, 0, None);
        assert_eq!(itinerary[0].activities[0].time, None);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_day_index_panics() {
        let service = ItineraryService::new();
        let trip = trip_with_dates(Some("2024-01-01"), None);
        let mut itinerary = service.initialize_itinerary(&trip);
        service.add_activity(&mut itinerary, 5, sample_place("p1"));
    }
}
