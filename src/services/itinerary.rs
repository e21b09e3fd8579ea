//! The HOS itinerary engine.
//!
//! Walks a resolved route's segments, applying the regulation thresholds
//! (continuous-driving break rule, shift-end rule, pickup/dropoff service,
//! refueling) to decide where stops must be inserted and how the trip splits
//! across calendar days, then derives one daily log per day from the stop
//! timeline.
//!
//! The engine is a pure, synchronous computation: it performs no I/O, reads
//! no clock, and never mutates its inputs, so identical inputs always yield
//! identical itineraries.

use crate::error::{PlanError, PlanResult};
use crate::models::time::{self, TripTime, MINUTES_PER_DAY};
use crate::models::{
    ActivityType, DailyLog, DutyActivity, Itinerary, RegulationProfile, RouteProfile,
    RouteSegment, Stop, StopKind, TotalHours, TripDetails,
};
use crate::services::validator;
use chrono::NaiveDate;

/// Fixed pre-trip inspection time at the start stop.
const PRE_TRIP_INSPECTION_HOURS: f64 = 0.5;
/// Fixed cargo handling time at pickup and dropoff.
const CARGO_SERVICE_HOURS: f64 = 1.0;
/// Fixed refueling stop duration.
const FUEL_SERVICE_HOURS: f64 = 1.0;
/// Miles between refueling stops.
const FUEL_INTERVAL_MILES: f64 = 400.0;
/// Shift start on the first trip day, minutes from midnight (08:00).
const FIRST_DAY_START_MINUTE: i64 = 8 * 60;
/// Shift start on subsequent days, minutes from midnight (06:00).
const DAY_START_MINUTE: i64 = 6 * 60;
/// Sanity bound on generated stops; tripping it means runaway simulation.
const MAX_STOPS: usize = 10_000;

const EPS: f64 = 1e-9;

/// Plans HOS-compliant itineraries under one regulation profile.
///
/// The profile is fixed at construction; a calculation uses one consistent
/// rule set throughout.
#[derive(Debug, Clone)]
pub struct ItineraryPlanner {
    regulation: RegulationProfile,
    start_date: NaiveDate,
}

impl ItineraryPlanner {
    /// Create a planner for the given regulation profile.
    ///
    /// # Errors
    /// Returns [`PlanError::Configuration`] when the profile has missing or
    /// non-positive thresholds.
    pub fn new(regulation: RegulationProfile) -> PlanResult<Self> {
        regulation
            .validate()
            .map_err(PlanError::configuration)?;
        Ok(Self {
            regulation,
            // The engine reads no wall clock; the trip date is an input.
            start_date: NaiveDate::from_ymd_opt(2023, 4, 15).unwrap_or_default(),
        })
    }

    /// Set the calendar date of trip day 1.
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// The profile this planner applies.
    pub fn regulation(&self) -> &RegulationProfile {
        &self.regulation
    }

    /// Compute the full itinerary for a trip over a resolved route.
    ///
    /// # Errors
    /// * [`PlanError::Input`] when the trip fields fail validation
    /// * [`PlanError::UpstreamResolution`] when the route profile is
    ///   structurally unusable
    /// * [`PlanError::Calculation`] when stop generation fails; no partial
    ///   itinerary is ever returned
    pub fn plan(&self, trip: &TripDetails, route: &RouteProfile) -> PlanResult<Itinerary> {
        let outcome = validator::validate_trip(trip, Some(&self.regulation));
        if !outcome.valid {
            return Err(PlanError::input(outcome.errors));
        }
        check_route(route)?;

        let stops = Simulation::new(&self.regulation).run(trip, route)?;
        let logs = build_logs(&stops, trip, self.start_date);

        log::debug!(
            "planned itinerary: {} stops over {} days",
            stops.len(),
            logs.len()
        );

        Ok(Itinerary {
            start_location: trip.current_location.clone(),
            end_location: trip.dropoff_location.clone(),
            total_distance_miles: route.total_distance_miles,
            total_duration: route.duration_text(),
            stops,
            logs,
        })
    }
}

/// Re-check route structure at the engine boundary. A profile built through
/// [`RouteProfile::new`] already satisfies this; deserialized ones may not.
fn check_route(route: &RouteProfile) -> PlanResult<()> {
    if route.segments.is_empty() {
        return Err(PlanError::upstream("route contains no segments"));
    }
    if route.pickup_after >= route.segments.len() {
        return Err(PlanError::upstream("pickup waypoint index out of range"));
    }
    for (index, segment) in route.segments.iter().enumerate() {
        if !segment.duration_hours.is_finite() || segment.duration_hours <= 0.0 {
            return Err(PlanError::upstream(format!(
                "segment {} has a non-positive duration",
                index
            )));
        }
    }
    Ok(())
}

/// Running state of the segment-driven simulation.
struct Simulation<'a> {
    regulation: &'a RegulationProfile,
    /// Absolute minutes since midnight of trip day 1.
    clock: i64,
    /// Driving hours since the last break or rest.
    continuous_driving: f64,
    /// Duty hours since the last overnight rest. Counting starts at
    /// departure from the start stop; driving, breaks, and cargo/fuel
    /// service all accumulate here.
    duty_hours: f64,
    cumulative_miles: f64,
    miles_since_fuel: f64,
    stops: Vec<Stop>,
}

impl<'a> Simulation<'a> {
    fn new(regulation: &'a RegulationProfile) -> Self {
        Self {
            regulation,
            clock: FIRST_DAY_START_MINUTE,
            continuous_driving: 0.0,
            duty_hours: 0.0,
            cumulative_miles: 0.0,
            miles_since_fuel: 0.0,
            stops: Vec::new(),
        }
    }

    /// Duty hours at which the shift must end, whichever cap binds first.
    fn shift_cap(&self) -> f64 {
        self.regulation
            .max_driving_hours
            .min(self.regulation.max_duty_hours)
    }

    fn run(mut self, trip: &TripDetails, route: &RouteProfile) -> PlanResult<Vec<Stop>> {
        self.push_stop(
            StopKind::Start,
            trip.current_location.clone(),
            "Starting location".to_string(),
            PRE_TRIP_INSPECTION_HOURS,
        )?;

        let last_index = route.segments.len() - 1;
        for (index, segment) in route.segments.iter().enumerate() {
            self.drive_segment(segment)?;

            if index == route.pickup_after {
                self.push_stop(
                    StopKind::Pickup,
                    trip.pickup_location.clone(),
                    "Cargo pickup".to_string(),
                    CARGO_SERVICE_HOURS,
                )?;
                self.duty_hours += CARGO_SERVICE_HOURS;
                self.enforce_rest_rules()?;
            }

            if index < last_index && self.miles_since_fuel >= FUEL_INTERVAL_MILES {
                self.push_stop(
                    StopKind::Fuel,
                    format!("Truck stop near mile {:.0}", self.cumulative_miles),
                    "Refueling".to_string(),
                    FUEL_SERVICE_HOURS,
                )?;
                self.duty_hours += FUEL_SERVICE_HOURS;
                self.miles_since_fuel = 0.0;
                self.enforce_rest_rules()?;
            }
        }

        self.push_stop(
            StopKind::Dropoff,
            trip.dropoff_location.clone(),
            "Final delivery".to_string(),
            CARGO_SERVICE_HOURS,
        )?;

        Ok(self.stops)
    }

    /// Drive one segment, splitting it wherever a threshold is crossed.
    fn drive_segment(&mut self, segment: &RouteSegment) -> PlanResult<()> {
        let speed = segment.distance_miles / segment.duration_hours;
        let mut remaining = segment.duration_hours;

        while remaining > EPS {
            self.enforce_rest_rules()?;

            let to_break = self.regulation.break_required_after - self.continuous_driving;
            let to_shift_end = self.shift_cap() - self.duty_hours;
            let chunk = remaining.min(to_break).min(to_shift_end);

            let minutes = time::hours_to_minutes(chunk);
            self.clock += minutes;
            self.continuous_driving += chunk;
            self.duty_hours += chunk;
            self.cumulative_miles += chunk * speed;
            self.miles_since_fuel += chunk * speed;
            remaining -= chunk;
        }

        // A threshold reached exactly at the segment end still binds.
        self.enforce_rest_rules()
    }

    /// Insert any stop the counters now mandate. The break rule is applied
    /// before the shift-end rule; when both cross in the same segment the
    /// break's insertion point precedes the overnight's.
    fn enforce_rest_rules(&mut self) -> PlanResult<()> {
        if self.continuous_driving >= self.regulation.break_required_after - EPS {
            let duration = self.regulation.break_duration;
            self.push_stop(
                StopKind::Rest,
                format!("Rest area near mile {:.0}", self.cumulative_miles),
                format!(
                    "Required {}-minute break",
                    time::hours_to_minutes(duration)
                ),
                duration,
            )?;
            self.continuous_driving = 0.0;
            // Break time counts toward duty hours but not driving.
            self.duty_hours += duration;
        }

        if self.duty_hours >= self.shift_cap() - EPS {
            self.take_overnight_rest()?;
        }

        Ok(())
    }

    /// End the shift: insert an overnight stop and reset both counters.
    /// Departure is the later of the next 06:00 day start and arrival plus
    /// the required rest.
    fn take_overnight_rest(&mut self) -> PlanResult<()> {
        let arrival = self.clock;
        let next_day_start = ((arrival - DAY_START_MINUTE).div_euclid(MINUTES_PER_DAY) + 1)
            * MINUTES_PER_DAY
            + DAY_START_MINUTE;
        let rest_end = arrival + time::hours_to_minutes(self.regulation.required_rest_hours);
        let departure = next_day_start.max(rest_end);

        self.push_stop_until(
            StopKind::Overnight,
            format!("Truck stop near mile {:.0}", self.cumulative_miles),
            format!("{}-hour rest period", self.regulation.required_rest_hours),
            departure,
        )?;
        self.continuous_driving = 0.0;
        self.duty_hours = 0.0;
        Ok(())
    }

    fn push_stop(
        &mut self,
        kind: StopKind,
        location: String,
        description: String,
        duration_hours: f64,
    ) -> PlanResult<()> {
        let departure = self.clock + time::hours_to_minutes(duration_hours);
        self.push_stop_until(kind, location, description, departure)
    }

    fn push_stop_until(
        &mut self,
        kind: StopKind,
        location: String,
        description: String,
        departure: i64,
    ) -> PlanResult<()> {
        if self.stops.len() >= MAX_STOPS {
            return Err(PlanError::calculation(format!(
                "stop limit of {} exceeded, simulation did not converge",
                MAX_STOPS
            )));
        }
        let arrival = self.clock;
        self.stops.push(Stop {
            kind,
            location,
            description,
            arrival_time: TripTime::from_abs_minutes(arrival),
            departure_time: TripTime::from_abs_minutes(departure),
            duration_hours: time::minutes_to_hours(departure - arrival),
            cumulative_mileage: self.cumulative_miles,
        });
        self.clock = departure;
        Ok(())
    }
}

/// A duty-status interval on the absolute trip timeline, in minutes.
struct TimelineInterval {
    start: i64,
    end: i64,
    activity: ActivityType,
    location: String,
    description: Option<String>,
}

/// Derive one daily log per calendar day from the generated stop sequence.
///
/// The timeline is reconstructed as: off-duty before the first stop, the
/// stop service windows themselves, driving in the gaps between stops, and
/// off-duty after the final stop; then split exactly at each 24:00 boundary.
fn build_logs(stops: &[Stop], trip: &TripDetails, start_date: NaiveDate) -> Vec<DailyLog> {
    let Some(last_stop) = stops.last() else {
        return Vec::new();
    };

    let mut intervals: Vec<TimelineInterval> = Vec::new();
    let first_arrival = stops[0].arrival_time.abs_minutes();
    if first_arrival > 0 {
        intervals.push(TimelineInterval {
            start: 0,
            end: first_arrival,
            activity: ActivityType::OffDuty,
            location: trip.current_location.clone(),
            description: None,
        });
    }

    for (index, stop) in stops.iter().enumerate() {
        let (activity, description) = stop_activity(stop);
        let start = stop.arrival_time.abs_minutes();
        let end = stop.departure_time.abs_minutes();
        if end > start {
            intervals.push(TimelineInterval {
                start,
                end,
                activity,
                location: stop.location.clone(),
                description,
            });
        }

        if let Some(next) = stops.get(index + 1) {
            let gap_start = end;
            let gap_end = next.arrival_time.abs_minutes();
            if gap_end > gap_start {
                intervals.push(TimelineInterval {
                    start: gap_start,
                    end: gap_end,
                    activity: ActivityType::Driving,
                    location: "En route".to_string(),
                    description: None,
                });
            }
        }
    }

    // Off duty from the final departure to the end of that calendar day. A
    // departure exactly at 24:00 closes the day with no trailing interval.
    let trip_end = last_stop.departure_time.abs_minutes();
    let timeline_end = if trip_end % MINUTES_PER_DAY == 0 {
        trip_end
    } else {
        (trip_end / MINUTES_PER_DAY + 1) * MINUTES_PER_DAY
    };
    if timeline_end > trip_end {
        intervals.push(TimelineInterval {
            start: trip_end,
            end: timeline_end,
            activity: ActivityType::OffDuty,
            location: last_stop.location.clone(),
            description: None,
        });
    }

    let total_days = (timeline_end / MINUTES_PER_DAY) as u32;
    let mut logs = Vec::with_capacity(total_days as usize);
    let mut carry_location = trip.current_location.clone();
    let mut carry_mileage = 0.0;

    for day in 0..total_days {
        let day_start = day as i64 * MINUTES_PER_DAY;
        let day_end = day_start + MINUTES_PER_DAY;

        let mut activities = Vec::new();
        let mut minutes_by_type = [0i64; 4];
        for interval in &intervals {
            let start = interval.start.max(day_start);
            let end = interval.end.min(day_end);
            if end <= start {
                continue;
            }
            minutes_by_type[activity_slot(interval.activity)] += end - start;
            activities.push(DutyActivity {
                activity: interval.activity,
                start_time: time::format_clock(start - day_start),
                end_time: time::format_clock(end - day_start),
                location: interval.location.clone(),
                description: interval.description.clone(),
            });
        }

        let day_stops: Vec<&Stop> = stops
            .iter()
            .filter(|stop| stop.arrival_time.day() == day + 1)
            .collect();
        let remarks = day_stops
            .iter()
            .map(|stop| {
                format!(
                    "{} - {} at {}",
                    stop.arrival_time.clock(),
                    stop.description,
                    stop.location
                )
            })
            .collect();

        let start_location = day_stops
            .first()
            .map_or_else(|| carry_location.clone(), |stop| stop.location.clone());
        let end_location = day_stops
            .last()
            .map_or_else(|| carry_location.clone(), |stop| stop.location.clone());
        let end_mileage = day_stops
            .last()
            .map_or(carry_mileage, |stop| stop.cumulative_mileage);

        logs.push(DailyLog {
            date: start_date + chrono::Days::new(day as u64),
            start_location,
            end_location: end_location.clone(),
            total_miles: end_mileage - carry_mileage,
            shipping_documents: trip.shipping_documents.clone().unwrap_or_default(),
            remarks,
            activities,
            total_hours: TotalHours {
                off_duty: time::minutes_to_hours(minutes_by_type[0]),
                sleeper_berth: time::minutes_to_hours(minutes_by_type[1]),
                driving: time::minutes_to_hours(minutes_by_type[2]),
                on_duty_not_driving: time::minutes_to_hours(minutes_by_type[3]),
            },
        });

        carry_location = end_location;
        carry_mileage = end_mileage;
    }

    logs
}

/// Duty status recorded while servicing a stop.
fn stop_activity(stop: &Stop) -> (ActivityType, Option<String>) {
    match stop.kind {
        StopKind::Start => (
            ActivityType::OnDutyNotDriving,
            Some("Pre-trip inspection".to_string()),
        ),
        StopKind::Pickup => (
            ActivityType::OnDutyNotDriving,
            Some("Loading cargo".to_string()),
        ),
        StopKind::Fuel => (ActivityType::OnDutyNotDriving, Some("Refueling".to_string())),
        StopKind::Dropoff => (
            ActivityType::OnDutyNotDriving,
            Some("Unloading cargo".to_string()),
        ),
        StopKind::Rest => (ActivityType::OffDuty, Some(stop.description.clone())),
        StopKind::Overnight => (ActivityType::SleeperBerth, None),
    }
}

fn activity_slot(activity: ActivityType) -> usize {
    match activity {
        ActivityType::OffDuty => 0,
        ActivityType::SleeperBerth => 1,
        ActivityType::Driving => 2,
        ActivityType::OnDutyNotDriving => 3,
    }
}
