use crate::models::{FlightRecord, ValidationOutcome};

/// Multi-stage consistency validation for one flight record.
///
/// Stages run in a fixed short-circuit order; later stages assume the
/// invariants established by earlier ones. The checker is pure: any field
/// tuple maps to exactly one [`ValidationOutcome`], and nothing is thrown.
pub struct SanityChecker;

impl SanityChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, record: &FlightRecord) -> ValidationOutcome {
        match self.check(record) {
            Ok(()) => ValidationOutcome::Valid,
            Err(outcome) => outcome,
        }
    }

    fn check(&self, record: &FlightRecord) -> Result<(), ValidationOutcome> {
        use ValidationOutcome::Invalid;

        // Stage 1: scheduled times and elapsed minutes must parse
        let crs_arr_time = int_field(&record.crs_arr_time, "scheduled arrival time")?;
        let crs_dep_time = int_field(&record.crs_dep_time, "scheduled departure time")?;
        let crs_elapsed_time = int_field(&record.crs_elapsed_time, "scheduled elapsed time")?;

        // Stage 2: a zero scheduled time means the row never carried one
        if crs_arr_time == 0 || crs_dep_time == 0 {
            return Err(Invalid("scheduled arrival or departure time is zero"));
        }

        // Stage 3: the inferred cross-timezone adjustment must be whole hours
        let scheduled_offset = infer_offset(crs_arr_time, crs_dep_time, crs_elapsed_time);
        if scheduled_offset % 60 != 0 {
            return Err(Invalid("scheduled time-zone offset is not whole hours"));
        }

        // Stage 4: location id fields must parse and be positive
        let location_ids = [
            int_field(&record.origin_airport_id, "origin airport id")?,
            int_field(&record.origin_airport_seq_id, "origin airport sequence id")?,
            int_field(&record.origin_city_market_id, "origin city market id")?,
            int_field(&record.origin_state_fips, "origin state FIPS")?,
            int_field(&record.origin_wac, "origin world area code")?,
            int_field(&record.dest_airport_id, "destination airport id")?,
            int_field(&record.dest_airport_seq_id, "destination airport sequence id")?,
            int_field(&record.dest_city_market_id, "destination city market id")?,
            int_field(&record.dest_state_fips, "destination state FIPS")?,
            int_field(&record.dest_wac, "destination world area code")?,
        ];
        if location_ids.iter().any(|&id| id <= 0) {
            return Err(Invalid("location id field is not positive"));
        }

        // Stage 5: location name fields must be present
        let location_names = [
            &record.origin,
            &record.origin_city_name,
            &record.origin_state_abr,
            &record.origin_state_nm,
            &record.dest,
            &record.dest_city_name,
            &record.dest_state_abr,
            &record.dest_state_nm,
        ];
        if location_names.iter().any(|name| name.is_empty()) {
            return Err(Invalid("location name field is empty"));
        }

        // Stage 6: cancelled flights carry no actual times to cross-check
        let cancelled = int_field(&record.cancelled, "cancellation flag")?;
        if cancelled != 0 {
            return Ok(());
        }

        // Stage 7: actual times must reproduce the scheduled offset
        let arr_time = int_field(&record.arr_time, "actual arrival time")?;
        let dep_time = int_field(&record.dep_time, "actual departure time")?;
        let actual_elapsed_time = int_field(&record.actual_elapsed_time, "actual elapsed time")?;

        let actual_offset = infer_offset(arr_time, dep_time, actual_elapsed_time);
        if actual_offset != scheduled_offset {
            return Err(Invalid("actual time-zone offset differs from scheduled"));
        }

        // Stage 8: the three delay fields must agree with each other
        let arr_delay = float_field(&record.arr_delay, "arrival delay")?;
        let arr_delay_minutes = float_field(&record.arr_delay_minutes, "arrival delay minutes")?;
        let arr_del15 = float_field(&record.arr_del15, "fifteen-minute delay flag")?;

        if arr_delay > 0 && arr_delay != arr_delay_minutes {
            return Err(Invalid("positive delay does not match delay minutes"));
        }
        if arr_delay < 0 && arr_delay_minutes != 0 {
            return Err(Invalid("early arrival with non-zero delay minutes"));
        }
        if arr_delay_minutes >= 15 && arr_del15 != 1 {
            return Err(Invalid("fifteen-minute delay flag not set"));
        }

        Ok(())
    }
}

impl Default for SanityChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn int_field(raw: &str, name: &'static str) -> Result<i32, ValidationOutcome> {
    raw.parse::<i32>()
        .map_err(|_| ValidationOutcome::Malformed(name))
}

/// Delay fields arrive as floats ("5.00") but the rules compare whole
/// minutes, so the parsed value is truncated.
fn float_field(raw: &str, name: &'static str) -> Result<i32, ValidationOutcome> {
    raw.parse::<f64>()
        .map(|v| v as i32)
        .map_err(|_| ValidationOutcome::Malformed(name))
}

/// Minutes attributable to the time-zone difference between departure and
/// arrival, derived from elapsed-time arithmetic on HHMM clock readings.
///
/// Arrival is assumed to land on the same day unless the minute-of-hour
/// comparison indicates rollover. A flight departing late at night and
/// arriving inside the same hour-of-day bucket the next day is misread by
/// this rule; that behavior is part of the domain contract and is kept
/// as-is.
pub(crate) fn infer_offset(arr_hhmm: i32, dep_hhmm: i32, elapsed_minutes: i32) -> i32 {
    let arr_hour = arr_hhmm / 100;
    let dep_hour = dep_hhmm / 100;
    let arr_min = arr_hhmm % 100;
    let dep_min = dep_hhmm % 100;

    let hour_diff = if arr_hour > dep_hour {
        arr_hour - dep_hour
    } else if arr_hour == dep_hour {
        if arr_min > dep_min {
            arr_hour - dep_hour
        } else {
            (24 - dep_hour) + arr_hour
        }
    } else {
        (24 - dep_hour) + arr_hour
    };

    hour_diff * 60 + (arr_min - dep_min) - elapsed_minutes
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A record that passes every stage: no time-zone offset, five-minute
    /// delay consistently reported.
    fn sane_record() -> FlightRecord {
        FlightRecord {
            crs_arr_time: "1300".into(),
            crs_dep_time: "1000".into(),
            crs_elapsed_time: "180".into(),
            origin_airport_id: "12478".into(),
            origin_airport_seq_id: "1247802".into(),
            origin_city_market_id: "31703".into(),
            origin_state_fips: "36".into(),
            origin_wac: "22".into(),
            dest_airport_id: "12892".into(),
            dest_airport_seq_id: "1289203".into(),
            dest_city_market_id: "32575".into(),
            dest_state_fips: "6".into(),
            dest_wac: "91".into(),
            origin: "JFK".into(),
            origin_city_name: "New York NY".into(),
            origin_state_abr: "NY".into(),
            origin_state_nm: "New York".into(),
            dest: "LAX".into(),
            dest_city_name: "Los Angeles CA".into(),
            dest_state_abr: "CA".into(),
            dest_state_nm: "California".into(),
            arr_time: "1305".into(),
            dep_time: "1005".into(),
            actual_elapsed_time: "180".into(),
            arr_delay: "5.00".into(),
            arr_delay_minutes: "5.00".into(),
            arr_del15: "0.00".into(),
            carrier: "AA".into(),
            cancelled: "0".into(),
            avg_ticket_price: "345.67".into(),
            month: "1".into(),
            year: "2015".into(),
        }
    }

    #[test]
    fn test_sane_record_is_valid() {
        let checker = SanityChecker::new();
        assert_eq!(checker.validate(&sane_record()), ValidationOutcome::Valid);
    }

    #[test]
    fn test_zero_scheduled_arrival_is_invalid() {
        let checker = SanityChecker::new();
        let record = FlightRecord {
            crs_arr_time: "0".into(),
            ..sane_record()
        };
        assert!(matches!(
            checker.validate(&record),
            ValidationOutcome::Invalid(_)
        ));
    }

    #[test]
    fn test_zero_scheduled_departure_is_invalid() {
        let checker = SanityChecker::new();
        let record = FlightRecord {
            crs_dep_time: "0".into(),
            ..sane_record()
        };
        assert!(matches!(
            checker.validate(&record),
            ValidationOutcome::Invalid(_)
        ));
    }

    #[test]
    fn test_unparseable_field_is_malformed_never_invalid() {
        let checker = SanityChecker::new();
        for patch in [
            FlightRecord {
                crs_elapsed_time: "abc".into(),
                ..sane_record()
            },
            FlightRecord {
                origin_airport_id: "".into(),
                ..sane_record()
            },
            FlightRecord {
                cancelled: "maybe".into(),
                ..sane_record()
            },
            FlightRecord {
                arr_delay: "n/a".into(),
                ..sane_record()
            },
        ] {
            assert!(matches!(
                checker.validate(&patch),
                ValidationOutcome::Malformed(_)
            ));
        }
    }

    #[test]
    fn test_fractional_hour_offset_is_invalid() {
        let checker = SanityChecker::new();
        // 10:00 -> 13:00 with 170 elapsed minutes leaves a 10 minute residue
        let record = FlightRecord {
            crs_elapsed_time: "170".into(),
            actual_elapsed_time: "170".into(),
            ..sane_record()
        };
        assert!(matches!(
            checker.validate(&record),
            ValidationOutcome::Invalid(_)
        ));
    }

    #[test]
    fn test_nonpositive_location_id_is_invalid() {
        let checker = SanityChecker::new();
        let record = FlightRecord {
            dest_wac: "0".into(),
            ..sane_record()
        };
        assert!(matches!(
            checker.validate(&record),
            ValidationOutcome::Invalid(_)
        ));
    }

    #[test]
    fn test_empty_location_name_is_invalid() {
        let checker = SanityChecker::new();
        let record = FlightRecord {
            origin_city_name: "".into(),
            ..sane_record()
        };
        assert!(matches!(
            checker.validate(&record),
            ValidationOutcome::Invalid(_)
        ));
    }

    #[test]
    fn test_cancelled_flight_skips_temporal_checks() {
        let checker = SanityChecker::new();
        // Actual times are garbage; a cancelled flight must still be valid.
        let record = FlightRecord {
            cancelled: "1".into(),
            arr_time: "not-a-time".into(),
            dep_time: "".into(),
            actual_elapsed_time: "".into(),
            arr_delay: "".into(),
            arr_delay_minutes: "".into(),
            arr_del15: "".into(),
            ..sane_record()
        };
        assert_eq!(checker.validate(&record), ValidationOutcome::Valid);
    }

    #[test]
    fn test_actual_offset_mismatch_is_invalid() {
        let checker = SanityChecker::new();
        // Actual flight ran an hour short of schedule
        let record = FlightRecord {
            actual_elapsed_time: "120".into(),
            ..sane_record()
        };
        assert!(matches!(
            checker.validate(&record),
            ValidationOutcome::Invalid(_)
        ));
    }

    #[test]
    fn test_positive_delay_must_match_delay_minutes() {
        let checker = SanityChecker::new();
        let record = FlightRecord {
            arr_delay: "25.00".into(),
            arr_delay_minutes: "10.00".into(),
            arr_del15: "0.00".into(),
            ..sane_record()
        };
        assert!(matches!(
            checker.validate(&record),
            ValidationOutcome::Invalid(_)
        ));
    }

    #[test]
    fn test_early_arrival_requires_zero_delay_minutes() {
        let checker = SanityChecker::new();
        let record = FlightRecord {
            arr_delay: "-5.00".into(),
            arr_delay_minutes: "3.00".into(),
            ..sane_record()
        };
        assert!(matches!(
            checker.validate(&record),
            ValidationOutcome::Invalid(_)
        ));
    }

    #[test]
    fn test_early_arrival_with_zero_delay_minutes_is_valid() {
        let checker = SanityChecker::new();
        let record = FlightRecord {
            arr_delay: "-5.00".into(),
            arr_delay_minutes: "0.00".into(),
            arr_del15: "0.00".into(),
            ..sane_record()
        };
        assert_eq!(checker.validate(&record), ValidationOutcome::Valid);
    }

    #[test]
    fn test_long_delay_requires_fifteen_minute_flag() {
        let checker = SanityChecker::new();
        let record = FlightRecord {
            arr_delay: "20.00".into(),
            arr_delay_minutes: "20.00".into(),
            arr_del15: "0.00".into(),
            ..sane_record()
        };
        assert!(matches!(
            checker.validate(&record),
            ValidationOutcome::Invalid(_)
        ));
    }

    #[test]
    fn test_long_delay_with_flag_is_valid() {
        let checker = SanityChecker::new();
        let record = FlightRecord {
            arr_delay: "20.00".into(),
            arr_delay_minutes: "20.00".into(),
            arr_del15: "1.00".into(),
            ..sane_record()
        };
        assert_eq!(checker.validate(&record), ValidationOutcome::Valid);
    }

    #[test]
    fn test_infer_offset_same_day() {
        // 10:00 -> 13:00, 180 minutes in the air: no offset
        assert_eq!(infer_offset(1300, 1000, 180), 0);
        // 08:00 -> 11:30, 150 minutes: one hour gained
        assert_eq!(infer_offset(1130, 800, 150), 60);
    }

    #[test]
    fn test_infer_offset_overnight() {
        // 23:00 -> 01:00 next day, 120 minutes in the air
        assert_eq!(infer_offset(100, 2300, 120), 0);
    }

    #[test]
    fn test_infer_offset_same_hour_rollover() {
        // Arrival minute not past departure minute in the same hour reads as
        // a full day elapsed
        assert_eq!(infer_offset(905, 950, 55), 24 * 60 - 45 - 55);
    }
}
