use csv::StringRecord;

use crate::utils::constants::*;

/// Outcome of the sanity check for one record.
///
/// `Malformed` means a required field failed to parse as an integer or float;
/// `Invalid` means every field parsed but a consistency rule failed. Both are
/// counted and dropped by the caller, never propagated as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(&'static str),
    Malformed(&'static str),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

/// One flight leg, extracted from a single CSV row at fixed column positions.
///
/// Fields are kept in their raw string form; the sanity checker owns all
/// parsing so that a parse failure can be classified rather than thrown.
/// Records live for exactly one row: constructed, validated, aggregated,
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct FlightRecord {
    pub crs_arr_time: String,
    pub crs_dep_time: String,
    pub crs_elapsed_time: String,
    pub origin_airport_id: String,
    pub origin_airport_seq_id: String,
    pub origin_city_market_id: String,
    pub origin_state_fips: String,
    pub origin_wac: String,
    pub dest_airport_id: String,
    pub dest_airport_seq_id: String,
    pub dest_city_market_id: String,
    pub dest_state_fips: String,
    pub dest_wac: String,
    pub origin: String,
    pub origin_city_name: String,
    pub origin_state_abr: String,
    pub origin_state_nm: String,
    pub dest: String,
    pub dest_city_name: String,
    pub dest_state_abr: String,
    pub dest_state_nm: String,
    pub arr_time: String,
    pub dep_time: String,
    pub actual_elapsed_time: String,
    pub arr_delay: String,
    pub arr_delay_minutes: String,
    pub arr_del15: String,
    pub carrier: String,
    pub cancelled: String,
    pub avg_ticket_price: String,
    pub month: String,
    pub year: String,
}

impl FlightRecord {
    /// Build a record from a raw CSV row.
    ///
    /// Returns `None` when the row does not carry exactly [`FIELD_COUNT`]
    /// columns; such rows are counted corrupt without entering validation.
    pub fn from_csv(row: &StringRecord) -> Option<Self> {
        if row.len() != FIELD_COUNT {
            return None;
        }

        let field = |idx: usize| row.get(idx).unwrap_or("").to_string();

        Some(Self {
            crs_arr_time: field(COL_CRS_ARR_TIME),
            crs_dep_time: field(COL_CRS_DEP_TIME),
            crs_elapsed_time: field(COL_CRS_ELAPSED_TIME),
            origin_airport_id: field(COL_ORIGIN_AIRPORT_ID),
            origin_airport_seq_id: field(COL_ORIGIN_AIRPORT_SEQ_ID),
            origin_city_market_id: field(COL_ORIGIN_CITY_MARKET_ID),
            origin_state_fips: field(COL_ORIGIN_STATE_FIPS),
            origin_wac: field(COL_ORIGIN_WAC),
            dest_airport_id: field(COL_DEST_AIRPORT_ID),
            dest_airport_seq_id: field(COL_DEST_AIRPORT_SEQ_ID),
            dest_city_market_id: field(COL_DEST_CITY_MARKET_ID),
            dest_state_fips: field(COL_DEST_STATE_FIPS),
            dest_wac: field(COL_DEST_WAC),
            origin: field(COL_ORIGIN),
            origin_city_name: field(COL_ORIGIN_CITY_NAME),
            origin_state_abr: field(COL_ORIGIN_STATE_ABR),
            origin_state_nm: field(COL_ORIGIN_STATE_NM),
            dest: field(COL_DEST),
            dest_city_name: field(COL_DEST_CITY_NAME),
            dest_state_abr: field(COL_DEST_STATE_ABR),
            dest_state_nm: field(COL_DEST_STATE_NM),
            arr_time: field(COL_ARR_TIME),
            dep_time: field(COL_DEP_TIME),
            actual_elapsed_time: field(COL_ACTUAL_ELAPSED_TIME),
            arr_delay: field(COL_ARR_DELAY),
            arr_delay_minutes: field(COL_ARR_DELAY_MINUTES),
            arr_del15: field(COL_ARR_DEL15),
            carrier: field(COL_CARRIER),
            cancelled: field(COL_CANCELLED),
            avg_ticket_price: field(COL_AVG_TICKET_PRICE),
            month: field(COL_MONTH),
            year: field(COL_YEAR),
        })
    }
}
