/// Expected number of columns in one on-time performance record. Rows with
/// any other width are counted corrupt before validation runs.
pub const FIELD_COUNT: usize = 112;

/// Column positions in the fixed CSV layout (the contract with upstream data)
pub const COL_YEAR: usize = 0;
pub const COL_MONTH: usize = 2;
pub const COL_CARRIER: usize = 8;
pub const COL_ORIGIN_AIRPORT_ID: usize = 11;
pub const COL_ORIGIN_AIRPORT_SEQ_ID: usize = 12;
pub const COL_ORIGIN_CITY_MARKET_ID: usize = 13;
pub const COL_ORIGIN: usize = 14;
pub const COL_ORIGIN_CITY_NAME: usize = 15;
pub const COL_ORIGIN_STATE_ABR: usize = 17;
pub const COL_ORIGIN_STATE_FIPS: usize = 18;
pub const COL_ORIGIN_STATE_NM: usize = 19;
pub const COL_ORIGIN_WAC: usize = 20;
pub const COL_DEST_AIRPORT_ID: usize = 21;
pub const COL_DEST_AIRPORT_SEQ_ID: usize = 22;
pub const COL_DEST_CITY_MARKET_ID: usize = 23;
pub const COL_DEST: usize = 24;
pub const COL_DEST_CITY_NAME: usize = 25;
pub const COL_DEST_STATE_ABR: usize = 27;
pub const COL_DEST_STATE_FIPS: usize = 28;
pub const COL_DEST_STATE_NM: usize = 29;
pub const COL_DEST_WAC: usize = 30;
pub const COL_CRS_DEP_TIME: usize = 31;
pub const COL_DEP_TIME: usize = 32;
pub const COL_CRS_ARR_TIME: usize = 42;
pub const COL_ARR_TIME: usize = 43;
pub const COL_ARR_DELAY: usize = 44;
pub const COL_ARR_DELAY_MINUTES: usize = 45;
pub const COL_ARR_DEL15: usize = 46;
pub const COL_CANCELLED: usize = 49;
pub const COL_CRS_ELAPSED_TIME: usize = 52;
pub const COL_ACTUAL_ELAPSED_TIME: usize = 53;
pub const COL_AVG_TICKET_PRICE: usize = 111;

/// Statistic names accepted on the command line
pub const STAT_MEAN: &str = "mean";
pub const STAT_MEDIAN: &str = "median";
pub const STAT_FAST_MEDIAN: &str = "fast-median";

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
