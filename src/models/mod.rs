pub mod flight;
pub mod table;

pub use flight::{FlightRecord, ValidationOutcome};
pub use table::{CarrierMonth, PriceTable, ScanCounters};
