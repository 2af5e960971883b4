pub mod types;

pub use types::{Banner, FieldId, FieldReport, Outcome, Verdict, SUCCESS_BANNER_TTL_MS};
