mod aggregate_id;
mod flex_date;

pub use aggregate_id::AggregateId;
pub(crate) use aggregate_id::uuid_id;
pub use flex_date::FlexDate;
