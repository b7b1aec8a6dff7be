/// Numeric conversion helpers.
///
/// Safe conversions between integer types that report an evaluation error
/// instead of truncating.
pub mod num;
