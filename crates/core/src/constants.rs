/// Currency every fetched rate is quoted against
pub const BASE_CURRENCY: &str = "USD";

/// Initial "from" selection of a new session
pub const DEFAULT_FROM_CURRENCY: &str = "USD";

/// Initial "to" selection of a new session
pub const DEFAULT_TO_CURRENCY: &str = "INR";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for serialized exchange rates
pub const RATE_DECIMAL_PRECISION: u32 = 6;

/// Form field names, as seen by API clients
pub const FIELD_AMOUNT: &str = "amount";
pub const FIELD_FROM_CURRENCY: &str = "fromCurrency";
pub const FIELD_TO_CURRENCY: &str = "toCurrency";

/// Message for an empty currency selector
pub const SELECT_CURRENCY_MESSAGE: &str = "Please select a currency.";

/// Message for an empty amount field
pub const AMOUNT_REQUIRED_MESSAGE: &str = "Amount is required.";
