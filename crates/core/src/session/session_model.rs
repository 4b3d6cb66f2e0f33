use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::form_errors::FormErrors;
use crate::amount::{normalize, AmountGrammar};
use crate::constants::{
    AMOUNT_REQUIRED_MESSAGE, DEFAULT_FROM_CURRENCY, DEFAULT_TO_CURRENCY, FIELD_AMOUNT,
    FIELD_FROM_CURRENCY, FIELD_TO_CURRENCY,
};
use crate::errors::{Error, Result, ValidationError};
use crate::fx::{ConversionResult, ExchangeRateTable};

/// Trimmed, upper-cased currency code; `None` when blank.
fn selected_code(code: &str) -> Option<String> {
    let code = code.trim();
    if code.is_empty() {
        None
    } else {
        Some(code.to_uppercase())
    }
}

/// Checks `raw` against the grammar of `from` (when selected) and normalizes it.
fn check_amount(raw: &str, from: Option<&str>) -> std::result::Result<Decimal, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::InvalidAmount {
            message: AMOUNT_REQUIRED_MESSAGE.to_string(),
        });
    }
    if let Some(code) = from {
        AmountGrammar::for_currency(code).validate(raw)?;
    }
    normalize(raw)
}

/// One submission of the form.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub from_currency: Option<String>,
    #[serde(default)]
    pub to_currency: Option<String>,
}

impl ConversionRequest {
    pub fn new(amount: &str, from_currency: &str, to_currency: &str) -> Self {
        Self {
            amount: amount.to_string(),
            from_currency: Some(from_currency.to_string()),
            to_currency: Some(to_currency.to_string()),
        }
    }

    /// Runs every field check, returning the normalized amount and the
    /// selected codes, or all field messages at once.
    pub fn validate(&self) -> std::result::Result<(Decimal, String, String), FormErrors> {
        let mut errors = FormErrors::new();
        let from = self.from_currency.as_deref().and_then(selected_code);
        let to = self.to_currency.as_deref().and_then(selected_code);

        for (field, code) in [(FIELD_FROM_CURRENCY, &from), (FIELD_TO_CURRENCY, &to)] {
            if code.is_none() {
                let err = ValidationError::MissingField(field.to_string());
                errors.add(field, err.to_string());
            }
        }
        let amount = match check_amount(&self.amount, from.as_deref()) {
            Ok(amount) => Some(amount),
            Err(err) => {
                errors.add(FIELD_AMOUNT, err.to_string());
                None
            }
        };

        match (amount, from, to) {
            (Some(amount), Some(from), Some(to)) if errors.is_empty() => Ok((amount, from, to)),
            _ => Err(errors),
        }
    }

    /// Validates, normalizes and converts against `rates`.
    pub fn evaluate(&self, rates: &ExchangeRateTable) -> Result<ConversionResult> {
        let (amount, from, to) = self.validate().map_err(ValidationError::Form)?;
        Ok(ConversionResult::compute(amount, &from, &to, rates)?)
    }
}

/// Partial update of the form fields; absent fields are left untouched.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdate {
    pub amount: Option<String>,
    pub from_currency: Option<String>,
    pub to_currency: Option<String>,
}

/// Serializable snapshot of the form, for display.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub amount: String,
    pub from_currency: Option<String>,
    pub to_currency: Option<String>,
    pub grammar: AmountGrammar,
    pub amount_placeholder: String,
    pub amount_error: Option<String>,
    pub result: Option<ConversionResult>,
}

/// State of the converter form.
///
/// All mutation goes through the methods below so that validation of the
/// amount always reflects the currently selected "from" currency.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterSession {
    amount: String,
    amount_touched: bool,
    from_currency: Option<String>,
    to_currency: Option<String>,
    amount_error: Option<String>,
    result: Option<ConversionResult>,
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new(DEFAULT_FROM_CURRENCY, DEFAULT_TO_CURRENCY)
    }
}

impl ConverterSession {
    pub fn new(from_currency: &str, to_currency: &str) -> Self {
        Self {
            amount: String::new(),
            amount_touched: false,
            from_currency: selected_code(from_currency),
            to_currency: selected_code(to_currency),
            amount_error: None,
            result: None,
        }
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn from_currency(&self) -> Option<&str> {
        self.from_currency.as_deref()
    }

    pub fn to_currency(&self) -> Option<&str> {
        self.to_currency.as_deref()
    }

    pub fn amount_error(&self) -> Option<&str> {
        self.amount_error.as_deref()
    }

    pub fn result(&self) -> Option<&ConversionResult> {
        self.result.as_ref()
    }

    pub fn grammar(&self) -> AmountGrammar {
        AmountGrammar::for_currency(self.from_currency().unwrap_or_default())
    }

    pub fn placeholder(&self) -> String {
        match self.from_currency() {
            Some("INR") => "Enter the amount in INR".to_string(),
            _ => "Enter the amount".to_string(),
        }
    }

    /// Re-checks the amount against the current "from" grammar and records
    /// the outcome. An amount the user never touched is not flagged.
    pub fn revalidate_amount(&mut self) -> std::result::Result<(), ValidationError> {
        if !self.amount_touched {
            self.amount_error = None;
            return Ok(());
        }
        match check_amount(&self.amount, self.from_currency()) {
            Ok(_) => {
                self.amount_error = None;
                Ok(())
            }
            Err(err) => {
                self.amount_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn set_amount(&mut self, raw: &str) -> std::result::Result<(), ValidationError> {
        self.amount = raw.to_string();
        self.amount_touched = true;
        self.revalidate_amount()
    }

    /// Selects the "from" currency; a blank code clears the selection.
    pub fn select_from(&mut self, code: &str) -> std::result::Result<(), ValidationError> {
        self.from_currency = selected_code(code);
        self.revalidate_amount()
    }

    /// Selects the "to" currency; a blank code clears the selection.
    pub fn select_to(&mut self, code: &str) {
        self.to_currency = selected_code(code);
    }

    /// Exchanges the "from" and "to" selections, then re-checks the amount
    /// against the new "from" grammar. Two swaps in a row are a no-op.
    pub fn swap(&mut self) -> std::result::Result<(), ValidationError> {
        std::mem::swap(&mut self.from_currency, &mut self.to_currency);
        self.revalidate_amount()
    }

    /// Applies every present field, then checks the amount once against the
    /// resulting "from" grammar. The outcome is also recorded on the session.
    pub fn apply(&mut self, update: SessionUpdate) -> std::result::Result<(), ValidationError> {
        if let Some(code) = update.from_currency {
            self.from_currency = selected_code(&code);
        }
        if let Some(code) = update.to_currency {
            self.select_to(&code);
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
            self.amount_touched = true;
        }
        self.revalidate_amount()
    }

    pub fn request(&self) -> ConversionRequest {
        ConversionRequest {
            amount: self.amount.clone(),
            from_currency: self.from_currency.clone(),
            to_currency: self.to_currency.clone(),
        }
    }

    /// Submits the form. On success the result replaces the previous one;
    /// on failure the previous result is kept.
    pub fn submit(&mut self, rates: &ExchangeRateTable) -> Result<ConversionResult> {
        self.amount_touched = true;
        match self.request().evaluate(rates) {
            Ok(result) => {
                self.amount_error = None;
                self.result = Some(result.clone());
                Ok(result)
            }
            Err(Error::Validation(ValidationError::Form(errors))) => {
                self.amount_error = errors.get(FIELD_AMOUNT).map(str::to_string);
                Err(ValidationError::Form(errors).into())
            }
            Err(err) => Err(err),
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            amount: self.amount.clone(),
            from_currency: self.from_currency.clone(),
            to_currency: self.to_currency.clone(),
            grammar: self.grammar(),
            amount_placeholder: self.placeholder(),
            amount_error: self.amount_error.clone(),
            result: self.result.clone(),
        }
    }
}
