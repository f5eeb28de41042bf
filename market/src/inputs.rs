//! Raw form inputs.
//!
//! Values are kept exactly as typed. Numeric fields are only interpreted when
//! a calculation is requested, through [`parse_numeric`].

#[cfg(test)]
#[path = "inputs_test.rs"]
mod inputs_test;

/// The five user-editable fields of the calculator form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarketInputs {
    /// Free-form chart title; may be empty.
    pub title: String,
    pub total_customers: String,
    /// Annual revenue per customer.
    pub revenue_per_customer: String,
    /// Share of TAM that is serviceable, in percent.
    pub sam_percentage: String,
    /// Share of SAM that is obtainable, in percent.
    pub som_percentage: String,
}

impl MarketInputs {
    /// Raw text of one field.
    #[must_use]
    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::Title => &self.title,
            InputField::TotalCustomers => &self.total_customers,
            InputField::RevenuePerCustomer => &self.revenue_per_customer,
            InputField::SamPercentage => &self.sam_percentage,
            InputField::SomPercentage => &self.som_percentage,
        }
    }

    /// Replace the raw text of one field.
    pub fn set(&mut self, field: InputField, value: impl Into<String>) {
        let slot = match field {
            InputField::Title => &mut self.title,
            InputField::TotalCustomers => &mut self.total_customers,
            InputField::RevenuePerCustomer => &mut self.revenue_per_customer,
            InputField::SamPercentage => &mut self.sam_percentage,
            InputField::SomPercentage => &mut self.som_percentage,
        };
        *slot = value.into();
    }
}

/// Identifies one form field, with its presentation metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputField {
    Title,
    TotalCustomers,
    RevenuePerCustomer,
    SamPercentage,
    SomPercentage,
}

impl InputField {
    /// All fields in form order.
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::TotalCustomers,
        Self::RevenuePerCustomer,
        Self::SamPercentage,
        Self::SomPercentage,
    ];

    /// Stable identifier, used as the HTML `name` attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::TotalCustomers => "totalCustomers",
            Self::RevenuePerCustomer => "revenuePerCustomer",
            Self::SamPercentage => "samPercentage",
            Self::SomPercentage => "somPercentage",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Chart Title",
            Self::TotalCustomers => "Total Potential Customers",
            Self::RevenuePerCustomer => "Revenue Per Customer (Annual)",
            Self::SamPercentage => "SAM Percentage (%)",
            Self::SomPercentage => "SOM Percentage (%)",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Title => "e.g., Electric Battery Market Opportunity in LATAM",
            Self::TotalCustomers => "Enter total customers",
            Self::RevenuePerCustomer => "Enter revenue per customer",
            Self::SamPercentage => "Enter SAM percentage",
            Self::SomPercentage => "Enter SOM percentage",
        }
    }

    /// Explanatory text shown under the input, if any.
    #[must_use]
    pub fn hint(self) -> Option<&'static str> {
        match self {
            Self::SamPercentage => Some(
                "Estimate the % of the TAM that your business can realistically serve, given your resources and capabilities.",
            ),
            Self::SomPercentage => {
                Some("The portion of SAM that you can realistically capture given current market share and competition.")
            }
            _ => None,
        }
    }

    /// HTML input type.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        if self.is_numeric() { "number" } else { "text" }
    }

    /// Upper bound advertised to the browser's number input.
    ///
    /// This is a hint only; values above it still reach the model unchanged.
    #[must_use]
    pub fn max(self) -> Option<&'static str> {
        match self {
            Self::SamPercentage | Self::SomPercentage => Some("100"),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_numeric(self) -> bool {
        !matches!(self, Self::Title)
    }
}

/// Interpret numeric-as-text input.
///
/// Empty, malformed, or non-finite text (including `"NaN"`, `"inf"` and
/// overflowing literals such as `"1e400"`) is treated as zero, so the result
/// is always a finite number.
#[must_use]
pub fn parse_numeric(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}
