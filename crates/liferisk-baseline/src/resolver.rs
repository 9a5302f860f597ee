use liferisk_core::constants;

/// Maps free-text city input to a country name for the baseline lookup.
///
/// Country selection is a stub: every input, including the empty string,
/// resolves to the configured default country. Per-city resolution is not
/// implemented.
#[derive(Debug, Clone)]
pub struct CountryResolver {
    default_country: String,
}

impl CountryResolver {
    pub fn new(default_country: impl Into<String>) -> Self {
        Self {
            default_country: default_country.into(),
        }
    }

    pub fn resolve(&self, _city: &str) -> &str {
        &self.default_country
    }

    pub fn default_country(&self) -> &str {
        &self.default_country
    }
}

impl Default for CountryResolver {
    fn default() -> Self {
        Self::new(constants::DEFAULT_COUNTRY)
    }
}
