use std::fmt;

/// A calendar month, recognized only by its full English name.
///
/// Month folders on the share are named freely (`6. June-2025`, `June 2025`),
/// so matching is a substring test on the lowercase name; numbers and
/// abbreviations are never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Parse a month selector. Anything that is not a full month name
    /// (including `any`, blanks, numbers and abbreviations) means "no month".
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let wanted = text.trim().to_lowercase();
        Self::ALL.into_iter().find(|m| m.as_str() == wanted)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::January => "january",
            Self::February => "february",
            Self::March => "march",
            Self::April => "april",
            Self::May => "may",
            Self::June => "june",
            Self::July => "july",
            Self::August => "august",
            Self::September => "september",
            Self::October => "october",
            Self::November => "november",
            Self::December => "december",
        }
    }

    /// True if a single path segment contains this month's name.
    #[must_use]
    pub fn matches_segment(self, segment: &str) -> bool {
        segment.to_lowercase().contains(self.as_str())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query and path filters for a search or report.
///
/// Text fields are stored trimmed; blank values are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub query: String,
    pub year: Option<String>,
    pub month: Option<Month>,
    pub company: Option<String>,
}

impl SearchFilter {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            query: query.trim().to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_year(mut self, year: Option<&str>) -> Self {
        self.year = non_blank(year);
        self
    }

    /// Set the month from free text; unrecognized text clears the filter.
    #[must_use]
    pub fn with_month(mut self, month: Option<&str>) -> Self {
        self.month = month.and_then(Month::parse);
        self
    }

    #[must_use]
    pub fn with_company(mut self, company: Option<&str>) -> Self {
        self.company = non_blank(company);
        self
    }

    /// Same path filters with the query cleared.
    #[must_use]
    pub fn without_query(&self) -> Self {
        Self {
            query: String::new(),
            ..self.clone()
        }
    }

    /// Same path filters with a different query.
    #[must_use]
    pub fn with_query(&self, query: &str) -> Self {
        Self {
            query: query.trim().to_string(),
            ..self.clone()
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
