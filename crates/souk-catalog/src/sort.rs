use std::fmt;

/// Requested catalog ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    /// Keep the items in the order they were listed.
    #[default]
    Unsorted,
}

impl SortKey {
    /// Parse a sort token. Unrecognized tokens (including the empty string)
    /// fall back to [`SortKey::Unsorted`] rather than failing, so a browse
    /// request never errors on its sort parameter.
    pub fn parse(token: &str) -> Self {
        match token {
            "name_asc" => Self::NameAsc,
            "name_desc" => Self::NameDesc,
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            _ => Self::Unsorted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::Unsorted => "unsorted",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
