pub const FALLBACK_REGION: &str = "Middle East";

// Checked in order, first match wins.
const COUNTRY_KEYWORDS: [(&str, &str); 9] = [
    ("uae", "United Arab Emirates"),
    ("dubai", "United Arab Emirates"),
    ("saudi", "Saudi Arabia"),
    ("riyadh", "Saudi Arabia"),
    ("cairo", "Egypt"),
    ("qatar", "Qatar"),
    ("kuwait", "Kuwait"),
    ("bahrain", "Bahrain"),
    ("oman", "Oman"),
];

/// Infers a country from a free-text location. Unrecognized locations fall
/// back to the regional sentinel.
pub fn infer_country(location: &str) -> String {
    let location = location.to_lowercase();
    COUNTRY_KEYWORDS
        .iter()
        .find(|(keyword, _)| location.contains(keyword))
        .map(|(_, country)| country.to_string())
        .unwrap_or_else(|| FALLBACK_REGION.to_string())
}

#[cfg(test)]
mod tests {
    use super::{infer_country, FALLBACK_REGION};

    #[test]
    fn known_keywords_map_to_countries() {
        assert_eq!(infer_country("Dubai, UAE"), "United Arab Emirates");
        assert_eq!(infer_country("RIYADH"), "Saudi Arabia");
        assert_eq!(infer_country("Cairo, Egypt"), "Egypt");
        assert_eq!(infer_country("Doha, Qatar"), "Qatar");
        assert_eq!(infer_country("Kuwait City"), "Kuwait");
        assert_eq!(infer_country("Manama, Bahrain"), "Bahrain");
        assert_eq!(infer_country("Muscat, oman"), "Oman");
    }

    #[test]
    fn unknown_location_falls_back_to_region() {
        assert_eq!(infer_country("Remote"), FALLBACK_REGION);
        assert_eq!(infer_country(""), FALLBACK_REGION);
    }

    #[test]
    fn inference_is_pure() {
        assert_eq!(infer_country("Dubai"), infer_country("Dubai"));
        assert_eq!(infer_country("Nowhere"), infer_country("Nowhere"));
    }
}
