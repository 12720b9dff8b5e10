//! Best-effort place-name geocoding for branch records.
//!
//! Source branch data carries free-text addresses but no coordinates. This
//! module approximates coordinates by matching the address and bilingual name
//! fields against a fixed, ordered table of known place-name substrings. The
//! first matching entry wins, so table order is a real tie-break and must not
//! be rearranged. Records that match nothing fall back to the chain's primary
//! city.
//!
//! Because several branches share one place entry, a small symmetric jitter is
//! applied to each resolved coordinate so markers do not overlap exactly. The
//! goal is "visually distinct marker in the right metro area", not survey-grade
//! accuracy.

use super::coords::LatLng;
use rand::Rng;

/// One row of the place-name lookup table.
#[derive(Debug, Clone, Copy)]
pub struct PlaceEntry {
    /// Lowercased substring matched against record fields.
    pub needle: &'static str,

    /// Grouping label exposed as the location's `city`.
    pub city: &'static str,

    /// Latitude of the place's approximate center.
    pub lat: f64,

    /// Longitude of the place's approximate center.
    pub lng: f64,
}

impl PlaceEntry {
    /// The entry's coordinate as a [`LatLng`].
    #[must_use]
    pub const fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Ordered place-name table. First match wins; specific place names precede
/// the broad city entries they could collide with (e.g. "duba, tabuk" before
/// "dubai").
pub const PLACE_TABLE: &[PlaceEntry] = &[
    PlaceEntry { needle: "wadi qudaid", city: "Makkah Province", lat: 22.3333, lng: 39.2500 },
    PlaceEntry { needle: "wadi stharah", city: "Makkah Province", lat: 22.6000, lng: 39.5000 },
    PlaceEntry { needle: "khulais", city: "Makkah Province", lat: 22.1550, lng: 39.3180 },
    PlaceEntry { needle: "al jumoom", city: "Makkah Province", lat: 21.6160, lng: 39.6980 },
    PlaceEntry { needle: "al sharaya", city: "Makkah Province", lat: 21.4700, lng: 39.9300 },
    PlaceEntry { needle: "asfan", city: "Makkah Province", lat: 21.9360, lng: 39.3640 },
    PlaceEntry { needle: "abyar", city: "Makkah Province", lat: 22.6500, lng: 39.4500 },
    PlaceEntry { needle: "makkah", city: "Makkah Province", lat: 21.3891, lng: 39.8579 },
    PlaceEntry { needle: "duba, tabuk", city: "Tabuk", lat: 27.3510, lng: 35.6900 },
    PlaceEntry { needle: "tabuk", city: "Tabuk", lat: 28.3838, lng: 36.5550 },
    PlaceEntry { needle: "al qaseem", city: "Al Qaseem", lat: 26.3260, lng: 43.9750 },
    PlaceEntry { needle: "al qahma", city: "Al Qahma", lat: 18.7458, lng: 41.9389 },
    PlaceEntry { needle: "jeddah", city: "Jeddah", lat: 21.4858, lng: 39.1925 },
    PlaceEntry { needle: "riyadh", city: "Riyadh", lat: 24.7136, lng: 46.6753 },
    PlaceEntry { needle: "dammam", city: "Dammam", lat: 26.4207, lng: 50.0888 },
    PlaceEntry { needle: "dubai", city: "Dubai", lat: 25.2048, lng: 55.2708 },
    PlaceEntry { needle: "abu dhabi", city: "Abu Dhabi", lat: 24.4539, lng: 54.3773 },
];

/// Fallback for records matching no table entry: the chain's primary city.
pub const DEFAULT_PLACE: PlaceEntry = PlaceEntry {
    needle: "jeddah",
    city: "Jeddah",
    lat: 21.4858,
    lng: 39.1925,
};

/// Default jitter amplitude in degrees. The per-axis offset is uniform in
/// `[-amplitude / 2, amplitude / 2)`, matching the source's
/// `(random - 0.5) * 0.15`.
pub const DEFAULT_JITTER_DEGREES: f64 = 0.15;

/// Resolves a branch record to a place entry.
///
/// Fields are checked in order (address, then English name, then Arabic name);
/// within each field the table is scanned top to bottom and the first matching
/// needle wins. Matching is a lowercase substring test. Returns
/// [`DEFAULT_PLACE`] when nothing matches.
#[must_use]
pub fn resolve_place(fields: &[&str]) -> &'static PlaceEntry {
    for field in fields {
        let haystack = field.to_lowercase();
        for entry in PLACE_TABLE {
            if haystack.contains(entry.needle) {
                return entry;
            }
        }
    }
    tracing::debug!(fields = ?fields, "no place match, using default coordinate");
    &DEFAULT_PLACE
}

/// Applies symmetric uniform jitter to both axes and clamps the result into
/// the valid WGS84 range.
///
/// `amplitude_degrees` bounds the total spread; each axis is offset by a value
/// strictly within `[-amplitude / 2, amplitude / 2)`.
pub fn jitter<R: Rng + ?Sized>(
    position: LatLng,
    amplitude_degrees: f64,
    rng: &mut R,
) -> LatLng {
    let lat_offset = (rng.random::<f64>() - 0.5) * amplitude_degrees;
    let lng_offset = (rng.random::<f64>() - 0.5) * amplitude_degrees;
    LatLng::new(position.lat + lat_offset, position.lng + lng_offset).clamped()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn address_is_checked_before_names() {
        // Name mentions Riyadh but the address pins the record to Jeddah.
        let entry = resolve_place(&[
            "Jeddah",
            "Thahama Market - Al Riyadh District, North Jeddah",
        ]);
        assert_eq!(entry.city, "Jeddah");
    }

    #[test]
    fn table_order_breaks_needle_collisions() {
        // "duba, tabuk" precedes "dubai", so the Saudi town never resolves to
        // the UAE city even though "dubai" contains "duba".
        assert_eq!(resolve_place(&["Duba, Tabuk"]).city, "Tabuk");
        assert_eq!(resolve_place(&["Dubai Marina"]).city, "Dubai");
    }

    #[test]
    fn first_match_wins_within_a_field() {
        let entry = resolve_place(&["Naqleen Fuel Station, Wadi Qudaid, Makkah-Madinah Expressway"]);
        assert_eq!(entry.needle, "wadi qudaid");
    }

    #[test]
    fn unmatched_record_falls_back_to_default() {
        let entry = resolve_place(&["Somewhere Unlisted", "Mystery Branch"]);
        assert_eq!(entry.city, DEFAULT_PLACE.city);
        assert_eq!(entry.position(), DEFAULT_PLACE.position());
    }

    #[test]
    fn jitter_stays_strictly_within_amplitude_bound() {
        let mut rng = StdRng::seed_from_u64(7);
        let origin = DEFAULT_PLACE.position();
        for _ in 0..1000 {
            let jittered = jitter(origin, DEFAULT_JITTER_DEGREES, &mut rng);
            assert!((jittered.lat - origin.lat).abs() <= DEFAULT_JITTER_DEGREES / 2.0);
            assert!((jittered.lng - origin.lng).abs() <= DEFAULT_JITTER_DEGREES / 2.0);
            assert!(jittered.is_valid());
        }
    }

    #[test]
    fn jitter_near_pole_is_clamped_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        let near_pole = LatLng::new(89.99, 179.99);
        for _ in 0..100 {
            assert!(jitter(near_pole, 0.15, &mut rng).is_valid());
        }
    }

    #[test]
    fn seeded_rng_makes_jitter_reproducible() {
        let a = jitter(DEFAULT_PLACE.position(), 0.15, &mut StdRng::seed_from_u64(42));
        let b = jitter(DEFAULT_PLACE.position(), 0.15, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
