use super::super::lexicon::{EUROPE_TERMS, UK_TERMS};
use super::super::profile::LocationPreference;

/// Remote/region compatibility between the resume preference flags and a
/// posting location, in [0, 1]. The engine rescales this into the final
/// multiplier band [0.7, 1.0].
pub(crate) fn location_score(preference: &LocationPreference, location_lower: &str) -> f64 {
    let job_remote = location_lower.contains("remote");
    if preference.remote && job_remote {
        return 1.0;
    }

    let job_in_uk = UK_TERMS.iter().any(|term| location_lower.contains(term));
    let job_in_europe = EUROPE_TERMS.iter().any(|term| location_lower.contains(term));

    if preference.uk && job_in_uk {
        0.9
    } else if preference.europe && (job_in_uk || job_in_europe) {
        0.8
    } else if job_remote {
        0.7
    } else {
        0.3
    }
}

/// Scale a location score into the [0.7, 1.0] multiplier applied to the
/// blended score.
pub(crate) fn location_multiplier(score: f64) -> f64 {
    0.7 + 0.3 * score
}
