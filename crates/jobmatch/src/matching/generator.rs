//! Demo posting fabrication used when discovery yields no live postings.
//!
//! Randomness sits behind the [`RandomSource`] seam so tests can run with a
//! fixed seed. Fabricated output is explicitly outside the determinism
//! guarantee the scorer and extractor give.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::posting::JobPosting;
use super::profile::{ExperienceLevel, Profile};

/// Injectable randomness for fabrication.
pub trait RandomSource: Send {
    /// Uniform index in `0..upper`; `upper` is always non-zero.
    fn pick(&mut self, upper: usize) -> usize;
}

/// Production adapter over [`StdRng`].
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn pick(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

const EMAIL_PREFIXES: &[&str] = &["jobs", "careers", "hr", "recruitment"];

/// Fabricates industry-appropriate demo postings from a profile.
pub struct PostingGenerator<S: RandomSource> {
    source: S,
}

impl<S: RandomSource> PostingGenerator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Generate up to `max` postings matching the profile's primary industry,
    /// experience level, and detected skills.
    pub fn generate(&mut self, profile: &Profile, max: usize) -> Vec<JobPosting> {
        let base = base_postings(&profile.primary_industry, profile);
        let level = profile.experience_level;
        let skills = profile.top_skills(3).join(", ");

        base.into_iter()
            .take(max)
            .enumerate()
            .map(|(index, (title, company, location))| {
                let title = leveled_title(title, level, index);
                let salary = salary_band(&title, level);
                let contact_email = self.contact_email(company);
                JobPosting {
                    description: Some(format!(
                        "Excellent {title} opportunity utilizing {skills}"
                    )),
                    title: Some(title),
                    company: Some(company.to_string()),
                    location: Some(location.to_string()),
                    salary: Some(salary),
                    source: Some("Intelligent Match".to_string()),
                    contact_email: Some(contact_email),
                }
            })
            .collect()
    }

    /// Plausible recruiting address derived from the company name. Prefix
    /// choice is the only random element.
    pub fn contact_email(&mut self, company: &str) -> String {
        let mut cleaned: String = company
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace())
            .collect();
        for suffix in [" ltd", " limited", " plc", " inc"] {
            cleaned = cleaned.replace(suffix, "");
        }
        let cleaned: String = cleaned.split_whitespace().collect();

        let prefix = EMAIL_PREFIXES[self.source.pick(EMAIL_PREFIXES.len())];
        if cleaned.len() > 3 {
            format!("{prefix}@{cleaned}.co.uk")
        } else {
            format!("{prefix}@company.co.uk")
        }
    }
}

fn base_postings(
    primary_industry: &str,
    profile: &Profile,
) -> Vec<(String, &'static str, &'static str)> {
    match primary_industry {
        "sales_business_development" => {
            let mut postings = vec![
                ("Sales Executive".to_string(), "TechFlow Solutions", "London"),
                (
                    "Business Development Manager".to_string(),
                    "Growth Partners Ltd",
                    "Manchester",
                ),
                ("Account Manager".to_string(), "ClientFirst Services", "Remote"),
                ("Sales Consultant".to_string(), "Revenue Accelerators", "Birmingham"),
                ("Commercial Manager".to_string(), "B2B Specialists", "Leeds"),
            ];
            if profile.has_skill("crm") {
                postings[0].0 = "CRM Sales Specialist".to_string();
            }
            postings
        }
        "content_marketing" => {
            let mut postings = vec![
                ("Marketing Manager".to_string(), "Digital Innovators", "London"),
                (
                    "Digital Marketing Specialist".to_string(),
                    "Creative Agency",
                    "Remote",
                ),
                (
                    "Content Marketing Manager".to_string(),
                    "Brand Builders",
                    "Manchester",
                ),
                ("SEO Specialist".to_string(), "Search Masters", "Birmingham"),
            ];
            if profile.has_skill("seo") {
                postings[0].0 = "SEO Marketing Manager".to_string();
            }
            if profile.has_skill("social media") {
                postings[1].0 = "Social Media Marketing Specialist".to_string();
            }
            postings
        }
        "devops_cloud" | "cybersecurity" => {
            let mut postings = Vec::new();
            if profile.has_skill("python") {
                postings.push(("Python Developer".to_string(), "Tech Solutions Ltd", "London"));
            }
            if profile.has_skill("kubernetes") || profile.has_skill("docker") {
                postings.push((
                    "Platform Engineer".to_string(),
                    "CloudScale Systems",
                    "Remote",
                ));
            }
            if profile.has_skill("security") || profile.has_skill("cyber security") {
                postings.push((
                    "Security Engineer".to_string(),
                    "SecureStack Ltd",
                    "Manchester",
                ));
            }
            if postings.is_empty() {
                postings.push((
                    "Infrastructure Engineer".to_string(),
                    "Tech Solutions Ltd",
                    "London",
                ));
            }
            postings
        }
        "finance_accounting" => vec![
            ("Financial Analyst".to_string(), "Investment Partners", "London"),
            (
                "FinTech Product Manager".to_string(),
                "PayTech Solutions",
                "Remote",
            ),
            (
                "Accounting Specialist".to_string(),
                "Finance Corp",
                "Manchester",
            ),
        ],
        _ => vec![
            (
                "Business Analyst".to_string(),
                "Professional Services",
                "London",
            ),
            (
                "Project Coordinator".to_string(),
                "Enterprise Solutions",
                "Remote",
            ),
        ],
    }
}

fn leveled_title(title: String, level: ExperienceLevel, index: usize) -> String {
    // Only the top two postings get an experience prefix.
    if index >= 2 {
        return title;
    }
    match level {
        ExperienceLevel::Senior | ExperienceLevel::Executive => format!("Senior {title}"),
        ExperienceLevel::Junior => format!("Graduate {title}"),
        ExperienceLevel::Mid => title,
    }
}

/// Salary band keyed off role type and adjusted for experience, UK market.
fn salary_band(title: &str, level: ExperienceLevel) -> String {
    let lower = title.to_lowercase();

    let (mut min, mut max) = if lower.contains("senior") || lower.contains("lead") {
        (45_000i64, 75_000i64)
    } else if lower.contains("director") || lower.contains("head") {
        (60_000, 100_000)
    } else if lower.contains("manager") {
        (40_000, 65_000)
    } else if lower.contains("graduate") || lower.contains("junior") {
        (22_000, 35_000)
    } else if lower.contains("developer") || lower.contains("engineer") {
        (35_000, 65_000)
    } else {
        (28_000, 50_000)
    };

    match level {
        ExperienceLevel::Senior | ExperienceLevel::Executive => {
            min += 8_000;
            max += 15_000;
        }
        ExperienceLevel::Junior => {
            min -= 5_000;
            max -= 8_000;
        }
        ExperienceLevel::Mid => {}
    }

    let range = format!("\u{a3}{} - \u{a3}{}", thousands(min), thousands(max));
    if lower.contains("sales") || lower.contains("business development") {
        format!("{range} + Commission")
    } else {
        range
    }
}

fn thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, c) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(usize);

    impl RandomSource for FixedSource {
        fn pick(&mut self, upper: usize) -> usize {
            self.0 % upper
        }
    }

    #[test]
    fn contact_email_strips_company_suffixes() {
        let mut generator = PostingGenerator::new(FixedSource(0));
        let email = generator.contact_email("Growth Partners Ltd");
        assert_eq!(email, "jobs@growthpartners.co.uk");
    }

    #[test]
    fn contact_email_falls_back_for_short_names() {
        let mut generator = PostingGenerator::new(FixedSource(2));
        let email = generator.contact_email("A1");
        assert_eq!(email, "hr@company.co.uk");
    }

    #[test]
    fn seeded_sources_fabricate_identically() {
        let profile = crate::matching::extractor::ProfileExtractor::extract(
            "Senior sales executive with business development, account management, \
             CRM pipelines, and stakeholder management experience across UK markets.",
        )
        .expect("profile extracts");

        let mut first = PostingGenerator::new(StdRandom::seeded(7));
        let mut second = PostingGenerator::new(StdRandom::seeded(7));
        assert_eq!(first.generate(&profile, 5), second.generate(&profile, 5));
    }

    #[test]
    fn salary_band_formats_thousands() {
        let band = salary_band("Sales Executive", ExperienceLevel::Mid);
        assert_eq!(band, "\u{a3}28,000 - \u{a3}50,000 + Commission");
    }
}
