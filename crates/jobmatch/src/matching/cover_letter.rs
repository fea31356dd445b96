//! Template cover letter rendering. Pure string interpolation, no I/O.

use super::posting::JobPosting;
use super::profile::Profile;

/// Render the application cover letter for one posting.
pub fn render_cover_letter(profile: &Profile, posting: &JobPosting) -> String {
    let title = posting.display_title();
    let company = posting.display_company();
    let skills = profile.top_skills(3);
    let background = if skills.is_empty() {
        "my professional background".to_string()
    } else {
        format!("my background in {}", skills.join(", "))
    };

    format!(
        "Dear Hiring Manager,\n\n\
         I am writing to express my strong interest in the {title} position at {company}. \
         Based on {background}, I believe I would be a valuable addition to your team.\n\n\
         My relevant experience includes the key qualifications mentioned in your job posting. \
         I am particularly drawn to this opportunity because it aligns well with my \
         professional goals and expertise.\n\n\
         I would welcome the opportunity to discuss how my skills and experience can \
         contribute to {company}'s continued success. Thank you for considering my \
         application.\n\n\
         Best regards,\n\
         [Your Name]"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::extractor::ProfileExtractor;

    #[test]
    fn letter_mentions_title_company_and_skills() {
        let profile = ProfileExtractor::extract(
            "Senior DevOps engineer with AWS, Kubernetes, Docker, and Terraform expertise \
             delivering cloud platforms for UK clients.",
        )
        .expect("profile extracts");
        let posting = JobPosting {
            title: Some("Platform Engineer".to_string()),
            company: Some("CloudScale Systems".to_string()),
            ..JobPosting::default()
        };

        let letter = render_cover_letter(&profile, &posting);
        assert!(letter.contains("Platform Engineer position at CloudScale Systems"));
        assert!(letter.contains("my background in"));
        assert!(letter.starts_with("Dear Hiring Manager,"));
    }
}
