use crate::infra::InMemoryProfileRepository;
use clap::Args;
use jobmatch::config::AppConfig;
use jobmatch::error::AppError;
use jobmatch::matching::{
    export, render_cover_letter, MatchService, PostingGenerator, ProfileExtractor, RankPolicy,
    ScoringWeights, StdRandom,
};
use std::path::PathBuf;
use std::sync::Arc;

const SAMPLE_RESUME: &str = "Senior DevOps Engineer with 8+ years experience designing AWS \
    and Azure infrastructure. Kubernetes, Docker, Terraform, CI/CD with Jenkins, Python \
    automation, monitoring and security hardening for fintech clients. Comfortable leading \
    small platform teams. Based in Manchester, open to remote roles across the UK.";

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Path to a plain-text resume file
    #[arg(long)]
    pub(crate) resume: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Path to a plain-text resume file. Defaults to a built-in sample.
    #[arg(long)]
    pub(crate) resume: Option<PathBuf>,
    /// Minimum match score to keep. Defaults to 0 so every fabricated posting shows.
    #[arg(long)]
    pub(crate) min_score: Option<f64>,
    /// Keep only the best N matches
    #[arg(long)]
    pub(crate) top: Option<usize>,
    /// Write the ranked matches to a CSV file
    #[arg(long)]
    pub(crate) export_csv: Option<PathBuf>,
    /// Print a draft cover letter for the best match
    #[arg(long)]
    pub(crate) cover_letter: bool,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let text = std::fs::read_to_string(&args.resume)?;
    let profile = ProfileExtractor::extract(&text)
        .map_err(jobmatch::matching::MatchServiceError::from)?;

    match serde_json::to_string_pretty(&profile) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("profile serialization unavailable: {err}"),
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        resume,
        min_score,
        top,
        export_csv,
        cover_letter,
    } = args;

    let config = AppConfig::load()?;

    let text = match resume {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE_RESUME.to_string(),
    };

    println!("Intelligent job matching demo");

    let repository = Arc::new(InMemoryProfileRepository::default());
    let service = MatchService::new(
        repository,
        ScoringWeights::default(),
        PostingGenerator::new(StdRandom::from_entropy()),
    )
    .with_fabrication_limit(config.matching.max_demo_postings);

    let record = service.analyze(&text)?;
    let profile = &record.profile;
    println!("\nResume analysis ({})", record.profile_id.0);
    println!("- Primary industry: {}", profile.primary_industry);
    println!("- Experience level: {}", profile.experience_level.label());
    println!("- Confidence: {:.0}%", profile.confidence * 100.0);
    println!("- Skills detected: {}", profile.skills.len());
    if !profile.skills.is_empty() {
        println!("  Top skills: {}", profile.top_skills(5).join(", "));
    }

    let policy = RankPolicy {
        min_score: min_score.unwrap_or(0.0),
        top_n: top,
    };
    let outcome = service.discover(Vec::new(), &policy)?;

    if outcome.ranked.is_empty() {
        println!("\nNo postings scored above {:.2}", policy.min_score);
        return Ok(());
    }

    println!("\nRanked matches ({} fabricated postings)", outcome.ranked.len());
    for (index, entry) in outcome.ranked.iter().enumerate() {
        println!(
            "{}. {} at {} ({})",
            index + 1,
            entry.posting.display_title(),
            entry.posting.display_company(),
            entry.posting.display_location()
        );
        println!(
            "   score {:.2} | {} | priority {} | {}",
            entry.result.overall_score,
            entry.result.strength.label(),
            entry.result.priority.label(),
            entry.posting.display_salary()
        );
        if let Some(email) = &entry.posting.contact_email {
            println!("   apply via {email}");
        }
    }

    let best = &outcome.ranked[0];
    if !best.result.recommendations.is_empty() {
        println!("\nRecommendations for the top match");
        for note in &best.result.recommendations {
            println!("- {note}");
        }
    }

    let market = &outcome.market;
    println!("\nMarket snapshot");
    println!(
        "- {} postings | average score {:.2} | {} strong matches",
        market.total_postings, market.average_score, market.high_match_count
    );
    println!("- Remote share: {:.0}%", market.remote_share * 100.0);
    if let Some((company, count)) = market.top_companies.first() {
        println!("- Most active company: {company} ({count})");
    }

    if cover_letter {
        println!("\nDraft cover letter for the top match\n");
        println!("{}", render_cover_letter(profile, &best.posting));
    }

    if let Some(path) = export_csv {
        let file = std::fs::File::create(&path)?;
        export::write_matches(file, &outcome.ranked)?;
        println!("\nWrote {} matches to {}", outcome.ranked.len(), path.display());
    }

    Ok(())
}
