//! Static keyword lexicon backing both profile extraction and job scoring.
//!
//! Declaration order matters: industry and experience tables are iterated in
//! the order written here, and argmax tie-breaks resolve to the first entry
//! seen. All matching against these tables is case-insensitive substring
//! containment, with multi-word phrases matched literally.

use serde::{Deserialize, Serialize};

use super::profile::ExperienceLevel;

/// One industry in the classification lexicon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndustryEntry {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub search_terms: &'static [&'static str],
    pub weight_multiplier: f64,
}

/// Fallback industry label when no lexicon entry matches a resume.
pub const GENERAL_INDUSTRY: &str = "general";

pub const INDUSTRIES: &[IndustryEntry] = &[
    IndustryEntry {
        name: "devops_cloud",
        keywords: &[
            "devops",
            "devsecops",
            "aws",
            "azure",
            "kubernetes",
            "docker",
            "terraform",
            "ci/cd",
            "jenkins",
            "python",
            "java",
            "gitops",
            "monitoring",
            "security",
        ],
        search_terms: &["devops", "cloud engineer", "aws", "kubernetes", "devsecops"],
        weight_multiplier: 1.2,
    },
    IndustryEntry {
        name: "cybersecurity",
        keywords: &[
            "cyber security",
            "ethical hacking",
            "network security",
            "penetration testing",
            "security analyst",
            "risk management",
            "compliance",
            "vulnerability",
            "firewall",
        ],
        search_terms: &[
            "cyber security",
            "security analyst",
            "ethical hacking",
            "penetration testing",
        ],
        weight_multiplier: 1.2,
    },
    IndustryEntry {
        name: "recruitment_hr",
        keywords: &[
            "recruitment",
            "talent acquisition",
            "hr",
            "recruiting",
            "sourcing",
            "employer branding",
            "stakeholder management",
            "crm",
            "talent lead",
        ],
        search_terms: &["recruiter", "talent acquisition", "hr", "recruitment consultant"],
        weight_multiplier: 1.1,
    },
    IndustryEntry {
        name: "healthcare_public_health",
        keywords: &[
            "public health",
            "healthcare",
            "patient safety",
            "infection control",
            "epidemiology",
            "health analytics",
            "clinical",
            "operating department",
            "nhs",
        ],
        search_terms: &["public health", "healthcare", "clinical", "health analyst"],
        weight_multiplier: 1.1,
    },
    IndustryEntry {
        name: "customer_service",
        keywords: &[
            "customer service",
            "customer support",
            "call centre",
            "customer experience",
            "crm",
            "customer success",
            "support coordination",
            "customer advisor",
        ],
        search_terms: &[
            "customer service",
            "customer support",
            "call centre",
            "customer success",
        ],
        weight_multiplier: 1.0,
    },
    IndustryEntry {
        name: "content_marketing",
        keywords: &[
            "content writing",
            "digital marketing",
            "seo",
            "copywriting",
            "social media",
            "content strategy",
            "email marketing",
            "analytics",
            "adobe",
            "cms",
        ],
        search_terms: &["content writer", "digital marketing", "copywriter", "marketing"],
        weight_multiplier: 1.1,
    },
    IndustryEntry {
        name: "operations_management",
        keywords: &[
            "operations",
            "team leadership",
            "project management",
            "process improvement",
            "stakeholder management",
            "risk management",
            "compliance",
            "prince2",
        ],
        search_terms: &[
            "operations manager",
            "team leader",
            "project manager",
            "operations",
        ],
        weight_multiplier: 1.0,
    },
    IndustryEntry {
        name: "finance_accounting",
        keywords: &[
            "accounting",
            "finance",
            "financial analysis",
            "fund accountant",
            "excel",
            "financial performance",
            "corporate governance",
            "esg",
            "stata",
            "spss",
        ],
        search_terms: &["accountant", "finance", "financial analyst", "fund accountant"],
        weight_multiplier: 1.0,
    },
    IndustryEntry {
        name: "aviation_transport",
        keywords: &[
            "aviation",
            "crewing",
            "easa ftl",
            "crew management",
            "airport operations",
            "scheduling",
            "compliance",
            "aviation systems",
            "airline",
        ],
        search_terms: &["aviation", "crewing officer", "airport operations", "airline"],
        weight_multiplier: 1.0,
    },
    IndustryEntry {
        name: "academic_research",
        keywords: &[
            "university",
            "lecturer",
            "research",
            "phd",
            "academic writing",
            "teaching",
            "module leadership",
            "supervision",
            "academia",
            "higher education",
        ],
        search_terms: &[
            "university lecturer",
            "academic",
            "research",
            "higher education",
        ],
        weight_multiplier: 1.0,
    },
    IndustryEntry {
        name: "care_support",
        keywords: &[
            "care work",
            "support work",
            "healthcare assistant",
            "safeguarding",
            "first aid",
            "care management",
            "support coordination",
            "carer",
        ],
        search_terms: &["care worker", "support worker", "healthcare assistant", "carer"],
        weight_multiplier: 1.0,
    },
    IndustryEntry {
        name: "sales_business_development",
        keywords: &[
            "sales",
            "business development",
            "sales support",
            "account management",
            "sales coordinator",
            "kpi tracking",
            "sales ambassador",
        ],
        search_terms: &[
            "sales",
            "business development",
            "account manager",
            "sales coordinator",
        ],
        weight_multiplier: 1.0,
    },
];

/// Look up an industry entry by its lexicon name.
pub fn industry(name: &str) -> Option<&'static IndustryEntry> {
    INDUSTRIES.iter().find(|entry| entry.name == name)
}

/// Experience level phrase indicators. Declaration order doubles as the
/// tie-break order for the level argmax.
pub const EXPERIENCE_INDICATORS: &[(ExperienceLevel, &[&str])] = &[
    (
        ExperienceLevel::Junior,
        &["junior", "entry level", "0-2 years", "graduate", "intern", "trainee"],
    ),
    (
        ExperienceLevel::Mid,
        &["2-5 years", "3-6 years", "mid level", "intermediate", "associate"],
    ),
    (
        ExperienceLevel::Senior,
        &["senior", "5+ years", "6+ years", "lead", "principal", "expert"],
    ),
    (
        ExperienceLevel::Executive,
        &["cto", "ceo", "vp", "director", "head of", "chief", "10+ years"],
    ),
];

/// Scoring category for the weighted keyword sub-scores.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    /// Deep specialty relevance; dominates the blended score.
    Web3,
    Technical,
    Experience,
    Industry,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 4] = [
        ScoreCategory::Web3,
        ScoreCategory::Technical,
        ScoreCategory::Experience,
        ScoreCategory::Industry,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ScoreCategory::Web3 => "web3_relevance",
            ScoreCategory::Technical => "technical_skills",
            ScoreCategory::Experience => "experience_match",
            ScoreCategory::Industry => "industry_knowledge",
        }
    }

    /// Fixed normalization ceiling for the raw weighted sum of this category.
    pub const fn ceiling(self) -> f64 {
        match self {
            ScoreCategory::Web3 => 20.0,
            ScoreCategory::Technical => 15.0,
            ScoreCategory::Experience => 10.0,
            ScoreCategory::Industry => 8.0,
        }
    }

    pub const fn keywords(self) -> &'static [(&'static str, f64)] {
        match self {
            ScoreCategory::Web3 => WEB3_KEYWORDS,
            ScoreCategory::Technical => TECHNICAL_KEYWORDS,
            ScoreCategory::Experience => EXPERIENCE_KEYWORDS,
            ScoreCategory::Industry => INDUSTRY_KEYWORDS,
        }
    }
}

const WEB3_KEYWORDS: &[(&str, f64)] = &[
    ("web3", 4.0),
    ("blockchain", 4.0),
    ("defi", 4.5),
    ("ethereum", 3.5),
    ("smart contract", 4.0),
    ("smart contracts", 4.0),
    ("solidity", 4.5),
    ("crypto", 2.5),
    ("cryptocurrency", 2.5),
    ("dapp", 3.0),
    ("dapps", 3.0),
    ("flash loan", 5.0),
    ("flash loans", 5.0),
    ("mev", 4.0),
    ("dao", 2.5),
    ("nft", 2.0),
    ("polygon", 2.5),
    ("chainlink", 2.5),
    ("uniswap", 3.0),
    ("aave", 3.0),
    ("compound", 3.0),
    ("liquidity", 2.5),
    ("yield farming", 3.5),
    ("automated market maker", 3.5),
    ("amm", 3.5),
    ("liquidation", 4.0),
    ("metamask", 2.5),
    ("web3.js", 3.5),
    ("ethers.js", 3.5),
    ("ipfs", 2.5),
    ("consensus", 2.0),
    ("protocol", 2.0),
    ("tokenomics", 2.5),
];

const TECHNICAL_KEYWORDS: &[(&str, f64)] = &[
    ("python", 3.0),
    ("javascript", 2.5),
    ("node.js", 2.5),
    ("nodejs", 2.5),
    ("react", 2.0),
    ("typescript", 2.2),
    ("fastapi", 2.5),
    ("express", 2.0),
    ("api", 1.5),
    ("rest", 1.5),
    ("restful", 1.5),
    ("backend", 2.0),
    ("frontend", 1.8),
    ("full stack", 2.5),
    ("fullstack", 2.5),
    ("git", 1.2),
    ("docker", 1.8),
    ("aws", 1.8),
    ("linux", 1.5),
    ("mongodb", 1.5),
    ("postgresql", 1.5),
    ("mysql", 1.3),
    ("redis", 1.5),
    ("kubernetes", 2.0),
    ("microservices", 2.0),
    ("graphql", 1.8),
];

const EXPERIENCE_KEYWORDS: &[(&str, f64)] = &[
    ("senior", 2.5),
    ("lead", 2.8),
    ("principal", 3.0),
    ("staff", 2.6),
    ("architect", 2.5),
    ("engineer", 2.0),
    ("developer", 2.0),
    ("cto", 3.5),
    ("technical lead", 2.8),
    ("team lead", 2.5),
    ("startup", 2.2),
    ("entrepreneur", 2.5),
    ("founder", 3.0),
    ("remote", 1.5),
    ("freelance", 1.3),
    ("contract", 1.2),
];

const INDUSTRY_KEYWORDS: &[(&str, f64)] = &[
    ("fintech", 2.0),
    ("financial", 1.8),
    ("trading", 2.2),
    ("exchange", 2.5),
    ("payments", 1.8),
    ("banking", 1.5),
    ("investment", 1.7),
    ("security", 2.0),
    ("audit", 2.2),
    ("compliance", 1.5),
];

/// Multi-word phrases tracked for the phrase-overlap bonus.
pub const IMPORTANT_PHRASES: &[&str] = &[
    "smart contract",
    "smart contracts",
    "flash loan",
    "flash loans",
    "yield farming",
    "automated market maker",
    "full stack",
    "fullstack",
    "technical lead",
    "team lead",
    "node.js",
    "web3.js",
    "ethers.js",
    "machine learning",
    "artificial intelligence",
    "data science",
    "cloud computing",
    "software engineering",
];

/// Words excluded from tokenization before text similarity.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "should", "could", "can", "may", "might", "this", "that", "these",
    "those", "we", "you", "they", "it", "job", "role", "position", "candidate", "experience",
    "work", "looking", "seeking", "required", "preferred", "must", "nice",
];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Location vocabularies used for the remote/region compatibility score.
pub const UK_TERMS: &[&str] = &[
    "uk",
    "united kingdom",
    "london",
    "manchester",
    "edinburgh",
    "britain",
];

pub const EUROPE_TERMS: &[&str] = &["europe", "european", "eu"];
