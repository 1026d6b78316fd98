use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SectionScore {
    pub score: u32,
    pub feedback: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionScores {
    pub formatting: SectionScore,
    pub content: SectionScore,
    pub keywords: SectionScore,
    pub achievements: SectionScore,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeywordReport {
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeAnalysis {
    pub overall_score: u32, // 0 – 100
    pub sections: SectionScores,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub keywords: KeywordReport,
}

impl ResumeAnalysis {
    /// Whole stars out of five.
    pub fn star_rating(&self) -> u32 {
        (self.overall_score / 20).min(5)
    }
}

fn section(score: u32, feedback: &str) -> SectionScore {
    SectionScore {
        score,
        feedback: feedback.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The canned report every upload receives.
pub fn mock_analysis() -> ResumeAnalysis {
    ResumeAnalysis {
        overall_score: 82,
        sections: SectionScores {
            formatting: section(90, "Excellent formatting and visual appeal"),
            content: section(85, "Strong technical skills and experience"),
            keywords: section(75, "Could benefit from more industry keywords"),
            achievements: section(80, "Good quantifiable achievements"),
        },
        strengths: strings(&[
            "Clear and professional formatting",
            "Strong technical skill set",
            "Relevant work experience",
            "Good use of action verbs",
        ]),
        improvements: strings(&[
            "Add more industry-specific keywords",
            "Include more quantifiable achievements",
            "Expand on leadership experience",
            "Add relevant certifications",
        ]),
        keywords: KeywordReport {
            found: strings(&["JavaScript", "React", "Node.js", "Python", "AWS"]),
            missing: strings(&["TypeScript", "Docker", "Kubernetes", "CI/CD", "Agile"]),
            suggestions: strings(&["Machine Learning", "API Development", "Database Design"]),
        },
    }
}
