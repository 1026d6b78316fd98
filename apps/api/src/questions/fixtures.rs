use crate::questions::models::{BankQuestion, Category, CategoryFacet, Difficulty};

pub const ROLES: &[&str] = &[
    "Software Engineer",
    "Product Manager",
    "Data Scientist",
    "UX Designer",
    "Marketing Manager",
    "Sales Representative",
];

/// Nominal bank sizes per category, as advertised in the sidebar.
pub fn category_facets() -> Vec<CategoryFacet> {
    [
        (Category::Behavioral, 150),
        (Category::Technical, 200),
        (Category::Situational, 120),
        (Category::Company, 80),
    ]
    .into_iter()
    .map(|(id, count)| CategoryFacet {
        id,
        name: id.label(),
        count,
    })
    .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn seed_questions() -> Vec<BankQuestion> {
    vec![
        BankQuestion {
            id: 1,
            question: "Tell me about yourself.".to_string(),
            category: Category::Behavioral,
            difficulty: Difficulty::Entry,
            roles: strings(&["Software Engineer", "Product Manager"]),
            popularity: 95,
            sample_answer: "Start with a brief overview of your professional background, highlight key achievements, and connect your experience to the role you're applying for.".to_string(),
            tips: strings(&[
                "Keep it concise (2-3 minutes)",
                "Focus on professional achievements",
                "End with why you're interested in this role",
            ]),
            saved: false,
        },
        BankQuestion {
            id: 2,
            question: "Describe a time when you had to work with a difficult team member.".to_string(),
            category: Category::Behavioral,
            difficulty: Difficulty::Mid,
            roles: strings(&["Product Manager", "Marketing Manager"]),
            popularity: 78,
            sample_answer: "Use the STAR method to describe the situation, your approach to handling the conflict, and the positive outcome.".to_string(),
            tips: strings(&[
                "Use STAR method",
                "Show empathy and problem-solving skills",
                "Focus on the resolution",
            ]),
            saved: true,
        },
        BankQuestion {
            id: 3,
            question: "How would you design a URL shortener like bit.ly?".to_string(),
            category: Category::Technical,
            difficulty: Difficulty::Senior,
            roles: strings(&["Software Engineer"]),
            popularity: 89,
            sample_answer: "Start with requirements gathering, then discuss system architecture, database design, and scalability considerations.".to_string(),
            tips: strings(&[
                "Ask clarifying questions",
                "Think about scale",
                "Consider edge cases",
            ]),
            saved: false,
        },
        BankQuestion {
            id: 4,
            question: "What would you do if you disagreed with your manager's decision?".to_string(),
            category: Category::Situational,
            difficulty: Difficulty::Mid,
            roles: strings(&["Product Manager", "Marketing Manager"]),
            popularity: 82,
            sample_answer: "Demonstrate respect for hierarchy while showing you can advocate for your ideas professionally.".to_string(),
            tips: strings(&[
                "Show respect for authority",
                "Demonstrate communication skills",
                "Focus on finding common ground",
            ]),
            saved: false,
        },
    ]
}
