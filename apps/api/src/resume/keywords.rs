//! Keyword pre-scan: case-insensitive substring match against fixed vocabularies.
//!
//! Matching is plain substring containment: "Java" also matches inside "JavaScript".

use crate::resume::models::SkillExtractionResult;

pub const TECH_SKILLS: &[&str] = &[
    // Languages
    "Python", "Java", "C++", "C#", "JavaScript", "TypeScript", "GoLang", "Rust", "Ruby", "PHP",
    "Swift", "Kotlin",
    // Web front end
    "HTML", "CSS", "SASS", "Bootstrap", "Tailwind CSS", "React", "Next.js", "Angular", "Vue.js",
    "jQuery",
    // Web back end
    "Node.js", "Express.js", "Django", "Flask", "FastAPI", "Spring Boot", "Laravel",
    "Ruby on Rails", "ASP.NET Core",
    // Data stores
    "SQL", "MySQL", "PostgreSQL", "SQLite", "MongoDB", "Firebase", "Oracle", "Redis", "Cassandra",
    // Cloud and ops
    "AWS", "Azure", "Google Cloud", "Docker", "Kubernetes", "Jenkins", "Terraform", "CI/CD",
    "Ansible", "Linux", "Bash",
    // Data science and ML
    "Pandas", "NumPy", "Matplotlib", "Seaborn", "Scikit-learn", "TensorFlow", "Keras", "PyTorch",
    "OpenCV", "NLP", "Hugging Face", "LLM", "LangChain", "RAG", "Transformers",
    "Machine Learning", "Deep Learning", "Neural Networks", "Computer Vision",
    // Data engineering
    "Apache Spark", "Hadoop", "Kafka", "Airflow", "ETL", "Data Warehousing", "Snowflake",
    "Databricks",
    // Mobile
    "React Native", "Flutter", "SwiftUI", "Android Studio", "Xcode", "Ionic",
    // Security
    "Ethical Hacking", "Penetration Testing", "Network Security", "Firewall", "Cryptography",
    "Wireshark",
    // Tooling and process
    "Git", "GitHub", "Bitbucket", "Agile", "Scrum", "Jira", "VS Code", "Eclipse",
    "IntelliJ IDEA", "Postman",
    // Testing
    "Selenium", "JUnit", "PyTest", "Mocha", "Chai", "Jest", "Cypress", "Postman Testing",
    "Manual Testing", "Automation Testing",
    // Design
    "Figma", "Adobe XD", "Photoshop", "Canva", "Wireframing", "Prototyping",
    // Architecture and emerging
    "API Development", "Microservices", "GraphQL", "REST API", "WebSockets", "OAuth2", "JWT",
    "Blockchain", "Solidity", "IoT", "Edge Computing", "AR/VR", "Quantum Computing",
];

pub const SOFT_SKILLS: &[&str] = &[
    "Communication", "Active Listening", "Public Speaking", "Presentation Skills", "Negotiation",
    "Collaboration", "Teamwork", "Interpersonal Skills", "Empathy", "Relationship Building",
    "Conflict Resolution", "Customer Service",
    "Problem Solving", "Analytical Thinking", "Critical Thinking", "Decision Making", "Creativity",
    "Innovation", "Strategic Thinking", "Logical Reasoning", "Research Skills", "Troubleshooting",
    "Leadership", "Mentoring", "Coaching", "Team Management", "Project Management", "Delegation",
    "Accountability", "Goal Setting", "Motivational Skills", "Time Management",
    "Performance Management",
    "Adaptability", "Flexibility", "Resilience", "Work Ethic", "Integrity", "Reliability",
    "Discipline", "Self-Motivation", "Positive Attitude", "Emotional Intelligence",
    "Stress Management", "Patience",
    "Organizational Skills", "Multitasking", "Planning", "Prioritization", "Attention to Detail",
    "Focus", "Meeting Deadlines",
    "Remote Collaboration", "Cross-functional Communication", "Virtual Teamwork",
    "Feedback Management", "Stakeholder Communication",
    "Design Thinking", "Brainstorming", "Open-mindedness", "Storytelling", "Curiosity",
    "Continuous Learning",
    "Professionalism", "Cultural Awareness", "Ethical Judgment", "Diversity and Inclusion",
    "Confidentiality", "Self-Reflection", "Growth Mindset", "Goal Orientation", "Learning Agility",
    "Initiative",
];

/// Project names recognised without the model. Empty: projects come from the model.
pub const PROJECTS: &[&str] = &[];

/// Baseline skill sets found by substring scan. Each vocabulary entry appears at most once,
/// in vocabulary order.
pub fn scan_keywords(text: &str) -> SkillExtractionResult {
    let haystack = text.to_lowercase();
    SkillExtractionResult {
        tech_skills: matches(&haystack, TECH_SKILLS),
        soft_skills: matches(&haystack, SOFT_SKILLS),
        projects: matches(&haystack, PROJECTS),
    }
}

fn matches(haystack: &str, vocabulary: &[&str]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for &entry in vocabulary {
        if haystack.contains(&entry.to_lowercase()) && !found.iter().any(|f| f == entry) {
            found.push(entry.to_string());
        }
    }
    found
}
