use crate::questions::models::{Difficulty, Question};

/// Built-in question set used whenever the model output cannot be used.
/// Skill areas are fixed and not matched against the requested skills.
pub fn mock_questions() -> Vec<Question> {
    [
        (
            Difficulty::Easy,
            "JavaScript",
            "You notice a variable declared with `var` inside a loop behaves unexpectedly in a callback. Walk through what is happening and how you would fix it.",
        ),
        (
            Difficulty::Medium,
            "React",
            "A list component re-renders every time its parent updates, and scrolling has become sluggish. How would you find the cause and reduce the re-renders?",
        ),
        (
            Difficulty::Medium,
            "Node.js",
            "An Express endpoint that reads a large file starts timing out under load. How would you diagnose the bottleneck and restructure the handler?",
        ),
        (
            Difficulty::Medium,
            "Databases",
            "A query that used to return in milliseconds now takes several seconds after the table grew tenfold. What steps would you take to investigate and fix it?",
        ),
        (
            Difficulty::Hard,
            "System Design",
            "Design a notification service that must deliver messages to a million users within a minute while tolerating the failure of any single server. Describe the components and trade-offs.",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (difficulty, skill_area, question))| Question {
        question_id: i as u32 + 1,
        question: question.to_string(),
        difficulty,
        skill_area: skill_area.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::models::QUESTION_SET_SIZE;

    #[test]
    fn test_mock_set_has_five_sequential_questions() {
        let questions = mock_questions();
        assert_eq!(questions.len(), QUESTION_SET_SIZE);
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q.question_id as usize, i + 1);
            assert!(!q.question.is_empty());
        }
    }

    #[test]
    fn test_mock_set_difficulty_distribution() {
        let questions = mock_questions();
        let count = |d: Difficulty| questions.iter().filter(|q| q.difficulty == d).count();
        assert_eq!(count(Difficulty::Easy), 1);
        assert!((2..=3).contains(&count(Difficulty::Medium)));
        assert!((1..=2).contains(&count(Difficulty::Hard)));
    }
}
