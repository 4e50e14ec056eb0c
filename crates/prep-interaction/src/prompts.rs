//! Prompt construction and list parsing.
//!
//! One function per exercise operation. Wording targets IELTS writing
//! practice; list output from the generator is normalized with
//! [`parse_list`].

use prep_core::generator::GenerationRequest;
use prep_core::session::TenseDrillKind;

/// System instruction framing every request.
const SYSTEM: &str = "You are an IELTS writing tutor helping a student practice for the exam.";

/// How many essay topics to request.
pub const TOPIC_COUNT: usize = 22;

/// How many vocabulary words to request per topic.
pub const VOCABULARY_COUNT: usize = 10;

/// Request for a fresh list of essay topics.
pub fn essay_topics() -> GenerationRequest {
    GenerationRequest::new(format!(
        "Generate {TOPIC_COUNT} IELTS essay topics. Output one topic per line with no numbering."
    ))
    .with_system(SYSTEM)
    .with_max_tokens(150)
}

/// Request for academic vocabulary to use in an essay on `topic`.
pub fn vocabulary(topic: &str) -> GenerationRequest {
    GenerationRequest::new(format!(
        "Generate {VOCABULARY_COUNT} academic-level words suitable for an IELTS essay on the \
         topic '{topic}' for students aiming for a band score of 5.5 or higher. \
         Output one word per line."
    ))
    .with_system(SYSTEM)
    .with_max_tokens(50)
}

/// Request for a review of a submitted essay.
pub fn essay_review(essay: &str, required: &[String]) -> GenerationRequest {
    GenerationRequest::new(format!(
        "Please review the following IELTS essay for grammar, style, and spelling errors. \
         Check if all required words are used and the essay length is appropriate.\n\n\
         Essay: {essay}\n\nRequired words: {}",
        required.join(", ")
    ))
    .with_system(SYSTEM)
    .with_max_tokens(500)
}

/// Request for one tense exercise of the given kind.
pub fn tense_exercise(kind: TenseDrillKind) -> GenerationRequest {
    let prompt = match kind {
        TenseDrillKind::ConvertTense => {
            "Give a sentence and ask to convert it to another tense."
        }
        TenseDrillKind::FillInBlanks => {
            "Create a sentence with a missing verb and ask to fill it in with the correct tense."
        }
        TenseDrillKind::CreateSentence => {
            "Ask the user to create a sentence using the present perfect tense."
        }
        TenseDrillKind::ChooseCorrect => {
            "Provide a sentence with multiple tense options and ask to choose the correct one."
        }
        TenseDrillKind::Dialogue => {
            "Create a short dialogue with missing tenses and ask the user to complete it."
        }
    };
    GenerationRequest::new(prompt)
        .with_system(SYSTEM)
        .with_max_tokens(50)
}

/// Request for a verdict on a tense-exercise answer.
pub fn tense_review(exercise: &str, answer: &str) -> GenerationRequest {
    GenerationRequest::new(format!(
        "Here is a tenses exercise and a student's answer. Say whether the answer is \
         correct and briefly explain any mistakes.\n\n\
         Exercise: {exercise}\n\nAnswer: {answer}"
    ))
    .with_system(SYSTEM)
    .with_max_tokens(150)
}

/// Normalizes generator list output into at most `max` clean entries.
///
/// Strips bullet markers and "1." / "1)" numbering, trims whitespace,
/// and drops empty lines.
pub fn parse_list(text: &str, max: usize) -> Vec<String> {
    text.lines()
        .map(clean_list_line)
        .filter(|line| !line.is_empty())
        .take(max)
        .collect()
}

fn clean_list_line(line: &str) -> String {
    let mut rest = line.trim();
    rest = rest.trim_start_matches(['-', '*', '•']).trim_start();
    // numbering like "3." or "12)"
    let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let after = &rest[digits..];
        if let Some(stripped) = after.strip_prefix('.').or_else(|| after.strip_prefix(')')) {
            rest = stripped.trim_start();
        }
    }
    rest.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_strips_numbering_and_bullets() {
        let raw = "1. Education\n2) Environment\n- Health\n* Tourism\n• Art";
        assert_eq!(
            parse_list(raw, 10),
            vec!["Education", "Environment", "Health", "Tourism", "Art"]
        );
    }

    #[test]
    fn test_parse_list_drops_blank_lines_and_caps() {
        let raw = "\nalpha\n\n  beta  \ngamma\ndelta\n";
        assert_eq!(parse_list(raw, 3), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_parse_list_keeps_leading_digits_without_separator() {
        // "3D printing" is a topic, not numbering
        assert_eq!(parse_list("3D printing", 5), vec!["3D printing"]);
    }

    #[test]
    fn test_vocabulary_prompt_mentions_topic() {
        let request = vocabulary("Space Exploration");
        assert!(request.prompt.contains("'Space Exploration'"));
        assert_eq!(request.max_tokens, Some(50));
        assert!(request.system.is_some());
    }

    #[test]
    fn test_essay_review_carries_essay_and_words() {
        let required = vec!["ecology".to_string(), "sustainable".to_string()];
        let request = essay_review("my essay text", &required);
        assert!(request.prompt.contains("my essay text"));
        assert!(request.prompt.contains("ecology, sustainable"));
    }

    #[test]
    fn test_each_drill_kind_has_a_distinct_prompt() {
        use strum::IntoEnumIterator;
        let prompts: Vec<String> = TenseDrillKind::iter()
            .map(|kind| tense_exercise(kind).prompt)
            .collect();
        for (i, a) in prompts.iter().enumerate() {
            for b in prompts.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
