//! Instruction templates for the language model.
//!
//! Everything here is pure: the same `(phase, language)` pair always yields
//! the same instruction text.

use super::language::InterviewLanguage;
use super::phase::InterviewPhase;
use super::signals::{END_MARKER, TRANSITION_MARKER};

/// Profile fields that must be collected before the technical assessment.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "Full Name",
    "Email Address",
    "Phone Number",
    "Years of Experience",
    "Desired Position",
    "Current Location",
    "Tech Stack",
];

/// Fixed closing text used when the candidate leaves with an exit keyword.
pub const FAREWELL_MESSAGE: &str = "Thank you for your time. The conversation has been ended. Our HR will review your file and contact you shortly.";

/// Stands in for a reply that carried only the technical transition marker.
pub const TECHNICAL_TRANSITION_MESSAGE: &str = "Thank you, I have everything I need. Are you ready for a few technical questions?";

/// Returns the opening assistant turn for a new interview.
pub fn greeting_message(language: InterviewLanguage) -> String {
    format!(
        "Hello! I am the Hiring Assistant. Let's get started. Could you please provide your Full Name? (Operating in {})",
        language
    )
}

/// Builds the system instruction for the given phase.
pub fn build_instructions(phase: InterviewPhase, language: InterviewLanguage) -> String {
    let mut instructions = base_prompt(language);
    instructions.push_str(&phase_objective(phase));
    instructions
}

fn base_prompt(language: InterviewLanguage) -> String {
    format!(
        "You are the TalentScout Hiring Assistant, an AI recruiter.\n\
         Crucial Rule: You MUST communicate entirely in {language}.\n\
         Tone: Professional, welcoming, and empathetic.\n\
         Personalization Rule: If the user provides their name or location, seamlessly use it in your next responses to build rapport.\n\
         Guardrail: Do not answer technical or coding questions for the user. Stick strictly to the interview process.\n"
    )
}

fn phase_objective(phase: InterviewPhase) -> String {
    match phase {
        InterviewPhase::Greeting | InterviewPhase::Gathering => format!(
            "\nCurrent Objective: Gather these details: {fields}.\n\
             Ask for 1 or 2 items at a time. Acknowledge their answers contextually \
             (e.g., if they have 10 years of experience, compliment them on their extensive background).\n\
             Once you have ALL the information, output the exact phrase \"{marker}\" at the very end of your message, \
             and ask if they are ready for technical questions based on their tech stack.\n",
            fields = REQUIRED_FIELDS.join(", "),
            marker = TRANSITION_MARKER,
        ),
        InterviewPhase::TechnicalAssessment => format!(
            "\nCurrent Objective: Generate 3 to 5 relevant technical interview questions based strictly on the tech stack they provided earlier.\n\
             Ask them one by one. Evaluate their answer briefly before asking the next.\n\
             Once all questions are done, output the exact phrase \"{marker}\" at the very end of your message, \
             thank the candidate by name, and state a recruiter will contact them.\n",
            marker = END_MARKER,
        ),
        InterviewPhase::Ended => "\nThe interview is over. Politely say goodbye.\n".to_string(),
    }
}
