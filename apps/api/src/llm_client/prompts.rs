// Shared prompt fragments and the placeholder filler used by every prompt template.
// Each feature module keeps its own templates in a prompts.rs alongside it.

/// Difficulty rubric shared by single and batch question generation.
pub const DIFFICULTY_GUIDELINES: &str = "DIFFICULTY GUIDELINES:
- EASY: Basic concepts, definitions, simple \"what is\" or \"explain briefly\" questions
- MEDIUM: Practical application, \"how would you\", comparisons, use cases
- HARD: System design, architecture decisions, complex problem-solving, trade-offs";

/// Replaces each `{key}` in `template` with its value. Unknown placeholders are left alone.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{key}}}"), value)
    })
}
