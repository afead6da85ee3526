// LLM prompt templates for the interview endpoints.
// Placeholders are `{name}` and are filled with `llm_client::prompts::fill`.

/// Batch of six questions with ideal answers.
/// Placeholders: `{job_context}`, `{job_description}`, `{difficulty_plan}`, `{guidelines}`.
pub const BATCH_QUESTIONS_PROMPT: &str = r#"Generate 6 technical interview questions for a {job_context} position.
Job Description: {job_description}

Generate EXACTLY 6 questions with the following difficulties:
{difficulty_plan}

For EACH question, also provide an ideal answer (40-200 words).

{guidelines}

IMPORTANT: Questions must be specific to {job_context} role, not generic programming questions.

Output ONLY valid JSON in this EXACT format:
{
  "questions": [
    {"question": "...", "ideal_answer": "..."}
  ]
}
The "questions" array must contain exactly 6 objects."#;

/// Single question at one difficulty.
/// Placeholders: `{difficulty}`, `{difficulty_upper}`, `{time_guidance}`, `{job_context}`, `{guidelines}`.
pub const SINGLE_QUESTION_PROMPT: &str = r#"Generate ONE {difficulty_upper} technical interview question for a {job_context} position.

REQUIREMENTS:
- Difficulty: {difficulty_upper} ({time_guidance})
- Must be answerable within the time limit
- Should test practical knowledge, not memorization
- Clear and unambiguous wording

{guidelines}

EXAMPLES:
Easy: "What is the purpose of the virtual DOM in React?"
Medium: "How would you optimize performance in a React application with large lists?"
Hard: "Design a real-time collaborative editing system using React. Explain your architecture, state management approach, and how you'd handle conflicts."

Generate a question that is:
1. Specific and focused
2. Answerable in the given time
3. Tests understanding, not just recall
4. Relevant to real-world {job_context} work

Output ONLY valid JSON: {"question":"<your question here>","difficulty":"{difficulty}"}"#;

/// Ideal answer for a given question. Placeholder: `{question}`.
pub const IDEAL_ANSWER_PROMPT: &str = r#"Provide a clear, concise ideal answer for the question: "{question}"
The answer should be 40-200 words, technically accurate, and demonstrate best practices.
Output JSON: {"ideal":"..."}"#;

/// Single answer score on a 1-10 scale.
/// Placeholders: `{question}`, `{ideal}`, `{candidate_answer}`.
pub const SCORE_ANSWER_PROMPT: &str = r#"Compare the ideal answer and candidate answer for this question:

Question: "{question}"

Ideal Answer: "{ideal}"

Candidate Answer: "{candidate_answer}"

Score the candidate answer from 1-10 based on:
- Technical accuracy
- Completeness
- Understanding of concepts
- Practical application

Provide a JSON response: {"score": 7, "reason": "Brief explanation of the score"}"#;

/// Strict grading of a whole interview. Placeholders: `{job_title}`, `{questions_text}`.
pub const EVALUATE_ANSWERS_PROMPT: &str = r#"You are a professional technical interviewer evaluating candidates for a {job_title} position. Your role is to grade answers with STRICT and FAIR judgment.

GRADING CRITERIA:
1. **Correctness (40%)**: Is the answer technically accurate?
2. **Completeness (30%)**: Does it cover all key points?
3. **Depth (20%)**: Shows understanding beyond surface level?
4. **Clarity (10%)**: Is it well-articulated?

GRADING RULES:
- Blank/empty answers = 0 points (NO EXCEPTIONS)
- Irrelevant or nonsensical answers = 0-1 points
- Partially correct but incomplete = 2-4 points
- Correct but lacks depth = 5-6 points
- Good answer with minor gaps = 7-8 points
- Excellent comprehensive answer = 9-10 points
- DO NOT give high scores for long answers without substance
- DO NOT be lenient - this is a professional evaluation

EXAMPLES:
Easy question "What is React?"
- "React is a JavaScript library for building user interfaces" -> 6/10 (Correct but too brief)
- "React is a JavaScript library for building UIs, uses virtual DOM for efficient updates, component-based architecture" -> 9/10 (Comprehensive)
- "It's a framework for making websites" -> 3/10 (Partially correct, technically inaccurate)

Medium question "Explain useEffect hook"
- "useEffect is for side effects" -> 4/10 (Too vague)
- "" -> 0/10 (Blank)

Hard question "Design scalable state management"
- "Use Redux" -> 2/10 (Oversimplified)

NOW EVALUATE THESE ANSWERS:
{questions_text}

Provide ONLY valid JSON with this exact format, one evaluation per question in order:
{"evaluations": [
    {"score": <number 0-10>, "reason": "<brief 10-15 word explanation>"}
]}

Be STRICT. Most candidates should score 4-7. Only exceptional answers deserve 8-10."#;

/// One block of `{questions_text}` in the evaluation prompt.
/// Placeholders: `{index}`, `{difficulty}`, `{question}`, `{ideal_answer}`, `{candidate_answer}`.
pub const EVALUATION_QUESTION_BLOCK: &str = r#"
---
Question {index} (Difficulty: {difficulty}):
{question}

Expected Answer:
{ideal_answer}

Candidate's Answer:
{candidate_answer}
"#;

/// Final assessment. Placeholders: `{candidate_name}`, `{job_title}`, `{final_score}`, `{answers_text}`.
pub const SUMMARY_PROMPT: &str = r#"Based on this interview performance, provide a final assessment:

Candidate: {candidate_name}
Job Position: {job_title}
Average Score: {final_score}/10

Interview Answers:
{answers_text}

Provide a JSON response with:
- final_score: {final_score} (use this exact value)
- summary: A 2-3 sentence professional summary of the candidate's performance, strengths, and areas for improvement

JSON format: {"final_score": {final_score}, "summary": "..."}"#;
