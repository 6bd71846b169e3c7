// Prompt constants for sample STAR answer generation.

pub const ANSWER_SYSTEM: &str = "You are an expert interview coach helping candidates \
    prepare for behavioral interviews. Generate realistic, compelling STAR (Situation, \
    Task, Action, Result) formatted answers that demonstrate strong leadership, \
    problem-solving, and impact. Answers must be specific, measurable, and aligned \
    with the company's values.";

/// Used when the candidate supplied background about their own experience.
/// Replace: {context}
pub const CANDIDATE_CONTEXT_SECTION: &str = "\nCANDIDATE CONTEXT:\n{context}\n";

/// Used when no candidate background was supplied.
pub const NO_CONTEXT_SECTION: &str =
    "\nNOTE: Generate a realistic example appropriate for the experience level.\n";

/// Answer generation prompt template.
/// Replace: {role}, {company}, {experience_level}, {question},
///          {context_section}, {principles}
pub const ANSWER_PROMPT_TEMPLATE: &str = r#"Generate a compelling STAR-formatted answer for the following behavioral interview question.

CONTEXT:
- Target Role: {role}
- Target Company: {company}
- Experience Level: {experience_level}
- Interview Question: {question}
{context_section}
COMPANY LEADERSHIP PRINCIPLES ({company}):
{principles}

REQUIREMENTS:
1. Generate a realistic, specific example that demonstrates:
   - Strong problem-solving skills
   - Leadership and ownership
   - Impact and measurable results
   - Alignment with {company}'s leadership principles

2. Format the answer using the STAR method:
   - Situation: Set the context (project, team, challenge)
   - Task: Describe your responsibility and what needed to be accomplished
   - Action: Detail the specific actions you took (use "I" statements)
   - Result: Quantify the impact and outcomes

3. Make it appropriate for the {experience_level} level:
   - Include relevant technical details for {role}
   - Show appropriate scope and impact for the experience level
   - Demonstrate growth and learning

4. Ensure the answer:
   - Is 300-500 words
   - Includes specific metrics and numbers where possible
   - Shows 2-3 of {company}'s leadership principles
   - Is realistic and believable
   - Demonstrates both technical and soft skills

Generate ONLY the STAR answer, formatted clearly with Situation, Task, Action, and Result sections. Do not include any additional commentary or explanation."#;
