//! Built-in prompt text. Field values arrive already resolved to their
//! fallback markers, so the templates carry no policy of their own.

pub const LESSON_PLAN_NAME: &str = "lesson_plan";
pub const SLIDES_ATTACHED_NAME: &str = "slides_attached";
pub const NO_SLIDES_NAME: &str = "no_slides";

pub const LESSON_PLAN_TEMPLATE: &str = r#"You are helping me complete the "NIoT ITE lesson plan proforma".
Using the information below, draft a COMPLETE, fully filled lesson plan in the SAME section structure and headings as the proforma:

- Part I – Lesson overview/thinking
- Part II - Lesson Sequence (table with Lesson time / Teacher / Learners)
- Part III – Lesson Evaluation

IMPORTANT RULES:
- Produce a complete plan even if some information is missing.
- Use my title + brief description to infer sensible objectives, retrieval, sequence, checks for understanding, misconceptions, and vocabulary.
- Do NOT invent very specific resources/questions unless they are explicitly shown in the slides. If you assume, label [ASSUMED].
- Include explicit checkpoints/assessment moments aligned to objectives.
- Keep it classroom-ready: routines, modelling, questioning, guided → independent practice, exit ticket.
- Include adaptations/notes for SEND/EAL/high attainers where appropriate.
- Timings must add up to the lesson duration (if duration is missing, assume 50 mins and label [ASSUMED]).

{{ slides_block }}

MY INPUTS:
Teacher: {{ teacher }}
Date: {{ date }}
Teaching group: {{ group }}
Duration: {{ duration }}
Lesson title/topic: {{ title }}

Brief lesson description (main source if slides are not attached):
{{ brief }}

Context / constraints (must follow):
{{ constraints }}

OUTPUT REQUIREMENTS:
1) Part I – Lesson overview/thinking
Include:
- Lesson objective(s) (2–4, measurable)
- Review (prior learning to revisit)
- Starting point vs end point
- Core knowledge + how assessed
- Core knowledge checkpoints (what you do + what students do)
- Likely misconceptions + how you’ll diagnose/respond
- Tier 2/3 vocabulary + how taught

2) Part II - Lesson Sequence
- A realistic lesson sequence table for the full duration (timings add up).
- Include entry routine + retrieval, modelling/input, guided practice, independent practice.
- Include at least 2 checkpoints + a plenary/exit ticket.
- Make teacher and learner actions specific.
- If slides are attached, align the sequence to the slide flow and reference slide numbers.

3) Part III – Lesson Evaluation
- A post-lesson evaluation template (bullet prompts)
- Plus suggested likely reflections based on the plan, marked [ASSUMED] (unless explicitly evidenced by slides).

Now write the lesson plan in that structure with clear headings and a clear table for Part II.
"#;

pub const SLIDES_ATTACHED_TEMPLATE: &str = r#"SLIDES/POWERPOINT (IMPORTANT):
- I intend to upload/attach a PowerPoint (or PDF export) in this same ChatGPT chat.
- FIRST: confirm whether you can access any attached slides/resources in this chat.
  - If you cannot see any attachments, STOP and respond only: "Please upload/attach the PowerPoint (or PDF export) and I will generate the full lesson plan from it."
  - Do not generate the lesson plan until the slides are attached.
- If slides ARE attached, use them as the PRIMARY source of truth for specificity (tasks, questions, vocabulary, misconceptions, and checks for understanding).
- First: quickly summarise the slide flow in 5–8 bullets (max).
- Then: produce the fully filled lesson plan aligned to the slide flow.
- When you use slide details, reference them like (Slide 3) or (Slides 6–8).
- If my brief conflicts with slides, prefer the slides and clearly flag the conflict.
Optional notes about the slides/resources:
{{ slidesNotes }}
"#;

pub const NO_SLIDES_TEMPLATE: &str = "\
SLIDES/POWERPOINT:
- No slides are attached (or I am not providing them).
- Still produce a fully filled plan using the brief description below.
- Make only cautious, reasonable assumptions and label them [ASSUMED]. Use [ADD HERE] if you cannot safely assume.
";
