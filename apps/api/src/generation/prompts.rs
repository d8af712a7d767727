// Prompt templates for the three artifact kinds.
// Placeholders are `{name}`-style and are filled in a single pass by
// generation::prompt_builder. Cross-cutting fragments come from llm_client::prompts.

/// Resume template.
/// Placeholders: {name}, {target_job_title}, {skills}, {raw_experience}, {no_preamble}
pub const RESUME_PROMPT_TEMPLATE: &str = "\
You are an expert resume writer. Rewrite this experience into professional resume bullet points.

Name: {name}
Target Role: {target_job_title}
Skills: {skills}
Messy Experience: {raw_experience}

Format: Return ONLY the clean, professional bullet points. {no_preamble}";

/// Cover letter template.
/// Placeholders: {name}, {skills}, {raw_experience}, {company_name}, {job_description_line}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = "\
Write a professional cover letter for {name}.

My Skills: {skills}
My Experience: {raw_experience}
Applying to Company: {company_name}
{job_description_line}
Tone: Confident and professional. Keep it under 200 words.";

/// Inserted into the cover letter template only when a job description was given.
/// Placeholder: {job_description}
pub const JOB_DESCRIPTION_LINE_TEMPLATE: &str = "Job Description: {job_description}\n";

/// Portfolio template.
/// Placeholders: {name}, {skills}, {raw_experience}, {email}, {no_fences}, {tailwind_script}
pub const PORTFOLIO_PROMPT_TEMPLATE: &str = "\
You are an expert frontend web developer. Create a stunning, single-page personal portfolio website for {name}.

Skills: {skills}
Experience: {raw_experience}
Email: {email}

Requirements:
1. Return ONLY pure, raw HTML code. {no_fences}
2. Include {tailwind_script} in the <head> for styling.
3. Use a modern, dark-theme UI with a Hero section, About section, and a Projects section.
4. Ensure it is fully responsive.";
