use crate::domain::model::{provided, BlogLength, BlogRequest, MarketingPlanRequest, Tone};

const MARKETING_PLAN_FORMAT: &str = "\
# OUTPUT FORMAT

Return the final response as clean Markdown ONLY. No JSON.

## 1. Executive Summary

Short 3–5 sentence overview of the full marketing plan.

## 2. Market & Audience Analysis

- Industry overview
- Customer pain points
- Competitor positioning

## 3. Marketing Goals (SMART)

List 3–5 high-impact goals.

## 4. Recommended Strategy

Explain the high-level approach for:
- branding
- content
- paid ads
- SEO
- social media

## 5. Content Strategy Table

Create a Markdown table with EXACTLY these 4 columns:

| Platform | Content Type | Frequency | Goal |
| --- | --- | --- | --- |

Add **5–7 rows only**.
Every row must have exactly 4 pipe-separated columns.

## 6. Marketing Funnel Strategy

- Awareness
- Consideration
- Conversion
- Retention

## 7. Budget Allocation Table

Create a Markdown table with EXACTLY these 3 columns:

| Channel | Percentage | Reason |
| --- | --- | --- |

Add **5 rows only**.

## 8. 30-Day Tactical Action Plan

List day-by-day or week-by-week actions.

## 9. KPIs & Measurement

Give measurable KPIs for each major channel.

## 10. Risks & Recommendations

List 3–5 risks + solutions.

# GLOBAL RULES (important)

- MUST use Markdown formatting only.
- All tables must follow correct Markdown syntax.
- Header → separator → rows must have SAME number of columns.
- Never output JSON or code blocks unless they are Markdown tables.
- If response becomes too long, shorten text but ALWAYS complete tables correctly.";

const BLOG_STRUCTURE: &str = "\
# STRUCTURE
- Meta title (<= 60 chars, MUST include keyword)
- Meta description (<= 160 chars, MUST include keyword)
- Suggested URL slug
- 3 SEO title variations
- H1 with keyword
- 2–4 paragraph intro (keyword within first 100 words)
- At least 5 H2 sections
- 3–6 H3 subsections
- Keyword usage 4–8 times
- 3 internal link suggestions
- 2 external authoritative references
- FAQ (3 questions)
- CTA
- Social share text (1 sentence)

# RULES
- Output must be Markdown only.
- No JSON.
- Write ACTUAL, detailed content for each section, not placeholders.
- Include real, helpful information tailored to the topic and audience.
";

pub fn build_marketing_plan_prompt(request: &MarketingPlanRequest) -> String {
    let mut input = vec![
        format!("Business Name: {}", request.business_name),
        format!("Industry: {}", request.industry),
        format!("Product/Service: {}", request.product_service),
        format!("Target Audience: {}", request.target_audience),
        format!("Budget: {}", request.budget),
        format!("Goals: {}", request.goals),
        format!("Timeline: {}", request.timeline),
    ];

    let optional = [
        ("USP", &request.unique_selling_point),
        ("Competitors", &request.competitors),
        ("Marketing Platforms", &request.marketing_platforms),
    ];
    for (label, value) in optional {
        if let Some(value) = provided(value) {
            input.push(format!("{}: {}", label, value));
        }
    }

    format!(
        "You are an expert digital marketing strategist.\n\n\
         Generate a complete marketing plan using only the information provided by the user.\n\n\
         # USER INPUT\n\n{}\n\n{}",
        input.join("\n"),
        MARKETING_PLAN_FORMAT
    )
}

pub fn build_blog_prompt(request: &BlogRequest, length: BlogLength, tone: Tone) -> String {
    format!(
        "You are an expert SEO content writer.\n\
         Write a complete SEO-optimized blog post in **Markdown only**.\n\n\
         # INPUT\n\
         Topic: {}\n\
         Target Keyword: {}\n\
         Target Audience: {}\n\
         Length: {}\n\
         Tone: {}\n\
         Business Name: {}\n\
         Industry: {}\n\
         Additional Notes: {}\n\n{}",
        request.topic,
        request.target_keyword,
        request.target_audience,
        length.guidance(),
        tone,
        provided(&request.business_name).unwrap_or("N/A"),
        provided(&request.industry).unwrap_or("N/A"),
        provided(&request.additional_notes).unwrap_or("None"),
        BLOG_STRUCTURE
    )
}
