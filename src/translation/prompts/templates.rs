/*!
 * Prompt templates for the three translation passes.
 *
 * Each pass has a whole-text variant and a chunked variant. The chunked
 * variants show the model the full document with the working span marked,
 * so neighboring chunks serve as context without being translated.
 */

/// A prompt template with `{placeholder}` variables.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: &'static str,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub const fn new(template: &'static str) -> Self {
        Self { template }
    }

    /// Render the template, replacing each `{name}` with its value.
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        let mut rendered = self.template.to_string();
        for (name, value) in vars {
            rendered = rendered.replace(&format!("{{{}}}", name), value);
        }
        rendered
    }
}

/// System prompt for the draft pass.
pub const DRAFT_SYSTEM: PromptTemplate = PromptTemplate::new(
    "You are an expert translator specializing in {source_language} to {target_language} translation.",
);

/// System prompt for the reflection pass.
pub const REFLECTION_SYSTEM: PromptTemplate = PromptTemplate::new(
    "You are an expert translator specializing in {source_language} to {target_language} translation. \
     You will be shown a source text and a draft translation, and your goal is to improve the translation.",
);

/// System prompt for the improvement pass.
pub const IMPROVEMENT_SYSTEM: PromptTemplate = PromptTemplate::new(
    "You are an expert translation editor specializing in {source_language} to {target_language} translation.",
);

/// User prompt for the draft pass over a whole text.
pub const DRAFT_USER: PromptTemplate = PromptTemplate::new(
    r#"Translate the following {source_language} text into {target_language}.
Output only the translation and nothing else: no explanations, no commentary.

<SOURCE_TEXT>
{source_text}
</SOURCE_TEXT>"#,
);

/// User prompt for the reflection pass over a whole text.
///
/// `{country_clause}` expands to the locale instruction when a target
/// country is set, and to the empty string otherwise.
pub const REFLECTION_USER: PromptTemplate = PromptTemplate::new(
    r#"Carefully read the {source_language} source text and its {target_language} translation below, then write a list of concrete, itemized suggestions for improving the translation.{country_clause}

<SOURCE_TEXT>
{source_text}
</SOURCE_TEXT>

<TRANSLATION>
{translation}
</TRANSLATION>

When writing suggestions, pay attention to whether there are ways to improve the translation's:
(i) accuracy, by correcting errors of addition, mistranslation, omission, or untranslated text,
(ii) fluency, by applying {target_language} grammar, spelling and punctuation rules and avoiding unnecessary repetition,
(iii) style, by keeping the register and tone of the source text,
(iv) terminology, by using consistent and domain-appropriate terms.

Write one suggestion per line. Output only the suggestions and nothing else."#,
);

/// User prompt for the improvement pass over a whole text.
pub const IMPROVEMENT_USER: PromptTemplate = PromptTemplate::new(
    r#"Carefully read the {source_language} source text, the initial {target_language} translation, and the expert suggestions below, then edit the translation into an improved version.

<SOURCE_TEXT>
{source_text}
</SOURCE_TEXT>

<TRANSLATION>
{translation}
</TRANSLATION>

<EXPERT_SUGGESTIONS>
{suggestions}
</EXPERT_SUGGESTIONS>

Take each suggestion into account where it applies, making sure the result is accurate, fluent, faithful in style, and consistent in terminology.
Output only the improved translation and nothing else."#,
);

/// User prompt for the draft pass over one chunk of a larger document.
pub const CHUNK_DRAFT_USER: PromptTemplate = PromptTemplate::new(
    r#"Your task is to translate part of a {source_language} document into {target_language}.
The full document is shown below; the part to translate is marked between {chunk_start} and {chunk_end}. Use everything outside the markers as context, but translate only the marked part. Do not translate any other part of the document.

<SOURCE_DOCUMENT>
{delimited_document}
</SOURCE_DOCUMENT>

To repeat, the part you must translate is shown again here:

<CHUNK_TO_TRANSLATE>
{chunk_text}
</CHUNK_TO_TRANSLATE>

Output only the {target_language} translation of the marked part and nothing else."#,
);

/// User prompt for the reflection pass over one chunk of a larger document.
pub const CHUNK_REFLECTION_USER: PromptTemplate = PromptTemplate::new(
    r#"Carefully read part of a {source_language} document and its {target_language} translation, then write a list of concrete, itemized suggestions for improving the translation.{country_clause}

The full document is shown below; the part under review is marked between {chunk_start} and {chunk_end}. Use everything outside the markers as context, but suggest improvements only for the marked part.

<SOURCE_DOCUMENT>
{delimited_document}
</SOURCE_DOCUMENT>

The part under review and its translation:

<CHUNK_TO_TRANSLATE>
{chunk_text}
</CHUNK_TO_TRANSLATE>

<TRANSLATION>
{translation}
</TRANSLATION>

When writing suggestions, pay attention to whether there are ways to improve the translation's:
(i) accuracy, by correcting errors of addition, mistranslation, omission, or untranslated text,
(ii) fluency, by applying {target_language} grammar, spelling and punctuation rules and avoiding unnecessary repetition,
(iii) style, by keeping the register and tone of the source text,
(iv) terminology, by using consistent and domain-appropriate terms.

Write one suggestion per line. Output only the suggestions and nothing else."#,
);

/// User prompt for the improvement pass over one chunk of a larger document.
pub const CHUNK_IMPROVEMENT_USER: PromptTemplate = PromptTemplate::new(
    r#"Your task is to improve the {target_language} translation of one part of a {source_language} document.

The full document is shown below; the translated part is marked between {chunk_start} and {chunk_end}. Use everything outside the markers as context, but edit only the translation of the marked part.

<SOURCE_DOCUMENT>
{delimited_document}
</SOURCE_DOCUMENT>

The translated part, its initial translation, and a list of expert suggestions:

<CHUNK_TO_TRANSLATE>
{chunk_text}
</CHUNK_TO_TRANSLATE>

<TRANSLATION>
{translation}
</TRANSLATION>

<EXPERT_SUGGESTIONS>
{suggestions}
</EXPERT_SUGGESTIONS>

Take each suggestion into account where it applies, making sure the result is accurate, fluent, faithful in style, and consistent in terminology.
Output only the improved translation of the marked part and nothing else."#,
);

/// Locale instruction appended to reflection prompts when a country is set.
pub const COUNTRY_CLAUSE: PromptTemplate = PromptTemplate::new(
    " The final style and tone of the translation should match the style of {target_language} colloquially spoken in {country}.",
);
