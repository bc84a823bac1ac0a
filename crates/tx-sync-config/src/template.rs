//! Placeholder rendering for configured text templates
//!
//! Templates are plain text with `{name}` placeholders. `{{` and `}}`
//! produce literal braces, so XML or build-file snippets can be written as-is.

use thiserror::Error;

/// Errors that can occur while rendering a template
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown placeholder `{{{name}}}`")]
    UnknownPlaceholder { name: String },

    #[error("unclosed `{{` at byte {offset}")]
    Unclosed { offset: usize },

    #[error("unmatched `}}` at byte {offset}")]
    UnmatchedClose { offset: usize },
}

/// Substitute `vars` into `template`
///
/// Every placeholder must name one of `vars`; anything else is an error
/// rather than being left in the output.
pub fn render(template: &str, vars: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        match c {
            '{' => {
                if chars.next_if(|&(_, next)| next == '{').is_some() {
                    out.push('{');
                    continue;
                }

                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => name.push(c),
                        None => return Err(TemplateError::Unclosed { offset }),
                    }
                }

                let name = name.trim();
                let value = vars
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| *value)
                    .ok_or_else(|| TemplateError::UnknownPlaceholder {
                        name: name.to_string(),
                    })?;
                out.push_str(value);
            }
            '}' => {
                if chars.next_if(|&(_, next)| next == '}').is_none() {
                    return Err(TemplateError::UnmatchedClose { offset });
                }
                out.push('}');
            }
            c => out.push(c),
        }
    }

    Ok(out)
}

/// Check that `template` only uses the placeholders in `allowed`
pub fn validate(template: &str, allowed: &[&str]) -> Result<(), TemplateError> {
    let vars: Vec<(&str, &str)> = allowed.iter().map(|name| (*name, "")).collect();
    render(template, &vars).map(|_| ())
}
