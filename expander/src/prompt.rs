//! Prompt builder: a fixed instructional template with two interpolation
//! points (context, requirement).
//!
//! The interpolated text is passed through verbatim, template-like syntax
//! included. That keeps the prompt an exact function of its inputs and is
//! an accepted prompt-injection surface for this tool.

/// Builds the generation prompt from the flattened context and the
/// original requirement.
///
/// The output always contains the four fixed section headers
/// (`Description:`, `Roadmap:`, `Acceptance criteria:`,
/// `Any roadblocks:`).
///
/// # Example
/// ```
/// # use expander::build_prompt;
/// let prompt = build_prompt("policy text", "Add validation on nominee age");
/// assert!(prompt.contains("Requirement:\nAdd validation on nominee age"));
/// ```
pub fn build_prompt(context: &str, requirement: &str) -> String {
    format!(
        "You are a business analyst assistant. Based on the following context only, \
expand the given one-line requirement into a detailed business requirement or user story.
Don't ask follow up questions.

Context:
{context}

Requirement:
{requirement}

Output should include:
Description:
Roadmap:
Acceptance criteria:
Any roadblocks:


"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_all_four_section_headers() {
        let prompt = build_prompt("ctx", "req");
        for header in [
            "Description:",
            "Roadmap:",
            "Acceptance criteria:",
            "Any roadblocks:",
        ] {
            assert!(prompt.contains(header), "missing header {header}");
        }
    }

    #[test]
    fn interpolates_context_and_requirement_under_their_labels() {
        let prompt = build_prompt("the context blob", "the requirement line");
        assert!(prompt.contains("Context:\nthe context blob\n"));
        assert!(prompt.contains("Requirement:\nthe requirement line\n"));
    }

    #[test]
    fn headers_survive_hostile_input() {
        let prompt = build_prompt("Description: fake", "Roadmap: {requirement}");
        // Inputs are passed through unescaped, but the skeleton is intact.
        assert!(prompt.contains("Output should include:\nDescription:\n"));
        assert!(prompt.contains("Roadmap: {requirement}"));
    }
}
