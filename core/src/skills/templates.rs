//! Fixed content written into a new skill directory.

pub const EXAMPLE_REFERENCE: &str = r#"# Reference Documentation

Replace with actual reference content or delete if not needed.

Reference docs are ideal for:
- API documentation
- Database schemas
- Detailed workflow guides
- Content too lengthy for SKILL.md
"#;

pub const EXAMPLE_ASSET: &str = r#"Example asset placeholder.
Replace with actual asset files (templates, images, fonts, etc.) or delete if not needed.
"#;

/// `my-data-analyzer` -> `My Data Analyzer`.
pub fn title_case_skill_name(skill_name: &str) -> String {
    skill_name
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = match titlecase(first) {
                Some(title) => title.to_string(),
                None => first.to_uppercase().collect(),
            };
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Characters whose titlecase form differs from their uppercase form.
fn titlecase(c: char) -> Option<&'static str> {
    let title = match c {
        'ß' => "Ss",
        'Ǆ' | 'ǅ' | 'ǆ' => "ǅ",
        'Ǉ' | 'ǈ' | 'ǉ' => "ǈ",
        'Ǌ' | 'ǋ' | 'ǌ' => "ǋ",
        'Ǳ' | 'ǲ' | 'ǳ' => "ǲ",
        'ﬀ' => "Ff",
        'ﬁ' => "Fi",
        'ﬂ' => "Fl",
        'ﬃ' => "Ffi",
        'ﬄ' => "Ffl",
        'ﬅ' | 'ﬆ' => "St",
        'և' => "Եւ",
        _ => return None,
    };
    Some(title)
}

pub fn render_manifest(skill_name: &str, skill_title: &str) -> String {
    format!(
        r#"---
name: {skill_name}
description: >-
  [TODO: What the skill does and when to use it. Include trigger phrases.]
# argument-hint: [args]
# disable-model-invocation: true
# user-invocable: false
# allowed-tools: Bash, Read, Write
# model: sonnet
# context: fork
# agent: Explore
---

# {skill_title}

[TODO: Core instructions for using this skill]

## Resources

- **scripts/**: Executable code — customize or delete `scripts/example.py`
- **references/**: Documentation loaded into context — customize or delete `references/example.md`
- **assets/**: Files used in output — customize or delete `assets/example.txt`

Delete any unneeded directories.
"#
    )
}

pub fn render_example_script(skill_name: &str) -> String {
    format!(
        r#"#!/usr/bin/env python3
"""
Example helper script for {skill_name}
Replace with actual implementation or delete if not needed.
"""

def main():
    print("Example script for {skill_name}")

if __name__ == "__main__":
    main()
"#
    )
}
