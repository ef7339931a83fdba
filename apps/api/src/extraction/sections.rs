//! Line-oriented section scanning: education lines, work-experience blocks
//! and job requirement sections.

const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "degree", "university", "college", "institute",
];

const WORK_SECTION_KEYWORDS: &[&str] = &[
    "experience",
    "employment",
    "work history",
    "professional experience",
];

/// Headers that close a work-experience section.
const WORK_SECTION_TERMINATORS: &[&str] = &["education", "skills", "certifications"];

const REQUIREMENT_KEYWORDS: &[&str] = &[
    "requirements",
    "qualifications",
    "must have",
    "required",
    "responsibilities",
];

/// Line prefixes that close a requirement section.
const REQUIREMENT_TERMINATOR_PREFIXES: &[&str] = &["about", "company", "benefits", "salary"];

/// Every trimmed line mentioning an education keyword, document order.
pub fn extract_education(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| {
            let lower = line.to_lowercase();
            EDUCATION_KEYWORDS.iter().any(|k| lower.contains(k))
        })
        .map(String::from)
        .collect()
}

/// Work-experience blocks, each the space-joined lines of one section.
///
/// A line mentioning a work keyword opens a section; an education, skills or
/// certifications line closes it. Blank lines are skipped.
pub fn extract_work_experience(text: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut in_work_section = false;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let lower = line.to_lowercase();

        if WORK_SECTION_KEYWORDS.iter().any(|k| lower.contains(k)) {
            in_work_section = true;
            continue;
        }

        if WORK_SECTION_TERMINATORS.iter().any(|k| lower.contains(k)) {
            in_work_section = false;
            flush_block(&mut sections, &mut current);
            continue;
        }

        if in_work_section {
            current.push(line);
        }
    }
    flush_block(&mut sections, &mut current);

    sections
}

/// Raw lines of every requirement section in a job description, header
/// lines included.
pub fn extract_requirements(text: &str) -> Vec<String> {
    let mut requirements = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut in_requirements = false;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let lower = line.to_lowercase();

        if REQUIREMENT_KEYWORDS.iter().any(|k| lower.contains(k)) {
            // A new header closes the previous section rather than discarding it.
            requirements.extend(current.drain(..).map(String::from));
            in_requirements = true;
            current.push(line);
            continue;
        }

        if REQUIREMENT_TERMINATOR_PREFIXES
            .iter()
            .any(|p| lower.starts_with(p))
        {
            if in_requirements {
                requirements.extend(current.drain(..).map(String::from));
            }
            current.clear();
            in_requirements = false;
            continue;
        }

        if in_requirements {
            current.push(line);
        }
    }
    if in_requirements {
        requirements.extend(current.into_iter().map(String::from));
    }

    requirements
}

fn flush_block(sections: &mut Vec<String>, current: &mut Vec<&str>) {
    if !current.is_empty() {
        sections.push(current.join(" "));
        current.clear();
    }
}
