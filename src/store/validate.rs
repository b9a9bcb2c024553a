use crate::store::NewContactMessage;

/// Why a candidate failed validation, scoped to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// One validation rule: the field it covers, the predicate that must hold,
/// and the message reported when it does not.
struct Rule {
    field: &'static str,
    check: fn(&NewContactMessage) -> bool,
    message: &'static str,
}

// Length rules are guarded on non-emptiness: an empty field fails only its
// "required" rule.
const RULES: &[Rule] = &[
    Rule {
        field: "name",
        check: |m| !m.name.is_empty(),
        message: "Name is required",
    },
    Rule {
        field: "name",
        check: |m| m.name.is_empty() || length_in(&m.name, 2, 100),
        message: "Name must be between 2 and 100 characters",
    },
    Rule {
        field: "email",
        check: |m| !m.email.is_empty(),
        message: "Email is required",
    },
    Rule {
        field: "email",
        check: |m| m.email.is_empty() || valid_email(&m.email),
        message: "Invalid email address",
    },
    Rule {
        field: "subject",
        check: |m| !m.subject.is_empty(),
        message: "Subject is required",
    },
    Rule {
        field: "subject",
        check: |m| m.subject.is_empty() || length_in(&m.subject, 5, 200),
        message: "Subject must be between 5 and 200 characters",
    },
    Rule {
        field: "message",
        check: |m| !m.message.is_empty(),
        message: "Message is required",
    },
    Rule {
        field: "message",
        check: |m| m.message.is_empty() || length_in(&m.message, 10, 1000),
        message: "Message must be between 10 and 1000 characters",
    },
];

/// Check a candidate against every rule. An empty result means it may be
/// stored. Pure; never touches the store.
pub fn validate(candidate: &NewContactMessage) -> Vec<FieldError> {
    RULES
        .iter()
        .filter(|rule| !(rule.check)(candidate))
        .map(|rule| FieldError { field: rule.field, message: rule.message })
        .collect()
}

fn length_in(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    (min..=max).contains(&len)
}

/// Loose syntactic check: exactly one `@`, a non-empty local part, and a
/// dotted domain. Not an RFC 5322 parser.
fn valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.contains(char::is_whitespace)
}
