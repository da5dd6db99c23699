//! The fixed note set created on first run.

/// A note identifier together with the content written when its file is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedNote {
    pub id: String,
    pub content: String,
}

impl SeedNote {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// Number of notes in the built-in set (`note-01` ..= `note-10`).
pub const DEFAULT_NOTE_COUNT: usize = 10;

const DESIGN_PRINCIPLES: &str = r#"# Design Principles

A checklist of high-level concepts for building successful, useful apps.

## Core Principles

- [ ] **User need first** — Solve a real problem, not a theoretical one
- [ ] **Simplest solution** — Choose the simplest architecture that works
- [ ] **Fast feedback** — Get something in front of users early
- [ ] **Composable** — Build small, focused pieces that work together
- [ ] **Fail loudly** — Errors should be visible and informative

## Design Checklist

- [ ] Is the core user journey obvious?
- [ ] Does every feature serve the primary use case?
- [ ] Can the UI be understood without documentation?
- [ ] Are error states handled gracefully?
- [ ] Is performance acceptable on a slow connection?

## Architecture Heuristics

- Prefer boring technology
- Optimise for deletability
- Data outlives code — design your schema carefully
- Name things for what they do, not what they are
"#;

const ASK_FOR_HELP: &str = r#"# Ask for Help?

Decision tree for when to seek direction during development.

```mermaid
flowchart TD
    A[Stuck on a problem] --> B{Spent 30+ minutes?}
    B -- No --> C[Keep trying]
    B -- Yes --> D{Understand the problem?}
    D -- No --> E[Write down<br/>what is unclear]
    D -- Yes --> F{Tried 3+ approaches?}
    E --> G[Ask for help]
    F -- No --> H[Try another approach]
    F -- Yes --> G
    G --> I[Share: what you tried,<br/>what happened,<br/>what you expected]
```

## Before Asking

1. Write down the problem in plain English
2. State what you expected to happen
3. State what actually happened
4. List what you have tried
5. Find the smallest reproducible case
"#;

/// Formats the identifier for the `n`th note (1-based): `note-01`, `note-02`, ...
pub fn note_id(n: usize) -> String {
    format!("note-{n:02}")
}

/// The built-in seed set, in listing order.
pub fn default_seeds() -> Vec<SeedNote> {
    (1..=DEFAULT_NOTE_COUNT)
        .map(|n| {
            let content = match n {
                1 => DESIGN_PRINCIPLES.to_string(),
                2 => ASK_FOR_HELP.to_string(),
                _ => format!("# Note {n}\n\n"),
            };
            SeedNote::new(note_id(n), content)
        })
        .collect()
}
