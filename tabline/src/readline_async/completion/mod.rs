// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tab completion. A [`Completer`] is handed the text before the cursor and produces a
//! [`CompletionResult`]. The [`CompletionResolver`] decides what that result does to the
//! line (see [`CompletionAction`]) and [`LayoutPlan`] turns the candidate list into the
//! multi column block that is printed below the prompt.

// Attach.
pub mod candidate;
pub mod completer;
pub mod layout;
pub mod resolver;

// Re-export.
pub use candidate::*;
pub use completer::*;
pub use layout::*;
pub use resolver::*;
