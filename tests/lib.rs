//! Workspace-level integration tests live in the sibling test targets.
