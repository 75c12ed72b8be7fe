//! Workspace-level integration tests for `times`; see `tests/`.
