//! Workspace-level test package for chanpick; the scenarios live under
//! `tests/`.
