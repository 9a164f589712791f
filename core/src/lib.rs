//! Folio Core - Headless Interaction Components
//!
//! This crate provides the reusable interaction logic for the Folio terminal
//! portfolio, completely independent of any rendering framework. It can drive
//! the ratatui display client, a different frontend, or run headless in tests.
//!
//! # Design Philosophy
//!
//! Every component is an explicit state machine owned by the caller. Timing
//! never comes from hidden wall-clock reads; the host advances each component
//! with `update(delta)` once per frame, so behavior is a pure function of
//! accumulated elapsed time and tests can drive time deterministically.
//!
//! # Key Types
//!
//! - [`Debouncer`]: trailing-edge call-rate limiter
//! - [`Notifier`]: single-slot transient notification lifecycle
//! - [`Typewriter`]: elapsed-time-driven progressive text reveal
//! - [`RevealTracker`]: one-way viewport-intersection reveal marking
//! - [`ScrollAnimator`]: fixed-duration eased scroll animation
//! - [`ContactForm`]: field storage, validation, simulated submission
//! - [`FolioConfig`]: TOML-backed tunables

pub mod config;
pub mod debounce;
pub mod form;
pub mod notify;
pub mod reveal;
pub mod scroll;
pub mod typewriter;
pub mod validate;

pub use config::FolioConfig;
pub use debounce::Debouncer;
pub use form::{ContactForm, FormField, RejectReason, SubmitOutcome};
pub use notify::{Notifier, Severity, ToastPhase};
pub use reveal::{RevealId, RevealTracker};
pub use scroll::{ease_in_out_quad, ScrollAnimator};
pub use typewriter::{Typewriter, TypewriterPhase};
pub use validate::is_valid_email;
