//! Theme and Colors
//!
//! Folio's gold-on-dark palette. Gold carries headings and accents, muted
//! grays carry body text, and the two toast treatments reuse the gold/red
//! pair.

use ratatui::style::Color;

// ============================================================================
// Gold Accents
// ============================================================================

/// Primary gold - headings, nav accents, the typewriter cursor
pub const GOLD: Color = Color::Rgb(212, 175, 55);

/// Lighter gold - highlights, shooting stars
pub const GOLD_LIGHT: Color = Color::Rgb(244, 196, 48);

/// Deep gold shadow - separators
pub const GOLD_DIM: Color = Color::Rgb(140, 112, 40);

// ============================================================================
// Text
// ============================================================================

/// Body text
pub const BODY: Color = Color::Rgb(210, 210, 205);

/// Secondary/dim text
pub const DIM_GRAY: Color = Color::Rgb(110, 110, 110);

/// Unrevealed content placeholder
pub const HIDDEN: Color = Color::Rgb(60, 60, 60);

// ============================================================================
// Toast Treatments
// ============================================================================

/// Success toast background
pub const SUCCESS_BG: Color = Color::Rgb(212, 175, 55);

/// Success toast text
pub const SUCCESS_FG: Color = Color::Rgb(20, 18, 10);

/// Error toast background
pub const ERROR_BG: Color = Color::Rgb(192, 57, 43);

/// Error toast text
pub const ERROR_FG: Color = Color::Rgb(255, 240, 240);

// ============================================================================
// Decoration
// ============================================================================

/// Bright twinkle phase
pub const STAR_BRIGHT: Color = Color::Rgb(230, 225, 200);

/// Dim twinkle phase
pub const STAR_DIM: Color = Color::Rgb(90, 90, 100);

/// Speech bubble text
pub const BUBBLE: Color = Color::Rgb(200, 220, 255);

/// The cat
pub const CAT: Color = Color::Rgb(255, 182, 193);
