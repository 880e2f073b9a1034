//! Color Constants for the CoreQuarry Theme
//!
//! The palette follows the brand scheme: amber primary on near-white
//! backgrounds with near-black text.

use eframe::egui::Color32;

/// Brand primary - Amber
pub const PRIMARY: Color32 = Color32::from_rgb(0xFF, 0xBB, 0x00);

/// Main background - Near white
pub const BACKGROUND: Color32 = Color32::from_rgb(0xEE, 0xEE, 0xEE);

/// Primary text - Near black
pub const TEXT: Color32 = Color32::from_rgb(0x17, 0x17, 0x17);

/// Secondary text (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);

/// Text on the primary button
pub const BUTTON_TEXT: Color32 = Color32::WHITE;

/// Input field background
pub const INPUT_BG: Color32 = Color32::from_rgb(0xF7, 0xF7, 0xF7);

/// Borders and separators
pub const BORDER: Color32 = Color32::from_rgb(0xD0, 0xD0, 0xD0);

/// Top bar background - Near black
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x17, 0x17, 0x17);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xEE, 0xEE, 0xEE);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xD3, 0x2F, 0x2F);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x2E, 0x7D, 0x32);
