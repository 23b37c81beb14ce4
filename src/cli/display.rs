// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the refcat CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Respects `NO_COLOR`
//! and falls back to plain text when stdout is not a TTY, so piping results
//! into another tool never leaks escape codes.
//!
//! # Theme detection order
//!
//! 1. `REFCAT_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use refcat::{EntryType, MatchedField, Severity};
use std::collections::BTreeSet;
use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.trim().to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    Some(if bg >= 7 && bg != 8 {
        Theme::Light
    } else {
        Theme::Dark
    })
}

fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("REFCAT_THEME")
        .ok()
        .as_deref()
        .and_then(parse_theme)
    {
        return theme;
    }
    std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .and_then(theme_from_colorfgbg)
        .unwrap_or(Theme::Dark)
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI codes
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut plain text to `max` chars, ending in "..." when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Greedy word wrap of plain text to `width` columns.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(s: &str) -> String {
    themed(GRAY, &[], s)
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let content = format!(" {}", content);
    let pad = BOX_WIDTH.saturating_sub(visible_len(&content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// Print wrapped plain text as box rows with a leading indent.
pub fn rows_wrapped(text: &str, indent: usize) {
    let prefix = " ".repeat(indent);
    for line in wrap(text, BOX_WIDTH - 2 - indent) {
        row(&format!("{}{}", prefix, line));
    }
}

fn labeled_rule(left: &str, right: &str, label: &str) {
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border(left),
        label_part,
        border(&format!("{}{}", "─".repeat(remaining), right))
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    labeled_rule("┌", "┐", label);
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    labeled_rule("├", "┤", label);
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded score value, mirroring the weight tiers: an exact name hit
/// alone reaches 100, a name substring 50, a description 20.
pub fn score_value(score: u32) -> String {
    let text = format!("{:>5}", score);
    let color: fn() -> String = if score >= 100 {
        BRIGHT_GREEN
    } else if score >= 50 {
        GREEN
    } else if score >= 20 {
        YELLOW
    } else {
        GRAY
    };
    themed(color, &[], &text)
}

pub fn severity_badge(severity: Severity) -> String {
    let label = format!("[{}]", severity.as_str());
    match severity {
        Severity::Error => themed(RED, &[BOLD], &label),
        Severity::Warning => themed(YELLOW, &[], &label),
    }
}

pub fn type_badge(entry_type: EntryType) -> String {
    let color: fn() -> String = match entry_type {
        EntryType::System => BLUE,
        EntryType::ThirdParty => MAGENTA,
        EntryType::Vendor => CYAN,
        EntryType::CloudProvider => YELLOW,
        EntryType::Platform => GREEN,
    };
    themed(color, &[], entry_type.as_str())
}

/// Matched fields as "name, description", or a dim dash when none.
pub fn matched_label(fields: &BTreeSet<MatchedField>) -> String {
    if fields.is_empty() {
        return themed(GRAY, &[DIM], "-");
    }
    let names: Vec<&str> = fields.iter().map(|f| f.as_str()).collect();
    themed(BRIGHT_CYAN, &[], &names.join(", "))
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
