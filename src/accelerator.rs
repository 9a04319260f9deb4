//! Accelerator parsing and matching
//!
//! Syntax:
//! - "ctrl+x" - modifier + key
//! - "ctrl+shift+s" - several modifiers
//! - "ctrl+k ctrl+d" - chord sequence

use std::fmt;
use std::time::{Duration, Instant};

/// A keyboard accelerator (may be a sequence of chords)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accelerator {
    pub chords: Vec<Chord>,
}

/// Modifiers plus one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    pub modifiers: Modifiers,
    pub trigger: Trigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub cmd: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    /// True if any modifier that turns a key into a command is held
    pub fn is_command(&self) -> bool {
        self.cmd || self.ctrl || self.alt
    }
}

/// Key that completes a chord
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Character key, lowercased
    Char(String),
    /// Named key (Enter, ArrowUp, F5, ...)
    Named(String),
}

impl Accelerator {
    /// Parse an accelerator string like "ctrl+x" or "ctrl+k ctrl+d"
    pub fn parse(input: &str) -> Result<Self, String> {
        let chords = input
            .split_whitespace()
            .map(Chord::parse)
            .collect::<Result<Vec<_>, _>>()?;

        if chords.is_empty() {
            return Err("Empty accelerator".to_string());
        }
        Ok(Accelerator { chords })
    }

    pub fn single(modifiers: Modifiers, trigger: Trigger) -> Self {
        Accelerator {
            chords: vec![Chord { modifiers, trigger }],
        }
    }
}

impl Chord {
    /// Parse a single chord like "ctrl+x" or "shift+alt+s" or just "f5"
    pub fn parse(input: &str) -> Result<Self, String> {
        let parts: Vec<&str> = input.split('+').collect();
        let Some((trigger_str, mod_parts)) = parts.split_last() else {
            return Err("Empty chord".to_string());
        };
        if trigger_str.is_empty() {
            return Err(format!("Missing key in chord: {}", input));
        }

        let mut modifiers = Modifiers::default();
        for mod_str in mod_parts {
            match mod_str.to_lowercase().as_str() {
                "cmd" | "super" => modifiers.cmd = true,
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" | "option" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                _ => return Err(format!("Unknown modifier: {}", mod_str)),
            }
        }

        let lower = trigger_str.to_lowercase();
        let trigger = if lower.chars().count() == 1 {
            Trigger::Char(lower)
        } else {
            let named = match lower.as_str() {
                "enter" | "return" => "Enter".to_string(),
                "tab" => "Tab".to_string(),
                "backspace" => "Backspace".to_string(),
                "delete" | "del" => "Delete".to_string(),
                "escape" | "esc" => "Escape".to_string(),
                "space" => "Space".to_string(),
                "up" | "arrowup" => "ArrowUp".to_string(),
                "down" | "arrowdown" => "ArrowDown".to_string(),
                "left" | "arrowleft" => "ArrowLeft".to_string(),
                "right" | "arrowright" => "ArrowRight".to_string(),
                "home" => "Home".to_string(),
                "end" => "End".to_string(),
                "pageup" => "PageUp".to_string(),
                "pagedown" => "PageDown".to_string(),
                f if f.starts_with('f') && f[1..].parse::<u8>().is_ok_and(|n| (1..=24).contains(&n)) => {
                    f.to_uppercase()
                }
                _ => return Err(format!("Unknown key: {}", trigger_str)),
            };
            Trigger::Named(named)
        };

        Ok(Chord { modifiers, trigger })
    }

    pub fn matches(&self, modifiers: &Modifiers, trigger: &Trigger) -> bool {
        &self.modifiers == modifiers && &self.trigger == trigger
    }
}

impl fmt::Display for Chord {
    /// Menu label form, e.g. "Ctrl+Shift+S"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.cmd {
            f.write_str("Cmd+")?;
        }
        if self.modifiers.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.modifiers.alt {
            f.write_str("Alt+")?;
        }
        if self.modifiers.shift {
            f.write_str("Shift+")?;
        }
        match &self.trigger {
            Trigger::Char(c) => f.write_str(&c.to_uppercase()),
            Trigger::Named(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chord) in self.chords.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", chord)?;
        }
        Ok(())
    }
}

/// Tracks a partially typed chord sequence
pub struct AcceleratorMatcher {
    current_sequence: Vec<Chord>,
    last_chord_time: Option<Instant>,
    sequence_timeout: Duration,
}

impl AcceleratorMatcher {
    pub fn new() -> Self {
        Self {
            current_sequence: Vec::new(),
            last_chord_time: None,
            sequence_timeout: Duration::from_millis(1000),
        }
    }

    /// Feed one chord; returns the accelerator it completes, if any
    pub fn feed<'a>(
        &mut self,
        modifiers: &Modifiers,
        trigger: &Trigger,
        candidates: impl Iterator<Item = &'a Accelerator> + Clone,
    ) -> Option<&'a Accelerator> {
        let now = Instant::now();
        if let Some(last_time) = self.last_chord_time {
            if now.duration_since(last_time) > self.sequence_timeout {
                self.current_sequence.clear();
            }
        }

        self.current_sequence.push(Chord {
            modifiers: *modifiers,
            trigger: trigger.clone(),
        });
        self.last_chord_time = Some(now);

        if let Some(matched) = candidates
            .clone()
            .find(|acc| acc.chords == self.current_sequence)
        {
            self.current_sequence.clear();
            return Some(matched);
        }

        let could_match = candidates.clone().any(|acc| {
            acc.chords.len() > self.current_sequence.len()
                && acc.chords[..self.current_sequence.len()] == self.current_sequence[..]
        });
        if !could_match {
            self.current_sequence.clear();
            // The chord that broke a sequence may start a new one
            let chord = Chord {
                modifiers: *modifiers,
                trigger: trigger.clone(),
            };
            if let Some(matched) = candidates.clone().find(|acc| acc.chords == [chord.clone()]) {
                return Some(matched);
            }
            if candidates.clone().any(|acc| acc.chords.first() == Some(&chord)) {
                self.current_sequence.push(chord);
            }
        }

        None
    }

    /// Whether a multi-chord sequence is in progress
    pub fn is_pending(&self) -> bool {
        !self.current_sequence.is_empty()
    }

    pub fn reset(&mut self) {
        self.current_sequence.clear();
        self.last_chord_time = None;
    }
}

impl Default for AcceleratorMatcher {
    fn default() -> Self {
        Self::new()
    }
}
