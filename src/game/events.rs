//! Signals handed to the rendering and audio collaborators
//!
//! The core never draws or plays anything. It reports which figure part to draw,
//! which symbolic sound fits a guess, and a summary once the round is over.

use crate::core::{GuessOutcome, GuessKind, SessionStatus};
use std::fmt;
use std::time::Duration;

/// How the current round was started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Random word, can be restarted
    Practice,
    /// Word of the day, once per calendar day
    Daily,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Practice => f.write_str("practice"),
            Self::Daily => f.write_str("daily"),
        }
    }
}

/// Symbolic sound names understood by the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    Key,
    Correct,
    Wrong,
    Win,
    Lose,
    Start,
}

impl SoundEvent {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Correct => "correct",
            Self::Wrong => "wrong",
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Start => "start",
        }
    }

    /// Sounds for one guess, in play order
    #[must_use]
    pub fn for_outcome(outcome: &GuessOutcome) -> Vec<Self> {
        let mut sounds = Vec::with_capacity(3);
        match outcome.kind {
            GuessKind::Ignored => return sounds,
            GuessKind::Repeated => sounds.push(Self::Key),
            GuessKind::Correct => sounds.extend([Self::Key, Self::Correct]),
            GuessKind::Wrong => sounds.extend([Self::Key, Self::Wrong]),
        }
        if outcome.changed_state() {
            match outcome.status {
                SessionStatus::Won => sounds.push(Self::Win),
                SessionStatus::Lost => sounds.push(Self::Lose),
                SessionStatus::InProgress => {}
            }
        }
        sounds
    }
}

impl fmt::Display for SoundEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stick-figure parts in drawing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigurePart {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl FigurePart {
    pub const ALL: [Self; 6] = [
        Self::Head,
        Self::Body,
        Self::LeftArm,
        Self::RightArm,
        Self::LeftLeg,
        Self::RightLeg,
    ];

    /// Part for a 1-based index as reported by a wrong guess
    ///
    /// Indices beyond six (custom attempt budgets) have no part of their own.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(usize::from(i)).copied())
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Body => "body",
            Self::LeftArm => "left arm",
            Self::RightArm => "right arm",
            Self::LeftLeg => "left leg",
            Self::RightLeg => "right leg",
        }
    }
}

/// End-of-round information for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub word: String,
    pub mode: GameMode,
    pub category: Option<String>,
    pub status: SessionStatus,
    pub elapsed: Duration,
    pub attempts_used: u8,
    pub max_attempts: u8,
}

impl RoundSummary {
    #[must_use]
    pub fn won(&self) -> bool {
        self.status == SessionStatus::Won
    }
}

/// Everything the UI needs after one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub outcome: GuessOutcome,
    pub sounds: Vec<SoundEvent>,
    /// Revealed word after the guess, blanks as placeholders
    pub display: String,
    pub remaining_attempts: u8,
    /// Present only on the guess that ended the round
    pub summary: Option<RoundSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(kind: GuessKind, status: SessionStatus) -> GuessOutcome {
        GuessOutcome {
            letter: 'a',
            kind,
            status,
            figure_part: None,
        }
    }

    #[test]
    fn sounds_for_plain_guesses() {
        assert_eq!(
            SoundEvent::for_outcome(&outcome(GuessKind::Correct, SessionStatus::InProgress)),
            vec![SoundEvent::Key, SoundEvent::Correct]
        );
        assert_eq!(
            SoundEvent::for_outcome(&outcome(GuessKind::Wrong, SessionStatus::InProgress)),
            vec![SoundEvent::Key, SoundEvent::Wrong]
        );
    }

    #[test]
    fn sounds_for_final_guesses() {
        assert_eq!(
            SoundEvent::for_outcome(&outcome(GuessKind::Correct, SessionStatus::Won)),
            vec![SoundEvent::Key, SoundEvent::Correct, SoundEvent::Win]
        );
        assert_eq!(
            SoundEvent::for_outcome(&outcome(GuessKind::Wrong, SessionStatus::Lost)),
            vec![SoundEvent::Key, SoundEvent::Wrong, SoundEvent::Lose]
        );
    }

    #[test]
    fn no_end_sound_after_the_end() {
        assert!(SoundEvent::for_outcome(&outcome(GuessKind::Ignored, SessionStatus::Won)).is_empty());
        assert_eq!(
            SoundEvent::for_outcome(&outcome(GuessKind::Repeated, SessionStatus::InProgress)),
            vec![SoundEvent::Key]
        );
    }

    #[test]
    fn figure_parts_follow_drawing_order() {
        assert_eq!(FigurePart::from_index(0), None);
        assert_eq!(FigurePart::from_index(1), Some(FigurePart::Head));
        assert_eq!(FigurePart::from_index(6), Some(FigurePart::RightLeg));
        assert_eq!(FigurePart::from_index(7), None);
    }

    #[test]
    fn sound_names() {
        let names: Vec<_> = [
            SoundEvent::Key,
            SoundEvent::Correct,
            SoundEvent::Wrong,
            SoundEvent::Win,
            SoundEvent::Lose,
            SoundEvent::Start,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(names, vec!["key", "correct", "wrong", "win", "lose", "start"]);
    }
}
