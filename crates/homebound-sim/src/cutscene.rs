//! Intro and ending scene sequences.
//!
//! Non-final scenes auto-advance after their duration; the final scene of
//! each sequence holds indefinitely awaiting input. A skip input advances
//! immediately.

use homebound_core::state::SceneView;

/// One scene of narration.
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    /// Auto-advance delay in seconds. Ignored on the final scene.
    pub duration: f32,
    pub text: &'static str,
    pub subtext: &'static str,
}

pub const INTRO: &[Scene] = &[
    Scene {
        duration: 2.2,
        text: "CRASH!!!",
        subtext: "The car spins out…",
    },
    Scene {
        duration: 2.6,
        text: "You crawl out.",
        subtext: "Everything is quiet. Too quiet.",
    },
    Scene {
        duration: 3.0,
        text: "You: \u{201c}Sis, I\u{2019}m coming home… on foot.\u{201d}",
        subtext: "Sister: \u{201c}Stay inside. Lock the doors.\u{201d}",
    },
    Scene {
        duration: 2.2,
        text: "Zombies are everywhere.",
        subtext: "Run. Survive. Find help.",
    },
    Scene {
        duration: 0.0,
        text: "Press to start",
        subtext: "Jump, shoot, reload — and keep moving.",
    },
];

pub const ENDING: &[Scene] = &[
    Scene {
        duration: 2.2,
        text: "HOME",
        subtext: "You made it.",
    },
    Scene {
        duration: 2.8,
        text: "Sister runs to the door.",
        subtext: "\u{201c}I thought I lost you…\u{201d}",
    },
    Scene {
        duration: 2.4,
        text: "You: \u{201c}I\u{2019}m not alone.\u{201d}",
        subtext: "The dog wags its tail.",
    },
    Scene {
        duration: 0.0,
        text: "THE END",
        subtext: "Play again?",
    },
];

/// Playback cursor over a scene sequence.
#[derive(Debug, Clone)]
pub struct ScenePlayer {
    scenes: &'static [Scene],
    index: usize,
    elapsed: f32,
}

impl ScenePlayer {
    pub fn intro() -> Self {
        Self::over(INTRO)
    }

    pub fn ending() -> Self {
        Self::over(ENDING)
    }

    fn over(scenes: &'static [Scene]) -> Self {
        Self {
            scenes,
            index: 0,
            elapsed: 0.0,
        }
    }

    pub fn at_last(&self) -> bool {
        self.index + 1 >= self.scenes.len()
    }

    /// Advance the local clock, auto-advancing past expired scenes.
    /// The final scene never auto-advances.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        if !self.at_last() && self.elapsed > self.scenes[self.index].duration {
            self.index += 1;
            self.elapsed = 0.0;
        }
    }

    /// Skip to the next scene immediately. Returns true when already on
    /// the final scene (the caller decides what the hold releases into).
    pub fn skip(&mut self) -> bool {
        if self.at_last() {
            return true;
        }
        self.index += 1;
        self.elapsed = 0.0;
        false
    }

    pub fn view(&self) -> SceneView {
        let scene = &self.scenes[self.index];
        SceneView {
            index: self.index,
            elapsed: self.elapsed,
            text: scene.text.to_string(),
            subtext: scene.subtext.to_string(),
            holding: self.at_last(),
        }
    }
}
