//! Scripted editing sessions: a timeline of pen positions and input actions
//! replayed against an [`Editor`].

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::{
    Editor, EditorError, EditorEvent, EventRecord, FrameInterval, InputAction, SubjectState,
};
use crate::schema::{AnimationData, ConfigError, EditorConfig, PlaybackConfig, Point3};

/// Complete session description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub config: EditorConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
    /// Starting animation in interchange shape.
    pub animation: AnimationData,
    /// Timeline, replayed in order.
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

/// One scheduler tick plus the inputs that arrive just before it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptStep {
    /// Absolute tick time in milliseconds.
    pub time_ms: u64,
    /// New pen position, if the pen moved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pen: Option<Point3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_interval_ms: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<InputAction>,
}

/// Result of replaying a session.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub animation: AnimationData,
    pub current_frame: usize,
    pub events: Vec<EventRecord>,
}

/// Session loading and replay errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to read session: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse session: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Step {step} failed: {source}")]
    Step {
        step: usize,
        #[source]
        source: EditorError,
    },
    #[error(transparent)]
    Editor(#[from] EditorError),
}

impl Session {
    /// Read and validate a session file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SessionError> {
        let text = fs::read_to_string(path)?;
        let session: Session = serde_json::from_str(&text)?;
        session.config.validate()?;
        Ok(session)
    }

    /// Replay every step against a fresh editor.
    ///
    /// Per step: subject overrides, then actions in order, then one tick.
    pub fn run(&self) -> Result<SessionOutcome, SessionError> {
        let subject = SubjectState::from_config(&self.playback);
        let mut editor = Editor::new(self.animation.clone(), subject, self.config.clone())?;

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        editor.subscribe(move |event: &EditorEvent<'_>| sink.borrow_mut().push(event.to_record()));

        for (i, step) in self.steps.iter().enumerate() {
            apply_step(&mut editor, step).map_err(|source| SessionError::Step { step: i, source })?;
        }

        let current_frame = editor.current_frame_index();
        let animation = editor.into_animation();
        let events = events.take();
        log::info!(
            "session replayed: {} steps, {} events, {} frames",
            self.steps.len(),
            events.len(),
            animation.len()
        );

        Ok(SessionOutcome {
            animation,
            current_frame,
            events,
        })
    }

    /// A short session: one stroke under a held right gesture, then autoplay.
    pub fn example() -> Self {
        let mut steps = vec![ScriptStep {
            time_ms: 0,
            pen: Some(Point3::new(0.0, 0.0, 0.0)),
            actions: vec![InputAction::RightOn, InputAction::PrimaryDown],
            ..Default::default()
        }];
        for i in 1..=4u64 {
            steps.push(ScriptStep {
                time_ms: i * 16,
                pen: Some(Point3::new(0.01 * i as f64, 0.005 * i as f64, 0.0)),
                ..Default::default()
            });
        }
        steps.push(ScriptStep {
            time_ms: 80,
            pen: Some(Point3::new(0.05, 0.02, 0.0)),
            actions: vec![InputAction::PrimaryUp, InputAction::RightOff],
            ..Default::default()
        });
        steps.push(ScriptStep {
            time_ms: 100,
            playing: Some(true),
            ..Default::default()
        });
        steps.push(ScriptStep {
            time_ms: 200,
            ..Default::default()
        });

        Self {
            config: EditorConfig::default(),
            playback: PlaybackConfig::default(),
            animation: AnimationData::with_empty_frames(3),
            steps,
        }
    }
}

fn apply_step(editor: &mut Editor, step: &ScriptStep) -> Result<(), EditorError> {
    let subject = editor.subject_mut();
    if let Some(pen) = step.pen {
        subject.pen = pen;
    }
    if let Some(playing) = step.playing {
        subject.playing = playing;
    }
    if let Some(ms) = step.frame_interval_ms {
        subject.interval = FrameInterval::from_millis(ms);
    }

    for &action in &step.actions {
        editor.handle_input(action)?;
    }
    editor.tick(Duration::from_millis(step.time_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_example_session_runs() {
        let outcome = Session::example().run().unwrap();

        // Held right gesture advanced to frame 1, the stroke landed there,
        // and auto-next moved on to frame 2; playback then wrapped to 0.
        assert_eq!(outcome.animation.len(), 3);
        assert!(outcome.animation[0].is_empty());
        assert_eq!(outcome.animation[1].len(), 1);
        assert_eq!(outcome.animation[1].strokes()[0].len(), 6);
        assert!(outcome.animation[2].is_empty());
        assert_eq!(outcome.current_frame, 0);
        assert!(!outcome.events.is_empty());
    }

    #[test]
    fn test_load_roundtrip() {
        let session = Session::example();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string_pretty(&session).unwrap().as_bytes())
            .unwrap();

        let loaded = Session::load(file.path()).unwrap();
        assert_eq!(loaded.animation, session.animation);
        assert_eq!(loaded.steps.len(), session.steps.len());
        assert_eq!(loaded.steps[0].actions, session.steps[0].actions);
    }

    #[test]
    fn test_load_minimal_session() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"animation": [[], []], "steps": [{{"time_ms": 0, "actions": ["next_frame"]}}]}}"#
        )
        .unwrap();

        let session = Session::load(file.path()).unwrap();
        let outcome = session.run().unwrap();
        assert_eq!(outcome.current_frame, 1);
        assert_eq!(
            outcome.events,
            vec![
                EventRecord::ExitFrame { frame: 0 },
                EventRecord::EnterFrame { frame: 1 },
            ]
        );
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"config": {{"distance_threshold": -1.0}}, "animation": [[]]}}"#
        )
        .unwrap();

        assert!(matches!(
            Session::load(file.path()),
            Err(SessionError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Session::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(SessionError::Io(_))));
    }
}
