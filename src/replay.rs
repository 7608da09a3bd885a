//! Recorded sessions: CSV format, loader, writer and the driver that feeds
//! frames through the arbiter.
//!
//! One row per frame: `timestamp,handedness,x0,y0,z0,...,x20,y20,z20`.
//! A row with an empty handedness and no coordinates is a frame with no
//! hand. A leading header row is optional.

use crate::arbiter::{Action, ActionSink, ClickButton, GestureArbiter, Mode};
use crate::consts::LANDMARK_COUNT;
use crate::error::{KinResult, KineticError};
use crate::landmarks::{Handedness, Landmark, LandmarkSample};
use crate::overlay::Overlay;
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

const FIELDS_WITH_HAND: usize = 2 + LANDMARK_COUNT * 3;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFrame {
    pub timestamp: f64,
    pub hand: Option<LandmarkSample>,
}

pub fn load_recording<P: AsRef<Path>>(path: P) -> KinResult<Vec<RecordedFrame>> {
    let file = File::open(path)?;
    read_recording(file)
}

pub fn read_recording<R: Read>(reader: R) -> KinResult<Vec<RecordedFrame>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut frames = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(i + 1);

        if record.is_empty() || (record.len() == 1 && record[0].is_empty()) {
            continue;
        }

        let timestamp = match record[0].parse::<f64>() {
            Ok(t) => t,
            Err(_) if line == 1 => continue, // header
            Err(_) => {
                return Err(KineticError::Recording {
                    line,
                    reason: format!("invalid timestamp '{}'", &record[0]),
                })
            }
        };

        let handedness = record.get(1).unwrap_or("");
        let hand = match (handedness.is_empty(), record.len()) {
            (true, n) if n <= 2 => None,
            (false, FIELDS_WITH_HAND) => Some(parse_hand(&record, handedness, line)?),
            (_, n) => {
                return Err(KineticError::Recording {
                    line,
                    reason: format!(
                        "expected 2 or {} fields, found {} (handedness '{}')",
                        FIELDS_WITH_HAND, n, handedness
                    ),
                })
            }
        };

        frames.push(RecordedFrame { timestamp, hand });
    }

    info!("Loaded {} recorded frames", frames.len());
    Ok(frames)
}

fn parse_hand(
    record: &csv::StringRecord,
    handedness: &str,
    line: usize,
) -> KinResult<LandmarkSample> {
    let handedness: Handedness = handedness.parse().map_err(|_| KineticError::Recording {
        line,
        reason: format!("unknown handedness '{}'", handedness),
    })?;

    let mut coords = Vec::with_capacity(LANDMARK_COUNT * 3);
    for field in record.iter().skip(2) {
        let v = field.parse::<f32>().map_err(|_| KineticError::Recording {
            line,
            reason: format!("invalid coordinate '{}'", field),
        })?;
        coords.push(v);
    }

    let points: Vec<Landmark> = coords
        .chunks_exact(3)
        .map(|c| Landmark::new(c[0], c[1], c[2]))
        .collect();

    LandmarkSample::new(&points, handedness).map_err(|e| KineticError::Recording {
        line,
        reason: e.to_string(),
    })
}

pub fn save_recording<P: AsRef<Path>>(path: P, frames: &[RecordedFrame]) -> KinResult<()> {
    let file = File::create(path)?;
    write_recording(file, frames)
}

pub fn write_recording<W: Write>(writer: W, frames: &[RecordedFrame]) -> KinResult<()> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    let mut header = vec!["timestamp".to_string(), "handedness".to_string()];
    for i in 0..LANDMARK_COUNT {
        header.push(format!("x{}", i));
        header.push(format!("y{}", i));
        header.push(format!("z{}", i));
    }
    wtr.write_record(&header)?;

    for frame in frames {
        let mut row = vec![frame.timestamp.to_string()];
        match &frame.hand {
            None => row.push(String::new()),
            Some(hand) => {
                row.push(hand.handedness.to_string());
                for p in hand.points() {
                    row.push(format!("{:.6}", p.x));
                    row.push(format!("{:.6}", p.y));
                    row.push(format!("{:.6}", p.z));
                }
            }
        }
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionSummary {
    pub frames: usize,
    pub idle_frames: usize,
    pub active_frames: usize,
    pub scroll_frames: usize,
    pub moves: usize,
    pub left_clicks: usize,
    pub right_clicks: usize,
    pub scroll_ticks: usize,
    pub net_scroll: i64,
    /// Index of the frame that hit the fail-safe, if any.
    pub exit_frame: Option<usize>,
    pub average_fps: f64,
}

/// Feeds every frame through `arbiter` and `sink` in order. Stops at the
/// first fail-safe frame; later frames are not processed.
pub fn run_session<S: ActionSink + ?Sized>(
    arbiter: &mut GestureArbiter,
    frames: &[RecordedFrame],
    sink: &mut S,
) -> SessionSummary {
    let conditioner = arbiter.conditioner();
    let mut overlay = Overlay::new(conditioner.region(), conditioner.display());
    let mut summary = SessionSummary::default();

    for (i, frame) in frames.iter().enumerate() {
        let outcome = arbiter.process(frame.hand.as_ref(), frame.timestamp);
        let hud = overlay.update(&outcome, frame.hand.as_ref(), frame.timestamp);
        summary.frames += 1;

        match outcome.mode {
            Mode::Idle => summary.idle_frames += 1,
            Mode::Active => summary.active_frames += 1,
            Mode::Scroll => summary.scroll_frames += 1,
            Mode::Exit => {
                info!("Session ended by fail-safe at frame {}", i);
                summary.exit_frame = Some(i);
                break;
            }
        }

        if outcome.cursor.is_some() {
            summary.moves += 1;
        }
        match outcome.action {
            Some(Action::Click {
                button: ClickButton::Left,
            }) => summary.left_clicks += 1,
            Some(Action::Click {
                button: ClickButton::Right,
            }) => summary.right_clicks += 1,
            Some(Action::Scroll { delta }) => {
                summary.scroll_ticks += 1;
                summary.net_scroll += delta as i64;
            }
            None => {}
        }

        debug!(
            "frame {} mode={} fps={:.1} scroll={}",
            i, hud.mode, hud.fps, hud.scroll_delta
        );
        outcome.dispatch(sink);
    }

    summary.average_fps = overlay.fps();
    summary
}
