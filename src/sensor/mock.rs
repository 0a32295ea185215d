// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the npk-bridge project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Mock sensor source
//!
//! This module provides a sensor source that fabricates NPK frames
//! in-process, for running the bridge without hardware and for scripting
//! device behavior in tests.

use super::{SensorError, SensorSource};

/// Synthetic NPK sensor.
///
/// By default the source cycles through a small set of plausible
/// readings shaped exactly like real device output, padded to the
/// configured frame length. Tests can script arbitrary byte sequences,
/// including truncated or undecodable frames, with
/// [`MockSensor::with_frames`].
pub struct MockSensor {
    frames: Vec<Vec<u8>>,
    next: usize,
}

impl MockSensor {
    /// Create a mock sensor cycling through built-in sample readings.
    pub fn new(frame_length: usize) -> Self {
        let frames = [(12u8, 8u8, 5u8), (14, 9, 6), (11, 7, 5), (13, 8, 7)]
            .iter()
            .map(|(n, p, k)| {
                let mut frame = format!("{},{},{}.", n, p, k).into_bytes();
                frame.resize(frame_length.max(frame.len()), b' ');
                frame
            })
            .collect();
        Self { frames, next: 0 }
    }

    /// Create a mock sensor that replays the given frames in order,
    /// cycling when exhausted.
    pub fn with_frames(frames: Vec<Vec<u8>>) -> Self {
        Self { frames, next: 0 }
    }
}

impl SensorSource for MockSensor {
    fn read_frame(&mut self) -> Result<Vec<u8>, SensorError> {
        if self.frames.is_empty() {
            return Ok(Vec::new());
        }
        let frame = self.frames[self.next % self.frames.len()].clone();
        self.next += 1;
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_frame;

    #[test]
    fn test_default_frames_parse_cleanly() {
        let mut sensor = MockSensor::new(12);
        for _ in 0..8 {
            let frame = sensor.read_frame().unwrap();
            assert_eq!(frame.len(), 12);
            let reading = parse_frame(&frame).unwrap();
            assert_ne!(reading.nitrogen, "NA");
            assert_ne!(reading.phosphorus, "NA");
            assert_ne!(reading.potassium, "NA");
        }
    }

    #[test]
    fn test_scripted_frames_replay_in_order_and_cycle() {
        let mut sensor =
            MockSensor::with_frames(vec![b"1,0,0.".to_vec(), b"2,0,0.".to_vec()]);
        assert_eq!(sensor.read_frame().unwrap(), b"1,0,0.");
        assert_eq!(sensor.read_frame().unwrap(), b"2,0,0.");
        assert_eq!(sensor.read_frame().unwrap(), b"1,0,0.");
    }

    #[test]
    fn test_empty_script_yields_empty_frames() {
        let mut sensor = MockSensor::with_frames(Vec::new());
        assert!(sensor.read_frame().unwrap().is_empty());
    }
}
