//! Keyframe animation of an enriched trip, as the viewer plays it back.

use formats::{ModelKind, TripRecord};
use foundation::math::{rhumb_bearing_deg, rhumb_distance_m, turn_angle_deg};
use serde::Serialize;

/// Moves shorter than this (meters) are dropped.
const MIN_MOVE_M: f64 = 0.1;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaybackOptions {
    /// Meters per second.
    pub speed_mps: f64,
    pub looped: bool,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            speed_mps: 10.0,
            looped: false,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Keyframe {
    pub point: [f64; 3],
    pub heading: Option<f64>,
    /// Seconds since the start of the trip.
    pub time: f64,
}

/// Interpolated state of one trip at a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub point: [f64; 3],
    pub heading: f64,
    pub pitch: f64,
    pub name: String,
    pub flag: String,
    pub color: [u8; 4],
    pub model: ModelKind,
}

#[derive(Debug, Clone)]
pub struct TripPlayback {
    name: String,
    flag: String,
    color: [u8; 4],
    model: ModelKind,
    keyframes: Vec<Keyframe>,
    options: PlaybackOptions,
    total_time: f64,
}

fn lon_lat(p: [f64; 3]) -> [f64; 2] {
    [p[0], p[1]]
}

impl TripPlayback {
    pub fn new(record: &TripRecord, options: PlaybackOptions) -> Self {
        let mut out = Self {
            name: record.name.clone(),
            flag: record.flag.clone(),
            color: record.color,
            model: record.model,
            keyframes: Vec::with_capacity(record.coords.len()),
            options,
            total_time: 0.0,
        };

        let points: Vec<[f64; 3]> = record
            .coords
            .iter()
            .map(|p| [p.0, p.1, p.t() as f64])
            .collect();
        for p in &points {
            out.move_to(*p);
        }
        if options.looped && points.len() > 2 {
            out.move_to(points[0]);
            if let Some(h) = out.keyframes[0].heading {
                out.turn_to(h);
            }
        }
        out
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    fn move_to(&mut self, point: [f64; 3]) {
        let Some(prev) = self.keyframes.last().copied() else {
            self.keyframes.push(Keyframe {
                point,
                heading: None,
                time: 0.0,
            });
            return;
        };

        let distance = rhumb_distance_m(lon_lat(prev.point), lon_lat(point));
        if distance < MIN_MOVE_M {
            return;
        }
        let heading = rhumb_bearing_deg(lon_lat(prev.point), lon_lat(point));

        if prev.heading.is_none() {
            if let Some(last) = self.keyframes.last_mut() {
                last.heading = Some(heading);
            }
        } else {
            self.turn_to(heading);
        }

        self.total_time += distance / self.options.speed_mps;
        self.keyframes.push(Keyframe {
            point,
            heading: Some(heading),
            time: self.total_time,
        });
    }

    // Turns are instantaneous: same point, same time, new heading.
    fn turn_to(&mut self, heading: f64) {
        let Some(prev) = self.keyframes.last().copied() else {
            return;
        };
        let Some(prev_heading) = prev.heading else {
            return;
        };
        if turn_angle_deg(prev_heading, heading).abs() > 0.0 {
            self.keyframes.push(Keyframe {
                point: prev.point,
                heading: Some(heading),
                time: self.total_time,
            });
        }
    }

    fn frame(&self, point: [f64; 3], heading: f64, pitch: f64) -> Frame {
        Frame {
            point,
            heading,
            pitch,
            name: self.name.clone(),
            flag: self.flag.clone(),
            color: self.color,
            model: self.model,
        }
    }

    /// State at `timestamp` seconds. Looped playbacks wrap, others clamp.
    /// `None` only for a trip without coordinates.
    pub fn frame_at(&self, timestamp: f64) -> Option<Frame> {
        let first = self.keyframes.first()?;
        if self.keyframes.len() < 2 || self.total_time <= 0.0 {
            return Some(self.frame(first.point, first.heading.unwrap_or(0.0), 0.0));
        }

        let t = if self.options.looped {
            timestamp.rem_euclid(self.total_time)
        } else {
            timestamp.clamp(0.0, self.total_time)
        };

        let i = self
            .keyframes
            .iter()
            .position(|k| k.time >= t)
            .unwrap_or(self.keyframes.len() - 1)
            .max(1);
        let start = &self.keyframes[i - 1];
        let end = &self.keyframes[i];

        let dt = end.time - start.time;
        let r = if dt > 0.0 { (t - start.time) / dt } else { 1.0 };

        let dist = rhumb_distance_m(lon_lat(start.point), lon_lat(end.point));
        let pitch = (end.point[2] - start.point[2]).atan2(dist).to_degrees();

        let start_heading = start.heading.unwrap_or(0.0);
        let end_heading = end.heading.unwrap_or(start_heading);
        let heading = start_heading + turn_angle_deg(start_heading, end_heading) * r;

        let point = [
            start.point[0] * (1.0 - r) + end.point[0] * r,
            start.point[1] * (1.0 - r) + end.point[1] * r,
            start.point[2] * (1.0 - r) + end.point[2] * r,
        ];
        Some(self.frame(point, heading, pitch))
    }
}

/// Frames of every record at `timestamp`, skipping records without coordinates.
pub fn frames_at(records: &[TripRecord], options: PlaybackOptions, timestamp: f64) -> Vec<Frame> {
    records
        .iter()
        .filter_map(|rec| TripPlayback::new(rec, options).frame_at(timestamp))
        .collect()
}
