//! Figure files and closure reports.
//!
//! Input schema (JSON):
//! ```json
//! {
//!   "points": [{ "name": "A", "x": 0.0, "y": 0.0 }, ...],
//!   "segments": [["A", "B"], ...]
//! }
//! ```
//! Segments reference points by name; every referenced name must be declared.
//! The report is the serialized outcome of the full pipeline: closure,
//! angle partition, triangle enumeration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use figure::closure::Preprocessor;
use figure::geom::{Angle, Point, Segment, Triangle};
use figure::identify::{AngleIdentifier, TriangleIdentifier};
use figure::points::PointDatabase;

#[derive(Deserialize)]
struct FigureFile {
    points: Vec<PointSpec>,
    segments: Vec<[String; 2]>,
}

#[derive(Deserialize)]
struct PointSpec {
    name: String,
    x: f64,
    y: f64,
}

/// Load a figure file into an interned point database plus given segments.
pub fn load(path: &Path) -> Result<(PointDatabase, Vec<Segment>)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading figure file {}", path.display()))?;
    let file: FigureFile =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;

    let mut db = PointDatabase::new();
    for spec in &file.points {
        if spec.name.is_empty() {
            bail!("figure point at ({}, {}) has an empty name", spec.x, spec.y);
        }
        db.put(spec.name.clone(), spec.x, spec.y);
    }

    let mut given = Vec::with_capacity(file.segments.len());
    for [a, b] in &file.segments {
        let pa = db
            .point_named(a)
            .with_context(|| format!("segment references unknown point {a}"))?
            .clone();
        let pb = db
            .point_named(b)
            .with_context(|| format!("segment references unknown point {b}"))?
            .clone();
        if pa == pb {
            bail!("segment {a}{b} is degenerate");
        }
        given.push(Segment::new(pa, pb));
    }
    Ok((db, given))
}

#[derive(Serialize)]
pub struct Report {
    pub code_rev: String,
    pub points: Vec<PointReport>,
    pub implicit_points: Vec<String>,
    pub given_segments: Vec<[String; 2]>,
    pub minimal_segments: Vec<[String; 2]>,
    pub non_minimal_segments: Vec<[String; 2]>,
    pub angle_count: usize,
    pub angle_classes: Vec<AngleClassReport>,
    pub triangles: Vec<[String; 3]>,
}

#[derive(Serialize)]
pub struct PointReport {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub generated: bool,
}

#[derive(Serialize)]
pub struct AngleClassReport {
    pub canonical: AngleReport,
    pub rest: Vec<AngleReport>,
}

#[derive(Serialize)]
pub struct AngleReport {
    pub vertex: String,
    pub end1: String,
    pub end2: String,
    pub measure: f64,
}

/// Run the full pipeline and flatten the outcome into the report schema.
pub fn analyze(pp: &Preprocessor) -> Report {
    let angle_identifier = AngleIdentifier::new(pp.segment_table());
    let classes = angle_identifier.angles();
    let triangle_identifier = TriangleIdentifier::new(pp.segment_table());

    Report {
        code_rev: option_env!("GIT_COMMIT").unwrap_or("unknown").to_string(),
        points: pp.points().points().map(point_report).collect(),
        implicit_points: pp.implicit_points().iter().map(label).collect(),
        given_segments: pp.given_segments().iter().map(segment_labels).collect(),
        minimal_segments: pp.minimal_segments().iter().map(segment_labels).collect(),
        non_minimal_segments: pp
            .non_minimal_segments()
            .iter()
            .map(segment_labels)
            .collect(),
        angle_count: classes.size(),
        angle_classes: classes
            .iter()
            .filter_map(|class| {
                class.canonical().map(|canonical| AngleClassReport {
                    canonical: angle_report(canonical),
                    rest: class.rest().iter().map(angle_report).collect(),
                })
            })
            .collect(),
        triangles: triangle_identifier
            .triangles()
            .iter()
            .map(triangle_labels)
            .collect(),
    }
}

fn label(p: &Point) -> String {
    match p.name() {
        Some(n) => n.to_string(),
        None => format!("({}, {})", p.x(), p.y()),
    }
}

fn point_report(p: &Point) -> PointReport {
    PointReport {
        name: label(p),
        x: p.x(),
        y: p.y(),
        generated: p.is_generated(),
    }
}

fn segment_labels(s: &Segment) -> [String; 2] {
    [label(s.point1()), label(s.point2())]
}

fn angle_report(a: &Angle) -> AngleReport {
    AngleReport {
        vertex: label(a.vertex()),
        end1: label(a.end1()),
        end2: label(a.end2()),
        measure: a.measure(),
    }
}

fn triangle_labels(t: &Triangle) -> [String; 3] {
    let [a, b, c] = t.vertices();
    [label(a), label(b), label(c)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const COLLINEAR_FIGURE: &str = r#"{
        "points": [
            { "name": "A", "x": 0.0, "y": 0.0 },
            { "name": "B", "x": 2.0, "y": 0.0 },
            { "name": "C", "x": 4.0, "y": 0.0 }
        ],
        "segments": [["A", "B"], ["B", "C"], ["A", "C"]]
    }"#;

    #[test]
    fn load_and_analyze_collinear_figure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("figure.json");
        fs::write(&path, COLLINEAR_FIGURE).unwrap();

        let (db, given) = load(&path).unwrap();
        assert_eq!(db.len(), 3);
        assert_eq!(given.len(), 3);

        let report = analyze(&Preprocessor::new(db, given));
        assert!(report.implicit_points.is_empty());
        assert_eq!(report.minimal_segments.len(), 2);
        assert_eq!(report.non_minimal_segments, vec![["A".to_string(), "C".to_string()]]);
        // One straight angle at B; every other segment pair overlays.
        assert_eq!(report.angle_count, 1);
        assert!(report.triangles.is_empty());

        // The report serializes.
        let text = serde_json::to_string_pretty(&report).unwrap();
        assert!(text.contains("\"minimal_segments\""));
    }

    #[test]
    fn load_rejects_unknown_point_references() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("figure.json");
        fs::write(
            &path,
            r#"{ "points": [{ "name": "A", "x": 0.0, "y": 0.0 }], "segments": [["A", "Z"]] }"#,
        )
        .unwrap();
        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("unknown point Z"));
    }

    #[test]
    fn load_rejects_degenerate_segments() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("figure.json");
        fs::write(
            &path,
            r#"{ "points": [{ "name": "A", "x": 1.0, "y": 1.0 }], "segments": [["A", "A"]] }"#,
        )
        .unwrap();
        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("degenerate"));
    }
}
