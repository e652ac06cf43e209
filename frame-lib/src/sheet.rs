use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use svg::Document;

use crate::FrameError;

static LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^--- (\d+) ---$").expect("valid label pattern"));

/// One numbered still of an animation.
#[derive(Debug)]
pub struct Frame {
    pub index: usize,
    pub document: Document,
}

impl Frame {
    pub fn new(index: usize, document: Document) -> Self {
        Self { index, document }
    }

    pub fn label(&self) -> String {
        format!("--- {} ---", self.index)
    }

    /// Atlas texture name, e.g. `Meanie007.svg`.
    pub fn file_name(&self, prefix: &str) -> String {
        format!("{}{:03}.svg", prefix, self.index)
    }
}

/// Prints each frame as a label line followed by its markup.
pub fn write_frames<W, I>(out: &mut W, frames: I) -> Result<usize, FrameError>
where
    W: Write,
    I: IntoIterator<Item = Frame>,
{
    let mut count = 0;
    for frame in frames {
        writeln!(out, "{}", frame.label())?;
        writeln!(out, "{}", frame.document)?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

/// Saves each frame to `dir/<prefix><index:03>.svg`, creating `dir` if needed.
pub fn save_frames<P, I>(dir: P, prefix: &str, frames: I) -> Result<Vec<PathBuf>, FrameError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = Frame>,
{
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for frame in frames {
        let path = dir.join(frame.file_name(prefix));
        svg::save(&path, &frame.document)?;
        debug!("saved frame {} to {}", frame.index, path.display());
        written.push(path);
    }
    Ok(written)
}

/// Sends frames to `out_dir` when given, otherwise to stdout.
pub fn emit<I>(out_dir: Option<&Path>, prefix: &str, frames: I) -> Result<(), FrameError>
where
    I: IntoIterator<Item = Frame>,
{
    match out_dir {
        Some(dir) => {
            let written = save_frames(dir, prefix, frames)?;
            info!("wrote {} frames to {}", written.len(), dir.display());
        }
        None => {
            let stdout = std::io::stdout();
            let count = write_frames(&mut stdout.lock(), frames)?;
            debug!("printed {} frames", count);
        }
    }
    Ok(())
}

/// Splits a printed frame stream back into `(index, markup)` pairs.
///
/// Labels must start at 0 and count up by one. Blank text before the first
/// label is ignored, anything else there is an error.
pub fn split_stream(text: &str) -> Result<Vec<(usize, String)>, FrameError> {
    let mut frames: Vec<(usize, Vec<&str>)> = Vec::new();
    for line in text.lines() {
        if let Some(caps) = LABEL.captures(line) {
            let found = caps[1]
                .parse::<usize>()
                .map_err(|e| FrameError::Parse(e.to_string()))?;
            let expected = frames.len();
            if found != expected {
                return Err(FrameError::OutOfOrder { expected, found });
            }
            frames.push((found, Vec::new()));
            continue;
        }
        match frames.last_mut() {
            Some((_, lines)) => lines.push(line),
            None if line.trim().is_empty() => (),
            None => return Err(FrameError::MissingLabel),
        }
    }
    Ok(frames
        .into_iter()
        .map(|(index, lines)| (index, lines.join("\n")))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas;
    use crate::inspect::parse_elements;
    use svg::node::element::Rectangle;

    fn sample(index: usize) -> Frame {
        let rect = Rectangle::new()
            .set("x", index as f64 + 0.5)
            .set("y", 27)
            .set("width", 3.75)
            .set("height", 10);
        Frame::new(index, canvas().add(rect))
    }

    #[test]
    fn test_label_and_file_name() {
        let frame = sample(7);
        assert_eq!(frame.label(), "--- 7 ---");
        assert_eq!(frame.file_name("Meanie"), "Meanie007.svg");
        assert_eq!(sample(12).file_name("MiniBoss"), "MiniBoss012.svg");
    }

    #[test]
    fn test_stream_roundtrip() {
        let rendered: Vec<String> = (0..4).map(|i| sample(i).document.to_string()).collect();

        let mut out = Vec::new();
        let count = write_frames(&mut out, (0..4).map(sample)).unwrap();
        assert_eq!(count, 4);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("--- 0 ---\n"));

        let split = split_stream(&text).unwrap();
        assert_eq!(split.len(), 4);
        for (i, (index, markup)) in split.iter().enumerate() {
            assert_eq!(*index, i);
            assert_eq!(
                parse_elements(markup).unwrap(),
                parse_elements(&rendered[i]).unwrap()
            );
        }
    }

    #[test]
    fn test_split_empty() {
        assert!(split_stream("").unwrap().is_empty());
        assert!(split_stream("\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_split_missing_label() {
        match split_stream("<svg/>\n--- 0 ---\n<svg/>") {
            Err(FrameError::MissingLabel) => (),
            other => panic!("expected MissingLabel, got {:?}", other),
        }
    }

    #[test]
    fn test_split_out_of_order() {
        match split_stream("--- 0 ---\n<svg/>\n--- 2 ---\n<svg/>") {
            Err(FrameError::OutOfOrder { expected, found }) => {
                assert_eq!(expected, 1);
                assert_eq!(found, 2);
            }
            other => panic!("expected OutOfOrder, got {:?}", other),
        }
        assert!(matches!(
            split_stream("--- 1 ---\n<svg/>"),
            Err(FrameError::OutOfOrder { expected: 0, found: 1 })
        ));
    }

    #[test]
    fn test_label_must_fill_line() {
        // A label embedded in markup is just markup.
        let split = split_stream("--- 0 ---\n<!-- --- 1 --- -->").unwrap();
        assert_eq!(split, vec![(0, "<!-- --- 1 --- -->".to_string())]);
    }

    #[test]
    fn test_save_frames() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("sprites");
        let written = save_frames(&target, "MiniBoss", (0..3).map(sample)).unwrap();

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["MiniBoss000.svg", "MiniBoss001.svg", "MiniBoss002.svg"]);

        let content = fs::read_to_string(&written[2]).unwrap();
        let elements = parse_elements(&content).unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1].attr("x"), Some("2.5"));
    }

    #[test]
    fn test_emit_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        emit(Some(dir.path()), "Meanie", (0..2).map(sample)).unwrap();
        assert!(dir.path().join("Meanie000.svg").is_file());
        assert!(dir.path().join("Meanie001.svg").is_file());
        assert!(!dir.path().join("Meanie002.svg").exists());
    }
}
