use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes sampled when deciding text vs. binary.
pub const SAMPLE_LEN: u64 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Binary,
}

/// Classifies a byte sample: any NUL byte means binary, otherwise text.
///
/// This is a heuristic, not a format-aware determination. A valid text file
/// that happens to carry a NUL byte in its first kilobyte is misclassified.
pub fn classify_bytes(sample: &[u8]) -> FileKind {
    if sample.contains(&0) {
        FileKind::Binary
    } else {
        FileKind::Text
    }
}

/// Samples the first [`SAMPLE_LEN`] bytes of `path` and classifies them.
///
/// An unreadable file is reported as binary so it drops out of the content
/// output without aborting the walk.
pub fn classify_file(path: &Path) -> FileKind {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::debug!("Could not open {} for sampling: {}", path.display(), e);
            return FileKind::Binary;
        }
    };

    let mut sample = Vec::with_capacity(SAMPLE_LEN as usize);
    if let Err(e) = file.take(SAMPLE_LEN).read_to_end(&mut sample) {
        log::debug!("Could not sample {}: {}", path.display(), e);
        return FileKind::Binary;
    }

    classify_bytes(&sample)
}
