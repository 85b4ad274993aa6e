use serde::{Deserialize, Serialize};

/// A loosely typed field as delivered by a form or a parsed file.
///
/// Spreadsheet exports routinely turn `5001` into a number and `"3"` into a
/// string, so every job field accepts either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawValue {
    /// Text form of the value, trimmed.
    pub fn to_text(&self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(s) => s.trim().to_string(),
        }
    }

    /// Numeric form of the value, truncated toward zero.
    ///
    /// Returns `None` for non-numeric text and non-finite floats.
    pub fn to_count(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Float(f) => float_to_count(*f),
            Self::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(float_to_count))
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn float_to_count(f: f64) -> Option<i64> {
    if f.is_finite() {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

/// An unvalidated job row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawJob {
    #[serde(default)]
    pub top: Option<RawValue>,
    #[serde(default)]
    pub bottom: Option<RawValue>,
    #[serde(default)]
    pub count: Option<RawValue>,
}

impl RawJob {
    /// Convenience constructor for well-typed input.
    pub fn new(top: &str, bottom: &str, count: i64) -> Self {
        Self {
            top: Some(RawValue::Text(top.to_string())),
            bottom: Some(RawValue::Text(bottom.to_string())),
            count: Some(RawValue::Int(count)),
        }
    }
}

/// A validated label job: both texts non-empty, count positive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StickerJob {
    top: String,
    bottom: String,
    count: u32,
}

impl StickerJob {
    /// Validate a job. Texts are trimmed; returns `None` if either is empty or
    /// the count is zero.
    pub fn new(top: &str, bottom: &str, count: u32) -> Option<Self> {
        let top = top.trim();
        let bottom = bottom.trim();
        if top.is_empty() || bottom.is_empty() || count == 0 {
            return None;
        }
        Some(Self {
            top: top.to_string(),
            bottom: bottom.to_string(),
            count,
        })
    }

    /// Validate a raw row.
    pub fn from_raw(raw: &RawJob) -> Option<Self> {
        let top = raw.top.as_ref()?.to_text();
        let bottom = raw.bottom.as_ref()?.to_text();
        let count = raw.count.as_ref()?.to_count()?;
        let count = u32::try_from(count).ok()?;
        Self::new(&top, &bottom, count)
    }

    pub fn top(&self) -> &str {
        &self.top
    }

    pub fn bottom(&self) -> &str {
        &self.bottom
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// The (top, bottom) pair used for color assignment.
    pub fn pair(&self) -> (&str, &str) {
        (&self.top, &self.bottom)
    }
}

/// Drop invalid rows, keeping the order of the valid ones.
pub fn validate_jobs(raw: &[RawJob]) -> Vec<StickerJob> {
    raw.iter().filter_map(StickerJob::from_raw).collect()
}

/// Total number of stickers across all jobs, or `None` if it overflows `usize`.
pub fn total_stickers(jobs: &[StickerJob]) -> Option<usize> {
    jobs.iter()
        .try_fold(0_usize, |acc, j| acc.checked_add(usize::try_from(j.count).ok()?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_rejects_empty() {
        let job = StickerJob::new("  5001 ", "19608", 2).unwrap();
        assert_eq!(job.top(), "5001");
        assert!(StickerJob::new("   ", "19608", 1).is_none());
        assert!(StickerJob::new("5001", "", 1).is_none());
        assert!(StickerJob::new("5001", "19608", 0).is_none());
    }

    #[test]
    fn test_count_coercion() {
        assert_eq!(RawValue::Text(" 3 ".into()).to_count(), Some(3));
        assert_eq!(RawValue::Text("2.9".into()).to_count(), Some(2));
        assert_eq!(RawValue::Float(4.2).to_count(), Some(4));
        assert_eq!(RawValue::Text("abc".into()).to_count(), None);
        assert_eq!(RawValue::Float(f64::NAN).to_count(), None);
    }

    #[test]
    fn test_validate_jobs_keeps_order() {
        let raw = vec![
            RawJob::new("A", "1", 2),
            RawJob::new("", "2", 5),
            RawJob::new("B", "3", -1),
            RawJob {
                top: Some(RawValue::Int(5001)),
                bottom: Some(RawValue::Int(19608)),
                count: Some(RawValue::Text("1".into())),
            },
            RawJob::default(),
        ];
        let jobs = validate_jobs(&raw);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].pair(), ("A", "1"));
        assert_eq!(jobs[1].pair(), ("5001", "19608"));
        assert_eq!(total_stickers(&jobs), Some(3));
    }

    #[test]
    fn test_total_stickers_of_large_counts() {
        let jobs = vec![
            StickerJob::new("A", "1", u32::MAX).unwrap(),
            StickerJob::new("B", "2", u32::MAX).unwrap(),
        ];
        let expected = usize::try_from(u64::from(u32::MAX) * 2).ok();
        assert_eq!(total_stickers(&jobs), expected);
        assert_eq!(total_stickers(&[]), Some(0));
    }

    #[test]
    fn test_raw_job_from_json() {
        let raw: Vec<RawJob> =
            serde_json::from_str(r#"[{"top": 5001, "bottom": "19608", "count": "2"}]"#).unwrap();
        let jobs = validate_jobs(&raw);
        assert_eq!(jobs[0].top(), "5001");
        assert_eq!(jobs[0].count(), 2);
    }
}
