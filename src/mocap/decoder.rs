use log::warn;
use ndarray::Array1;

/// Why a slot did not receive a freshly parsed value.
#[derive(Clone, Debug, PartialEq)]
pub enum SlotIssue {
    /// The token at this slot was not a number.
    MalformedToken(String),
    /// The frame ended before reaching this slot.
    MissingToken,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SlotDiagnostic {
    pub slot: usize,
    pub issue: SlotIssue,
}

/// Outcome of decoding one text frame.
#[derive(Clone, Debug)]
pub struct DecodeReport {
    pub frame: Array1<f64>,
    pub diagnostics: Vec<SlotDiagnostic>,
    /// Tokens past the frame width that were ignored.
    pub extra_tokens: usize,
}

impl DecodeReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
    pub fn degraded_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.diagnostics.iter().map(|d| d.slot)
    }
}

/// Parses space-delimited numeric frames of a fixed width.
///
/// Slots that cannot be parsed keep the value the previous frame had at the
/// same index, so a corrupt token never shifts the slots that follow it.
#[derive(Clone, Debug)]
pub struct FrameDecoder {
    width: usize,
}

impl FrameDecoder {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn decode(&self, raw: &str, previous: &Array1<f64>) -> DecodeReport {
        let fallback = |slot: usize| previous.get(slot).copied().unwrap_or(0.0);
        let mut values = Vec::with_capacity(self.width);
        let mut diagnostics = Vec::new();
        let mut extra_tokens = 0;
        for token in raw.split_ascii_whitespace() {
            let slot = values.len();
            if slot == self.width {
                extra_tokens += 1;
                continue;
            }
            match token.parse::<f64>() {
                Ok(value) => values.push(value),
                Err(_) => {
                    warn!("malformed token {token:?} at slot {slot} of {}", self.width);
                    values.push(fallback(slot));
                    diagnostics.push(SlotDiagnostic {
                        slot,
                        issue: SlotIssue::MalformedToken(token.to_owned()),
                    });
                }
            }
        }
        if values.len() < self.width {
            warn!(
                "frame carried {} of {} values; padding from previous frame",
                values.len(),
                self.width
            );
            for slot in values.len()..self.width {
                values.push(fallback(slot));
                diagnostics.push(SlotDiagnostic {
                    slot,
                    issue: SlotIssue::MissingToken,
                });
            }
        }
        DecodeReport {
            frame: Array1::from_vec(values),
            diagnostics,
            extra_tokens,
        }
    }
}
