//! Flat frame addressing.
//!
//! Every joint owns a 16-scalar block laid out as
//! `[position x3][quaternion x4][velocity x3][gyro x3][acceleration x3]`.
//! Kinds stored after the quaternion are shifted by one slot because the
//! quaternion is one scalar wider than the others.
use crate::mocap::types::{BodyPart, ParameterKind, BODY_PART_COUNT};

/// Scalars per joint block.
pub const BLOCK_WIDTH: usize = 16;

/// Column range of one parameter inside a flat frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub offset: usize,
    pub len: usize,
}

impl Segment {
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.end()
    }
}

pub fn segment(part: BodyPart, kind: ParameterKind) -> Segment {
    let block_start = BLOCK_WIDTH * part.index();
    let skew = if kind > ParameterKind::Quaternion { 1 } else { 0 };
    Segment {
        offset: block_start + kind.index() * 3 + skew,
        len: kind.arity(),
    }
}

/// Flat frame width for `joint_count` joints.
pub fn frame_width(joint_count: usize) -> usize {
    BLOCK_WIDTH * joint_count.min(BODY_PART_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn offsets_follow_block_layout() {
        let expected = [(0, 3), (3, 4), (7, 3), (10, 3), (13, 3)];
        for (kind, (offset, len)) in ParameterKind::ALL.iter().zip(expected) {
            assert_eq!(segment(BodyPart::Hips, *kind), Segment { offset, len });
        }
        let head = segment(BodyPart::Head, ParameterKind::Gyro);
        assert_eq!(head.offset, 16 * 12 + 10);
    }
    #[test]
    fn segments_tile_each_block_without_gaps() {
        for part in BodyPart::ALL {
            let mut cursor = BLOCK_WIDTH * part.index();
            for kind in ParameterKind::ALL {
                let seg = segment(part, kind);
                assert_eq!(seg.offset, cursor, "{part:?} {kind:?}");
                cursor = seg.end();
            }
            assert_eq!(cursor, BLOCK_WIDTH * (part.index() + 1));
        }
    }
    #[test]
    fn every_segment_fits_inside_the_frame() {
        for joint_count in 1..=BODY_PART_COUNT {
            let width = frame_width(joint_count);
            for part in BodyPart::ALL.iter().take(joint_count) {
                for kind in ParameterKind::ALL {
                    assert!(segment(*part, kind).end() <= width);
                }
            }
        }
    }
}
