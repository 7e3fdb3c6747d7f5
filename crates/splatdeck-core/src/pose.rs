//! Recorded camera poses
//!
//! Poses are authored on the editor timeline and supplied to the export
//! dialog as an unordered list. The dialog works against an ordered,
//! filtered view derived once per session.

use glam::Vec3;

/// A camera position/target pair pinned to a timeline frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Timeline frame this pose is keyed to
    pub frame: u32,
    /// Camera position in world space
    pub position: Vec3,
    /// Look-at target in world space
    pub target: Vec3,
}

/// Filter poses to the timeline range and sort them by frame.
///
/// Poses with `frame >= total_frames` are dropped. The sort is stable, so
/// poses sharing a frame keep their input order.
pub fn ordered_poses(poses: &[CameraPose], total_frames: u32) -> Vec<CameraPose> {
    let mut ordered: Vec<CameraPose> = poses
        .iter()
        .copied()
        .filter(|p| p.frame < total_frames)
        .collect();
    ordered.sort_by_key(|p| p.frame);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose(frame: u32) -> CameraPose {
        CameraPose {
            frame,
            position: Vec3::new(frame as f32, 0.0, 0.0),
            target: Vec3::ZERO,
        }
    }

    #[test]
    fn test_ordered_poses_filters_and_sorts() {
        let poses = vec![pose(5), pose(1), pose(20)];
        let ordered = ordered_poses(&poses, 10);

        let frames: Vec<u32> = ordered.iter().map(|p| p.frame).collect();
        assert_eq!(frames, vec![1, 5]);
    }

    #[test]
    fn test_ordered_poses_stable_on_ties() {
        let a = CameraPose {
            frame: 3,
            position: Vec3::X,
            target: Vec3::ZERO,
        };
        let b = CameraPose {
            frame: 3,
            position: Vec3::Y,
            target: Vec3::ZERO,
        };
        let ordered = ordered_poses(&[a, b], 10);
        assert_eq!(ordered[0].position, Vec3::X);
        assert_eq!(ordered[1].position, Vec3::Y);
    }

    #[test]
    fn test_ordered_poses_empty_input() {
        assert!(ordered_poses(&[], 100).is_empty());
    }
}
