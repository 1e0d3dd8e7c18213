use crate::domain::network::{FiberId, Network};
use crate::error::{Error, Result};

/// Partitions a sequence of fibers into the minimum number of segments such
/// that each segment's total length stays within the maximum distance that
/// can be traversed without OEO regeneration.
///
/// Fibers are packed left to right; a new segment starts when adding the
/// next fiber would exceed `max_unregenerated_km`. A single fiber longer
/// than the limit makes the partitioning impossible and is a fatal error.
pub fn regeneration_points(net: &Network, seq_fibers: &[FiberId], max_unregenerated_km: f64) -> Result<Vec<Vec<FiberId>>> {
    let mut segments: Vec<Vec<FiberId>> = vec![Vec::new()];
    let mut accumulated_km = 0.0;
    for &fiber in seq_fibers {
        let fiber_data = match net.fiber(fiber) {
            Some(f) => f,
            None => return Err(Error::CrossNetwork(format!("unknown fiber {:?}", fiber))),
        };
        let length_km = fiber_data.length_km();
        if length_km > max_unregenerated_km {
            return Err(Error::FiberTooLong { length_km, max_km: max_unregenerated_km });
        }
        accumulated_km += length_km;
        if accumulated_km > max_unregenerated_km {
            segments.push(vec![fiber]);
            accumulated_km = length_km;
        } else {
            segments.last_mut().expect("segments starts non-empty").push(fiber);
        }
    }
    Ok(segments)
}
