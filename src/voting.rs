//! Response-to-candidate matching and per-side vote accumulation.
//!
//! Every response point is compared against every candidate of its side (no
//! first-match early exit): the candidate at the smallest clamped
//! point-to-segment distance receives the vote, with ties going to the
//! candidate whose carrier line passes closest to the frame center at the
//! vertical midpoint. A response farther than `max_response_dist` from every
//! candidate is treated as stray evidence and casts no vote.
//!
//! The side's winner is the candidate with the most votes; vote ties are
//! again broken by the centering offset. A side with no candidates has no
//! winner, which is a valid steady state and not an error.
use crate::segments::Candidate;
use nalgebra::Point2;

/// Unsigned horizontal offset of the candidate's carrier line from the frame
/// center, evaluated at the frame's vertical midpoint.
fn centering_offset(candidate: &Candidate, frame_center: Point2<f32>) -> f32 {
    (candidate.segment.x_at(frame_center.y) - frame_center.x).abs()
}

/// Index and distance of the candidate best matching `response`.
pub fn best_match(
    candidates: &[Candidate],
    response: Point2<f32>,
    frame_center: Point2<f32>,
) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32, f32)> = None;
    for (idx, candidate) in candidates.iter().enumerate() {
        let dist = candidate.segment.distance_to(response);
        let offset = centering_offset(candidate, frame_center);
        let better = match best {
            None => true,
            Some((_, best_dist, best_offset)) => {
                dist < best_dist || (dist == best_dist && offset < best_offset)
            }
        };
        if better {
            best = Some((idx, dist, offset));
        }
    }
    best.map(|(idx, dist, _)| (idx, dist))
}

/// Match `response` against the side's candidates and increment the winner's
/// vote. Returns the voted index, or `None` when the side has no candidates
/// or the response is farther than `max_response_dist` from all of them.
pub fn cast_vote(
    candidates: &mut [Candidate],
    response: Point2<f32>,
    frame_center: Point2<f32>,
    max_response_dist: f32,
) -> Option<usize> {
    let (idx, dist) = best_match(candidates, response, frame_center)?;
    if dist > max_response_dist {
        return None;
    }
    candidates[idx].votes += 1;
    Some(idx)
}

/// Index of the side's winning candidate after all rows have been scanned.
pub fn winner(candidates: &[Candidate], frame_center: Point2<f32>) -> Option<usize> {
    let mut best: Option<(usize, u32, f32)> = None;
    for (idx, candidate) in candidates.iter().enumerate() {
        let offset = centering_offset(candidate, frame_center);
        let better = match best {
            None => true,
            Some((_, best_votes, best_offset)) => {
                candidate.votes > best_votes
                    || (candidate.votes == best_votes && offset < best_offset)
            }
        };
        if better {
            best = Some((idx, candidate.votes, offset));
        }
    }
    best.map(|(idx, _, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::LineSegment;

    fn candidate(quad: [i32; 4]) -> Candidate {
        Candidate::new(LineSegment::from_quad(quad))
    }

    fn center() -> Point2<f32> {
        Point2::new(320.0, 90.0)
    }

    #[test]
    fn closest_candidate_receives_the_vote() {
        let mut candidates = vec![candidate([100, 179, 260, 19]), candidate([40, 179, 200, 19])];
        // Response on the first candidate's segment.
        let voted = cast_vote(
            &mut candidates,
            Point2::new(180.0, 99.0),
            center(),
            f32::INFINITY,
        );
        assert_eq!(voted, Some(0));
        assert_eq!(candidates[0].votes, 1);
        assert_eq!(candidates[1].votes, 0);
    }

    #[test]
    fn distance_tie_prefers_more_centered_candidate() {
        // Two parallel vertical segments equidistant from the response; the
        // one nearer the frame center must win the tie.
        let mut candidates = vec![candidate([100, 0, 100, 180]), candidate([300, 0, 300, 180])];
        let voted = cast_vote(
            &mut candidates,
            Point2::new(200.0, 90.0),
            center(),
            f32::INFINITY,
        );
        assert_eq!(voted, Some(1));
    }

    #[test]
    fn stray_response_casts_no_vote() {
        let mut candidates = vec![candidate([100, 179, 260, 19])];
        let voted = cast_vote(&mut candidates, Point2::new(600.0, 10.0), center(), 5.0);
        assert_eq!(voted, None);
        assert_eq!(candidates[0].votes, 0);
    }

    #[test]
    fn no_candidates_no_vote() {
        let mut candidates: Vec<Candidate> = Vec::new();
        assert_eq!(
            cast_vote(&mut candidates, Point2::new(1.0, 1.0), center(), 5.0),
            None
        );
    }

    #[test]
    fn winner_has_most_votes() {
        let mut candidates = vec![candidate([100, 0, 100, 180]), candidate([200, 0, 200, 180])];
        candidates[1].votes = 3;
        candidates[0].votes = 1;
        assert_eq!(winner(&candidates, center()), Some(1));
    }

    #[test]
    fn winner_vote_tie_breaks_by_centering() {
        let candidates = vec![candidate([100, 0, 100, 180]), candidate([300, 0, 300, 180])];
        // Both at zero votes; index 1 is closer to center x=320.
        assert_eq!(winner(&candidates, center()), Some(1));
    }

    #[test]
    fn empty_side_has_no_winner() {
        assert_eq!(winner(&[], center()), None);
    }
}
