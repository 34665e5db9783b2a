use super::coordinator::DndId;
use super::geometry::Rect;

/// Picks the droppable whose corners are, on average, nearest to the
/// corners of the dragged rect. A tie for the minimum picks nothing.
pub fn closest_corners(dragged: &Rect, droppables: &[(DndId, Rect)]) -> Option<DndId> {
    let dragged_corners = dragged.corners();

    let mut best: Option<(&DndId, f64)> = None;
    let mut tied = false;

    for (id, rect) in droppables {
        let distance = rect
            .corners()
            .iter()
            .zip(dragged_corners.iter())
            .map(|(a, b)| a.distance_to(*b))
            .sum::<f64>()
            / 4.0;

        match best {
            Some((_, best_distance)) if distance > best_distance => {}
            Some((_, best_distance)) if distance == best_distance => tied = true,
            _ => {
                best = Some((id, distance));
                tied = false;
            }
        }
    }

    match best {
        Some((id, _)) if !tied => Some(id.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JobId, JobStatus};

    fn columns() -> Vec<(DndId, Rect)> {
        vec![
            (DndId::Column(JobStatus::Applied), Rect::new(0.0, 0.0, 280.0, 600.0)),
            (DndId::Column(JobStatus::Interviewing), Rect::new(300.0, 0.0, 280.0, 600.0)),
        ]
    }

    #[test]
    fn no_droppables_means_no_target() {
        assert_eq!(closest_corners(&Rect::new(0.0, 0.0, 10.0, 10.0), &[]), None);
    }

    #[test]
    fn picks_nearest_column() {
        let card = Rect::new(310.0, 20.0, 260.0, 80.0);
        assert_eq!(
            closest_corners(&card, &columns()),
            Some(DndId::Column(JobStatus::Interviewing))
        );
    }

    #[test]
    fn card_sized_target_beats_its_column() {
        let mut droppables = columns();
        droppables.push((DndId::Job(JobId::new("2")), Rect::new(312.0, 48.0, 256.0, 80.0)));
        let dragged = Rect::new(314.0, 52.0, 256.0, 80.0);
        assert_eq!(closest_corners(&dragged, &droppables), Some(DndId::Job(JobId::new("2"))));
    }

    #[test]
    fn exact_tie_yields_nothing() {
        let droppables = vec![
            (DndId::Column(JobStatus::Offer), Rect::new(0.0, 0.0, 100.0, 100.0)),
            (DndId::Column(JobStatus::Rejected), Rect::new(200.0, 0.0, 100.0, 100.0)),
        ];
        let dragged = Rect::new(100.0, 0.0, 100.0, 100.0);
        assert_eq!(closest_corners(&dragged, &droppables), None);
    }
}
