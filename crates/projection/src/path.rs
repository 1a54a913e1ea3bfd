use foundation::math::{GeoPoint, Vec2};

use crate::projector::Projector;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    Close,
}

/// Screen-space path of one feature: a flat command list, one subpath per
/// visible vertex run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeaturePath {
    pub commands: Vec<PathCommand>,
}

impl FeaturePath {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count()
    }
}

/// Computes the screen path for a set of rings under `projector`.
///
/// Vertices the projection hides (far hemisphere in orthographic mode) are
/// omitted; a hidden vertex ends the current subpath and the next visible
/// vertex starts a new one. Each subpath is closed so fills work.
pub fn path_for<'a, I>(projector: &Projector, rings: I) -> FeaturePath
where
    I: IntoIterator<Item = &'a [GeoPoint]>,
{
    let mut path = FeaturePath::default();

    for ring in rings {
        let mut in_subpath = false;
        for point in ring {
            match projector.project(point.lon_deg, point.lat_deg) {
                Some(screen) => {
                    if in_subpath {
                        path.commands.push(PathCommand::LineTo(screen));
                    } else {
                        path.commands.push(PathCommand::MoveTo(screen));
                        in_subpath = true;
                    }
                }
                None => {
                    if in_subpath {
                        path.commands.push(PathCommand::Close);
                        in_subpath = false;
                    }
                }
            }
        }
        if in_subpath {
            path.commands.push(PathCommand::Close);
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use super::{PathCommand, path_for};
    use crate::projector::{ProjectionMode, Projector};
    use foundation::math::{GeoPoint, Vec2};

    fn square(lon0: f64, lat0: f64, size: f64) -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(lon0, lat0),
            GeoPoint::new(lon0 + size, lat0),
            GeoPoint::new(lon0 + size, lat0 + size),
            GeoPoint::new(lon0, lat0 + size),
            GeoPoint::new(lon0, lat0),
        ]
    }

    #[test]
    fn fully_visible_ring_is_one_closed_subpath() {
        let p = Projector::configure(
            ProjectionMode::Orthographic,
            200.0,
            [0.0, 0.0],
            Vec2::new(0.0, 0.0),
        );
        let ring = square(-5.0, -5.0, 10.0);
        let path = path_for(&p, [ring.as_slice()]);
        assert_eq!(path.subpath_count(), 1);
        assert_eq!(path.commands.len(), ring.len() + 1);
        assert!(matches!(path.commands[0], PathCommand::MoveTo(_)));
        assert!(matches!(path.commands.last(), Some(PathCommand::Close)));
    }

    #[test]
    fn far_hemisphere_ring_is_empty() {
        let p = Projector::configure(
            ProjectionMode::Orthographic,
            200.0,
            [0.0, 0.0],
            Vec2::new(0.0, 0.0),
        );
        let ring = square(175.0, -5.0, 10.0);
        let path = path_for(&p, [ring.as_slice()]);
        assert!(path.is_empty());
    }

    #[test]
    fn hidden_vertex_splits_the_subpath() {
        let p = Projector::configure(
            ProjectionMode::Orthographic,
            200.0,
            [0.0, 0.0],
            Vec2::new(0.0, 0.0),
        );
        // Visible, hidden, visible: two subpaths.
        let ring = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(10.0, 0.0),
            GeoPoint::new(180.0, 0.0),
            GeoPoint::new(-10.0, 0.0),
            GeoPoint::new(0.0, 0.0),
        ];
        let path = path_for(&p, [ring.as_slice()]);
        assert_eq!(path.subpath_count(), 2);
        let closes = path
            .commands
            .iter()
            .filter(|c| matches!(c, PathCommand::Close))
            .count();
        assert_eq!(closes, 2);
    }

    #[test]
    fn equirectangular_keeps_every_vertex() {
        let p = Projector::configure(
            ProjectionMode::Equirectangular,
            100.0,
            [0.0, 0.0],
            Vec2::new(0.0, 0.0),
        );
        let near = square(-5.0, -5.0, 10.0);
        let far = square(170.0, -5.0, 9.0);
        let path = path_for(&p, [near.as_slice(), far.as_slice()]);
        assert_eq!(path.subpath_count(), 2);
        assert_eq!(path.commands.len(), near.len() + far.len() + 2);
    }
}
