use nalgebra as na;
use num_traits::Float;

/// Strict counter-clockwise test: whether `r` lies counter-clockwise from
/// segment `p`→`q`. Collinear points are not counter-clockwise.
#[inline]
pub fn ccw<T: na::RealField + Float>(
    p: na::Point2<T>,
    q: na::Point2<T>,
    r: na::Point2<T>,
) -> bool {
    (r.y - p.y) * (q.x - p.x) > (q.y - p.y) * (r.x - p.x)
}

/// Whether segment `s`→`e` and segment `a`→`b` intersect. Exact collinear
/// overlap counts as no intersection (follows from the strict ccw test).
#[inline]
pub fn segments_intersect<T: na::RealField + Float>(
    s: na::Point2<T>,
    e: na::Point2<T>,
    a: na::Point2<T>,
    b: na::Point2<T>,
) -> bool {
    ccw(s, a, b) != ccw(e, a, b) && ccw(s, e, a) != ccw(s, e, b)
}

/// Signed cross product between `s`→`e` and `a`→`b`: positive when `b` is
/// left of `s`→`e` travelling `a`→`b`, negative on the right, zero when
/// parallel.
#[inline]
pub fn side<T: na::RealField + Float>(
    s: na::Point2<T>,
    e: na::Point2<T>,
    a: na::Point2<T>,
    b: na::Point2<T>,
) -> T {
    (b.x - a.x) * (e.y - s.y) - (b.y - a.y) * (e.x - s.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> na::Point2<f32> {
        na::Point2::new(x, y)
    }

    #[test]
    fn collinear_is_not_ccw() {
        assert!(!ccw(p(0.0, 0.0), p(5.0, 5.0), p(10.0, 10.0)));
        assert!(!ccw(p(0.0, 0.0), p(10.0, 0.0), p(3.0, 0.0)));
        assert!(!ccw(p(1.0, 1.0), p(1.0, 1.0), p(1.0, 1.0)));
    }

    #[test]
    fn ccw_depends_on_which_side() {
        assert!(ccw(p(0.0, 0.0), p(10.0, 0.0), p(5.0, 5.0)));
        assert!(!ccw(p(0.0, 0.0), p(10.0, 0.0), p(5.0, -5.0)));
    }

    #[test]
    fn crossing_segments_intersect() {
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(5.0, -1.0),
            p(5.0, 1.0)
        ));
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(10.0, 10.0),
            p(0.0, 10.0),
            p(10.0, 0.0)
        ));
    }

    #[test]
    fn disjoint_segments_do_not_intersect() {
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(20.0, -1.0),
            p(20.0, 1.0)
        ));
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(2.0, 1.0),
            p(8.0, 3.0)
        ));
    }

    #[test]
    fn intersection_is_symmetric_in_the_moving_pair() {
        let (s, e) = (p(0.0, 0.0), p(10.0, 0.0));
        let cases = [
            (p(5.0, -1.0), p(5.0, 1.0)),
            (p(5.0, 1.0), p(5.0, -1.0)),
            (p(2.0, 3.0), p(8.0, -4.0)),
            (p(-3.0, -3.0), p(12.0, 7.0)),
            (p(1.0, 2.0), p(9.0, 2.0)),
            (p(5.0, 0.0), p(5.0, 2.0)),
        ];

        for (a, b) in cases {
            assert_eq!(
                segments_intersect(s, e, a, b),
                segments_intersect(s, e, b, a)
            );
        }
    }

    #[test]
    fn touching_endpoint_is_not_a_crossing() {
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(5.0, -2.0),
            p(5.0, 0.0)
        ));
    }

    #[test]
    fn collinear_overlap_is_not_a_crossing() {
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(2.0, 0.0),
            p(8.0, 0.0)
        ));
    }

    #[test]
    fn side_sign_follows_travel_direction() {
        let (s, e) = (p(0.0, 0.0), p(10.0, 0.0));

        assert!(side(s, e, p(5.0, 1.0), p(5.0, -1.0)) > 0.0);
        assert!(side(s, e, p(5.0, -1.0), p(5.0, 1.0)) < 0.0);
        assert_eq!(side(s, e, p(0.0, 1.0), p(10.0, 1.0)), 0.0);
    }
}
