//! Collision response: wall reflection and ball-ball elastic impulses

use glam::Vec2;

use super::particle::Particle;

/// Which walls a particle crossed this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    pub x: bool,
    pub y: bool,
}

impl WallHit {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Axes on which a particle's extent lies past the canvas edge
pub fn outside_walls(p: &Particle, bounds: Vec2) -> WallHit {
    let r = p.radius();
    WallHit {
        x: p.pos.x + r > bounds.x || p.pos.x - r < 0.0,
        y: p.pos.y + r > bounds.y || p.pos.y - r < 0.0,
    }
}

/// Flip velocity components that carry the ball further past a wall.
///
/// Axes are independent, so a corner hit flips both. A component already
/// heading back inside is left alone. Position is not touched: a ball that
/// crossed a wall stays there for this frame.
pub fn bounce_off_walls(p: &mut Particle, bounds: Vec2) -> WallHit {
    let r = p.radius();
    let hit = WallHit {
        x: (p.pos.x + r > bounds.x && p.vel.x > 0.0) || (p.pos.x - r < 0.0 && p.vel.x < 0.0),
        y: (p.pos.y + r > bounds.y && p.vel.y > 0.0) || (p.pos.y - r < 0.0 && p.vel.y < 0.0),
    };
    if hit.x {
        p.vel.x = -p.vel.x;
    }
    if hit.y {
        p.vel.y = -p.vel.y;
    }
    hit
}

/// Move the center back so the whole disc is inside the canvas.
///
/// Returns `true` if the position changed.
pub fn pull_inside(p: &mut Particle, bounds: Vec2) -> bool {
    let r = p.radius();
    let clamped = p.pos.clamp(Vec2::splat(r), bounds - Vec2::splat(r));
    let moved = clamped != p.pos;
    p.pos = clamped;
    moved
}

/// Exchange normal momentum between two balls, radius acting as mass.
///
/// Velocities are split along the line of centers (normal) and its
/// perpendicular (tangent). Normal components go through the 1D elastic
/// collision formula; tangent components pass through untouched.
///
/// Positions are not separated. Returns `false` without touching either ball
/// when the centers coincide and no normal exists.
pub fn resolve_elastic(a: &mut Particle, b: &mut Particle) -> bool {
    let Some(normal) = (b.pos - a.pos).try_normalize() else {
        log::warn!("Skipping collision between coincident balls at {}", a.pos);
        return false;
    };
    let tangent = normal.perp();

    let (r1, r2) = (a.radius(), b.radius());

    let v1n = a.vel.dot(normal);
    let v1t = a.vel.dot(tangent);
    let v2n = b.vel.dot(normal);
    let v2t = b.vel.dot(tangent);

    let new_v1n = (v1n * (r1 - r2) + 2.0 * r2 * v2n) / (r1 + r2);
    let new_v2n = (v2n * (r2 - r1) + 2.0 * r1 * v1n) / (r1 + r2);

    a.vel = new_v1n * normal + v1t * tangent;
    b.vel = new_v2n * normal + v2t * tangent;
    true
}

/// Mutable references to two distinct elements of a slice
///
/// Panics if `i == j` or either index is out of bounds.
pub fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    assert_ne!(i, j, "pair_mut needs distinct indices");
    if i < j {
        let (head, tail) = items.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PALETTE;
    use proptest::prelude::*;

    const EPS: f32 = 1e-4;

    fn ball(pos: (f32, f32), vel: (f32, f32), radius: f32) -> Particle {
        Particle::new(pos.into(), vel.into(), radius, PALETTE[0])
    }

    fn approx(a: Vec2, b: Vec2, tol: f32) -> bool {
        (a - b).abs().max_element() <= tol
    }

    #[test]
    fn test_head_on_equal_radii_swaps() {
        let mut a = ball((100.0, 100.0), (5.0, 0.0), 10.0);
        let mut b = ball((119.0, 100.0), (-5.0, 0.0), 10.0);
        assert!(a.overlaps(&b));

        assert!(resolve_elastic(&mut a, &mut b));
        assert!(approx(a.vel, Vec2::new(-5.0, 0.0), EPS));
        assert!(approx(b.vel, Vec2::new(5.0, 0.0), EPS));
        // Positions untouched
        assert_eq!(a.pos, Vec2::new(100.0, 100.0));
        assert_eq!(b.pos, Vec2::new(119.0, 100.0));
    }

    #[test]
    fn test_tangent_component_preserved() {
        // Line of centers is vertical; horizontal motion is tangential
        let mut a = ball((50.0, 50.0), (3.0, 2.0), 10.0);
        let mut b = ball((50.0, 65.0), (-1.0, -4.0), 10.0);
        resolve_elastic(&mut a, &mut b);

        assert!(approx(a.vel, Vec2::new(3.0, -4.0), EPS));
        assert!(approx(b.vel, Vec2::new(-1.0, 2.0), EPS));
    }

    #[test]
    fn test_heavier_ball_barely_slows() {
        // Big ball into a resting small one
        let mut big = ball((0.0, 0.0), (4.0, 0.0), 30.0);
        let mut small = ball((35.0, 0.0), (0.0, 0.0), 10.0);
        resolve_elastic(&mut big, &mut small);

        // v1' = 4 * 20/40 = 2, v2' = 2*30*4/40 = 6
        assert!(approx(big.vel, Vec2::new(2.0, 0.0), EPS));
        assert!(approx(small.vel, Vec2::new(6.0, 0.0), EPS));
    }

    #[test]
    fn test_coincident_centers_skipped() {
        let mut a = ball((10.0, 10.0), (1.0, 2.0), 5.0);
        let mut b = ball((10.0, 10.0), (-3.0, 0.5), 5.0);
        assert!(!resolve_elastic(&mut a, &mut b));
        assert_eq!(a.vel, Vec2::new(1.0, 2.0));
        assert_eq!(b.vel, Vec2::new(-3.0, 0.5));
    }

    #[test]
    fn test_bounce_right_wall() {
        let mut p = ball((1395.0, 300.0), (10.0, 3.0), 10.0);
        let hit = bounce_off_walls(&mut p, Vec2::new(1400.0, 700.0));
        assert_eq!(hit, WallHit { x: true, y: false });
        assert_eq!(p.vel, Vec2::new(-10.0, 3.0));
        assert_eq!(p.pos, Vec2::new(1395.0, 300.0));
    }

    #[test]
    fn test_bounce_corner_flips_both() {
        let mut p = ball((5.0, 695.0), (-2.0, 2.0), 10.0);
        let hit = bounce_off_walls(&mut p, Vec2::new(1400.0, 700.0));
        assert!(hit.x && hit.y);
        assert_eq!(p.vel, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_no_bounce_inside() {
        let mut p = ball((700.0, 350.0), (2.0, 2.0), 10.0);
        let hit = bounce_off_walls(&mut p, Vec2::new(1400.0, 700.0));
        assert!(!hit.any());
        assert_eq!(p.vel, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_no_flip_when_already_heading_inside() {
        // Past the right wall but moving left: flipping would send it back out
        let mut p = ball((1405.0, 300.0), (-3.0, 4.0), 10.0);
        let hit = bounce_off_walls(&mut p, Vec2::new(1400.0, 700.0));
        assert!(!hit.any());
        assert_eq!(p.vel, Vec2::new(-3.0, 4.0));

        let mut p = ball((300.0, -2.0), (1.0, 2.0), 10.0);
        assert!(!bounce_off_walls(&mut p, Vec2::new(1400.0, 700.0)).any());
        assert_eq!(p.vel, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_outside_walls() {
        let bounds = Vec2::new(1400.0, 700.0);
        assert_eq!(
            outside_walls(&ball((1395.0, 300.0), (-1.0, 0.0), 10.0), bounds),
            WallHit { x: true, y: false }
        );
        assert!(!outside_walls(&ball((1390.0, 690.0), (0.0, 0.0), 10.0), bounds).any());
    }

    #[test]
    fn test_pull_inside() {
        let bounds = Vec2::new(1400.0, 700.0);
        let mut p = ball((1420.0, -5.0), (-2.0, 3.0), 10.0);
        assert!(pull_inside(&mut p, bounds));
        assert_eq!(p.pos, Vec2::new(1390.0, 10.0));
        assert_eq!(p.vel, Vec2::new(-2.0, 3.0));

        let mut p = ball((500.0, 500.0), (0.0, 0.0), 10.0);
        assert!(!pull_inside(&mut p, bounds));
        assert_eq!(p.pos, Vec2::new(500.0, 500.0));
    }

    #[test]
    fn test_touching_wall_is_not_a_hit() {
        let mut p = ball((1390.0, 10.0), (1.0, -1.0), 10.0);
        assert!(!bounce_off_walls(&mut p, Vec2::new(1400.0, 700.0)).any());
    }

    #[test]
    fn test_pair_mut() {
        let mut v = [1, 2, 3, 4];
        let (a, b) = pair_mut(&mut v, 3, 1);
        assert_eq!((*a, *b), (4, 2));
        std::mem::swap(a, b);
        assert_eq!(v, [1, 4, 3, 2]);

        let (a, b) = pair_mut(&mut v, 0, 2);
        assert_eq!((*a, *b), (1, 3));
    }

    #[test]
    #[should_panic]
    fn test_pair_mut_same_index_panics() {
        let mut v = [1, 2];
        let _ = pair_mut(&mut v, 1, 1);
    }

    fn arb_ball() -> impl Strategy<Value = Particle> {
        (
            -100.0f32..100.0,
            -100.0f32..100.0,
            -20.0f32..20.0,
            -20.0f32..20.0,
            1.0f32..30.0,
        )
            .prop_map(|(x, y, vx, vy, r)| ball((x, y), (vx, vy), r))
    }

    proptest! {
        #[test]
        fn prop_resolve_is_symmetric(a in arb_ball(), b in arb_ball()) {
            prop_assume!(a.pos.distance(b.pos) > 0.1);

            let (mut a1, mut b1) = (a.clone(), b.clone());
            resolve_elastic(&mut a1, &mut b1);

            let (mut a2, mut b2) = (a.clone(), b.clone());
            resolve_elastic(&mut b2, &mut a2);

            prop_assert!(approx(a1.vel, a2.vel, 1e-2));
            prop_assert!(approx(b1.vel, b2.vel, 1e-2));
        }

        #[test]
        fn prop_resolve_conserves_momentum_and_energy(a in arb_ball(), b in arb_ball()) {
            prop_assume!(a.pos.distance(b.pos) > 0.1);

            let p0 = a.momentum() + b.momentum();
            let e0 = a.kinetic_energy() + b.kinetic_energy();

            let (mut a, mut b) = (a, b);
            resolve_elastic(&mut a, &mut b);

            let p1 = a.momentum() + b.momentum();
            let e1 = a.kinetic_energy() + b.kinetic_energy();

            prop_assert!(approx(p0, p1, 0.05));
            prop_assert!((e0 - e1).abs() <= 1e-3 * e0.max(1.0));
        }

        #[test]
        fn prop_equal_radii_swap_normal_components(a in arb_ball(), b in arb_ball()) {
            prop_assume!(a.pos.distance(b.pos) > 0.1);

            let mut b = Particle::new(b.pos, b.vel, a.radius(), b.color());
            let mut a = a;
            let n = (b.pos - a.pos).normalize();
            let (v1n, v2n) = (a.vel.dot(n), b.vel.dot(n));

            resolve_elastic(&mut a, &mut b);

            prop_assert!((a.vel.dot(n) - v2n).abs() < 1e-3);
            prop_assert!((b.vel.dot(n) - v1n).abs() < 1e-3);
        }
    }
}
