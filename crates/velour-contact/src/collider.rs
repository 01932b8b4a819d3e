//! Proxy collision — point-radius push-out with velocity reflection.

use velour_body::{CollisionProxy, Particle};
use velour_math::Vec3;
use velour_types::Scalar;

use crate::response::ContactReport;

/// Resolves every free particle against a list of collision proxies.
///
/// A particle inside a proxy's radius is pushed to the surface along
/// the separating normal; the inbound velocity component is reflected
/// and scaled by `restitution`, tangential velocity is scaled down by
/// the friction coefficient. The previous position is rewritten so the
/// implicit Verlet velocity matches the reflected one.
///
/// A particle exactly at a proxy center has no separating direction;
/// it is pushed straight up by the radius with its velocity dropped.
pub fn resolve_proxies(
    particles: &mut [Particle],
    proxies: &[CollisionProxy],
    restitution: Scalar,
    friction: Scalar,
    dt: Scalar,
) -> ContactReport {
    let mut report = ContactReport::default();

    for particle in particles.iter_mut() {
        if particle.fixed {
            continue;
        }

        for proxy in proxies {
            let offset = particle.position - proxy.position;
            let dist_sq = offset.length_squared();
            let r_sq = proxy.radius * proxy.radius;

            if dist_sq >= r_sq {
                continue;
            }

            if dist_sq > 1e-12 {
                let dist = dist_sq.sqrt();
                let depth = proxy.radius - dist;
                let normal = offset / dist;

                particle.position += normal * depth;

                let inbound = particle.velocity.dot(normal);
                if inbound < 0.0 {
                    let normal_vel = normal * inbound;
                    let tangent_vel = particle.velocity - normal_vel;
                    particle.velocity =
                        tangent_vel * (1.0 - friction * 0.5) - normal_vel * restitution;
                }

                report.resolved_count += 1;
                report.max_penetration = report.max_penetration.max(depth);
            } else {
                // Exactly at the center: no direction to separate
                // along, push up and drop the velocity.
                particle.position.y += proxy.radius;
                particle.velocity = Vec3::ZERO;

                report.resolved_count += 1;
                report.max_penetration = report.max_penetration.max(proxy.radius);
            }

            // Keep the implicit Verlet velocity consistent with the
            // corrected one so the next step does not re-penetrate.
            particle.previous_position = particle.position - particle.velocity * dt;
        }
    }

    report
}
